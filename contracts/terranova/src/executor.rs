use cosmwasm_std::{to_json_binary, Binary, Response, Storage, Uint256};
use terranova_rs::{
    core::{ContractError, ContractResult},
    events::DomainEvent,
    evm::EvmAddress,
    terranova::{EvmAccount, TerranovaConfig},
    transaction::UnsignedTransaction,
};

use crate::state::{load_account, save_account, ACCOUNTS};

/// Write access to persistent EVM account state.
pub struct EvmState<'a> {
    storage: &'a mut dyn Storage,
}

impl<'a> EvmState<'a> {
    pub fn new(storage: &'a mut dyn Storage) -> Self {
        Self { storage }
    }

    pub fn account(&self, address: EvmAddress) -> Result<EvmAccount, ContractError> {
        Ok(load_account(self.storage, address)?)
    }

    pub fn create_account(
        &mut self,
        address: EvmAddress,
        code: Binary,
    ) -> Result<EvmAccount, ContractError> {
        if ACCOUNTS.has(self.storage, address) {
            return Err(ContractError::AccountAlreadyExists(address));
        }

        let account = EvmAccount {
            code,
            ..EvmAccount::new_user_account(address)
        };

        save_account(self.storage, &account)?;
        Ok(account)
    }

    pub fn write_balance(&mut self, address: EvmAddress, balance: Uint256) -> Result<(), ContractError> {
        let account = self.account(address)?;
        save_account(self.storage, &EvmAccount { balance, ..account })?;
        Ok(())
    }

    /// Missing accounts on either side are created.
    pub fn transfer(
        &mut self,
        source: EvmAddress,
        target: EvmAddress,
        value: Uint256,
    ) -> Result<(), ContractError> {
        let source_account = self.account(source)?;
        let source_balance = source_account
            .balance
            .checked_sub(value)
            .map_err(|_| ContractError::InsufficientFunds(source))?;
        self.write_balance(source, source_balance)?;

        let target_account = self.account(target)?;
        let target_balance = target_account
            .balance
            .checked_add(value)
            .map_err(|_| ContractError::BalanceOverflow(target))?;
        self.write_balance(target, target_balance)
    }

    /// Returns the new nonce.
    pub fn increment_nonce(&mut self, address: EvmAddress) -> Result<u64, ContractError> {
        let account = self.account(address)?;
        let nonce = account
            .nonce
            .checked_add(1)
            .ok_or(ContractError::NonceOverflow(address))?;

        save_account(self.storage, &EvmAccount { nonce, ..account })?;
        Ok(nonce)
    }
}

/// A value transfer that passed every check against current state.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckedTransfer {
    pub from: EvmAddress,
    pub to: EvmAddress,
    pub value: Uint256,
}

/// Decodes an RLP encoded unsigned transaction and checks it against stored
/// accounts without writing anything.
///
/// Only value transfers between accounts are accepted. Contract creation and
/// calls into accounts holding bytecode are refused.
pub fn validate_raw_transaction(
    storage: &dyn Storage,
    config: &TerranovaConfig,
    caller: EvmAddress,
    unsigned_tx: &[u8],
) -> Result<CheckedTransfer, ContractError> {
    let trx = UnsignedTransaction::from_rlp(unsigned_tx)?;

    if let Some(chain_id) = trx.chain_id {
        if chain_id != config.chain_id {
            return Err(ContractError::InvalidChainId {
                expected: config.chain_id,
                got: chain_id,
            });
        }
    }

    let target = trx.to.ok_or(ContractError::ContractCreationUnsupported)?;
    let target_account = load_account(storage, target)?;

    if target_account.is_contract() {
        return Err(ContractError::BytecodeExecutionUnsupported(target));
    }

    let caller_account = load_account(storage, caller)?;

    if caller_account.balance < trx.value {
        return Err(ContractError::InsufficientFunds(caller));
    }

    if target != caller && target_account.balance.checked_add(trx.value).is_err() {
        return Err(ContractError::BalanceOverflow(target));
    }

    if caller_account.nonce == u64::MAX {
        return Err(ContractError::NonceOverflow(caller));
    }

    Ok(CheckedTransfer {
        from: caller,
        to: target,
        value: trx.value,
    })
}

/// Moves the value and increments the sender nonce. Gas is not charged.
/// The new nonce is returned as response data.
pub fn apply_transfer(storage: &mut dyn Storage, transfer: CheckedTransfer) -> ContractResult {
    let CheckedTransfer { from, to, value } = transfer;

    let mut state = EvmState::new(storage);
    state.transfer(from, to, value)?;
    let nonce = state.increment_nonce(from)?;

    Ok(Response::default()
        .add_attribute("action", "call")
        .add_attribute("from", from.to_string())
        .add_attribute("to", to.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_event(DomainEvent::TransactionExecuted {
            from,
            to,
            value,
            nonce,
        })
        .set_data(to_json_binary(&nonce)?))
}

/// Runs an RLP encoded unsigned transaction on behalf of `caller`.
pub fn execute_raw_transaction(
    storage: &mut dyn Storage,
    config: &TerranovaConfig,
    caller: EvmAddress,
    unsigned_tx: &[u8],
) -> ContractResult {
    let transfer = validate_raw_transaction(storage, config, caller, unsigned_tx)?;
    apply_transfer(storage, transfer)
}
