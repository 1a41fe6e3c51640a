use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint256};

use crate::evm::{EvmAddress, TxHash};

pub const DEFAULT_CHAIN_ID: u64 = 789_789_789;
pub const DEFAULT_TOKEN_MINT: &str = "NOVA_token_mint";

#[cw_serde]
pub struct TerranovaConfig {
    pub owner: Addr,
    pub operators: Vec<Addr>,
    /// The NOVA token used for EVM balances
    pub token_mint: Addr,
    pub chain_id: u64,
}

impl TerranovaConfig {
    pub fn is_operator(&self, sender: &Addr) -> bool {
        *sender == self.owner || self.operators.contains(sender)
    }
}

#[cw_serde]
pub struct EvmAccount {
    pub address: EvmAddress,
    pub nonce: u64,
    pub balance: Uint256,
    /// Runtime bytecode, empty for user accounts
    pub code: Binary,
}

impl EvmAccount {
    pub fn new_user_account(address: EvmAddress) -> Self {
        Self {
            address,
            nonce: 0,
            balance: Uint256::zero(),
            code: Binary::default(),
        }
    }

    pub fn is_contract(&self) -> bool {
        !self.code.is_empty()
    }
}

#[cw_serde]
pub struct TerranovaInstantiateMsg {
    pub operators: Vec<Addr>,
    pub token_mint: Option<Addr>,
    pub chain_id: Option<u64>,
}

#[cw_serde]
pub struct TerranovaMigrateMsg {
    pub token_mint: Option<Addr>,
    pub chain_id: Option<u64>,
}

#[cw_serde]
pub enum TerranovaExecuteMsg {
    CreateAccount {
        eth_address: EvmAddress,
        /// Empty for user accounts
        contract_byte_code: Binary,
    },
    CallFromRawEthereumTx {
        caller_evm_address: EvmAddress,
        /// RLP encoded unsigned transaction
        unsigned_tx: Binary,
    },
    StoreTxChunk {
        caller_evm_address: EvmAddress,
        full_tx_hash: TxHash,
        chunk_index: u8,
        chunk_data: Binary,
    },
    ExecuteChunkedEthereumTx {
        caller_evm_address: EvmAddress,
        full_tx_hash: TxHash,
        chunk_count: u8,
    },
    Airdrop {
        eth_address: EvmAddress,
        amount: Uint256,
    },
    UpdateOperators {
        add: Vec<Addr>,
        remove: Vec<Addr>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum TerranovaQueryMsg {
    #[returns(TerranovaConfig)]
    Config {},
    #[returns(EvmAccountResponse)]
    EvmAccount { address: EvmAddress },
    #[returns(Binary)]
    ContractCode { address: EvmAddress },
    #[returns(Option<Binary>)]
    TxChunk {
        caller_evm_address: EvmAddress,
        full_tx_hash: TxHash,
        chunk_index: u8,
    },
    /// Runs the same checks as `call_from_raw_ethereum_tx` without writing
    /// any state.
    #[returns(RawEthereumQueryResponse)]
    RawEthereumQuery {
        caller_evm_address: EvmAddress,
        unsigned_tx: Binary,
    },
}

#[cw_serde]
pub struct RawEthereumQueryResponse {
    /// Return data of the call, always empty for value transfers
    pub result: Binary,
}

#[cw_serde]
pub struct EvmAccountResponse {
    pub address: EvmAddress,
    pub nonce: u64,
    pub balance: Uint256,
    pub is_contract: bool,
    pub code_size: u64,
}

impl From<EvmAccount> for EvmAccountResponse {
    fn from(account: EvmAccount) -> Self {
        Self {
            address: account.address,
            nonce: account.nonce,
            balance: account.balance,
            is_contract: account.is_contract(),
            code_size: account.code.len() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::to_json_string;

    #[test]
    fn raw_transaction_message_uses_snake_case_tag() {
        let msg = TerranovaExecuteMsg::CallFromRawEthereumTx {
            caller_evm_address: EvmAddress::new([0x01; 20]),
            unsigned_tx: Binary::from(vec![0xc0]),
        };

        assert_eq!(
            to_json_string(&msg).unwrap(),
            format!(
                "{{\"call_from_raw_ethereum_tx\":{{\"caller_evm_address\":\"0x{}\",\"unsigned_tx\":\"wA==\"}}}}",
                "01".repeat(20)
            )
        );
    }

    #[test]
    fn owner_counts_as_operator() {
        let config = TerranovaConfig {
            owner: Addr::unchecked("owner"),
            operators: vec![Addr::unchecked("relayer")],
            token_mint: Addr::unchecked(DEFAULT_TOKEN_MINT),
            chain_id: DEFAULT_CHAIN_ID,
        };

        assert!(config.is_operator(&Addr::unchecked("owner")));
        assert!(config.is_operator(&Addr::unchecked("relayer")));
        assert!(!config.is_operator(&Addr::unchecked("stranger")));
    }
}
