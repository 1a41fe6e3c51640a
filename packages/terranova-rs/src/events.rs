use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Event, Uint256};

use crate::evm::{EvmAddress, TxHash};

#[cw_serde]
pub enum DomainEvent {
    AccountCreated {
        address: EvmAddress,
        is_contract: bool,
    },
    TransactionExecuted {
        from: EvmAddress,
        to: EvmAddress,
        value: Uint256,
        nonce: u64,
    },
    TxChunkStored {
        caller: EvmAddress,
        tx_hash: TxHash,
        chunk_index: u8,
    },
    ChunkedTransactionAssembled {
        caller: EvmAddress,
        tx_hash: TxHash,
        chunk_count: u8,
        size: u64,
    },
    BalanceAirdropped {
        address: EvmAddress,
        amount: Uint256,
    },
    OperatorsUpdated {
        operators: Vec<Addr>,
    },
}

impl From<DomainEvent> for Event {
    fn from(event: DomainEvent) -> Self {
        match event {
            DomainEvent::AccountCreated {
                address,
                is_contract,
            } => Event::new("_account_created")
                .add_attribute("address", address.to_string())
                .add_attribute("is_contract", is_contract.to_string()),
            DomainEvent::TransactionExecuted {
                from,
                to,
                value,
                nonce,
            } => Event::new("_transaction_executed")
                .add_attribute("from", from.to_string())
                .add_attribute("to", to.to_string())
                .add_attribute("value", value.to_string())
                .add_attribute("nonce", nonce.to_string()),
            DomainEvent::TxChunkStored {
                caller,
                tx_hash,
                chunk_index,
            } => Event::new("_tx_chunk_stored")
                .add_attribute("caller", caller.to_string())
                .add_attribute("tx_hash", tx_hash.to_string())
                .add_attribute("chunk_index", chunk_index.to_string()),
            DomainEvent::ChunkedTransactionAssembled {
                caller,
                tx_hash,
                chunk_count,
                size,
            } => Event::new("_chunked_transaction_assembled")
                .add_attribute("caller", caller.to_string())
                .add_attribute("tx_hash", tx_hash.to_string())
                .add_attribute("chunk_count", chunk_count.to_string())
                .add_attribute("size", size.to_string()),
            DomainEvent::BalanceAirdropped { address, amount } => {
                Event::new("_balance_airdropped")
                    .add_attribute("address", address.to_string())
                    .add_attribute("amount", amount.to_string())
            }
            DomainEvent::OperatorsUpdated { operators } => Event::new("_operators_updated")
                .add_attribute(
                    "operators",
                    operators
                        .iter()
                        .map(Addr::as_str)
                        .collect::<Vec<_>>()
                        .join(","),
                ),
        }
    }
}
