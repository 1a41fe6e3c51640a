use cosmwasm_std::{OverflowError, Response, StdError};
use cw_utils::PaymentError;
use thiserror::Error;

use crate::{
    evm::{EvmAddress, TxHash},
    rlp::RlpError,
};

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Account {0} has insufficient funds for the transfer")]
    InsufficientFunds(EvmAddress),

    #[error("Balance of account {0} overflowed")]
    BalanceOverflow(EvmAddress),

    #[error("Nonce of account {0} overflowed")]
    NonceOverflow(EvmAddress),

    #[error("The unsigned transaction is invalid: {0}")]
    InvalidTransactionData(#[from] RlpError),

    #[error("Transaction chain id {got} does not match {expected}")]
    InvalidChainId { expected: u64, got: u64 },

    #[error("Account {0} already exists")]
    AccountAlreadyExists(EvmAddress),

    #[error("Contract creation transactions are not supported")]
    ContractCreationUnsupported,

    #[error("Account {0} holds bytecode and cannot be called")]
    BytecodeExecutionUnsupported(EvmAddress),

    #[error("Transaction chunk {index} of {tx_hash} is missing")]
    TxChunksMissing { tx_hash: TxHash, index: u8 },
}

impl ContractError {
    pub fn generic_err(msg: impl Into<String>) -> Self {
        ContractError::Std(StdError::generic_err(msg.into()))
    }
}

pub type ContractResult = Result<Response, ContractError>;
