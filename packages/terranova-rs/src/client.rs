use std::collections::BTreeMap;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdError, StdResult};
use serde::{de::DeserializeOwned, Serialize};

pub const VALIDATOR_WALLET: &str = "validator";

/// A chain client able to run smart queries and signed executions against
/// contracts known by name.
pub trait Client {
    type Error;
    type Response;

    fn query<Q, T>(&self, contract: &str, msg: &Q) -> Result<T, Self::Error>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned;

    fn execute<M>(
        &mut self,
        signer: &Wallet,
        contract: &str,
        msg: &M,
    ) -> Result<Self::Response, Self::Error>
    where
        M: Serialize + ?Sized;
}

#[cw_serde]
pub struct Wallet {
    pub name: String,
    pub address: Addr,
}

impl Wallet {
    pub fn new(name: impl Into<String>, address: Addr) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

#[cw_serde]
pub struct Wallets {
    pub validator: Wallet,
    pub others: BTreeMap<String, Wallet>,
}

impl Wallets {
    pub fn new(validator: Wallet) -> Self {
        Self {
            validator,
            others: BTreeMap::new(),
        }
    }

    pub fn with(mut self, wallet: Wallet) -> Self {
        self.others.insert(wallet.name.clone(), wallet);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Wallet> {
        match name {
            VALIDATOR_WALLET => Some(&self.validator),
            _ => self.others.get(name),
        }
    }
}

/// Contract name to deployed address.
#[cw_serde]
#[derive(Default)]
pub struct Refs {
    pub contracts: BTreeMap<String, Addr>,
}

impl Refs {
    pub fn insert(&mut self, name: impl Into<String>, address: Addr) -> Option<Addr> {
        self.contracts.insert(name.into(), address)
    }

    pub fn address(&self, name: &str) -> Option<&Addr> {
        self.contracts.get(name)
    }

    pub fn require(&self, name: &str) -> StdResult<&Addr> {
        self.address(name)
            .ok_or_else(|| StdError::generic_err(format!("No contract reference for '{name}'")))
    }
}

#[cw_serde]
#[serde(default)]
pub struct LibConfig {
    pub counter_contract: String,
    pub terranova_contract: String,
}

impl Default for LibConfig {
    fn default() -> Self {
        Self {
            counter_contract: "counter".to_string(),
            terranova_contract: "terranova".to_string(),
        }
    }
}
