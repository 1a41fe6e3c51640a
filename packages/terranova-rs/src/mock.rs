use std::{cell::RefCell, collections::VecDeque};

use cosmwasm_std::{from_json, to_json_binary, to_json_string, Binary, StdError, StdResult};
use serde::{de::DeserializeOwned, Serialize};

use crate::client::{Client, Wallet};

#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Query {
        contract: String,
        msg: String,
    },
    Execute {
        signer: Wallet,
        contract: String,
        msg: String,
    },
}

/// Records every call and answers from queued responses.
#[derive(Default)]
pub struct MockClient {
    calls: RefCell<Vec<MockCall>>,
    query_responses: RefCell<VecDeque<StdResult<Binary>>>,
    execute_responses: VecDeque<StdResult<Binary>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query_response<T: Serialize>(self, response: &T) -> Self {
        self.query_responses
            .borrow_mut()
            .push_back(to_json_binary(response));
        self
    }

    pub fn with_execute_response(mut self, response: StdResult<Binary>) -> Self {
        self.execute_responses.push_back(response);
        self
    }

    pub fn with_query_error(self, msg: &str) -> Self {
        self.query_responses
            .borrow_mut()
            .push_back(Err(StdError::generic_err(msg)));
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.borrow().clone()
    }
}

impl Client for MockClient {
    type Error = StdError;
    type Response = Binary;

    fn query<Q, T>(&self, contract: &str, msg: &Q) -> StdResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.calls.borrow_mut().push(MockCall::Query {
            contract: contract.to_string(),
            msg: to_json_string(msg)?,
        });

        let response = self
            .query_responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(StdError::generic_err("No mock query response queued")))?;

        from_json(&response)
    }

    fn execute<M>(&mut self, signer: &Wallet, contract: &str, msg: &M) -> StdResult<Binary>
    where
        M: Serialize + ?Sized,
    {
        self.calls.borrow_mut().push(MockCall::Execute {
            signer: signer.clone(),
            contract: contract.to_string(),
            msg: to_json_string(msg)?,
        });

        self.execute_responses
            .pop_front()
            .unwrap_or_else(|| Ok(Binary::default()))
    }
}
