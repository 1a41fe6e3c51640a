use cosmwasm_std::Binary;

use crate::{
    client::{Client, LibConfig, Refs, Wallet, Wallets},
    counter::{CounterQueryMsg, GetCountResponse},
    evm::EvmAddress,
    terranova::TerranovaExecuteMsg,
};

pub struct LibEnv<C: Client> {
    pub wallets: Wallets,
    pub refs: Refs,
    pub config: LibConfig,
    pub client: C,
}

/// Forwards calls to the client without adding validation, retries or
/// error translation. Contract names are resolved against `refs` by the
/// client, so the lib only carries them for callers.
pub struct TerranovaLib<C: Client> {
    wallets: Wallets,
    refs: Refs,
    config: LibConfig,
    client: C,
}

impl<C: Client> TerranovaLib<C> {
    pub fn new(env: LibEnv<C>) -> Self {
        Self {
            wallets: env.wallets,
            refs: env.refs,
            config: env.config,
            client: env.client,
        }
    }

    pub fn get_count(&self) -> Result<GetCountResponse, C::Error> {
        self.client
            .query(&self.config.counter_contract, &CounterQueryMsg::GetCount {})
    }

    /// Submits a raw unsigned EVM transaction, signed by the validator wallet
    /// unless another signer is given.
    pub fn send_tx(
        &mut self,
        caller_evm_address: EvmAddress,
        unsigned_tx: Binary,
        signer: Option<&Wallet>,
    ) -> Result<C::Response, C::Error> {
        let signer = signer.unwrap_or(&self.wallets.validator);

        self.client.execute(
            signer,
            &self.config.terranova_contract,
            &TerranovaExecuteMsg::CallFromRawEthereumTx {
                caller_evm_address,
                unsigned_tx,
            },
        )
    }

    pub fn wallets(&self) -> &Wallets {
        &self.wallets
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn client_mut(&mut self) -> &mut C {
        &mut self.client
    }

    pub fn into_client(self) -> C {
        self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::VALIDATOR_WALLET,
        mock::{MockCall, MockClient},
    };
    use cosmwasm_std::{Addr, StdError};

    fn lib_with(client: MockClient) -> TerranovaLib<MockClient> {
        TerranovaLib::new(LibEnv {
            wallets: Wallets::new(Wallet::new(VALIDATOR_WALLET, Addr::unchecked("validator")))
                .with(Wallet::new("alice", Addr::unchecked("alice"))),
            refs: Refs::default(),
            config: LibConfig::default(),
            client,
        })
    }

    fn caller() -> EvmAddress {
        "0xb34e2213751c5d8e9a31355fca6f1b4fa5bb6be1".parse().unwrap()
    }

    fn expected_tx_msg(tx: &str) -> String {
        format!(
            "{{\"call_from_raw_ethereum_tx\":{{\"caller_evm_address\":\"{}\",\"unsigned_tx\":\"{}\"}}}}",
            caller(),
            tx
        )
    }

    #[test]
    fn get_count_queries_counter_once() {
        let lib = lib_with(MockClient::new().with_query_response(&GetCountResponse { count: 7 }));

        let response = lib.get_count().unwrap();

        assert_eq!(response, GetCountResponse { count: 7 });
        assert_eq!(
            lib.client().calls(),
            vec![MockCall::Query {
                contract: "counter".to_string(),
                msg: "{\"get_count\":{}}".to_string(),
            }]
        );
    }

    #[test]
    fn get_count_returns_client_error_unchanged() {
        let lib = lib_with(MockClient::new().with_query_error("node unreachable"));

        assert_eq!(
            lib.get_count().unwrap_err(),
            StdError::generic_err("node unreachable")
        );
    }

    #[test]
    fn send_tx_defaults_to_validator_signer() {
        let mut lib = lib_with(
            MockClient::new().with_execute_response(Ok(Binary::from(b"tx-result".to_vec()))),
        );

        let response = lib
            .send_tx(caller(), Binary::from(vec![0xc0]), None)
            .unwrap();

        assert_eq!(response, Binary::from(b"tx-result".to_vec()));
        assert_eq!(
            lib.client().calls(),
            vec![MockCall::Execute {
                signer: Wallet::new(VALIDATOR_WALLET, Addr::unchecked("validator")),
                contract: "terranova".to_string(),
                msg: expected_tx_msg("wA=="),
            }]
        );
    }

    #[test]
    fn send_tx_uses_given_signer() {
        let mut lib = lib_with(MockClient::new());
        let alice = lib.wallets().get("alice").cloned().unwrap();

        lib.send_tx(caller(), Binary::from(vec![0xc0]), Some(&alice))
            .unwrap();

        assert_eq!(
            lib.client().calls(),
            vec![MockCall::Execute {
                signer: alice,
                contract: "terranova".to_string(),
                msg: expected_tx_msg("wA=="),
            }]
        );
    }

    #[test]
    fn send_tx_returns_client_error_unchanged() {
        let mut lib = lib_with(
            MockClient::new().with_execute_response(Err(StdError::generic_err("out of gas"))),
        );

        assert_eq!(
            lib.send_tx(caller(), Binary::from(vec![0xc0]), None)
                .unwrap_err(),
            StdError::generic_err("out of gas")
        );
    }
}
