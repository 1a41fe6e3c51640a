use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, QueryRequest, Uint256, WasmMsg, WasmQuery};
use cw_multi_test::{error::AnyResult, App, AppResponse, ContractWrapper, Executor};
use serde::{de::DeserializeOwned, Serialize};
use terranova_rs::{
    client::{Client, LibConfig, Refs, Wallet, Wallets, VALIDATOR_WALLET},
    counter::{CounterExecuteMsg, CounterInstantiateMsg},
    evm::EvmAddress,
    library::{LibEnv, TerranovaLib},
    terranova::{EvmAccountResponse, TerranovaExecuteMsg, TerranovaInstantiateMsg, TerranovaQueryMsg},
};

/// A multi-test chain with the counter and terranova contracts deployed.
///
/// The validator wallet owns terranova and is therefore also an operator.
pub struct TerranovaTestApp {
    pub app: App,
    pub refs: Refs,
    pub wallets: Wallets,
    pub admin: Addr,
}

impl TerranovaTestApp {
    pub fn setup() -> Self {
        let mut app = App::default();

        let counter_code_id = app.store_code(Box::new(ContractWrapper::new(
            counter::contract::execute,
            counter::contract::instantiate,
            counter::contract::query,
        )));

        let terranova_code_id = app.store_code(Box::new(
            ContractWrapper::new(
                terranova::contract::execute,
                terranova::contract::instantiate,
                terranova::contract::query,
            )
            .with_migrate(terranova::contract::migrate),
        ));

        let admin = app.api().addr_make("admin");
        let validator = Wallet::new(VALIDATOR_WALLET, app.api().addr_make("validator"));
        let alice = Wallet::new("alice", app.api().addr_make("alice"));

        let counter_addr = app
            .instantiate_contract(
                counter_code_id,
                admin.clone(),
                &CounterInstantiateMsg { count: 0 },
                &[],
                "counter",
                Some(admin.to_string()),
            )
            .unwrap();

        let terranova_addr = app
            .instantiate_contract(
                terranova_code_id,
                validator.address.clone(),
                &TerranovaInstantiateMsg {
                    operators: vec![],
                    token_mint: None,
                    chain_id: None,
                },
                &[],
                "terranova",
                Some(admin.to_string()),
            )
            .unwrap();

        println!("[TerranovaTestApp] counter: {counter_addr}, terranova: {terranova_addr}");

        let mut refs = Refs::default();
        refs.insert("counter", counter_addr);
        refs.insert("terranova", terranova_addr);

        Self {
            app,
            refs,
            wallets: Wallets::new(validator).with(alice),
            admin,
        }
    }

    pub fn into_lib(self) -> TerranovaLib<Self> {
        TerranovaLib::new(LibEnv {
            wallets: self.wallets.clone(),
            refs: self.refs.clone(),
            config: LibConfig::default(),
            client: self,
        })
    }

    pub fn wallet(&self, name: &str) -> Wallet {
        self.wallets.get(name).cloned().unwrap()
    }

    pub fn airdrop(&mut self, address: EvmAddress, amount: Uint256) -> AnyResult<AppResponse> {
        let validator = self.wallets.validator.clone();

        println!("[TerranovaTestApp] Airdropping {amount} to {address}");

        self.execute(
            &validator,
            "terranova",
            &TerranovaExecuteMsg::Airdrop {
                eth_address: address,
                amount,
            },
        )
    }

    pub fn increment_counter(&mut self) -> AnyResult<AppResponse> {
        let validator = self.wallets.validator.clone();
        self.execute(&validator, "counter", &CounterExecuteMsg::Increment {})
    }

    pub fn query_evm_account(&self, address: EvmAddress) -> EvmAccountResponse {
        self.query("terranova", &TerranovaQueryMsg::EvmAccount { address })
            .unwrap()
    }
}

impl Client for TerranovaTestApp {
    type Error = anyhow::Error;
    type Response = AppResponse;

    fn query<Q, T>(&self, contract: &str, msg: &Q) -> AnyResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let contract_addr = self.refs.require(contract)?.to_string();

        Ok(self
            .app
            .wrap()
            .query(&QueryRequest::Wasm(WasmQuery::Smart {
                contract_addr,
                msg: to_json_binary(msg)?,
            }))?)
    }

    fn execute<M>(&mut self, signer: &Wallet, contract: &str, msg: &M) -> AnyResult<AppResponse>
    where
        M: Serialize + ?Sized,
    {
        let contract_addr = self.refs.require(contract)?.to_string();

        println!("[TerranovaTestApp] {} executing on {contract}", signer.name);

        self.app.execute(
            signer.address.clone(),
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr,
                msg: to_json_binary(msg)?,
                funds: vec![],
            }),
        )
    }
}
