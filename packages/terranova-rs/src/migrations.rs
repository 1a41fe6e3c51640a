use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, StdError, StdResult};
use sha2::{Digest, Sha256};

use crate::{
    client::{Client, Wallet},
    evm::EvmAddress,
    terranova::TerranovaExecuteMsg,
};

/// A compiled contract ready to be placed on chain.
#[cw_serde]
pub struct Artifact {
    pub contract_name: String,
    /// Runtime bytecode, not the creation bytecode
    pub bytecode: Binary,
}

impl Artifact {
    pub fn new(contract_name: impl Into<String>, bytecode: impl Into<Binary>) -> Self {
        Self {
            contract_name: contract_name.into(),
            bytecode: bytecode.into(),
        }
    }

    pub fn from_hex(contract_name: impl Into<String>, bytecode: &str) -> StdResult<Self> {
        let stripped = bytecode.strip_prefix("0x").unwrap_or(bytecode);
        let bytes = hex::decode(stripped)
            .map_err(|e| StdError::generic_err(format!("Invalid artifact bytecode: {e}")))?;

        Ok(Self::new(contract_name, bytes))
    }
}

pub trait Deployer {
    type Error;

    fn deploy(&mut self, artifact: &Artifact) -> Result<EvmAddress, Self::Error>;
}

/// Deploys `Storage` and then `Migrations`.
pub struct InitialMigration {
    pub storage: Artifact,
    pub migrations: Artifact,
}

impl InitialMigration {
    pub fn run<D: Deployer>(&self, deployer: &mut D) -> Result<Vec<EvmAddress>, D::Error> {
        let storage = deployer.deploy(&self.storage)?;
        let migrations = deployer.deploy(&self.migrations)?;

        Ok(vec![storage, migrations])
    }
}

/// Last 20 bytes of `sha256(deployer ‖ nonce)`.
pub fn deployment_address(deployer: &EvmAddress, nonce: u64) -> EvmAddress {
    let digest = Sha256::new()
        .chain_update(deployer.as_slice())
        .chain_update(nonce.to_be_bytes())
        .finalize();

    let mut address = [0u8; 20];
    address.copy_from_slice(&digest[12..]);
    EvmAddress::new(address)
}

/// Places artifacts into the terranova contract as contract accounts.
pub struct TerranovaDeployer<'a, C: Client> {
    client: &'a mut C,
    signer: Wallet,
    terranova_contract: String,
    deployer_address: EvmAddress,
    nonce: u64,
    deployed: Vec<(String, EvmAddress)>,
}

impl<'a, C: Client> TerranovaDeployer<'a, C> {
    pub fn new(
        client: &'a mut C,
        signer: Wallet,
        terranova_contract: impl Into<String>,
        deployer_address: EvmAddress,
    ) -> Self {
        Self {
            client,
            signer,
            terranova_contract: terranova_contract.into(),
            deployer_address,
            nonce: 0,
            deployed: vec![],
        }
    }

    /// Resumes deriving addresses from `nonce`, e.g. after an earlier run.
    pub fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn deployed(&self) -> &[(String, EvmAddress)] {
        &self.deployed
    }
}

impl<C: Client> Deployer for TerranovaDeployer<'_, C> {
    type Error = C::Error;

    fn deploy(&mut self, artifact: &Artifact) -> Result<EvmAddress, Self::Error> {
        let address = deployment_address(&self.deployer_address, self.nonce);

        self.client.execute(
            &self.signer,
            &self.terranova_contract,
            &TerranovaExecuteMsg::CreateAccount {
                eth_address: address,
                contract_byte_code: artifact.bytecode.clone(),
            },
        )?;

        self.nonce += 1;
        self.deployed.push((artifact.contract_name.clone(), address));

        Ok(address)
    }
}
