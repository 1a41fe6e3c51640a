use cosmwasm_std::{Binary, StdResult, Storage};
use cw_storage_plus::{Item, Map};
use terranova_rs::{
    core::ContractError,
    evm::{EvmAddress, TxHash},
    terranova::{EvmAccount, TerranovaConfig},
};

pub const CONFIG: Item<TerranovaConfig> = Item::new("config");

pub const ACCOUNTS: Map<EvmAddress, EvmAccount> = Map::new("accounts");

/// Key: (caller, tx hash, chunk index)
const TX_CHUNKS: Map<(EvmAddress, TxHash, u8), Binary> = Map::new("tx_chunks");

/// Missing accounts read as empty user accounts.
pub fn load_account(store: &dyn Storage, address: EvmAddress) -> StdResult<EvmAccount> {
    Ok(ACCOUNTS
        .may_load(store, address)?
        .unwrap_or_else(|| EvmAccount::new_user_account(address)))
}

pub fn save_account(store: &mut dyn Storage, account: &EvmAccount) -> StdResult<()> {
    ACCOUNTS.save(store, account.address, account)
}

/// Overwrites any chunk already stored under the same key.
pub fn write_chunk(
    store: &mut dyn Storage,
    caller: EvmAddress,
    tx_hash: TxHash,
    chunk_index: u8,
    chunk_data: &Binary,
) -> StdResult<()> {
    TX_CHUNKS.save(store, (caller, tx_hash, chunk_index), chunk_data)
}

pub fn load_chunk(
    store: &dyn Storage,
    caller: EvmAddress,
    tx_hash: TxHash,
    chunk_index: u8,
) -> StdResult<Option<Binary>> {
    TX_CHUNKS.may_load(store, (caller, tx_hash, chunk_index))
}

/// Concatenates chunks `0..chunk_count` in index order.
pub fn collect_chunks(
    store: &dyn Storage,
    caller: EvmAddress,
    tx_hash: TxHash,
    chunk_count: u8,
) -> Result<Vec<u8>, ContractError> {
    if chunk_count == 0 {
        return Err(ContractError::TxChunksMissing { tx_hash, index: 0 });
    }

    let mut collected = Vec::new();

    for index in 0..chunk_count {
        let chunk = load_chunk(store, caller, tx_hash, index)?
            .ok_or(ContractError::TxChunksMissing { tx_hash, index })?;

        collected.extend_from_slice(chunk.as_slice());
    }

    Ok(collected)
}

pub fn remove_chunks(store: &mut dyn Storage, caller: EvmAddress, tx_hash: TxHash, chunk_count: u8) {
    for index in 0..chunk_count {
        TX_CHUNKS.remove(store, (caller, tx_hash, index));
    }
}
