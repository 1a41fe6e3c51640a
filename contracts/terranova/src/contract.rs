#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdError, StdResult,
};
use cw2::set_contract_version;
use cw_utils::nonpayable;
use terranova_rs::{
    core::{ContractError, ContractResult},
    events::DomainEvent,
    terranova::{
        EvmAccountResponse, RawEthereumQueryResponse, TerranovaConfig, TerranovaExecuteMsg,
        TerranovaInstantiateMsg, TerranovaMigrateMsg, TerranovaQueryMsg, DEFAULT_CHAIN_ID,
        DEFAULT_TOKEN_MINT,
    },
};

use crate::{
    executor::{execute_raw_transaction, validate_raw_transaction, EvmState},
    state::{collect_chunks, load_account, load_chunk, remove_chunks, write_chunk, CONFIG},
};

const CONTRACT_NAME: &str = "crates.io:terranova";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: TerranovaInstantiateMsg,
) -> ContractResult {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let operators = msg
        .operators
        .iter()
        .map(|operator| deps.api.addr_validate(operator.as_str()))
        .collect::<StdResult<Vec<Addr>>>()?;

    let config = TerranovaConfig {
        owner: info.sender,
        operators,
        token_mint: msg
            .token_mint
            .unwrap_or_else(|| Addr::unchecked(DEFAULT_TOKEN_MINT)),
        chain_id: msg.chain_id.unwrap_or(DEFAULT_CHAIN_ID),
    };

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::default()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner.as_str())
        .add_attribute("chain_id", config.chain_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, msg: TerranovaMigrateMsg) -> ContractResult {
    let config = CONFIG.load(deps.storage)?;

    CONFIG.save(
        deps.storage,
        &TerranovaConfig {
            token_mint: msg.token_mint.unwrap_or(config.token_mint),
            chain_id: msg.chain_id.unwrap_or(config.chain_id),
            ..config
        },
    )?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::default().add_attribute("migrated", "true"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: TerranovaExecuteMsg,
) -> ContractResult {
    nonpayable(&info)?;

    let config = CONFIG.load(deps.storage)?;

    match msg {
        TerranovaExecuteMsg::CreateAccount {
            eth_address,
            contract_byte_code,
        } => {
            assert_operator(&config, &info.sender)?;

            let account =
                EvmState::new(deps.storage).create_account(eth_address, contract_byte_code)?;

            Ok(Response::default()
                .add_attribute("action", "create_account")
                .add_attribute("address", eth_address.to_string())
                .add_event(DomainEvent::AccountCreated {
                    address: eth_address,
                    is_contract: account.is_contract(),
                }))
        }
        TerranovaExecuteMsg::CallFromRawEthereumTx {
            caller_evm_address,
            unsigned_tx,
        } => {
            assert_operator(&config, &info.sender)?;

            execute_raw_transaction(
                deps.storage,
                &config,
                caller_evm_address,
                unsigned_tx.as_slice(),
            )
        }
        TerranovaExecuteMsg::StoreTxChunk {
            caller_evm_address,
            full_tx_hash,
            chunk_index,
            chunk_data,
        } => {
            assert_operator(&config, &info.sender)?;

            write_chunk(
                deps.storage,
                caller_evm_address,
                full_tx_hash,
                chunk_index,
                &chunk_data,
            )?;

            Ok(Response::default()
                .add_attribute("action", "store_tx_chunk")
                .add_event(DomainEvent::TxChunkStored {
                    caller: caller_evm_address,
                    tx_hash: full_tx_hash,
                    chunk_index,
                }))
        }
        TerranovaExecuteMsg::ExecuteChunkedEthereumTx {
            caller_evm_address,
            full_tx_hash,
            chunk_count,
        } => {
            assert_operator(&config, &info.sender)?;

            let unsigned_tx =
                collect_chunks(deps.storage, caller_evm_address, full_tx_hash, chunk_count)?;
            remove_chunks(deps.storage, caller_evm_address, full_tx_hash, chunk_count);

            let response =
                execute_raw_transaction(deps.storage, &config, caller_evm_address, &unsigned_tx)?;

            Ok(response.add_event(DomainEvent::ChunkedTransactionAssembled {
                caller: caller_evm_address,
                tx_hash: full_tx_hash,
                chunk_count,
                size: unsigned_tx.len() as u64,
            }))
        }
        TerranovaExecuteMsg::Airdrop {
            eth_address,
            amount,
        } => {
            assert_owner(&config, &info.sender)?;

            EvmState::new(deps.storage).write_balance(eth_address, amount)?;

            Ok(Response::default()
                .add_attribute("action", "airdrop")
                .add_event(DomainEvent::BalanceAirdropped {
                    address: eth_address,
                    amount,
                }))
        }
        TerranovaExecuteMsg::UpdateOperators { add, remove } => {
            assert_owner(&config, &info.sender)?;

            let mut operators = config.operators.clone();
            operators.retain(|operator| !remove.contains(operator));

            for operator in add {
                let operator = deps.api.addr_validate(operator.as_str())?;
                if !operators.contains(&operator) {
                    operators.push(operator);
                }
            }

            CONFIG.save(
                deps.storage,
                &TerranovaConfig {
                    operators: operators.clone(),
                    ..config
                },
            )?;

            Ok(Response::default()
                .add_attribute("action", "update_operators")
                .add_event(DomainEvent::OperatorsUpdated { operators }))
        }
    }
}

fn assert_operator(config: &TerranovaConfig, sender: &Addr) -> Result<(), ContractError> {
    if !config.is_operator(sender) {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

fn assert_owner(config: &TerranovaConfig, sender: &Addr) -> Result<(), ContractError> {
    if config.owner != *sender {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: TerranovaQueryMsg) -> StdResult<Binary> {
    match msg {
        TerranovaQueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        TerranovaQueryMsg::EvmAccount { address } => to_json_binary(&EvmAccountResponse::from(
            load_account(deps.storage, address)?,
        )),
        TerranovaQueryMsg::ContractCode { address } => {
            to_json_binary(&load_account(deps.storage, address)?.code)
        }
        TerranovaQueryMsg::TxChunk {
            caller_evm_address,
            full_tx_hash,
            chunk_index,
        } => to_json_binary(&load_chunk(
            deps.storage,
            caller_evm_address,
            full_tx_hash,
            chunk_index,
        )?),
        TerranovaQueryMsg::RawEthereumQuery {
            caller_evm_address,
            unsigned_tx,
        } => {
            let config = CONFIG.load(deps.storage)?;

            validate_raw_transaction(
                deps.storage,
                &config,
                caller_evm_address,
                unsigned_tx.as_slice(),
            )
            .map_err(|e| StdError::generic_err(e.to_string()))?;

            to_json_binary(&RawEthereumQueryResponse {
                result: Binary::default(),
            })
        }
    }
}

#[cfg(test)]
fn setup() -> (
    cosmwasm_std::OwnedDeps<
        cosmwasm_std::testing::MockStorage,
        cosmwasm_std::testing::MockApi,
        cosmwasm_std::testing::MockQuerier,
    >,
    Addr,
    Addr,
) {
    use cosmwasm_std::testing::{message_info, mock_dependencies, mock_env};

    let mut deps = mock_dependencies();
    let owner = deps.api.addr_make("owner");
    let operator = deps.api.addr_make("operator");

    instantiate(
        deps.as_mut(),
        mock_env(),
        message_info(&owner, &[]),
        TerranovaInstantiateMsg {
            operators: vec![operator.clone()],
            token_mint: None,
            chain_id: None,
        },
    )
    .unwrap();

    (deps, owner, operator)
}
