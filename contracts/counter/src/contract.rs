#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, OverflowError, OverflowOperation,
    Response, StdResult,
};
use cw2::set_contract_version;
use terranova_rs::{
    core::{ContractError, ContractResult},
    counter::{CounterExecuteMsg, CounterInstantiateMsg, CounterQueryMsg, GetCountResponse},
};

use crate::state::{State, STATE};

const CONTRACT_NAME: &str = "crates.io:counter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: CounterInstantiateMsg,
) -> ContractResult {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    STATE.save(
        deps.storage,
        &State {
            count: msg.count,
            owner: info.sender.clone(),
        },
    )?;

    Ok(Response::default()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("count", msg.count.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: CounterExecuteMsg,
) -> ContractResult {
    let state = STATE.load(deps.storage)?;

    let count = match msg {
        CounterExecuteMsg::Increment {} => state
            .count
            .checked_add(1)
            .ok_or(OverflowError::new(OverflowOperation::Add))?,
        CounterExecuteMsg::Reset { count } => {
            if info.sender != state.owner {
                return Err(ContractError::Unauthorized {});
            }
            count
        }
    };

    STATE.save(deps.storage, &State { count, ..state })?;

    Ok(Response::default().add_attribute("count", count.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: CounterQueryMsg) -> StdResult<Binary> {
    match msg {
        CounterQueryMsg::GetCount {} => to_json_binary(&GetCountResponse {
            count: STATE.load(deps.storage)?.count,
        }),
    }
}

#[cfg(test)]
mod counter_tests {
    use super::*;
    use cosmwasm_std::{
        from_json,
        testing::{message_info, mock_dependencies, mock_env},
    };

    fn count(deps: Deps) -> i32 {
        from_json::<GetCountResponse>(query(deps, mock_env(), CounterQueryMsg::GetCount {}).unwrap())
            .unwrap()
            .count
    }

    #[test]
    fn increments_and_resets() {
        let mut deps = mock_dependencies();
        let owner = deps.api.addr_make("owner");

        instantiate(
            deps.as_mut(),
            mock_env(),
            message_info(&owner, &[]),
            CounterInstantiateMsg { count: 17 },
        )
        .unwrap();

        assert_eq!(count(deps.as_ref()), 17);

        let anyone = deps.api.addr_make("anyone");
        execute(
            deps.as_mut(),
            mock_env(),
            message_info(&anyone, &[]),
            CounterExecuteMsg::Increment {},
        )
        .unwrap();

        assert_eq!(count(deps.as_ref()), 18);

        execute(
            deps.as_mut(),
            mock_env(),
            message_info(&owner, &[]),
            CounterExecuteMsg::Reset { count: 5 },
        )
        .unwrap();

        assert_eq!(count(deps.as_ref()), 5);
    }

    #[test]
    fn reset_is_owner_only() {
        let mut deps = mock_dependencies();
        let owner = deps.api.addr_make("owner");
        let stranger = deps.api.addr_make("stranger");

        instantiate(
            deps.as_mut(),
            mock_env(),
            message_info(&owner, &[]),
            CounterInstantiateMsg { count: 1 },
        )
        .unwrap();

        assert_eq!(
            execute(
                deps.as_mut(),
                mock_env(),
                message_info(&stranger, &[]),
                CounterExecuteMsg::Reset { count: 0 },
            )
            .unwrap_err(),
            ContractError::Unauthorized {}
        );
        assert_eq!(count(deps.as_ref()), 1);
    }

    #[test]
    fn increment_overflow_is_an_error() {
        let mut deps = mock_dependencies();
        let owner = deps.api.addr_make("owner");

        instantiate(
            deps.as_mut(),
            mock_env(),
            message_info(&owner, &[]),
            CounterInstantiateMsg { count: i32::MAX },
        )
        .unwrap();

        assert_eq!(
            execute(
                deps.as_mut(),
                mock_env(),
                message_info(&owner, &[]),
                CounterExecuteMsg::Increment {},
            )
            .unwrap_err(),
            ContractError::Overflow(OverflowError::new(OverflowOperation::Add))
        );
    }
}
