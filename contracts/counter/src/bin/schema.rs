use cosmwasm_schema::write_api;
use terranova_rs::counter::{CounterExecuteMsg, CounterInstantiateMsg, CounterQueryMsg};

fn main() {
    write_api! {
        instantiate: CounterInstantiateMsg,
        execute: CounterExecuteMsg,
        query: CounterQueryMsg,
    }
}
