use cosmwasm_schema::{cw_serde, QueryResponses};

#[cw_serde]
pub struct CounterInstantiateMsg {
    pub count: i32,
}

#[cw_serde]
pub enum CounterExecuteMsg {
    Increment {},
    Reset { count: i32 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum CounterQueryMsg {
    #[returns(GetCountResponse)]
    GetCount {},
}

#[cw_serde]
pub struct GetCountResponse {
    pub count: i32,
}
