use cosmwasm_schema::write_api;
use terranova_rs::terranova::{
    TerranovaExecuteMsg, TerranovaInstantiateMsg, TerranovaMigrateMsg, TerranovaQueryMsg,
};

fn main() {
    write_api! {
        instantiate: TerranovaInstantiateMsg,
        execute: TerranovaExecuteMsg,
        query: TerranovaQueryMsg,
        migrate: TerranovaMigrateMsg,
    }
}
