pub mod contract;
pub mod executor;
pub mod state;
