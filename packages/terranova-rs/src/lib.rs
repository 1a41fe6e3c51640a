pub mod client;
pub mod core;
pub mod counter;
pub mod events;
pub mod evm;
pub mod library;
pub mod migrations;
pub mod mock;
pub mod rlp;
pub mod terranova;
pub mod transaction;
