pub mod harness;
mod integration;
