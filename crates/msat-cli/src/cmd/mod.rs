// crates/msat-cli/src/cmd/mod.rs

pub mod demo;
pub mod inspect;
pub mod query;
