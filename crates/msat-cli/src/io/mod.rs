// crates/msat-cli/src/io/mod.rs

pub mod matrix_file;
