// crates/modgen-cli/src/cmd/mod.rs

pub mod capitalize;
pub mod mkdir;
pub mod normalize;
