// crates/modgen-cli/src/io/mod.rs

pub mod template_file;
