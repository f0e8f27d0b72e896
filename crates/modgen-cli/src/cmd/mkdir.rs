// crates/modgen-cli/src/cmd/mkdir.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

#[derive(Args, Debug)]
pub struct MkdirArgs {
    /// Path segments, joined in order
    #[arg(required = true)]
    pub segments: Vec<PathBuf>,
}

pub fn run(args: MkdirArgs) -> anyhow::Result<()> {
    let path = modgen_core::create_path(&args.segments).context("create path")?;
    println!("{}", path.display());
    Ok(())
}
