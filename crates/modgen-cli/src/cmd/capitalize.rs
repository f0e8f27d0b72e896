// crates/modgen-cli/src/cmd/capitalize.rs

use clap::Args;

#[derive(Args, Debug)]
pub struct CapitalizeArgs {
    pub word: String,
}

pub fn run(args: CapitalizeArgs) -> anyhow::Result<()> {
    println!("{}", modgen_core::capitalize_string(&args.word));
    Ok(())
}
