// crates/modgen-cli/src/cmd/normalize.rs

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use modgen_core::template::{expand_text, LineEnding};

use crate::io::template_file;

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Template file to normalize
    pub input: PathBuf,

    /// Write the result here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Line ending for the output: native, lf or crlf
    #[arg(long, default_value = "native")]
    pub eol: LineEnding,
}

pub fn run(args: NormalizeArgs) -> anyhow::Result<()> {
    let raw = template_file::load_template(&args.input)?;
    let text = expand_text(&raw, args.eol.as_str())
        .with_context(|| format!("normalize {}", args.input.display()))?;

    match &args.output {
        Some(path) => {
            template_file::save_output(path, &text)?;
            tracing::info!(
                input = %args.input.display(),
                output = %path.display(),
                eol = %args.eol,
                "normalized template"
            );
        }
        None => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "{text}").context("write stdout")?;
        }
    }
    Ok(())
}
