// crates/modgen-cli/src/io/template_file.rs

use std::path::Path;

use anyhow::{Context, Result};

/// Read a template file as UTF-8 text, without a leading byte order mark.
pub fn load_template(path: &Path) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read template {}", path.display()))?;
    match text.strip_prefix('\u{feff}') {
        Some(rest) => Ok(rest.to_owned()),
        None => Ok(text),
    }
}

/// Write rendered output, creating parent directories as needed.
pub fn save_output(path: &Path, content: &str) -> Result<()> {
    modgen_core::write_file(path, content)
        .with_context(|| format!("write output {}", path.display()))
}
