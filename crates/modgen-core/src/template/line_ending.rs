// crates/modgen-core/src/template/line_ending.rs

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Separator used to rejoin normalized lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// The host platform's terminator.
    #[default]
    Native,
    Lf,
    Crlf,
}

impl LineEnding {
    pub const LF: &'static str = "\n";
    pub const CRLF: &'static str = "\r\n";

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Native => Self::native(),
            LineEnding::Lf => Self::LF,
            LineEnding::Crlf => Self::CRLF,
        }
    }

    #[cfg(windows)]
    pub const fn native() -> &'static str {
        Self::CRLF
    }

    #[cfg(not(windows))]
    pub const fn native() -> &'static str {
        Self::LF
    }
}

impl FromStr for LineEnding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(LineEnding::Native),
            "lf" => Ok(LineEnding::Lf),
            "crlf" => Ok(LineEnding::Crlf),
            other => Err(Error::InvalidArgument(format!(
                "unknown line ending {other:?} (expected native, lf or crlf)"
            ))),
        }
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineEnding::Native => "native",
            LineEnding::Lf => "lf",
            LineEnding::Crlf => "crlf",
        };
        f.write_str(name)
    }
}
