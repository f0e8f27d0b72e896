// crates/modgen-core/src/template/mod.rs
//
// Template normalization.
//
// A template is a list of literal fragments with one substitution value
// after each fragment; the last fragment may go without one. Normalizing it:
//   1. interpolates values between fragments, in order
//   2. splits on "\n" / "\r\n"
//   3. drops blank lines at both ends (all blank => "")
//   4. removes the smallest indentation of the non-blank lines from every line
//   5. joins with the caller's separator, nothing before or after
//
// The separator is always an argument. It is never taken from the template.

mod builder;
mod line_ending;
mod lines;

use std::fmt::Display;

use crate::error::{Error, Result};

pub use builder::Template;
pub use line_ending::LineEnding;
pub use lines::{indent_width, is_blank, split_lines};

/// Interpolate `values` between `fragments` and normalize the result.
///
/// Each fragment may be followed by one value; only the last fragment may go
/// without. So `values.len()` is `fragments.len() - 1` or `fragments.len()`.
/// Any other count, no fragments at all, or an empty `line_separator` is
/// [`Error::InvalidArgument`].
pub fn expand_to_string<F, V>(
    fragments: &[F],
    values: &[V],
    line_separator: &str,
) -> Result<String>
where
    F: AsRef<str>,
    V: Display,
{
    let fits = values.len() + 1 == fragments.len() || values.len() == fragments.len();
    if fragments.is_empty() || !fits {
        return Err(Error::InvalidArgument(format!(
            "{} values do not fit between {} fragments",
            values.len(),
            fragments.len()
        )));
    }
    check_separator(line_separator)?;

    let raw = interpolate(fragments, values);
    Ok(normalize(&raw, line_separator))
}

/// Normalize a template that has no substitution values.
pub fn expand_text(text: &str, line_separator: &str) -> Result<String> {
    check_separator(line_separator)?;
    Ok(normalize(text, line_separator))
}

fn check_separator(line_separator: &str) -> Result<()> {
    if line_separator.is_empty() {
        return Err(Error::InvalidArgument("line separator must not be empty".into()));
    }
    Ok(())
}

fn interpolate<F, V>(fragments: &[F], values: &[V]) -> String
where
    F: AsRef<str>,
    V: Display,
{
    let mut raw = String::new();
    for (i, fragment) in fragments.iter().enumerate() {
        raw.push_str(fragment.as_ref());
        if let Some(value) = values.get(i) {
            raw.push_str(&value.to_string());
        }
    }
    raw
}

fn normalize(raw: &str, line_separator: &str) -> String {
    let all = lines::split_lines(raw);
    let Some((first, last)) = lines::content_bounds(&all) else {
        return String::new();
    };
    let kept = &all[first..=last];
    let indent = lines::min_indent(kept);

    tracing::trace!(
        lines = kept.len(),
        dropped = all.len() - kept.len(),
        min_indent = indent,
        "normalized template"
    );

    let mut out = String::with_capacity(raw.len());
    for (i, line) in kept.iter().enumerate() {
        if i > 0 {
            out.push_str(line_separator);
        }
        out.push_str(lines::strip_indent(line, indent));
    }
    out
}

/// Normalize an inline template written as alternating fragments and values.
///
/// ```
/// let name = "User";
/// let code = modgen_core::expand!("\n";
///     "
///         export class ", name, " {
///         }
///     "
/// )
/// .unwrap();
/// assert_eq!(code, "export class User {\n}");
/// ```
///
/// Fragments must be `&str` expressions; values only need `Display`.
#[macro_export]
macro_rules! expand {
    ($sep:expr; $first:expr $(, $value:expr, $fragment:expr)*) => {{
        let fragments: &[&str] = &[$first $(, $fragment)*];
        let values: &[::std::string::String] =
            &[$(::std::string::ToString::to_string(&$value)),*];
        $crate::template::expand_to_string(fragments, values, $sep)
    }};
}
