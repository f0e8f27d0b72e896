// crates/modgen-core/src/template/builder.rs

use std::fmt::Display;

use super::{expand_to_string, LineEnding};
use crate::error::Result;

/// Incremental template: literal text and substitution values in call order.
///
/// Always holds one more fragment than values, so rendering never hits the
/// count check. Consecutive `text` calls extend the same fragment;
/// consecutive `value` calls get an empty fragment between them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    fragments: Vec<String>,
    values: Vec<String>,
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

impl Template {
    pub fn new() -> Self {
        Self {
            fragments: vec![String::new()],
            values: Vec::new(),
        }
    }

    pub fn text(mut self, text: &str) -> Self {
        if let Some(last) = self.fragments.last_mut() {
            last.push_str(text);
        }
        self
    }

    pub fn value(mut self, value: impl Display) -> Self {
        self.values.push(value.to_string());
        self.fragments.push(String::new());
        self
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn render(&self, line_separator: &str) -> Result<String> {
        expand_to_string(&self.fragments, &self.values, line_separator)
    }

    pub fn render_with(&self, ending: LineEnding) -> Result<String> {
        self.render(ending.as_str())
    }
}
