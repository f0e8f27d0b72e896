pub mod error;

pub mod fs;
pub mod model;
pub mod template;
pub mod text;

pub use crate::error::{Error, Result};
pub use crate::fs::{create_path, path_exists, write_file};
pub use crate::model::{ClassAbstraction, ProjectAbstraction};
pub use crate::template::{expand_text, expand_to_string, LineEnding, Template};
pub use crate::text::capitalize_string;
