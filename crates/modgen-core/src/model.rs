// crates/modgen-core/src/model.rs
//
// Capabilities the generators need from the external entity model.
// The model itself is opaque here: no parsing, no schema checks.

use crate::text::capitalize_string;

/// A class/entity description supplied by the modelling library.
pub trait ClassAbstraction {
    fn name(&self) -> &str;

    /// File stem for code emitted for this class, e.g. `user` -> `User`.
    fn file_stem(&self) -> String {
        capitalize_string(self.name())
    }
}

/// A project description supplied by the modelling library.
pub trait ProjectAbstraction {
    fn name(&self) -> &str;
}
