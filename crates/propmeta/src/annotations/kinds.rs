//! The five annotation kinds.
//!
//! Payloads are stored verbatim. Nothing here trims, validates, or rejects
//! empty strings.

use serde::{Deserialize, Serialize};

/// Marks a property as non-editable regardless of whether it has a setter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReadOnly;

/// Display grouping for a property (e.g. "Appearance", "Layout").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The category name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Friendly label that replaces the raw property identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayName {
    name: String,
}

impl DisplayName {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The label shown instead of the identifier.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Help text shown next to (or hovering over) the property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hint {
    hint_text: String,
}

impl Hint {
    pub fn new(hint_text: impl Into<String>) -> Self {
        Self {
            hint_text: hint_text.into(),
        }
    }

    pub fn hint_text(&self) -> &str {
        &self.hint_text
    }
}

/// Prefix removed from enumeration value names before display.
///
/// An enum property whose values are `clRed`, `clGreen`, ... annotated with
/// `StripPrefix::new("cl")` is shown as `Red`, `Green`, ...
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StripPrefix {
    prefix: String,
}

impl StripPrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
