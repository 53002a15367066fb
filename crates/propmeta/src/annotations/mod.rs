//! # Annotation Catalog
//!
//! This module provides the declarative vocabulary a data model attaches to
//! its properties. Instead of calling setters on some inspector object, a
//! model declares what each property should look like and the inspector
//! reads it back later through [`crate::metadata::extract_metadata`].
//!
//! ## Annotation Kinds
//!
//! | Kind | Payload | Meaning |
//! |------|---------|---------|
//! | [`ReadOnly`] | none | Never editable, even if a setter exists |
//! | [`Category`] | `name` | Display grouping |
//! | [`DisplayName`] | `name` | Friendly label instead of the identifier |
//! | [`Hint`] | `hint_text` | Help text / tooltip |
//! | [`StripPrefix`] | `prefix` | Prefix trimmed from enum value names |
//!
//! Every kind is an immutable value: payloads are fixed by `new` and only
//! readable through accessors.
//!
//! ## Usage
//!
//! ```
//! use propmeta::annotations::{Annotation, Category, DisplayName, StripPrefix};
//!
//! let decorations: Vec<Annotation> = vec![
//!     Category::new("Appearance").into(),
//!     DisplayName::new("Background Color").into(),
//!     StripPrefix::new("cl").into(),
//! ];
//! assert_eq!(decorations.len(), 3);
//! ```

mod annotation;
mod kinds;

pub use annotation::{Annotation, ForeignAnnotation};
pub use kinds::{Category, DisplayName, Hint, ReadOnly, StripPrefix};
