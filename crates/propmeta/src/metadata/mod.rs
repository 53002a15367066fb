//! # Metadata Extraction
//!
//! Folds the annotations attached to one property into a [`MetadataRecord`]
//! the inspector can render from.
//!
//! ## Fold Rules
//!
//! Starting from `loaded = true` and every other field at its default, each
//! annotation is applied in attachment order:
//!
//! | Annotation | Effect |
//! |------------|--------|
//! | `ReadOnly` | `read_only = true` |
//! | `Category` | `category = name` |
//! | `DisplayName` | `display_name = name` |
//! | `Hint` | `hint = hint_text` |
//! | `StripPrefix` | `strip_prefix = prefix` |
//! | anything else | ignored |
//!
//! Every branch overwrites unconditionally, so when a kind is attached more
//! than once the last occurrence wins.
//!
//! ## Null Handles
//!
//! [`extract_metadata`] panics on a null [`crate::reflect::PropertyRef`]: it
//! means the caller looked up a property that does not exist and passed the
//! result along unchecked. Use [`try_extract_metadata`] where the name comes
//! from outside the program.

mod extract;
mod record;

pub use extract::{extract_metadata, try_extract_metadata, Extractor};
pub use record::MetadataRecord;
