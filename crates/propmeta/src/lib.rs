//! # Propmeta
//!
//! Propmeta lets a data model declare presentation metadata for each of its
//! properties (a display name, a grouping category, a help hint, an
//! enum-prefix trimming rule, a read-only override) and lets a property
//! inspector read that metadata back at run time.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Inspector UI (not part of this crate)                      │
//! │  - Renders labels, groups, tooltips, edit controls          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ reads MetadataRecord
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Extraction (metadata/, cache.rs)                           │
//! │  - Folds one property's annotations into a record           │
//! │  - Optional caller-owned cache                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ walks annotations
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Reflection sidecar (reflect.rs)                            │
//! │  - PropertyTable per model type, built at definition time   │
//! │  - Annotations from the catalog (annotations/)              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - **[`annotations`]**: The five annotation kinds and the [`annotations::Annotation`] sum type.
//! - **[`reflect`]**: Property tables, handles, and the [`reflect::Reflect`] trait.
//! - **[`metadata`]**: [`metadata::extract_metadata`] and [`metadata::MetadataRecord`].
//! - **[`cache`]**: [`cache::MetadataCache`], keyed by property identity.
//! - **[`config`]**: Diagnostic settings loaded with `confique`.
//! - **[`error`]**: [`error::PropmetaError`].
//!
//! Logging goes through `tracing`; the crate never installs a subscriber.

pub mod annotations;
pub mod cache;
pub mod config;
pub mod error;
pub mod metadata;
pub mod reflect;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use annotations::{Annotation, Category, DisplayName, Hint, ReadOnly, StripPrefix};
pub use error::{PropmetaError, Result};
pub use metadata::{extract_metadata, try_extract_metadata, MetadataRecord};
pub use reflect::{PropertyRef, PropertyTable, Reflect};
