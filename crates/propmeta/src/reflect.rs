//! # Reflection Sidecar
//!
//! Rust has no runtime attribute reflection, so annotations are not read off
//! the struct definition. Instead each model type declares a [`PropertyTable`]
//! next to its definition: an ordered list of its properties, each with the
//! annotations attached to it. The table is usually built once in a
//! `once_cell::sync::Lazy` static and exposed through [`Reflect`].
//!
//! ```
//! use once_cell::sync::Lazy;
//! use propmeta::annotations::{Category, DisplayName, StripPrefix};
//! use propmeta::reflect::{PropertyTable, Reflect};
//!
//! struct Swatch;
//!
//! static SWATCH_PROPERTIES: Lazy<PropertyTable> = Lazy::new(|| {
//!     PropertyTable::builder("Swatch")
//!         .property(
//!             "color",
//!             [
//!                 Category::new("Appearance").into(),
//!                 DisplayName::new("Background Color").into(),
//!                 StripPrefix::new("cl").into(),
//!             ],
//!         )
//!         .build()
//!         .expect("swatch property table is well formed")
//! });
//!
//! impl Reflect for Swatch {
//!     fn property_table() -> &'static PropertyTable {
//!         &SWATCH_PROPERTIES
//!     }
//! }
//!
//! let meta = Swatch::metadata_of("color").unwrap();
//! assert_eq!(meta.display_name, "Background Color");
//! ```
//!
//! ## Handles
//!
//! The extractor consumes a [`PropertyRef`], which is either null or points
//! at one [`PropertyInfo`]. A null handle is what a failed lookup produces;
//! handing it to [`crate::metadata::extract_metadata`] is a caller bug.

use std::collections::HashSet;
use std::fmt;

use crate::annotations::Annotation;
use crate::error::{PropmetaError, Result};
use crate::metadata::{extract_metadata, MetadataRecord};

/// Identity of a property: the owning model type plus the property identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyId {
    pub owner: &'static str,
    pub name: String,
}

impl PropertyId {
    pub fn new(owner: &'static str, name: impl Into<String>) -> Self {
        Self {
            owner,
            name: name.into(),
        }
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.name)
    }
}

/// One property declaration together with its attached annotations.
///
/// Annotations are kept in attachment order; that order is what the
/// extractor folds over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    id: PropertyId,
    annotations: Vec<Annotation>,
}

impl PropertyInfo {
    pub fn new(owner: &'static str, name: impl Into<String>) -> Self {
        Self {
            id: PropertyId::new(owner, name),
            annotations: Vec::new(),
        }
    }

    /// Attach one more annotation after the existing ones.
    pub fn with(mut self, annotation: impl Into<Annotation>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn id(&self) -> &PropertyId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.id.name
    }

    pub fn owner(&self) -> &'static str {
        self.id.owner
    }

    pub fn annotations(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.iter()
    }
}

/// Reflected-property handle handed to the extractor.
///
/// `PropertyRef::default()` is the null handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropertyRef<'a>(Option<&'a PropertyInfo>);

impl<'a> PropertyRef<'a> {
    pub fn null() -> Self {
        Self(None)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_none()
    }

    pub fn get(&self) -> Option<&'a PropertyInfo> {
        self.0
    }
}

impl<'a> From<&'a PropertyInfo> for PropertyRef<'a> {
    fn from(info: &'a PropertyInfo) -> Self {
        Self(Some(info))
    }
}

impl<'a> From<Option<&'a PropertyInfo>> for PropertyRef<'a> {
    fn from(info: Option<&'a PropertyInfo>) -> Self {
        Self(info)
    }
}

/// All annotated properties of one model type, in declaration order.
#[derive(Debug, Clone)]
pub struct PropertyTable {
    owner: &'static str,
    properties: Vec<PropertyInfo>,
}

impl PropertyTable {
    pub fn builder(owner: &'static str) -> PropertyTableBuilder {
        PropertyTableBuilder {
            owner,
            properties: Vec::new(),
        }
    }

    pub fn owner(&self) -> &'static str {
        self.owner
    }

    /// Look up a property declaration by identifier.
    pub fn get(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name() == name)
    }

    /// Handle for `name`; null when the table has no such property.
    pub fn property(&self, name: &str) -> PropertyRef<'_> {
        PropertyRef::from(self.get(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyInfo> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Extract metadata for every property, in table order.
    pub fn metadata(&self) -> Vec<(&PropertyInfo, MetadataRecord)> {
        self.properties
            .iter()
            .map(|info| (info, extract_metadata(PropertyRef::from(info))))
            .collect()
    }

    /// Property names grouped by their extracted category.
    ///
    /// Groups appear in the order their category is first seen. Properties
    /// without a category share the `""` group.
    pub fn by_category(&self) -> Vec<(String, Vec<&str>)> {
        let mut groups: Vec<(String, Vec<&str>)> = Vec::new();
        for (info, meta) in self.metadata() {
            match groups.iter_mut().find(|(cat, _)| *cat == meta.category) {
                Some((_, names)) => names.push(info.name()),
                None => groups.push((meta.category, vec![info.name()])),
            }
        }
        groups
    }
}

impl<'a> IntoIterator for &'a PropertyTable {
    type Item = &'a PropertyInfo;
    type IntoIter = std::slice::Iter<'a, PropertyInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}

/// Builder for [`PropertyTable`]; validation happens in [`build`](Self::build).
#[derive(Debug)]
pub struct PropertyTableBuilder {
    owner: &'static str,
    properties: Vec<PropertyInfo>,
}

impl PropertyTableBuilder {
    /// Declare a property and the annotations attached to it, in order.
    pub fn property(
        mut self,
        name: impl Into<String>,
        annotations: impl IntoIterator<Item = Annotation>,
    ) -> Self {
        let mut info = PropertyInfo::new(self.owner, name);
        info.annotations.extend(annotations);
        self.properties.push(info);
        self
    }

    /// Declare a property that carries no annotations.
    pub fn plain(self, name: impl Into<String>) -> Self {
        self.property(name, std::iter::empty::<Annotation>())
    }

    /// Finish the table, rejecting empty and duplicate property names.
    pub fn build(self) -> Result<PropertyTable> {
        let mut seen = HashSet::new();
        for info in &self.properties {
            if info.name().is_empty() {
                return Err(PropmetaError::EmptyPropertyName { owner: self.owner });
            }
            if !seen.insert(info.name()) {
                return Err(PropmetaError::DuplicateProperty {
                    owner: self.owner,
                    name: info.name().to_string(),
                });
            }
        }

        tracing::debug!(
            owner = self.owner,
            properties = self.properties.len(),
            "built property table"
        );

        Ok(PropertyTable {
            owner: self.owner,
            properties: self.properties,
        })
    }
}

/// A model type that exposes its property table.
pub trait Reflect {
    fn property_table() -> &'static PropertyTable;

    /// Handle for the named property; null if it is not declared.
    fn property(name: &str) -> PropertyRef<'static> {
        Self::property_table().property(name)
    }

    /// Extract the metadata of the named property.
    fn metadata_of(name: &str) -> Result<MetadataRecord> {
        let table = Self::property_table();
        let info = table
            .get(name)
            .ok_or_else(|| PropmetaError::UnknownProperty {
                owner: table.owner(),
                name: name.to_string(),
            })?;
        Ok(extract_metadata(PropertyRef::from(info)))
    }
}
