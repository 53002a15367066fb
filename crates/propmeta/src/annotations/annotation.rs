//! The annotation sum type attached to property declarations.

use serde::{Deserialize, Serialize};

use super::kinds::{Category, DisplayName, Hint, ReadOnly, StripPrefix};

/// One annotation attached to a property declaration.
///
/// The five catalog kinds are what the metadata extractor understands.
/// [`Annotation::Foreign`] covers anything else that shares the same
/// attachment list (serializer hints, validation rules, ...) and is skipped
/// during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Annotation {
    ReadOnly(ReadOnly),
    Category(Category),
    DisplayName(DisplayName),
    Hint(Hint),
    StripPrefix(StripPrefix),

    /// An annotation owned by some other subsystem.
    Foreign(ForeignAnnotation),
}

impl Annotation {
    /// Short kind name, used in diagnostics.
    pub fn kind_name(&self) -> &str {
        match self {
            Annotation::ReadOnly(_) => "ReadOnly",
            Annotation::Category(_) => "Category",
            Annotation::DisplayName(_) => "DisplayName",
            Annotation::Hint(_) => "Hint",
            Annotation::StripPrefix(_) => "StripPrefix",
            Annotation::Foreign(foreign) => foreign.kind(),
        }
    }

    /// Whether this is one of the five catalog kinds.
    pub fn is_catalog_kind(&self) -> bool {
        !matches!(self, Annotation::Foreign(_))
    }
}

/// An annotation kind outside the catalog.
///
/// It carries a kind name and an optional payload so that tables can
/// describe the full attachment list of a property, but the metadata
/// extractor never interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ForeignAnnotation {
    kind: String,
    payload: Option<String>,
}

impl ForeignAnnotation {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    pub fn with_payload(kind: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: Some(payload.into()),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

impl From<ReadOnly> for Annotation {
    fn from(value: ReadOnly) -> Self {
        Annotation::ReadOnly(value)
    }
}

impl From<Category> for Annotation {
    fn from(value: Category) -> Self {
        Annotation::Category(value)
    }
}

impl From<DisplayName> for Annotation {
    fn from(value: DisplayName) -> Self {
        Annotation::DisplayName(value)
    }
}

impl From<Hint> for Annotation {
    fn from(value: Hint) -> Self {
        Annotation::Hint(value)
    }
}

impl From<StripPrefix> for Annotation {
    fn from(value: StripPrefix) -> Self {
        Annotation::StripPrefix(value)
    }
}

impl From<ForeignAnnotation> for Annotation {
    fn from(value: ForeignAnnotation) -> Self {
        Annotation::Foreign(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_matching_variant() {
        assert!(matches!(Annotation::from(ReadOnly), Annotation::ReadOnly(_)));
        assert!(matches!(
            Annotation::from(Category::new("x")),
            Annotation::Category(_)
        ));
        assert!(matches!(
            Annotation::from(DisplayName::new("x")),
            Annotation::DisplayName(_)
        ));
        assert!(matches!(Annotation::from(Hint::new("x")), Annotation::Hint(_)));
        assert!(matches!(
            Annotation::from(StripPrefix::new("x")),
            Annotation::StripPrefix(_)
        ));
    }

    #[test]
    fn kind_name_for_catalog_kinds() {
        assert_eq!(Annotation::from(ReadOnly).kind_name(), "ReadOnly");
        assert_eq!(Annotation::from(Hint::new("h")).kind_name(), "Hint");
        assert_eq!(
            Annotation::from(StripPrefix::new("cl")).kind_name(),
            "StripPrefix"
        );
    }

    #[test]
    fn foreign_annotation_reports_its_own_kind() {
        let foreign = Annotation::from(ForeignAnnotation::with_payload("Default", "42"));
        assert_eq!(foreign.kind_name(), "Default");
        assert!(!foreign.is_catalog_kind());
    }

    #[test]
    fn foreign_payload_is_optional() {
        assert_eq!(ForeignAnnotation::new("Transient").payload(), None);
        assert_eq!(
            ForeignAnnotation::with_payload("Default", "42").payload(),
            Some("42")
        );
    }

    #[test]
    fn catalog_kinds_are_recognised() {
        assert!(Annotation::from(Category::new("A")).is_catalog_kind());
        assert!(Annotation::from(ReadOnly).is_catalog_kind());
    }
}
