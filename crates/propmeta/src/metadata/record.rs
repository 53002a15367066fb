use serde::{Deserialize, Serialize};

/// Presentation metadata aggregated from one property's annotations.
///
/// `loaded` is only ever `true` on records produced by extraction, so a
/// `MetadataRecord::default()` built by a caller is distinguishable from one
/// that was actually computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub loaded: bool,
    pub read_only: bool,
    pub category: String,
    pub display_name: String,
    pub hint: String,
    pub strip_prefix: String,
}

impl MetadataRecord {
    /// A freshly computed record with nothing applied yet.
    pub(crate) fn loaded() -> Self {
        Self {
            loaded: true,
            ..Default::default()
        }
    }

    /// Label for the property: the display name, or the raw identifier
    /// when none was declared.
    pub fn label_for<'a>(&'a self, raw_identifier: &'a str) -> &'a str {
        if self.display_name.is_empty() {
            raw_identifier
        } else {
            &self.display_name
        }
    }

    /// Enum value name with the declared prefix removed.
    ///
    /// Values that don't start with the prefix are returned unchanged.
    pub fn enum_value_label<'a>(&self, raw_value: &'a str) -> &'a str {
        raw_value
            .strip_prefix(self.strip_prefix.as_str())
            .unwrap_or(raw_value)
    }

    /// Whether an edit control should be enabled.
    pub fn is_editable(&self, has_setter: bool) -> bool {
        has_setter && !self.read_only
    }

    pub fn has_category(&self) -> bool {
        !self.category.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_not_loaded() {
        let record = MetadataRecord::default();
        assert!(!record.loaded);
        assert!(!record.read_only);
        assert!(record.category.is_empty());
    }

    #[test]
    fn loaded_record_has_defaults_otherwise() {
        let record = MetadataRecord::loaded();
        assert_eq!(
            record,
            MetadataRecord {
                loaded: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn label_falls_back_to_identifier() {
        let record = MetadataRecord::loaded();
        assert_eq!(record.label_for("background_color"), "background_color");

        let named = MetadataRecord {
            display_name: "Background Color".into(),
            ..MetadataRecord::loaded()
        };
        assert_eq!(named.label_for("background_color"), "Background Color");
    }

    #[test]
    fn enum_value_label_strips_prefix() {
        let record = MetadataRecord {
            strip_prefix: "cl".into(),
            ..MetadataRecord::loaded()
        };
        assert_eq!(record.enum_value_label("clRed"), "Red");
        // Not prefixed: unchanged
        assert_eq!(record.enum_value_label("Blue"), "Blue");
    }

    #[test]
    fn enum_value_label_without_prefix_is_identity() {
        let record = MetadataRecord::loaded();
        assert_eq!(record.enum_value_label("clRed"), "clRed");
    }

    #[test]
    fn read_only_overrides_setter() {
        let record = MetadataRecord {
            read_only: true,
            ..MetadataRecord::loaded()
        };
        assert!(!record.is_editable(true));
        assert!(MetadataRecord::loaded().is_editable(true));
        assert!(!MetadataRecord::loaded().is_editable(false));
    }

    #[test]
    fn has_category_reflects_field() {
        assert!(!MetadataRecord::loaded().has_category());
        let record = MetadataRecord {
            category: "Layout".into(),
            ..MetadataRecord::loaded()
        };
        assert!(record.has_category());
    }
}
