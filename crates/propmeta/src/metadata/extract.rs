use crate::annotations::Annotation;
use crate::config::PropmetaConfig;
use crate::error::{PropmetaError, Result};
use crate::reflect::{PropertyId, PropertyRef};

use super::MetadataRecord;

/// Extract the presentation metadata of `property`.
///
/// # Panics
///
/// Panics if `property` is null.
pub fn extract_metadata(property: PropertyRef<'_>) -> MetadataRecord {
    Extractor::default().extract(property)
}

/// Like [`extract_metadata`], but reports a null handle as
/// [`PropmetaError::NullProperty`].
pub fn try_extract_metadata(property: PropertyRef<'_>) -> Result<MetadataRecord> {
    Extractor::default().try_extract(property)
}

/// Metadata extractor with its diagnostic settings.
///
/// Configuration only affects what gets logged; two extractors with
/// different configs always produce equal records for the same property.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: PropmetaConfig,
}

impl Extractor {
    pub fn new(config: PropmetaConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PropmetaConfig {
        &self.config
    }

    /// # Panics
    ///
    /// Panics if `property` is null.
    pub fn extract(&self, property: PropertyRef<'_>) -> MetadataRecord {
        match self.try_extract(property) {
            Ok(record) => record,
            Err(err) => panic!("extract_metadata: {err}"),
        }
    }

    pub fn try_extract(&self, property: PropertyRef<'_>) -> Result<MetadataRecord> {
        let info = property.get().ok_or(PropmetaError::NullProperty)?;

        let mut record = MetadataRecord::loaded();
        let mut seen = SeenKinds::default();

        for annotation in info.annotations() {
            if seen.mark(annotation) {
                self.report_duplicate(info.id(), annotation);
            }

            if annotation.is_catalog_kind() {
                tracing::trace!(
                    property = %info.id(),
                    kind = annotation.kind_name(),
                    "applying annotation"
                );
            }

            match annotation {
                Annotation::ReadOnly(_) => record.read_only = true,
                Annotation::Category(category) => record.category = category.name().to_string(),
                Annotation::Hint(hint) => record.hint = hint.hint_text().to_string(),
                Annotation::DisplayName(name) => record.display_name = name.name().to_string(),
                Annotation::StripPrefix(strip) => {
                    record.strip_prefix = strip.prefix().to_string()
                }
                Annotation::Foreign(foreign) => {
                    if self.config.log_foreign_annotations {
                        tracing::trace!(
                            property = %info.id(),
                            kind = foreign.kind(),
                            "ignoring foreign annotation"
                        );
                    }
                }
            }
        }

        Ok(record)
    }

    fn report_duplicate(&self, id: &PropertyId, annotation: &Annotation) {
        if self.config.warn_on_duplicate_kinds {
            tracing::warn!(
                property = %id,
                kind = annotation.kind_name(),
                "annotation kind attached more than once, last one wins"
            );
        } else {
            tracing::trace!(
                property = %id,
                kind = annotation.kind_name(),
                "annotation kind attached more than once, last one wins"
            );
        }
    }
}

/// Catalog kinds already applied during one fold.
#[derive(Default)]
struct SeenKinds(u8);

impl SeenKinds {
    /// Record `annotation`; returns true if its kind was already seen.
    fn mark(&mut self, annotation: &Annotation) -> bool {
        let bit = match annotation {
            Annotation::ReadOnly(_) => 1,
            Annotation::Category(_) => 1 << 1,
            Annotation::DisplayName(_) => 1 << 2,
            Annotation::Hint(_) => 1 << 3,
            Annotation::StripPrefix(_) => 1 << 4,
            Annotation::Foreign(_) => return false,
        };
        let repeated = (self.0 & bit) != 0;
        self.0 |= bit;
        repeated
    }
}
