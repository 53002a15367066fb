//! Sample annotated models shared by unit and integration tests.

use once_cell::sync::Lazy;

use crate::annotations::{
    Category, DisplayName, ForeignAnnotation, Hint, ReadOnly, StripPrefix,
};
use crate::reflect::{PropertyTable, Reflect};

/// A colored swatch: the canonical `Color` property plus a few neighbours.
pub struct Swatch;

static SWATCH_PROPERTIES: Lazy<PropertyTable> = Lazy::new(|| {
    PropertyTable::builder("Swatch")
        .property(
            "Color",
            [
                Category::new("Appearance").into(),
                DisplayName::new("Background Color").into(),
                StripPrefix::new("cl").into(),
            ],
        )
        .property(
            "Opacity",
            [
                Category::new("Appearance").into(),
                Hint::new("0 is fully transparent, 1 is opaque").into(),
                ForeignAnnotation::with_payload("Default", "1.0").into(),
            ],
        )
        .property(
            "PixelCount",
            [
                ReadOnly.into(),
                Category::new("Diagnostics").into(),
                DisplayName::new("Pixel Count").into(),
            ],
        )
        .plain("Tag")
        .build()
        .expect("Swatch property table is well formed")
});

impl Reflect for Swatch {
    fn property_table() -> &'static PropertyTable {
        &SWATCH_PROPERTIES
    }
}

/// A model whose single property was decorated twice with the same kinds.
pub struct Relabelled;

static RELABELLED_PROPERTIES: Lazy<PropertyTable> = Lazy::new(|| {
    PropertyTable::builder("Relabelled")
        .property(
            "Mode",
            [
                Category::new("A").into(),
                DisplayName::new("First").into(),
                ForeignAnnotation::new("Transient").into(),
                Category::new("B").into(),
                DisplayName::new("Second").into(),
            ],
        )
        .build()
        .expect("Relabelled property table is well formed")
});

impl Reflect for Relabelled {
    fn property_table() -> &'static PropertyTable {
        &RELABELLED_PROPERTIES
    }
}
