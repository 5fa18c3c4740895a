//! Building typology fixtures.
//!
//! Three classes rated on three weighted attributes, with height ranges:
//!
//! | class | height  | material      | lateral_system | roof |
//! |-------|---------|---------------|----------------|------|
//! | `MUR` | 1 - 4   | MUR `+++`     | LWAL `++`      | RWO `+` |
//! | `RC`  | 1 - 20  | CR `+++`      | LFM `++`       | RC `++` |
//! | `W`   | 1 - 3   | W `+++`       | LWAL `+`       | RWO `++` |
//!
//! # Example
//!
//! ```
//! use fuzzytype_test::buildings::{entities, schema_set};
//!
//! let schemas = schema_set();
//! assert!(schemas.validate().is_ok());
//! assert_eq!(schemas.classes.labels().collect::<Vec<_>>(), ["MUR", "RC", "W"]);
//! assert_eq!(entities().len(), 4);
//! ```

use fuzzytype_core::{
    ClassDefinition, ClassDefinitionSchema, CompatibilitySchema, Entity, Height, SchemaSet, Tfn,
    WeightSchema,
};

/// Seven compatibility levels from `---` to `+++`.
pub fn compatibility_schema() -> CompatibilitySchema {
    CompatibilitySchema::new([
        ("---", Tfn::new(-1.0, -1.0, -0.8)),
        ("--", Tfn::new(-0.9, -0.65, -0.4)),
        ("-", Tfn::new(-0.5, -0.3, -0.1)),
        ("0", Tfn::new(-0.2, 0.0, 0.2)),
        ("+", Tfn::new(0.1, 0.3, 0.5)),
        ("++", Tfn::new(0.4, 0.65, 0.9)),
        ("+++", Tfn::new(0.8, 1.0, 1.0)),
    ])
}

/// Weights summing to one.
pub fn weight_schema() -> WeightSchema {
    WeightSchema::new()
        .with_weight("material", 0.5)
        .with_weight("lateral_system", 0.3)
        .with_weight("roof", 0.2)
}

pub fn masonry() -> ClassDefinition {
    ClassDefinition::new()
        .with_height(1.0, 4.0)
        .with_rating("material", "MUR", "+++")
        .with_rating("material", "CR", "--")
        .with_rating("material", "W", "-")
        .with_rating("lateral_system", "LWAL", "++")
        .with_rating("lateral_system", "LFM", "-")
        .with_rating("roof", "RWO", "+")
}

pub fn concrete() -> ClassDefinition {
    ClassDefinition::new()
        .with_height(1.0, 20.0)
        .with_rating("material", "CR", "+++")
        .with_rating("material", "MUR", "--")
        .with_rating("lateral_system", "LFM", "++")
        .with_rating("lateral_system", "LWAL", "+")
        .with_rating("roof", "RC", "++")
}

pub fn wood() -> ClassDefinition {
    ClassDefinition::new()
        .with_height(1.0, 3.0)
        .with_rating("material", "W", "+++")
        .with_rating("material", "CR", "---")
        .with_rating("material", "MUR", "-")
        .with_rating("lateral_system", "LWAL", "+")
        .with_rating("roof", "RWO", "++")
}

/// Classes in the order `MUR`, `RC`, `W`.
pub fn class_schema() -> ClassDefinitionSchema {
    ClassDefinitionSchema::new()
        .with_class("MUR", masonry())
        .with_class("RC", concrete())
        .with_class("W", wood())
}

pub fn schema_set() -> SchemaSet {
    SchemaSet::new(weight_schema(), class_schema(), compatibility_schema())
}

/// Builds an entity rated on the three fixture attributes.
pub fn building(
    id: &str,
    height: impl Into<Height>,
    material: &str,
    lateral_system: &str,
    roof: &str,
) -> Entity {
    Entity::new(id)
        .with_height(height)
        .with_attribute("material", material)
        .with_attribute("lateral_system", lateral_system)
        .with_attribute("roof", roof)
}

/// Four buildings:
///
/// - `b1`: two-storey masonry
/// - `b2`: eight-metre concrete frame, too tall for `MUR` and `W`
/// - `b3`: wood without height data
/// - `b4`: unrated values everywhere
pub fn entities() -> Vec<Entity> {
    vec![
        building("b1", 2.0, "MUR", "LWAL", "RWO"),
        building("b2", 8.0, "CR", "LFM", "RC"),
        building("b3", Height::NoData, "W", "LWAL", "RWO"),
        building("b4", 2.0, "ADOBE", "OTHER", "THATCH"),
    ]
}
