//! Class definition schema flattened into defuzzified ratings.

use fuzzytype_core::error::KeyKind;
use fuzzytype_core::{defuzzify, DefuzzMode, FuzzyError, Result, SchemaSet};
use serde::{Deserialize, Serialize};

/// Defuzzified compatibility of one explicitly rated attribute value.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MatrixCell {
    pub class_label: String,
    pub attribute: String,
    pub value: String,
    pub score: f64,
}

impl MatrixCell {
    /// Column key combining attribute and value, e.g. `material : MUR`.
    pub fn column(&self) -> String {
        format!("{} : {}", self.attribute, self.value)
    }
}

/// One cell per class, weighted attribute and rated value, in declaration
/// order.
///
/// Attributes without a weight are skipped; a weighted attribute missing
/// from a class is a [`KeyKind::Attribute`] miss.
pub fn compatibility_matrix(schemas: &SchemaSet, mode: DefuzzMode) -> Result<Vec<MatrixCell>> {
    let mut cells = Vec::new();
    for (class_label, class) in schemas.classes.iter() {
        for attribute in schemas.weights.attributes() {
            let ratings = class.ratings(attribute).ok_or_else(|| {
                FuzzyError::missing(KeyKind::Attribute, format!("{}.{}", class_label, attribute))
            })?;
            for (value, label) in ratings {
                let level = schemas.compatibility.level(label)?;
                cells.push(MatrixCell {
                    class_label: class_label.to_string(),
                    attribute: attribute.to_string(),
                    value: value.clone(),
                    score: defuzzify(level, mode)?,
                });
            }
        }
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use fuzzytype_core::ClassDefinition;
    use fuzzytype_test::buildings::schema_set;

    use super::*;

    #[test]
    fn test_matrix_cells() {
        let schemas = schema_set();
        let cells = compatibility_matrix(&schemas, DefuzzMode::Mode).unwrap();

        // MUR rates 6 values, RC 5, W 5
        assert_eq!(cells.len(), 16);
        assert_eq!(cells[0].class_label, "MUR");
        assert_eq!(cells[0].column(), "material : MUR");
        assert_eq!(cells[0].score, 1.0);

        let wood_concrete = cells
            .iter()
            .find(|c| c.class_label == "W" && c.value == "CR")
            .unwrap();
        assert_eq!(wood_concrete.score, -1.0);
    }

    #[test]
    fn test_matrix_mean() {
        let schemas = schema_set();
        let cells = compatibility_matrix(&schemas, DefuzzMode::Mean).unwrap();
        let wood_concrete = cells
            .iter()
            .find(|c| c.class_label == "W" && c.value == "CR")
            .unwrap();
        assert!((wood_concrete.score - (-2.8 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_missing_attribute() {
        let mut schemas = schema_set();
        schemas.classes = schemas
            .classes
            .clone()
            .with_class("EMPTY", ClassDefinition::new());
        let err = compatibility_matrix(&schemas, DefuzzMode::Mode).unwrap_err();
        assert_eq!(err, FuzzyError::missing(KeyKind::Attribute, "EMPTY.material"));
    }
}
