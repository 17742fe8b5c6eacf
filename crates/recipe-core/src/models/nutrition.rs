// ABOUTME: Nutrition models attached to recipe details
// ABOUTME: Nutrient rows with case-insensitive lookup by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One nutrient row, e.g. `Protein 31.0 g`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrient {
    /// Nutrient name as reported by the catalog
    pub name: String,
    /// Amount per serving
    pub amount: f64,
    /// Unit (g, mg, kcal, ...)
    pub unit: String,
}

/// Ordered nutrient table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    /// Nutrients in catalog order
    pub nutrients: Vec<Nutrient>,
}

impl Nutrition {
    /// Find a nutrient by name, ignoring case
    #[must_use]
    pub fn nutrient(&self, name: &str) -> Option<&Nutrient> {
        self.nutrients
            .iter()
            .find(|n| n.name.eq_ignore_ascii_case(name))
    }

    /// Energy in kcal, if listed
    #[must_use]
    pub fn calories(&self) -> Option<f64> {
        self.nutrient("Calories").map(|n| n.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nutrient_lookup_ignores_case() {
        let nutrition = Nutrition {
            nutrients: vec![
                Nutrient {
                    name: "Calories".to_owned(),
                    amount: 512.0,
                    unit: "kcal".to_owned(),
                },
                Nutrient {
                    name: "Protein".to_owned(),
                    amount: 22.5,
                    unit: "g".to_owned(),
                },
            ],
        };
        assert_eq!(nutrition.nutrient("protein").map(|n| n.amount), Some(22.5));
        assert_eq!(nutrition.calories(), Some(512.0));
        assert!(nutrition.nutrient("Fiber").is_none());
    }
}
