// ABOUTME: Recipe domain models: summaries, details, ingredients and instruction steps
// ABOUTME: Difficulty is derived from preparation time for listing display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Nutrition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rough effort bucket shown next to listing results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Ready in half an hour or less
    Easy,
    /// Ready within an hour
    Medium,
    /// Takes longer than an hour
    Hard,
    /// Catalog did not report a preparation time
    #[default]
    Unknown,
}

impl Difficulty {
    /// Bucket a preparation time in minutes
    #[must_use]
    pub const fn from_ready_minutes(minutes: Option<u32>) -> Self {
        match minutes {
            Some(0..=30) => Self::Easy,
            Some(31..=60) => Self::Medium,
            Some(_) => Self::Hard,
            None => Self::Unknown,
        }
    }

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a search or listing response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Catalog recipe id
    pub id: u64,
    /// Recipe title
    pub title: String,
    /// Thumbnail image URL (empty when the catalog has none)
    pub image_url: String,
    /// Preparation time, when reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_minutes: Option<u32>,
    /// Effort bucket derived from `ready_minutes`
    pub difficulty: Difficulty,
}

impl RecipeSummary {
    /// Build a summary, deriving its difficulty
    #[must_use]
    pub fn new(id: u64, title: String, image_url: String, ready_minutes: Option<u32>) -> Self {
        Self {
            id,
            title,
            image_url,
            ready_minutes,
            difficulty: Difficulty::from_ready_minutes(ready_minutes),
        }
    }
}

/// Ingredient line as written in the recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Catalog ingredient id
    pub id: u64,
    /// Original free-text line, e.g. "2 cups flour"
    pub original: String,
}

/// Single instruction within a group.
///
/// `number` is provided by the catalog, is 1-based and is not guaranteed to be
/// contiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    /// Source-provided step number
    pub number: u32,
    /// Instruction text
    pub text: String,
}

impl Step {
    /// Create a step
    #[must_use]
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Named block of instructions (the catalog may split e.g. "For the sauce")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionGroup {
    /// Group name, often empty for the main block
    pub name: String,
    /// Ordered steps
    pub steps: Vec<Step>,
}

/// Fully described recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    /// Catalog recipe id (identity)
    pub id: u64,
    /// Recipe title
    pub title: String,
    /// Hero image URL
    pub image_url: String,
    /// Preparation time in minutes
    pub ready_minutes: u32,
    /// Number of servings
    pub servings: u32,
    /// Ingredient lines in catalog order
    pub ingredients: Vec<Ingredient>,
    /// Instruction groups in catalog order
    pub instruction_groups: Vec<InstructionGroup>,
    /// Nutrient table, when requested and available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
}

impl RecipeDetail {
    /// Steps a cooking session walks through: the first group's, or none
    #[must_use]
    pub fn first_group_steps(&self) -> &[Step] {
        self.instruction_groups
            .first()
            .map_or(&[][..], |group| group.steps.as_slice())
    }

    /// Listing view of this recipe
    #[must_use]
    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary::new(
            self.id,
            self.title.clone(),
            self.image_url.clone(),
            Some(self.ready_minutes),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(groups: Vec<InstructionGroup>) -> RecipeDetail {
        RecipeDetail {
            id: 7,
            title: "Pad Thai".to_owned(),
            image_url: String::new(),
            ready_minutes: 45,
            servings: 2,
            ingredients: Vec::new(),
            instruction_groups: groups,
            nutrition: None,
        }
    }

    #[test]
    fn test_difficulty_buckets() {
        assert_eq!(Difficulty::from_ready_minutes(Some(15)), Difficulty::Easy);
        assert_eq!(Difficulty::from_ready_minutes(Some(30)), Difficulty::Easy);
        assert_eq!(Difficulty::from_ready_minutes(Some(31)), Difficulty::Medium);
        assert_eq!(Difficulty::from_ready_minutes(Some(61)), Difficulty::Hard);
        assert_eq!(Difficulty::from_ready_minutes(None), Difficulty::Unknown);
    }

    #[test]
    fn test_first_group_steps_uses_only_first_group() {
        let recipe = detail(vec![
            InstructionGroup {
                name: String::new(),
                steps: vec![Step::new(1, "Soak noodles"), Step::new(2, "Fry tofu")],
            },
            InstructionGroup {
                name: "Sauce".to_owned(),
                steps: vec![Step::new(1, "Mix tamarind")],
            },
        ]);
        assert_eq!(recipe.first_group_steps().len(), 2);
        assert_eq!(recipe.first_group_steps()[1].text, "Fry tofu");
    }

    #[test]
    fn test_first_group_steps_empty_without_groups() {
        assert!(detail(Vec::new()).first_group_steps().is_empty());
    }

    #[test]
    fn test_summary_carries_difficulty() {
        let summary = detail(Vec::new()).summary();
        assert_eq!(summary.difficulty, Difficulty::Medium);
        assert_eq!(summary.ready_minutes, Some(45));
    }
}
