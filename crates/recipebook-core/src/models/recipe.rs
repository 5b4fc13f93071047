// ABOUTME: Recipe provider data models for summaries, details, nutrition and instructions
// ABOUTME: Optional nested provider fields are explicit with display fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::provider::NUTRIENT_UNAVAILABLE;

/// Provider search filters keyed by option name (`cuisine`, `diet`, `maxReadyTime`, ...)
///
/// Ordered so that request URLs and cache keys are deterministic.
pub type SearchFilters = BTreeMap<String, String>;

/// Recipe as listed in random and search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    /// Provider recipe id
    pub id: u64,
    /// Recipe title
    pub title: String,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Preparation time in minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    /// Provider quality score
    #[serde(
        default,
        alias = "spoonacularScore",
        skip_serializing_if = "Option::is_none"
    )]
    pub score: Option<f64>,
}

impl RecipeSummary {
    /// Image URL, empty when the provider sent none
    #[must_use]
    pub fn image_url(&self) -> &str {
        self.image.as_deref().unwrap_or_default()
    }

    /// Preparation time, zero when unknown
    #[must_use]
    pub fn ready_minutes(&self) -> u32 {
        self.ready_in_minutes.unwrap_or(0)
    }

    /// Score, zero when unknown
    #[must_use]
    pub fn score_value(&self) -> f64 {
        self.score.unwrap_or(0.0)
    }
}

/// Response body of the provider's random endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomRecipes {
    /// Randomly chosen recipes
    #[serde(default)]
    pub recipes: Vec<RecipeSummary>,
}

/// Response body of the provider's search endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    /// Matching recipes for the requested window
    #[serde(default)]
    pub results: Vec<RecipeSummary>,
    /// Offset the window starts at
    #[serde(default)]
    pub offset: u32,
    /// Window size requested
    #[serde(default)]
    pub number: u32,
    /// Total matches across all pages
    #[serde(default)]
    pub total_results: u32,
}

/// One metric or US measure of an ingredient
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measure {
    /// Quantity
    #[serde(default)]
    pub amount: f64,
    /// Abbreviated unit (`g`, `ml`, `Tbsps`)
    #[serde(default)]
    pub unit_short: Option<String>,
    /// Spelled-out unit
    #[serde(default)]
    pub unit_long: Option<String>,
}

/// Measures for an ingredient in both systems
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Measures {
    /// Metric measure
    #[serde(default)]
    pub metric: Option<Measure>,
    /// US customary measure
    #[serde(default)]
    pub us: Option<Measure>,
}

/// Ingredient as returned inside recipe details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedIngredient {
    /// Provider ingredient id
    #[serde(default)]
    pub id: Option<u64>,
    /// Ingredient name
    pub name: String,
    /// Original recipe line ("2 cups flour")
    #[serde(default)]
    pub original: Option<String>,
    /// Image file name
    #[serde(default)]
    pub image: Option<String>,
    /// Quantity in the recipe's own unit
    #[serde(default)]
    pub amount: Option<f64>,
    /// Recipe's own unit
    #[serde(default)]
    pub unit: Option<String>,
    /// Normalized metric and US measures
    #[serde(default)]
    pub measures: Option<Measures>,
}

/// Ingredient reduced to what the shopping list needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name
    pub name: String,
    /// Unit; empty string when the provider gave none
    pub unit: String,
    /// Quantity
    pub amount: f64,
    /// Image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&ExtendedIngredient> for Ingredient {
    /// Prefers the metric measure; falls back to the top-level amount and unit
    fn from(raw: &ExtendedIngredient) -> Self {
        let metric = raw.measures.as_ref().and_then(|m| m.metric.as_ref());
        let (amount, unit) = metric.map_or_else(
            || (raw.amount.unwrap_or(0.0), raw.unit.clone().unwrap_or_default()),
            |m| (m.amount, m.unit_short.clone().unwrap_or_default()),
        );
        Self {
            name: raw.name.clone(),
            unit,
            amount,
            image: raw.image.clone(),
        }
    }
}

/// Single nutrient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nutrient {
    /// Nutrient name ("Calories", "Protein")
    pub name: String,
    /// Quantity per serving
    pub amount: f64,
    /// Unit ("kcal", "g")
    #[serde(default)]
    pub unit: String,
    /// Share of daily needs in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_of_daily_needs: Option<f64>,
}

/// Nutrition block of recipe details
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    /// Nutrient lines
    #[serde(default)]
    pub nutrients: Vec<Nutrient>,
}

/// Full recipe details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    /// Provider recipe id
    pub id: u64,
    /// Recipe title
    pub title: String,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Preparation time in minutes
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    /// Servings the amounts are for
    #[serde(default)]
    pub servings: Option<u32>,
    /// Provider quality score
    #[serde(default, alias = "spoonacularScore")]
    pub score: Option<f64>,
    /// HTML summary text
    #[serde(default)]
    pub summary: Option<String>,
    /// Original publisher URL
    #[serde(default)]
    pub source_url: Option<String>,
    /// Raw ingredient list; absent for some recipes
    #[serde(default)]
    pub extended_ingredients: Option<Vec<ExtendedIngredient>>,
    /// Nutrition; only present when requested and available
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

impl RecipeDetail {
    /// Ingredients in provider order; empty when the provider sent no list
    #[must_use]
    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.extended_ingredients
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(Ingredient::from)
            .collect()
    }

    /// Nutrient by exact name
    #[must_use]
    pub fn nutrient(&self, name: &str) -> Option<&Nutrient> {
        self.nutrition
            .as_ref()?
            .nutrients
            .iter()
            .find(|nutrient| nutrient.name == name)
    }

    /// Nutrient rendered as rounded amount plus unit (`"412kcal"`), or `"N/A"`
    #[must_use]
    pub fn nutrient_display(&self, name: &str) -> String {
        self.nutrient(name).map_or_else(
            || NUTRIENT_UNAVAILABLE.to_owned(),
            |nutrient| format!("{}{}", nutrient.amount.round(), nutrient.unit),
        )
    }

    /// Listing-sized view of these details
    #[must_use]
    pub fn to_summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            title: self.title.clone(),
            image: self.image.clone(),
            ready_in_minutes: self.ready_in_minutes,
            score: self.score,
        }
    }
}

/// One step of an instruction block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionStep {
    /// Step number within its block
    #[serde(default)]
    pub number: u32,
    /// Step text
    pub step: String,
}

/// Instruction block ("For the sauce", or unnamed)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalyzedInstruction {
    /// Block name; empty for the main block
    #[serde(default)]
    pub name: String,
    /// Steps of this block
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
}

/// Steps of the first instruction block, renumbered from 1
#[must_use]
pub fn first_block_steps(instructions: &[AnalyzedInstruction]) -> Vec<InstructionStep> {
    instructions
        .first()
        .map(|block| {
            block
                .steps
                .iter()
                .zip(1..)
                .map(|(step, number)| InstructionStep {
                    number,
                    step: step.step.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}
