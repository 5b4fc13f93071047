// ABOUTME: In-memory recipe provider for tests and offline browsing
// ABOUTME: Supports failure injection, held search responses and request recording
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use super::provider::{ProviderResult, RecipeProvider, SearchRequest};
use crate::errors::ProviderError;
use crate::models::{
    AnalyzedInstruction, ExtendedIngredient, InstructionStep, Measure, Measures, Nutrient,
    Nutrition, RecipeDetail, RecipeSummary, SearchResults,
};

const MOCK_PROVIDER: &str = "Mock";

/// Mock recipe provider (no API calls)
///
/// Random recipes rotate through the catalogue so consecutive calls return
/// different recipes until it wraps. Search matches titles case-insensitively.
pub struct MockRecipeProvider {
    recipes: Vec<RecipeDetail>,
    instructions: HashMap<u64, Vec<AnalyzedInstruction>>,
    random_cursor: AtomicUsize,
    failure: Mutex<Option<ProviderError>>,
    held_queries: Mutex<HashMap<String, Arc<Notify>>>,
    searches: Mutex<Vec<SearchRequest>>,
    calls: AtomicUsize,
}

impl MockRecipeProvider {
    /// Create a mock with a small sample catalogue
    #[must_use]
    pub fn new() -> Self {
        let recipes = vec![
            sample_recipe(
                716_429,
                "Pasta with Garlic, Scallions, Cauliflower & Breadcrumbs",
                45,
                &[
                    ("pasta", "g", 226.0),
                    ("garlic", "cloves", 5.0),
                    ("butter", "Tbsp", 2.0),
                    ("cauliflower", "g", 300.0),
                    ("butter", "Tbsp", 1.0),
                ],
                &["Boil the pasta.", "Brown the butter and garlic.", "Toss together."],
            ),
            sample_recipe(
                715_538,
                "Bruschetta Style Pork & Pasta",
                35,
                &[("pork chops", "g", 400.0), ("pasta", "g", 200.0), ("tomato", "", 3.0)],
                &["Sear the pork.", "Cook the pasta.", "Combine with tomato."],
            ),
            sample_recipe(
                782_585,
                "Cannellini Bean and Asparagus Salad with Mushrooms",
                45,
                &[("cannellini beans", "g", 425.0), ("asparagus", "g", 450.0)],
                &["Blanch the asparagus.", "Mix with beans."],
            ),
            sample_recipe(
                795_751,
                "Chicken Fajita Stuffed Bell Pepper",
                45,
                &[("chicken breast", "g", 300.0), ("bell pepper", "", 4.0)],
                &["Cook the chicken.", "Stuff the peppers.", "Bake for 20 minutes."],
            ),
        ];
        Self::with_recipes(recipes)
    }

    /// Create a mock with `count` generated recipes numbered from 1
    #[must_use]
    pub fn with_generated(count: u64) -> Self {
        let recipes = (1..=count)
            .map(|id| {
                sample_recipe(
                    id,
                    &format!("Recipe {id}"),
                    10 + u32::try_from(id % 50).unwrap_or(0),
                    &[("salt", "g", 1.0)],
                    &["Cook."],
                )
            })
            .collect();
        Self::with_recipes(recipes)
    }

    fn with_recipes(recipes: Vec<(RecipeDetail, Vec<AnalyzedInstruction>)>) -> Self {
        let instructions = recipes
            .iter()
            .map(|(detail, blocks)| (detail.id, blocks.clone()))
            .collect();
        Self {
            recipes: recipes.into_iter().map(|(detail, _)| detail).collect(),
            instructions,
            random_cursor: AtomicUsize::new(0),
            failure: Mutex::new(None),
            held_queries: Mutex::new(HashMap::new()),
            searches: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Fail every call with `error` until cleared with `None`
    pub async fn set_failure(&self, error: Option<ProviderError>) {
        *self.failure.lock().await = error;
    }

    /// Hold searches for `query` until the returned handle is notified
    pub async fn hold_query(&self, query: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.held_queries
            .lock()
            .await
            .insert(query.to_owned(), Arc::clone(&gate));
        gate
    }

    /// Search requests received so far
    pub async fn recorded_searches(&self) -> Vec<SearchRequest> {
        self.searches.lock().await.clone()
    }

    /// Number of provider calls received
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn begin_call(&self) -> ProviderResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.failure.lock().await.clone().map_or(Ok(()), Err)
    }

    fn find(&self, id: u64) -> ProviderResult<&RecipeDetail> {
        self.recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .ok_or_else(|| ProviderError::NotFound {
                provider: MOCK_PROVIDER.to_owned(),
                resource: format!("Recipe {id}"),
            })
    }
}

impl Default for MockRecipeProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeProvider for MockRecipeProvider {
    fn name(&self) -> &'static str {
        MOCK_PROVIDER
    }

    async fn random_recipes(&self, count: u32) -> ProviderResult<Vec<RecipeSummary>> {
        self.begin_call().await?;
        if self.recipes.is_empty() {
            return Ok(Vec::new());
        }
        let start = self
            .random_cursor
            .fetch_add(count_usize(count), Ordering::SeqCst);
        Ok(self
            .recipes
            .iter()
            .cycle()
            .skip(start % self.recipes.len())
            .take(count_usize(count))
            .map(RecipeDetail::to_summary)
            .collect())
    }

    async fn recipe_by_id(&self, id: u64) -> ProviderResult<RecipeDetail> {
        self.begin_call().await?;
        self.find(id).cloned()
    }

    async fn recipe_instructions(&self, id: u64) -> ProviderResult<Vec<AnalyzedInstruction>> {
        self.begin_call().await?;
        self.find(id)?;
        Ok(self.instructions.get(&id).cloned().unwrap_or_default())
    }

    async fn search(&self, request: &SearchRequest) -> ProviderResult<SearchResults> {
        self.searches.lock().await.push(request.clone());
        let gate = self.held_queries.lock().await.remove(&request.query);
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.begin_call().await?;

        let needle = request.query.trim().to_lowercase();
        let matches: Vec<RecipeSummary> = self
            .recipes
            .iter()
            .filter(|recipe| recipe.title.to_lowercase().contains(&needle))
            .map(RecipeDetail::to_summary)
            .collect();

        Ok(SearchResults {
            total_results: u32::try_from(matches.len()).unwrap_or(u32::MAX),
            results: matches
                .into_iter()
                .skip(count_usize(request.offset))
                .take(count_usize(request.number))
                .collect(),
            offset: request.offset,
            number: request.number,
        })
    }
}

fn count_usize(value: u32) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

fn sample_recipe(
    id: u64,
    title: &str,
    ready_in_minutes: u32,
    ingredients: &[(&str, &str, f64)],
    steps: &[&str],
) -> (RecipeDetail, Vec<AnalyzedInstruction>) {
    let extended_ingredients = ingredients
        .iter()
        .map(|&(name, unit, amount)| ExtendedIngredient {
            id: None,
            name: name.to_owned(),
            original: Some(format!("{amount} {unit} {name}")),
            image: Some(format!("{}.jpg", name.replace(' ', "-"))),
            amount: Some(amount),
            unit: Some(unit.to_owned()),
            measures: Some(Measures {
                metric: Some(Measure {
                    amount,
                    unit_short: Some(unit.to_owned()),
                    unit_long: None,
                }),
                us: None,
            }),
        })
        .collect();

    let detail = RecipeDetail {
        id,
        title: title.to_owned(),
        image: Some(format!("https://img.spoonacular.com/recipes/{id}-556x370.jpg")),
        ready_in_minutes: Some(ready_in_minutes),
        servings: Some(2),
        score: Some(75.0),
        summary: None,
        source_url: None,
        extended_ingredients: Some(extended_ingredients),
        nutrition: Some(Nutrition {
            nutrients: vec![
                nutrient("Calories", 540.4, "kcal"),
                nutrient("Protein", 18.6, "g"),
                nutrient("Fat", 21.2, "g"),
                nutrient("Carbohydrates", 70.1, "g"),
            ],
        }),
    };

    let instructions = vec![AnalyzedInstruction {
        name: String::new(),
        steps: steps
            .iter()
            .zip(1..)
            .map(|(step, number)| InstructionStep {
                number,
                step: (*step).to_owned(),
            })
            .collect(),
    }];

    (detail, instructions)
}

fn nutrient(name: &str, amount: f64, unit: &str) -> Nutrient {
    Nutrient {
        name: name.to_owned(),
        amount,
        unit: unit.to_owned(),
        percent_of_daily_needs: None,
    }
}
