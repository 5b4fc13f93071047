// ABOUTME: Shopping-list aggregation merging ingredients that share a name and unit
// ABOUTME: Pure function preserving first-occurrence order of names and units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! # Ingredient Aggregation
//!
//! A recipe frequently lists the same ingredient more than once ("butter" for
//! the dough and again for the pan). [`aggregate_ingredients`] merges entries
//! into `(name, unit)` buckets and sums their amounts. Amounts in different
//! units are never converted, so `flour/g` and `flour/cup` stay separate.

use std::collections::HashMap;

use crate::models::Ingredient;

/// Merge ingredients into `(name, unit)` buckets
///
/// Each bucket keeps the descriptive fields of the first ingredient that
/// opened it and the sum of every contributing amount. Names appear in the
/// order they were first seen; a name's units follow in their own
/// first-seen order. An empty unit is an ordinary bucket.
pub fn aggregate_ingredients<'a, I>(ingredients: I) -> Vec<Ingredient>
where
    I: IntoIterator<Item = &'a Ingredient>,
{
    let mut name_slots: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<Vec<Ingredient>> = Vec::new();

    for ingredient in ingredients {
        let slot = *name_slots
            .entry(ingredient.name.as_str())
            .or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });

        let Some(group) = groups.get_mut(slot) else {
            continue;
        };
        match group.iter_mut().find(|bucket| bucket.unit == ingredient.unit) {
            Some(bucket) => bucket.amount += ingredient.amount,
            None => group.push(ingredient.clone()),
        }
    }

    groups.into_iter().flatten().collect()
}
