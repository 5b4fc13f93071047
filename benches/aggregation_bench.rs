// ABOUTME: Criterion benchmarks for shopping-list aggregation and page windows
// ABOUTME: Measures merge cost for ingredient lists of growing size with repeated names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook

//! Criterion benchmarks for the pure recipe helpers.
//!
//! Ingredient lists are generated with a fixed share of repeated names and
//! mixed units so the bucket lookup path is exercised.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recipebook_server::ingredients::aggregate_ingredients;
use recipebook_server::models::Ingredient;
use recipebook_server::pagination::page_window;

const UNITS: [&str; 4] = ["g", "ml", "cup", ""];

fn generate_ingredients(count: usize) -> Vec<Ingredient> {
    (0..count)
        .map(|i| Ingredient {
            name: format!("ingredient {}", i % (count / 3).max(1)),
            unit: UNITS[i % UNITS.len()].to_owned(),
            amount: 1.5,
            image: None,
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_ingredients");
    for size in [10_usize, 50, 250, 1000] {
        let ingredients = generate_ingredients(size);
        group.throughput(Throughput::Elements(
            u64::try_from(size).unwrap_or(u64::MAX),
        ));
        group.bench_with_input(BenchmarkId::from_parameter(size), &ingredients, |b, list| {
            b.iter(|| aggregate_ingredients(black_box(list)));
        });
    }
    group.finish();
}

fn bench_page_window(c: &mut Criterion) {
    c.bench_function("page_window_middle", |b| {
        b.iter(|| page_window(black_box(250), black_box(500)));
    });
}

criterion_group!(benches, bench_aggregate, bench_page_window);
criterion_main!(benches);
