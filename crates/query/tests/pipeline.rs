//! Integration tests: Catalog → QueryPipeline → DirectoryView.

use catalog::{Catalog, Category, DatasetSource, Startup};
use common::{CategorySelection, SortOrder};
use query::{CachedPipeline, FilterChange, FilterState, PageSize, QueryPipeline};

fn acme_catalog() -> Catalog {
    Catalog::from_json(
        r#"[
            {"name": "Acme", "categoryIds": ["ai"], "foundedYear": 2019},
            {"name": "Bex", "categoryIds": ["ai", "fin"], "foundedYear": 2021},
            {"name": "Acorn", "categoryIds": [], "foundedYear": 2019}
        ]"#,
        r#"[{"id": "ai"}, {"id": "fin"}, {"id": "health"}]"#,
    )
    .unwrap()
}

/// A larger deterministic catalog with many founding-year ties.
fn generated_catalog(n: usize) -> Catalog {
    let categories = vec![
        Category::new("ai"),
        Category::new("fin"),
        Category::new("health"),
        Category::new("unused"),
    ];
    let startups = (0..n)
        .map(|i| {
            let tags: Vec<&str> = match i % 4 {
                0 => vec!["ai"],
                1 => vec!["fin", "ai"],
                2 => vec!["health"],
                _ => vec![],
            };
            let name = if i % 3 == 0 {
                format!("Nova {i}")
            } else {
                format!("Zenith {i}")
            };
            Startup::new(name, 2000 + (i % 7) as i32).with_categories(tags)
        })
        .collect();
    Catalog::new(startups, categories).unwrap()
}

#[test]
fn test_concrete_scenarios() {
    let catalog = acme_catalog();
    let pipeline = QueryPipeline::new(&catalog, PageSize::new(2).unwrap());

    let view = pipeline.run(
        &FilterState::new()
            .search("ac")
            .category("all")
            .sort(SortOrder::Descending)
            .page(1),
    );
    assert_eq!(view.names(), vec!["Acme", "Acorn"]);
    assert_eq!(view.total_pages, 1);

    let view = pipeline.run(
        &FilterState::new()
            .search("")
            .category("fin")
            .sort(SortOrder::Ascending)
            .page(1),
    );
    assert_eq!(view.names(), vec!["Bex"]);
    assert_eq!(view.total_pages, 1);

    let used: Vec<&str> = pipeline
        .used_categories()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(used, vec!["ai", "fin"]);
}

#[test]
fn test_pages_reconstruct_filtered_sequence_exactly_once() {
    let catalog = generated_catalog(50);
    let pipeline = QueryPipeline::new(&catalog, PageSize::new(9).unwrap());

    for category in ["all", "ai", "fin", "health", "unused"] {
        for search in ["", "nova", "ZEN", "1"] {
            for sort in [SortOrder::Ascending, SortOrder::Descending] {
                let state = FilterState::new().search(search).category(category).sort(sort);
                let expected = pipeline.filtered_and_sorted(&state);
                let total_pages = pipeline.run(&state).total_pages;

                let rebuilt: Vec<&Startup> = (1..=total_pages as i64)
                    .flat_map(|page| pipeline.run(&state.clone().page(page)).startups)
                    .collect();

                assert_eq!(rebuilt, expected, "state: {state:?}");
            }
        }
    }
}

#[test]
fn test_sort_is_stable_relative_to_catalog_order() {
    let catalog = generated_catalog(40);
    let pipeline = QueryPipeline::new(&catalog, PageSize::default());
    let position = |s: &Startup| {
        catalog
            .startups()
            .iter()
            .position(|c| c.name == s.name)
            .unwrap()
    };

    for sort in [SortOrder::Ascending, SortOrder::Descending] {
        let sorted = pipeline.filtered_and_sorted(&FilterState::new().sort(sort));
        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            match sort {
                SortOrder::Ascending => assert!(a.founded_year <= b.founded_year),
                SortOrder::Descending => assert!(a.founded_year >= b.founded_year),
            }
            if a.founded_year == b.founded_year {
                assert!(position(a) < position(b));
            }
        }
    }
}

#[test]
fn test_out_of_range_pages_never_fail() {
    let catalog = generated_catalog(20);
    let pipeline = QueryPipeline::new(&catalog, PageSize::new(9).unwrap());

    for page in [i64::MIN, -3, 0, 1, 3, 4, 1_000, i64::MAX] {
        let view = pipeline.run(&FilterState::new().page(page));
        assert!((1..=view.total_pages).contains(&view.page));
        assert!(view.startups.len() <= 9);
        assert!(!view.startups.is_empty());
    }
}

#[test]
fn test_session_with_cached_pipeline() {
    let catalog = generated_catalog(30);
    let fresh = QueryPipeline::new(&catalog, PageSize::new(4).unwrap());
    let mut cached = CachedPipeline::new(fresh.clone());

    let mut state = FilterState::new();
    let session = [
        FilterChange::Page(3),
        FilterChange::Category(CategorySelection::from("ai")),
        FilterChange::Page(2),
        FilterChange::Search("nova".into()),
        FilterChange::Page(99),
        FilterChange::Sort(SortOrder::Ascending),
        FilterChange::ClearFilters,
        FilterChange::Page(0),
    ];

    for change in session {
        let resets = change.resets_page();
        state = state.apply(change);
        if resets {
            assert_eq!(state.page, 1);
        }

        let view = cached.run(&state);
        assert_eq!(view, fresh.run(&state));
        assert_eq!(view.total_count, 30);
        assert_eq!(view.used_categories.len(), 3);
    }
}

#[test]
fn test_view_serializes_for_presentation() {
    let catalog = acme_catalog();
    let pipeline = QueryPipeline::new(&catalog, PageSize::new(2).unwrap());

    let view = pipeline.run(&FilterState::new());
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["page"], 1);
    assert_eq!(json["totalPages"], 2);
    assert_eq!(json["filteredCount"], 3);
    assert_eq!(json["startups"][0]["name"], "Bex");
    assert_eq!(json["usedCategories"][1]["id"], "fin");
}
