//! End-to-end tests for the recommendation resolver against in-memory
//! backends.

use std::sync::Arc;

use catalog::{DiscoveredMovie, Genre, MovieDetails, StaticCatalog};
use resolver::{RecommendError, Recommender, Source};
use store::{MemoryScoreStore, MemoryWatchlistStore, ScoredItem};

fn movie(id: i64, title: &str, genres: Vec<(i64, &str)>) -> MovieDetails {
    MovieDetails {
        id,
        title: title.to_string(),
        poster_path: None,
        backdrop_path: None,
        overview: None,
        vote_average: 0.0,
        release_date: None,
        runtime: None,
        genres: genres
            .into_iter()
            .map(|(id, name)| Genre {
                id,
                name: name.to_string(),
            })
            .collect(),
    }
}

fn discovered(id: i64, title: &str, popularity: f64) -> DiscoveredMovie {
    DiscoveredMovie {
        id,
        title: title.to_string(),
        poster_path: None,
        overview: None,
        vote_average: 0.0,
        release_date: None,
        popularity,
        genre_ids: Vec::new(),
    }
}

fn scored(item_id: &str, score: f64) -> ScoredItem {
    ScoredItem {
        item_id: item_id.to_string(),
        score,
    }
}

/// Watchlist: movie 10 ("Action", "Drama"). Catalog also knows 20 (Comedy)
/// and 30 (Action).
fn action_drama_fixture() -> (MemoryWatchlistStore, StaticCatalog) {
    let watchlist = MemoryWatchlistStore::new().with("u1", 10);
    let catalog = StaticCatalog::new()
        .with_movie(movie(10, "Watched One", vec![(28, "Action"), (18, "Drama")]))
        .with_movie(movie(20, "Comedy Pick", vec![(35, "Comedy")]))
        .with_movie(movie(30, "Action Pick", vec![(28, "Action")]));
    (watchlist, catalog)
}

fn recommender(
    watchlist: MemoryWatchlistStore,
    scores: MemoryScoreStore,
    catalog: StaticCatalog,
) -> Recommender {
    Recommender::new(Arc::new(watchlist), Arc::new(scores), Arc::new(catalog))
}

#[tokio::test]
async fn test_primary_filter_keeps_genre_overlap_and_drops_watched() {
    let (watchlist, catalog) = action_drama_fixture();
    let scores = MemoryScoreStore::new().with_scores(
        "u1",
        vec![scored("20", 0.9), scored("10", 0.8), scored("30", 0.5)],
    );

    let recs = recommender(watchlist, scores, catalog)
        .recommend("u1", 10)
        .await
        .unwrap();

    // "10" is watched, "20" has no genre overlap, "30" shares Action.
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].item_id, "30");
    assert!((recs[0].score - 0.5).abs() < 1e-9);
    assert_eq!(recs[0].source, Source::Model);
}

#[tokio::test]
async fn test_fallback_triggers_when_primary_filter_empties() {
    let (watchlist, catalog) = action_drama_fixture();
    // Only candidate is the Comedy movie: no overlap with Action/Drama.
    let scores = MemoryScoreStore::new().with_scores("u1", vec![scored("20", 0.9)]);
    let catalog = catalog
        .with_discover(
            28,
            vec![
                discovered(500, "Big Action", 90.0),
                discovered(10, "Watched One", 80.0),
                discovered(501, "More Action", 70.0),
            ],
        )
        .with_discover(
            18,
            vec![
                discovered(501, "More Action", 70.0),
                discovered(600, "Big Drama", 60.0),
            ],
        );

    let recs = recommender(watchlist, scores, catalog)
        .recommend("u1", 10)
        .await
        .unwrap();

    // Genres iterate name-sorted (Action before Drama); dedup is first-seen
    // across genres; watched movie 10 is excluded.
    let ids: Vec<&str> = recs.iter().map(|r| r.item_id.as_str()).collect();
    assert_eq!(ids, vec!["500", "501", "600"]);
    for rec in &recs {
        assert_eq!(rec.source, Source::Fallback);
        assert_eq!(rec.score, 0.0);
    }
}

#[tokio::test]
async fn test_fallback_never_coexists_with_primary_results() {
    let (watchlist, catalog) = action_drama_fixture();
    let scores = MemoryScoreStore::new().with_scores("u1", vec![scored("30", 0.5)]);
    // Discovery data exists, but must not be consulted.
    let catalog = catalog.with_discover(28, vec![discovered(500, "Big Action", 90.0)]);

    let recs = recommender(watchlist, scores, catalog)
        .recommend("u1", 10)
        .await
        .unwrap();

    assert_eq!(recs.len(), 1);
    assert!(recs.iter().all(|r| r.source == Source::Model));
}

#[tokio::test]
async fn test_missing_score_artifact_is_distinguishable() {
    let (watchlist, catalog) = action_drama_fixture();
    let scores = MemoryScoreStore::new();

    let err = recommender(watchlist, scores, catalog)
        .recommend("u1", 10)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RecommendError::NoScoresAvailable { user_id } if user_id == "u1"
    ));
}

#[tokio::test]
async fn test_empty_watchlist_yields_empty_output() {
    let watchlist = MemoryWatchlistStore::new();
    let catalog = StaticCatalog::new().with_movie(movie(30, "Action Pick", vec![(28, "Action")]));
    let scores = MemoryScoreStore::new().with_scores("u1", vec![scored("30", 0.5)]);

    let recs = recommender(watchlist, scores, catalog)
        .recommend("u1", 10)
        .await
        .unwrap();

    // No watched genres means no overlap and no fallback either.
    assert!(recs.is_empty());
}

#[tokio::test]
async fn test_all_watched_lookups_failing_degrades_to_empty() {
    // Movie 10 is watched but unknown to the catalog, so watched genres
    // stay empty; fallback is skipped and the result is empty, not an error.
    let watchlist = MemoryWatchlistStore::new().with("u1", 10);
    let catalog = StaticCatalog::new().with_movie(movie(30, "Action Pick", vec![(28, "Action")]));
    let scores = MemoryScoreStore::new().with_scores("u1", vec![scored("30", 0.5)]);

    let recs = recommender(watchlist, scores, catalog)
        .recommend("u1", 10)
        .await
        .unwrap();

    assert!(recs.is_empty());
}

#[tokio::test]
async fn test_output_is_truncated_to_top_n() {
    let watchlist = MemoryWatchlistStore::new().with("u1", 10);
    let mut catalog =
        StaticCatalog::new().with_movie(movie(10, "Watched One", vec![(28, "Action")]));
    let mut items = Vec::new();
    for id in 100..110 {
        catalog = catalog.with_movie(movie(id, "Action Pick", vec![(28, "Action")]));
        items.push(scored(&id.to_string(), 1.0 - id as f64 / 1000.0));
    }
    let scores = MemoryScoreStore::new().with_scores("u1", items);

    let recs = recommender(watchlist, scores, catalog)
        .recommend("u1", 3)
        .await
        .unwrap();

    assert_eq!(recs.len(), 3);
    // Truncation keeps the head of the pre-sorted list.
    let ids: Vec<&str> = recs.iter().map(|r| r.item_id.as_str()).collect();
    assert_eq!(ids, vec!["100", "101", "102"]);
}

#[tokio::test]
async fn test_watched_candidate_never_appears() {
    let (watchlist, catalog) = action_drama_fixture();
    let scores = MemoryScoreStore::new().with_scores(
        "u1",
        vec![scored("10", 0.99), scored("30", 0.5), scored("10", 0.4)],
    );

    let recs = recommender(watchlist, scores, catalog)
        .recommend("u1", 10)
        .await
        .unwrap();

    assert!(recs.iter().all(|r| r.item_id != "10"));
}

#[tokio::test]
async fn test_model_order_is_preserved_without_resorting() {
    let watchlist = MemoryWatchlistStore::new().with("u1", 10);
    let catalog = StaticCatalog::new()
        .with_movie(movie(10, "Watched One", vec![(28, "Action")]))
        .with_movie(movie(41, "A", vec![(28, "Action")]))
        .with_movie(movie(42, "B", vec![(28, "Action")]))
        .with_movie(movie(43, "C", vec![(28, "Action")]));
    // Deliberately not score-sorted: the resolver must not reorder.
    let scores = MemoryScoreStore::new().with_scores(
        "u1",
        vec![scored("42", 0.2), scored("41", 0.9), scored("43", 0.5)],
    );

    let recs = recommender(watchlist, scores, catalog)
        .recommend("u1", 10)
        .await
        .unwrap();

    let ids: Vec<&str> = recs.iter().map(|r| r.item_id.as_str()).collect();
    assert_eq!(ids, vec!["42", "41", "43"]);
}
