//! Integration tests over a seeded directory
//!
//! Tests the full end-to-end flow: seed → DirectoryStore → PageProvider →
//! BrowseSession / HTTP router

use axum::body::Body;
use axum::http::{Request, StatusCode};
use dirpage::pagination::{PageProvider, PaginationRequest};
use dirpage::session::{
    next_page_request, should_fetch_more, BrowseSession, FetchOutcome, FetchPolicy,
    PageAccumulator, SessionConfig,
};
use dirpage::store::{seed_directory, DirectoryStore, SeedConfig};
use dirpage::{all_query_args, Error};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn seeded_provider() -> (TempDir, PageProvider<DirectoryStore>) {
    let dir = tempfile::tempdir().unwrap();
    let written = seed_directory(dir.path(), &SeedConfig::default()).unwrap();
    assert_eq!(written, 25);
    let provider = PageProvider::new(DirectoryStore::new(dir.path()));
    (dir, provider)
}

fn names(entries: &[dirpage::Entry]) -> Vec<String> {
    entries.iter().map(|e| e.display_name.clone()).collect()
}

fn file_names(range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|i| format!("file-{i}")).collect()
}

// ============================================================================
// Provider Scenarios
// ============================================================================

#[test]
fn test_first_page() {
    let (_dir, provider) = seeded_provider();
    let page = provider.query(&PaginationRequest::new(0, 10)).unwrap();

    assert_eq!(names(&page.entries), file_names(0..10));
    assert_eq!(page.total_size, 25);
    assert_eq!(page.honored_arguments, all_query_args());
    assert!(page.entries.iter().all(|e| e.size_bytes == 1024));
}

#[test]
fn test_partial_last_page() {
    let (_dir, provider) = seeded_provider();
    let page = provider.query(&PaginationRequest::new(20, 10)).unwrap();

    assert_eq!(names(&page.entries), file_names(20..25));
    assert_eq!(page.total_size, 25);
}

#[test]
fn test_offset_past_end() {
    let (_dir, provider) = seeded_provider();
    let page = provider.query(&PaginationRequest::new(30, 10)).unwrap();

    assert!(page.entries.is_empty());
    assert_eq!(page.total_size, 25);
}

#[test]
fn test_negative_offset() {
    let (_dir, provider) = seeded_provider();
    let err = provider.query(&PaginationRequest::new(-1, 10)).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn test_accumulator_and_trigger() {
    let (_dir, provider) = seeded_provider();
    let mut accumulator = PageAccumulator::new();
    accumulator.reset();
    accumulator.append_page(provider.query(&PaginationRequest::new(0, 10)).unwrap());

    assert_eq!(accumulator.fetched_count(), 10);
    assert!(!should_fetch_more(9, accumulator.fetched_count()));
    assert!(should_fetch_more(10, accumulator.fetched_count()));
    assert_eq!(
        next_page_request(10, 10).unwrap(),
        PaginationRequest::new(10, 10)
    );
}

#[test]
fn test_absolute_paths_point_into_root() {
    let (dir, provider) = seeded_provider();
    let root = dir.path().canonicalize().unwrap();
    let page = provider.query(&PaginationRequest::new(0, 3)).unwrap();

    for entry in &page.entries {
        let path = std::path::Path::new(&entry.absolute_path);
        assert!(path.is_absolute());
        assert_eq!(path.parent().unwrap(), root);
    }
}

// ============================================================================
// Session Tests
// ============================================================================

#[tokio::test]
async fn test_browse_whole_listing() {
    let (_dir, provider) = seeded_provider();
    let mut session = BrowseSession::new(Arc::new(provider), &SessionConfig::default()).unwrap();

    let mut outcome = session.start().await.unwrap();
    let mut messages = Vec::new();
    while let FetchOutcome::Fetched(summary) = outcome {
        messages.push(summary.to_string());
        let last_visible = session.accumulator().fetched_count();
        outcome = session.on_scroll(last_visible).await.unwrap();
    }

    assert_eq!(outcome, FetchOutcome::Empty { total_size: 25 });
    assert_eq!(
        messages,
        vec![
            "Fetched entries 1 to 10 out of 25",
            "Fetched entries 11 to 20 out of 25",
            "Fetched entries 21 to 25 out of 25",
        ]
    );
    assert_eq!(names(session.accumulator().items()), file_names(0..25));
    assert_eq!(session.stats().pages_fetched, 3);
    assert_eq!(session.stats().empty_fetches, 1);
}

#[tokio::test]
async fn test_containing_page_policy_never_duplicates() {
    let (_dir, provider) = seeded_provider();
    let config = SessionConfig::default().with_policy(FetchPolicy::ContainingPage);
    let mut session = BrowseSession::new(Arc::new(provider), &config).unwrap();

    session.start().await.unwrap();
    session.on_scroll(10).await.unwrap();
    session.on_scroll(20).await.unwrap();

    // Partial last page: scrolling to its end re-plans the same block
    let outcome = session.on_scroll(25).await.unwrap();
    assert_eq!(outcome, FetchOutcome::AlreadyLoaded { page_id: 2 });
    assert_eq!(names(session.accumulator().items()), file_names(0..25));
}

#[tokio::test]
async fn test_scrolling_past_fetched_entries_keeps_positions() {
    for policy in [FetchPolicy::NextUnseen, FetchPolicy::ContainingPage] {
        let (_dir, provider) = seeded_provider();
        let config = SessionConfig::default().with_policy(policy);
        let mut session = BrowseSession::new(Arc::new(provider), &config).unwrap();
        session.start().await.unwrap();

        // The reader jumps straight to the bottom of the list
        let mut outcome = session.on_scroll(24).await.unwrap();
        while outcome.is_fetched() {
            outcome = session.on_scroll(24).await.unwrap();
        }

        assert_eq!(outcome, FetchOutcome::NotNeeded, "{policy:?}");
        assert_eq!(
            names(session.accumulator().items()),
            file_names(0..25),
            "{policy:?}"
        );
    }
}

#[tokio::test]
async fn test_containing_page_policy_sees_files_added_after_partial_page() {
    let (dir, provider) = seeded_provider();
    let config = SessionConfig::default().with_policy(FetchPolicy::ContainingPage);
    let mut session = BrowseSession::new(Arc::new(provider), &config).unwrap();

    session.start().await.unwrap();
    session.on_scroll(10).await.unwrap();
    session.on_scroll(20).await.unwrap();

    for i in 25..27 {
        std::fs::write(dir.path().join(format!("file-{i}")), b"late").unwrap();
    }

    let outcome = session.on_scroll(25).await.unwrap();
    let FetchOutcome::Fetched(summary) = outcome else {
        panic!("Expected Fetched, got {outcome:?}");
    };
    assert_eq!((summary.first, summary.last, summary.total_size), (26, 27, 27));
    assert_eq!(names(session.accumulator().items()), file_names(0..27));
}

#[tokio::test]
async fn test_new_files_show_up_in_total_size() {
    let (dir, provider) = seeded_provider();
    let mut session = BrowseSession::new(Arc::new(provider), &SessionConfig::default()).unwrap();

    session.start().await.unwrap();
    std::fs::write(dir.path().join("file-25"), b"late").unwrap();

    let outcome = session.on_scroll(10).await.unwrap();
    match outcome {
        FetchOutcome::Fetched(summary) => assert_eq!(summary.total_size, 26),
        other => panic!("Expected Fetched, got {other:?}"),
    }
    assert_eq!(session.accumulator().total_size(), 26);
}

// ============================================================================
// HTTP Tests
// ============================================================================

#[tokio::test]
async fn test_http_page_over_directory() {
    let (_dir, provider) = seeded_provider();
    let app = dirpage::cli::router(Arc::new(provider));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/entries?offset=10&limit=5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let returned: Vec<&str> = json["data"]["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["display_name"].as_str().unwrap())
        .collect();

    assert_eq!(
        returned,
        vec!["file-10", "file-11", "file-12", "file-13", "file-14"]
    );
    assert_eq!(json["data"]["total_size"], 25);
}
