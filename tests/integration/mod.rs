//! Integration tests for the benchmark pipeline
//!
//! These tests use wiremock to stand in for the chart site and exercise the
//! collector, both worker pools, and the full driver end-to-end.

use marquee::bench::compare;
use marquee::config::Config;
use marquee::exec::{IsolatedPool, SharedPool, WorkerPool};
use marquee::scrape::{build_http_client, collect_links, MovieLink, MovieRecord};
use std::collections::HashSet;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Index page with three list items, two of which carry detail links
fn index_body() -> &'static str {
    r#"<html><body>
        <div data-testid="chart-layout-main-column">
            <ul>
                <li><a href="/title/tt0001/">Full Movie</a></li>
                <li>Placeholder without a link</li>
                <li><a href="/title/tt0002/">Ratingless Movie</a></li>
            </ul>
        </div>
    </body></html>"#
}

/// Detail page carrying all four fields
fn full_detail_body() -> &'static str {
    r#"<html><body>
        <h1>Full Movie</h1>
        <a href="/title/tt0001/releaseinfo">March 3, 2023</a>
        <div data-testid="hero-rating-bar__aggregate-rating__score">8.1</div>
        <span data-testid="plot-xs_to_m">Everything is present.</span>
    </body></html>"#
}

/// Detail page missing the aggregate rating
fn ratingless_detail_body() -> &'static str {
    r#"<html><body>
        <h1>Ratingless Movie</h1>
        <a href="/title/tt0002/releaseinfo">April 4, 2023</a>
        <span data-testid="plot-xs_to_m">The rating never rendered.</span>
    </body></html>"#
}

/// Mounts the standard chart: index plus the two detail pages
async fn mount_chart(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/chart"))
        .respond_with(ResponseTemplate::new(200).set_body_string(index_body()))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/title/tt0001/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(full_detail_body()))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/title/tt0002/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ratingless_detail_body()))
        .mount(server)
        .await;
}

/// Builds a config pointed at the mock server and a temp CSV path
fn test_config(server_uri: &str, csv_path: &Path) -> Config {
    let mut config = Config::default();
    config.source.index_url = format!("{}/chart", server_uri);
    config.source.base_origin = server_uri.to_string();
    config.source.user_agent = "marquee-tests/1.0".to_string();
    config.pools.max_shared_workers = 4;
    config.pools.max_isolated_workers = 2;
    config.output.csv_path = csv_path.to_string_lossy().into_owned();
    config
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|row| row.unwrap().iter().map(str::to_string).collect())
        .collect()
}

fn expected_record() -> MovieRecord {
    MovieRecord {
        title: "Full Movie".to_string(),
        date: "March 3, 2023".to_string(),
        rating: "8.1".to_string(),
        plot: "Everything is present.".to_string(),
    }
}

#[tokio::test]
async fn test_collector_derives_absolute_urls_from_index() {
    let server = MockServer::start().await;
    mount_chart(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server.uri(), &dir.path().join("movies.csv"));
    let client = build_http_client(&config.source).unwrap();

    let links = collect_links(&client, &config.source).await;

    // Three list items, two anchors: exactly two absolute URLs in order
    assert_eq!(
        links,
        vec![
            MovieLink::new(format!("{}/title/tt0001/", server.uri())),
            MovieLink::new(format!("{}/title/tt0002/", server.uri())),
        ]
    );
}

#[tokio::test]
async fn test_collector_yields_empty_on_non_200_index() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chart"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server.uri(), &dir.path().join("movies.csv"));
    let client = build_http_client(&config.source).unwrap();

    let links = collect_links(&client, &config.source).await;
    assert!(links.is_empty());
}

#[tokio::test]
async fn test_pools_extract_the_same_record_set() {
    let server = MockServer::start().await;
    mount_chart(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server.uri(), &dir.path().join("movies.csv"));
    let client = build_http_client(&config.source).unwrap();
    let links = collect_links(&client, &config.source).await;
    assert_eq!(links.len(), 2);

    let shared = SharedPool::new(client.clone(), config.pools.max_shared_workers);
    let shared_records: HashSet<MovieRecord> =
        shared.run(links.clone()).await.into_iter().collect();

    let isolated = IsolatedPool::new(config.source.clone(), config.pools.max_isolated_workers);
    let isolated_records: HashSet<MovieRecord> =
        isolated.run(links).await.into_iter().collect();

    // The fully populated page appears in both outputs; the ratingless page
    // in neither. Strategy choice must not change the record set.
    let expected: HashSet<MovieRecord> = [expected_record()].into_iter().collect();
    assert_eq!(shared_records, expected);
    assert_eq!(isolated_records, expected);
}

#[tokio::test]
async fn test_failing_detail_page_does_not_abort_the_pool() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chart"))
        .respond_with(ResponseTemplate::new(200).set_body_string(index_body()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/title/tt0001/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(full_detail_body()))
        .mount(&server)
        .await;

    // Second detail page errors at the HTTP level instead of missing a field
    Mock::given(method("GET"))
        .and(path("/title/tt0002/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let config = test_config(&server.uri(), &dir.path().join("movies.csv"));
    let client = build_http_client(&config.source).unwrap();
    let links = collect_links(&client, &config.source).await;

    let shared = SharedPool::new(client, config.pools.max_shared_workers);
    let records = shared.run(links).await;

    assert_eq!(records, vec![expected_record()]);
}

#[tokio::test]
async fn test_driver_halts_on_empty_link_set() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/chart"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    // No detail mocks mounted: a fetch of any detail page would 404 loudly,
    // but the driver must halt before either pool runs.
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("movies.csv");
    let config = test_config(&server.uri(), &csv_path);

    compare(config).await.expect("driver must not error");

    assert!(!csv_path.exists(), "store must be untouched");
}

#[tokio::test]
async fn test_driver_appends_one_row_per_pass() {
    let server = MockServer::start().await;
    mount_chart(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("movies.csv");
    let config = test_config(&server.uri(), &csv_path);

    compare(config).await.expect("driver failed");

    // One successful movie, two passes: two identical rows
    let rows = read_rows(&csv_path);
    assert_eq!(rows.len(), 2);
    for row in &rows {
        assert_eq!(
            row,
            &vec![
                "Full Movie".to_string(),
                "March 3, 2023".to_string(),
                "8.1".to_string(),
                "Everything is present.".to_string(),
            ]
        );
    }
}

#[tokio::test]
async fn test_repeated_runs_append_duplicates() {
    let server = MockServer::start().await;
    mount_chart(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("movies.csv");

    // The store is append-only with no dedup across runs: a second driver
    // run doubles the rows. That is the contract, not a bug.
    compare(test_config(&server.uri(), &csv_path)).await.unwrap();
    compare(test_config(&server.uri(), &csv_path)).await.unwrap();

    let rows = read_rows(&csv_path);
    assert_eq!(rows.len(), 4);
}
