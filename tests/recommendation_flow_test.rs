use gofer::config::{FetchSettings, TmdbConfig};
use gofer::core::fetch::Fetcher;
use gofer::core::recommend::Recommender;
use gofer::utils::error::GoferError;
use gofer::TmdbSource;
use httpmock::prelude::*;

fn recommender_for(server: &MockServer) -> Recommender<TmdbSource> {
    let fetcher = Fetcher::new(&FetchSettings {
        max_attempts: 3,
        timeout_seconds: Some(5),
    })
    .unwrap();
    let source = TmdbSource::new(
        fetcher,
        &TmdbConfig {
            endpoint: server.base_url(),
            api_key: Some("e2e-key".to_string()),
            top_n: 2,
        },
    )
    .unwrap();
    Recommender::new(source)
}

#[tokio::test]
async fn comedy_scenario_returns_the_two_top_rated_in_upstream_order() {
    let server = MockServer::start();

    // Comedy 對到編號 35；分數 [7.1, 9.0, 9.0]，兩個 9.0 依上游順序留下
    let discover_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/discover/movie")
            .query_param("api_key", "e2e-key")
            .query_param("with_genres", "35");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "results": [
                    {
                        "title": "Slow Burn",
                        "vote_average": 7.1,
                        "genre_ids": [35],
                        "release_date": "2019-03-01",
                        "overview": "A comedy that takes its time."
                    },
                    {
                        "title": "Front Runner",
                        "vote_average": 9.0,
                        "genre_ids": [35, 18]
                    },
                    {
                        "title": "Dark Horse",
                        "vote_average": 9.0,
                        "genre_ids": [35]
                    }
                ]
            }));
    });

    let genres_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/genre/movie/list")
            .query_param("api_key", "e2e-key");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "genres": [
                    {"id": 35, "name": "Comedy"},
                    {"id": 18, "name": "Drama"}
                ]
            }));
    });

    let picks = recommender_for(&server).recommend("Comedy").await.unwrap();

    discover_mock.assert();
    genres_mock.assert();
    assert_eq!(picks.len(), 2);
    assert_eq!(picks[0].title, "Front Runner");
    assert_eq!(picks[1].title, "Dark Horse");
    assert_eq!(picks[0].score, 9.0);
    assert_eq!(picks[0].genres, vec!["Comedy", "Drama"]);
    assert_eq!(picks[1].genres, vec!["Comedy"]);
}

#[tokio::test]
async fn unknown_genre_fails_validation_with_zero_http_calls() {
    let server = MockServer::start();

    let catch_all = server.mock(|when, then| {
        when.method(GET);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({}));
    });

    let err = recommender_for(&server).recommend("Atlantis").await.unwrap_err();

    match err {
        GoferError::UnknownGenre { label } => assert_eq!(label, "Atlantis"),
        other => panic!("expected UnknownGenre, got {:?}", other),
    }
    assert_eq!(catch_all.hits(), 0);
}

#[tokio::test]
async fn empty_discover_results_map_to_no_results() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/discover/movie");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"results": []}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/genre/movie/list");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "genres": [{"id": 35, "name": "Comedy"}]
            }));
    });

    let err = recommender_for(&server).recommend("Comedy").await.unwrap_err();

    match err {
        GoferError::NoResults { query } => assert_eq!(query, "Comedy"),
        other => panic!("expected NoResults, got {:?}", other),
    }
}

#[tokio::test]
async fn taxonomy_outage_fails_the_whole_request_after_retries() {
    let server = MockServer::start();

    let discover_mock = server.mock(|when, then| {
        when.method(GET).path("/discover/movie");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "results": [
                    {"title": "Fine Movie", "vote_average": 8.0, "genre_ids": [35]}
                ]
            }));
    });

    let genres_mock = server.mock(|when, then| {
        when.method(GET).path("/genre/movie/list");
        then.status(500);
    });

    let err = recommender_for(&server).recommend("Comedy").await.unwrap_err();

    // 類型對照抓不到就整個請求失敗，不靠候選資料單獨出結果
    match err {
        GoferError::RetriesExhausted { attempts, .. } => assert_eq!(attempts, 3),
        other => panic!("expected RetriesExhausted, got {:?}", other),
    }
    genres_mock.assert_hits(3);
    discover_mock.assert();
}
