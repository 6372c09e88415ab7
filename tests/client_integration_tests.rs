//! Integration Tests for the API client and REPL
//!
//! Runs the client against a local axum server serving PokeAPI-shaped fixtures
//! and counts how many requests actually reach it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pokedex_cli::{repl, ApiClient, PokedexError, ResponseCache, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

const AREAS: [&str; 5] = [
    "canalave-city-area",
    "eterna-city-area",
    "pastoria-city-area",
    "sunyshore-city-area",
    "sinnoh-pokemon-league-area",
];

// == Fixture Server ==

#[derive(Clone)]
struct Fixture {
    base: String,
    hits: Arc<AtomicUsize>,
}

async fn location_areas(
    State(fixture): State<Fixture>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    fixture.hits.fetch_add(1, Ordering::SeqCst);

    let offset: usize = params.get("offset").and_then(|v| v.parse().ok()).unwrap_or(0);
    let limit: usize = params.get("limit").and_then(|v| v.parse().ok()).unwrap_or(20);
    let page_url =
        |offset: usize| format!("{}/location-area?offset={}&limit={}", fixture.base, offset, limit);

    let results: Vec<_> = AREAS
        .iter()
        .enumerate()
        .skip(offset)
        .take(limit)
        .map(|(i, name)| json!({ "name": name, "url": format!("{}/location-area/{}/", fixture.base, i + 1) }))
        .collect();
    let next = (offset + limit < AREAS.len()).then(|| page_url(offset + limit));
    let previous = (offset > 0).then(|| page_url(offset.saturating_sub(limit)));

    Json(json!({
        "count": AREAS.len(),
        "next": next,
        "previous": previous,
        "results": results,
    }))
}

async fn location_area(State(fixture): State<Fixture>, Path(name): Path<String>) -> Response {
    fixture.hits.fetch_add(1, Ordering::SeqCst);

    if name != "canalave-city-area" {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    }
    Json(json!({
        "id": 1,
        "name": name,
        "pokemon_encounters": [
            { "pokemon": { "name": "tentacool", "url": "" } },
            { "pokemon": { "name": "pidgey", "url": "" } },
        ],
    }))
    .into_response()
}

async fn pokemon(State(fixture): State<Fixture>, Path(name): Path<String>) -> Response {
    fixture.hits.fetch_add(1, Ordering::SeqCst);

    let base_experience = match name.as_str() {
        "pidgey" => 0,
        "mewtwo" => 400,
        _ => return (StatusCode::NOT_FOUND, "Not Found").into_response(),
    };
    Json(json!({
        "name": name,
        "height": 3,
        "weight": 18,
        "base_experience": base_experience,
        "stats": [
            { "base_stat": 40, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 56, "stat": { "name": "speed", "url": "" } },
        ],
        "types": [
            { "slot": 1, "type": { "name": "normal", "url": "" } },
            { "slot": 2, "type": { "name": "flying", "url": "" } },
        ],
    }))
    .into_response()
}

/// Starts the fixture server and returns its API root and request counter.
async fn spawn_fixture_server() -> (String, Arc<AtomicUsize>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}/api/v2", listener.local_addr().unwrap());
    let hits = Arc::new(AtomicUsize::new(0));

    let app = Router::new()
        .route("/api/v2/location-area", get(location_areas))
        .route("/api/v2/location-area/:name", get(location_area))
        .route("/api/v2/pokemon/:name", get(pokemon))
        .with_state(Fixture {
            base: base.clone(),
            hits: Arc::clone(&hits),
        });

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (base, hits)
}

fn client(base: &str, interval: Duration) -> ApiClient {
    let cache = Arc::new(ResponseCache::new(interval).unwrap());
    ApiClient::new(base, cache).with_page_size(2)
}

// == Client Tests ==

#[tokio::test]
async fn test_repeated_fetch_is_served_from_cache() {
    let (base, hits) = spawn_fixture_server().await;
    let client = client(&base, Duration::from_secs(60));

    let first = client.pokemon("pidgey").await.unwrap();
    let second = client.pokemon("pidgey").await.unwrap();

    assert_eq!(first.name, "pidgey");
    assert_eq!(second.stats.len(), 2);
    assert_eq!(hits.load(Ordering::SeqCst), 1, "Second lookup should not hit the network");

    let cached = client
        .cache()
        .get(&format!("{}/pokemon/pidgey", base))
        .await
        .unwrap();
    assert_eq!(client.fetch(&format!("{}/pokemon/pidgey", base)).await.unwrap(), cached);
}

#[tokio::test]
async fn test_non_200_is_an_error_and_not_cached() {
    let (base, hits) = spawn_fixture_server().await;
    let client = client(&base, Duration::from_secs(60));

    for _ in 0..2 {
        let result = client.pokemon("missingno").await;
        match result {
            Err(PokedexError::Status { status, url }) => {
                assert_eq!(status.as_u16(), 404);
                assert!(url.ends_with("/pokemon/missingno"));
            }
            other => panic!("Expected status error, got {:?}", other),
        }
    }

    assert_eq!(hits.load(Ordering::SeqCst), 2);
    assert!(client.cache().is_empty().await);
}

#[tokio::test]
async fn test_transport_failure_is_an_http_error() {
    // Bind then drop a listener to get a port nobody is serving
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}/api/v2", listener.local_addr().unwrap());
    drop(listener);

    let client = client(&base, Duration::from_secs(60));
    let result = client.pokemon("pidgey").await;

    assert!(matches!(result, Err(PokedexError::Http(_))));
}

#[tokio::test]
async fn test_expired_entry_is_fetched_again() {
    let (base, hits) = spawn_fixture_server().await;
    let client = client(&base, Duration::from_millis(50));

    client.pokemon("pidgey").await.unwrap();
    assert_eq!(client.cache().len().await, 1);

    // At least one sweep has seen the entry past the interval by now
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(client.cache().is_empty().await);

    client.pokemon("pidgey").await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_pages_follow_next_and_previous_links() {
    let (base, _hits) = spawn_fixture_server().await;
    let client = client(&base, Duration::from_secs(60));

    let first = client.location_areas(&client.first_page_url()).await.unwrap();
    assert_eq!(first.count, 5);
    assert!(first.previous.is_none());

    let second = client.location_areas(first.next.as_deref().unwrap()).await.unwrap();
    assert_eq!(second.results[0].name, "pastoria-city-area");

    let third = client.location_areas(second.next.as_deref().unwrap()).await.unwrap();
    assert_eq!(third.results.len(), 1);
    assert!(third.next.is_none());
}

// == REPL Tests ==

async fn run_repl(base: &str, input: &str) -> String {
    let client = client(base, Duration::from_secs(60));
    let mut session = Session::new(client).with_rng(StdRng::seed_from_u64(1));
    let mut out = Vec::new();

    repl::run(&mut session, input.as_bytes(), &mut out).await.unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn test_repl_session_end_to_end() {
    let (base, hits) = spawn_fixture_server().await;
    let input = "map\nmap\nmapb\nexplore canalave-city-area\ncatch Pidgey\ninspect PIDGEY\npokedex\nexit\n";

    let output = run_repl(&base, input).await;

    let expected = [
        "Location 1: canalave-city-area\nLocation 2: eterna-city-area\n",
        "Location 1: pastoria-city-area\nLocation 2: sunyshore-city-area\n",
        "Exploring location area canalave-city-area:\n  - tentacool\n  - pidgey\n",
        "Throwing a Pokeball at pidgey...\npidgey was caught!\n",
        "Name: pidgey\nHeight: 3\nWeight: 18\nStats:\n  -hp: 40\n  -speed: 56\nTypes:\n  - normal\n  - flying\n",
        "Your Pokedex:\n - pidgey\n",
        "Closing the Pokedex... Goodbye!\n",
    ];
    for fragment in expected {
        assert!(output.contains(fragment), "Missing {:?} in:\n{}", fragment, output);
    }

    // Page one twice, but only fetched once
    assert_eq!(output.matches("Location 1: canalave-city-area").count(), 2);
    assert_eq!(hits.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_repl_reports_failed_lookups() {
    let (base, _hits) = spawn_fixture_server().await;

    let output = run_repl(&base, "explore nowhere\ncatch mewtwo\npokedex\n").await;

    assert!(output.contains("Error: Received non-200 response code 404 Not Found"));
    assert!(output.contains("mewtwo escaped!"));
    assert!(output.contains("No Pokemon have been caught yet."));
}
