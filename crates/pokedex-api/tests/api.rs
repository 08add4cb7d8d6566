//! HTTP tests against a live router.

use pokedex_api::{ApiState, router};
use pokedex_store::{DocumentStore, FsStore, MemoryStore};
use pokedex_types::Document;
use reqwest::StatusCode;
use serde_json::{Value, json};
use std::sync::Arc;

const POKEMON: &str = "heartgold-pokemon";

fn doc(value: Value) -> Document {
    match value {
        Value::Object(document) => document,
        other => panic!("not an object: {other}"),
    }
}

fn pokemon(id: u32, name: &str, regional_id: u32) -> Document {
    doc(json!({
        "id": id,
        "name": name,
        "base_experience": 64,
        "height": 9,
        "weight": 64,
        "types": [{ "slot": 1, "type": { "name": "grass", "url": "t/12" } }],
        "abilities": [{ "ability": { "name": "overgrow", "url": "a/65" }, "is_hidden": false, "slot": 1 }],
        "stats": [{ "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "s/1" } }],
        "sprites": { "front_default": format!("https://img/{id}.png"), "back_default": null },
        "moves": [{ "move": { "name": "tackle" } }],
        "regional_id": regional_id
    }))
}

async fn seeded_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    store.set(POKEMON, "chikorita", pokemon(152, "chikorita", 1)).await.unwrap();
    store.set(POKEMON, "bayleef", pokemon(153, "bayleef", 2)).await.unwrap();
    store.set(POKEMON, "pikachu", pokemon(25, "pikachu", 22)).await.unwrap();
    store
}

/// Serves the API over `store` on an ephemeral port and returns its base URL.
async fn start_server(store: Arc<dyn DocumentStore>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = router(ApiState::new(store));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_list_in_collection_order() {
    let base = start_server(seeded_store().await).await;

    let response = reqwest::get(format!("{base}/pokemon")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Vec<Value> = response.json().await.unwrap();
    let names: Vec<&str> = body.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["bayleef", "chikorita", "pikachu"]);

    // List views leave out the detail-only fields.
    assert_eq!(body[0]["id"], 153);
    assert_eq!(body[0]["types"][0]["type"]["name"], "grass");
    assert_eq!(body[0]["sprites"]["front_default"], "https://img/153.png");
    assert!(body[0].get("stats").is_none());
    assert!(body[0].get("moves").is_none());
}

#[tokio::test]
async fn test_list_empty_collection() {
    let base = start_server(Arc::new(MemoryStore::new())).await;

    let response = reqwest::get(format!("{base}/pokemon")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "[]");
}

#[tokio::test]
async fn test_list_fails_on_undecodable_document() {
    let store = seeded_store().await;
    store
        .set(POKEMON, "unown", doc(json!({ "id": "two hundred one", "name": "unown" })))
        .await
        .unwrap();
    let base = start_server(store).await;

    let response = reqwest::get(format!("{base}/pokemon")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().await.unwrap().starts_with("Error parsing Pokemon data"));
}

#[tokio::test]
async fn test_get_is_case_insensitive() {
    let base = start_server(seeded_store().await).await;

    for name in ["Pikachu", "pikachu", "PIKACHU"] {
        let response = reqwest::get(format!("{base}/pokemon/{name}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{name}");

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["id"], 25);
        assert_eq!(body["name"], "pikachu");
        assert_eq!(body["regional_id"], 22);
        assert_eq!(body["abilities"][0]["ability"]["name"], "overgrow");
        assert_eq!(body["stats"][0]["base_stat"], 45);
        assert!(body["sprites"]["back_default"].is_null());
    }
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let base = start_server(seeded_store().await).await;

    for name in ["missingno", "MissingNo"] {
        let response = reqwest::get(format!("{base}/pokemon/{name}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{name}");
        assert_eq!(response.text().await.unwrap(), "Pokemon not found");
    }
}

#[tokio::test]
async fn test_get_falls_back_to_scan() {
    let store = seeded_store().await;
    store
        .set(POKEMON, "legacy-0243", pokemon(243, "raikou", 243))
        .await
        .unwrap();
    store
        .set(POKEMON, "broken", doc(json!({ "id": [], "name": "raikou" })))
        .await
        .unwrap();
    let base = start_server(store).await;

    let response = reqwest::get(format!("{base}/pokemon/Raikou")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], 243);
}

#[tokio::test]
async fn test_other_methods_not_allowed() {
    let base = start_server(seeded_store().await).await;
    let client = reqwest::Client::new();

    let response = client.post(format!("{base}/pokemon")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = client
        .delete(format!("{base}/pokemon/pikachu"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = client
        .put(format!("{base}/pokemon/pikachu"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_serves_filesystem_store() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let store = Arc::new(FsStore::open(temp_dir.path(), "test-project").unwrap());
    store.set(POKEMON, "totodile", pokemon(158, "totodile", 7)).await.unwrap();
    let base = start_server(store).await;

    let response = reqwest::get(format!("{base}/pokemon/Totodile")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["regional_id"], 7);
}

#[tokio::test]
async fn test_get_skips_corrupt_files() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let store = Arc::new(FsStore::open(temp_dir.path(), "test-project").unwrap());
    store.set(POKEMON, "chikorita", pokemon(152, "chikorita", 1)).await.unwrap();
    std::fs::write(store.document_path(POKEMON, "broken"), "{ truncated").unwrap();
    std::fs::write(store.document_path(POKEMON, "raikou"), "[1, 2]").unwrap();
    let base = start_server(store).await;

    for name in ["missingno", "Raikou"] {
        let response = reqwest::get(format!("{base}/pokemon/{name}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{name}");
    }

    let response = reqwest::get(format!("{base}/pokemon/Chikorita")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
