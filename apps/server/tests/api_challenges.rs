//! Integration tests for the challenge list and its filters.

mod common;

use axum::http::StatusCode;
use common::fixtures::TOTAL_CHALLENGES;
use common::TestContext;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn challenge_ids(body: &Value) -> Vec<i64> {
    body["challenges"]
        .as_array()
        .expect("challenges array")
        .iter()
        .map(|c| c["id"].as_i64().expect("challenge id"))
        .collect()
}

#[tokio::test]
async fn list_returns_full_catalog_in_order() {
    let ctx = TestContext::new();

    let response = ctx.server().get("/api/challenges").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(challenge_ids(&body), (1..=10).collect::<Vec<i64>>());
    assert_eq!(body["total"], json!(TOTAL_CHALLENGES));
    assert_eq!(body["visible"], json!(TOTAL_CHALLENGES));
}

#[tokio::test]
async fn difficulty_facet_selects_exact_matches() {
    let ctx = TestContext::new();

    let response = ctx
        .server()
        .get("/api/challenges")
        .add_query_param("difficulty", "Beginner")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(challenge_ids(&body), vec![1, 2, 10]);
}

#[tokio::test]
async fn unknown_difficulty_facet_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server()
        .get("/api/challenges")
        .add_query_param("difficulty", "Impossible")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn search_matches_title_description_and_tags() {
    let ctx = TestContext::new();

    let by_title = ctx
        .server()
        .get("/api/challenges")
        .add_query_param("search", "MACRO")
        .await;
    assert_eq!(challenge_ids(&by_title.json()), vec![4]);

    let by_description = ctx
        .server()
        .get("/api/challenges")
        .add_query_param("search", "yank")
        .await;
    assert_eq!(challenge_ids(&by_description.json()), vec![3]);

    let by_tag = ctx
        .server()
        .get("/api/challenges")
        .add_query_param("search", "words")
        .await;
    assert_eq!(challenge_ids(&by_tag.json()), vec![2]);
}

#[tokio::test]
async fn tag_facet_uses_or_semantics() {
    let ctx = TestContext::new();

    let response = ctx
        .server()
        .get("/api/challenges")
        .add_query_param("tags", "search,marks")
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(challenge_ids(&body), vec![5, 6, 8]);
}

#[tokio::test]
async fn difficulty_counts_ignore_the_active_filter() {
    let ctx = TestContext::new();

    let response = ctx
        .server()
        .get("/api/challenges")
        .add_query_param("difficulty", "Expert")
        .await;
    let body: Value = response.json();

    assert_eq!(challenge_ids(&body), vec![4, 9]);
    assert_eq!(
        body["counts"],
        json!({"beginner": 3, "intermediate": 3, "advanced": 2, "expert": 2})
    );
    assert_eq!(body["total"], json!(TOTAL_CHALLENGES));
}

#[tokio::test]
async fn challenges_are_annotated_with_completion() {
    let ctx = TestContext::new();

    ctx.server()
        .post("/api/progress/toggle")
        .json(&json!({"challenge_id": 2}))
        .await
        .assert_status_ok();

    let body: Value = ctx.server().get("/api/challenges").await.json();
    let challenges = body["challenges"].as_array().unwrap();

    assert_eq!(challenges[1]["id"], json!(2));
    assert_eq!(challenges[1]["completed"], json!(true));
    assert_eq!(challenges[0]["completed"], json!(false));
}

#[tokio::test]
async fn degraded_state_serves_empty_catalog_with_notice() {
    let ctx = TestContext::degraded("Could not load learning content");

    let status: Value = ctx.server().get("/api/status").await.json();
    assert_eq!(status["status"], json!("degraded"));
    assert_eq!(status["total_challenges"], json!(0));
    assert_eq!(status["notice"], json!("Could not load learning content"));

    let body: Value = ctx.server().get("/api/challenges").await.json();
    assert!(challenge_ids(&body).is_empty());
    assert_eq!(body["total"], json!(0));
}

#[tokio::test]
async fn flashcards_and_exercises_are_listed() {
    let ctx = TestContext::new();

    let flashcards: Value = ctx.server().get("/api/flashcards").await.json();
    assert_eq!(flashcards["flashcards"].as_array().unwrap().len(), 2);

    let exercises: Value = ctx.server().get("/api/exercises").await.json();
    assert_eq!(exercises["exercises"].as_array().unwrap().len(), 5);

    let one: Value = ctx.server().get("/api/exercises/1").await.json();
    assert_eq!(one["solution_check"], json!("cursor_position"));
    assert_eq!(one["target_line"], json!(6));

    ctx.server()
        .get("/api/exercises/999")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
