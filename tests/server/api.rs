use chrono::{Duration, Utc};

use crate::helpers::{insert_article, spawn_app, spawn_app_empty};

#[tokio::test]
async fn article_list_is_sorted_by_publication_date_descending() {
    let app = spawn_app_empty().await;
    let now = Utc::now();

    // Insert out of order; T1 > T2 > T3
    insert_article(&app, "T2", now - Duration::hours(2)).await;
    insert_article(&app, "T3", now - Duration::hours(3)).await;
    insert_article(&app, "T1", now - Duration::hours(1)).await;

    let client = reqwest::Client::new();
    let articles: Vec<serde_json::Value> = client
        .get(app.api_url("/articles"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    let titles: Vec<&str> = articles
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["T1", "T2", "T3"]);
}

#[tokio::test]
async fn equal_timestamps_keep_insertion_order() {
    let app = spawn_app_empty().await;
    let at = Utc::now();

    insert_article(&app, "first inserted", at).await;
    insert_article(&app, "second inserted", at).await;

    let client = reqwest::Client::new();
    let articles: Vec<serde_json::Value> = client
        .get(app.api_url("/articles"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    let titles: Vec<&str> = articles
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["first inserted", "second inserted"]);
}

#[tokio::test]
async fn status_reports_counts_and_key_state() {
    let app = spawn_app().await;

    let client = reqwest::Client::new();
    let status: serde_json::Value = client
        .get(app.api_url("/status"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(status["articles"], 3);
    assert_eq!(status["magazines"], 3);
    assert_eq!(status["api_key_configured"], false);
}
