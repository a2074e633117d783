mod common;

use axum::http::{StatusCode, header};

#[tokio::test]
async fn test_form_page() {
    let app = common::spawn_app();

    let response = app.server.get("/").await;

    response.assert_status_ok();

    let content_type = response.header(header::CONTENT_TYPE);
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let body = response.text();
    assert!(body.contains("URL Shortener"));
    assert!(body.contains(r#"<form method="post" action="/shorten">"#));
    assert!(body.contains(r#"name="url""#));
}

#[tokio::test]
async fn test_form_post_redirects_to_shorten() {
    let app = common::spawn_app();

    let response = app.server.post("/").await;

    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/shorten");
    assert_eq!(app.repo.len(), 0);
}

#[tokio::test]
async fn test_form_page_for_other_methods() {
    let app = common::spawn_app();

    for response in [app.server.put("/").await, app.server.delete("/").await] {
        response.assert_status_ok();
        assert!(response.text().contains(r#"name="url""#));
    }
    assert_eq!(app.repo.len(), 0);
}
