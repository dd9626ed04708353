//! Integration tests for the player page route.

mod common;

use common::TestHarness;

#[tokio::test]
async fn player_page_served_as_html() {
    let (_h, addr) = TestHarness::with_server(b"fake video data").await;

    let resp = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("content-type").unwrap().to_str().unwrap(),
        "text/html; charset=utf-8"
    );

    let body = resp.text().await.unwrap();
    assert!(body.contains("<title>test_video.mp4 - Video Player</title>"));
    assert!(body.contains("<h1>test_video.mp4</h1>"));
    assert!(body.contains(r#"<source src="/video" type="video/mp4">"#));
}
