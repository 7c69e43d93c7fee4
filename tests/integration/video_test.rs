//! Integration tests for listing, editing and deleting videos.

mod helpers;

use http::StatusCode;
use serde_json::json;

use coursehub_entity::video::VideoType;

#[tokio::test]
async fn test_list_defaults_and_page_math() {
    let app = helpers::TestApp::new().await;
    for n in 1..=25 {
        app.seed_video(n, &format!("Video {n}"), VideoType::General)
            .await;
    }

    let response = app.request("GET", "/api/videos", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["limit"], 20);
    assert_eq!(response.body["totalCount"], 25);
    assert_eq!(response.body["totalPages"], 2);
    let titles = response.titles();
    assert_eq!(titles.len(), 20);
    assert_eq!(titles[0], "Video 1");
}

#[tokio::test]
async fn test_filtered_second_page() {
    let app = helpers::TestApp::new().await;
    for n in 1..=45 {
        app.seed_video(n * 2, &format!("City Tour {n}"), VideoType::General)
            .await;
    }
    for n in 1..=10 {
        app.seed_video(n * 2 + 1, &format!("Masterclass tour {n}"), VideoType::Masterclass)
            .await;
        app.seed_video(n * 2 + 1, &format!("Cooking {n}"), VideoType::General)
            .await;
    }

    let response = app
        .request(
            "GET",
            "/api/videos?page=2&limit=20&type=general&search=tour&admin=true",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["totalCount"], 45);
    assert_eq!(response.body["totalPages"], 3);
    let expected: Vec<String> = (21..=40).map(|n| format!("City Tour {n}")).collect();
    assert_eq!(response.titles(), expected);
}

#[tokio::test]
async fn test_page_past_end_is_empty() {
    let app = helpers::TestApp::new().await;
    for n in 1..=3 {
        app.seed_video(n, &format!("Video {n}"), VideoType::General)
            .await;
    }

    let response = app.request("GET", "/api/videos?page=5&limit=2", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.titles().is_empty());
    assert_eq!(response.body["totalCount"], 3);
    assert_eq!(response.body["totalPages"], 2);
}

#[tokio::test]
async fn test_huge_limit_returns_everything() {
    let app = helpers::TestApp::new().await;
    for n in 1..=3 {
        app.seed_video(n, &format!("Video {n}"), VideoType::General)
            .await;
    }

    let response = app
        .request("GET", &format!("/api/videos?limit={}", u64::MAX), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.titles(), vec!["Video 1", "Video 2", "Video 3"]);
    assert_eq!(response.body["totalCount"], 3);
    assert_eq!(response.body["totalPages"], 1);
}

#[tokio::test]
async fn test_invalid_listing_params() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/videos?page=0", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);

    let response = app.request("GET", "/api/videos?type=premium", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_access_code_hidden_from_public_listing() {
    let app = helpers::TestApp::new().await;
    let video = app.seed_video(1, "VIP", VideoType::Masterclass).await;

    let public = app.request("GET", "/api/videos", None).await;
    assert_eq!(public.body["videos"][0]["accessCode"], serde_json::Value::Null);

    let admin = app.request("GET", "/api/videos?admin=true", None).await;
    assert_eq!(admin.body["videos"][0]["accessCode"], "VIP-CODE");

    let single = app
        .request("GET", &format!("/api/videos/{}?admin=true", video.id), None)
        .await;
    assert_eq!(single.status, StatusCode::OK);
    assert_eq!(single.body["video"]["accessCode"], "VIP-CODE");
}

#[tokio::test]
async fn test_deactivate_keeps_video_in_admin_listing() {
    let app = helpers::TestApp::new().await;
    let video = app.seed_video(1, "Intro", VideoType::General).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/videos/{}", video.id),
            Some(json!({ "isActive": false })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    let updated = &response.body["video"];
    assert_eq!(updated["isActive"], false);
    assert_eq!(updated["title"], "Intro");
    assert_eq!(updated["description"], "Description of Intro");
    assert_eq!(updated["videoType"], "general");

    let admin = app.request("GET", "/api/videos?admin=true", None).await;
    assert_eq!(admin.titles(), vec!["Intro"]);
    let public = app.request("GET", "/api/videos", None).await;
    assert!(public.titles().is_empty());
}

#[tokio::test]
async fn test_update_validation() {
    let app = helpers::TestApp::new().await;
    let video = app.seed_video(1, "Intro", VideoType::General).await;
    let path = format!("/api/admin/videos/{}", video.id);

    let response = app
        .request("PUT", &path, Some(json!({ "title": "   " })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);

    let response = app
        .request("PUT", "/api/admin/videos/not-a-uuid", Some(json!({ "title": "x" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_then_not_found() {
    let app = helpers::TestApp::new().await;
    let video = app.seed_video(1, "Intro", VideoType::General).await;
    let path = format!("/api/admin/videos/{}", video.id);

    let response = app.request("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let listing = app.request("GET", "/api/videos?admin=true", None).await;
    assert!(listing.titles().is_empty());

    let response = app.request("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Video not found");

    let response = app
        .request("PUT", &path, Some(json!({ "title": "Again" })))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("GET", &format!("/api/videos/{}", video.id), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_failure_is_500_with_detail_outside_production() {
    let app = helpers::TestApp::new().await;
    app.videos.set_unavailable(true);

    let response = app.request("GET", "/api/videos", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["message"], "Internal server error");
    let detail = response.body["error"].as_str().unwrap();
    assert_ne!(detail, "Something went wrong");
}

#[tokio::test]
async fn test_store_failure_detail_redacted_in_production() {
    let app = helpers::TestApp::with_environment("production").await;
    app.videos.set_unavailable(true);

    let response = app.request("GET", "/api/videos", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["message"], "Internal server error");
    assert_eq!(response.body["error"], "Something went wrong");
}
