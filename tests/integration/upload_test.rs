//! Integration tests for multipart video upload.

mod helpers;

use http::StatusCode;

const MP4: &[u8] = b"\x00\x00\x00\x18ftypmp42";

#[tokio::test]
async fn test_upload_general_video() {
    let app = helpers::TestApp::new().await;

    let response = app
        .upload(
            &[
                ("title", "  City tour  "),
                ("description", "A walk through the old town"),
                ("videoType", "general"),
                ("category", "Travel"),
                ("accessCode", "ignored"),
            ],
            Some(("tour.MP4", "video/mp4", MP4)),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    let video = &response.body["video"];
    assert_eq!(video["title"], "City tour");
    assert_eq!(video["videoType"], "general");
    assert_eq!(video["category"], "Travel");
    assert_eq!(video["accessCode"], serde_json::Value::Null);
    assert_eq!(video["isActive"], true);
    assert_eq!(video["sizeBytes"], MP4.len());

    let id = video["id"].as_str().unwrap();
    assert_eq!(video["storagePath"], format!("videos/{id}.mp4"));
    let stored = std::fs::read(app.storage_dir.path().join(format!("videos/{id}.mp4"))).unwrap();
    assert_eq!(stored, MP4);

    let listing = app.request("GET", "/api/videos", None).await;
    assert_eq!(listing.titles(), vec!["City tour"]);
}

#[tokio::test]
async fn test_masterclass_requires_access_code() {
    let app = helpers::TestApp::new().await;
    let fields = [
        ("title", "VIP session"),
        ("description", "Behind the scenes"),
        ("videoType", "masterclass"),
    ];

    let response = app
        .upload(&fields, Some(("vip.mp4", "video/mp4", MP4)))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert!(app.videos.is_empty().await);

    let mut with_code = fields.to_vec();
    with_code.push(("accessCode", "VIP-2024"));
    let response = app
        .upload(&with_code, Some(("vip.mp4", "video/mp4", MP4)))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["video"]["videoType"], "masterclass");

    let listing = app
        .request("GET", "/api/videos?type=masterclass&admin=true", None)
        .await;
    assert_eq!(listing.body["totalCount"], 1);
    assert_eq!(listing.body["videos"][0]["videoType"], "masterclass");
    assert_eq!(listing.body["videos"][0]["accessCode"], "VIP-2024");
}

#[tokio::test]
async fn test_upload_missing_file() {
    let app = helpers::TestApp::new().await;

    let response = app
        .upload(&[("title", "No file"), ("description", "Oops")], None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Video file is required");
}

#[tokio::test]
async fn test_upload_rejects_non_video() {
    let app = helpers::TestApp::new().await;

    let response = app
        .upload(
            &[("title", "Notes"), ("description", "PDF")],
            Some(("notes.pdf", "application/pdf", b"%PDF-1.4")),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["message"],
        "Please select a video file (MP4, MOV, AVI, MKV, WEBM)"
    );
    assert!(app.videos.is_empty().await);
}

#[tokio::test]
async fn test_upload_over_limit_is_413() {
    let app = helpers::TestApp::new().await;
    let data = vec![0u8; helpers::TEST_MAX_UPLOAD as usize + 1];

    let response = app
        .upload(
            &[("title", "Huge"), ("description", "Too big")],
            Some(("huge.mp4", "video/mp4", &data)),
        )
        .await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(response.body["message"], "File size must be less than 1MB");
    assert!(app.videos.is_empty().await);
}

#[tokio::test]
async fn test_upload_store_failure_leaves_no_blob() {
    let app = helpers::TestApp::new().await;
    app.videos.set_unavailable(true);

    let response = app
        .upload(
            &[("title", "Intro"), ("description", "Basics")],
            Some(("intro.mp4", "video/mp4", MP4)),
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    let videos_dir = app.storage_dir.path().join("videos");
    let leftover = std::fs::read_dir(&videos_dir)
        .map(|entries| entries.count())
        .unwrap_or(0);
    assert_eq!(leftover, 0);
}
