//! Integration tests for notification counters and the service endpoints.

mod helpers;

use chrono::Utc;
use http::StatusCode;
use uuid::Uuid;

use coursehub_entity::notification::{Notification, QuizResult};

fn notification(user_id: &str, for_user: bool, for_admin: bool, read: bool) -> Notification {
    Notification {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        for_user,
        for_admin,
        read,
        title: "Quiz graded".to_string(),
        message: "Your score is ready".to_string(),
        created_at: Utc::now(),
    }
}

fn quiz_result(status: &str, read_by_admin: bool) -> QuizResult {
    QuizResult {
        id: Uuid::new_v4(),
        user_id: "learner-1".to_string(),
        status: status.to_string(),
        read_by_admin,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_counts_with_no_notifications() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/notifications/counts?userId=u1", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["user"], "u1");
    assert_eq!(response.body["counts"]["quizScores"], 0);
    assert_eq!(response.body["counts"]["quizCompleted"], 0);
}

#[tokio::test]
async fn test_counts_unread_for_user_and_admin() {
    let app = helpers::TestApp::new().await;
    app.counter.add_notification(notification("u1", true, false, false)).await;
    app.counter.add_notification(notification("u1", true, false, true)).await;
    app.counter.add_notification(notification("u2", true, false, false)).await;
    app.counter.add_notification(notification("anyone", false, true, false)).await;
    app.counter.add_quiz_result(quiz_result("completed", false)).await;
    app.counter.add_quiz_result(quiz_result("completed", true)).await;
    app.counter.add_quiz_result(quiz_result("in_progress", false)).await;

    let response = app
        .request("GET", "/api/notifications/counts?userId=u1", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let counts = &response.body["counts"];
    assert_eq!(counts["quizScores"], 2);
    assert_eq!(counts["quizCompleted"], 1);
    for reserved in [
        "courseRemarks",
        "generalCourses",
        "masterclassCourses",
        "importantInfo",
        "adminMessages",
        "courseCompleted",
    ] {
        assert_eq!(counts[reserved], 0, "{reserved}");
    }
}

#[tokio::test]
async fn test_counts_without_user_uses_default_key() {
    let app = helpers::TestApp::new().await;
    app.counter.add_notification(notification("default", true, false, false)).await;

    let response = app.request("GET", "/api/notifications/counts", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"], "default");
    assert_eq!(response.body["counts"]["quizScores"], 1);
}

#[tokio::test]
async fn test_counts_with_unparseable_query_use_default_key() {
    let app = helpers::TestApp::new().await;
    app.counter.add_notification(notification("default", true, false, false)).await;

    let response = app
        .request("GET", "/api/notifications/counts?userId=a&userId=b", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["user"], "default");
    assert_eq!(response.body["counts"]["quizScores"], 1);
}

#[tokio::test]
async fn test_counts_fall_back_to_zero_when_store_unavailable() {
    let app = helpers::TestApp::new().await;
    app.counter.add_notification(notification("u1", true, false, false)).await;
    app.counter.set_unavailable(true);

    let response = app
        .request("GET", "/api/notifications/counts?userId=u1", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["counts"]["quizScores"], 0);
    assert_eq!(response.body["counts"]["quizCompleted"], 0);
}

#[tokio::test]
async fn test_liveness_and_health() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/test", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Server is working!");

    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["storage"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/nope?x=1", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["message"], "API endpoint not found");
    assert_eq!(response.body["requestedUrl"], "/api/nope?x=1");
}

#[tokio::test]
async fn test_unsupported_method_is_json_404() {
    let app = helpers::TestApp::new().await;

    for (method, path) in [
        ("POST", "/api/videos"),
        ("PATCH", "/api/notifications/counts"),
        ("GET", "/api/admin/upload-video"),
    ] {
        let response = app.request(method, path, None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{method} {path}");
        assert_eq!(response.body["success"], false);
        assert_eq!(response.body["message"], "API endpoint not found");
        assert_eq!(response.body["requestedUrl"], path);
    }
}
