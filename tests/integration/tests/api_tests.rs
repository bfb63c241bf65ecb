//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, assert_text, check_test_env, fixtures::*, hidden_input,
    TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["icons"], "loaded");
}

// ============================================================================
// Client Action Tests
// ============================================================================

#[tokio::test]
async fn test_guest_toggle_cycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let id = unique_id();
    let guest = unique_guest();

    // Add
    let response = server
        .post_form("/ajax", &ReactionClick::on_post(id, "like", &guest))
        .await
        .unwrap();
    let html = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(!html.contains("class='reaction'"));
    assert!(html.contains(&format!(
        "<a data-reaction='like' title='{guest}'><span class='badge'>1</span><img src='/assets/img/like.svg'></a> "
    )));
    assert!(html.contains("<a data-reaction='love' title='No clicks yet'><img"));

    // Switch
    let response = server
        .post_form("/ajax", &ReactionClick::on_post(id, "love", &guest))
        .await
        .unwrap();
    let html = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(html.contains("<a data-reaction='like' title='No clicks yet'><img"));
    assert!(html.contains("<a data-reaction='love' title='"));
    assert_eq!(html.matches("class='badge'>1<").count(), 1);

    // Remove
    let response = server
        .post_form("/ajax", &ReactionClick::on_post(id, "love", &guest))
        .await
        .unwrap();
    let html = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(!html.contains("class='badge'"));
}

#[tokio::test]
async fn test_guests_are_counted_separately() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let id = unique_id();

    for guest in ["Ana", "Bia"] {
        server
            .post_form("/ajax", &ReactionClick::on_post(id, "wow", guest))
            .await
            .unwrap();
    }

    let response = server
        .get(&format!("/api/v1/reactions/post/{id}/tally"))
        .await
        .unwrap();
    let tally: Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(tally["total"], 2);
    assert_eq!(tally["counts"][2], json!({"reaction": "wow", "count": 2}));
    assert_eq!(tally["names"][2]["names"], json!(["Ana", "Bia"]));
}

#[tokio::test]
async fn test_member_reacts_under_display_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let id = unique_id();
    let user_id = unique_id();
    insert_user(&server.pool, user_id, "Carla Member").await.unwrap();

    let token = server.member_token(user_id);
    let response = server
        .post_form_auth("/ajax", &token, &ReactionClick::on_post(id, "like", ""))
        .await
        .unwrap();
    let html = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(html.contains("title='Carla Member'"));

    // Same member through the session cookie: second click removes it
    let response = server
        .post_form_cookie("/ajax", &token, &ReactionClick::on_post(id, "like", ""))
        .await
        .unwrap();
    let html = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(!html.contains("class='badge'"));
}

#[tokio::test]
async fn test_ajax_rejects_inactive_reaction() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post_form("/ajax", &ReactionClick::on_post(unique_id(), "angry", "Ana"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "REACTION_NOT_ENABLED");
}

#[tokio::test]
async fn test_ajax_rejects_unknown_action() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut click = ReactionClick::on_post(unique_id(), "like", "Ana");
    click.action = "heartbeat";

    let response = server.post_form("/ajax", &click).await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[tokio::test]
async fn test_wrapped_fragment() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let id = unique_id();

    let response = server
        .get(&format!("/api/v1/reactions/comment/{id}"))
        .await
        .unwrap();
    let html = assert_text(response, StatusCode::OK).await.unwrap();

    assert!(html.starts_with(&format!(
        "<div data-id='{id}' data-type='comment' class='reaction'>\n"
    )));
    assert!(html.ends_with("</div> "));
    assert_eq!(html.matches("<a data-reaction=").count(), ACTIVE.len());
}

#[tokio::test]
async fn test_bad_path_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/reactions/post/abc").await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_PATH_PARAMETER");
}

#[tokio::test]
async fn test_content_filter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let id = unique_id();

    let response = server
        .post(
            "/api/v1/filters/content",
            &json!({"post_id": id, "post_type": "post", "content": "<p>Hello</p>"}),
        )
        .await
        .unwrap();
    let html = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(html.starts_with(&format!("<div data-id='{id}' data-type='post'")));
    assert!(html.ends_with("</div> <p>Hello</p>"));

    // Types without reactions pass through
    let response = server
        .post(
            "/api/v1/filters/content",
            &json!({"post_id": id, "post_type": "product", "content": "<p>Hello</p>"}),
        )
        .await
        .unwrap();
    assert_eq!(
        assert_text(response, StatusCode::OK).await.unwrap(),
        "<p>Hello</p>"
    );
}

#[tokio::test]
async fn test_comment_filter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let id = unique_id();

    let response = server
        .post(
            "/api/v1/filters/comment",
            &json!({"comment_id": id, "text": "Great read"}),
        )
        .await
        .unwrap();
    let html = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(html.starts_with(&format!(
        "Great read<div data-id='{id}' data-type='comment' class='reaction'>"
    )));
}

#[tokio::test]
async fn test_bootstrap_reflects_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/bootstrap").await.unwrap();
    let html = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(html.contains("\"loggedIn\":\"no\""));
    assert!(html.contains(&format!("\"hash\":\"{TEST_COOKIE_HASH}\"")));
    assert!(html.contains("\"ajaxurl\":\"http://127.0.0.1/ajax\""));

    let token = server.member_token(unique_id());
    let response = server.get_auth("/api/v1/bootstrap", &token).await.unwrap();
    let html = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(html.contains("\"loggedIn\":\"yes\""));
}

#[tokio::test]
async fn test_static_assets_are_served() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    for path in ["/assets/js/reaction.js", "/assets/css/reaction.css", "/assets/img/like.svg"] {
        let response = server.get(path).await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }
}

// ============================================================================
// Ranking Tests
// ============================================================================

#[tokio::test]
async fn test_most_reacted_ranking() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let post_type = unique_type();
    let (first, second, quiet, draft) = (unique_id(), unique_id(), unique_id(), unique_id());

    for id in [first, second, quiet] {
        insert_post(&server.pool, id, &post_type, "publish").await.unwrap();
    }
    insert_post(&server.pool, draft, &post_type, "draft").await.unwrap();

    let clicks = [
        (first, "like", "Ana"),
        (first, "love", "Bia"),
        (second, "love", "Ana"),
        (draft, "like", "Ana"),
    ];
    for (id, reaction, guest) in clicks {
        let response = server
            .post_form("/ajax", &ReactionClick::new(&post_type, id, reaction, guest))
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server
        .get(&format!("/api/v1/most-reacted?post_type={post_type}"))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let items = body["items"].as_array().unwrap();

    assert_eq!(body["reaction_type"], "any");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], first);
    assert_eq!(items[0]["reaction_count"], 2);
    assert_eq!(items[1]["id"], second);

    let response = server
        .get(&format!(
            "/api/v1/most-reacted?post_type={post_type}&reactions=love&limit=1"
        ))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let items = body["items"].as_array().unwrap();

    assert_eq!(body["reaction_type"], "love");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], first);
    assert_eq!(items[0]["reaction_count"], 1);
}

// ============================================================================
// Admin Settings Tests
// ============================================================================

#[tokio::test]
async fn test_admin_requires_capability() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/admin/settings").await.unwrap();
    let html = assert_text(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert!(html.contains("<div class='error'>"));

    let token = server.member_token(unique_id());
    let response = server.get_auth("/admin/settings", &token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_admin_save_settings() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token(unique_id());

    let response = server.get_auth("/admin/settings", &token).await.unwrap();
    let page = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(page.contains("<h2>Reaction options</h2>"));
    assert!(page.contains("name='types' value='page' checked"));
    assert!(!page.contains("value='attachment'"));
    assert!(page.contains("<option value='flat'>flat</option>"));

    let nonce = hidden_input(&page, "reaction_nonce_field").expect("nonce field");
    let response = server
        .post_form_auth("/admin/settings", &token, &standard_settings_form(&nonce))
        .await
        .unwrap();
    let page = assert_text(response, StatusCode::OK).await.unwrap();
    assert!(page.contains("Configuration successfully saved!"));

    let like = page.find("name='active_order' value='like'").unwrap();
    let wow = page.find("name='active_order' value='wow'").unwrap();
    assert!(like < wow);
}

#[tokio::test]
async fn test_admin_save_rejects_bad_nonce() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token(unique_id());

    let response = server
        .post_form_auth("/admin/settings", &token, &standard_settings_form("forged"))
        .await
        .unwrap();
    let html = assert_text(response, StatusCode::FORBIDDEN).await.unwrap();
    assert!(html.contains("Security check failed"));
}
