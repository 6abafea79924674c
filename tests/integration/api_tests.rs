// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

fn targets(list: &Value) -> Vec<(String, String)> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|w| {
            (
                w["id"].as_str().unwrap().to_string(),
                w["targetUrl"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

/// 测试注册、列出、更新、删除的完整流程
#[tokio::test]
async fn test_admin_lifecycle() {
    let app = create_test_app().await;

    let (status, body) = app
        .request(
            Method::POST,
            "/admin/register",
            Some(json!({ "targetUrl": "http://a.example/hook" })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let (status, list) = app.request(Method::GET, "/admin/list", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        targets(&list),
        vec![(id.clone(), "http://a.example/hook".to_string())]
    );

    let (status, _) = app
        .request(
            Method::PUT,
            "/admin/update",
            Some(json!({ "id": id, "newTargetUrl": "http://b.example/hook" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = app.request(Method::GET, "/admin/list", None).await;
    assert_eq!(
        targets(&list),
        vec![(id.clone(), "http://b.example/hook".to_string())]
    );

    let (status, _) = app
        .request(Method::DELETE, &format!("/admin/delete/{}", id), None)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = app.request(Method::GET, "/admin/list", None).await;
    assert!(targets(&list).is_empty());

    let (status, body) = app
        .request(Method::DELETE, &format!("/admin/delete/{}", id), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("Invalid ID"));
}

#[tokio::test]
async fn test_register_assigns_distinct_ids() {
    let app = create_test_app().await;

    let mut ids = Vec::new();
    for _ in 0..2 {
        let (status, body) = app
            .request(
                Method::POST,
                "/admin/register",
                Some(json!({ "targetUrl": "http://same.example/hook" })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(body["id"].as_str().unwrap().to_string());
    }

    assert_ne!(ids[0], ids[1]);
    let (_, list) = app.request(Method::GET, "/admin/list", None).await;
    assert_eq!(targets(&list).len(), 2);
}

#[tokio::test]
async fn test_register_rejects_invalid_url() {
    let app = create_test_app().await;

    for bad in ["not a url", "", "http://"] {
        let (status, body) = app
            .request(
                Method::POST,
                "/admin/register",
                Some(json!({ "targetUrl": bad })),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {:?}", bad);
        assert!(body["error"].is_string());
    }

    let (_, list) = app.request(Method::GET, "/admin/list", None).await;
    assert!(targets(&list).is_empty());
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let app = create_test_app().await;

    let (status, body) = app
        .request(
            Method::PUT,
            "/admin/update",
            Some(json!({ "id": "no-such-id", "newTargetUrl": "http://c.example/" })),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("no-such-id"));
}

#[tokio::test]
async fn test_update_with_invalid_url_leaves_entry_untouched() {
    let app = create_test_app().await;

    let (_, body) = app
        .request(
            Method::POST,
            "/admin/register",
            Some(json!({ "targetUrl": "http://keep.example/" })),
        )
        .await;
    let id = body["id"].as_str().unwrap().to_string();

    // Legacy clients send the identifier as "ID"
    let (status, _) = app
        .request(
            Method::PUT,
            "/admin/update",
            Some(json!({ "ID": id, "newTargetUrl": "::bogus::" })),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = app.request(Method::GET, "/admin/list", None).await;
    assert_eq!(
        targets(&list),
        vec![(id, "http://keep.example/".to_string())]
    );
}

#[tokio::test]
async fn test_update_accepts_legacy_id_field() {
    let app = create_test_app().await;

    let (_, body) = app
        .request(
            Method::POST,
            "/admin/register",
            Some(json!({ "targetUrl": "http://old.example/" })),
        )
        .await;
    let id = body["id"].as_str().unwrap().to_string();

    let (status, _) = app
        .request(
            Method::PUT,
            "/admin/update",
            Some(json!({ "ID": id, "newTargetUrl": "http://new.example/" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = app.request(Method::GET, "/admin/list", None).await;
    assert_eq!(targets(&list)[0].1, "http://new.example/");
}

#[tokio::test]
async fn test_testing_endpoint_echoes_body() {
    let app = create_test_app().await;
    let payload = json!({ "ipAddress": "10.0.0.1", "timeStamp": 1_700_000_000 });

    let (status, body) = app
        .request(Method::POST, "/testing", Some(payload.clone()))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, payload);
}

#[tokio::test]
async fn test_register_rejects_malformed_body() {
    let app = create_test_app().await;

    for body in [json!({}), json!({ "targetUrl": 42 }), json!({ "targetUrl": null })] {
        let (status, response) = app
            .request(Method::POST, "/admin/register", Some(body.clone()))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {}", body);
        assert!(response["error"].is_string(), "non-JSON error for {}", body);
    }

    let (_, list) = app.request(Method::GET, "/admin/list", None).await;
    assert!(targets(&list).is_empty());
}

#[tokio::test]
async fn test_update_rejects_incomplete_body() {
    let app = create_test_app().await;

    let (_, body) = app
        .request(
            Method::POST,
            "/admin/register",
            Some(json!({ "targetUrl": "http://stay.example/" })),
        )
        .await;
    let id = body["id"].as_str().unwrap().to_string();

    for incomplete in [
        json!({ "id": id }),
        json!({ "newTargetUrl": "http://other.example/" }),
    ] {
        let (status, response) = app
            .request(Method::PUT, "/admin/update", Some(incomplete.clone()))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted {}", incomplete);
        assert!(response["error"].is_string());
    }

    let (_, list) = app.request(Method::GET, "/admin/list", None).await;
    assert_eq!(
        targets(&list),
        vec![(id, "http://stay.example/".to_string())]
    );
}
