// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_db;
use chrono::{Duration, Utc};
use hookcast::domain::models::webhook::{TargetUrl, Webhook};
use hookcast::domain::repositories::webhook_repository::WebhookRepository;
use hookcast::infrastructure::repositories::webhook_repo_impl::WebhookRepoImpl;

fn webhook(url: &str) -> Webhook {
    Webhook::new(&TargetUrl::parse(url).unwrap())
}

#[tokio::test]
async fn test_create_and_find_all() {
    let repo = WebhookRepoImpl::new(create_test_db().await);

    let mut first = webhook("http://one.example/");
    first.created_at = Utc::now() - Duration::seconds(5);
    let second = webhook("http://two.example/");

    repo.create(&second).await.unwrap();
    repo.create(&first).await.unwrap();

    let all = repo.find_all().await.unwrap();
    let urls: Vec<&str> = all.iter().map(|w| w.target_url.as_str()).collect();
    assert_eq!(urls, vec!["http://one.example/", "http://two.example/"]);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

#[tokio::test]
async fn test_update_target_url_reports_affected_rows() {
    let repo = WebhookRepoImpl::new(create_test_db().await);
    let hook = webhook("http://before.example/");
    repo.create(&hook).await.unwrap();

    let affected = repo
        .update_target_url(&hook.id, "http://after.example/")
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let missing = repo
        .update_target_url("missing", "http://after.example/")
        .await
        .unwrap();
    assert_eq!(missing, 0);

    let all = repo.find_all().await.unwrap();
    assert_eq!(all[0].target_url, "http://after.example/");
    assert_eq!(all[0].id, hook.id);
}

#[tokio::test]
async fn test_delete_by_id_reports_affected_rows() {
    let repo = WebhookRepoImpl::new(create_test_db().await);
    let keep = webhook("http://keep.example/");
    let drop = webhook("http://drop.example/");
    repo.create(&keep).await.unwrap();
    repo.create(&drop).await.unwrap();

    assert_eq!(repo.delete_by_id(&drop.id).await.unwrap(), 1);
    assert_eq!(repo.delete_by_id(&drop.id).await.unwrap(), 0);

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, keep.id);
}

#[tokio::test]
async fn test_duplicate_urls_are_separate_entries() {
    let repo = WebhookRepoImpl::new(create_test_db().await);
    repo.create(&webhook("http://dup.example/")).await.unwrap();
    repo.create(&webhook("http://dup.example/")).await.unwrap();

    assert_eq!(repo.find_all().await.unwrap().len(), 2);
}
