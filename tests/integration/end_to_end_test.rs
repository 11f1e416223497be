// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use jobrs::application::dto::scrape_request::ScrapeRequestDto;
use jobrs::config::settings::ApiSettings;
use jobrs::domain::services::proxy_pool::ProxyPool;
use jobrs::domain::services::session_controller::{ControllerState, SessionController};
use jobrs::infrastructure::api::http_client::HttpScrapeService;
use jobrs::infrastructure::storage::json_file_store::JsonFileStore;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn status_json(status: &str, jobs_found: u64) -> serde_json::Value {
    json!({
        "session_id": "sess-1",
        "status": status,
        "jobs_found": jobs_found,
        "error_message": null,
        "proxies_used": null
    })
}

/// 完整流程：加载代理池 → 提交 → 轮询到完成 → 取回第一页
#[tokio::test]
async fn test_full_scrape_session_against_mock_backend() {
    let server = MockServer::start().await;

    // 提交接口必须收到规范化后的代理池快照
    Mock::given(method("POST"))
        .and(path("/api/v1/jobs/scrape"))
        .and(body_partial_json(json!({
            "proxies": ["http://1.2.3.4:8080", "http://5.6.7.8:3128"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session_id": "sess-1",
            "status": "running"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // 轮询序列：running(0) → running(12) → completed(12)
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/scrape/sess-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_json("running", 0)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/scrape/sess-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_json("running", 12)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/scrape/sess-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_json("completed", 12)))
        .mount(&server)
        .await;

    // 完成后恰好一次按会话过滤的第一页请求
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .and(query_param("session_id", "sess-1"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [{
                "id": "j1",
                "site": "indeed",
                "job_url": "https://indeed.com/viewjob?jk=j1",
                "title": "Rust Developer",
                "company": "Acme",
                "location": "Berlin, Germany",
                "scrape_session_id": "sess-1"
            }],
            "total": 12,
            "page": 1,
            "per_page": 25,
            "pages": 1
        })))
        .expect(1)
        .mount(&server)
        .await;

    // 1. Build the proxy pool from bulk text, persisted to a temp file
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path().join("proxies.json")));
    let mut pool = ProxyPool::load(store.clone()).await;
    pool.add_bulk("1.2.3.4:8080\nhttp://5.6.7.8:3128").await;
    assert_eq!(
        pool.entries(),
        &[
            "http://1.2.3.4:8080".to_string(),
            "http://5.6.7.8:3128".to_string(),
        ]
    );

    // 重新加载验证持久化内容
    let reloaded = ProxyPool::load(store).await;
    assert_eq!(reloaded.snapshot(), pool.snapshot());

    // 2. Submit and poll to completion
    let service = Arc::new(
        HttpScrapeService::new(&ApiSettings {
            base_url: server.uri(),
            timeout_secs: 5,
        })
        .unwrap(),
    );
    let controller =
        SessionController::new(service, Duration::from_millis(20), 25);

    let request = ScrapeRequestDto {
        search_term: Some("rust developer".to_string()),
        results_wanted: Some(12),
        ..Default::default()
    }
    .with_proxies(pool.snapshot());

    let session_id = controller.submit(request).await.unwrap();
    assert_eq!(session_id, "sess-1");
    assert_eq!(controller.snapshot().state, ControllerState::Running);

    controller.wait().await;

    // 3. Terminal state with the first page bound to the session
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.state, ControllerState::Completed);
    assert_eq!(snapshot.jobs_found, 12);
    assert_eq!(snapshot.page, 1);
    assert_eq!(snapshot.pages, 1);
    assert_eq!(snapshot.total, 12);
    assert_eq!(snapshot.jobs.len(), 1);
    assert_eq!(snapshot.jobs[0].company, "Acme");
}

/// 提交失败的请求不产生任何轮询
#[tokio::test]
async fn test_rejected_submission_stays_idle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/jobs/scrape"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"detail": "No sites selected"})),
        )
        .mount(&server)
        .await;

    let service = Arc::new(
        HttpScrapeService::new(&ApiSettings {
            base_url: server.uri(),
            timeout_secs: 5,
        })
        .unwrap(),
    );
    let controller =
        SessionController::new(service, Duration::from_millis(20), 25);

    let result = controller.submit(ScrapeRequestDto::default()).await;
    assert!(result.is_err());
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.state, ControllerState::Idle);
    assert!(snapshot.session_id.is_none());

    // 没有会话，也就没有任何状态轮询请求
    let polled = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path().starts_with("/api/v1/jobs/scrape/"))
        .count();
    assert_eq!(polled, 0);
}
