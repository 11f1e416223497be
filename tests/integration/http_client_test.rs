// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use jobrs::application::dto::list_query::JobListQueryDto;
use jobrs::application::dto::scrape_request::ScrapeRequestDto;
use jobrs::config::settings::ApiSettings;
use jobrs::domain::models::session::SessionStatus;
use jobrs::domain::repositories::scrape_service::ScrapeService;
use jobrs::infrastructure::api::http_client::HttpScrapeService;
use jobrs::utils::errors::ServiceError;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpScrapeService {
    HttpScrapeService::new(&ApiSettings {
        base_url: server.uri(),
        timeout_secs: 5,
    })
    .unwrap()
}

fn job_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "site": "indeed",
        "job_url": format!("https://indeed.com/viewjob?jk={}", id),
        "job_url_direct": null,
        "title": "Rust Developer",
        "company": "Acme",
        "location": "Berlin, Germany",
        "is_remote": true,
        "scrape_session_id": "sess-1"
    })
}

#[tokio::test]
async fn test_submit_scrape_posts_request_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/jobs/scrape"))
        .and(body_partial_json(json!({
            "search_term": "rust",
            "proxies": ["http://1.2.3.4:8080"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session_id": "sess-1",
            "status": "running"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = ScrapeRequestDto {
        search_term: Some("rust".to_string()),
        ..Default::default()
    }
    .with_proxies(vec!["http://1.2.3.4:8080".to_string()]);

    let response = client.submit_scrape(&request).await.unwrap();
    assert_eq!(response.session_id, "sess-1");
    assert_eq!(response.status, "running");
}

#[tokio::test]
async fn test_session_status_decodes_proxy_log() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/scrape/sess-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "session_id": "sess-1",
            "status": "completed",
            "jobs_found": 12,
            "error_message": null,
            "proxies_used": [{
                "proxy": "http://1.2.3.4:8080",
                "used_at": "2025-08-07T12:00:00Z",
                "session_id": "sess-1",
                "search_term": "rust"
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let status = client.session_status("sess-1").await.unwrap();
    assert_eq!(status.status, SessionStatus::Completed);
    assert_eq!(status.jobs_found, 12);
    let used = status.proxies_used.unwrap();
    assert_eq!(used.len(), 1);
    assert_eq!(used[0].proxy, "http://1.2.3.4:8080");
    assert_eq!(used[0].search_term.as_deref(), Some("rust"));
}

#[tokio::test]
async fn test_list_jobs_sends_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .and(query_param("session_id", "sess-1"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [job_json("j1"), job_json("j2")],
            "total": 27,
            "page": 2,
            "per_page": 25,
            "pages": 2
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = client
        .list_jobs(&JobListQueryDto::session_scoped("sess-1", 2, 25))
        .await
        .unwrap();
    assert_eq!(page.total, 27);
    assert_eq!(page.pages, 2);
    assert_eq!(page.jobs.len(), 2);
    assert_eq!(page.jobs[0].title, "Rust Developer");
}

#[tokio::test]
async fn test_list_jobs_filter_scoped_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs"))
        .and(query_param("site", "indeed"))
        .and(query_param("is_remote", "true"))
        .and(query_param("has_salary", "true"))
        .and(query_param("country", "Germany"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jobs": [],
            "total": 0,
            "page": 1,
            "per_page": 25,
            "pages": 1
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let query = JobListQueryDto {
        site: Some("indeed".to_string()),
        is_remote: Some(true),
        has_salary: Some(true),
        country: Some("Germany".to_string()),
        ..Default::default()
    };
    let page = client.list_jobs(&query).await.unwrap();
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_delete_job_hits_record_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/jobs/j1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_job("j1").await.unwrap();
}

#[tokio::test]
async fn test_stats_decodes_aggregates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_jobs": 100,
            "by_site": {"indeed": 60, "linkedin": 40},
            "by_country": {"Germany": 100},
            "remote_count": 30,
            "with_salary_count": 20,
            "total_sessions": 5
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let stats = client.stats().await.unwrap();
    assert_eq!(stats.total_jobs, 100);
    assert_eq!(stats.by_site.get("indeed"), Some(&60));
    assert_eq!(stats.total_sessions, 5);
}

#[tokio::test]
async fn test_proxy_log_is_global() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/proxy-log"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "proxy": "http://1.2.3.4:8080",
                "used_at": "2025-08-07T12:00:00Z",
                "session_id": "sess-1",
                "search_term": null
            },
            {
                "proxy": "socks5://5.6.7.8:1080",
                "used_at": "2025-08-07T11:00:00Z",
                "session_id": "sess-0",
                "search_term": "python"
            }
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let log = client.proxy_log().await.unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].session_id, "sess-0");
}

#[tokio::test]
async fn test_error_body_becomes_structured_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/jobs/scrape/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Session not found"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.session_status("missing").await.unwrap_err();
    match err {
        ServiceError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Session not found");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
    assert!(!ServiceError::Api {
        status: 404,
        message: String::new()
    }
    .is_transport());
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    // 端口0上没有服务，连接立即失败
    let client = HttpScrapeService::new(&ApiSettings {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 1,
    })
    .unwrap();

    let err = client.session_status("sess-1").await.unwrap_err();
    assert!(err.is_transport());
}
