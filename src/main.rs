// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use jobrs::application::dto::scrape_request::ScrapeRequestDto;
use jobrs::config::settings::Settings;
use jobrs::domain::services::proxy_pool::ProxyPool;
use jobrs::domain::services::session_controller::{ControllerState, SessionController};
use jobrs::infrastructure::api::http_client::HttpScrapeService;
use jobrs::infrastructure::storage::json_file_store::JsonFileStore;
use jobrs::utils::telemetry;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，提交一次配置好的抓取请求并跟踪到终止状态
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting jobrs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Load the persisted proxy pool
    let store = Arc::new(JsonFileStore::new(settings.proxy.store_path.clone()));
    let pool = ProxyPool::load(store).await;
    info!("Proxy pool loaded with {} entries", pool.len());

    // 4. Initialize the scrape service client
    let service = Arc::new(HttpScrapeService::new(&settings.api)?);
    let controller = SessionController::new(
        service,
        Duration::from_millis(settings.poller.interval_ms),
        settings.poller.page_size,
    );

    // 5. Build the request from configuration and the current pool snapshot
    let scrape = &settings.scrape;
    let request = ScrapeRequestDto {
        site_name: Some(scrape.site_names.clone()),
        search_term: scrape.search_term.clone(),
        location: scrape.location.clone(),
        results_wanted: Some(scrape.results_wanted),
        is_remote: Some(scrape.is_remote),
        job_type: scrape.job_type.clone(),
        country_indeed: scrape.country.clone(),
        hours_old: scrape.hours_old,
        ..Default::default()
    }
    .with_proxies(pool.snapshot());

    // 6. Submit and poll to a terminal state
    let session_id = controller.submit(request).await?;
    info!("Polling session {}...", session_id);
    controller.wait().await;

    let snapshot = controller.snapshot();
    match snapshot.state {
        ControllerState::Completed => {
            info!(
                "Completed - {} jobs found ({} pages)",
                snapshot.jobs_found, snapshot.pages
            );
            for job in &snapshot.jobs {
                println!(
                    "[{}] {} - {} ({})",
                    job.site,
                    job.title,
                    job.company,
                    job.location.as_deref().unwrap_or("n/a")
                );
            }
            if !snapshot.proxies_used.is_empty() {
                println!("Proxies used:");
                for entry in &snapshot.proxies_used {
                    println!("  {} at {}", entry.proxy, entry.used_at);
                }
            }
        }
        ControllerState::Failed => {
            warn!(
                "Scrape failed: {}",
                snapshot
                    .error_message
                    .as_deref()
                    .unwrap_or("Unknown error")
            );
        }
        state => {
            warn!("Polling ended in non-terminal state {:?}", state);
        }
    }

    Ok(())
}
