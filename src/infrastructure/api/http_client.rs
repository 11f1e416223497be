// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

use crate::application::dto::list_query::JobListQueryDto;
use crate::application::dto::scrape_request::ScrapeRequestDto;
use crate::config::settings::ApiSettings;
use crate::domain::models::job::JobPage;
use crate::domain::models::session::{ProxyUsageLogEntry, ScrapeStatus};
use crate::domain::models::stats::JobStats;
use crate::domain::repositories::scrape_service::{ScrapeService, SubmitResponse};
use crate::utils::errors::ServiceError;

/// 抓取服务HTTP客户端
///
/// 基于reqwest实现的ScrapeService，访问服务端的
/// `/api/v1/jobs`接口族。非2xx应答解析为结构化API错误，
/// 网络层失败映射为传输错误。
pub struct HttpScrapeService {
    client: Client,
    base_url: Url,
}

impl HttpScrapeService {
    /// 创建新的HTTP客户端实例
    ///
    /// # 参数
    ///
    /// * `settings` - API配置（基础URL和超时）
    ///
    /// # 返回值
    ///
    /// * `Ok(HttpScrapeService)` - 客户端实例
    /// * `Err(ServiceError)` - 基础URL无效或客户端构建失败
    pub fn new(settings: &ApiSettings) -> Result<Self, ServiceError> {
        let base_url = Url::parse(&settings.base_url)?;
        let client = Client::builder()
            .user_agent(concat!("jobrs/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        Ok(self.base_url.join(path)?)
    }

    /// 将非2xx应答转换为结构化API错误
    ///
    /// 服务端错误体为`{"error": ...}`或`{"detail": ...}`，
    /// 解析失败时退回原始响应体
    async fn check_status(response: Response) -> Result<Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .or_else(|| v.get("detail"))
                    .and_then(|m| m.as_str())
                    .map(|m| m.to_string())
            })
            .unwrap_or(body);
        Err(ServiceError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ScrapeService for HttpScrapeService {
    async fn submit_scrape(
        &self,
        request: &ScrapeRequestDto,
    ) -> Result<SubmitResponse, ServiceError> {
        let url = self.endpoint("api/v1/jobs/scrape")?;
        let response = self.client.post(url).json(request).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn session_status(&self, session_id: &str) -> Result<ScrapeStatus, ServiceError> {
        let url = self.endpoint(&format!("api/v1/jobs/scrape/{}", session_id))?;
        let response = self.client.get(url).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn list_jobs(&self, query: &JobListQueryDto) -> Result<JobPage, ServiceError> {
        let url = self.endpoint("api/v1/jobs")?;
        let response = self.client.get(url).query(query).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn delete_job(&self, job_id: &str) -> Result<(), ServiceError> {
        let url = self.endpoint(&format!("api/v1/jobs/{}", job_id))?;
        let response = self.client.delete(url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn stats(&self) -> Result<JobStats, ServiceError> {
        let url = self.endpoint("api/v1/jobs/stats")?;
        let response = self.client.get(url).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn proxy_log(&self) -> Result<Vec<ProxyUsageLogEntry>, ServiceError> {
        let url = self.endpoint("api/v1/jobs/proxy-log")?;
        let response = self.client.get(url).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }
}
