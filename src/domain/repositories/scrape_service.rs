// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::dto::list_query::JobListQueryDto;
use crate::application::dto::scrape_request::ScrapeRequestDto;
use crate::domain::models::job::JobPage;
use crate::domain::models::session::{ProxyUsageLogEntry, ScrapeStatus};
use crate::domain::models::stats::JobStats;
use crate::utils::errors::ServiceError;

/// 提交抓取请求的应答
///
/// 服务端接受请求后分配的会话标识符和初始状态
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// 会话标识符，不透明令牌
    pub session_id: String,
    /// 初始状态
    pub status: String,
}

/// 抓取服务接口
///
/// 远端抓取/存储服务暴露的操作集合，经同步请求/应答传输访问。
/// 该接口是客户端与服务端的边界，领域层只依赖此抽象。
#[async_trait]
pub trait ScrapeService: Send + Sync {
    /// 提交抓取请求，服务端启动异步任务
    async fn submit_scrape(&self, request: &ScrapeRequestDto)
        -> Result<SubmitResponse, ServiceError>;

    /// 查询会话状态，幂等，可重复轮询
    async fn session_status(&self, session_id: &str) -> Result<ScrapeStatus, ServiceError>;

    /// 分页列出职位记录
    ///
    /// 支持两种调用形式：按会话过滤（抓取视图）和按条件过滤（浏览视图）
    async fn list_jobs(&self, query: &JobListQueryDto) -> Result<JobPage, ServiceError>;

    /// 删除一条职位记录
    async fn delete_job(&self, job_id: &str) -> Result<(), ServiceError>;

    /// 获取职位库聚合统计
    async fn stats(&self) -> Result<JobStats, ServiceError>;

    /// 获取全局代理使用日志，不按会话过滤
    async fn proxy_log(&self) -> Result<Vec<ProxyUsageLogEntry>, ServiceError>;
}
