// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含抓取服务API、轮询器、代理存储和默认抓取请求等所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 抓取服务API配置
    pub api: ApiSettings,
    /// 轮询器配置
    pub poller: PollerSettings,
    /// 代理池存储配置
    pub proxy: ProxySettings,
    /// 默认抓取请求配置
    pub scrape: ScrapeSettings,
}

/// 抓取服务API配置设置
#[derive(Debug, Deserialize)]
pub struct ApiSettings {
    /// 服务基础URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

/// 轮询器配置设置
#[derive(Debug, Deserialize)]
pub struct PollerSettings {
    /// 轮询间隔（毫秒）
    pub interval_ms: u64,
    /// 结果分页大小
    pub page_size: u32,
}

/// 代理池存储配置设置
#[derive(Debug, Deserialize)]
pub struct ProxySettings {
    /// 代理列表持久化文件路径
    pub store_path: String,
}

/// 默认抓取请求配置设置
///
/// CLI入口使用这些默认值构造一次抓取请求
#[derive(Debug, Deserialize)]
pub struct ScrapeSettings {
    /// 目标站点列表
    pub site_names: Vec<String>,
    /// 搜索关键词
    pub search_term: Option<String>,
    /// 地点
    pub location: Option<String>,
    /// 期望结果数量
    pub results_wanted: u32,
    /// 是否仅远程职位
    pub is_remote: bool,
    /// 职位类型过滤
    pub job_type: Option<String>,
    /// 国家代码
    pub country: Option<String>,
    /// 最大发布时长（小时）
    pub hours_old: Option<u32>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("api.base_url", "http://localhost:8000")?
            .set_default("api.timeout_secs", 30)?
            // Default poller settings
            .set_default("poller.interval_ms", 1500)?
            .set_default("poller.page_size", 25)?
            // Default proxy store settings
            .set_default("proxy.store_path", "./proxies.json")?
            // Default scrape request settings
            .set_default("scrape.site_names", vec!["indeed".to_string()])?
            .set_default("scrape.results_wanted", 20)?
            .set_default("scrape.is_remote", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("JOBRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
