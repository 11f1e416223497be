// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 抓取请求数据传输对象
///
/// 用于封装客户端发起的职位抓取请求的相关参数。
/// 每次提交构造一次，提交后不再修改；代理列表字段携带
/// 提交时刻的代理池快照，空池以None表示"不使用代理"。
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct ScrapeRequestDto {
    /// 目标站点标识列表，None表示全部站点
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<Vec<String>>,
    /// 搜索关键词
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    /// Google搜索专用关键词
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_search_term: Option<String>,
    /// 地点
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// 距离范围（英里）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<u32>,
    /// 是否仅远程职位
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_remote: Option<bool>,
    /// 职位类型过滤
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    /// 是否仅限快速申请
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easy_apply: Option<bool>,
    /// 期望结果数量
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub results_wanted: Option<u32>,
    /// 国家代码（Indeed站点使用）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_indeed: Option<String>,
    /// 职位描述格式
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_format: Option<String>,
    /// 是否抓取LinkedIn职位描述
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_fetch_description: Option<bool>,
    /// 最大发布时长（小时）
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub hours_old: Option<u32>,
    /// 是否强制换算年薪
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce_annual_salary: Option<bool>,
    /// 提交时刻的代理池快照
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxies: Option<Vec<String>>,
}

impl ScrapeRequestDto {
    /// 附加代理池快照
    ///
    /// 空池不携带proxies字段，表示不使用代理
    pub fn with_proxies(mut self, proxies: Vec<String>) -> Self {
        self.proxies = if proxies.is_empty() {
            None
        } else {
            Some(proxies)
        };
        self
    }
}
