// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 职位列表查询数据传输对象
///
/// 列表接口的两种调用形式共用此对象：
/// - 会话过滤：抓取视图按session_id取当次会话的结果
/// - 条件过滤：浏览视图按站点、关键词等条件取历史结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListQueryDto {
    /// 页码，从1开始
    pub page: u32,
    /// 分页大小
    pub per_page: u32,
    /// 会话标识符过滤
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// 站点过滤
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    /// 标题/公司关键词过滤
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// 远程职位过滤
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_remote: Option<bool>,
    /// 带薪资信息过滤
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_salary: Option<bool>,
    /// 国家过滤
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// 排序字段
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// 排序方向（asc/desc）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

impl Default for JobListQueryDto {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 25,
            session_id: None,
            site: None,
            search: None,
            is_remote: None,
            has_salary: None,
            country: None,
            sort_by: None,
            sort_order: None,
        }
    }
}

impl JobListQueryDto {
    /// 构造会话过滤查询
    pub fn session_scoped(session_id: &str, page: u32, per_page: u32) -> Self {
        Self {
            page,
            per_page,
            session_id: Some(session_id.to_string()),
            ..Default::default()
        }
    }
}
