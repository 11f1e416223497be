// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 会话状态枚举
///
/// 表示服务端抓取会话在其生命周期中的状态。
/// 状态转换遵循以下流程：
/// Running → Completed/Failed
///
/// Completed和Failed为终止状态，观察到终止状态后会话不再变化。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// 运行中，服务端仍在执行抓取
    #[default]
    Running,
    /// 已完成，抓取成功结束
    Completed,
    /// 已失败，抓取出错终止
    Failed,
}

impl SessionStatus {
    /// 判断是否为终止状态
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionStatus::Completed | SessionStatus::Failed)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessionStatus::Running => write!(f, "running"),
            SessionStatus::Completed => write!(f, "completed"),
            SessionStatus::Failed => write!(f, "failed"),
        }
    }
}

impl FromStr for SessionStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(SessionStatus::Running),
            "completed" => Ok(SessionStatus::Completed),
            "failed" => Ok(SessionStatus::Failed),
            _ => Err(()),
        }
    }
}

/// 代理使用日志条目
///
/// 关联一个代理地址、使用时间和所属会话，由服务端存储层拥有，
/// 客户端只读。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyUsageLogEntry {
    /// 代理地址
    pub proxy: String,
    /// 使用时间
    pub used_at: DateTime<Utc>,
    /// 所属会话标识符
    pub session_id: String,
    /// 使用该代理时生效的搜索关键词
    pub search_term: Option<String>,
}

/// 抓取会话状态快照
///
/// 轮询接口每次返回的会话观测值。会话标识符为服务端分配的
/// 不透明令牌；状态离开Running后快照不再变化。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeStatus {
    /// 会话标识符
    pub session_id: String,
    /// 会话状态
    pub status: SessionStatus,
    /// 当前已找到的职位数量
    pub jobs_found: u64,
    /// 失败时的错误信息
    pub error_message: Option<String>,
    /// 本会话的代理使用日志，按使用时间排序
    pub proxies_used: Option<Vec<ProxyUsageLogEntry>>,
}
