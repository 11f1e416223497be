// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 抓取服务错误类型
///
/// 区分传输层失败和服务端返回的结构化失败，
/// 轮询策略依赖这一区分：传输失败可重试，结构化失败终止会话
#[derive(Error, Debug)]
pub enum ServiceError {
    /// 传输错误，网络不可达、超时等
    #[error("Transport error: {0}")]
    Transport(String),

    /// 服务端返回的结构化错误
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// 无效的服务地址
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        ServiceError::Transport(err.to_string())
    }
}

impl ServiceError {
    /// 判断是否为传输层错误
    ///
    /// 传输层错误在轮询中与"仍在运行"不可区分，按下一个周期重试处理
    pub fn is_transport(&self) -> bool {
        matches!(self, ServiceError::Transport(_))
    }
}

/// 本地存储错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 会话控制器错误类型
#[derive(Error, Debug)]
pub enum ControllerError {
    /// 提交失败，状态已回退到空闲
    #[error("Submit failed: {0}")]
    Submit(#[source] ServiceError),

    /// 操作结果已被更新的提交取代，未应用到状态
    #[error("Superseded by a newer submission")]
    Superseded,

    /// 请求参数验证失败
    #[error("Validation error: {0}")]
    Validation(String),

    /// 当前没有已完成且有结果的会话
    #[error("No completed session with results")]
    NotReady,

    /// 页码越界，按约定拒绝而非截断
    #[error("Page {page} out of range (1..={pages})")]
    PageOutOfRange { page: u32, pages: u32 },

    /// 服务调用错误
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
}
