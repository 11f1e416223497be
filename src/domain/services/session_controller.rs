// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{info, warn};
use validator::Validate;

use crate::application::dto::list_query::JobListQueryDto;
use crate::application::dto::scrape_request::ScrapeRequestDto;
use crate::domain::models::job::Job;
use crate::domain::models::session::{ProxyUsageLogEntry, SessionStatus};
use crate::domain::repositories::scrape_service::ScrapeService;
use crate::utils::errors::ControllerError;

/// 控制器状态枚举
///
/// 表示客户端观察到的抓取会话生命周期。
/// 状态转换遵循以下流程：
/// Idle → Submitting → Running → Completed/Failed
///
/// Completed和Failed为吸收态，只有新的提交能离开。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerState {
    /// 空闲，尚无会话或上次提交失败
    #[default]
    Idle,
    /// 提交中，等待服务端分配会话标识符
    Submitting,
    /// 运行中，轮询循环活跃
    Running,
    /// 已完成
    Completed,
    /// 已失败
    Failed,
}

/// 会话状态快照
///
/// 控制器对外暴露的全部可观察状态。page/pages构成当前的
/// 分页窗口，会话变更时窗口重置回第一页。
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    /// 控制器状态
    pub state: ControllerState,
    /// 当前会话标识符，提交成功前为None
    pub session_id: Option<String>,
    /// 当前已找到的职位数量
    pub jobs_found: u64,
    /// 失败时的错误信息
    pub error_message: Option<String>,
    /// 本会话的代理使用日志
    pub proxies_used: Vec<ProxyUsageLogEntry>,
    /// 当前页的职位记录
    pub jobs: Vec<Job>,
    /// 过滤条件下的总记录数
    pub total: u64,
    /// 当前页码
    pub page: u32,
    /// 总页数
    pub pages: u32,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            state: ControllerState::Idle,
            session_id: None,
            jobs_found: 0,
            error_message: None,
            proxies_used: Vec::new(),
            jobs: Vec::new(),
            total: 0,
            page: 1,
            pages: 1,
        }
    }
}

/// 抓取会话控制器
///
/// 提交抓取请求，以固定节奏轮询服务端直至终止状态，
/// 并在完成后开放按会话分页浏览结果。
///
/// 同一控制器任意时刻至多有一个活跃轮询循环：新的提交会
/// 递增代际计数并中止上一个循环的定时器任务；每次状态提交前
/// 比对代际，取消之后到达的响应一律丢弃，不会写入状态。
pub struct SessionController {
    service: Arc<dyn ScrapeService>,
    poll_interval: Duration,
    page_size: u32,
    inner: Arc<Mutex<SessionSnapshot>>,
    generation: Arc<AtomicU64>,
    poll_task: Mutex<Option<JoinHandle<()>>>,
}

impl SessionController {
    /// 创建新的会话控制器实例
    ///
    /// # 参数
    ///
    /// * `service` - 抓取服务接口
    /// * `poll_interval` - 轮询间隔
    /// * `page_size` - 结果分页大小
    pub fn new(service: Arc<dyn ScrapeService>, poll_interval: Duration, page_size: u32) -> Self {
        Self {
            service,
            poll_interval,
            page_size,
            inner: Arc::new(Mutex::new(SessionSnapshot::default())),
            generation: Arc::new(AtomicU64::new(0)),
            poll_task: Mutex::new(None),
        }
    }

    /// 当前状态快照
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.lock().clone()
    }

    /// 提交抓取请求
    ///
    /// 成功时捕获会话标识符、转入Running并启动轮询循环；
    /// 传输失败时回到Idle，不保留任何会话状态，错误向调用方传播。
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 服务端分配的会话标识符
    /// * `Err(ControllerError)` - 验证或提交失败
    pub async fn submit(&self, request: ScrapeRequestDto) -> Result<String, ControllerError> {
        request
            .validate()
            .map_err(|e| ControllerError::Validation(e.to_string()))?;

        // 1. 使上一个会话的轮询失效并停止其定时器
        let my_gen = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(handle) = self.poll_task.lock().take() {
            handle.abort();
        }

        // 2. 丢弃上一个会话的观察值，分页窗口回到第一页
        *self.inner.lock() = SessionSnapshot {
            state: ControllerState::Submitting,
            ..Default::default()
        };

        // 3. 调用提交接口
        match self.service.submit_scrape(&request).await {
            Ok(resp) => {
                if self.generation.load(Ordering::SeqCst) != my_gen {
                    return Err(ControllerError::Superseded);
                }
                {
                    let mut inner = self.inner.lock();
                    inner.state = ControllerState::Running;
                    inner.session_id = Some(resp.session_id.clone());
                    inner.jobs_found = 0;
                }
                info!("Scrape session {} submitted", resp.session_id);
                self.spawn_poll_loop(resp.session_id.clone(), my_gen);
                Ok(resp.session_id)
            }
            Err(e) => {
                if self.generation.load(Ordering::SeqCst) == my_gen {
                    self.inner.lock().state = ControllerState::Idle;
                }
                Err(ControllerError::Submit(e))
            }
        }
    }

    /// 取消未完成的轮询
    ///
    /// 离开会话视图时调用。只停止定时器并使在途响应失效，
    /// 最后观察到的状态保持不变。
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(handle) = self.poll_task.lock().take() {
            handle.abort();
        }
    }

    /// 等待当前轮询循环结束
    ///
    /// 会话到达终止状态（或被取消）后返回
    pub async fn wait(&self) {
        let handle = self.poll_task.lock().take();
        if let Some(handle) = handle {
            // 被abort的任务返回JoinError，这里只关心循环已结束
            let _ = handle.await;
        }
    }

    /// 跳转到指定结果页
    ///
    /// 仅当当前会话已完成且有结果时有效。页码超出`[1, pages]`
    /// 按约定拒绝而非截断；列表调用失败时保留调用前的page/pages值，
    /// 不应用任何部分更新。
    pub async fn goto_page(&self, page: u32) -> Result<(), ControllerError> {
        let (session_id, pages) = {
            let inner = self.inner.lock();
            if inner.state != ControllerState::Completed || inner.jobs_found == 0 {
                return Err(ControllerError::NotReady);
            }
            let Some(session_id) = inner.session_id.clone() else {
                return Err(ControllerError::NotReady);
            };
            (session_id, inner.pages)
        };

        if page < 1 || page > pages {
            return Err(ControllerError::PageOutOfRange { page, pages });
        }

        let query = JobListQueryDto::session_scoped(&session_id, page, self.page_size);
        let result = self.service.list_jobs(&query).await?;

        let mut inner = self.inner.lock();
        // 获取期间若开始了新会话，结果作废
        if inner.session_id.as_deref() != Some(session_id.as_str()) {
            return Err(ControllerError::Superseded);
        }
        inner.jobs = result.jobs;
        inner.total = result.total;
        inner.pages = result.pages;
        inner.page = page;
        Ok(())
    }

    /// 启动轮询循环
    ///
    /// 循环绑定启动时捕获的代际值，每次提交状态前比对；
    /// 观察到终止状态后恰好停止一次，不再发起轮询。
    fn spawn_poll_loop(&self, session_id: String, my_gen: u64) {
        let service = self.service.clone();
        let inner = self.inner.clone();
        let generation = self.generation.clone();
        let page_size = self.page_size;
        let poll_interval = self.poll_interval;

        let handle = tokio::spawn(async move {
            let mut ticker = interval(poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // interval的首次tick立即完成，先消费掉保证固定节奏
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if generation.load(Ordering::SeqCst) != my_gen {
                    return;
                }

                let status = match service.session_status(&session_id).await {
                    Ok(s) => s,
                    Err(e) if e.is_transport() => {
                        // 传输失败与"仍在运行"不可区分，下个周期重试
                        warn!("Poll transport error for session {}: {}", session_id, e);
                        continue;
                    }
                    Err(e) => {
                        // 结构化失败：会话转入失败态并停止轮询
                        if generation.load(Ordering::SeqCst) != my_gen {
                            return;
                        }
                        let mut guard = inner.lock();
                        guard.state = ControllerState::Failed;
                        guard.error_message = Some(e.to_string());
                        return;
                    }
                };

                // 应用前再次比对代际，丢弃取消之后到达的响应
                if generation.load(Ordering::SeqCst) != my_gen {
                    return;
                }

                let terminal = {
                    let mut guard = inner.lock();
                    guard.jobs_found = status.jobs_found;
                    if let Some(used) = &status.proxies_used {
                        guard.proxies_used = used.clone();
                    }
                    match status.status {
                        SessionStatus::Running => false,
                        SessionStatus::Completed => {
                            guard.state = ControllerState::Completed;
                            true
                        }
                        SessionStatus::Failed => {
                            guard.state = ControllerState::Failed;
                            guard.error_message = status.error_message.clone();
                            true
                        }
                    }
                };

                if !terminal {
                    continue;
                }

                info!(
                    "Session {} reached terminal state: {}",
                    session_id, status.status
                );

                // 完成且有结果：预取按会话过滤的第一页
                if status.status == SessionStatus::Completed && status.jobs_found > 0 {
                    let query = JobListQueryDto::session_scoped(&session_id, 1, page_size);
                    match service.list_jobs(&query).await {
                        Ok(page) => {
                            if generation.load(Ordering::SeqCst) != my_gen {
                                return;
                            }
                            let mut guard = inner.lock();
                            guard.jobs = page.jobs;
                            guard.total = page.total;
                            guard.pages = page.pages;
                            guard.page = 1;
                        }
                        Err(e) => {
                            // 首页获取失败不改变终止状态，分页值保持原样
                            warn!(
                                "Initial results fetch failed for session {}: {}",
                                session_id, e
                            );
                        }
                    }
                }
                return;
            }
        });

        *self.poll_task.lock() = Some(handle);
    }
}

#[cfg(test)]
#[path = "session_controller_test.rs"]
mod tests;
