// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::warn;

use crate::domain::models::proxy::{normalize_proxy, parse_proxy_text};
use crate::domain::repositories::proxy_store::ProxyStore;

/// 代理池
///
/// 维护一份去重、有序、可编辑的代理地址列表，供抓取请求携带。
/// 顺序为插入顺序，编辑原位替换。每次变更后写入注入的存储；
/// 写入失败只记录日志，调用方只观察内存内的结果。
pub struct ProxyPool {
    entries: Vec<String>,
    store: Arc<dyn ProxyStore>,
}

impl ProxyPool {
    /// 从存储加载代理池
    ///
    /// 存储缺失或内容损坏按空池处理，绝不因此失败
    pub async fn load(store: Arc<dyn ProxyStore>) -> Self {
        let entries = store.load().await;
        Self { entries, store }
    }

    /// 当前代理列表
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// 提交时刻的代理池快照
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 批量添加代理
    ///
    /// 解析批量文本后按规范化字符串做集合并集：已有条目保持原位置，
    /// 新条目按解析顺序追加。解析结果为空时静默跳过，
    /// 粘贴空白不是错误。
    pub async fn add_bulk(&mut self, text: &str) {
        let parsed = parse_proxy_text(text);
        if parsed.is_empty() {
            return;
        }
        for proxy in parsed {
            if !self.entries.contains(&proxy) {
                self.entries.push(proxy);
            }
        }
        self.persist().await;
    }

    /// 编辑单个条目
    ///
    /// 规范化失败（空输入）或结果与当前值相同时不做任何变更。
    /// 原位替换，不影响其他条目位置。不检查与其他条目的碰撞，
    /// 手动编辑可能产生重复条目。
    pub async fn edit_entry(&mut self, index: usize, raw: &str) {
        let Some(current) = self.entries.get(index) else {
            return;
        };
        let Some(normalized) = normalize_proxy(raw) else {
            return;
        };
        if normalized == *current {
            return;
        }
        self.entries[index] = normalized;
        self.persist().await;
    }

    /// 移除单个条目，后续条目下标前移一位
    pub async fn remove_entry(&mut self, index: usize) {
        if index >= self.entries.len() {
            return;
        }
        self.entries.remove(index);
        self.persist().await;
    }

    /// 清空代理池
    pub async fn clear(&mut self) {
        self.entries.clear();
        self.persist().await;
    }

    /// 持久化当前列表
    ///
    /// 写入失败不向调用方传播，内存内的池对当前会话仍然正确
    async fn persist(&self) {
        if let Err(e) = self.store.save(&self.entries).await {
            warn!("Failed to persist proxy pool: {}", e);
        }
    }
}
