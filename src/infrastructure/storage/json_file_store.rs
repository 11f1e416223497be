// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::repositories::proxy_store::ProxyStore;
use crate::utils::errors::StoreError;

/// JSON文件代理存储
///
/// 代理列表以JSON字符串数组的形式存放在单个已知文件中。
/// 读取是fail-open的：文件缺失或内容损坏都按空列表处理。
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// 创建新的文件存储实例
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProxyStore for JsonFileStore {
    async fn load(&self) -> Vec<String> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                debug!("Proxy store {} not readable: {}", self.path.display(), e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(proxies) => proxies,
            Err(e) => {
                debug!("Proxy store {} not parseable: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    async fn save(&self, proxies: &[String]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(proxies)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}
