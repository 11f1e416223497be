// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::utils::errors::StoreError;

/// 代理存储接口
///
/// 代理列表在单一已知键下持久化为JSON字符串序列。
/// 读取是fail-open的：内容缺失或无法解析按空列表处理，
/// 绝不因此阻断使用。
#[async_trait]
pub trait ProxyStore: Send + Sync {
    /// 加载持久化的代理列表
    ///
    /// 存储缺失或内容损坏时返回空列表而非错误
    async fn load(&self) -> Vec<String>;

    /// 保存代理列表
    ///
    /// 写入失败由调用方决定是否容忍；代理池层记录日志后继续
    async fn save(&self, proxies: &[String]) -> Result<(), StoreError>;
}
