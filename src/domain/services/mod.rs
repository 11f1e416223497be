// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含系统的核心业务逻辑：
/// - 代理池（proxy_pool）：去重有序的代理列表管理和持久化
/// - 会话控制器（session_controller）：抓取会话的状态机与轮询
pub mod proxy_pool;
pub mod session_controller;
