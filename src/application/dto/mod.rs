// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义与抓取服务交互的请求对象：
/// - 抓取请求（scrape_request）：一次抓取提交的不可变快照
/// - 列表查询（list_query）：职位分页查询的两种调用形式
pub mod list_query;
pub mod scrape_request;
