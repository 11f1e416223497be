// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 职位库聚合统计
///
/// 统计接口的返回形式，用于填充过滤选项列表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStats {
    /// 职位总数
    pub total_jobs: u64,
    /// 按站点分组的数量
    pub by_site: HashMap<String, u64>,
    /// 按国家分组的数量
    pub by_country: HashMap<String, u64>,
    /// 远程职位数量
    pub remote_count: u64,
    /// 带薪资信息的职位数量
    pub with_salary_count: u64,
    /// 会话总数
    pub total_sessions: u64,
}
