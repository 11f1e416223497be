// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 职位记录实体
///
/// 表示抓取服务存储的一条职位记录。字段与服务端返回的
/// 记录一一对应，日期等展示性字段保持服务端给出的字符串形式。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// 记录唯一标识符
    pub id: String,
    /// 来源站点
    pub site: String,
    /// 职位列表页URL
    pub job_url: String,
    /// 职位直达URL
    pub job_url_direct: Option<String>,
    /// 职位标题
    pub title: String,
    /// 公司名称
    pub company: String,
    /// 工作地点
    pub location: Option<String>,
    /// 发布日期
    pub date_posted: Option<String>,
    /// 职位类型
    pub job_type: Option<String>,
    /// 薪资来源
    pub salary_source: Option<String>,
    /// 薪资周期
    pub interval: Option<String>,
    /// 最低薪资
    pub min_amount: Option<f64>,
    /// 最高薪资
    pub max_amount: Option<f64>,
    /// 薪资币种
    pub currency: Option<String>,
    /// 是否远程职位
    pub is_remote: Option<bool>,
    /// 职级
    pub job_level: Option<String>,
    /// 职能
    pub job_function: Option<String>,
    /// 发布类型
    pub listing_type: Option<String>,
    /// 联系邮箱
    pub emails: Option<String>,
    /// 职位描述
    pub description: Option<String>,
    /// 公司行业
    pub company_industry: Option<String>,
    /// 公司主页URL
    pub company_url: Option<String>,
    /// 公司Logo
    pub company_logo: Option<String>,
    /// 公司直达URL
    pub company_url_direct: Option<String>,
    /// 公司地址
    pub company_addresses: Option<String>,
    /// 公司规模
    pub company_num_employees: Option<String>,
    /// 公司营收
    pub company_revenue: Option<String>,
    /// 公司简介
    pub company_description: Option<String>,
    /// 抓取时间
    pub scraped_at: Option<String>,
    /// 所属抓取会话标识符
    pub scrape_session_id: Option<String>,
}

/// 职位分页结果
///
/// 列表接口的返回形式，携带总数和总页数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPage {
    /// 当前页的职位记录
    pub jobs: Vec<Job>,
    /// 过滤条件下的总记录数
    pub total: u64,
    /// 当前页码，从1开始
    pub page: u32,
    /// 分页大小
    pub per_page: u32,
    /// 总页数，至少为1
    pub pages: u32,
}
