// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;

/// 已识别的代理scheme匹配器，大小写不敏感
static SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(https?|socks[45])://").expect("valid scheme regex"));

/// 分隔符匹配器：换行、逗号、分号
static SEPARATOR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\n,;]+").expect("valid separator regex"));

/// 规范化单个代理地址
///
/// 去除首尾空白；空输入返回None；已带有识别scheme
/// （http/https/socks4/socks5）的输入原样返回，否则补上`http://`前缀。
///
/// 规范化后以字符串相等作为去重依据，不做host/port语义归一化。
pub fn normalize_proxy(raw: &str) -> Option<String> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if SCHEME_RE.is_match(s) {
        Some(s.to_string())
    } else {
        Some(format!("http://{}", s))
    }
}

/// 解析批量粘贴的代理文本
///
/// 先按换行、逗号、分号切分，再将每段按空白进一步切分，
/// 逐个规范化并丢弃空结果。输出保持首次出现顺序，
/// 不在此处对现有代理池去重，去重在合并时进行。
pub fn parse_proxy_text(text: &str) -> Vec<String> {
    SEPARATOR_RE
        .split(text)
        .flat_map(|chunk| chunk.split_whitespace())
        .filter_map(normalize_proxy)
        .collect()
}
