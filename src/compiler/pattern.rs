//! 编译后模式模型
//! 匹配技术被封装在 `Matcher` 后面，分段器、清理器与翻译器只依赖"匹配/提取"接口

use std::borrow::Cow;
use regex::Regex;

use crate::rule::{CategoryKey, CategoryRule, DictionaryEntry};

#[derive(Debug, Clone)]
pub enum Matcher {
    Literal(String), // 字面量匹配（区分大小写，由调用方统一大小写）
    Regex(Regex), // 正则匹配
}

impl Matcher {
    /// 简单匹配判断
    pub fn is_match(&self, input: &str) -> bool {
        match self {
            Matcher::Literal(s) => !s.is_empty() && input.contains(s.as_str()),
            Matcher::Regex(regex) => regex.is_match(input),
        }
    }

    /// 从 `start` 开始查找下一个匹配，返回字节区间
    pub fn find_at(&self, input: &str, start: usize) -> Option<(usize, usize)> {
        if start > input.len() {
            return None;
        }
        match self {
            Matcher::Literal(s) => {
                if s.is_empty() {
                    return None;
                }
                input
                    .get(start..)?
                    .find(s.as_str())
                    .map(|offset| (start + offset, start + offset + s.len()))
            }
            Matcher::Regex(regex) => regex.find_at(input, start).map(|m| (m.start(), m.end())),
        }
    }

    /// 全部不重叠匹配区间（从左到右）
    pub fn spans(&self, input: &str) -> Vec<(usize, usize)> {
        match self {
            Matcher::Literal(s) => {
                if s.is_empty() {
                    return Vec::new();
                }
                input
                    .match_indices(s.as_str())
                    .map(|(pos, m)| (pos, pos + m.len()))
                    .collect()
            }
            Matcher::Regex(regex) => regex.find_iter(input).map(|m| (m.start(), m.end())).collect(),
        }
    }

    /// 删除全部匹配
    pub fn remove_all<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self {
            Matcher::Literal(s) => {
                if s.is_empty() || !input.contains(s.as_str()) {
                    Cow::Borrowed(input)
                } else {
                    Cow::Owned(input.replace(s.as_str(), ""))
                }
            }
            Matcher::Regex(regex) => regex.replace_all(input, ""),
        }
    }

    /// 规则描述
    pub fn describe(&self) -> &str {
        match self {
            Matcher::Literal(s) => s.as_str(),
            Matcher::Regex(r) => r.as_str(),
        }
    }
}

/// 编译后的类别
#[derive(Debug, Clone)]
pub struct CompiledCategory {
    pub key: CategoryKey,
    pub rule: &'static CategoryRule,
    /// 完整标题匹配器（每组标签两种顺序）
    pub header_patterns: Vec<Matcher>,
    /// 代表性标题匹配器（预处理拆行用）
    pub inline_marker: Matcher,
    /// 英文残留标记匹配器（清理用）
    pub en_markers: Vec<Matcher>,
    /// 中文残留标记匹配器（清理用）
    pub zh_markers: Vec<Matcher>,
}

impl CompiledCategory {
    /// 行内是否出现本类别标题
    pub fn is_header(&self, line: &str) -> bool {
        self.header_patterns.iter().any(|m| m.is_match(line))
    }
}

/// 编译后的类别表
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
    pub categories: Vec<CompiledCategory>,
}

impl CategoryRegistry {
    /// 按优先级排列的类别定义
    pub fn definitions(&self) -> &[CompiledCategory] {
        &self.categories
    }

    /// 识别标题行：多个类别同时匹配时取类别表中靠前者
    pub fn classify(&self, line: &str) -> Option<CategoryKey> {
        self.categories
            .iter()
            .find(|category| category.is_header(line))
            .map(|category| category.key)
    }
}

/// 编译后的词条
#[derive(Debug, Clone)]
pub struct CompiledTerm {
    pub entry: DictionaryEntry,
    pub matcher: Matcher,
    pub char_len: usize,
}

/// 编译后的词典（已按词条长度降序排列）
#[derive(Debug, Clone)]
pub struct CompiledDictionary {
    pub terms: Vec<CompiledTerm>,
}

impl CompiledDictionary {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
