//! 规则编译器核心
//! 仅负责将静态类别表与词典编译为可执行的匹配器

use std::collections::HashSet;
use std::time::Instant;
use regex::Regex;
use once_cell::sync::Lazy;
use tracing::debug;

use super::pattern::{
    CategoryRegistry, CompiledCategory, CompiledDictionary, CompiledTerm, Matcher,
};
use crate::rule::{CategoryKey, CategoryRule, DictionaryEntry, LabelPair, CATEGORY_RULES, DICTIONARY};
use crate::error::{PbResult, PromptBoardError};

static COMPILED_REGISTRY: Lazy<CategoryRegistry> = Lazy::new(|| {
    RuleCompiler::compile_registry(&CATEGORY_RULES).unwrap_or_else(|e| {
        panic!("内置类别表编译失败：{}", e);
    })
});

static COMPILED_DICTIONARY: Lazy<CompiledDictionary> = Lazy::new(|| {
    RuleCompiler::compile_dictionary(DICTIONARY).unwrap_or_else(|e| {
        panic!("内置词典编译失败：{}", e);
    })
});

/// 全局类别表（首次访问时编译，此后只读）
pub fn category_registry() -> &'static CategoryRegistry {
    &COMPILED_REGISTRY
}

/// 全局翻译词典（首次访问时编译，此后只读）
pub fn translation_dictionary() -> &'static CompiledDictionary {
    &COMPILED_DICTIONARY
}

/// 规则编译器
pub struct RuleCompiler;

impl RuleCompiler {
    /// 编译类别表，类别顺序必须与 `CategoryKey::ALL` 一致
    pub fn compile_registry(rules: &'static [CategoryRule]) -> PbResult<CategoryRegistry> {
        let start = Instant::now();
        let mut stats = CompileStats::default();

        if rules.len() != CategoryKey::COUNT {
            return Err(PromptBoardError::RuleDefinitionError(format!(
                "类别数量应为{}，实际为{}",
                CategoryKey::COUNT,
                rules.len()
            )));
        }

        let mut categories = Vec::with_capacity(rules.len());
        for (rule, expected) in rules.iter().zip(CategoryKey::ALL) {
            if rule.key != expected {
                return Err(PromptBoardError::RuleDefinitionError(format!(
                    "类别顺序错误：期望{}，实际为{}",
                    expected, rule.key
                )));
            }
            categories.push(Self::compile_category(rule, &mut stats)?);
        }

        debug!("✅ 类别表编译完成，总耗时{:?}", start.elapsed());
        debug!(
            "📊 编译统计：标题模式{}条、行内标记{}条、清理标记{}条",
            stats.header_count, stats.inline_count, stats.scrub_count
        );

        Ok(CategoryRegistry { categories })
    }

    /// 编译单个类别
    fn compile_category(
        rule: &'static CategoryRule,
        stats: &mut CompileStats,
    ) -> PbResult<CompiledCategory> {
        if rule.labels.is_empty() {
            return Err(PromptBoardError::RuleDefinitionError(format!(
                "类别{}缺少标签定义",
                rule.key
            )));
        }

        let mut header_patterns = Vec::with_capacity(rule.labels.len() * 2);
        for pair in rule.labels {
            for source in Self::header_sources(pair) {
                header_patterns.push(Self::compile_regex(&source)?);
                stats.header_count += 1;
            }
        }

        let inline_marker = Self::compile_regex(&Self::inline_marker_source(rule))?;
        stats.inline_count += 1;

        let en_markers = rule
            .en_markers
            .iter()
            .map(|fragment| Self::compile_regex(&Self::en_marker_source(fragment)))
            .collect::<PbResult<Vec<_>>>()?;
        let zh_markers = rule
            .zh_markers
            .iter()
            .map(|fragment| Self::compile_regex(&Self::zh_marker_source(fragment)))
            .collect::<PbResult<Vec<_>>>()?;
        stats.scrub_count += en_markers.len() + zh_markers.len();

        Ok(CompiledCategory {
            key: rule.key,
            rule,
            header_patterns,
            inline_marker,
            en_markers,
            zh_markers,
        })
    }

    /// 标签组合生成的两种标题顺序：`[英 / 中]` 与 `[中 / 英]`
    /// 分隔符可为 `/`、`|` 或仅空白，英文部分忽略大小写
    pub fn header_sources(pair: &LabelPair) -> [String; 2] {
        [
            format!(r"(?i)\[\s*(?:{})\s*[/|]?\s*(?:{})\s*\]", pair.en, pair.zh),
            format!(r"(?i)\[\s*(?:{})\s*[/|]?\s*(?:{})\s*\]", pair.zh, pair.en),
        ]
    }

    /// 代表性行内标记：以类别词干开头的方括号，不跨行、不嵌套
    pub fn inline_marker_source(rule: &CategoryRule) -> String {
        format!(
            r"(?i)\[\s*(?:{}|{})[^\[\]\n]*\]",
            rule.en_stem, rule.zh_stem
        )
    }

    /// 英文清理标记：`[` 后紧跟英文片段，直到下一个 `]`
    pub fn en_marker_source(fragment: &str) -> String {
        format!(r"(?i)\[(?:{})\s*[/|]?\s*[^\]]*\]", fragment)
    }

    /// 中文清理标记：方括号内任意位置出现中文片段
    pub fn zh_marker_source(fragment: &str) -> String {
        format!(r"\[[^\]]*(?:{})[^\]]*\]", fragment)
    }

    /// 编译词典：校验词条后按字符长度降序排列（稳定排序，同长度保持声明顺序）
    pub fn compile_dictionary(entries: &'static [DictionaryEntry]) -> PbResult<CompiledDictionary> {
        let start = Instant::now();
        let mut seen = HashSet::with_capacity(entries.len());
        let mut terms = Vec::with_capacity(entries.len());

        for entry in entries {
            let term = entry.term;
            if term.trim().is_empty() || term.trim() != term {
                return Err(PromptBoardError::RuleDefinitionError(format!(
                    "词条格式无效：{:?}",
                    term
                )));
            }
            if term != term.to_lowercase() {
                return Err(PromptBoardError::RuleDefinitionError(format!(
                    "词条必须为小写：{}",
                    term
                )));
            }
            if !seen.insert(term) {
                return Err(PromptBoardError::RuleDefinitionError(format!(
                    "重复词条：{}",
                    term
                )));
            }

            terms.push(CompiledTerm {
                entry: *entry,
                matcher: Matcher::Literal(term.to_string()),
                char_len: term.chars().count(),
            });
        }

        terms.sort_by(|a, b| b.char_len.cmp(&a.char_len));

        debug!("✅ 词典编译完成，词条{}条，耗时{:?}", terms.len(), start.elapsed());

        Ok(CompiledDictionary { terms })
    }

    fn compile_regex(source: &str) -> PbResult<Matcher> {
        Ok(Matcher::Regex(Regex::new(source)?))
    }
}

/// 编译统计信息
#[derive(Debug, Clone, Default)]
struct CompileStats {
    header_count: usize,
    inline_count: usize,
    scrub_count: usize,
}
