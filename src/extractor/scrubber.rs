//! 残留标记清理器
//! 清理类别内容中混入的方括号标记，并规范化标点

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{trace, warn};

use crate::compiler::CategoryRegistry;

// 通用中英对照标记：方括号内以 `/` 或 `|` 分隔的一对标签
static PAIR_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[[^/|\]]*[/|][^/|\]]*\]").unwrap()
});
// 通用标签标记：方括号内只有字母、空白、连接符与汉字
static LABEL_MARKER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\[[A-Za-z\s&+/|\x{4E00}-\x{9FFF}]*\]").unwrap()
});
static BRACKET_SPAN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[[^\]]*\]").unwrap()
});
static REPEATED_COMMA_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r",(?:\s*,)+").unwrap()
});
static LEADING_COMMA_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\s,]+").unwrap()
});
static TRAILING_COMMA_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s,]+$").unwrap()
});
static WHITESPACE_RUN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").unwrap()
});

/// 标记清理器
pub struct MarkerScrubber;

impl MarkerScrubber {
    /// 清理内容中的残留标记
    ///
    /// 1. 依次删除所有类别标题、英文类别标记、中文类别标记、通用中英对照标记与通用标签标记
    /// 2. 反复删除任意 `[...]` 片段直到长度不再变化（嵌套方括号）
    /// 3. 合并重复逗号、去掉首尾逗号与空白、合并连续空白
    ///
    /// 第1步的顺序会影响嵌套方括号的结果，不可调换。
    /// 注意第2步会连带删除正文里与类别无关的方括号内容。
    pub fn scrub(registry: &CategoryRegistry, content: &str) -> String {
        let categories = registry.definitions();
        let markers = categories
            .iter()
            .flat_map(|c| &c.header_patterns)
            .chain(categories.iter().flat_map(|c| &c.en_markers))
            .chain(categories.iter().flat_map(|c| &c.zh_markers));

        let mut cleaned = content.to_string();
        for matcher in markers {
            if let Cow::Owned(next) = matcher.remove_all(&cleaned) {
                trace!("清理标记命中：{}", matcher.describe());
                cleaned = next;
            }
        }
        cleaned = PAIR_MARKER_REGEX.replace_all(&cleaned, "").into_owned();
        cleaned = LABEL_MARKER_REGEX.replace_all(&cleaned, "").into_owned();

        let cleaned = Self::strip_brackets(cleaned);
        Self::normalize_punctuation(&cleaned)
    }

    /// 反复删除方括号片段直到不动点，迭代次数以输入长度为上限
    pub fn strip_brackets(mut text: String) -> String {
        let cap = text.len() + 1;
        let mut iterations = 0;

        loop {
            let prev_len = text.len();
            let next = BRACKET_SPAN_REGEX.replace_all(&text, "");
            if next.len() == prev_len {
                break;
            }
            text = next.into_owned();

            iterations += 1;
            if iterations >= cap {
                warn!("方括号清理达到迭代上限{}，提前结束", cap);
                break;
            }
        }

        text
    }

    /// 标点规范化
    pub fn normalize_punctuation(text: &str) -> String {
        let collapsed = REPEATED_COMMA_REGEX.replace_all(text, ",");
        let collapsed = LEADING_COMMA_REGEX.replace(&collapsed, "");
        let collapsed = TRAILING_COMMA_REGEX.replace(&collapsed, "");
        WHITESPACE_RUN_REGEX
            .replace_all(&collapsed, " ")
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::category_registry;

    fn scrub(text: &str) -> String {
        MarkerScrubber::scrub(category_registry(), text)
    }

    #[test]
    fn test_removes_nested_headers() {
        assert_eq!(
            scrub("anime style, [Rendering / 渲染技术], cute"),
            "anime style, cute"
        );
        assert_eq!(
            scrub("[Typography & Overlay / 文字与装饰] kanji overlay, [特效] sparks"),
            "kanji overlay, sparks"
        );
    }

    #[test]
    fn test_removes_generic_pair_marker() {
        assert_eq!(scrub("glow, [note / 备注], bloom"), "glow, bloom");
        assert_eq!(scrub("glow, [left|right], bloom"), "glow, bloom");
    }

    #[test]
    fn test_nested_brackets_reach_fixed_point() {
        let samples = [
            "a [[[x]]] b",
            "[[a][b]] c [d [e [f]]]",
            "[[[[[[[[[[deep]]]]]]]]]] tail",
            "]] [ unbalanced [ still ] ]",
            "[年份 2024] portrait",
        ];
        for sample in samples {
            let cleaned = scrub(sample);
            assert!(!BRACKET_SPAN_REGEX.is_match(&cleaned), "{:?} -> {:?}", sample, cleaned);
        }
        assert_eq!(scrub("a [[[x]]] b"), "a ] b");
    }

    #[test]
    fn test_short_chinese_stems_removed_in_first_pass() {
        assert_eq!(scrub("sparks, [主题氛围], glow"), "sparks, glow");
        assert_eq!(scrub("[光照效果说明] soft light"), "soft light");
        assert_eq!(scrub("mist [花边装饰 2] captions"), "mist captions");
    }

    #[test]
    fn test_inner_label_marker_removed_before_outer_span() {
        // 内层纯文字标记先被删除，外层方括号随后整体删除
        assert_eq!(scrub("a [1 [note] 2] b"), "a b");
        assert_eq!(scrub("glow [[x]] bloom"), "glow bloom");
    }

    #[test]
    fn test_legitimate_brackets_are_lost() {
        assert_eq!(scrub("portrait [1998], film grain"), "portrait , film grain");
    }

    #[test]
    fn test_normalize_punctuation() {
        assert_eq!(MarkerScrubber::normalize_punctuation(", , a,, b , ,c ,"), "a, b ,c");
        assert_eq!(MarkerScrubber::normalize_punctuation("  a   b\t c  "), "a b c");
        assert_eq!(MarkerScrubber::normalize_punctuation(" , ,, "), "");
    }

    #[test]
    fn test_strip_brackets_terminates_without_brackets() {
        assert_eq!(MarkerScrubber::strip_brackets("plain".to_string()), "plain");
        assert_eq!(MarkerScrubber::strip_brackets(String::new()), "");
    }
}
