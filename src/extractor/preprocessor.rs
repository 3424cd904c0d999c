//! 混合内容预处理
//! 上游文本有时把多个类别块直接拼在一行，这里把行内标题拆到独立行，保证分段时每行至多一个标题

use tracing::trace;

use crate::compiler::{CategoryRegistry, Matcher};

/// 混合内容预处理器
pub struct MixedContentPreprocessor;

impl MixedContentPreprocessor {
    /// 用每个类别的代表性标记把行内标题拆到独立行
    ///
    /// 标题原样保留，只在所在行还有其它非空白内容的一侧插入换行，
    /// 因此对已处理过的文本再次调用不会产生任何变化。
    pub fn preprocess(registry: &CategoryRegistry, text: &str) -> String {
        let mut processed = text.to_string();
        for category in registry.definitions() {
            processed = Self::hoist(&category.inline_marker, &processed);
        }
        processed
    }

    fn hoist(marker: &Matcher, text: &str) -> String {
        let spans = marker.spans(text);
        if spans.is_empty() {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len() + spans.len() * 2);
        let mut last = 0;
        for (start, end) in spans {
            out.push_str(&text[last..start]);
            if !Self::current_line_blank(&out) {
                out.push('\n');
            }
            out.push_str(&text[start..end]);
            if !Self::rest_of_line_blank(&text[end..]) {
                out.push('\n');
            }
            trace!("拆分行内标题：{}", &text[start..end]);
            last = end;
        }
        out.push_str(&text[last..]);
        out
    }

    /// 已输出内容的最后一行是否只有空白
    fn current_line_blank(out: &str) -> bool {
        out.rsplit('\n').next().map_or(true, |line| line.trim().is_empty())
    }

    /// 匹配之后到行尾是否只有空白
    fn rest_of_line_blank(rest: &str) -> bool {
        rest.split('\n').next().map_or(true, |line| line.trim().is_empty())
    }
}
