//! 按行分段的类别分类器
//! 状态机：未进入类别 / 处于某类别；遇到标题行时把缓冲内容写入当前类别

use tracing::{debug, info, trace};

use super::scrubber::MarkerScrubber;
use crate::compiler::CategoryRegistry;
use crate::rule::{CategoryKey, ParseResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentState {
    NoCategory,
    InCategory(CategoryKey),
}

/// 分段器
pub struct Segmenter<'a> {
    registry: &'a CategoryRegistry,
    content_separator: &'a str,
    verbose: bool,
}

impl<'a> Segmenter<'a> {
    pub fn new(registry: &'a CategoryRegistry, content_separator: &'a str, verbose: bool) -> Self {
        Self {
            registry,
            content_separator,
            verbose,
        }
    }

    /// 对已预处理的文本分段，返回8个类别齐全的结果
    pub fn segment(&self, text: &str) -> ParseResult {
        let mut result = ParseResult::empty();
        let mut state = SegmentState::NoCategory;
        let mut buffer: Vec<&str> = Vec::new();

        for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
            if let Some(key) = self.registry.classify(line) {
                trace!("找到类别 {}：{}", key, line);
                if let SegmentState::InCategory(current) = state {
                    self.flush(&mut result, current, &mut buffer);
                }
                buffer.clear();
                state = SegmentState::InCategory(key);
            } else if let SegmentState::InCategory(_) = state {
                buffer.push(line);
            } else {
                trace!("标题前的内容被丢弃：{}", line);
            }
        }

        if let SegmentState::InCategory(current) = state {
            self.flush(&mut result, current, &mut buffer);
        }

        result
    }

    /// 拼接缓冲内容、清理残留标记后写入类别；清理后为空则保持默认值
    fn flush(&self, result: &mut ParseResult, key: CategoryKey, buffer: &mut Vec<&str>) {
        if buffer.is_empty() {
            return;
        }

        let joined = buffer.join(self.content_separator);
        buffer.clear();

        let content = MarkerScrubber::scrub(self.registry, &joined);
        if content.is_empty() {
            debug!("类别 {} 的内容清理后为空，跳过", key);
            return;
        }

        if self.verbose {
            info!("分配到 {}：{}", key, content);
        } else {
            debug!("分配到 {}：{}", key, content);
        }
        result[key].en = content;
    }
}
