//! 提示词面板核心：整合预处理、分段、清理、校验与翻译
use tracing::debug;

use crate::compiler::{category_registry, translation_dictionary, CategoryRegistry, CompiledCategory, CompiledDictionary};
use crate::config::{ConfigManager, GlobalConfig};
use crate::extractor::{MarkerScrubber, MixedContentPreprocessor, Segmenter};
use crate::rule::{CategoryKey, ParseResult, ValidationReport, SAMPLE_PROMPT_TEXT};
use crate::utils::{PhraseTranslator, PromptFormatter, PromptValidator};

/// 提示词面板
///
/// 类别表与词典为进程级只读数据，实例本身只持有配置，可在多线程间共享。
#[derive(Debug, Clone)]
pub struct PromptBoard {
    config: GlobalConfig,
    registry: &'static CategoryRegistry,
    dictionary: &'static CompiledDictionary,
}

impl Default for PromptBoard {
    fn default() -> Self {
        Self::new(ConfigManager::get_default())
    }
}

impl PromptBoard {
    /// 创建面板（首次调用时编译内置类别表与词典）
    pub fn new(config: GlobalConfig) -> Self {
        Self {
            config,
            registry: category_registry(),
            dictionary: translation_dictionary(),
        }
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// 按优先级排列的类别定义
    pub fn definitions(&self) -> &[CompiledCategory] {
        self.registry.definitions()
    }

    /// 解析提示词文本，结果总是包含全部8个类别，中文部分为空
    pub fn parse(&self, text: &str) -> ParseResult {
        debug!("解析原始文本，长度{}", text.len());

        let result = if self.config.hoist_inline_headers {
            let processed = self.preprocess(text);
            self.segmenter().segment(&processed)
        } else {
            self.segmenter().segment(text)
        };

        debug!(
            "解析完成，有内容的类别{}个",
            result.iter().filter(|(_, content)| content.has_content()).count()
        );
        result
    }

    /// 把行内标题拆到独立行
    pub fn preprocess(&self, text: &str) -> String {
        MixedContentPreprocessor::preprocess(self.registry, text)
    }

    /// 清理内容中的残留标记
    pub fn scrub(&self, content: &str) -> String {
        MarkerScrubber::scrub(self.registry, content)
    }

    /// 校验解析结果
    pub fn validate(&self, result: &ParseResult) -> ValidationReport {
        PromptValidator::validate(result)
    }

    /// 翻译英文提示词
    pub fn translate(&self, text: &str) -> String {
        self.translator().translate(text)
    }

    /// 为每个有英文内容的类别生成中文；英文为空的类别保留原有中文
    pub fn translate_all(&self, result: &ParseResult) -> ParseResult {
        let translator = self.translator();
        let mut translated = result.clone();
        for key in CategoryKey::ALL {
            let content = &mut translated[key];
            if content.has_content() {
                content.zh = translator.translate(&content.en);
            }
        }
        translated
    }

    /// 将解析结果还原为带标题的文本
    pub fn format(&self, result: &ParseResult) -> String {
        PromptFormatter::format(self.registry, result)
    }

    /// 示例提示词
    pub fn sample_text(&self) -> &'static str {
        SAMPLE_PROMPT_TEXT
    }

    fn segmenter(&self) -> Segmenter<'_> {
        Segmenter::new(self.registry, &self.config.content_separator, self.config.verbose)
    }

    fn translator(&self) -> PhraseTranslator<'_> {
        PhraseTranslator::new(self.dictionary, &self.config.zh_separator)
    }
}

// 对外暴露的简化接口（使用全局面板）
pub fn parse_prompt_text(text: &str) -> ParseResult {
    super::global::global_board().parse(text)
}

pub fn preprocess_mixed_content(text: &str) -> String {
    super::global::global_board().preprocess(text)
}

pub fn clean_nested_categories(content: &str) -> String {
    super::global::global_board().scrub(content)
}

pub fn validate_prompts(result: &ParseResult) -> ValidationReport {
    super::global::global_board().validate(result)
}

pub fn translate_prompt_text(text: &str) -> String {
    super::global::global_board().translate(text)
}

pub fn translate_all_prompts(result: &ParseResult) -> ParseResult {
    super::global::global_board().translate_all(result)
}

pub fn format_prompts(result: &ParseResult) -> String {
    super::global::global_board().format(result)
}

pub fn get_sample_text() -> &'static str {
    SAMPLE_PROMPT_TEXT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::PromptContent;

    #[test]
    fn test_parse_hoists_inline_headers() {
        let board = PromptBoard::default();
        let result = board.parse("[Rendering / 渲染技术] 8k resolution [Effects / 特效元素] sparks, bokeh");
        assert_eq!(result[CategoryKey::Rendering].en, "8k resolution");
        assert_eq!(result[CategoryKey::Effects].en, "sparks, bokeh");
    }

    #[test]
    fn test_parse_without_hoisting() {
        let config = ConfigManager::custom().hoist_inline_headers(false).build();
        let board = PromptBoard::new(config);
        let result = board.parse("[Rendering / 渲染技术] 8k resolution [Effects / 特效元素] sparks");
        // 整行被识别为渲染技术标题，行内内容随标题一起丢弃
        assert_eq!(result, ParseResult::empty());
    }

    #[test]
    fn test_translate_all_fills_zh() {
        let board = PromptBoard::default();
        let mut result = ParseResult::empty();
        result[CategoryKey::Effects].en = "floating cherry blossoms, bokeh".to_string();
        result[CategoryKey::Typography] = PromptContent::new("", "手写字幕");

        let translated = board.translate_all(&result);
        assert_eq!(translated[CategoryKey::Effects].zh, "漂浮的 樱花，散景");
        assert_eq!(translated[CategoryKey::Effects].en, "floating cherry blossoms, bokeh");
        assert_eq!(translated[CategoryKey::Typography].zh, "手写字幕");
        assert_eq!(translated[CategoryKey::BaseStyles], PromptContent::default());
        assert!(result[CategoryKey::Effects].zh.is_empty());
    }

    #[test]
    fn test_format_then_parse_round_trip() {
        let board = PromptBoard::default();
        let parsed = board.parse(board.sample_text());
        let reparsed = board.parse(&board.format(&parsed));
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn test_definitions_exposed_in_order() {
        let board = PromptBoard::default();
        let names: Vec<&str> = board.definitions().iter().map(|c| c.rule.zh_name).collect();
        assert_eq!(names[0], "基础风格");
        assert_eq!(names[7], "文字与装饰");
    }
}
