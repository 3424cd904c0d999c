//! 规则模块：类别定义表、翻译词典与数据模型
pub mod model;
pub mod category;
pub mod dictionary;

// 导出核心接口
pub use self::model::{
    CategoryKey, PromptContent, ParseResult, ValidationReport, DictionaryEntry
};
pub use self::category::{CategoryRule, LabelPair, CATEGORY_RULES, SAMPLE_PROMPT_TEXT};
pub use self::dictionary::DICTIONARY;
