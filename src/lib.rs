//! promptboard - 中英双语绘图提示词分类提取与词典翻译引擎

// 导出全局错误类型
pub use self::error::{PromptBoardError, PbResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出规则模块核心接口
pub use self::rule::{
    CategoryKey, PromptContent, ParseResult, ValidationReport, DictionaryEntry,
    CategoryRule, LabelPair, CATEGORY_RULES, DICTIONARY, SAMPLE_PROMPT_TEXT
};

// 导出编译模块核心接口
pub use self::compiler::{
    Matcher, CompiledCategory, CategoryRegistry, CompiledDictionary, RuleCompiler,
    category_registry, translation_dictionary
};

// 导出提取模块核心接口
pub use self::extractor::{MixedContentPreprocessor, Segmenter, MarkerScrubber};

// 导出工具模块核心接口
pub use self::utils::{PromptValidator, PhraseTranslator, PromptFormatter};

// 导出面板模块核心接口（含全局实例的简化接口）
pub use self::board::{
    PromptBoard,
    init_prompt_board,
    init_prompt_board_with_config,
    global_board,
    parse_prompt_text,
    preprocess_mixed_content,
    clean_nested_categories,
    validate_prompts,
    translate_prompt_text,
    translate_all_prompts,
    format_prompts,
    get_sample_text,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod compiler;
pub mod extractor;
pub mod utils;
pub mod board;
