//! 工具模块：校验、翻译与格式化
pub mod validator;
pub mod translator;
pub mod formatter;

pub use self::validator::PromptValidator;
pub use self::translator::PhraseTranslator;
pub use self::formatter::PromptFormatter;
