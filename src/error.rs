//! 全局错误类型定义
//! 提示词解析/翻译本身不会失败，这里只覆盖规则编译、序列化与全局实例初始化错误

use thiserror::Error;
use regex::Error as RegexError;
use serde_json::Error as SerdeJsonError;

#[derive(Error, Debug)]
pub enum PromptBoardError {
    // 规则相关错误
    #[error("未知类别：{0}")]
    UnknownCategory(String),
    #[error("规则定义无效：{0}")]
    RuleDefinitionError(String),

    // 编译相关错误
    #[error("正则编译失败：{0}")]
    RegexCompileError(#[from] RegexError),

    // 全局实例相关错误
    #[error("全局解析器已初始化")]
    AlreadyInitialized,

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
}

// 全局Result类型
pub type PbResult<T> = Result<T, PromptBoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_display() {
        let error = PromptBoardError::UnknownCategory("weather".to_string());
        assert_eq!(error.to_string(), "未知类别：weather");
    }

    #[test]
    fn test_already_initialized_display() {
        assert_eq!(PromptBoardError::AlreadyInitialized.to_string(), "全局解析器已初始化");
    }

    #[test]
    fn test_from_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: PromptBoardError = json_error.into();
        assert!(matches!(error, PromptBoardError::JsonError(_)));
    }

    #[test]
    fn test_from_regex_error() {
        let regex_error = regex::Regex::new(r"\[(").unwrap_err();
        let error: PromptBoardError = regex_error.into();
        assert!(error.to_string().starts_with("正则编译失败"));
    }
}
