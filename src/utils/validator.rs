//! 解析结果校验
//! 只检查结构完整性（各类别是否有英文内容），结果仅供调用方决定是否需要用户确认

use tracing::debug;

use crate::rule::{ParseResult, ValidationReport};

/// 提示词校验器
pub struct PromptValidator;

impl PromptValidator {
    /// 校验解析结果，不修改输入
    pub fn validate(result: &ParseResult) -> ValidationReport {
        let mut total_content_len = 0;
        let mut missing_categories = Vec::new();

        for (key, content) in result.iter() {
            let trimmed = content.en.trim();
            if trimmed.is_empty() {
                missing_categories.push(key);
            } else {
                total_content_len += trimmed.chars().count();
            }
        }

        let report = if total_content_len == 0 {
            ValidationReport {
                is_valid: false,
                is_empty: true,
                has_content: false,
                missing_categories: Vec::new(),
            }
        } else {
            ValidationReport {
                is_valid: missing_categories.is_empty(),
                is_empty: false,
                has_content: true,
                missing_categories,
            }
        };

        debug!(
            "提示词校验结果：内容长度{}，缺失{}个类别，is_valid={}",
            total_content_len,
            report.missing_categories.len(),
            report.is_valid
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{CategoryKey, PromptContent};

    #[test]
    fn test_empty_result() {
        let report = PromptValidator::validate(&ParseResult::empty());
        assert!(report.is_empty);
        assert!(!report.is_valid);
        assert!(!report.has_content);
        assert!(report.missing_categories.is_empty());
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut result = ParseResult::empty();
        result[CategoryKey::Effects] = PromptContent::new("   ", "火花");
        let report = PromptValidator::validate(&result);
        assert!(report.is_empty);
        assert!(!report.is_valid);
    }

    #[test]
    fn test_partial_result_lists_missing_in_order() {
        let mut result = ParseResult::empty();
        result[CategoryKey::Typography].en = "kanji overlay".to_string();
        result[CategoryKey::BaseStyles].en = "anime style".to_string();

        let report = PromptValidator::validate(&result);
        assert!(!report.is_valid);
        assert!(!report.is_empty);
        assert!(report.has_content);
        assert_eq!(
            report.missing_categories,
            vec![
                CategoryKey::ArtisticStyles,
                CategoryKey::Cinematic,
                CategoryKey::LightingMood,
                CategoryKey::ThemeStyles,
                CategoryKey::Rendering,
                CategoryKey::Effects,
            ]
        );
    }

    #[test]
    fn test_complete_result_is_valid() {
        let mut result = ParseResult::empty();
        for key in CategoryKey::ALL {
            result[key].en = format!("{} content", key);
        }
        let before = result.clone();

        let report = PromptValidator::validate(&result);
        assert!(report.is_valid);
        assert!(report.has_content);
        assert!(report.missing_categories.is_empty());
        assert_eq!(result, before);
    }
}
