//! 将解析结果还原为带标题的提示词文本

use crate::compiler::CategoryRegistry;
use crate::rule::ParseResult;

/// 提示词格式化工具
pub struct PromptFormatter;

impl PromptFormatter {
    /// 按类别表顺序输出有英文内容的类别：标准标题一行、内容一行，类别之间空一行
    pub fn format(registry: &CategoryRegistry, result: &ParseResult) -> String {
        registry
            .definitions()
            .iter()
            .filter_map(|category| {
                let content = result[category.key].en.trim();
                if content.is_empty() {
                    None
                } else {
                    Some(format!("{}\n{}", category.rule.header(), content))
                }
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
