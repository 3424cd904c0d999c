//! 全局配置管理,存储所有可配置项

/// 全局配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalConfig {
    // 同一类别多行内容的拼接分隔符
    pub content_separator: String,
    // 翻译结果的片段分隔符（全角逗号）
    pub zh_separator: String,
    // 是否将行内的类别标题拆分到独立行
    pub hoist_inline_headers: bool,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            content_separator: ", ".to_string(),
            zh_separator: "，".to_string(),
            hoist_inline_headers: true,
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn content_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.content_separator = separator.into();
        self
    }

    pub fn zh_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.zh_separator = separator.into();
        self
    }

    pub fn hoist_inline_headers(mut self, enabled: bool) -> Self {
        self.config.hoist_inline_headers = enabled;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigManager::get_default();
        assert_eq!(config.content_separator, ", ");
        assert_eq!(config.zh_separator, "，");
        assert!(config.hoist_inline_headers);
        assert!(!config.verbose);
    }

    #[test]
    fn test_custom_builder() {
        let config = ConfigManager::custom()
            .content_separator("; ")
            .zh_separator("、")
            .hoist_inline_headers(false)
            .verbose(true)
            .build();

        assert_eq!(config.content_separator, "; ");
        assert_eq!(config.zh_separator, "、");
        assert!(!config.hoist_inline_headers);
        assert!(config.verbose);
    }
}
