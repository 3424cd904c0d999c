//! 提示词数据模型定义
//! 仅存储数据，无任何业务逻辑，支持序列化/反序列化

use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PromptBoardError;

/// 类别标识（固定8个，顺序即类别表顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKey {
    BaseStyles,
    ArtisticStyles,
    Cinematic,
    LightingMood,
    ThemeStyles,
    Rendering,
    Effects,
    Typography,
}

impl CategoryKey {
    /// 类别总数
    pub const COUNT: usize = 8;

    /// 按类别表顺序排列的全部类别
    pub const ALL: [CategoryKey; Self::COUNT] = [
        CategoryKey::BaseStyles,
        CategoryKey::ArtisticStyles,
        CategoryKey::Cinematic,
        CategoryKey::LightingMood,
        CategoryKey::ThemeStyles,
        CategoryKey::Rendering,
        CategoryKey::Effects,
        CategoryKey::Typography,
    ];

    /// 在类别表中的位置
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryKey::BaseStyles => "base_styles",
            CategoryKey::ArtisticStyles => "artistic_styles",
            CategoryKey::Cinematic => "cinematic",
            CategoryKey::LightingMood => "lighting_mood",
            CategoryKey::ThemeStyles => "theme_styles",
            CategoryKey::Rendering => "rendering",
            CategoryKey::Effects => "effects",
            CategoryKey::Typography => "typography",
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKey {
    type Err = PromptBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CategoryKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PromptBoardError::UnknownCategory(s.to_string()))
    }
}

/// 单个类别的提示词内容（英文 + 中文）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptContent {
    #[serde(default)]
    pub en: String,
    #[serde(default)]
    pub zh: String,
}

impl PromptContent {
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: zh.into(),
        }
    }

    /// 英文内容去空白后是否非空
    pub fn has_content(&self) -> bool {
        !self.en.trim().is_empty()
    }
}

/// 解析结果：每个类别恰好一项，结构上保证8个键齐全
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    slots: [PromptContent; CategoryKey::COUNT],
}

impl ParseResult {
    /// 全部类别为空的结果
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, key: CategoryKey) -> &PromptContent {
        &self.slots[key.index()]
    }

    pub fn get_mut(&mut self, key: CategoryKey) -> &mut PromptContent {
        &mut self.slots[key.index()]
    }

    /// 按类别表顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (CategoryKey, &PromptContent)> {
        CategoryKey::ALL.into_iter().zip(self.slots.iter())
    }

    /// 是否所有类别都没有英文内容
    pub fn is_blank(&self) -> bool {
        self.slots.iter().all(|content| !content.has_content())
    }
}

impl Index<CategoryKey> for ParseResult {
    type Output = PromptContent;

    fn index(&self, key: CategoryKey) -> &Self::Output {
        self.get(key)
    }
}

impl IndexMut<CategoryKey> for ParseResult {
    fn index_mut(&mut self, key: CategoryKey) -> &mut Self::Output {
        self.get_mut(key)
    }
}

// ======== 序列化为以类别标识为键的对象（保持类别表顺序） ========
impl Serialize for ParseResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CategoryKey::COUNT))?;
        for (key, content) in self.iter() {
            map.serialize_entry(&key, content)?;
        }
        map.end()
    }
}

// ======== 反序列化：缺失的类别补空，未知类别报错 ========
impl<'de> Deserialize<'de> for ParseResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = HashMap::<CategoryKey, PromptContent>::deserialize(deserializer)?;
        let mut result = ParseResult::empty();
        for (key, content) in entries {
            result[key] = content;
        }
        Ok(result)
    }
}

/// 校验报告（只读，不修改输入）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub is_empty: bool,
    pub has_content: bool,
    pub missing_categories: Vec<CategoryKey>,
}

/// 词典条目（英文词组 -> 中文）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub term: &'static str,
    pub translation: &'static str,
}
