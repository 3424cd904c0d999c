//! 8大类别定义表
//! 类别顺序即标题冲突时的优先级，编译器按此顺序生成匹配器

use super::model::CategoryKey;

/// 一组中英文标签（正则片段），编译时生成"英/中"与"中/英"两种标题顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelPair {
    pub en: &'static str,
    pub zh: &'static str,
}

/// 类别规则定义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    pub key: CategoryKey,
    /// 展示名称
    pub name: &'static str,
    pub zh_name: &'static str,
    /// 规范英文标签，用于生成标准标题
    pub en_label: &'static str,
    /// 英文词干（预处理与清理使用的代表性片段）
    pub en_stem: &'static str,
    /// 中文词干
    pub zh_stem: &'static str,
    /// 标题识别用的标签组合
    pub labels: &'static [LabelPair],
    /// 清理用英文标记片段（方括号开头紧跟该片段）
    pub en_markers: &'static [&'static str],
    /// 清理用中文标记片段（方括号内任意位置出现该片段）
    pub zh_markers: &'static [&'static str],
}

impl CategoryRule {
    /// 标准标题，例如 `[Base Styles / 基础风格]`
    pub fn header(&self) -> String {
        format!("[{} / {}]", self.en_label, self.zh_name)
    }
}

pub static CATEGORY_RULES: [CategoryRule; CategoryKey::COUNT] = [
    CategoryRule {
        key: CategoryKey::BaseStyles,
        name: "🎨 基础风格 (Base Styles)",
        zh_name: "基础风格",
        en_label: "Base Styles",
        en_stem: r"Base\s+Styles?",
        zh_stem: "基础风格",
        labels: &[LabelPair { en: r"Base\s+Styles?", zh: "基础风格?" }],
        en_markers: &[r"Base\s+Styles?"],
        zh_markers: &["基础风格"],
    },
    CategoryRule {
        key: CategoryKey::ArtisticStyles,
        name: "🖌️ 艺术风格 (Artistic Styles)",
        zh_name: "艺术风格",
        en_label: "Artistic Styles",
        en_stem: r"Art(?:istic)?\s+Styles?",
        zh_stem: "艺术风格|画风表现",
        labels: &[LabelPair { en: r"Art(?:istic)?\s+Styles?", zh: "(?:艺术风格|画风表现)" }],
        en_markers: &[r"Art(?:istic)?\s+Styles?"],
        zh_markers: &["艺术风格", "画风表现"],
    },
    CategoryRule {
        key: CategoryKey::Cinematic,
        name: "🎬 镜头语言 (Cinematic)",
        zh_name: "镜头语言",
        en_label: "Cinematic",
        en_stem: r"Cinemat(?:ic|ography?)",
        zh_stem: "镜头语言|摄影感",
        labels: &[
            LabelPair { en: "Cinematography?", zh: "镜头语言?" },
            LabelPair { en: "Cinematography?", zh: "摄影感?" },
            LabelPair { en: "Cinematic", zh: "镜头语言?" },
            LabelPair { en: "Cinematic", zh: "摄影感?" },
        ],
        en_markers: &["Cinematic(?:ography)?"],
        zh_markers: &["镜头语言", "摄影感"],
    },
    CategoryRule {
        key: CategoryKey::LightingMood,
        name: "💡 光影氛围 (Lighting & Mood)",
        zh_name: "光影氛围",
        en_label: "Lighting & Mood",
        en_stem: r"Lighting\s*[&+]?\s*Mood",
        zh_stem: "光影氛围",
        labels: &[LabelPair { en: r"Lighting\s*(?:&|\+)?\s*Mood", zh: "光影氛围?" }],
        en_markers: &[r"Lighting\s*(?:&|\+|\s)?\s*Mood"],
        zh_markers: &["光影氛围", "光照效果"],
    },
    CategoryRule {
        key: CategoryKey::ThemeStyles,
        name: "🌟 主题风格 (Theme Styles)",
        zh_name: "主题风格",
        en_label: "Theme Styles",
        en_stem: r"Theme\s+Styles?",
        zh_stem: "主题风格",
        labels: &[LabelPair { en: r"Theme\s+Styles?", zh: "主题风格?" }],
        en_markers: &[r"Theme\s+Styles?"],
        zh_markers: &["主题风格", "主题"],
    },
    CategoryRule {
        key: CategoryKey::Rendering,
        name: "🖥️ 渲染技术 (Rendering)",
        zh_name: "渲染技术",
        en_label: "Rendering",
        en_stem: "Rendering",
        zh_stem: "渲染技术",
        labels: &[LabelPair { en: "Rendering", zh: "渲染技?术?" }],
        en_markers: &["Rendering"],
        zh_markers: &["渲染技术", "渲染"],
    },
    CategoryRule {
        key: CategoryKey::Effects,
        name: "✨ 特效元素 (Effects)",
        zh_name: "特效元素",
        en_label: "Effects",
        en_stem: "Effects?",
        zh_stem: "特效元素",
        labels: &[LabelPair { en: "Effects?", zh: "特效元?素?" }],
        en_markers: &["Effects?"],
        zh_markers: &["特效元素", "特效"],
    },
    CategoryRule {
        key: CategoryKey::Typography,
        name: "🔤 文字与装饰 (Typography)",
        zh_name: "文字与装饰",
        en_label: "Typography & Overlay",
        en_stem: "Typography|Overlays?",
        zh_stem: "文字与装饰|叠加层",
        labels: &[
            LabelPair { en: "Overlays?", zh: "叠加层?" },
            LabelPair { en: r"Typography\s*(?:&|\+|\s)?\s*Overlays?", zh: "文字与装饰?" },
            LabelPair { en: "Typography", zh: "文字与装饰?" },
        ],
        en_markers: &[r"Typography\s*(?:&|\+|\s)?\s*Overlay", "Overlay"],
        zh_markers: &[r"文字[^\]]*装饰", "文字", "装饰", "叠加层"],
    },
];

/// 示例提示词（8个类别各一段）
pub const SAMPLE_PROMPT_TEXT: &str = "[Base Styles / 基础风格]
anime style, bishoujo character, elegant silhouette

[Artistic Styles / 艺术风格]
cel shading, manga lineart, vibrant pastel tones

[Cinematic / 镜头语言]
cinematic composition, dynamic action shot, ultra-realistic rim lighting

[Lighting & Mood / 光影氛围]
glowing pastel light, soft bloom effect, moonlit atmosphere

[Theme Styles / 主题风格]
fantasy Japanese setting, traditional haori fluttering, supernatural battle theme

[Rendering / 渲染技术]
hyper-detailed, 8K resolution, subsurface scattering for skin

[Effects / 特效元素]
floating cherry blossoms, glowing energy ribbons, heart-shaped sparks

[Typography & Overlay / 文字与装饰]
calligraphic kanji overlay, dissolving brushstroke text, flowing mist captions";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_follow_key_order() {
        for (rule, key) in CATEGORY_RULES.iter().zip(CategoryKey::ALL) {
            assert_eq!(rule.key, key);
            assert!(!rule.labels.is_empty());
            assert!(!rule.en_markers.is_empty());
            assert!(!rule.zh_markers.is_empty());
        }
    }

    #[test]
    fn test_standard_header() {
        assert_eq!(CATEGORY_RULES[0].header(), "[Base Styles / 基础风格]");
        assert_eq!(CATEGORY_RULES[3].header(), "[Lighting & Mood / 光影氛围]");
        assert_eq!(CATEGORY_RULES[7].header(), "[Typography & Overlay / 文字与装饰]");
    }
}
