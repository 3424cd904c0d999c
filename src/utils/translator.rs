//! 词典短语翻译
//! 按词条长度从长到短整词替换，保证多词短语优先于其中的单词

use std::borrow::Cow;

use crate::compiler::{CompiledDictionary, Matcher};

/// 短语翻译器
pub struct PhraseTranslator<'a> {
    dictionary: &'a CompiledDictionary,
    separator: &'a str,
}

impl<'a> PhraseTranslator<'a> {
    pub fn new(dictionary: &'a CompiledDictionary, separator: &'a str) -> Self {
        Self {
            dictionary,
            separator,
        }
    }

    /// 翻译以逗号分隔的英文提示词
    ///
    /// 输入先整体转小写；词典外的词保留小写英文。
    /// 结果按英文逗号拆分、去空白、丢弃空片段后用配置的分隔符（默认全角逗号）重新拼接。
    pub fn translate(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return String::new();
        }

        let mut working = text.to_lowercase();
        for term in &self.dictionary.terms {
            working = Self::replace_whole_word(&term.matcher, &working, term.entry.translation)
                .into_owned();
        }

        working
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(self.separator)
    }

    /// 替换所有前后都不是单词字符的匹配
    fn replace_whole_word<'h>(matcher: &Matcher, haystack: &'h str, replacement: &str) -> Cow<'h, str> {
        let mut out = String::new();
        let mut last = 0;
        let mut pos = 0;
        let mut replaced = false;

        while let Some((start, end)) = matcher.find_at(haystack, pos) {
            if Self::is_whole_word(haystack, start, end) {
                out.push_str(&haystack[last..start]);
                out.push_str(replacement);
                last = end;
                pos = end;
                replaced = true;
            } else {
                // 被拒绝的匹配只前进一个字符，避免漏掉与之重叠的合法匹配
                pos = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
            }
        }

        if !replaced {
            return Cow::Borrowed(haystack);
        }
        out.push_str(&haystack[last..]);
        Cow::Owned(out)
    }

    fn is_whole_word(haystack: &str, start: usize, end: usize) -> bool {
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    }
}

/// 单词字符：ASCII 字母、数字与下划线（中文等非 ASCII 字符视为边界）
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
