//! 批量翻译的数据模型

use crate::api_constants::messages;

/// 单词：输入文件中修剪后的非空行
pub type Word = String;

/// 单个单词的翻译结果
///
/// 失败结果不携带译文。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    word: Word,
    translated: Option<String>,
}

impl TranslationResult {
    /// 成功的翻译结果
    pub fn success(word: impl Into<Word>, translated: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translated: Some(translated.into()),
        }
    }

    /// 失败的翻译结果
    pub fn failure(word: impl Into<Word>) -> Self {
        Self {
            word: word.into(),
            translated: None,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn translated_text(&self) -> Option<&str> {
        self.translated.as_deref()
    }

    pub fn succeeded(&self) -> bool {
        self.translated.is_some()
    }

    /// 渲染为输出文件中的一行
    pub fn to_line(&self) -> String {
        match &self.translated {
            Some(text) => format!("{} {}", text, self.word),
            None => format!("{} {}", messages::TRANSLATION_FAILED, self.word),
        }
    }
}
