//! 单词表读取
//!
//! 读取输入文件，修剪每一行并丢弃空行。文件缺失以 `InputNotFound` 报告，
//! 由调用方决定是否生成示例文件。

use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::api_constants::file_config;
use crate::error::Result;
use crate::model::Word;
use crate::translation_error;

/// 从文本中解析单词列表，保持原有顺序
///
/// `\n`、`\r\n` 与单独的 `\r` 都视为换行。
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// 读取单词表文件
pub async fn load_words(path: &Path) -> Result<Vec<Word>> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            translation_error!(not_found, path.display())
        } else {
            translation_error!(file_op, path.display(), "读取", e)
        }
    })?;

    let words = parse_words(&content);
    debug!("📂 从 {} 读取到 {} 个单词", path.display(), words.len());
    Ok(words)
}

/// 生成示例输入文件
pub async fn create_sample_input(path: &Path) -> Result<()> {
    tokio::fs::write(path, file_config::SAMPLE_CONTENT)
        .await
        .map_err(|e| translation_error!(file_op, path.display(), "创建", e))?;
    info!("📝 已生成示例单词表: {}", path.display());
    Ok(())
}
