//! 翻译结果写出

use std::path::Path;

use tracing::debug;

use crate::api_constants::messages;
use crate::error::Result;
use crate::model::TranslationResult;
use crate::translation_error;

/// 按顺序渲染所有结果，行间以单个换行分隔，末行不追加换行
pub fn render_results(results: &[TranslationResult]) -> String {
    results
        .iter()
        .map(TranslationResult::to_line)
        .collect::<Vec<_>>()
        .join(messages::LINE_SEPARATOR)
}

/// 将结果写入输出文件，覆盖原有内容
///
/// 返回写入的字节数。
pub async fn write_results(path: &Path, results: &[TranslationResult]) -> Result<usize> {
    let content = render_results(results);
    tokio::fs::write(path, &content)
        .await
        .map_err(|e| translation_error!(file_op, path.display(), "写入", e))?;

    debug!("💾 写入 {} 行到 {}", results.len(), path.display());
    Ok(content.len())
}
