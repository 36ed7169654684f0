//! 批量翻译流程：读取 -> 并发翻译 -> 写出
//!
//! 唯一的分支是输入文件缺失：此时生成示例文件并提前结束，
//! 不进行翻译，也不写输出文件。

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::config::BatchConfig;
use crate::dispatcher::dispatch;
use crate::loader::{create_sample_input, load_words};
use crate::stats::BatchStats;
use crate::translator::Translate;
use crate::writer::write_results;

/// 一次运行的结局
#[derive(Debug)]
pub enum RunOutcome {
    /// 全部单词已处理并写出
    Completed {
        output_path: PathBuf,
        stats: BatchStats,
    },
    /// 输入文件缺失，已生成示例文件
    SampleCreated { input_path: PathBuf },
}

/// 输入文件缺失时给用户的两行提示：缺失报告与示例文件说明
pub fn missing_input_report(input_path: &Path) -> [String; 2] {
    [
        format!("Error: The input file '{}' was not found.", input_path.display()),
        format!(
            "A sample '{}' has been created. Please run the script again.",
            input_path.display()
        ),
    ]
}

/// 执行一次完整的批量翻译
pub async fn run(config: &BatchConfig, translator: &dyn Translate) -> Result<RunOutcome> {
    config.validate().context("配置无效")?;
    let mut stats = BatchStats::default();

    let load_start = Instant::now();
    let words = match load_words(config.input_path()).await {
        Ok(words) => words,
        Err(e) if e.is_input_not_found() => {
            let [not_found, sample_notice] = missing_input_report(config.input_path());
            error!("{}", not_found);
            create_sample_input(config.input_path())
                .await
                .context("创建示例单词表失败")?;
            info!("{}", sample_notice);
            return Ok(RunOutcome::SampleCreated {
                input_path: config.input_path().to_path_buf(),
            });
        }
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("读取单词表失败: {}", config.input_path().display())))
        }
    };
    stats.load_time = load_start.elapsed();

    let translate_start = Instant::now();
    let results = dispatch(&words, translator, config.source_lang(), config.target_lang()).await;
    stats.translation_time = translate_start.elapsed();
    stats.record_results(&results);

    let write_start = Instant::now();
    stats.output_size = write_results(config.output_path(), &results)
        .await
        .with_context(|| format!("写入结果失败: {}", config.output_path().display()))?;
    stats.write_time = write_start.elapsed();

    info!(
        "✅ 翻译完成: 成功 {} / 失败 {}",
        stats.succeeded, stats.failed
    );

    Ok(RunOutcome::Completed {
        output_path: config.output_path().to_path_buf(),
        stats,
    })
}
