use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use wordlist_translator::config::{BatchConfig, Cli};
use wordlist_translator::pipeline::{missing_input_report, run, RunOutcome};
use wordlist_translator::stats::print_batch_stats;
use wordlist_translator::translator::GoogleTranslator;
use wordlist_translator::utils::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    init_logging(cli.verbose, cli.quiet);

    let config = BatchConfig::default();
    info!("📂 输入文件: {}", config.input_path().display());
    info!("📄 输出文件: {}", config.output_path().display());
    info!("🌐 语言: {} -> {}", config.source_lang(), config.target_lang());

    let translator = GoogleTranslator::new(config.api_url()).context("创建翻译器失败")?;

    let total_start = Instant::now();
    match run(&config, &translator).await {
        Ok(RunOutcome::Completed { output_path, stats }) => {
            if cli.verbose {
                print_batch_stats(&stats, total_start.elapsed());
            }
            println!(
                "\nTranslation complete. Results saved to {}",
                output_path.display()
            );
        }
        Ok(RunOutcome::SampleCreated { input_path }) => {
            // 静默模式下日志被关闭，缺失报告仍需直接输出
            if cli.quiet {
                for line in missing_input_report(&input_path) {
                    println!("{}", line);
                }
            }
        }
        Err(e) => {
            error!("❌ 翻译失败: {:#}", e);
            return Err(e);
        }
    }

    Ok(())
}
