//! 配置管理模块
//!
//! 提供CLI参数解析和批量翻译配置。文件路径与语言对均为编译期常量，
//! 命令行只控制日志输出。

// 标准库导入
use std::path::{Path, PathBuf};

// 第三方crate导入
use clap::Parser;

// 本地模块导入
use crate::api_constants::{api_config, file_config, is_valid_api_url, language_config};
use crate::error::Result;
use crate::translation_error;

/// 批量翻译配置结构体
///
/// 默认值即程序使用的固定配置，Builder方法主要供测试替换文件路径。
///
/// # Examples
///
/// ```rust
/// use wordlist_translator::config::BatchConfig;
///
/// let config = BatchConfig::new()
///     .with_input_path("words.txt")
///     .with_output_path("words-zh.txt");
/// assert_eq!(config.target_lang(), "zh-cn");
/// ```
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// 输入单词表路径
    input_path: PathBuf,
    /// 输出结果路径
    output_path: PathBuf,
    /// 源语言代码
    source_lang: String,
    /// 目标语言代码
    target_lang: String,
    /// 翻译API服务地址
    api_url: String,
}

impl BatchConfig {
    /// 创建默认配置实例
    ///
    /// - 输入文件: `wordlist.txt`
    /// - 输出文件: `wordlist-zh.txt`
    /// - 语言对: en -> zh-cn
    pub fn new() -> Self {
        Self {
            input_path: PathBuf::from(file_config::DEFAULT_INPUT_FILE),
            output_path: PathBuf::from(file_config::DEFAULT_OUTPUT_FILE),
            source_lang: language_config::SOURCE_LANG.to_string(),
            target_lang: language_config::TARGET_LANG.to_string(),
            api_url: api_config::DEFAULT_API_URL.to_string(),
        }
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn source_lang(&self) -> &str {
        &self.source_lang
    }

    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// 设置输入文件路径
    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// 设置输出文件路径
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// 设置API地址
    pub fn with_api_url(mut self, url: &str) -> Self {
        self.api_url = url.to_string();
        self
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if !is_valid_api_url(&self.api_url) {
            return Err(translation_error!(config, "api_url", "必须以http://或https://开头"));
        }
        if self.input_path == self.output_path {
            return Err(translation_error!(config, "output_path", "输出文件不能覆盖输入文件"));
        }
        Ok(())
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// CLI参数结构
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "批量单词翻译工具 - 将 wordlist.txt 中的英文单词翻译为中文并写入 wordlist-zh.txt",
    long_about = None
)]
pub struct Cli {
    /// 详细输出模式（包含统计报告）
    #[arg(short, long)]
    pub verbose: bool,

    /// 静默模式 (不输出日志)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
