//! Wordlist Translator - 批量单词翻译工具库
//!
//! 读取单词表、并发请求翻译、按原顺序写出中英对照结果。

pub mod api_constants;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod stats;
pub mod translator;
pub mod utils;
pub mod writer;
