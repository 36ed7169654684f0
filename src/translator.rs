//! 翻译能力抽象与Google翻译实现

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::api_constants::{api_config, service_config, to_api_language};
use crate::error::Result;
use crate::translation_error;

/// 翻译能力
///
/// 只需满足单次调用契约：给定文本与语言对，返回译文或错误。
/// 实现必须可在并发任务间只读共享。
#[async_trait]
pub trait Translate: Send + Sync {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String>;
}

/// 基于Google翻译公共接口的翻译器
pub struct GoogleTranslator {
    client: Client,
    api_url: String,
}

impl GoogleTranslator {
    /// 创建翻译器，使用默认超时和User-Agent
    pub fn new(api_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(service_config::REQUEST_TIMEOUT_SECONDS))
            .user_agent(service_config::USER_AGENT)
            .build()
            .context("创建HTTP客户端失败")?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
        })
    }

    /// 构造单词翻译请求地址
    pub fn build_request_url(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<Url> {
        let source = to_api_language(source_lang);
        let target = to_api_language(target_lang);
        Url::parse_with_params(
            &self.api_url,
            &[
                ("client", api_config::CLIENT_ID),
                ("sl", source.as_str()),
                ("tl", target.as_str()),
                ("dt", api_config::DATA_TYPE),
                ("q", text),
            ],
        )
        .map_err(|e| translation_error!(config, "api_url", e))
    }
}

#[async_trait]
impl Translate for GoogleTranslator {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        let url = self.build_request_url(text, source_lang, target_lang)?;
        debug!("🌐 请求翻译: {}", text);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unknown status");
            return Err(translation_error!(
                translation_api,
                status.as_u16(),
                reason,
                self.api_url
            ));
        }

        let body = response.text().await?;
        parse_google_response(&body)
    }
}

/// 解析Google翻译接口的响应
///
/// 响应形如 `[[["你好","hello",null,null,10]],null,"en",...]`，
/// 第一个元素是分段列表，每段的第一个元素为译文片段。
pub fn parse_google_response(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)?;

    let segments = value
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| translation_error!(malformed, "响应缺少译文分段"))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        return Err(translation_error!(malformed, "响应译文为空"));
    }

    Ok(translated)
}
