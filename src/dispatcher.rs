//! 并发翻译分发
//!
//! 每个单词一个独立的翻译任务，全部并发执行并等待结束。`join_all` 按提交
//! 顺序返回结果，因此结果列表与输入单词逐一对齐，与完成顺序无关。
//! 单个单词的失败只影响它自己的结果。

use futures::future::join_all;
use tracing::{info, warn};

use crate::model::{TranslationResult, Word};
use crate::translator::Translate;

/// 翻译单个单词，并把错误收敛为失败结果
pub async fn translate_word(
    translator: &dyn Translate,
    word: &str,
    source_lang: &str,
    target_lang: &str,
) -> TranslationResult {
    match translator.translate(word, source_lang, target_lang).await {
        Ok(translated) => {
            info!("Translated: {} -> {}", word, translated);
            TranslationResult::success(word, translated)
        }
        Err(e) => {
            warn!("Could not translate '{}'. Error: {}", word, e);
            TranslationResult::failure(word)
        }
    }
}

/// 并发翻译整个单词列表
pub async fn dispatch(
    words: &[Word],
    translator: &dyn Translate,
    source_lang: &str,
    target_lang: &str,
) -> Vec<TranslationResult> {
    if words.is_empty() {
        return vec![];
    }

    info!("🚀 并发翻译 {} 个单词: {} -> {}", words.len(), source_lang, target_lang);

    let tasks = words
        .iter()
        .map(|word| translate_word(translator, word, source_lang, target_lang));

    join_all(tasks).await
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::Result;
    use crate::translation_error;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// 测试用翻译器：按词表返回译文，未登记的单词返回错误
    pub(crate) struct StubTranslator {
        entries: HashMap<String, String>,
        delays: HashMap<String, u64>,
        calls: AtomicUsize,
        completed: Mutex<Vec<String>>,
    }

    impl StubTranslator {
        pub(crate) fn new(entries: &[(&str, &str)]) -> Self {
            Self {
                entries: entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                delays: HashMap::new(),
                calls: AtomicUsize::new(0),
                completed: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn with_delay(mut self, word: &str, millis: u64) -> Self {
            self.delays.insert(word.to_string(), millis);
            self
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn completion_order(&self) -> Vec<String> {
            self.completed.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Translate for StubTranslator {
        async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
            assert_eq!(source_lang, "en");
            assert_eq!(target_lang, "zh-cn");
            self.calls.fetch_add(1, Ordering::SeqCst);

            if let Some(millis) = self.delays.get(text) {
                tokio::time::sleep(Duration::from_millis(*millis)).await;
            }
            self.completed.lock().unwrap().push(text.to_string());

            self.entries
                .get(text)
                .cloned()
                .ok_or_else(|| translation_error!(network, format!("no route for {}", text)))
        }
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[tokio::test]
    async fn test_results_follow_input_order() {
        // 先提交的单词最晚完成
        let translator = StubTranslator::new(&[("one", "一"), ("two", "二"), ("three", "三")])
            .with_delay("one", 60)
            .with_delay("two", 30);
        let input = words(&["one", "two", "three"]);

        let results = dispatch(&input, &translator, "en", "zh-cn").await;

        assert_eq!(translator.completion_order(), vec!["three", "two", "one"]);
        assert_eq!(results.len(), 3);
        for (word, result) in input.iter().zip(&results) {
            assert_eq!(result.word(), word);
        }
        assert_eq!(results[0].translated_text(), Some("一"));
        assert_eq!(results[2].translated_text(), Some("三"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_requests_run_concurrently() {
        let translator = StubTranslator::new(&[("a", "甲"), ("b", "乙"), ("c", "丙")])
            .with_delay("a", 200)
            .with_delay("b", 200)
            .with_delay("c", 200);
        let input = words(&["a", "b", "c"]);

        // 虚拟时钟：并发执行耗时200ms，串行则为600ms
        let start = tokio::time::Instant::now();
        let results = dispatch(&input, &translator, "en", "zh-cn").await;

        assert!(start.elapsed() < Duration::from_millis(400));
        assert!(results.iter().all(TranslationResult::succeeded));
    }

    #[tokio::test]
    async fn test_failure_is_isolated() {
        let translator = StubTranslator::new(&[("hello", "你好"), ("world", "世界")])
            .with_delay("hello", 20);
        let input = words(&["hello", "python", "world"]);

        let results = dispatch(&input, &translator, "en", "zh-cn").await;

        assert_eq!(translator.calls(), 3);
        assert!(results[0].succeeded());
        assert!(!results[1].succeeded());
        assert_eq!(results[1].word(), "python");
        assert!(results[2].succeeded());
        assert_eq!(results[2].translated_text(), Some("世界"));
    }

    #[tokio::test]
    async fn test_all_failures_still_return_full_list() {
        let translator = StubTranslator::new(&[]);
        let input = words(&["x", "y"]);

        let results = dispatch(&input, &translator, "en", "zh-cn").await;

        assert_eq!(results, vec![TranslationResult::failure("x"), TranslationResult::failure("y")]);
    }

    #[tokio::test]
    async fn test_empty_word_list() {
        let translator = StubTranslator::new(&[]);
        let results = dispatch(&[], &translator, "en", "zh-cn").await;
        assert!(results.is_empty());
        assert_eq!(translator.calls(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_words_each_get_a_result() {
        let translator = StubTranslator::new(&[("go", "去")]);
        let input = words(&["go", "go"]);

        let results = dispatch(&input, &translator, "en", "zh-cn").await;

        assert_eq!(translator.calls(), 2);
        assert_eq!(results, vec![TranslationResult::success("go", "去"); 2]);
    }
}
