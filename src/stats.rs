use std::time::Duration;

use crate::model::TranslationResult;

/// 批量翻译统计
#[derive(Debug, Default, Clone)]
pub struct BatchStats {
    pub load_time: Duration,
    pub translation_time: Duration,
    pub write_time: Duration,
    pub words: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub output_size: usize,
}

impl BatchStats {
    /// 统计结果列表中的成功与失败数量
    pub fn record_results(&mut self, results: &[TranslationResult]) {
        self.words = results.len();
        self.succeeded = results.iter().filter(|r| r.succeeded()).count();
        self.failed = self.words - self.succeeded;
    }

    /// 成功率（百分比），空批次视为100%
    pub fn success_rate(&self) -> f64 {
        if self.words == 0 {
            return 100.0;
        }
        self.succeeded as f64 / self.words as f64 * 100.0
    }
}

/// 打印统计报告
pub fn print_batch_stats(stats: &BatchStats, total_duration: Duration) {
    println!("\n📊 翻译统计报告:");
    println!("═══════════════════════════════════════");

    println!("⏱️  时间分解:");
    println!("   读取单词表: {}", format_duration(stats.load_time));
    println!("   并发翻译: {}", format_duration(stats.translation_time));
    println!("   写入结果: {}", format_duration(stats.write_time));
    println!("   总耗时: {}", format_duration(total_duration));

    println!("\n🔤 翻译统计:");
    println!("   单词总数: {} 个", stats.words);
    println!("   翻译成功: {} 个", stats.succeeded);
    println!("   翻译失败: {} 个", stats.failed);
    println!("   成功率: {:.1}%", stats.success_rate());
    println!("   输出大小: {} 字节", stats.output_size);
}

/// 格式化持续时间
pub fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.3}s", duration.as_secs_f64())
    }
}
