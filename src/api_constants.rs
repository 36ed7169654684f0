/// 翻译API与批处理常量
///
/// 该文件集中定义翻译服务、语言对、文件路径以及用户提示文本等常量

/// 默认翻译API配置
pub mod api_config {
    /// Google翻译公共接口地址
    pub const DEFAULT_API_URL: &str = "https://translate.googleapis.com/translate_a/single";

    /// 公共接口使用的客户端标识
    pub const CLIENT_ID: &str = "gtx";

    /// 请求的数据类型（t = 译文）
    pub const DATA_TYPE: &str = "t";
}

/// 语言对配置
pub mod language_config {
    /// 源语言
    pub const SOURCE_LANG: &str = "en";

    /// 目标语言
    pub const TARGET_LANG: &str = "zh-cn";
}

/// 文件路径配置
pub mod file_config {
    /// 输入文件（每行一个英文单词）
    pub const DEFAULT_INPUT_FILE: &str = "wordlist.txt";

    /// 输出文件（中文译文 + 英文单词）
    pub const DEFAULT_OUTPUT_FILE: &str = "wordlist-zh.txt";

    /// 输入文件缺失时生成的示例内容
    pub const SAMPLE_CONTENT: &str = "hello\nworld\npython";
}

/// 翻译服务配置
pub mod service_config {
    /// 单次请求超时时间（秒）
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 30;

    /// 请求使用的User-Agent
    pub const USER_AGENT: &str = "wordlist-translator/0.1.0";
}

/// 输出与提示文本
pub mod messages {
    /// 翻译失败时输出行的占位前缀
    pub const TRANSLATION_FAILED: &str = "(Translation failed)";

    /// 输出文件的行分隔符
    pub const LINE_SEPARATOR: &str = "\n";
}

/// 将语言代码转换为接口接受的形式
///
/// 中文变体需要大写地区部分（`zh-cn` -> `zh-CN`），其余语言统一小写。
pub fn to_api_language(lang: &str) -> String {
    let lower = lang.trim().to_lowercase();
    match lower.split_once('-') {
        Some(("zh", region)) => format!("zh-{}", region.to_uppercase()),
        _ => lower,
    }
}

/// 验证API URL是否有效
pub fn is_valid_api_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
