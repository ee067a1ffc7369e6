//! Tokki Config - 纯配置数据结构
//!
//! 本 crate 只包含数据结构，无逻辑、无全局状态。
//! 它是所有 Tokki crate 共享的配置词汇表。

use serde::{Deserialize, Serialize};

/// 默认的匿名文件名标记
///
/// 当调用方构建 lexer 时未提供文件名，span 中使用该标记。
pub const ANONYMOUS_FILENAME: &str = "<anonymous>";

/// Lexer 行为配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexerConfig {
    /// 未指定文件名时使用的标记
    pub anonymous_filename: String,
}

/// Token 流行为配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamConfig {
    /// 惰性 token 缓存的初始容量
    pub token_cache_capacity: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            anonymous_filename: ANONYMOUS_FILENAME.to_string(),
        }
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            token_cache_capacity: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexer_config() {
        let cfg = LexerConfig::default();
        assert_eq!(cfg.anonymous_filename, "<anonymous>");
    }

    #[test]
    fn test_default_stream_config() {
        let cfg = StreamConfig::default();
        assert_eq!(cfg.token_cache_capacity, 64);
    }

    #[test]
    fn test_lexer_config_serde_roundtrip() {
        let cfg = LexerConfig {
            anonymous_filename: "<repl>".to_string(),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: LexerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.anonymous_filename, "<repl>");
    }

    #[test]
    fn test_stream_config_serde_roundtrip() {
        let cfg = StreamConfig {
            token_cache_capacity: 128,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: StreamConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.token_cache_capacity, 128);
    }
}
