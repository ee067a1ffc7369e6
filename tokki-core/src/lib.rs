//! Tokki Core - 通用词法/语法分析工具箱（纯逻辑，无 IO）
//!
//! 为手写递归下降解析器提供可复用的底层设施：
//! - 词法层：规则驱动的 tokenization，精确的多行位置追踪
//! - 语法层：支持回溯的 token 流与解析器调用引擎
//!
//! 本 crate 不是解析器生成器，也不定义语法 DSL。调用方通过实现
//! [`TokenRule`] 提供具体的 token 匹配规则，通过实现 [`Parser`]
//! 提供具体的语法规则。
//!
//! 配置通过参数显式传入，无全局状态。

pub mod kit;

// Re-export common types
pub use kit::lexer::{
    IncompatibleSpanError, LexContext, LexError, Lexed, Lexer, LexerBuilder, Position, RuleFn,
    RuleMatch, Span, StockRule, Token, TokenRule,
};
pub use kit::stream::{
    ErrorLocation, ParseError, ParseErrorKind, ParseResult, Parser, TokenStream, TokenValue,
};

// Re-export config types from tokki-config
pub use tokki_config::{LexerConfig, StreamConfig};
