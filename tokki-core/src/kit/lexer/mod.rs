//! Tokki 词法分析套件
//!
//! 设计目标：
//! - 通用：token 类型由调用方的枚举决定，规则通过 [`TokenRule`] 注入
//! - 精确：跨行 span 追踪，行/列均为 1-based
//! - 可预测：规则按注册顺序匹配，先匹配者胜（不是最长匹配）
//!
//! 规则注册必须最特殊者在前（如关键字规则先于通用标识符规则），
//! 这是刻意保留的优先级契约。

pub mod builder;
pub mod core;
pub mod error;
pub mod lexer;
pub mod rule;
pub mod rules;

pub use builder::LexerBuilder;
pub use core::{IncompatibleSpanError, Position, SessionId, Span, Token};
pub use error::LexError;
pub use lexer::{Lexed, Lexer};
pub use rule::{LexContext, RuleFn, RuleMatch, TokenRule};
pub use rules::{is_identifier_continue, is_identifier_start, StockRule};
