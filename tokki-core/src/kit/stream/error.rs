//! 语法错误类型

use crate::kit::lexer::core::Position;
use crate::kit::lexer::error::LexError;
use std::fmt;
use thiserror::Error;

/// 错误位置信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorLocation {
    /// 特定位置
    At(Position),
    /// 流末尾
    Eof,
    /// 未知位置
    Unknown,
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorLocation::At(position) => write!(f, "{position}"),
            ErrorLocation::Eof => write!(f, "EOF"),
            ErrorLocation::Unknown => write!(f, "?"),
        }
    }
}

/// 语法错误类型
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseErrorKind {
    /// 需要特定类型的 token，读到了别的
    #[error("Expected one of {expected:?}, found {found}")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },
    /// 需要 token 但流已耗尽
    #[error("Expected one of {expected:?}, found end of stream")]
    UnexpectedEndOfInput { expected: Vec<String> },
    /// 语法规则自定义的不匹配消息
    #[error("{0}")]
    Custom(String),
    /// 惰性拉取 token 时底层 tokenization 失败
    ///
    /// 不可恢复：tokenization 错误对整轮分析是致命的，
    /// `try_parse`/`peek` 不会吞掉它。
    #[error(transparent)]
    Lex(LexError),
}

/// 语法错误，包含位置信息
#[derive(Debug, Clone, Error, PartialEq)]
#[error("[{location}] {kind}")]
pub struct ParseError {
    /// 错误类型
    pub kind: ParseErrorKind,
    /// 错误发生的位置
    pub location: ErrorLocation,
}

impl ParseError {
    /// 在指定位置创建错误
    pub fn at(kind: ParseErrorKind, position: Position) -> Self {
        Self {
            kind,
            location: ErrorLocation::At(position),
        }
    }

    /// 在流末尾创建错误
    pub fn at_eof(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            location: ErrorLocation::Eof,
        }
    }

    /// 创建自定义不匹配错误（位置未知）
    ///
    /// 供语法规则在 token 类型检查之外表达"此处不匹配"。
    pub fn custom(message: impl Into<String>) -> Self {
        Self {
            kind: ParseErrorKind::Custom(message.into()),
            location: ErrorLocation::Unknown,
        }
    }

    /// 该错误是否可被回溯组合子恢复
    ///
    /// 语法不匹配可恢复；tokenization 失败不可恢复。
    pub fn recoverable(&self) -> bool {
        !matches!(self.kind, ParseErrorKind::Lex(_))
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let position = err.position();
        Self {
            kind: ParseErrorKind::Lex(err),
            location: ErrorLocation::At(position),
        }
    }
}
