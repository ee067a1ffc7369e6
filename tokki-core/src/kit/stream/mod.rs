//! 支持回溯的 token 流与解析器引擎
//!
//! [`TokenStream`] 是逻辑 token 序列（skip 已滤除）上的游标，
//! 提供严格消费和三种回溯语义不同的解析器调用方式：
//! - [`TokenStream::parse`]: 必选规则，失败原样传播，游标停在失败处
//! - [`TokenStream::try_parse`]: 可选规则，失败时恢复游标并返回 `None`
//! - [`TokenStream::peek`]: 前瞻，无论成败都恢复游标
//!
//! 语法不匹配通过显式的 [`ParseError`] 返回值表达，而不是 panic。

pub mod error;
pub mod parser;
pub mod stream;
pub mod values;

pub use error::{ErrorLocation, ParseError, ParseErrorKind};
pub use parser::{ParseResult, Parser};
pub use stream::TokenStream;
pub use values::TokenValue;
