//! Parser trait 定义
//!
//! 所有语法规则都实现此 trait。规则必须是流内容的纯函数：
//! 不依赖外部可变状态，这是游标恢复式回溯正确性的前提。
//!
//! 语法不匹配通过返回 [`ParseError`](super::error::ParseError)
//! 表达（而不是 panic），这样
//! [`try_parse`](super::stream::TokenStream::try_parse) /
//! [`peek`](super::stream::TokenStream::peek) 可以按可恢复性
//! 区别处理。

use super::error::ParseError;
use super::stream::TokenStream;

/// 语法解析结果
pub type ParseResult<T> = Result<T, ParseError>;

/// 语法规则 trait
///
/// 通过 `TokenStream::parse::<P>()` 调用时，引擎用 `P::default()`
/// 实例化一个全新的无状态解析器（按类型做标签分发），因此实现者
/// 通常是单元结构体：
///
/// ```
/// use tokki_core::kit::stream::{ParseResult, Parser, TokenStream};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Kind { Ident }
///
/// #[derive(Default)]
/// struct IdentName;
///
/// impl Parser<Kind> for IdentName {
///     type Output = String;
///
///     fn parse(&self, ts: &mut TokenStream<Kind>) -> ParseResult<String> {
///         let token = ts.next_token_strict(&[Kind::Ident])?;
///         Ok(token.raw().to_string())
///     }
/// }
/// ```
pub trait Parser<K> {
    /// 解析产出的类型
    type Output;

    /// 从流中消费 token，产出结果或报告不匹配
    fn parse(&self, ts: &mut TokenStream<K>) -> ParseResult<Self::Output>;
}
