//! Token 值提取
//!
//! 把原始 token 转换为语义上归一化的值：数字去掉分组分隔符、
//! 字符串去掉定界符并解转义。语法规则在自己的 [`Parser`] 实现里
//! 调用这些辅助函数。
//!
//! [`Parser`]: super::parser::Parser

use super::parser::ParseResult;
use super::stream::TokenStream;
use crate::kit::lexer::core::{Span, Token};
use std::fmt;

/// 带归一化值的 token
#[derive(Debug, Clone, PartialEq)]
pub struct TokenValue<K> {
    /// token 类型标签
    pub kind: K,
    /// 消耗的原始文本
    pub raw: String,
    /// 归一化后的值
    pub value: String,
    /// 源代码范围
    pub span: Span,
}

impl<K: Clone> TokenValue<K> {
    fn new(token: Token<K>, value: String) -> Self {
        Self {
            kind: token.kind().clone(),
            raw: token.raw().to_string(),
            value,
            span: token.span().clone(),
        }
    }
}

/// 消费一个指定类型的 token，值即原始文本
///
/// 适用于标识符、标点等无需归一化的 token。
pub fn literal<K: Clone + PartialEq + fmt::Debug>(
    ts: &mut TokenStream<K>,
    kind: K,
) -> ParseResult<TokenValue<K>> {
    let token = ts.next_token_strict(&[kind])?;
    let value = token.raw().to_string();
    Ok(TokenValue::new(token, value))
}

/// 消费一个数字 token，剥掉 `_` 数字分组分隔符
pub fn number<K: Clone + PartialEq + fmt::Debug>(
    ts: &mut TokenStream<K>,
    kind: K,
) -> ParseResult<TokenValue<K>> {
    let token = ts.next_token_strict(&[kind])?;
    let value = token.raw().replace('_', "");
    Ok(TokenValue::new(token, value))
}

/// 消费一个定界字符串 token，剥掉两端定界符并解转义
///
/// `escape` 必须与产出该 token 的规则所配置的转义字符一致；
/// 转义字符使紧随其后的字符按字面意义进入值。
pub fn quoted<K: Clone + PartialEq + fmt::Debug>(
    ts: &mut TokenStream<K>,
    kind: K,
    escape: char,
) -> ParseResult<TokenValue<K>> {
    let token = ts.next_token_strict(&[kind])?;
    let value = unescape_body(token.raw(), escape);
    Ok(TokenValue::new(token, value))
}

fn unescape_body(raw: &str, escape: char) -> String {
    // 去掉两端的定界符
    let mut chars = raw.chars();
    chars.next();
    chars.next_back();
    let body = chars.as_str();

    let mut value = String::with_capacity(body.len());
    let mut iter = body.chars();
    while let Some(c) = iter.next() {
        if c == escape {
            if let Some(escaped) = iter.next() {
                value.push(escaped);
            }
        } else {
            value.push(c);
        }
    }
    value
}
