//! Token 结构

use super::position::Span;

/// 词法 token
///
/// 不可变的 (类型, 原始文本, span) 三元组。只由 lexer 构造；
/// `raw` 恰好是从输入中消耗的那段子串。
///
/// 类型标签 `K` 由调用方的语法定义，通常是一个封闭的枚举，
/// 需要满足 `Clone + PartialEq + Debug`。
#[derive(Debug, Clone, PartialEq)]
pub struct Token<K> {
    kind: K,
    raw: String,
    span: Span,
}

impl<K> Token<K> {
    pub(crate) fn new(kind: K, raw: String, span: Span) -> Self {
        Self { kind, raw, span }
    }

    /// token 类型标签
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// 消耗的原始文本
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// 源代码范围
    pub fn span(&self) -> &Span {
        &self.span
    }
}
