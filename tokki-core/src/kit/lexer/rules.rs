//! 常用 token 规则
//!
//! 标识符、整数、实数、字符集、定界字符串这些规则的结构几乎相同，
//! 只在类型标签、字符类、skip 标记、转义字符和定界符集合这几个
//! 旋钮上有差异，因此统一为一个配置驱动的 [`StockRule`]，
//! 而不是一串可覆写的基类。

use super::rule::{LexContext, RuleMatch, TokenRule};
use once_cell::sync::Lazy;
use std::sync::Arc;

/// 默认空白字符集
static WHITESPACE_CHARS: Lazy<Arc<[char]>> =
    Lazy::new(|| Arc::from([' ', '\t', '\n', '\r', '\x0B', '\x0C'].as_slice()));

/// 默认标点字符集（ASCII 可见标点）
static PUNCTUATION_CHARS: Lazy<Arc<[char]>> = Lazy::new(|| {
    Arc::from(
        [
            '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/', ':', ';',
            '<', '=', '>', '?', '@', '[', '\\', ']', '^', '_', '`', '{', '|', '}', '~',
        ]
        .as_slice(),
    )
});

/// 默认字符串定界符集
static STRING_DELIMITERS: Lazy<Arc<[char]>> = Lazy::new(|| Arc::from(['"', '\''].as_slice()));

/// 是否为标识符起始字符
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

/// 是否为标识符延续字符
pub fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

#[derive(Debug, Clone)]
enum RuleShape {
    Identifier,
    Integer,
    Real,
    CharInSet(Arc<[char]>),
    RunInSet(Arc<[char]>),
    Delimited {
        escape: char,
        delimiters: Arc<[char]>,
    },
}

/// 配置驱动的通用 token 规则
///
/// 通过构造函数选择形状，通过 `with_*` 调整旋钮：
///
/// ```
/// use tokki_core::kit::lexer::{LexerBuilder, StockRule};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Kind { Ident, Int, Str, Ws }
///
/// let builder = LexerBuilder::new()
///     .rule(StockRule::identifier(Kind::Ident))
///     .rule(StockRule::integer(Kind::Int))
///     .rule(StockRule::string(Kind::Str))
///     .rule(StockRule::whitespace(Kind::Ws));
/// ```
#[derive(Debug, Clone)]
pub struct StockRule<K> {
    kind: K,
    skip: bool,
    shape: RuleShape,
}

impl<K: Clone> StockRule<K> {
    /// 标识符：`[a-zA-Z_$]` 开头，后接 `[a-zA-Z_$0-9]`
    pub fn identifier(kind: K) -> Self {
        Self {
            kind,
            skip: false,
            shape: RuleShape::Identifier,
        }
    }

    /// 整数：数字开头，后接 `[0-9_]`（`_` 为数字分组分隔符）
    pub fn integer(kind: K) -> Self {
        Self {
            kind,
            skip: false,
            shape: RuleShape::Integer,
        }
    }

    /// 实数：整数部分、小数点、至少一位数字、可选的 `[0-9_]` 延续
    pub fn real(kind: K) -> Self {
        Self {
            kind,
            skip: false,
            shape: RuleShape::Real,
        }
    }

    /// 集合中的单个字符
    pub fn char_in_set(kind: K, set: &[char]) -> Self {
        Self {
            kind,
            skip: false,
            shape: RuleShape::CharInSet(Arc::from(set)),
        }
    }

    /// 集合字符的连续串（可能报告零长度，届时视同未匹配）
    pub fn run_in_set(kind: K, set: &[char]) -> Self {
        Self {
            kind,
            skip: false,
            shape: RuleShape::RunInSet(Arc::from(set)),
        }
    }

    /// 空白串，默认 skip
    pub fn whitespace(kind: K) -> Self {
        Self {
            kind,
            skip: true,
            shape: RuleShape::RunInSet(Arc::clone(&WHITESPACE_CHARS)),
        }
    }

    /// ASCII 标点中的单个字符
    pub fn punctuation(kind: K) -> Self {
        Self {
            kind,
            skip: false,
            shape: RuleShape::CharInSet(Arc::clone(&PUNCTUATION_CHARS)),
        }
    }

    /// 定界字符串：默认定界符 `"` 或 `'`，默认转义字符 `\`
    ///
    /// 开头的定界符同时决定结尾的定界符；未闭合视为未匹配。
    /// 原始文本包含两端的定界符。
    pub fn string(kind: K) -> Self {
        Self {
            kind,
            skip: false,
            shape: RuleShape::Delimited {
                escape: '\\',
                delimiters: Arc::clone(&STRING_DELIMITERS),
            },
        }
    }

    /// 标记为 skip：token 照常产出但不进入逻辑序列
    pub fn skipped(mut self) -> Self {
        self.skip = true;
        self
    }

    /// 调整转义字符（只对字符串形状有意义）
    pub fn with_escape(mut self, escape: char) -> Self {
        if let RuleShape::Delimited {
            escape: slot,
            ..
        } = &mut self.shape
        {
            *slot = escape;
        }
        self
    }

    /// 调整定界符集合（只对字符串形状有意义）
    pub fn with_delimiters(mut self, delimiters: &[char]) -> Self {
        if let RuleShape::Delimited {
            delimiters: slot, ..
        } = &mut self.shape
        {
            *slot = Arc::from(delimiters);
        }
        self
    }
}

impl<K: Clone> TokenRule<K> for StockRule<K> {
    fn try_read(&self, rest: &str, _cx: &LexContext<'_>) -> Option<RuleMatch<K>> {
        let length = match &self.shape {
            RuleShape::Identifier => read_identifier(rest)?,
            RuleShape::Integer => read_integer(rest)?,
            RuleShape::Real => read_real(rest)?,
            RuleShape::CharInSet(set) => read_char_in_set(rest, set)?,
            RuleShape::RunInSet(set) => read_run_in_set(rest, set),
            RuleShape::Delimited { escape, delimiters } => {
                read_delimited(rest, *escape, delimiters)?
            }
        };
        Some(RuleMatch {
            length,
            kind: self.kind.clone(),
            skip: self.skip,
        })
    }
}

fn read_identifier(rest: &str) -> Option<usize> {
    let mut chars = rest.chars();
    let first = chars.next()?;
    if !is_identifier_start(first) {
        return None;
    }
    let mut length = first.len_utf8();
    for c in chars {
        if !is_identifier_continue(c) {
            break;
        }
        length += c.len_utf8();
    }
    Some(length)
}

fn read_integer(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if bytes.first().map_or(true, |b| !b.is_ascii_digit()) {
        return None;
    }
    let mut i = 1;
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'_') {
        i += 1;
    }
    Some(i)
}

fn read_real(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if bytes.first().map_or(true, |b| !b.is_ascii_digit()) {
        return None;
    }
    let mut i = 1;
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'_') {
        i += 1;
    }
    // 小数点后必须紧跟至少一位数字
    if i >= bytes.len() || bytes[i] != b'.' {
        return None;
    }
    i += 1;
    if i >= bytes.len() || !bytes[i].is_ascii_digit() {
        return None;
    }
    i += 1;
    while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'_') {
        i += 1;
    }
    Some(i)
}

fn read_char_in_set(rest: &str, set: &[char]) -> Option<usize> {
    let first = rest.chars().next()?;
    set.contains(&first).then(|| first.len_utf8())
}

fn read_run_in_set(rest: &str, set: &[char]) -> usize {
    let mut length = 0;
    for c in rest.chars() {
        if !set.contains(&c) {
            break;
        }
        length += c.len_utf8();
    }
    length
}

fn read_delimited(rest: &str, escape: char, delimiters: &[char]) -> Option<usize> {
    let mut chars = rest.chars();
    let delimiter = chars.next()?;
    if !delimiters.contains(&delimiter) {
        return None;
    }
    let mut length = delimiter.len_utf8();
    while let Some(c) = chars.next() {
        length += c.len_utf8();
        if c == delimiter {
            return Some(length);
        }
        if c == escape {
            // 转义字符吞掉下一个字符；输入在转义后立即结束视为未闭合
            let escaped = chars.next()?;
            length += escaped.len_utf8();
        }
    }
    None
}
