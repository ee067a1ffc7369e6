//! Tokenization 驱动
//!
//! 持有按优先级排序的规则列表，驱动位置穿过输入文本。
//! 构造时统一行尾（`\r\n` 与 `\r` 归一为 `\n`），之后字节偏移只在
//! 内部使用，对外可见的位置单位只有 (行, 列)。

use super::core::{Position, SessionId, Span, Token};
use super::error::LexError;
use super::rule::{LexContext, RuleMatch, TokenRule};
use std::fmt;
use std::sync::Arc;
use tokki_log::{debug, trace, warn, Logger};

/// 一次 `next_token` 的产出：token 加上它的 skip 分类
#[derive(Debug, Clone, PartialEq)]
pub struct Lexed<K> {
    /// 产出的 token
    pub token: Token<K>,
    /// 是否应从逻辑序列中滤除
    pub skip: bool,
}

/// Tokenization 驱动
///
/// 由 [`LexerBuilder`](super::builder::LexerBuilder) 构建。偏移单调
/// 不减；产出的每个 span/token 都携带本实例的会话标识。
pub struct Lexer<K> {
    text: String,
    offset: usize,
    line: usize,
    column: usize,
    rules: Vec<Arc<dyn TokenRule<K>>>,
    filename: Arc<str>,
    session: SessionId,
    logger: Arc<Logger>,
}

impl<K: Clone + PartialEq + fmt::Debug> Lexer<K> {
    pub(crate) fn new(
        text: &str,
        rules: Vec<Arc<dyn TokenRule<K>>>,
        filename: Arc<str>,
        logger: Arc<Logger>,
    ) -> Self {
        let text = normalize_newlines(text);
        trace!(
            logger,
            "Creating lexer for '{}' ({} bytes, {} rules)",
            filename,
            text.len(),
            rules.len()
        );
        Self {
            text,
            offset: 0,
            line: 1,
            column: 1,
            rules,
            filename,
            session: SessionId::fresh(),
            logger,
        }
    }

    /// 正在分析的文件名
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// 当前位置
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub(crate) fn logger(&self) -> Arc<Logger> {
        Arc::clone(&self.logger)
    }

    /// 读取下一个 token
    ///
    /// 输入耗尽时返回 `Ok(None)`（终止信号，不是错误）。否则按注册
    /// 顺序询问规则，第一个给出非零长度匹配的规则胜出；零长度匹配
    /// 被当作未匹配跳过。没有任何规则匹配时返回
    /// [`LexError::UnrecognizedInput`]。
    ///
    /// `skip` 标记只影响 token 是否暴露给逻辑序列，位置簿记总是
    /// 照常前进。
    pub fn next_token(&mut self) -> Result<Option<Lexed<K>>, LexError> {
        if self.offset == self.text.len() {
            return Ok(None);
        }

        let rest = &self.text[self.offset..];
        let cx = LexContext::new(&self.filename, Position::new(self.line, self.column));

        let mut matched: Option<RuleMatch<K>> = None;
        for rule in &self.rules {
            if let Some(m) = rule.try_read(rest, &cx) {
                if m.length == 0 {
                    // 零宽匹配不可接受，继续尝试后续规则
                    continue;
                }
                matched = Some(m);
                break;
            }
        }

        let Some(m) = matched else {
            warn!(
                self.logger,
                "No rule matched at {}:{}:{}", self.filename, self.line, self.column
            );
            return Err(LexError::UnrecognizedInput {
                filename: self.filename.to_string(),
                position: Position::new(self.line, self.column),
                remainder: rest.to_string(),
            });
        };

        // 规则契约：length 不超过剩余输入且落在字符边界上
        debug_assert!(
            m.length <= rest.len() && rest.is_char_boundary(m.length),
            "rule for {:?} reported invalid match length {} (remainder is {} bytes)",
            m.kind,
            m.length,
            rest.len()
        );

        let consumed = rest[..m.length].to_string();
        let begin = Position::new(self.line, self.column);

        let newlines = consumed.matches('\n').count();
        if newlines > 0 {
            self.line += newlines;
            let tail = consumed.rsplit('\n').next().unwrap_or("");
            self.column = 1 + tail.chars().count();
        } else {
            self.column += consumed.chars().count();
        }
        self.offset += m.length;

        let end = Position::new(self.line, self.column);
        let span = Span::new(begin, end, Arc::clone(&self.filename), self.session);

        debug!(
            self.logger,
            "Produced token: kind={:?}, raw={:?}, span={}..{}", m.kind, consumed, begin, end
        );

        Ok(Some(Lexed {
            token: Token::new(m.kind, consumed, span),
            skip: m.skip,
        }))
    }

    /// 吃到输入尾部，收集所有非 skip token
    ///
    /// 用于一次性整段 tokenization。任何位置出错则整轮失败，
    /// 不返回部分结果。
    pub fn remaining_tokens(&mut self) -> Result<Vec<Token<K>>, LexError> {
        let mut tokens = Vec::new();
        while let Some(lexed) = self.next_token()? {
            if !lexed.skip {
                tokens.push(lexed.token);
            }
        }
        Ok(tokens)
    }
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
