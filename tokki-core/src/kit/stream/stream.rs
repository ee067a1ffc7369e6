//! Token 流实现
//!
//! 游标落在逻辑 token 序列上（skip token 已滤除）。两种后备来源：
//! - 物化：预先算好的固定 token 序列
//! - 惰性：按需从 lexer 拉取，缓存只向前增长，已缓存的下标
//!   永远不会重新向 lexer 索取——反复回溯不会重复驱动 lexer
//!
//! 游标只会向前移动，唯一的例外是回溯组合子把它显式恢复到
//! 之前快照的值。

use super::error::{ParseError, ParseErrorKind};
use super::parser::{ParseResult, Parser};
use crate::kit::lexer::core::Token;
use crate::kit::lexer::lexer::Lexer;
use std::fmt;
use std::sync::Arc;
use tokki_config::StreamConfig;
use tokki_log::{trace, Logger};

enum TokenSource<K> {
    Fixed(Vec<Token<K>>),
    Lazy {
        lexer: Lexer<K>,
        cache: Vec<Token<K>>,
        done: bool,
    },
}

/// 逻辑 token 序列上的游标
pub struct TokenStream<K> {
    source: TokenSource<K>,
    cursor: usize,
    logger: Arc<Logger>,
}

impl<K: Clone + PartialEq + fmt::Debug> TokenStream<K> {
    /// 从物化的 token 序列创建流
    pub fn from_tokens(tokens: Vec<Token<K>>) -> Self {
        Self {
            source: TokenSource::Fixed(tokens),
            cursor: 0,
            logger: Logger::noop(),
        }
    }

    /// 从 lexer 创建惰性流（继承 lexer 的 logger）
    pub fn from_lexer(lexer: Lexer<K>) -> Self {
        Self::from_lexer_with_config(lexer, &StreamConfig::default())
    }

    /// 从 lexer 创建惰性流（带显式配置）
    pub fn from_lexer_with_config(lexer: Lexer<K>, config: &StreamConfig) -> Self {
        let logger = lexer.logger();
        Self {
            source: TokenSource::Lazy {
                lexer,
                cache: Vec::with_capacity(config.token_cache_capacity),
                done: false,
            },
            cursor: 0,
            logger,
        }
    }

    /// 设置 logger
    pub fn with_logger(mut self, logger: Arc<Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// 当前游标（逻辑下标）
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 取出逻辑下标处的 token，必要时从 lexer 向前拉取补满缓存
    fn token_at(&mut self, index: usize) -> ParseResult<Option<Token<K>>> {
        match &mut self.source {
            TokenSource::Fixed(tokens) => Ok(tokens.get(index).cloned()),
            TokenSource::Lazy { lexer, cache, done } => {
                while cache.len() <= index && !*done {
                    match lexer.next_token()? {
                        Some(lexed) => {
                            if !lexed.skip {
                                cache.push(lexed.token);
                            }
                        }
                        None => *done = true,
                    }
                }
                Ok(cache.get(index).cloned())
            }
        }
    }

    /// 读取游标处的 token 并前进一格
    ///
    /// 流耗尽返回 `Ok(None)`（终止信号，不是错误）。
    pub fn next_token(&mut self) -> ParseResult<Option<Token<K>>> {
        let token = self.token_at(self.cursor)?;
        if token.is_some() {
            self.cursor += 1;
        }
        Ok(token)
    }

    /// 严格消费：下一个 token 必须属于 `expected` 中的类型
    ///
    /// 流耗尽或类型不符都返回可恢复的 [`ParseError`]。类型不符的
    /// token 在判定前已被读走，游标停在它之后；需要回到原位的
    /// 调用方走 [`try_parse`](Self::try_parse) 之类的回溯组合子。
    pub fn next_token_strict(&mut self, expected: &[K]) -> ParseResult<Token<K>> {
        let expected_names = || {
            expected
                .iter()
                .map(|kind| format!("{kind:?}"))
                .collect::<Vec<_>>()
        };

        match self.next_token()? {
            None => Err(ParseError::at_eof(ParseErrorKind::UnexpectedEndOfInput {
                expected: expected_names(),
            })),
            Some(token) => {
                if expected.contains(token.kind()) {
                    Ok(token)
                } else {
                    let position = token.span().begin();
                    Err(ParseError::at(
                        ParseErrorKind::UnexpectedToken {
                            expected: expected_names(),
                            found: format!("{:?}", token.kind()),
                        },
                        position,
                    ))
                }
            }
        }
    }

    /// 调用必选语法规则
    ///
    /// 实例化一个全新的 `P` 并在本流上运行。任何失败原样传播，
    /// 游标停在失败发生的地方。
    pub fn parse<P: Parser<K> + Default>(&mut self) -> ParseResult<P::Output> {
        P::default().parse(self)
    }

    /// 调用可选语法规则
    ///
    /// 先快照游标。规则报告可恢复的不匹配时，恢复游标到快照值并
    /// 返回 `Ok(None)`；成功时游标留在规则停下的位置。底层
    /// tokenization 失败不可恢复，照常传播。
    pub fn try_parse<P: Parser<K> + Default>(&mut self) -> ParseResult<Option<P::Output>> {
        let snapshot = self.cursor;
        match P::default().parse(self) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.recoverable() => {
                trace!(
                    self.logger,
                    "Backtracking to cursor {} after mismatch: {}",
                    snapshot,
                    err
                );
                self.cursor = snapshot;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// 前瞻：试运行语法规则，无论成败都恢复游标
    ///
    /// 用于不消费输入的语法分支判定。
    pub fn peek<P: Parser<K> + Default>(&mut self) -> ParseResult<bool> {
        let snapshot = self.cursor;
        let outcome = P::default().parse(self);
        self.cursor = snapshot;
        match outcome {
            Ok(_) => Ok(true),
            Err(err) if err.recoverable() => Ok(false),
            Err(err) => Err(err),
        }
    }
}
