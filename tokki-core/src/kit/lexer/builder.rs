//! Lexer 构建器
//!
//! 按追加顺序累积规则（该顺序即匹配优先级），随后可以多次
//! `build` 出相互独立的 lexer 实例。

use super::lexer::Lexer;
use super::rule::TokenRule;
use std::fmt;
use std::sync::Arc;
use tokki_config::LexerConfig;
use tokki_log::Logger;

/// Lexer 构建器
///
/// ```
/// use tokki_core::kit::lexer::{LexerBuilder, StockRule};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Kind { Ident, Ws }
///
/// let builder = LexerBuilder::new()
///     .rule(StockRule::identifier(Kind::Ident))
///     .rule(StockRule::whitespace(Kind::Ws));
///
/// let mut lexer = builder.build("hello world", Some("demo.tk"));
/// let tokens = lexer.remaining_tokens().unwrap();
/// assert_eq!(tokens.len(), 2);
/// ```
pub struct LexerBuilder<K> {
    rules: Vec<Arc<dyn TokenRule<K>>>,
    config: LexerConfig,
    logger: Arc<Logger>,
}

impl<K: Clone + PartialEq + fmt::Debug> LexerBuilder<K> {
    /// 创建空构建器（默认配置、静默 logger）
    pub fn new() -> Self {
        Self::with_config(LexerConfig::default())
    }

    /// 创建带显式配置的构建器
    pub fn with_config(config: LexerConfig) -> Self {
        Self {
            rules: Vec::new(),
            config,
            logger: Logger::noop(),
        }
    }

    /// 设置 logger，会传递给所有后续构建的 lexer
    pub fn with_logger(mut self, logger: Arc<Logger>) -> Self {
        self.logger = logger;
        self
    }

    /// 追加一条规则
    ///
    /// 追加顺序就是匹配优先级：最特殊的规则必须先注册。
    pub fn rule(mut self, rule: impl TokenRule<K> + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// 构建绑定到给定文本的 lexer
    ///
    /// 规则列表做防御性拷贝，构建器之后仍可复用；每个 lexer 获得
    /// 全新的会话标识。`filename` 缺省为配置中的匿名标记。
    pub fn build(&self, text: &str, filename: Option<&str>) -> Lexer<K> {
        let filename: Arc<str> =
            Arc::from(filename.unwrap_or(self.config.anonymous_filename.as_str()));
        Lexer::new(
            text,
            self.rules.clone(),
            filename,
            Arc::clone(&self.logger),
        )
    }
}

impl<K: Clone + PartialEq + fmt::Debug> Default for LexerBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kit::lexer::rules::StockRule;

    #[derive(Debug, Clone, PartialEq)]
    enum Kind {
        Ident,
        Ws,
    }

    fn builder() -> LexerBuilder<Kind> {
        LexerBuilder::new()
            .rule(StockRule::identifier(Kind::Ident))
            .rule(StockRule::whitespace(Kind::Ws))
    }

    #[test]
    fn test_default_filename_is_anonymous() {
        let mut lexer = builder().build("x", None);
        assert_eq!(lexer.filename(), "<anonymous>");
        let tokens = lexer.remaining_tokens().unwrap();
        assert_eq!(tokens[0].span().filename(), "<anonymous>");
    }

    #[test]
    fn test_explicit_filename() {
        let lexer = builder().build("x", Some("demo.tk"));
        assert_eq!(lexer.filename(), "demo.tk");
    }

    #[test]
    fn test_custom_anonymous_marker() {
        let config = LexerConfig {
            anonymous_filename: "<repl>".to_string(),
        };
        let lexer = LexerBuilder::<Kind>::with_config(config)
            .rule(StockRule::identifier(Kind::Ident))
            .build("x", None);
        assert_eq!(lexer.filename(), "<repl>");
    }

    #[test]
    fn test_builder_is_reusable() {
        let builder = builder();
        let mut first = builder.build("one", None);
        let mut second = builder.build("two", None);

        assert_eq!(first.remaining_tokens().unwrap()[0].raw(), "one");
        assert_eq!(second.remaining_tokens().unwrap()[0].raw(), "two");
    }

    #[test]
    fn test_built_lexers_have_distinct_sessions() {
        let builder = builder();
        let mut first = builder.build("a", None);
        let mut second = builder.build("b", None);

        let a = first.remaining_tokens().unwrap().remove(0);
        let b = second.remaining_tokens().unwrap().remove(0);

        // 同一构建器的两个实例也不允许跨实例合并 span
        assert!(a.span().join(b.span()).is_err());
    }

    #[test]
    fn test_same_session_joins_succeed() {
        let mut lexer = builder().build("a b", None);
        let tokens = lexer.remaining_tokens().unwrap();

        let joined = tokens[0].span().join(tokens[1].span()).unwrap();
        assert_eq!(joined.begin(), tokens[0].span().begin());
        assert_eq!(joined.end(), tokens[1].span().end());
    }
}
