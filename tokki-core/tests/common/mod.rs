//! 测试辅助工具
//!
//! 提供端到端测试用的演示语言：标识符、整数、实数、
//! 定界字符串、标点和空白，以及一个小型解析器。

use tokki_core::kit::stream::values::{self, TokenValue};
use tokki_core::{LexerBuilder, Parser, ParseResult, StockRule, TokenStream};

/// 演示语言的 token 类型
#[derive(Debug, Clone, PartialEq)]
pub enum DemoKind {
    Whitespace,
    Identifier,
    Integer,
    Real,
    Str,
    Punct,
}

/// 构造演示语言的 lexer 构建器
pub fn demo_builder() -> LexerBuilder<DemoKind> {
    LexerBuilder::new()
        .rule(StockRule::whitespace(DemoKind::Whitespace))
        .rule(StockRule::identifier(DemoKind::Identifier))
        .rule(StockRule::real(DemoKind::Real))
        .rule(StockRule::integer(DemoKind::Integer))
        .rule(StockRule::string(DemoKind::Str))
        .rule(StockRule::punctuation(DemoKind::Punct))
}

/// 对一段源代码构造惰性 token 流
pub fn demo_stream(code: &str) -> TokenStream<DemoKind> {
    TokenStream::from_lexer(demo_builder().build(code, None))
}

/// 赋值语句：`ident = <值> ;`
///
/// 值可以是整数、实数或字符串。
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: String,
    pub value: String,
}

/// 赋值语句解析器
#[derive(Default)]
pub struct AssignmentParser;

impl Parser<DemoKind> for AssignmentParser {
    type Output = Assignment;

    fn parse(&self, ts: &mut TokenStream<DemoKind>) -> ParseResult<Assignment> {
        let name = values::literal(ts, DemoKind::Identifier)?;
        expect_punct(ts, "=")?;
        let value = value_parser(ts)?;
        expect_punct(ts, ";")?;
        Ok(Assignment {
            name: name.value,
            value: value.value,
        })
    }
}

/// 值：整数、实数或字符串之一
fn value_parser(ts: &mut TokenStream<DemoKind>) -> ParseResult<TokenValue<DemoKind>> {
    if let Some(v) = ts.try_parse::<RealValue>()? {
        return Ok(v);
    }
    if let Some(v) = ts.try_parse::<IntegerValue>()? {
        return Ok(v);
    }
    values::quoted(ts, DemoKind::Str, '\\')
}

#[derive(Default)]
struct RealValue;

impl Parser<DemoKind> for RealValue {
    type Output = TokenValue<DemoKind>;

    fn parse(&self, ts: &mut TokenStream<DemoKind>) -> ParseResult<TokenValue<DemoKind>> {
        values::number(ts, DemoKind::Real)
    }
}

#[derive(Default)]
struct IntegerValue;

impl Parser<DemoKind> for IntegerValue {
    type Output = TokenValue<DemoKind>;

    fn parse(&self, ts: &mut TokenStream<DemoKind>) -> ParseResult<TokenValue<DemoKind>> {
        values::number(ts, DemoKind::Integer)
    }
}

/// 消费一个指定文本的标点 token
pub fn expect_punct(ts: &mut TokenStream<DemoKind>, text: &str) -> ParseResult<()> {
    let token = ts.next_token_strict(&[DemoKind::Punct])?;
    if token.raw() == text {
        Ok(())
    } else {
        Err(tokki_core::ParseError::at(
            tokki_core::kit::stream::ParseErrorKind::UnexpectedToken {
                expected: vec![format!("'{}'", text)],
                found: format!("'{}'", token.raw()),
            },
            token.span().begin(),
        ))
    }
}
