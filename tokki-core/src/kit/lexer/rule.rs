//! TokenRule trait 定义
//!
//! 所有 token 匹配规则都实现此 trait。lexer 按注册顺序逐个询问
//! 规则，先给出非零长度匹配的规则胜出（不是最长匹配）。

use super::core::Position;

/// 一次成功匹配的报告
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatch<K> {
    /// 匹配前缀的字节长度，必须落在字符边界上
    ///
    /// 报告 0 会被 lexer 当作"未匹配"处理并继续尝试后续规则，
    /// 因此空 token 不可表示（这同时挡住了零宽匹配导致的死循环）。
    pub length: usize,
    /// token 类型标签
    pub kind: K,
    /// 是否从逻辑 token 序列中滤除（空白、注释等）
    ///
    /// 位置簿记不受影响，lexer 总是照常前进。
    pub skip: bool,
}

/// 规则可见的 lexer 上下文（只读）
///
/// 供需要感知环境的规则使用，例如按语法定制转义约定。
#[derive(Debug, Clone, Copy)]
pub struct LexContext<'a> {
    filename: &'a str,
    position: Position,
}

impl<'a> LexContext<'a> {
    pub(crate) fn new(filename: &'a str, position: Position) -> Self {
        Self { filename, position }
    }

    /// 正在分析的文件名
    pub fn filename(&self) -> &str {
        self.filename
    }

    /// 当前位置（即待匹配剩余输入的起点）
    pub fn position(&self) -> Position {
        self.position
    }
}

/// 词法规则 trait
///
/// `rest` 是尚未消耗的输入剩余部分，匹配必须锚定在它的偏移 0 处。
pub trait TokenRule<K> {
    /// 尝试匹配，未匹配返回 `None`
    fn try_read(&self, rest: &str, cx: &LexContext<'_>) -> Option<RuleMatch<K>>;
}

/// 闭包规则适配器
///
/// 把一个函数包装成 [`TokenRule`]，便于内联定义简单规则：
///
/// ```
/// use tokki_core::kit::lexer::{LexContext, RuleFn, RuleMatch};
///
/// let digit = RuleFn(|rest: &str, _cx: &LexContext<'_>| {
///     let c = rest.chars().next()?;
///     c.is_ascii_digit().then(|| RuleMatch {
///         length: 1,
///         kind: "DIGIT",
///         skip: false,
///     })
/// });
/// ```
pub struct RuleFn<F>(pub F);

impl<K, F> TokenRule<K> for RuleFn<F>
where
    F: Fn(&str, &LexContext<'_>) -> Option<RuleMatch<K>>,
{
    fn try_read(&self, rest: &str, cx: &LexContext<'_>) -> Option<RuleMatch<K>> {
        (self.0)(rest, cx)
    }
}
