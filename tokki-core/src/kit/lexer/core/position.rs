//! 源代码位置追踪
//!
//! 坐标系统：line/column 均为 1-based，面向人类可读的错误显示。
//! 字节偏移只存在于 lexer 内部，从不对外暴露。

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// 源代码坐标
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based，按 Unicode 码点计数
    pub column: usize,
}

impl Position {
    /// 创建新位置
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// 文件起始位置
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Lexer 会话标识
///
/// 每个构建出的 lexer 实例持有一个全新的标识，它产出的所有 span
/// 都携带该标识。标识不透明，只按相等性比较，用来阻止跨实例的
/// span 合并。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionId(u64);

impl SessionId {
    /// 分配一个新的会话标识（进程内唯一）
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        SessionId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// 合并来自不同 lexer 会话的 span
///
/// 这是调用方的编程错误，不是可恢复的运行时状况。
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("cannot join spans from different lexer sessions ('{left}' vs '{right}')")]
pub struct IncompatibleSpanError {
    /// 左侧 span 的文件名
    pub left: String,
    /// 右侧 span 的文件名
    pub right: String,
}

/// 源代码范围
///
/// `begin` 是 token 第一个字符的位置，`end` 是最后一个字符之后的
/// 位置（排他端点）。不可变，只能由 lexer 构造。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    begin: Position,
    end: Position,
    filename: Arc<str>,
    session: SessionId,
}

impl Span {
    pub(crate) fn new(begin: Position, end: Position, filename: Arc<str>, session: SessionId) -> Self {
        Self {
            begin,
            end,
            filename,
            session,
        }
    }

    /// 起始位置
    pub fn begin(&self) -> Position {
        self.begin
    }

    /// 结束位置（排他）
    pub fn end(&self) -> Position {
        self.end
    }

    /// span 所属的文件名
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// 合并两个 span，得到覆盖两者的最小范围
    ///
    /// 语法规则用它把子结果的 span 组合成更大构造的范围。
    /// 两个 span 必须来自同一 lexer 会话，否则返回
    /// [`IncompatibleSpanError`]。
    pub fn join(&self, other: &Span) -> Result<Span, IncompatibleSpanError> {
        if self.session != other.session {
            return Err(IncompatibleSpanError {
                left: self.filename.to_string(),
                right: other.filename.to_string(),
            });
        }
        Ok(Span {
            begin: self.begin.min(other.begin),
            end: self.end.max(other.end),
            filename: Arc::clone(&self.filename),
            session: self.session,
        })
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}..{}", self.filename, self.begin, self.end)
    }
}
