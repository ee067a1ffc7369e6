//! 可复用的分析设施
//!
//! - [`lexer`]: 规则驱动的词法分析套件
//! - [`stream`]: 支持回溯的 token 流与解析器引擎

pub mod lexer;
pub mod stream;
