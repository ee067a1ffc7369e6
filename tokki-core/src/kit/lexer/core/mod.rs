//! 通用位置与 token 类型

pub mod position;
pub mod token;

pub use position::{IncompatibleSpanError, Position, SessionId, Span};
pub use token::Token;
