//! 词法错误类型

use super::core::Position;
use thiserror::Error;

/// 词法错误
///
/// tokenization 过程中的错误对整轮分析是致命的：不产出部分
/// token 列表，调用方无法在本轮内恢复。
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    /// 当前偏移处没有任何规则给出非零长度匹配
    #[error("Unrecognized input at {filename}:{position}: '{remainder}'")]
    UnrecognizedInput {
        /// 正在分析的文件名
        filename: String,
        /// 出错位置
        position: Position,
        /// 尚未消耗的输入剩余部分
        remainder: String,
    },
}

impl LexError {
    /// 出错位置
    pub fn position(&self) -> Position {
        match self {
            LexError::UnrecognizedInput { position, .. } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_input_display() {
        let err = LexError::UnrecognizedInput {
            filename: "demo.tk".to_string(),
            position: Position::new(2, 5),
            remainder: "@rest".to_string(),
        };

        let text = err.to_string();
        assert!(text.contains("Unrecognized input"));
        assert!(text.contains("demo.tk:2:5"));
        assert!(text.contains("'@rest'"));
    }

    #[test]
    fn test_error_position() {
        let err = LexError::UnrecognizedInput {
            filename: "demo.tk".to_string(),
            position: Position::new(7, 1),
            remainder: "?".to_string(),
        };
        assert_eq!(err.position(), Position::new(7, 1));
    }
}
