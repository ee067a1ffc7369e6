//! tokki-log - 结构化日志系统
//!
//! 为 Tokki 工具箱设计的日志系统，特点：
//! - **显式传递**：无全局 logger，`Arc<Logger>` 通过构造函数传入
//! - **非阻塞**：环形缓冲区满了覆盖旧数据，日志不卡主流程
//! - **可观测**：测试中通过 `LogRingBuffer` 捕获并断言日志内容
//!
//! # 快速开始
//!
//! ```ignore
//! use tokki_log::{LogConfig, debug};
//!
//! let (logger, ring) = LogConfig::dev().init();
//! debug!(logger, "lexer ready, {} rules", 3);
//! ```
//!
//! 静默场景（测试、库默认值）使用 [`Logger::noop`]。

mod config;
mod logger;
mod macros;
mod record;
mod ring_buffer;

pub use config::{LogConfig, OutputConfig};
pub use logger::{LogSink, Logger};
pub use record::{Level, Record};
pub use ring_buffer::LogRingBuffer;

#[cfg(feature = "stdout")]
pub use logger::StdoutSink;

#[cfg(feature = "stderr")]
pub use logger::StderrSink;

/// 日志结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// 日志系统错误类型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO 错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 不支持的操作
    #[error("Operation not supported")]
    Unsupported,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Error > Level::Warn);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(format!("{}", Error::Unsupported), "Operation not supported");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("IO error"));
    }
}
