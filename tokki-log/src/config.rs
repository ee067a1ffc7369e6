//! 日志配置
//!
//! 提供便捷的日志初始化入口。

use crate::logger::Logger;
use crate::record::Level;
use crate::ring_buffer::LogRingBuffer;
use std::sync::Arc;

/// 日志输出目标配置
#[derive(Clone, Debug, PartialEq)]
pub enum OutputConfig {
    /// 输出到标准输出
    #[cfg(feature = "stdout")]
    Stdout,
    /// 输出到标准错误
    #[cfg(feature = "stderr")]
    Stderr,
    /// 输出到环形缓冲区（容量）
    RingBuffer(usize),
}

/// 日志配置
///
/// # 示例
///
/// ```
/// use tokki_log::{Level, LogConfig};
///
/// let (logger, ring) = LogConfig::new(Level::Debug).with_ring_buffer(1000).init();
/// assert!(ring.is_some());
/// assert!(logger.is_enabled(Level::Debug));
/// ```
#[derive(Clone, Debug)]
pub struct LogConfig {
    /// 日志级别
    pub level: Level,
    /// 输出目标列表
    pub outputs: Vec<OutputConfig>,
}

impl LogConfig {
    /// 创建指定级别的空配置
    pub fn new(level: Level) -> Self {
        Self {
            level,
            outputs: Vec::new(),
        }
    }

    /// 开发环境推荐配置
    ///
    /// - Debug 级别
    /// - 输出到 stdout
    /// - 环形缓冲区 10000 条（用于崩溃转储）
    #[cfg(feature = "stdout")]
    pub fn dev() -> Self {
        Self {
            level: Level::Debug,
            outputs: vec![OutputConfig::Stdout, OutputConfig::RingBuffer(10000)],
        }
    }

    /// 测试环境配置（静默）
    pub fn test() -> Self {
        Self::new(Level::Error)
    }

    /// 添加 stdout 输出
    #[cfg(feature = "stdout")]
    pub fn with_stdout(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stdout) {
            self.outputs.push(OutputConfig::Stdout);
        }
        self
    }

    /// 添加 stderr 输出
    #[cfg(feature = "stderr")]
    pub fn with_stderr(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stderr) {
            self.outputs.push(OutputConfig::Stderr);
        }
        self
    }

    /// 添加环形缓冲区输出
    pub fn with_ring_buffer(mut self, capacity: usize) -> Self {
        self.outputs.push(OutputConfig::RingBuffer(capacity));
        self
    }

    /// 初始化日志系统
    ///
    /// 返回 (logger, Option<ring_buffer>)。
    /// 如果配置了环形缓冲区，返回它以便后续转储。
    pub fn init(self) -> (Arc<Logger>, Option<Arc<LogRingBuffer>>) {
        let logger = Logger::new(self.level);
        let mut ring_buffer: Option<Arc<LogRingBuffer>> = None;

        for output in self.outputs {
            match output {
                #[cfg(feature = "stdout")]
                OutputConfig::Stdout => {
                    logger.add_sink(crate::logger::StdoutSink);
                }
                #[cfg(feature = "stderr")]
                OutputConfig::Stderr => {
                    logger.add_sink(crate::logger::StderrSink);
                }
                OutputConfig::RingBuffer(capacity) => {
                    let ring = LogRingBuffer::new(capacity);
                    ring_buffer = Some(Arc::clone(&ring));
                    logger.add_sink(ring);
                }
            }
        }

        (logger, ring_buffer)
    }
}
