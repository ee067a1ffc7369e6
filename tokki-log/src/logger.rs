//! 日志器实现

use crate::record::{Level, Record};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

/// 日志输出目标 trait
pub trait LogSink: Send + Sync {
    /// 写入日志记录
    fn write(&self, record: &Record);
}

/// 日志器配置和状态
pub struct Logger {
    /// 当前日志级别（原子存储，可动态调整）
    level: AtomicU8,
    /// 输出目标列表
    sinks: Mutex<Vec<Box<dyn LogSink>>>,
}

impl Logger {
    /// 创建新的日志器
    pub fn new(level: Level) -> Arc<Self> {
        Arc::new(Logger {
            level: AtomicU8::new(level as u8),
            sinks: Mutex::new(Vec::new()),
        })
    }

    /// 添加输出目标（链式）
    pub fn with_sink<S: LogSink + 'static>(self: Arc<Self>, sink: S) -> Arc<Self> {
        self.add_sink(sink);
        self
    }

    /// 添加输出目标
    pub fn add_sink<S: LogSink + 'static>(&self, sink: S) {
        if let Ok(mut sinks) = self.sinks.lock() {
            sinks.push(Box::new(sink));
        }
    }

    /// 动态设置日志级别
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::Relaxed);
    }

    /// 获取当前日志级别
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Info)
    }

    /// 检查指定级别是否启用
    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// 记录日志（宏的内部入口）
    #[inline(never)]
    pub fn log(&self, level: Level, target: &'static str, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let record = Record::new(level, target, message);
        if let Ok(sinks) = self.sinks.lock() {
            for sink in sinks.iter() {
                sink.write(&record);
            }
        }
    }

    /// 创建静默日志器（测试或禁用日志的场景）
    pub fn noop() -> Arc<Self> {
        // Error 级别且没有任何 sink
        Self::new(Level::Error)
    }
}

#[cfg(feature = "stdout")]
/// 标准输出 sink
pub struct StdoutSink;

#[cfg(feature = "stdout")]
impl LogSink for StdoutSink {
    fn write(&self, record: &Record) {
        println!("{}", record.format());
    }
}

#[cfg(feature = "stderr")]
/// 标准错误 sink
pub struct StderrSink;

#[cfg(feature = "stderr")]
impl LogSink for StderrSink {
    fn write(&self, record: &Record) {
        eprintln!("{}", record.format());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring_buffer::LogRingBuffer;

    #[test]
    fn test_logger_level_filtering() {
        let ring = LogRingBuffer::new(10);
        let logger = Logger::new(Level::Warn).with_sink(ring.clone());

        logger.log(Level::Debug, "test", "dropped");
        logger.log(Level::Error, "test", "kept");

        let records = ring.dump_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::Error);
    }

    #[test]
    fn test_logger_set_level() {
        let logger = Logger::new(Level::Error);
        assert!(!logger.is_enabled(Level::Debug));

        logger.set_level(Level::Trace);
        assert!(logger.is_enabled(Level::Debug));
    }

    #[test]
    fn test_noop_logger_writes_nothing() {
        let logger = Logger::noop();
        // 无 sink，调用安全且无输出
        logger.log(Level::Error, "test", "nowhere");
        assert_eq!(logger.level(), Level::Error);
    }

    #[test]
    fn test_multiple_sinks() {
        let ring_a = LogRingBuffer::new(10);
        let ring_b = LogRingBuffer::new(10);
        let logger = Logger::new(Level::Info)
            .with_sink(ring_a.clone())
            .with_sink(ring_b.clone());

        logger.log(Level::Info, "test", "fanout");

        assert_eq!(ring_a.len(), 1);
        assert_eq!(ring_b.len(), 1);
    }
}
