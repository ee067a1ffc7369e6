//! 日志环形缓冲区
//!
//! 固定容量，写满后覆盖最旧的记录。主要用途：
//! - 测试中捕获并断言日志内容
//! - 崩溃时转储最后 N 条日志

use crate::logger::LogSink;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

struct RingState {
    records: VecDeque<Record>,
    dropped: usize,
}

/// 日志环形缓冲区
pub struct LogRingBuffer {
    capacity: usize,
    state: Mutex<RingState>,
}

impl LogRingBuffer {
    /// 创建指定容量的环形缓冲区
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(Self {
            capacity,
            state: Mutex::new(RingState {
                records: VecDeque::with_capacity(capacity),
                dropped: 0,
            }),
        })
    }

    /// 写入一条记录，满了覆盖最旧的
    pub fn push(&self, record: Record) {
        if let Ok(mut state) = self.state.lock() {
            if state.records.len() == self.capacity {
                state.records.pop_front();
                state.dropped += 1;
            }
            state.records.push_back(record);
        }
    }

    /// 导出当前所有记录（从旧到新）
    pub fn dump_records(&self) -> Vec<Record> {
        self.state
            .lock()
            .map(|state| state.records.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// 导出为格式化文本
    pub fn dump(&self) -> String {
        self.dump_records()
            .iter()
            .map(|r| r.format())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 清空缓冲区
    pub fn clear(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.records.clear();
            state.dropped = 0;
        }
    }

    /// 当前记录数
    pub fn len(&self) -> usize {
        self.state.lock().map(|state| state.records.len()).unwrap_or(0)
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 缓冲区容量
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 因覆盖被丢弃的记录数
    pub fn dropped_count(&self) -> usize {
        self.state.lock().map(|state| state.dropped).unwrap_or(0)
    }
}

impl LogSink for Arc<LogRingBuffer> {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Level;

    fn record(message: &str) -> Record {
        Record::new(Level::Info, "test", message)
    }

    #[test]
    fn test_push_and_dump() {
        let ring = LogRingBuffer::new(10);
        ring.push(record("one"));
        ring.push(record("two"));

        let records = ring.dump_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "one");
        assert_eq!(records[1].message, "two");
    }

    #[test]
    fn test_overwrite_when_full() {
        let ring = LogRingBuffer::new(2);
        ring.push(record("one"));
        ring.push(record("two"));
        ring.push(record("three"));

        let records = ring.dump_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "two");
        assert_eq!(records[1].message, "three");
        assert_eq!(ring.dropped_count(), 1);
    }

    #[test]
    fn test_clear() {
        let ring = LogRingBuffer::new(4);
        ring.push(record("one"));
        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.dropped_count(), 0);
    }

    #[test]
    fn test_dump_text() {
        let ring = LogRingBuffer::new(4);
        ring.push(record("needle"));
        assert!(ring.dump().contains("needle"));
    }
}
