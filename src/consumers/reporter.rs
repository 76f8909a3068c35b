/// 控制台测距结果输出

use std::io::Write;

use crate::error::ExtractError;
use crate::extractor::record::{fmt_float, RangingRecord};

/// 输出格式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// 人类可读的单行文本
    #[default]
    Text,
    /// 每条记录一个 JSON 对象，供下游管道消费
    Json,
}

/// 测距结果报告器
///
/// 把每条记录写成一行输出，无持久状态。
/// 写入目标可以是 stdout，也可以是测试用的内存缓冲。
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
    format: ReportFormat,
}

impl<W: Write> ConsoleReporter<W> {
    /// 创建文本格式报告器
    pub fn new(out: W) -> Self {
        ConsoleReporter {
            out,
            format: ReportFormat::Text,
        }
    }

    /// 指定输出格式
    pub fn with_format(out: W, format: ReportFormat) -> Self {
        ConsoleReporter { out, format }
    }

    /// 输出一条记录
    pub fn report(&mut self, record: &RangingRecord) -> Result<(), ExtractError> {
        match self.format {
            ReportFormat::Text => writeln!(
                self.out,
                "Distance [{}->{}] (dist {}) (conf {})",
                record.initiator,
                record.responder,
                record.distance_mm,
                fmt_float(record.confidence)
            )?,
            ReportFormat::Json => {
                // serde_json 对本结构体的序列化不会失败，映射为 io 错误以统一处理
                let json = serde_json::to_string(record)
                    .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
                writeln!(self.out, "{json}")?;
            }
        }
        Ok(())
    }

    /// 输出一批记录，返回输出的条数
    pub fn report_all(
        &mut self,
        records: impl IntoIterator<Item = RangingRecord>,
    ) -> Result<usize, ExtractError> {
        let mut reported = 0;
        for record in records {
            self.report(&record)?;
            reported += 1;
        }
        Ok(reported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::record::DeviceId;

    fn record() -> RangingRecord {
        RangingRecord::new(
            DeviceId::parse("11:0c").unwrap(),
            DeviceId::parse("19:15").unwrap(),
            169,
            1.0,
        )
    }

    #[test]
    fn test_text_report_line() {
        let mut buf = Vec::new();
        let mut reporter = ConsoleReporter::new(&mut buf);
        reporter.report(&record()).unwrap();

        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "Distance [11:0c->19:15] (dist 169) (conf 1.0)\n");
    }

    #[test]
    fn test_json_report_line() {
        let mut buf = Vec::new();
        let mut reporter = ConsoleReporter::with_format(&mut buf, ReportFormat::Json);
        reporter.report(&record()).unwrap();

        let out = String::from_utf8(buf).unwrap();
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["initiator"], "11:0c");
        assert_eq!(value["distance_mm"], 169);
        assert_eq!(value["confidence"], 1.0);
        // 无间隔字段时不序列化 interval_s
        assert!(value.get("interval_s").is_none());
    }

    #[test]
    fn test_report_all_counts_records() {
        let mut buf = Vec::new();
        let mut reporter = ConsoleReporter::new(&mut buf);
        let n = reporter.report_all(vec![record(), record()]).unwrap();
        assert_eq!(n, 2);
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 2);
    }
}
