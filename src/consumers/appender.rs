/// 按设备追加保存测距记录

use std::fs::OpenOptions;
use std::io::Write;

use tracing::debug;

use crate::config::OutputConfig;
use crate::error::ExtractError;
use crate::extractor::record::RangingRecord;

/// 设备数据追加器
///
/// 每条记录追加一行 `initiator,responder,distance_mm,confidence`
/// 到以发起设备命名的文件。每次写入独立完成一次打开/关闭，
/// 日志量小，简单性优先于吞吐。不去重，不校验取值范围。
#[derive(Clone, Debug, Default)]
pub struct DeviceAppender {
    config: OutputConfig,
}

impl DeviceAppender {
    /// 使用指定输出配置创建追加器
    pub fn new(config: OutputConfig) -> Self {
        DeviceAppender { config }
    }

    /// 追加一条记录，返回写入的目标文件路径
    pub fn append(&self, record: &RangingRecord) -> Result<std::path::PathBuf, ExtractError> {
        let path = self.config.device_file_path(&record.initiator);

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{}", record.csv_line())?;

        debug!(path = %path.display(), "appended ranging record");
        Ok(path)
    }

    /// 追加一批记录，返回成功写入的条数
    pub fn append_all(
        &self,
        records: impl IntoIterator<Item = RangingRecord>,
    ) -> Result<usize, ExtractError> {
        let mut written = 0;
        for record in records {
            self.append(&record)?;
            written += 1;
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::record::DeviceId;
    use std::fs;

    fn record(dist: u32, conf: f64) -> RangingRecord {
        RangingRecord::new(
            DeviceId::parse("11:0c").unwrap(),
            DeviceId::parse("19:15").unwrap(),
            dist,
            conf,
        )
    }

    #[test]
    fn test_append_creates_device_file() {
        let dir = tempfile::tempdir().unwrap();
        let appender = DeviceAppender::new(OutputConfig::new(dir.path()));

        let path = appender.append(&record(169, 1.0)).unwrap();
        assert_eq!(path, dir.path().join("Device[11:0c].txt"));

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "11:0c,19:15,169,1.0\n");
    }

    #[test]
    fn test_append_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let appender = DeviceAppender::new(OutputConfig::new(dir.path()));

        for i in 0..3 {
            appender.append(&record(100 + i, 0.9)).unwrap();
        }

        let content = fs::read_to_string(dir.path().join("Device[11:0c].txt")).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "11:0c,19:15,100,0.9");
        assert_eq!(lines[2], "11:0c,19:15,102,0.9");
    }

    #[test]
    fn test_records_split_by_initiator() {
        let dir = tempfile::tempdir().unwrap();
        let appender = DeviceAppender::new(OutputConfig::new(dir.path()));

        appender.append(&record(10, 0.8)).unwrap();
        appender
            .append(&RangingRecord::new(
                DeviceId::parse("aa:bb").unwrap(),
                DeviceId::parse("cc:dd").unwrap(),
                20,
                0.7,
            ))
            .unwrap();

        assert!(dir.path().join("Device[11:0c].txt").exists());
        assert!(dir.path().join("Device[aa:bb].txt").exists());
    }
}
