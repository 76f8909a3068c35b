/// 测距时间间隔的平均值计算

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::config::OutputConfig;
use crate::error::ExtractError;
use crate::extractor::record::{fmt_float, DeviceId, RangingRecord};

/// 一次平均值计算的结果
#[derive(Clone, Debug, Serialize)]
pub struct AverageReport {
    /// 最后一条记录的发起设备，用于报告文件命名
    pub initiator: DeviceId,
    /// 平均测距间隔（毫秒）
    pub average_ms: f64,
    /// 参与计算的记录条数
    pub sample_count: usize,
    /// 报告生成时间
    pub generated_at: DateTime<Utc>,
}

impl AverageReport {
    /// 报告文件中的单行文本
    pub fn report_line(&self) -> String {
        format!("avg interval in milliseconds:{}", fmt_float(self.average_ms))
    }
}

/// 时间间隔平均器
///
/// 消费时间间隔格式的完整记录序列，累加毫秒间隔并求平均。
/// 报告文件按最后一条记录的发起设备命名并整体覆写，
/// 因此一次调用只应处理单一设备的日志；
/// 混合日志中不同设备的结果会互相覆盖。
#[derive(Clone, Debug, Default)]
pub struct IntervalAverager {
    config: OutputConfig,
}

impl IntervalAverager {
    /// 使用指定输出配置创建平均器
    pub fn new(config: OutputConfig) -> Self {
        IntervalAverager { config }
    }

    /// 消费记录序列并计算平均值
    ///
    /// 没有任何记录或没有任何间隔字段时返回 NoMatchingLines，
    /// 保证不会发生除零。
    pub fn run(
        &self,
        records: impl IntoIterator<Item = RangingRecord>,
    ) -> Result<AverageReport, ExtractError> {
        let mut sum_ms = 0.0;
        let mut count = 0usize;
        let mut last_initiator: Option<DeviceId> = None;

        for record in records {
            let Some(interval_ms) = record.interval_ms() else {
                continue;
            };
            sum_ms += interval_ms;
            count += 1;
            last_initiator = Some(record.initiator);
        }

        let Some(initiator) = last_initiator else {
            return Err(ExtractError::NoMatchingLines);
        };

        Ok(AverageReport {
            initiator,
            average_ms: sum_ms / count as f64,
            sample_count: count,
            generated_at: Utc::now(),
        })
    }

    /// 把报告覆写到 `AVGtemp[<id>].txt`，返回文件路径
    pub fn write_report(&self, report: &AverageReport) -> Result<PathBuf, ExtractError> {
        let path = self.config.report_file_path(&report.initiator);
        fs::write(&path, report.report_line())?;

        debug!(
            path = %path.display(),
            samples = report.sample_count,
            average_ms = report.average_ms,
            "wrote average interval report"
        );
        Ok(path)
    }
}
