/// 子命令实现
///
/// 每个子命令对一个日志文件做一次完整扫描，
/// 提取逻辑共享 LogExtractor，仅输出策略不同。

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::OutputConfig;
use crate::consumers::{
    AverageReport, ConsoleReporter, DeviceAppender, IntervalAverager, ReportFormat,
};
use crate::error::ExtractError;
use crate::extractor::{ExtractStats, LinePattern, LogExtractor};

/// 校验命令行传入的日志文件参数
pub fn require_log_file(arg: Option<PathBuf>) -> Result<PathBuf, ExtractError> {
    arg.ok_or(ExtractError::MissingLogFile)
}

/// extract 子命令：把匹配的记录按发起设备追加保存
///
/// 零匹配不是错误，正常结束。
pub fn run_extract(log_file: &Path, config: &OutputConfig) -> Result<ExtractStats, ExtractError> {
    let extractor = LogExtractor::new(LinePattern::device_data());
    let mut records = extractor.scan_path(log_file)?;
    let appender = DeviceAppender::new(config.clone());

    for record in records.by_ref() {
        appender.append(&record)?;
    }

    let stats = records.stats();
    debug!(matched = stats.matched, skipped = stats.skipped, "extract finished");
    Ok(stats)
}

/// average 子命令：计算平均测距间隔并写报告文件
///
/// 零匹配返回 NoMatchingLines。
pub fn run_average(log_file: &Path, config: &OutputConfig) -> Result<AverageReport, ExtractError> {
    let extractor = LogExtractor::new(LinePattern::ranging_interval());
    let records = extractor.scan_path(log_file)?;
    let averager = IntervalAverager::new(config.clone());

    let report = averager.run(records)?;
    averager.write_report(&report)?;
    Ok(report)
}

/// report 子命令：把匹配的记录写到给定输出
///
/// 零匹配不是错误，正常结束。
pub fn run_report(
    log_file: &Path,
    out: impl std::io::Write,
    format: ReportFormat,
) -> Result<ExtractStats, ExtractError> {
    let extractor = LogExtractor::new(LinePattern::device_data());
    let mut records = extractor.scan_path(log_file)?;
    let mut reporter = ConsoleReporter::with_format(out, format);

    for record in records.by_ref() {
        reporter.report(&record)?;
    }

    let stats = records.stats();
    debug!(matched = stats.matched, skipped = stats.skipped, "report finished");
    Ok(stats)
}
