/// 日志文件扫描器
///
/// 对文本日志做单遍线性扫描，逐行应用匹配模式，
/// 产出惰性的测距记录序列。不匹配的行静默跳过。

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use tracing::debug;

use crate::error::ExtractError;
use crate::extractor::pattern::LinePattern;
use crate::extractor::record::RangingRecord;

/// 一次扫描的统计信息
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
    /// 匹配成功的行数
    pub matched: usize,
    /// 被跳过的行数（不匹配或数值畸形）
    pub skipped: usize,
}

impl ExtractStats {
    /// 已读取的总行数
    pub fn total_lines(&self) -> usize {
        self.matched + self.skipped
    }
}

/// 日志行提取器
///
/// 持有一个行模式，可对任意 BufRead 数据源做扫描。
/// 产出的序列有限（受文件长度约束），消费后不可重放，
/// 重新扫描需要重新打开数据源。
#[derive(Clone, Debug)]
pub struct LogExtractor {
    pattern: LinePattern,
}

impl LogExtractor {
    /// 使用指定模式创建提取器
    pub fn new(pattern: LinePattern) -> Self {
        LogExtractor { pattern }
    }

    /// 获取提取器使用的模式
    pub fn pattern(&self) -> &LinePattern {
        &self.pattern
    }

    /// 扫描一个数据源，返回惰性记录迭代器
    pub fn scan<R: BufRead>(&self, reader: R) -> Records<'_, R> {
        Records {
            pattern: &self.pattern,
            lines: reader.lines(),
            stats: ExtractStats::default(),
        }
    }

    /// 打开日志文件并扫描
    ///
    /// 路径不存在或不是普通文件时返回 LogFileNotFound。
    pub fn scan_path(&self, path: &Path) -> Result<Records<'_, BufReader<File>>, ExtractError> {
        if !path.is_file() {
            return Err(ExtractError::LogFileNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = File::open(path)?;
        debug!(path = %path.display(), pattern = %self.pattern, "scanning log file");
        Ok(self.scan(BufReader::new(file)))
    }

    /// 扫描并收集全部记录，同时返回统计信息
    pub fn collect_counted<R: BufRead>(&self, reader: R) -> (Vec<RangingRecord>, ExtractStats) {
        let mut records = self.scan(reader);
        let collected: Vec<RangingRecord> = records.by_ref().collect();
        (collected, records.stats())
    }
}

impl Default for LogExtractor {
    fn default() -> Self {
        LogExtractor::new(LinePattern::default())
    }
}

/// 扫描产出的记录迭代器
pub struct Records<'a, R> {
    pattern: &'a LinePattern,
    lines: Lines<R>,
    stats: ExtractStats,
}

impl<R: BufRead> Records<'_, R> {
    /// 获取到目前为止的统计信息
    ///
    /// 迭代结束后调用即为整个文件的统计。
    pub fn stats(&self) -> ExtractStats {
        self.stats
    }
}

impl<R: BufRead> Iterator for Records<'_, R> {
    type Item = RangingRecord;

    fn next(&mut self) -> Option<RangingRecord> {
        for line in self.lines.by_ref() {
            // 读行失败按跳过处理，与不匹配的噪声行同等对待
            let Ok(line) = line else {
                self.stats.skipped += 1;
                continue;
            };

            match self.pattern.parse_line(&line) {
                Some(record) => {
                    self.stats.matched += 1;
                    return Some(record);
                }
                None => {
                    self.stats.skipped += 1;
                }
            }
        }
        None
    }
}
