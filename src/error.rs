/// 错误类型定义
///
/// 所有错误对调用进程都是终止性的，不做重试。
/// 用户可见的错误文案与测试床原有脚本保持一致。

use std::path::PathBuf;

/// 日志解析工具的错误类型
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// 未提供日志文件路径
    #[error("Error: Missing log file.")]
    MissingLogFile,

    /// 日志文件不存在或不是普通文件
    #[error("Error: Log file not found.")]
    LogFileNotFound { path: PathBuf },

    /// 日志中没有任何匹配的测距行（平均值计算无数据可用）
    #[error("Error: No matching ranging lines in log file.")]
    NoMatchingLines,

    /// 设备标识符格式非法（期望 xx:xx）
    #[error("Error: Invalid device identifier '{raw}'.")]
    InvalidDeviceId { raw: String },

    /// 文件读写失败
    #[error("Error: {0}")]
    Io(#[from] std::io::Error),
}
