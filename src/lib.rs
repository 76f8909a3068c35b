/// UWB 测距日志解析工具库
///
/// 支持的功能：
/// - 从测试床日志中提取测距记录（距离、置信度、时间间隔）
/// - 按发起设备分文件追加保存测距数据
/// - 计算测距时间间隔的平均值并生成报告
/// - 控制台输出人类可读的测距结果

pub mod cli;
pub mod config;
pub mod consumers;
pub mod error;
pub mod extractor;
pub mod logging;

pub use config::OutputConfig;
pub use error::ExtractError;
pub use extractor::{DeviceId, LinePattern, LogExtractor, RangingRecord};
