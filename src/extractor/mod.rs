/// 日志提取模块
///
/// 该模块提供测距日志的共享解析能力，支持：
/// - 两种日志行格式（设备数据、时间间隔）及自定义模式
/// - 对任意 BufRead 数据源的惰性单遍扫描
/// - 匹配/跳过行数统计

pub mod parser;
pub mod pattern;
pub mod record;

pub use parser::*;
pub use pattern::*;
pub use record::*;
