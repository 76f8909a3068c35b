/// 记录消费模块
///
/// 三种对提取结果的处理策略：
/// - 按发起设备分文件追加保存
/// - 累计时间间隔并生成平均值报告
/// - 控制台人类可读输出

pub mod appender;
pub mod averager;
pub mod reporter;

pub use appender::*;
pub use averager::*;
pub use reporter::*;
