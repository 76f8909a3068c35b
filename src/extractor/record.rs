/// 测距记录和设备标识符定义

use std::fmt;

use serde::Serialize;

use crate::error::ExtractError;

/// 设备标识符，格式为 `xx:xx`（两个十六进制字节，冒号分隔）
///
/// 测试床固件输出的标识符允许字母数字和下划线，
/// 与日志匹配表达式中的 `\w\w:\w\w` 保持一致。
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DeviceId(String);

impl DeviceId {
    /// 解析并校验设备标识符
    pub fn parse(raw: &str) -> Result<Self, ExtractError> {
        let bytes = raw.as_bytes();
        let valid = bytes.len() == 5
            && bytes[2] == b':'
            && [0, 1, 3, 4]
                .iter()
                .all(|&i| bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_');

        if valid {
            Ok(DeviceId(raw.to_string()))
        } else {
            Err(ExtractError::InvalidDeviceId {
                raw: raw.to_string(),
            })
        }
    }

    /// 获取原始标识符字符串
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 获取用于文件名的标识符片段
    ///
    /// `sanitize` 为 true 时将冒号替换为 `-`，
    /// 适配不允许冒号出现在文件名中的文件系统。
    pub fn file_fragment(&self, sanitize: bool) -> String {
        if sanitize {
            self.0.replace(':', "-")
        } else {
            self.0.clone()
        }
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 单条测距记录，对应日志中一行匹配成功的测距事件
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RangingRecord {
    /// 发起测距的设备
    pub initiator: DeviceId,
    /// 响应测距的设备
    pub responder: DeviceId,
    /// 测得距离（毫米）
    pub distance_mm: u32,
    /// 置信度，可带符号
    pub confidence: f64,
    /// 相邻两次测距之间的时间间隔（秒），仅时间间隔日志格式携带
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_s: Option<f64>,
}

impl RangingRecord {
    /// 创建不带时间间隔的记录
    pub fn new(
        initiator: DeviceId,
        responder: DeviceId,
        distance_mm: u32,
        confidence: f64,
    ) -> Self {
        RangingRecord {
            initiator,
            responder,
            distance_mm,
            confidence,
            interval_s: None,
        }
    }

    /// 创建带时间间隔的记录
    pub fn with_interval(
        initiator: DeviceId,
        responder: DeviceId,
        distance_mm: u32,
        confidence: f64,
        interval_s: f64,
    ) -> Self {
        RangingRecord {
            initiator,
            responder,
            distance_mm,
            confidence,
            interval_s: Some(interval_s),
        }
    }

    /// 距离换算为厘米
    pub fn distance_cm(&self) -> f64 {
        self.distance_mm as f64 / 10.0
    }

    /// 距离换算为米
    pub fn distance_m(&self) -> f64 {
        self.distance_mm as f64 / 1000.0
    }

    /// 时间间隔换算为毫秒
    pub fn interval_ms(&self) -> Option<f64> {
        self.interval_s.map(|s| s * 1000.0)
    }

    /// 生成设备数据文件中的一行（不含换行符）
    ///
    /// 格式：`initiator,responder,distance_mm,confidence`
    pub fn csv_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.initiator,
            self.responder,
            self.distance_mm,
            fmt_float(self.confidence)
        )
    }
}

/// 浮点数格式化，整数值保留一位小数
///
/// 保证 1.0 输出为 "1.0" 而不是 "1"，与既有设备数据文件格式兼容。
pub fn fmt_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
