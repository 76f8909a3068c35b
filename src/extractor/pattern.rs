/// 日志行匹配模式
///
/// 支持两种测试床日志格式：
/// - 设备数据格式：`RANGING OK [11:0c->19:15] 169 mm [1.0000]`
/// - 时间间隔格式：`RANGING OK [11:0c->19:15] 169 mm [1.0000][0.0033]`

use std::fmt;

use regex::Regex;

use crate::extractor::record::{DeviceId, RangingRecord};

/// 带符号浮点数的子表达式，接受 `.5`、`1.`、`-1.0` 等写法
const FLOAT: &str = r"[+-]?([0-9]+([.][0-9]*)?|[.][0-9]+)";

/// 编译好的测距日志行模式
///
/// 匹配锚定在行首，但允许 `RANGING OK` 之前出现任意前缀文本。
/// 不匹配的行不是错误，由调用方静默跳过。
#[derive(Clone, Debug)]
pub struct LinePattern {
    regex: Regex,
    /// 模式名称
    pub pattern_type: String,
    /// 是否捕获时间间隔字段
    pub captures_interval: bool,
}

impl LinePattern {
    /// 设备数据格式：捕获发起方、响应方、距离（整数毫米）、置信度
    pub fn device_data() -> Self {
        let expr = format!(
            r"^.*RANGING OK \[(?P<init>\w\w:\w\w)->(?P<resp>\w\w:\w\w)\] (?P<dist>\d+) mm \[(?P<conf>{FLOAT})\]"
        );
        LinePattern {
            // 表达式为常量，编译不会失败
            regex: Regex::new(&expr).unwrap(),
            pattern_type: "device_data".to_string(),
            captures_interval: false,
        }
    }

    /// 时间间隔格式：在置信度之后额外捕获一个方括号包裹的间隔字段（秒）
    pub fn ranging_interval() -> Self {
        let expr = format!(
            r"^.*RANGING OK \[(?P<init>\w\w:\w\w)->(?P<resp>\w\w:\w\w)\] (?P<dist>\d+) mm \[(?P<conf>{FLOAT})\]\[(?P<interval>{FLOAT})\]"
        );
        LinePattern {
            regex: Regex::new(&expr).unwrap(),
            pattern_type: "ranging_interval".to_string(),
            captures_interval: true,
        }
    }

    /// 自定义模式
    ///
    /// 表达式必须包含命名捕获组 `init`、`resp`、`dist`、`conf`，
    /// 可选包含 `interval`。
    pub fn custom(expr: &str, pattern_type: impl Into<String>) -> Result<Self, regex::Error> {
        let regex = Regex::new(expr)?;
        let captures_interval = regex
            .capture_names()
            .any(|name| name == Some("interval"));
        Ok(LinePattern {
            regex,
            pattern_type: pattern_type.into(),
            captures_interval,
        })
    }

    /// 尝试解析一行日志
    ///
    /// 行结构不完整或数值字段畸形时返回 None，不产生错误。
    pub fn parse_line(&self, line: &str) -> Option<RangingRecord> {
        let caps = self.regex.captures(line)?;

        let initiator = DeviceId::parse(caps.name("init")?.as_str()).ok()?;
        let responder = DeviceId::parse(caps.name("resp")?.as_str()).ok()?;
        let distance_mm: u32 = caps.name("dist")?.as_str().parse().ok()?;
        let confidence: f64 = caps.name("conf")?.as_str().parse().ok()?;

        let interval_s = if self.captures_interval {
            // 间隔组缺失时整行不匹配，这里只在捕获成功后取值
            Some(caps.name("interval")?.as_str().parse::<f64>().ok()?)
        } else {
            None
        };

        Some(RangingRecord {
            initiator,
            responder,
            distance_mm,
            confidence,
            interval_s,
        })
    }

    /// 判断一行是否匹配
    pub fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// 获取模式描述
    pub fn description(&self) -> String {
        format!(
            "LinePattern [{}] - interval: {}",
            self.pattern_type, self.captures_interval
        )
    }
}

impl Default for LinePattern {
    fn default() -> Self {
        LinePattern::device_data()
    }
}

impl fmt::Display for LinePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
