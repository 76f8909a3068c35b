/// 输出配置
///
/// 原有脚本把输出写到固定的相对路径，这里将输出目录抽成配置项，
/// 默认行为（当前目录、文件名保留冒号）与原有脚本等价。

use std::path::{Path, PathBuf};

use crate::extractor::record::DeviceId;

/// 输出文件配置
#[derive(Clone, Debug)]
pub struct OutputConfig {
    /// 输出目录
    pub output_dir: PathBuf,
    /// 是否把设备标识符中的冒号替换为 `-`
    ///
    /// POSIX 文件系统允许冒号出现在文件名中，默认保留；
    /// 目标文件系统不允许时可打开此选项。
    pub sanitize_filenames: bool,
}

impl OutputConfig {
    /// 使用指定输出目录创建配置
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        OutputConfig {
            output_dir: output_dir.into(),
            sanitize_filenames: false,
        }
    }

    /// 设置文件名净化选项
    pub fn with_sanitized_filenames(mut self, sanitize: bool) -> Self {
        self.sanitize_filenames = sanitize;
        self
    }

    /// 设备数据文件路径：`<output_dir>/Device[<id>].txt`
    pub fn device_file_path(&self, initiator: &DeviceId) -> PathBuf {
        self.output_dir.join(format!(
            "Device[{}].txt",
            initiator.file_fragment(self.sanitize_filenames)
        ))
    }

    /// 平均间隔报告文件路径：`<output_dir>/AVGtemp[<id>].txt`
    pub fn report_file_path(&self, initiator: &DeviceId) -> PathBuf {
        self.output_dir.join(format!(
            "AVGtemp[{}].txt",
            initiator.file_fragment(self.sanitize_filenames)
        ))
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig::new(Path::new("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = OutputConfig::default();
        let id = DeviceId::parse("11:0c").unwrap();
        assert_eq!(
            config.device_file_path(&id),
            PathBuf::from("./Device[11:0c].txt")
        );
        assert_eq!(
            config.report_file_path(&id),
            PathBuf::from("./AVGtemp[11:0c].txt")
        );
    }

    #[test]
    fn test_sanitized_paths() {
        let config = OutputConfig::new("/tmp/out").with_sanitized_filenames(true);
        let id = DeviceId::parse("11:0c").unwrap();
        assert_eq!(
            config.device_file_path(&id),
            PathBuf::from("/tmp/out/Device[11-0c].txt")
        );
    }
}
