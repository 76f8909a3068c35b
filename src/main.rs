use std::path::PathBuf;

use clap::{Parser, Subcommand};

use uwbrange::cli::{require_log_file, run_average, run_extract, run_report};
use uwbrange::consumers::ReportFormat;
use uwbrange::error::ExtractError;
use uwbrange::{logging, OutputConfig};

#[derive(Parser, Debug)]
#[command(
    name = "uwbrange",
    version,
    about = "UWB 测距日志解析工具：提取、汇总、打印测距记录"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 按发起设备把测距记录追加保存到 Device[<id>].txt
    Extract {
        /// 日志文件路径
        log_file: Option<PathBuf>,

        /// 输出目录
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// 文件名中用 `-` 替换设备标识符的冒号
        #[arg(long)]
        sanitize_filenames: bool,
    },

    /// 计算平均测距间隔并写入 AVGtemp[<id>].txt
    Average {
        /// 日志文件路径
        log_file: Option<PathBuf>,

        /// 输出目录
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        /// 文件名中用 `-` 替换设备标识符的冒号
        #[arg(long)]
        sanitize_filenames: bool,
    },

    /// 把测距记录打印到标准输出
    Report {
        /// 日志文件路径
        log_file: Option<PathBuf>,

        /// 以 JSON 行输出，替代默认文本格式
        #[arg(long)]
        json: bool,
    },
}

fn run(command: Command) -> Result<(), ExtractError> {
    match command {
        Command::Extract {
            log_file,
            output_dir,
            sanitize_filenames,
        } => {
            let log_file = require_log_file(log_file)?;
            let config =
                OutputConfig::new(output_dir).with_sanitized_filenames(sanitize_filenames);
            run_extract(&log_file, &config)?;
        }

        Command::Average {
            log_file,
            output_dir,
            sanitize_filenames,
        } => {
            let log_file = require_log_file(log_file)?;
            let config =
                OutputConfig::new(output_dir).with_sanitized_filenames(sanitize_filenames);
            run_average(&log_file, &config)?;
        }

        Command::Report { log_file, json } => {
            let log_file = require_log_file(log_file)?;
            let format = if json {
                ReportFormat::Json
            } else {
                ReportFormat::Text
            };
            run_report(&log_file, std::io::stdout().lock(), format)?;
        }
    }
    Ok(())
}

fn main() {
    logging::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        // 错误文案与原有脚本一致，打印到 stdout 并以非零码退出
        println!("{e}");
        std::process::exit(1);
    }
}
