//! promptboard 命令行工具
//! 从文件或标准输入读取提示词，输出解析/校验/翻译结果

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use promptboard::{ConfigManager, ParseResult, PromptBoard};

const DEFAULT_LOG_FILTER: &str = "promptboard=warn";
const VERBOSE_LOG_FILTER: &str = "promptboard=debug";

#[derive(Parser)]
#[command(name = "promptboard", version)]
#[command(about = "中英双语绘图提示词分类提取与词典翻译工具", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 输出详细日志
    #[arg(short, long, global = true)]
    verbose: bool,

    /// 不拆分行内标题
    #[arg(long, global = true)]
    no_hoist: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 解析提示词文本，输出8个类别的JSON
    Parse {
        /// 输入文件（省略时读取标准输入）
        file: Option<PathBuf>,

        /// 同时为每个类别生成中文
        #[arg(short, long)]
        translate: bool,
    },

    /// 解析并校验类别完整性
    Validate {
        /// 输入文件（省略时读取标准输入）
        file: Option<PathBuf>,
    },

    /// 翻译英文提示词
    Translate {
        /// 待翻译文本（省略时读取标准输入）
        text: Vec<String>,
    },

    /// 将解析结果JSON还原为带标题的文本
    Format {
        /// 解析结果JSON文件
        file: PathBuf,
    },

    /// 输出示例提示词
    Sample,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = ConfigManager::custom()
        .hoist_inline_headers(!cli.no_hoist)
        .verbose(cli.verbose)
        .build();
    let board = PromptBoard::new(config);

    match cli.command {
        Commands::Parse { file, translate } => {
            let text = read_input(file.as_deref())?;
            let mut result = board.parse(&text);
            if translate {
                result = board.translate_all(&result);
            }
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Validate { file } => {
            let text = read_input(file.as_deref())?;
            let result = board.parse(&text);
            let report = board.validate(&result);
            if report.is_empty {
                warn!("未识别到任何类别内容");
            } else if !report.is_valid {
                warn!("缺少类别：{:?}", report.missing_categories);
            }
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::Translate { text } => {
            let text = if text.is_empty() {
                read_input(None)?
            } else {
                text.join(" ")
            };
            println!("{}", board.translate(&text));
        }

        Commands::Format { file } => {
            let content = read_input(Some(&file))?;
            let result: ParseResult = serde_json::from_str(&content)
                .with_context(|| format!("解析结果JSON格式无效：{}", file.display()))?;
            println!("{}", board.format(&result));
        }

        Commands::Sample => {
            println!("{}", board.sample_text());
        }
    }

    Ok(())
}

fn build_log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env("PROMPTBOARD_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            EnvFilter::new(if verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER })
        })
}

fn setup_logging(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(build_log_filter(verbose))
        .with_target(false)
        .try_init();
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            debug!("读取文件：{}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("读取文件失败：{}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("读取标准输入失败")?;
            Ok(buf)
        }
    }
}
