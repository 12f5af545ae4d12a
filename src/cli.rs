//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use crate::constants::DEFAULT_KEY_FILE;
use clap::Parser;
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或提取加密文本消息。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或提取加密文本消息。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏)、reveal (提取)、analyze (分析) 和 keygen (生成密钥)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 加密文本消息并将其隐藏到无损格式图像 (如 PNG, BMP) 中。
    Hide(HideArgs),

    /// 从经过隐写的图像中提取并解密隐藏的消息。
    Reveal(RevealArgs),

    /// 比较原始图像和可疑图像的统计指标，判断后者是否可能藏有数据。
    Analyze(AnalyzeArgs),

    /// 生成一个新的加密密钥文件。
    Keygen(KeygenArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的载体图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本消息。
    #[arg(short, long)]
    pub message: String,

    /// 隐写完成后，保存结果图像的输出路径。缺省时在载体所在目录生成带 "sealed_" 前缀的文件。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 密钥文件路径。文件不存在时会自动生成新密钥并写入。
    #[arg(short, long, default_value = DEFAULT_KEY_FILE)]
    pub key: PathBuf,

    /// 允许覆盖已存在的输出文件。
    #[arg(long)]
    pub force: bool,
}

/// 'reveal' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RevealArgs {
    /// 已隐藏消息的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 密钥文件路径，必须是隐藏时使用的那一份。
    #[arg(short, long, default_value = DEFAULT_KEY_FILE)]
    pub key: PathBuf,

    /// 保存提取消息的文本文件路径。缺省时打印到标准输出。
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 允许覆盖已存在的输出文件。
    #[arg(long)]
    pub force: bool,
}

/// 'analyze' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// 原始参照图像的文件路径。
    #[arg(short, long)]
    pub original: PathBuf,

    /// 待检查的可疑图像的文件路径。
    #[arg(short, long)]
    pub suspect: PathBuf,
}

/// 'keygen' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct KeygenArgs {
    /// 密钥文件的写入路径。
    #[arg(short, long, default_value = DEFAULT_KEY_FILE)]
    pub key: PathBuf,

    /// 允许覆盖已存在的密钥文件。
    #[arg(long)]
    pub force: bool,
}
