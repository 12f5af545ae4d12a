//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`reveal`、`analyze` 和 `keygen` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写流水线以及向用户报告结果。

use crate::analysis;
use crate::cli::{AnalyzeArgs, HideArgs, KeygenArgs, RevealArgs};
use crate::constants::SEALED_PREFIX;
use crate::crypto::{self, Cipher};
use crate::pipeline;
use anyhow::{Context, Result};
use colored::Colorize;
use image::RgbImage;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责准备密钥、读取载体图像、把加密后的消息写入像素的最低有效位，
/// 最后将结果图像保存到输出路径。
///
/// # Arguments
///
/// * `args` - 包含消息、路径和覆盖开关的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或生成密钥文件。
/// * 无法读取或解码输入的图像文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 图像没有足够的空间容纳加密后的消息。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let (key, generated) = crypto::load_or_generate(&args.key).with_context(|| {
        format!(
            "Unable to prepare key file: {}",
            args.key.to_string_lossy().red().bold()
        )
    })?;
    if generated {
        println!(
            "A new key has been generated and saved: {}",
            args.key.to_string_lossy().green().bold()
        );
    }

    let mut image = load_rgb(&args.image)?;

    let dest = args
        .output
        .unwrap_or_else(|| default_sealed_path(&args.image));
    ensure_writable(&dest, args.force)?;

    let cipher = Cipher::new(&key);
    pipeline::conceal(&mut image, &args.message, &cipher).with_context(|| {
        format!(
            "Failed to hide the message in '{}'.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    image.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The message has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Reveal' 命令的执行逻辑。
///
/// 负责加载密钥、读取经过隐写的图像、从像素最低有效位中提取并解密消息，
/// 最后把消息写入输出文件或打印到标准输出。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `RevealArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取密钥文件。
/// * 无法读取或解码输入的图像文件。
/// * 图像中没有可解析的载荷，或密钥与隐藏时使用的不一致。
/// * 输出文件已存在且未指定 `--force`，或无法写入。
pub fn handle_reveal(args: RevealArgs) -> Result<()> {
    let key = crypto::load_key(&args.key).with_context(|| {
        format!(
            "Unable to read key file: {}",
            args.key.to_string_lossy().red().bold()
        )
    })?;

    let image = load_rgb(&args.image)?;

    let cipher = Cipher::new(&key);
    let message = pipeline::reveal(&image, &cipher).with_context(|| {
        format!(
            "Failed to recover a message from '{}'.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    match args.output {
        Some(path) => {
            ensure_writable(&path, args.force)?;
            fs::write(&path, message.as_bytes()).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    path.to_string_lossy().red().bold()
                )
            })?;
            println!(
                "The message has been successfully recovered and saved: {}",
                path.to_string_lossy().green().bold()
            );
        }
        None => println!("{message}"),
    }

    Ok(())
}

/// 处理 'Analyze' 命令的执行逻辑。
///
/// 负责读取原始图像和可疑图像、计算两者的统计指标并打印对比报告，
/// 熵值升高视作可能藏有数据的信号。
///
/// # Arguments
///
/// * `args` - 包含两幅图像路径的 `AnalyzeArgs` 结构体。
///
/// # Errors
///
/// 任一图像文件无法读取或解码时返回错误。
pub fn handle_analyze(args: AnalyzeArgs) -> Result<()> {
    let original = load_rgb(&args.original)?;
    let suspect = load_rgb(&args.suspect)?;
    let report = analysis::compare(&original, &suspect);

    println!(
        "Entropy of original image: {} bits",
        format!("{:.4}", report.original.entropy).green().bold()
    );
    println!(
        "Entropy of suspected image: {} bits",
        format!("{:.4}", report.suspect.entropy).green().bold()
    );
    println!(
        "Distinct colors: {} in original, {} in suspected",
        report.original.distinct_colors, report.suspect.distinct_colors
    );
    println!(
        "Grayscale histogram L1 distance: {}",
        report.histogram_distance
    );

    if report.entropy_increased {
        println!(
            "{}",
            "Higher entropy detected in suspected image, indicating possible hidden data."
                .red()
                .bold()
        );
    } else {
        println!("{}", "No significant increase in entropy detected.".green().bold());
    }

    Ok(())
}

/// 处理 'Keygen' 命令的执行逻辑。
///
/// 生成一个新的随机密钥并写入指定文件。
///
/// # Arguments
///
/// * `args` - 包含密钥路径和覆盖开关的 `KeygenArgs` 结构体。
///
/// # Errors
///
/// 密钥文件已存在且未指定 `--force`，或文件无法写入时返回错误。
pub fn handle_keygen(args: KeygenArgs) -> Result<()> {
    ensure_writable(&args.key, args.force)?;

    let key = crypto::generate_key();
    crypto::write_key(&args.key, &key).with_context(|| {
        format!(
            "Unable to write key file: {}",
            args.key.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "A new key has been generated and saved: {}",
        args.key.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 读出图像并统一成 RGB 像素格式。
fn load_rgb(path: &Path) -> Result<RgbImage> {
    let image = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;
    Ok(image.into_rgb8())
}

/// 缺省输出路径：载体所在目录下带 "sealed_" 前缀的同名文件。
fn default_sealed_path(image: &Path) -> PathBuf {
    let mut name = OsString::from(SEALED_PREFIX);
    name.push(image.file_name().unwrap_or_default());
    image.with_file_name(name)
}

/// 输出路径已存在且未指定 `--force` 时拒绝写入。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "The target file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}
