//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

use crate::constants::{HEX_FILENAME, SAMPLE_FILENAME, SAMPLE_HEIGHT, SAMPLE_WIDTH};

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，将带分隔符标记的文本嵌入无损格式图像 (如 PNG, BMP) 或从中恢复。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，将带分隔符标记的文本嵌入无损格式图像 (如 PNG, BMP) 的像素样本中，或从隐写图像中恢复隐藏文本。"
)]
pub struct Cli {
    /// 输出详细的诊断信息。
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 在无损格式图像 (如 PNG, BMP) 中隐藏文本。
    Hide(HideArgs),

    /// 从经过隐写的图像中恢复隐藏的文本。
    Recover(RecoverArgs),

    /// 查看图像的尺寸与隐写容量信息。
    Info(InfoArgs),

    /// 生成一张渐变示例图像用于实验。
    Sample(SampleArgs),

    /// 将文本编码为 hex 并保存到文件。
    HexEncode(HexEncodeArgs),

    /// 读取 hex 文件并解码回文本。
    HexDecode(HexDecodeArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入图像文件路径 (如 PNG, BMP)。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文本内容的文件路径。
    #[arg(short, long, conflicts_with = "message")]
    pub text: Option<PathBuf>,

    /// 直接在命令行中给出要隐藏的文本。
    #[arg(short, long, conflicts_with = "text")]
    pub message: Option<String>,

    /// 隐写完成后，保存结果图像的输出路径。
    /// 缺省时在输入图像旁生成 `hidden_<原文件名>.png`。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 目标文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'recover' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// 已隐藏文本数据的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 恢复文本后，保存文本内容的输出路径。缺省时只打印到终端。
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// 用语音协作对象播报恢复出的文本。
    #[arg(short, long)]
    pub speak: bool,

    /// 目标文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'info' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// 要查看的图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,
}

/// 'sample' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct SampleArgs {
    /// 示例图像的宽度（像素）。
    #[arg(long, default_value_t = SAMPLE_WIDTH)]
    pub width: u32,

    /// 示例图像的高度（像素）。
    #[arg(long, default_value_t = SAMPLE_HEIGHT)]
    pub height: u32,

    /// 示例图像的输出路径。
    #[arg(short, long, default_value = SAMPLE_FILENAME)]
    pub output: PathBuf,

    /// 目标文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'hex-encode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HexEncodeArgs {
    /// 要编码的文本文件路径。
    #[arg(short, long, conflicts_with = "message")]
    pub text: Option<PathBuf>,

    /// 直接在命令行中给出要编码的文本。
    #[arg(short, long, conflicts_with = "text")]
    pub message: Option<String>,

    /// hex 结果的输出文件路径。
    #[arg(short, long, default_value = HEX_FILENAME)]
    pub output: PathBuf,

    /// 目标文件已存在时强制覆盖。
    #[arg(short, long)]
    pub force: bool,
}

/// 'hex-decode' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HexDecodeArgs {
    /// 要解码的 hex 文件路径。
    #[arg(short, long, default_value = HEX_FILENAME)]
    pub input: PathBuf,

    /// 用语音协作对象播报解码出的文本。
    #[arg(short, long)]
    pub speak: bool,
}
