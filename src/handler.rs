//! # 命令处理逻辑模块
//!
//! 包含处理各子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::carrier::Carrier;
use crate::cli::{HexDecodeArgs, HexEncodeArgs, HideArgs, InfoArgs, RecoverArgs, SampleArgs};
use crate::constants::BITS_PER_CHAR;
use crate::hexcodec;
use crate::speech::Speaker;
use crate::stego::LsbCodec;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 根据输入图像路径生成默认的隐写输出路径：`hidden_<原文件名>.png`。
fn default_dest(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("hidden_{stem}.png"))
}

/// 覆盖保护：目标文件已存在且未指定 `--force` 时拒绝写入。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse {} to overwrite it.",
        path.to_string_lossy().red().bold(),
        "--force".green().bold()
    );
    Ok(())
}

/// 从 `--text` 文件或 `--message` 参数中取出载荷文本，二者必须恰好给出其一。
fn resolve_payload(text: &Option<PathBuf>, message: &Option<String>) -> Result<String> {
    match (text, message) {
        (Some(path), None) => fs::read_to_string(path).with_context(|| {
            format!(
                "Unable to read text file: {}",
                path.to_string_lossy().red().bold()
            )
        }),
        (None, Some(message)) => Ok(message.clone()),
        _ => anyhow::bail!(
            "Nothing to hide. Provide exactly one of {} or {}.",
            "--text".green().bold(),
            "--message".green().bold()
        ),
    }
}

/// 播报失败只提示警告，不影响命令本身的结果。
fn speak_or_warn(speaker: &mut dyn Speaker, text: &str) {
    if let Err(err) = speaker.speak(text) {
        eprintln!("{} {err}", "Warning:".yellow().bold());
    }
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像与载荷文本、生成默认输出路径、调用隐写核心嵌入成帧位流，
/// 最后将结果写入目标图像文件。容量不足时不会产生任何输出文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `HideArgs` 结构体。
/// * `codec` - 携带分隔符与 verbose 配置的编解码器。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入图像、无法读取文本文件。
/// * 载荷含有无法以单字节表示的字符。
/// * 成帧位流超出图像容量。
/// * 目标文件已存在且未指定 `--force`，或无法写入目标图像文件。
pub fn handle_hide(args: HideArgs, codec: &LsbCodec) -> Result<()> {
    let carrier = Carrier::load(&args.image)?;
    let payload = resolve_payload(&args.text, &args.message)?;

    let dest = args.dest.clone().unwrap_or_else(|| default_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    let embedded = codec.embed(&carrier, &payload).with_context(|| {
        format!(
            "Not enough space or unencodable payload for image: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    embedded.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取隐写图像、扫描分隔符并恢复隐藏文本，按需写入文件或播报。
/// 扫描完整个载体仍未找到分隔符时报告「未找到隐藏数据」，这是一种结果状态，
/// 命令本身正常结束。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `RecoverArgs` 结构体。
/// * `codec` - 携带分隔符与 verbose 配置的编解码器。
/// * `speaker` - 由调用方注入的语音协作对象。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入图像。
/// * 目标文本文件已存在且未指定 `--force`，或无法写入。
pub fn handle_recover(
    args: RecoverArgs,
    codec: &LsbCodec,
    speaker: &mut dyn Speaker,
) -> Result<()> {
    let carrier = Carrier::load(&args.image)?;

    let Some(message) = codec.extract(&carrier)? else {
        println!(
            "{}",
            "No hidden text found in this image.".yellow().bold()
        );
        if args.speak {
            speak_or_warn(speaker, "No hidden text found");
        }
        return Ok(());
    };

    if let Some(path) = &args.text {
        ensure_writable(path, args.force)?;
        fs::write(path, &message).with_context(|| {
            format!(
                "Unable to write to target text file: {}",
                path.to_string_lossy().red().bold()
            )
        })?;
        println!(
            "The text has been successfully recovered and saved: {}",
            path.to_string_lossy().green().bold()
        );
    } else {
        println!("{}", "Recovered hidden text:".green().bold());
        println!("{message}");
    }

    if args.speak {
        speak_or_warn(speaker, &message);
    }

    Ok(())
}

/// 处理 'Info' 命令的执行逻辑。
///
/// 打印图像尺寸、通道数与隐写容量（bits 与近似字符数），
/// 并提示分隔符本身占用的开销。
///
/// # Errors
///
/// 无法读取或解码输入图像时返回错误。
pub fn handle_info(args: InfoArgs, codec: &LsbCodec) -> Result<()> {
    let carrier = Carrier::load(&args.image)?;

    let capacity = carrier.capacity_bits();
    let max_chars = capacity / BITS_PER_CHAR;
    let delimiter_chars = codec.delimiter().chars().count();

    println!("Image      : {}", args.image.to_string_lossy().green().bold());
    println!(
        "Dimensions : {}x{} ({} channels)",
        carrier.width(),
        carrier.height(),
        carrier.channels()
    );
    println!("Capacity   : {} bits (~{} characters)", capacity, max_chars);
    println!(
        "Payload    : up to {} characters after the {}-character delimiter",
        max_chars.saturating_sub(delimiter_chars),
        delimiter_chars
    );

    Ok(())
}

/// 处理 'Sample' 命令的执行逻辑。
///
/// 生成一张确定性的渐变示例图像并写入目标路径。
///
/// # Errors
///
/// 尺寸为零、目标文件已存在且未指定 `--force`、或无法写入时返回错误。
pub fn handle_sample(args: SampleArgs) -> Result<()> {
    anyhow::ensure!(
        args.width > 0 && args.height > 0,
        "Sample dimensions must be non-zero. Got: {}x{}",
        args.width.to_string().red().bold(),
        args.height.to_string().red().bold()
    );
    ensure_writable(&args.output, args.force)?;

    let carrier = Carrier::gradient(args.width, args.height);
    carrier.save(&args.output).with_context(|| {
        format!(
            "Unable to write sample image file: {}",
            args.output.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "Sample image created: {}",
        args.output.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'HexEncode' 命令的执行逻辑。
///
/// 将载荷文本编码为 hex 字符串写入目标文件，并报告文件大小。
///
/// # Errors
///
/// 无法读取文本文件、目标文件已存在且未指定 `--force`、或无法写入时返回错误。
pub fn handle_hex_encode(args: HexEncodeArgs) -> Result<()> {
    let payload = resolve_payload(&args.text, &args.message)?;
    ensure_writable(&args.output, args.force)?;

    let encoded = hexcodec::to_hex(&payload);
    fs::write(&args.output, &encoded).with_context(|| {
        format!(
            "Unable to write hex file: {}",
            args.output.to_string_lossy().red().bold()
        )
    })?;

    println!("Data has been saved in hex format.");
    println!(
        "File name : {}",
        args.output.to_string_lossy().green().bold()
    );
    println!("File size : {} bytes", encoded.len());

    Ok(())
}

/// 处理 'HexDecode' 命令的执行逻辑。
///
/// 读取 hex 文件并解码回文本，打印结果并按需播报。
///
/// # Arguments
///
/// * `args` - 包含输入路径的 `HexDecodeArgs` 结构体。
/// * `speaker` - 由调用方注入的语音协作对象。
///
/// # Errors
///
/// 无法读取输入文件、内容不是合法 hex、或解码结果不是有效 UTF-8 时返回错误。
pub fn handle_hex_decode(args: HexDecodeArgs, speaker: &mut dyn Speaker) -> Result<()> {
    let hex_data = fs::read_to_string(&args.input).with_context(|| {
        format!(
            "Unable to read hex file: {}",
            args.input.to_string_lossy().red().bold()
        )
    })?;

    let text = hexcodec::from_hex(&hex_data).with_context(|| {
        format!(
            "Conversion failed! Not valid hex in {}",
            args.input.to_string_lossy().red().bold()
        )
    })?;

    println!("Decoded text : {text}");
    println!("Result       : {}", "Accepted".green().bold());

    if args.speak {
        speak_or_warn(speaker, &format!("Decoded text is {text}"));
    }

    Ok(())
}
