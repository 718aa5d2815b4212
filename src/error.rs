//! # 错误类型模块
//!
//! 定义隐写编解码过程中所有可能出现的结构化错误。
//! 「未找到隐藏数据」不属于错误：它是提取操作的一种正常结果，
//! 由 [`crate::stego::LsbCodec::extract`] 返回 `Ok(None)` 表示。

use std::path::PathBuf;
use thiserror::Error;

/// 本库操作的 Result 类型别名。
pub type Result<T> = std::result::Result<T, Error>;

/// 隐写编解码操作中可能发生的错误。
#[derive(Error, Debug)]
pub enum Error {
    /// 载体图像不存在或无法解码。
    #[error("Unable to load carrier image '{}'", .path.display())]
    CarrierLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 载体图像无法写入目标路径。
    #[error("Unable to save carrier image '{}'", .path.display())]
    CarrierSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 成帧后的载荷位长超出载体容量。
    #[error("Message too long for this image. Required: {required} bits, Available: {available} bits")]
    CapacityExceeded { required: usize, available: usize },

    /// 载荷字符超出单字节可表示范围（码点 > 0xFF）。
    #[error("Character '{ch}' at index {index} cannot be encoded as a single byte")]
    Encoding { ch: char, index: usize },

    /// hex 文本无法解析。
    #[error("Invalid hex data")]
    InvalidHex(#[from] hex::FromHexError),

    /// 解码得到的字节不是有效的 UTF-8 文本。
    #[error("Decoded bytes are not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
