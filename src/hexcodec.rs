//! # hex 编解码模块
//!
//! 文本与 hex 字符串之间的往返转换，供 `hex-encode` / `hex-decode` 子命令使用。

use crate::error::Result;

/// 将文本按 UTF-8 字节编码为小写 hex 字符串。
pub fn to_hex(text: &str) -> String {
    hex::encode(text.as_bytes())
}

/// 将 hex 字符串解码回文本，首尾空白会被忽略。
///
/// # Errors
///
/// * [`crate::Error::InvalidHex`] - 输入不是合法的 hex 字符串。
/// * [`crate::Error::InvalidUtf8`] - 解码出的字节不是有效的 UTF-8 文本。
pub fn from_hex(data: &str) -> Result<String> {
    let bytes = hex::decode(data.trim())?;
    Ok(String::from_utf8(bytes)?)
}
