//! # 隐写核心模块
//!
//! 实现分隔符成帧的 LSB 嵌入与提取。
//! 嵌入把成帧位流逐位写入样本序列前缀的最低位，其余 7 bits 保持不变；
//! 提取按光栅顺序读出全部最低位，在字节对齐位置以原始位模式匹配分隔符。

use colored::Colorize;

use crate::capacity::ensure_fits;
use crate::carrier::Carrier;
use crate::codec::{bits_to_text, text_to_bits};
use crate::constants::{BITS_PER_CHAR, DELIMITER};
use crate::error::Result;

/// 将位流写入样本序列前缀的最低位。
/// 位流之后的样本完全不被触碰，调用方需保证 `bits.len() <= samples.len()`。
pub fn write_lsb_bits(samples: &mut [u8], bits: &[u8]) {
    for (sample, &bit) in samples.iter_mut().zip(bits) {
        *sample = (*sample & 0xFE) | (bit & 1);
    }
}

/// 按顺序读出每个样本的最低位。
pub fn read_lsb_bits(samples: &[u8]) -> Vec<u8> {
    samples.iter().map(|&sample| sample & 1).collect()
}

/// 基于 LSB 的文本隐写编解码器。
///
/// 持有分隔符与 verbose 配置；自身不保存任何跨操作状态，
/// 嵌入与提取都不会修改调用方传入的载体。
#[derive(Debug, Clone)]
pub struct LsbCodec {
    delimiter: String,
    verbose: bool,
}

impl LsbCodec {
    pub fn new() -> Self {
        Self {
            delimiter: DELIMITER.to_owned(),
            verbose: false,
        }
    }

    /// 替换默认分隔符。分隔符必须非空且全部字符码点 ≤ 0xFF。
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// 控制是否向 stderr 输出诊断信息。
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    fn log(&self, message: &str) {
        if self.verbose {
            eprintln!("{}", message.dimmed());
        }
    }

    /// 将文本连同分隔符嵌入载体副本的样本最低位，返回该副本。
    ///
    /// 容量校验发生在任何写入之前：校验失败时不产生任何部分写入，
    /// 输入载体保持原样。
    ///
    /// # Errors
    ///
    /// * [`crate::Error::Encoding`] - 文本或分隔符包含码点超过 0xFF 的字符。
    /// * [`crate::Error::CapacityExceeded`] - 成帧位流超出载体容量。
    pub fn embed(&self, carrier: &Carrier, text: &str) -> Result<Carrier> {
        let framed = format!("{}{}", text, self.delimiter);
        let bits = text_to_bits(&framed)?;
        ensure_fits(bits.len(), carrier.capacity_bits())?;

        let mut output = carrier.clone();
        write_lsb_bits(output.samples_mut(), &bits);

        self.log(&format!(
            "Embedded {} characters ({} bits) into a carrier of {} samples",
            text.chars().count(),
            bits.len(),
            carrier.capacity_bits()
        ));

        Ok(output)
    }

    /// 扫描整个载体并恢复隐藏文本。
    ///
    /// 分隔符以原始位模式在字节对齐位置匹配，匹配点之前的位流解码为文本。
    /// 扫描完整个载体仍未命中分隔符时返回 `Ok(None)`，
    /// 与成功恢复出的空文本 `Ok(Some(""))` 可以区分。
    ///
    /// # Errors
    ///
    /// * [`crate::Error::Encoding`] - 分隔符包含码点超过 0xFF 的字符。
    pub fn extract(&self, carrier: &Carrier) -> Result<Option<String>> {
        let delimiter_bits = text_to_bits(&self.delimiter)?;
        let bits = read_lsb_bits(carrier.samples());

        let mut boundary = None;
        let mut pos = 0;
        while pos + delimiter_bits.len() <= bits.len() {
            if bits[pos..pos + delimiter_bits.len()] == delimiter_bits[..] {
                boundary = Some(pos);
                break;
            }
            pos += BITS_PER_CHAR;
        }

        match boundary {
            Some(end) => {
                let message = bits_to_text(&bits[..end]);
                self.log(&format!(
                    "Delimiter found at bit {}, recovered {} characters",
                    end,
                    message.chars().count()
                ));
                Ok(Some(message))
            }
            None => {
                self.log("No delimiter found after scanning the full carrier");
                Ok(None)
            }
        }
    }
}

impl Default for LsbCodec {
    fn default() -> Self {
        Self::new()
    }
}
