//! # 图像载体模块
//!
//! 负责载体图像的解码、编码以及示例图像的生成。
//! 像素样本以行优先顺序存放在一个独立拥有的扁平缓冲区中，
//! `(row, col, channel)` 到扁平下标的映射由 [`Carrier::sample_index`] 给出。
//! 嵌入与提取共用这一顺序，顺序一旦不一致恢复结果即为乱码。

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use crate::capacity::capacity_bits;
use crate::error::{Error, Result};

/// 解码后的载体图像：扁平样本缓冲区加上尺寸与通道信息。
///
/// 每次加载都会得到一个全新的缓冲区，载体之间不共享任何可变状态。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carrier {
    samples: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl Carrier {
    /// 由现成的样本缓冲区构建载体。
    /// 缓冲区长度必须等于 `width * height * channels`。
    pub fn from_samples(samples: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        debug_assert_eq!(
            samples.len(),
            width as usize * height as usize * channels as usize
        );

        Self {
            samples,
            width,
            height,
            channels,
        }
    }

    /// 从文件解码载体图像。
    ///
    /// 任何输入格式都会统一转换为 8-bit RGB（3 通道），
    /// 以保证嵌入与提取看到完全相同的样本序列。
    pub fn load(path: &Path) -> Result<Self> {
        let img = image::open(path).map_err(|source| Error::CarrierLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();

        Ok(Self {
            samples: rgb.into_raw(),
            width,
            height,
            channels: 3,
        })
    }

    /// 将载体无损写入目标路径，输出文件的样本值与缓冲区完全一致。
    /// 目标路径的父目录不存在时会先行创建。
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|err| Error::CarrierSave {
                    path: path.to_path_buf(),
                    source: image::ImageError::IoError(err),
                })?;
            }
        }

        let color = match self.channels {
            1 => image::ExtendedColorType::L8,
            3 => image::ExtendedColorType::Rgb8,
            4 => image::ExtendedColorType::Rgba8,
            n => {
                return Err(Error::CarrierSave {
                    path: path.to_path_buf(),
                    source: image::ImageError::IoError(io::Error::new(
                        ErrorKind::InvalidInput,
                        format!("unsupported channel count: {n}"),
                    )),
                });
            }
        };

        image::save_buffer(path, &self.samples, self.width, self.height, color).map_err(
            |source| Error::CarrierSave {
                path: path.to_path_buf(),
                source,
            },
        )
    }

    /// 生成一张确定性的 RGB 渐变图像。
    ///
    /// 每个像素取值 `[255·r/h, 255·c/w, 255·(r+c)/(h+w)]`，
    /// 宽高都必须大于零。
    pub fn gradient(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0);

        let extent = u64::from(height) + u64::from(width);
        let mut samples = Vec::with_capacity(capacity_bits(width, height, 3));
        for row in 0..u64::from(height) {
            for col in 0..u64::from(width) {
                samples.push((255 * row / u64::from(height)) as u8);
                samples.push((255 * col / u64::from(width)) as u8);
                samples.push((255 * (row + col) / extent) as u8);
            }
        }

        Self {
            samples,
            width,
            height,
            channels: 3,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    /// 载体容量（bits），即样本总数。
    pub fn capacity_bits(&self) -> usize {
        capacity_bits(self.width, self.height, self.channels)
    }

    /// `(row, col, channel)` 在扁平缓冲区中的下标。
    pub fn sample_index(&self, row: u32, col: u32, channel: u8) -> usize {
        (row as usize * self.width as usize + col as usize) * self.channels as usize
            + channel as usize
    }
}
