//! # lsb_veil 库
//!
//! 本库包含分隔符成帧 LSB 文本隐写工具的核心逻辑。

// 声明库包含的所有模块。

pub mod capacity;
pub mod carrier;
pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod handler;
pub mod hexcodec;
pub mod speech;
pub mod stego;

pub use carrier::Carrier;
pub use error::{Error, Result};
pub use stego::LsbCodec;
