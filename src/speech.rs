//! # 语音协作模块
//!
//! 定义向用户播报文本的外部协作接口。
//! 协作对象由调用方构建与销毁，编解码器本身不持有任何语音状态；
//! 播报失败只作为警告上报，绝不影响隐写操作本身的结果。

use colored::Colorize;
use thiserror::Error;

/// 语音播报失败。
#[derive(Debug, Error)]
#[error("Speech output failed: {0}")]
pub struct SpeechError(pub String);

/// 播报文本的外部协作接口。
pub trait Speaker {
    fn speak(&mut self, text: &str) -> Result<(), SpeechError>;
}

/// 静默实现，不做任何播报。
#[derive(Debug, Default)]
pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn speak(&mut self, _text: &str) -> Result<(), SpeechError> {
        Ok(())
    }
}

/// 把播报内容写到终端的实现，对应真实语音引擎不可用时的降级行为。
#[derive(Debug, Default)]
pub struct ConsoleSpeaker;

impl Speaker for ConsoleSpeaker {
    fn speak(&mut self, text: &str) -> Result<(), SpeechError> {
        println!("{} {}", "[speech]".cyan().bold(), text);
        Ok(())
    }
}
