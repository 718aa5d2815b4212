use crate::error::{Error, Result};

/// 计算载体的容量（bits）：每个样本的最低位可以承载 1 bit。
pub fn capacity_bits(width: u32, height: u32, channels: u8) -> usize {
    width as usize * height as usize * channels as usize
}

/// 校验成帧后的位流能否放入载体，必须在任何写入发生之前调用。
/// 恰好填满容量是合法的，超出 1 bit 即失败。
pub fn ensure_fits(required: usize, available: usize) -> Result<()> {
    if required > available {
        return Err(Error::CapacityExceeded {
            required,
            available,
        });
    }

    Ok(())
}
