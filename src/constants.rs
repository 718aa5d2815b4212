/// 附加在隐藏文本末尾的默认分隔符。
/// 提取时在 LSB 位流中按字节对齐位置扫描该标记，以确定隐藏文本的边界。
pub const DELIMITER: &str = "###END###";

/// 单个字符占用的位数。
/// 载荷按单字节字符处理，每个字符以 8 bits（高位在前）写入像素样本。
pub const BITS_PER_CHAR: usize = 8;

/// 生成示例图像时的默认宽度（像素）。
pub const SAMPLE_WIDTH: u32 = 800;

/// 生成示例图像时的默认高度（像素）。
pub const SAMPLE_HEIGHT: u32 = 600;

/// 生成示例图像时的默认输出文件名。
pub const SAMPLE_FILENAME: &str = "sample_image.png";

/// hex 编码结果的默认输出文件名。
pub const HEX_FILENAME: &str = "hex_output.txt";
