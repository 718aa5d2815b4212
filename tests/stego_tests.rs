use lsb_veil::capacity::{capacity_bits, ensure_fits};
use lsb_veil::codec::{bits_to_text, text_to_bits};
use lsb_veil::hexcodec;
use lsb_veil::stego::{read_lsb_bits, write_lsb_bits};
use lsb_veil::{Carrier, Error, LsbCodec};
use tempfile::tempdir;

/// 一个辅助函数，构建带有确定性样本图案的载体
fn patterned_carrier(width: u32, height: u32) -> Carrier {
    let len = (width * height * 3) as usize;
    let samples = (0..len).map(|i| (i % 256) as u8).collect();
    Carrier::from_samples(samples, width, height, 3)
}

/// 验证位编码为高位在前的 8-bit 展开
#[test]
fn test_text_to_bits_is_msb_first() {
    let bits = text_to_bits("A").unwrap();
    assert_eq!(bits, vec![0, 1, 0, 0, 0, 0, 0, 1]);

    let bits = text_to_bits("AB").unwrap();
    assert_eq!(bits.len(), 16);
    assert_eq!(&bits[8..], &[0, 1, 0, 0, 0, 0, 1, 0]);
}

/// 验证位解码按 8 bits 一组进行，不完整的尾部直接丢弃
#[test]
fn test_bits_to_text_discards_partial_group() {
    let mut bits = text_to_bits("H").unwrap();
    bits.extend_from_slice(&[1, 0, 1]);
    assert_eq!(bits_to_text(&bits), "H");

    assert_eq!(bits_to_text(&[]), "");
    assert_eq!(bits_to_text(&[1, 1, 1]), "");
}

/// 验证码点超过 0xFF 的字符会被明确拒绝，而不是静默截断
#[test]
fn test_text_to_bits_rejects_wide_chars() {
    let result = text_to_bits("ab隐cd");
    match result {
        Err(Error::Encoding { ch, index }) => {
            assert_eq!(ch, '隐');
            assert_eq!(index, 2);
        }
        other => panic!("Expected Encoding error, got: {:?}", other),
    }
}

/// 验证 0x80..=0xFF 范围的字符按 Latin-1 码点完整往返
#[test]
fn test_latin1_chars_round_trip() {
    let text = "café ÿñ";
    let bits = text_to_bits(text).unwrap();
    assert_eq!(bits_to_text(&bits), text);
}

/// 验证容量计算与严格的容量校验（恰好填满合法，超出 1 bit 失败）
#[test]
fn test_capacity_model() {
    assert_eq!(capacity_bits(10, 10, 3), 300);
    assert_eq!(capacity_bits(2, 2, 3), 12);

    assert!(ensure_fits(300, 300).is_ok());
    match ensure_fits(301, 300) {
        Err(Error::CapacityExceeded {
            required,
            available,
        }) => {
            assert_eq!(required, 301);
            assert_eq!(available, 300);
        }
        other => panic!("Expected CapacityExceeded, got: {:?}", other),
    }
}

/// 验证底层位写入只动最低位、位读取按顺序取最低位
#[test]
fn test_lsb_buffer_primitives() {
    let mut samples = [0xFE, 0xFF, 0x00, 0xAB];
    write_lsb_bits(&mut samples, &[1, 0, 1]);
    assert_eq!(samples, [0xFF, 0xFE, 0x01, 0xAB]);

    assert_eq!(read_lsb_bits(&samples), vec![1, 0, 1, 1]);
}

/// 场景验证：10×10 RGB 载体（300 bits）隐藏 "HELLO"（成帧后 112 bits）
#[test]
fn test_hello_scenario() {
    let codec = LsbCodec::new();
    assert_eq!(codec.delimiter(), "###END###");
    assert_eq!(text_to_bits("HELLO###END###").unwrap().len(), 112);

    let carrier = Carrier::gradient(10, 10);
    assert_eq!(carrier.capacity_bits(), 300);

    let embedded = codec.embed(&carrier, "HELLO").unwrap();
    assert_eq!(codec.extract(&embedded).unwrap(), Some("HELLO".to_owned()));
}

/// 场景验证：长度 50 的载荷嵌入 2×2 RGB 载体必须报告 472/12
#[test]
fn test_oversized_payload_scenario() {
    let codec = LsbCodec::new();
    let carrier = Carrier::from_samples(vec![0u8; 12], 2, 2, 3);
    let payload = "a".repeat(50);

    match codec.embed(&carrier, &payload) {
        Err(Error::CapacityExceeded {
            required,
            available,
        }) => {
            assert_eq!(required, 472);
            assert_eq!(available, 12);
        }
        other => panic!("Expected CapacityExceeded, got: {:?}", other),
    }
}

/// 验证容量边界：成帧位流恰好等于容量时成功，多出 1 个样本缺口则失败
#[test]
fn test_capacity_boundary() {
    let codec = LsbCodec::new();

    // "A###END###" = 10 字符 = 80 bits，恰好填满 80 个样本
    let exact = Carrier::from_samples(vec![0u8; 80], 80, 1, 1);
    let embedded = codec.embed(&exact, "A").unwrap();
    assert_eq!(codec.extract(&embedded).unwrap(), Some("A".to_owned()));

    // 79 个样本差 1 bit
    let short = Carrier::from_samples(vec![0u8; 79], 79, 1, 1);
    match codec.embed(&short, "A") {
        Err(Error::CapacityExceeded {
            required,
            available,
        }) => {
            assert_eq!(required, 80);
            assert_eq!(available, 79);
        }
        other => panic!("Expected CapacityExceeded, got: {:?}", other),
    }
}

/// 验证嵌入只改写位流前缀的最低位，前缀之外的样本每一位都保持原样
#[test]
fn test_embed_preserves_untouched_bits() {
    let codec = LsbCodec::new();
    let carrier = patterned_carrier(10, 20);
    let embedded = codec.embed(&carrier, "HELLO").unwrap();

    let framed_bits = text_to_bits("HELLO###END###").unwrap();
    assert_eq!(framed_bits.len(), 112);

    for (i, (&before, &after)) in carrier
        .samples()
        .iter()
        .zip(embedded.samples())
        .enumerate()
    {
        if i < framed_bits.len() {
            // 前缀：高 7 bits 不变，最低位等于成帧位流
            assert_eq!(before >> 1, after >> 1, "Upper bits changed at {i}");
            assert_eq!(after & 1, framed_bits[i], "LSB mismatch at {i}");
        } else {
            // 前缀之外：完整 8 bits 原样保留
            assert_eq!(before, after, "Tail sample changed at {i}");
        }
    }

    // 嵌入产生的是副本，原载体不被触碰
    assert_eq!(carrier, patterned_carrier(10, 20));
}

/// 验证对同一隐写图像重复提取得到完全一致的结果
#[test]
fn test_extract_is_idempotent() {
    let codec = LsbCodec::new();
    let carrier = Carrier::gradient(40, 30);
    let embedded = codec.embed(&carrier, "Same twice.").unwrap();

    let first = codec.extract(&embedded).unwrap();
    let second = codec.extract(&embedded).unwrap();
    assert_eq!(first, Some("Same twice.".to_owned()));
    assert_eq!(first, second);
}

/// 验证「未找到隐藏数据」与「恢复出空文本」是两种可区分的结果
#[test]
fn test_no_hidden_data_is_distinct_from_empty_payload() {
    let codec = LsbCodec::new();

    // 全零载体的 LSB 全为 0，分隔符不可能被命中
    let blank = Carrier::from_samples(vec![0u8; 300], 10, 10, 3);
    assert_eq!(codec.extract(&blank).unwrap(), None);

    // 嵌入空载荷后只剩分隔符，恢复结果是空字符串而不是 None
    let embedded = codec.embed(&blank, "").unwrap();
    assert_eq!(codec.extract(&embedded).unwrap(), Some(String::new()));
}

/// 验证载荷中出现分隔符字节序列时在第一次出现处提前截断（已记录的既定行为）
#[test]
fn test_payload_containing_delimiter_truncates_early() {
    let codec = LsbCodec::new();
    let carrier = Carrier::from_samples(vec![0u8; 600], 10, 20, 3);

    let embedded = codec.embed(&carrier, "ABC###END###XYZ").unwrap();
    assert_eq!(codec.extract(&embedded).unwrap(), Some("ABC".to_owned()));
}

/// 验证自定义分隔符的往返，以及分隔符不一致时得到「未找到隐藏数据」
#[test]
fn test_custom_delimiter() {
    let custom = LsbCodec::new().with_delimiter("<<STOP>>");
    let carrier = Carrier::from_samples(vec![0u8; 600], 10, 20, 3);

    let embedded = custom.embed(&carrier, "HELLO").unwrap();
    assert_eq!(custom.extract(&embedded).unwrap(), Some("HELLO".to_owned()));

    // 用默认分隔符扫描同一载体：载荷与 <<STOP>> 的字节中不含 '#'，
    // 其余样本全零，必然扫不到
    let default = LsbCodec::new();
    assert_eq!(default.extract(&embedded).unwrap(), None);
}

/// 验证 (row, col, channel) 到扁平下标的光栅顺序映射
#[test]
fn test_raster_order_indexing() {
    let carrier = Carrier::gradient(4, 3);
    assert_eq!(carrier.width(), 4);
    assert_eq!(carrier.height(), 3);
    assert_eq!(carrier.channels(), 3);
    assert_eq!(carrier.capacity_bits(), 36);

    assert_eq!(carrier.sample_index(0, 0, 0), 0);
    assert_eq!(carrier.sample_index(0, 0, 2), 2);
    assert_eq!(carrier.sample_index(0, 1, 0), 3);
    assert_eq!(carrier.sample_index(1, 0, 0), 12);
    assert_eq!(carrier.sample_index(1, 2, 0), 18);
    assert_eq!(carrier.sample_index(2, 3, 2), 35);
}

/// 验证 PNG 保存与重新加载后的样本值逐字节一致（无损往返）
#[test]
fn test_png_round_trip_preserves_samples() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("gradient.png");

    let carrier = Carrier::gradient(16, 9);
    carrier.save(&path)?;

    let reloaded = Carrier::load(&path)?;
    assert_eq!(reloaded.width(), 16);
    assert_eq!(reloaded.height(), 9);
    assert_eq!(reloaded.channels(), 3);
    assert_eq!(reloaded.samples(), carrier.samples());

    Ok(())
}

/// 验证经过磁盘往返的完整隐写流程
#[test]
fn test_embed_save_load_extract() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("hidden.png");
    let codec = LsbCodec::new();

    let carrier = Carrier::gradient(32, 32);
    let embedded = codec.embed(&carrier, "Across the disk and back.")?;
    embedded.save(&path)?;

    let reloaded = Carrier::load(&path)?;
    assert_eq!(
        codec.extract(&reloaded)?,
        Some("Across the disk and back.".to_owned())
    );

    Ok(())
}

/// 验证加载不存在的文件会报告载体加载错误
#[test]
fn test_load_missing_file_fails() {
    let result = Carrier::load(std::path::Path::new("definitely/not/here.png"));
    match result {
        Err(Error::CarrierLoad { path, .. }) => {
            assert!(path.ends_with("here.png"));
        }
        other => panic!("Expected CarrierLoad error, got: {:?}", other),
    }
}

/// 验证 hex 编解码的往返与错误分类
#[test]
fn test_hex_codec() {
    assert_eq!(hexcodec::to_hex("Hello"), "48656c6c6f");
    assert_eq!(hexcodec::from_hex("48656c6c6f").unwrap(), "Hello");

    // 首尾空白会被忽略
    assert_eq!(hexcodec::from_hex(" 48656c6c6f\n").unwrap(), "Hello");

    assert!(matches!(
        hexcodec::from_hex("zz"),
        Err(Error::InvalidHex(_))
    ));
    assert!(matches!(
        hexcodec::from_hex("ff"),
        Err(Error::InvalidUtf8(_))
    ));
}
