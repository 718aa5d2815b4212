use clap::Parser;

use lsb_veil::{
    cli::{Cli, Commands},
    handler::{
        handle_hex_decode, handle_hex_encode, handle_hide, handle_info, handle_recover,
        handle_sample,
    },
    speech::{ConsoleSpeaker, NullSpeaker, Speaker},
    stego::LsbCodec,
};

/// 程序的主入口点
///
/// 负责解析命令行参数，构建编解码器与语音协作对象，
/// 并根据指定的子命令将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();
    let codec = LsbCodec::new().with_verbose(cli.verbose);

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Hide(args) => handle_hide(args, &codec),
        Commands::Recover(args) => {
            let mut speaker = build_speaker(args.speak);
            handle_recover(args, &codec, speaker.as_mut())
        }
        Commands::Info(args) => handle_info(args, &codec),
        Commands::Sample(args) => handle_sample(args),
        Commands::HexEncode(args) => handle_hex_encode(args),
        Commands::HexDecode(args) => {
            let mut speaker = build_speaker(args.speak);
            handle_hex_decode(args, speaker.as_mut())
        }
    }
}

/// 根据 `--speak` 标志构建语音协作对象，其生命周期由本入口负责
fn build_speaker(speak: bool) -> Box<dyn Speaker> {
    if speak {
        Box::new(ConsoleSpeaker)
    } else {
        Box::new(NullSpeaker)
    }
}
