use clap::Parser;

use lsb_seal::{
    cli::{Cli, Commands},
    handler::{handle_analyze, handle_hide, handle_keygen, handle_reveal},
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令（`hide`、`reveal`、
/// `analyze` 或 `keygen`）将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 根据子命令调用相应的处理函数
    match cli.command {
        Commands::Hide(args) => handle_hide(args),
        Commands::Reveal(args) => handle_reveal(args),
        Commands::Analyze(args) => handle_analyze(args),
        Commands::Keygen(args) => handle_keygen(args),
    }
}
