use std::io::Read;
use std::path::PathBuf;

#[derive(Debug)]
struct AppArgs {
    hex: bool,
    offset: Option<usize>,
    len: Option<usize>,
    path: Option<PathBuf>,
}

impl AppArgs {
    const HELP: &str = "\
8単位符号の文字列をデコードして表示するコマンド

USAGE:
  decode [OPTIONS] [PATH]

FLAGS:
  -h, --help        このヘルプを表示する
  --hex             入力を16進数のテキストとして読み込む

OPTIONS:
  --offset [N]      デコードを開始する位置。既定値は0
  --len [N]         デコードするバイト数。
                    未指定の場合は入力の終わりまでデコードする。

ARGS:
  <PATH>            デコードするファイルのパス。
                    未指定の場合は標準入力から読み込む。
";

    pub fn parse() -> Result<AppArgs, Box<dyn std::error::Error>> {
        let mut args = pico_args::Arguments::from_env();

        if args.contains(["-h", "--help"]) {
            println!("{}", Self::HELP);
            std::process::exit(0);
        }

        Ok(AppArgs {
            hex: args.contains("--hex"),
            offset: args.opt_value_from_str("--offset")?,
            len: args.opt_value_from_str("--len")?,
            path: args.opt_free_from_str()?,
        })
    }
}

/// 空白区切りを許す16進数のテキストをバイト列にする。
fn parse_hex(text: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let digits: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err("odd number of hex digits".into());
    }

    digits
        .chunks_exact(2)
        .map(|pair| -> Result<u8, Box<dyn std::error::Error>> {
            Ok(u8::from_str_radix(std::str::from_utf8(pair)?, 16)?)
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = AppArgs::parse()?;

    env_logger::init();

    let mut input = Vec::new();
    match &args.path {
        Some(path) => input = std::fs::read(path)?,
        None => {
            std::io::stdin().read_to_end(&mut input)?;
        }
    }
    if args.hex {
        input = parse_hex(std::str::from_utf8(&input)?)?;
    }

    let s = aribb24::AribStr::from_bytes(&input);
    log::debug!("input: {:?}", s);

    let offset = args.offset.unwrap_or(0);
    let len = args.len.unwrap_or(s.len().saturating_sub(offset));
    let text = s.decode_range(offset, len)?;
    println!("{}", text);

    Ok(())
}
