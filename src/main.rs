use std::error::Error;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use unique_key::{init_tracing, KeyConfig, KeyGenerator};

#[derive(Parser, Debug)]
#[command(name = "unique-key", about = "Generate one-time confirmation keys")]
struct Args {
    /// Key length in hex characters (defaults to UNIQUE_KEY_LENGTH or 32)
    #[arg(short, long)]
    length: Option<usize>,

    /// Number of keys to print, one per line
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Refuse lengths below the secure minimum
    #[arg(long, default_value_t = false)]
    checked: bool,

    /// Use a throwaway secret when SECRET_KEY is unset
    #[arg(long, default_value_t = false)]
    allow_generated_secret: bool,
}

/// Write `args.count` keys to `out`, one per line.
///
/// An explicit `--length` wins over the configured length, which must itself
/// pass the length floor.
fn run(args: Args, config: KeyConfig, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
    let secret = if args.allow_generated_secret {
        config.get_or_generate_secret().0
    } else {
        config.require_secret()?
    };

    let length = match args.length {
        Some(length) => length,
        None => config.checked_key_length()?,
    };
    let generator = KeyGenerator::new(secret).with_default_length(length);
    info!(length, count = args.count, "generating keys");

    for _ in 0..args.count {
        let key = if args.checked {
            generator.generate_checked(length)?
        } else {
            generator.generate()
        };
        writeln!(out, "{key}")?;
    }

    Ok(())
}

fn main() -> ExitCode {
    init_tracing("unique_key=info");
    let args = Args::parse();

    let stdout = std::io::stdout();
    match run(args, KeyConfig::from_env(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
