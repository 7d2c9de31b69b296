//! Tiny `clap`-driven CLI exercising the library from the command
//! line: parse a width + base + string, print the value back out in
//! decimal and hex, or round-trip it through the varint codec.
//!
//! Purely illustrative — nothing in the library depends on this
//! binary, and it only builds with `--features cli`.

use clap::{Parser, Subcommand, ValueEnum};
use uintx::{Uint1024, Uint128, Uint192, Uint2048, Uint256, Uint512, Uint96};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Width {
    W96,
    W128,
    W192,
    W256,
    W512,
    W1024,
    W2048,
}

#[derive(Parser)]
#[command(name = "demo", about = "Exercise the fixed-width uint library")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a number and print its decimal/hex forms.
    Parse {
        #[arg(value_enum)]
        width: Width,
        /// Base to parse in; 0 auto-detects a 0b/0o/0x/leading-0 prefix.
        #[arg(long, default_value_t = 10)]
        base: i32,
        value: String,
    },
    /// Round-trip a decimal value through the varint codec.
    Varint {
        #[arg(value_enum)]
        width: Width,
        value: String,
    },
}

macro_rules! dispatch {
    ($width:expr, |$T:ident| $body:block) => {
        match $width {
            Width::W96 => {
                type $T = Uint96;
                $body
            }
            Width::W128 => {
                type $T = Uint128;
                $body
            }
            Width::W192 => {
                type $T = Uint192;
                $body
            }
            Width::W256 => {
                type $T = Uint256;
                $body
            }
            Width::W512 => {
                type $T = Uint512;
                $body
            }
            Width::W1024 => {
                type $T = Uint1024;
                $body
            }
            Width::W2048 => {
                type $T = Uint2048;
                $body
            }
        }
    };
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { width, base, value } => {
            dispatch!(width, |T| {
                match T::parse(&value, base) {
                    Ok(v) => {
                        println!("decimal: {}", v);
                        println!("hex:     {}", uintx::format_radix(&v, 16));
                    }
                    Err(e) => {
                        eprintln!("error: {e}");
                        std::process::exit(1);
                    }
                }
            });
        }
        Command::Varint { width, value } => {
            dispatch!(width, |T| {
                match T::parse(&value, 10) {
                    Ok(v) => {
                        let mut buf = Vec::new();
                        let n = uintx::append_uvarint(&mut buf, v);
                        let (got, read) = uintx::uvarint::<T>(&buf);
                        println!("encoded {n} bytes: {buf:02x?}");
                        println!("decoded {read} bytes back to {got}");
                        assert_eq!(got, v, "round-trip mismatch");
                    }
                    Err(e) => {
                        eprintln!("error: {e}");
                        std::process::exit(1);
                    }
                }
            });
        }
    }
}

