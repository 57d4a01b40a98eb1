use clap::Parser;

use quad_roots::{run, Arithmetic};

use std::io::{stdin, stdout, Write};
use std::process::ExitCode;

/// Solves ax^2 + bx + c = 0 for integer coefficients read from stdin.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Use an exact discriminant and double precision roots instead of
    /// 32-bit wrapping integers and single precision.
    #[arg(short, long)]
    wide: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let arith = if args.wide {
        Arithmetic::Wide
    } else {
        Arithmetic::Native
    };

    let mut out = stdout().lock();
    match run(&mut stdin().lock(), &mut out, arith) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // end the prompt line so the message starts on its own
            let _ = writeln!(out);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
