// Reads two integers from stdin and prints their greatest common divisor.
//
//   $ echo "48 18" | gcd
//   Enter two positive integers: G.C.D of 48 and 18 is 6.
//
// Exit status is 0 on success, 1 when the input is not two integers and 2
// when the environment is misconfigured. Set GCD_LOG=debug for diagnostics on stderr.

use std::io::{self, Write};
use std::process::exit;

use anyhow::{Context, Result};
use tracing::info;

use gcd_calculator::config::Config;
use gcd_calculator::{gcd, logger, read_operands, InputParseError};

const PROMPT: &str = "Enter two positive integers: ";

const EXIT_OK: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 2;

fn main() {
    let exit_code = match run() {
        Ok(()) => EXIT_OK,
        Err(e) => {
            eprintln!("error: {:#}", e);
            // note: bad input is the user's mistake, anything else is the environment's
            if e.downcast_ref::<InputParseError>().is_some() {
                EXIT_INPUT
            } else {
                EXIT_CONFIG
            }
        }
    };
    exit(exit_code)
}

fn run() -> Result<()> {
    let config = Config::from_env()?;
    logger::install(&config).context("failed to install logger")?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", PROMPT)?;
    stdout.flush()?;

    let (a, b) = read_operands(io::stdin().lock())?;
    let result = gcd(a, b);
    info!(a, b, result, "computed gcd");

    writeln!(stdout, "G.C.D of {} and {} is {}.", a, b, result)?;
    Ok(())
}
