//! CLI probe for the postaddr core crate.
//!
//! # Responsibility
//! - Validate addresses and print their derived views from the command
//!   line, independently of any host query engine.
//! - Compare two addresses with the full comparison surface.

use postaddr_core::{default_log_level, init_logging, PostAddress};
use std::cmp::Ordering;
use std::process::ExitCode;

const USAGE: &str = "usage:
  postaddr_cli check <address>...
  postaddr_cli cmp <address-a> <address-b>";

fn main() -> ExitCode {
    // Logging is opt-in for the CLI probe; the library never initializes
    // it on its own.
    if let Ok(log_dir) = std::env::var("POSTADDR_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("warning: {err}");
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.split_first() {
        Some((command, rest)) if command == "check" && !rest.is_empty() => check(rest),
        Some((command, rest)) if command == "cmp" && rest.len() == 2 => cmp(&rest[0], &rest[1]),
        _ => {
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}

fn check(raw_addresses: &[String]) -> ExitCode {
    let mut failures = 0;
    for raw in raw_addresses {
        match PostAddress::parse(raw.as_str()) {
            Ok(address) => {
                println!("ok       {address}");
                println!("  unit     {}", address.display_unit());
                println!("  postcode {}", address.display_postcode());
                println!("  short    {}", address.display_short());
                println!("  hash32   {:#010x}", address.hash32());
            }
            Err(err) => {
                eprintln!("rejected {err}");
                failures += 1;
            }
        }
    }
    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmp(raw_a: &str, raw_b: &str) -> ExitCode {
    let (a, b) = match (PostAddress::parse(raw_a), PostAddress::parse(raw_b)) {
        (Ok(a), Ok(b)) => (a, b),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("rejected {err}");
            return ExitCode::FAILURE;
        }
    };

    let result = a.compare(&b);
    let relation = match result.ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    println!("cmp      {}", result.raw());
    println!("order    a {relation} b");
    println!(
        "tilde    {}",
        if a.approx_eq(&b) { "a ~ b" } else { "a !~ b" }
    );
    ExitCode::SUCCESS
}
