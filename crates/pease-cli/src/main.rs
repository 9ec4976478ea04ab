//! Pease Number calculator
//!
//! Main entry point: one-shot calculation from command-line arguments, or the
//! interactive prompt loop. All calculation logic lives in pease-core; this
//! binary only parses, validates date ranges, and formats.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

use pease_core::{DEFAULT_STEP_BUDGET, PeaseCalculator, PeaseRecord};

/// Pease Number calculator
#[derive(Parser, Debug)]
#[command(name = "pease")]
#[command(author, version, about = "What's your Pease Number?", long_about = None)]
struct Args {
    /// Date as MONTH DAY YEAR; omit to run the interactive prompt
    #[arg(value_names = ["MONTH", "DAY", "YEAR"], num_args = 3)]
    date: Vec<i64>,

    /// Collatz step budget before declaring non-convergence
    #[arg(long = "budget", default_value_t = DEFAULT_STEP_BUDGET)]
    budget: u32,

    /// Print the one-shot result as JSON (one-shot mode only)
    #[arg(long = "json", requires = "date")]
    json: bool,
}

/// Calendar range check. The year floor keeps inputs in the range the
/// original assignment allows (no birthday predates the oldest living
/// person, born 1909).
fn valid_date(month: i64, day: i64, year: i64) -> bool {
    (1..=12).contains(&month) && (1..=31).contains(&day) && year >= 1909
}

/// Parse a prompt line into a date triple, or an error message to display.
fn parse_line(line: &str) -> Result<(i64, i64, i64), &'static str> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() != 3 {
        return Err("Error: Please enter exactly 3 values (MM DD YYYY)");
    }
    let mut nums = [0i64; 3];
    for (slot, part) in nums.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| "Error: Please enter valid integers")?;
    }
    if !valid_date(nums[0], nums[1], nums[2]) {
        return Err("Error: Invalid date values");
    }
    Ok((nums[0], nums[1], nums[2]))
}

fn print_fields(record: &PeaseRecord) {
    println!("  FBC = [{}, {}]", record.fbc.0, record.fbc.1);
    println!("  CFB = [{}, {}, {}]", record.cfb.0, record.cfb.1, record.cfb.2);
    println!("  Pease Number = {}", record.pease);
}

fn print_record(month: i64, day: i64, year: i64, record: &PeaseRecord) {
    println!("\nResults for {}/{}/{}:", month, day, year);
    print_fields(record);
}

/// Prompt loop: read "MM DD YYYY" lines until an empty line or EOF. The
/// calculator (and its memo tables) persists across iterations.
fn interactive_loop(calc: &mut PeaseCalculator) -> io::Result<()> {
    let stdin = io::stdin();
    loop {
        print!("\nEnter Month Day Year (MM DD YYYY) or press Enter to quit: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            return Ok(());
        }
        if line.trim().is_empty() {
            return Ok(());
        }

        let (month, day, year) = match parse_line(&line) {
            Ok(triple) => triple,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };
        match calc.calculate(month, day, year as u64) {
            Ok(record) => print_record(month, day, year, &record),
            Err(err) => println!("Error: {}", err),
        }
    }
}

/// One-shot mode: calculate, print (optionally as JSON), exit non-zero on
/// any failure.
fn one_shot(calc: &mut PeaseCalculator, args: &Args) -> io::Result<ExitCode> {
    let (month, day, year) = (args.date[0], args.date[1], args.date[2]);
    if !valid_date(month, day, year) {
        eprintln!("Error: Invalid date values");
        return Ok(ExitCode::FAILURE);
    }
    match calc.calculate(month, day, year as u64) {
        Ok(record) => {
            if args.json {
                let json = serde_json::to_string_pretty(&record).map_err(io::Error::other)?;
                println!("{}", json);
            } else {
                print_record(month, day, year, &record);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> io::Result<ExitCode> {
    let args = Args::parse();
    let mut calc = PeaseCalculator::with_budget(args.budget);

    if !args.date.is_empty() {
        return one_shot(&mut calc, &args);
    }

    println!("Pease Number Calculator");

    // Worked example from the assignment handout.
    println!("\nExample Birthday: 04 10 1982");
    match calc.calculate(4, 10, 1982) {
        Ok(record) => print_fields(&record),
        Err(err) => println!("Error: {}", err),
    }

    interactive_loop(&mut calc)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_date_ranges() {
        assert!(valid_date(1, 1, 1909));
        assert!(valid_date(12, 31, 2026));
        assert!(!valid_date(0, 10, 1982));
        assert!(!valid_date(13, 10, 1982));
        assert!(!valid_date(4, 0, 1982));
        assert!(!valid_date(4, 32, 1982));
        assert!(!valid_date(4, 10, 1908));
        assert!(!valid_date(-4, 10, 1982));
    }

    #[test]
    fn test_json_flag_needs_a_date() {
        assert!(Args::try_parse_from(["pease", "--json"]).is_err());
        let args = Args::try_parse_from(["pease", "--json", "4", "10", "1982"]).unwrap();
        assert!(args.json);
        assert_eq!(args.date, vec![4, 10, 1982]);
    }

    #[test]
    fn test_parse_line_accepts_triple() {
        assert_eq!(parse_line("4 10 1982"), Ok((4, 10, 1982)));
        assert_eq!(parse_line("  04   10  1982  "), Ok((4, 10, 1982)));
    }

    #[test]
    fn test_parse_line_rejects_wrong_arity() {
        assert!(parse_line("4 10").is_err());
        assert!(parse_line("4 10 1982 7").is_err());
    }

    #[test]
    fn test_parse_line_rejects_non_integers() {
        assert_eq!(
            parse_line("four ten 1982"),
            Err("Error: Please enter valid integers")
        );
    }

    #[test]
    fn test_parse_line_rejects_out_of_range() {
        assert_eq!(parse_line("13 10 1982"), Err("Error: Invalid date values"));
        assert_eq!(parse_line("4 10 1800"), Err("Error: Invalid date values"));
    }
}
