//! Enumlogic CLI
//!
//! Diagnostics for hash-encoded enum fields.

use enumlogic_cli::commands::{
    check_values, decode_code, encode_values, print_options, CommandError, ValueArgs,
};

fn main() {
    enumlogic::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "encode" => {
            if args.len() < 3 {
                eprintln!("Usage: enumlogic encode <value>... [--denominator=N]");
                std::process::exit(1);
            }
            let report = parse_values(&args[2..]).and_then(|parsed| encode_values(&parsed));
            print_or_exit(report);
        }
        "decode" => {
            if args.len() < 4 {
                eprintln!("Usage: enumlogic decode <code> <value>... [--denominator=N]");
                eprintln!();
                eprintln!("Resolves a stored integer against the candidate values.");
                std::process::exit(1);
            }
            let report = parse_values(&args[3..]).and_then(|parsed| decode_code(&args[2], &parsed));
            print_or_exit(report);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: enumlogic check <value>... [--denominator=N]");
                std::process::exit(1);
            }
            match parse_values(&args[2..]).and_then(|parsed| check_values(&parsed)) {
                Ok((report, collided)) => {
                    print!("{report}");
                    if collided {
                        std::process::exit(2);
                    }
                }
                Err(err) => fail(&err),
            }
        }
        "options" => {
            if args.len() < 4 {
                eprintln!("Usage: enumlogic options <field> <value[=Text]>...");
                eprintln!("Example: enumlogic options kind apple=Apple dell=Dell hp=HP");
                std::process::exit(1);
            }
            print_or_exit(print_options(&args[2], &args[3..]));
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("enumlogic {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn parse_values(args: &[String]) -> Result<ValueArgs, CommandError> {
    ValueArgs::parse(args)
}

fn print_or_exit(report: Result<String, CommandError>) {
    match report {
        Ok(report) => print!("{report}"),
        Err(err) => fail(&err),
    }
}

fn fail(err: &CommandError) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1);
}

fn print_usage() {
    println!("Enumlogic: symbolic enum values stored as crc32(value) / denominator");
    println!();
    println!("Usage: enumlogic <command> [options]");
    println!();
    println!("Commands:");
    println!("  encode <value>...          Print the code of each value");
    println!("  decode <code> <value>...   Resolve a stored code against candidate values");
    println!("  check <value>...           Report values that share a code (exit 2 if any)");
    println!("  options <field> <v[=T]>... Preview constant, options and predicates");
    println!("  help                       Show this help message");
    println!("  version                    Show version information");
    println!();
    println!("Options:");
    println!("  --denominator=<N>   Hash divisor (default: 100000)");
    println!("  --                  Treat the remaining arguments as values");
    println!();
    println!("Examples:");
    println!("  enumlogic encode apple dell hp");
    println!("  enumlogic decode 14481 apple dell hp");
    println!("  enumlogic check apple dell hp --denominator=1000000");
    println!("  enumlogic options kind apple=Apple dell=Dell hp=HP");
    println!();
    println!("Set RUST_LOG=enumlogic=debug for definition logs.");
}
