use std::{env, path::PathBuf, process};

use stay_core::{
    cli::{
        commands,
        output::{self, OutputPreferences},
    },
    init,
    utils::build_info,
};

fn main() {
    init();
    output::set_preferences(OutputPreferences::from_env());

    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the command ran but its verdict is a failure.
fn run() -> Result<bool, Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });
    let mut next_arg = || {
        args.next().unwrap_or_else(|| {
            print_usage();
            process::exit(1);
        })
    };

    match command.as_str() {
        "quote" => {
            let check_in = next_arg();
            let check_out = next_arg();
            let price = next_arg();
            let config = commands::load_config()?;
            let quote = commands::quote(&check_in, &check_out, &price)?;
            println!("{}", commands::render_quote(&quote, &config));
        }
        "validate" => {
            let path = PathBuf::from(next_arg());
            let result = commands::validate_file(&path)?;
            if !result.is_ok() {
                for line in commands::render_validation(&result) {
                    output::error(line);
                }
                return Ok(false);
            }
            output::success("booking request is valid");
        }
        "stats" => {
            let properties = PathBuf::from(next_arg());
            let bookings = PathBuf::from(next_arg());
            let as_of = args.next();
            let config = commands::load_config()?;
            let report = commands::stats(&properties, &bookings, as_of.as_deref(), &config)?;
            println!("{}", commands::render_report(&report, &config));
        }
        "version" => {
            println!("{}", build_info::current().summary());
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(true)
}

fn print_usage() {
    eprintln!(
        "Usage: stay_core_cli <command>\n\
         Commands:\n  \
         quote <check-in> <check-out> <price-per-night>\n  \
         validate <request.json>\n  \
         stats <properties.json> <bookings.json> [as-of]\n  \
         version"
    );
}
