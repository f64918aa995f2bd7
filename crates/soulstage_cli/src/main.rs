mod logging;
mod render;

use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use soulstage_config::{OutputFormat, SoulstageConfig};
use soulstage_core::{
    BirthCode, BirthInput, Calculator, ChineseCalendar, StageValue, analyze_frequency,
    classify_soul_level, compute_stages,
};
use soulstage_lunar::solar_to_lunar;

#[derive(Parser)]
#[command(name = "soulstage", about = "Soul stage numerology calculator")]
struct Cli {
    /// Path to a TOML config file (default: ./soulstage.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full solar and lunar analysis of a birth date
    Analyze {
        /// Solar birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth hour (00-23)
        #[arg(long, default_value = "")]
        hour: String,
        /// Birth minute (00-59)
        #[arg(long, default_value = "")]
        minute: String,
        /// Mark the birth as falling in a leap month
        #[arg(long)]
        leap: bool,
    },
    /// Convert a solar date to the lunar calendar
    Lunar {
        /// Solar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Five life-stage values for a date
    Stages {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Hour (00-23)
        #[arg(long, default_value = "")]
        hour: String,
        /// Minute (00-59)
        #[arg(long, default_value = "")]
        minute: String,
    },
    /// Soul level of one stage value against a birth code
    Level {
        /// Birth code digits
        #[arg(long)]
        code: String,
        /// Stage value, e.g. 19/10/1
        #[arg(long)]
        stage: String,
    },
    /// Digit frequency table of a birth code
    Digits {
        /// Birth code digits
        #[arg(long)]
        code: String,
        /// Reference year for the high-frequency threshold
        #[arg(long)]
        year: i32,
    },
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn load_config(path: Option<&PathBuf>) -> SoulstageConfig {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    SoulstageConfig::discover(path.map(PathBuf::as_path), &cwd)
        .unwrap_or_else(|e| fail(format!("failed to load config: {e}")))
}

fn parse_code(code: &str) -> BirthCode {
    BirthCode::from_digits(code.trim())
        .unwrap_or_else(|| fail(format!("birth code must be digits only, got '{code}'")))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => fail(format!("failed to serialize output: {e}")),
    }
}

fn main() {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());
    logging::init_logger(&config.logging.filter, cli.verbose);

    let json = cli.json || config.output.format == OutputFormat::Json;
    let bounds = config.date_bounds(Local::now().date_naive());

    match cli.command {
        Commands::Analyze {
            date,
            hour,
            minute,
            leap,
        } => {
            let input = BirthInput::parse(&date, &hour, &minute, leap, bounds)
                .unwrap_or_else(|e| fail(e));
            if input.date.is_none() {
                fail("請輸入完整日期");
            }
            let eval = Calculator::new(ChineseCalendar).evaluate(&input);
            if json {
                print_json(&eval);
            } else {
                print!("{}", render::evaluation(&eval));
            }
        }

        Commands::Lunar { date } => {
            let solar = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
                .unwrap_or_else(|_| fail(format!("invalid date '{date}', expected YYYY-MM-DD")));
            match solar_to_lunar(solar.year(), solar.month(), solar.day()) {
                Ok(lunar) if json => print_json(&lunar),
                Ok(lunar) => print!("{}", render::lunar(&lunar)),
                Err(e) => fail(e),
            }
        }

        Commands::Stages { date, hour, minute } => {
            let input =
                BirthInput::parse(&date, &hour, &minute, false, bounds).unwrap_or_else(|e| fail(e));
            let set = compute_stages(input.date, input.hour, input.minute);
            if json {
                print_json(&set);
            } else {
                print!("{}", render::stages(&set));
            }
        }

        Commands::Level { code, stage } => {
            let code = parse_code(&code);
            let value: StageValue = stage.parse().unwrap_or_else(|e| fail(e));
            let level = classify_soul_level(&code, &value);
            if json {
                print_json(&level);
            } else {
                match level {
                    Some(level) => println!("{level}"),
                    None => println!("-"),
                }
            }
        }

        Commands::Digits { code, year } => {
            let code = parse_code(&code);
            let analysis = analyze_frequency(&code, year);
            if json {
                print_json(&analysis);
            } else {
                print!("{}", render::frequency(&analysis));
            }
        }
    }
}
