use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use ui::{App, UiApp, build_app_context};
use weekday_core::current_year;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidYear { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidYear { raw } => write!(f, "invalid --year value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    starting_year: i32,
}

impl UiApp for DesktopApp {
    fn starting_year(&self) -> i32 {
        self.starting_year
    }
}

struct Args {
    starting_year: i32,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--year <year>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --year <current calendar year>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  WEEKDAY_YEAR");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut starting_year = std::env::var("WEEKDAY_YEAR")
            .ok()
            .and_then(|value| value.parse::<i32>().ok())
            .unwrap_or_else(current_year);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--year" => {
                    let value = require_value(args, "--year")?;
                    starting_year = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidYear { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { starting_year })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let app = DesktopApp {
        starting_year: parsed.starting_year,
    };
    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Weekday Game")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
