// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod render;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::{Result, eyre::Context};
use mathgrid::RandSource;
use mathgrid_api::{
    WordProblemResponse, WorksheetRequest, WorksheetResponse, generate_word_problem,
    generate_worksheet,
};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::level_filters::LevelFilter;
use tracing::{debug, error};
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match args.run() {
        Ok(output) => println!("{output}"),
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// MathGrid - printable arithmetic practice worksheets
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Operation to practice: addition, subtraction, multiplication or division
    #[arg(short, long, default_value = "addition")]
    operation: String,

    /// Number of problems on the worksheet
    #[arg(short = 'n', long, default_value_t = 12)]
    count: u32,

    /// Digits in the top number (the dividend for division)
    #[arg(short, long, default_value_t = 2)]
    top_digits: i64,

    /// Smallest top number; enables the custom top range
    #[arg(long, allow_negative_numbers = true)]
    top_min: Option<i64>,

    /// Largest top number; enables the custom top range
    #[arg(long, allow_negative_numbers = true)]
    top_max: Option<i64>,

    /// Digits in the bottom number (the divisor for division)
    #[arg(short, long, default_value_t = 2)]
    bottom_digits: i64,

    /// Fact-family numbers for the bottom operand, comma separated
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    fact_family: Vec<i64>,

    /// Allow division problems with remainders
    #[arg(short, long)]
    allow_remainders: bool,

    /// Cell size: sm, md or lg
    #[arg(short, long, default_value = "md")]
    grid_size: String,

    /// Seed for reproducible worksheets; defaults to the current time
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print a single word problem instead of a worksheet
    #[arg(short, long)]
    word_problem: bool,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Printable text pages
    Text,
    /// JSON for other renderers
    Json,
}

impl Args {
    fn run(&self) -> Result<String> {
        let seed: u64 = self.seed.unwrap_or_else(current_seed);
        let request: WorksheetRequest = self.to_request(seed);
        let mut rng = RandSource::seeded(seed);

        debug!(seed, operation = %request.operation, "Generating");

        if self.word_problem {
            let response: WordProblemResponse =
                generate_word_problem(&request, &mut rng).wrap_err("Failed to generate word problem")?;
            return match self.format {
                OutputFormat::Text => Ok(response.text),
                OutputFormat::Json => serde_json::to_string_pretty(&response)
                    .wrap_err("Failed to serialize word problem"),
            };
        }

        let response: WorksheetResponse =
            generate_worksheet(&request, &mut rng).wrap_err("Failed to generate worksheet")?;
        match self.format {
            OutputFormat::Text => Ok(render::render_worksheet(&response)),
            OutputFormat::Json => {
                serde_json::to_string_pretty(&response).wrap_err("Failed to serialize worksheet")
            }
        }
    }

    fn to_request(&self, seed: u64) -> WorksheetRequest {
        let defaults: WorksheetRequest = WorksheetRequest::default();
        let use_fact_families: bool = !self.fact_family.is_empty();

        WorksheetRequest {
            operation: self.operation.clone(),
            count: f64::from(self.count),
            top_digits: self.top_digits,
            use_custom_top_range: self.top_min.is_some() || self.top_max.is_some(),
            top_min: self.top_min,
            top_max: self.top_max,
            bottom_digits: self.bottom_digits,
            use_fact_families,
            selected_numbers: if use_fact_families {
                self.fact_family.clone()
            } else {
                defaults.selected_numbers
            },
            allow_remainders: self.allow_remainders,
            grid_size: self.grid_size.clone(),
            seed,
        }
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

/// Milliseconds since the Unix epoch, so every run gets a fresh worksheet.
fn current_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
        })
}
