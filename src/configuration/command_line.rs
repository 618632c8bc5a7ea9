use crate::configuration::constants::cargo_env::CARGO_PKG_NAME;
use clap::arg_enum;
use log::LevelFilter;
use std::path::PathBuf;
use structopt::StructOpt;

arg_enum! {
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum LogLevel {
        Off, Error, Warn, Info, Debug, Trace,
    }
}

arg_enum! {
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum SampleKind {
        Required, Partial, Full, New,
    }
}

#[derive(StructOpt, Debug)]
#[structopt(name = CARGO_PKG_NAME)]
pub struct Opt {
    /// Print a single sample instead of all of them
    #[structopt(case_insensitive = true, long, short = "s", possible_values = &SampleKind::variants(), conflicts_with = "criteria")]
    pub sample: Option<SampleKind>,

    /// Criteria file applied to the persisted samples. Supported: YAML, JSON, TOML, HJSON
    #[structopt(long, short = "c", parse(from_os_str))]
    pub criteria: Option<PathBuf>,

    /// Zero-based page of the matching samples
    #[structopt(long)]
    pub page: Option<usize>,

    /// Page size, 20 when only --page is given
    #[structopt(long)]
    pub size: Option<usize>,

    /// Print only the number of matching samples
    #[structopt(long)]
    pub count: bool,

    /// Sets a logging level
    #[structopt(case_insensitive = true, long, short = "L", possible_values = &LogLevel::variants(), env = "LOG_LEVEL")]
    pub logging: Option<LogLevel>,

    /// File to which application will write logs
    #[structopt(long, short = "O", env = "LOG_OUTPUT_FILE")]
    pub log_output_file: Option<PathBuf>,
}

impl Opt {
    /// Requested logging level, `Info` when none was given.
    pub fn log_level(&self) -> LevelFilter {
        self.logging.unwrap_or(LogLevel::Info).into()
    }
}

impl Into<LevelFilter> for LogLevel {
    fn into(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
