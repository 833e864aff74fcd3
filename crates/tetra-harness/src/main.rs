//! `tetra` command-line tool.
//!
//! # Usage
//!
//! ```bash
//! # Run every conformance suite
//! tetra vectors
//!
//! # One suite only
//! tetra vectors --suite tb5
//!
//! # Keystream for one timeslot
//! tetra keystream --tea 1 --hn 0 --mn 1 --fn 1 --tn 1 --dir downlink --key A79839E4BA88EE54A029
//!
//! # Recover a TEA1 key register from known keystream
//! tetra search --hn 0 --mn 1 --fn 1 --tn 1 --dir downlink --keystream 1DEC9C7EC6223D87
//! ```

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use tetra_crypto::{FrameNumbers, LinkDirection, TeaAlgorithm, search_key_register};
use tetra_harness::{DEFAULT_SEARCH_RANGE, RunnerConfig, SuiteRegistry, hex_array};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// TETRA primitive conformance and keystream tool
#[derive(Parser, Debug)]
#[command(name = "tetra")]
#[command(about = "TETRA air-interface primitive tool")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run conformance vector suites
    Vectors {
        /// Run only this suite
        #[arg(long)]
        suite: Option<String>,
    },

    /// Print keystream for the given frame numbers
    Keystream {
        /// Algorithm: 1, 2 or 3
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
        tea: u8,

        #[command(flatten)]
        frame: FrameArgs,

        /// 80-bit key as hex
        #[arg(long)]
        key: String,

        /// Keystream bytes to produce
        #[arg(long, default_value = "64")]
        len: usize,
    },

    /// Search TEA1 key registers reproducing known keystream
    Search {
        #[command(flatten)]
        frame: FrameArgs,

        /// Known keystream as hex
        #[arg(long)]
        keystream: String,

        /// First register value to try
        #[arg(long, default_value_t = *DEFAULT_SEARCH_RANGE.start())]
        start: u32,

        /// Last register value to try
        #[arg(long, default_value_t = *DEFAULT_SEARCH_RANGE.end())]
        end: u32,
    },
}

#[derive(ClapArgs, Debug)]
struct FrameArgs {
    /// Hyperframe number
    #[arg(long)]
    hn: u16,

    /// Multiframe number, 1 to 60
    #[arg(long)]
    mn: u8,

    /// Frame number, 1 to 18
    #[arg(long = "fn")]
    frame: u8,

    /// Timeslot number, 1 to 4
    #[arg(long)]
    tn: u8,

    /// Link direction
    #[arg(long, value_enum, default_value = "downlink")]
    dir: Direction,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Direction {
    Downlink,
    Uplink,
}

impl FrameArgs {
    fn iv(&self) -> Result<u32, tetra_crypto::CryptoError> {
        let direction = match self.dir {
            Direction::Downlink => LinkDirection::Downlink,
            Direction::Uplink => LinkDirection::Uplink,
        };
        let frame = FrameNumbers::new(self.tn, self.frame, self.mn, self.hn, direction)?;
        Ok(frame.to_iv())
    }
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let mut out = io::stdout().lock();
    match args.command {
        Command::Vectors { suite } => {
            let config = RunnerConfig { suite_filter: suite };
            let registry = SuiteRegistry::standard();
            tracing::info!(suites = registry.len(), "running conformance vectors");

            let summary = registry.run(&config)?;
            for report in &summary.reports {
                writeln!(out, "{report}")?;
            }
            if summary.is_success() {
                return Ok(ExitCode::SUCCESS);
            }
            Ok(ExitCode::FAILURE)
        },
        Command::Keystream { tea, frame, key, len } => {
            let algorithm = match tea {
                1 => TeaAlgorithm::Tea1,
                2 => TeaAlgorithm::Tea2,
                _ => TeaAlgorithm::Tea3,
            };
            let iv = frame.iv()?;
            let key = hex_array::<10>(&key)?;
            let generator = algorithm.generator();
            tracing::debug!(algorithm = generator.name(), iv, len, "generating keystream");

            let keystream = generator.keystream(iv, &key, len);
            writeln!(out, "{}", hex::encode_upper(keystream))?;
            Ok(ExitCode::SUCCESS)
        },
        Command::Search { frame, keystream, start, end } => {
            let iv = frame.iv()?;
            let known = hex::decode(&keystream)?;
            if known.is_empty() {
                tracing::warn!("empty keystream matches nothing");
            }
            tracing::info!(iv, start, end, "searching key registers");

            match search_key_register(iv, &known, start..=end) {
                Some(register) => {
                    writeln!(out, "{register:08X}")?;
                    Ok(ExitCode::SUCCESS)
                },
                None => {
                    tracing::warn!("no key register in range reproduces the keystream");
                    Ok(ExitCode::FAILURE)
                },
            }
        },
    }
}
