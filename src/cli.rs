use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::TraceError;
use crate::render::Rendered;
use crate::trace::{SortStats, Variant};
use crate::{is_sorted, sort_to};

/// Samples traced when no `--seq` or `--random` is given
pub const DEMO_SAMPLES: [&[i32]; 2] = [&[5, 7, 8, 9], &[5, 7, 8, 2, 3, 9]];

const RANDOM_RANGE: std::ops::Range<i32> = -100..100;

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum VariantChoice {
    Basic,
    Optimized,
    Both,
}

impl VariantChoice {
    fn variants(self) -> &'static [Variant] {
        match self {
            Self::Basic => &[Variant::Basic],
            Self::Optimized => &[Variant::Optimized],
            Self::Both => &[Variant::Basic, Variant::Optimized],
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Which bubble sort to run on each sample
    #[arg(long, value_enum, default_value_t = VariantChoice::Both)]
    pub variant: VariantChoice,
    /// Sample to sort, e.g. "5,7,8,2,3,9" (repeatable; replaces the built-in samples)
    #[arg(long = "seq", value_name = "LIST")]
    pub sequences: Vec<String>,
    /// Add a random sample of this length
    #[arg(long, value_name = "N")]
    pub random: Option<usize>,
    /// Seed for --random
    #[arg(long)]
    pub seed: Option<u64>,
    /// Skip the per-comparison trace
    #[arg(long)]
    pub quiet: bool,
    /// Print a JSON report of every run instead of the trace
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn verbose(&self) -> bool {
        !(self.quiet || self.json)
    }

    /// Samples to sort, in order: every `--seq`, then the random one
    pub fn samples(&self) -> crate::Result<Vec<Vec<i32>>> {
        let mut samples = self
            .sequences
            .iter()
            .map(|raw| parse_sequence(raw))
            .collect::<crate::Result<Vec<_>>>()?;

        if let Some(len) = self.random {
            samples.push(random_sample(len, self.seed));
        }
        if samples.is_empty() {
            samples = DEMO_SAMPLES.iter().map(|s| s.to_vec()).collect();
        }
        Ok(samples)
    }
}

/// Parse a comma- or whitespace-separated list of integers.
pub fn parse_sequence(raw: &str) -> crate::Result<Vec<i32>> {
    let values = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i32>().map_err(|source| TraceError::InvalidValue {
                token: token.to_string(),
                source,
            })
        })
        .collect::<crate::Result<Vec<i32>>>()?;

    if values.is_empty() {
        return Err(TraceError::EmptySequence(raw.to_string()));
    }
    Ok(values)
}

pub fn random_sample(len: usize, seed: Option<u64>) -> Vec<i32> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..len).map(|_| rng.gen_range(RANDOM_RANGE)).collect()
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub sample: usize,
    pub variant: Variant,
    pub input: Vec<i32>,
    pub sorted: Vec<i32>,
    #[serde(flatten)]
    pub stats: SortStats,
}

#[derive(Debug, Serialize)]
pub struct FullReport {
    pub runs: Vec<RunReport>,
    pub all_sorted: bool,
}

/// Sort every sample with every selected variant, writing to `out`.
///
/// Each run starts from a fresh copy of the sample. When `framed`, every run
/// is wrapped in `Initial Array:` / `Sorted Array:` lines.
pub fn run_samples<W: Write>(
    samples: &[Vec<i32>],
    choice: VariantChoice,
    verbose: bool,
    framed: bool,
    out: &mut W,
) -> crate::Result<Vec<RunReport>> {
    let mut runs = Vec::new();
    for (index, sample) in samples.iter().enumerate() {
        for &variant in choice.variants() {
            let mut data = sample.clone();
            debug!("sample {index}: {variant} sort of {} values", data.len());

            if framed {
                writeln!(out, "Initial Array: {}", Rendered(&data))?;
            }
            let stats = sort_to(&mut data, variant, verbose, out)?;
            if framed {
                writeln!(out, "Sorted Array: {}", Rendered(&data))?;
            }

            runs.push(RunReport {
                sample: index,
                variant,
                input: sample.clone(),
                sorted: data,
                stats,
            });
        }
    }
    Ok(runs)
}

pub fn run() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let samples = cli.samples()?;
    info!(
        "tracing {} sample(s) with variant {:?}",
        samples.len(),
        cli.variant
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let runs = run_samples(&samples, cli.variant, cli.verbose(), !cli.json, &mut out)?;

    if cli.json {
        let all_sorted = runs.iter().all(|run| is_sorted(&run.sorted));
        let full = FullReport { runs, all_sorted };
        serde_json::to_writer(&mut out, &full)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
