//! Command line front end: lists the scenario catalog and prints sampled
//! curves for a plotting tool to pick up.

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use fuzzy_sets::{BaseSets, Curve, SamplingDomain, Scenario};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fuzzy-sets")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every scenario with its identifier
    List,

    /// Sample every curve of a scenario
    Sample {
        /// Scenario identifier, e.g. `union-2` or `de-morgan-i1-u3`
        scenario: Scenario,

        #[command(flatten)]
        domain: DomainArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
    },

    /// Report how far apart the two sides of each De Morgan pairing are
    Duals {
        #[command(flatten)]
        domain: DomainArgs,
    },
}

#[derive(clap::Args)]
struct DomainArgs {
    /// First sample point
    #[arg(long, default_value_t = SamplingDomain::DEFAULT_START, allow_negative_numbers = true)]
    start: f64,

    /// Last sample point (inclusive when reachable by whole steps)
    #[arg(long, default_value_t = SamplingDomain::DEFAULT_END, allow_negative_numbers = true)]
    end: f64,

    /// Distance between sample points
    #[arg(long, default_value_t = SamplingDomain::DEFAULT_STEP)]
    step: f64,
}

impl DomainArgs {
    fn domain(&self) -> Result<SamplingDomain> {
        Ok(SamplingDomain::new(self.start, self.end, self.step)?)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// `label,x,y` rows
    Csv,
    /// One JSON document with every curve
    Json,
}

#[derive(Serialize)]
struct SampleOutput<'a> {
    scenario: String,
    title: String,
    domain: &'a SamplingDomain,
    curves: &'a [Curve],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::List => {
            for scenario in Scenario::all() {
                writeln!(out, "{:<20} {}", scenario.slug(), scenario.title())?;
            }
        },
        Commands::Sample {
            scenario,
            domain,
            format,
        } => {
            let domain = domain.domain()?;
            let curves = scenario
                .curves(&BaseSets::reference(), &domain)
                .with_context(|| format!("failed to sample scenario '{}'", scenario.slug()))?;

            info!(scenario = %scenario.slug(), curves = curves.len(), points = domain.len(), "sampled");

            match format {
                Format::Csv => write_csv(&mut out, &curves)?,
                Format::Json => {
                    let output = SampleOutput {
                        scenario: scenario.slug(),
                        title: scenario.title(),
                        domain: &domain,
                        curves: &curves,
                    };

                    serde_json::to_writer_pretty(&mut out, &output)?;
                    writeln!(out)?;
                },
            }
        },
        Commands::Duals { domain } => {
            let domain = domain.domain()?;
            let sets = BaseSets::reference();

            for scenario in Scenario::all() {
                let Scenario::DeMorgan { .. } = scenario else {
                    continue;
                };
                let series = scenario.series();
                let lhs = series[2].expr.build(&sets);
                let rhs = series[3].expr.build(&sets);
                let deviation = domain.max_deviation(&lhs, &rhs)?;
                let verdict = if scenario.is_de_morgan_dual() { "dual" } else { "not dual" };

                writeln!(
                    out,
                    "{:<20} {:<28} max deviation {:.3e} ({verdict})",
                    scenario.slug(),
                    format!("{} vs {}", series[2].label, series[3].label),
                    deviation
                )?;
            }
        },
    }

    out.flush()?;

    Ok(())
}

fn write_csv(out: &mut impl Write, curves: &[Curve]) -> io::Result<()> {
    writeln!(out, "label,x,y")?;

    for curve in curves {
        let label = format!("\"{}\"", curve.label.replace('"', "\"\""));

        for (x, y) in &curve.points {
            writeln!(out, "{label},{x},{y}")?;
        }
    }

    Ok(())
}
