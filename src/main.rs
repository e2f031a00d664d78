//! Command-line front end: reads points, prints the contour.
//!
//! Usage:
//! ```text
//! echo "0 0  2 0  2 2  0 2  1 1" | enchanter
//! enchanter --input points.txt --rule bounded
//! RUST_LOG=enchanter=trace enchanter --input points.txt
//! ```
//!
//! Input is a whitespace-separated list of `x y` pairs; `#` starts a
//! comment that runs to the end of the line.

use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use enchanter::{ContourParams, CrossingRule, Enchant, PointSet, Polygon};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "enchanter")]
#[command(about = "Build a closed contour around a set of 2D points")]
struct Cmd {
    /// File with `x y` pairs; reads stdin when omitted
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// Edge crossing test used to classify points
    #[arg(long, value_enum, default_value_t = Rule::XRange)]
    rule: Rule,

    /// Print origin-relative coordinates instead of input coordinates
    #[arg(long)]
    relative: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Rule {
    XRange,
    Bounded,
}

impl From<Rule> for CrossingRule {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::XRange => CrossingRule::XRange,
            Rule::Bounded => CrossingRule::Bounded,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();

    let level = if cmd.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let text = match &cmd.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };

    let coordinates = parse_coordinates(&text)?;
    tracing::info!(points = coordinates.len(), "input parsed");

    let mut points = PointSet::from_coordinates(&coordinates)?;
    points.create();

    let params = ContourParams::new(cmd.rule.into());
    let contour = Enchant::with_params(&points, params).execute()?;

    let stdout = io::stdout();
    write_contour(&mut stdout.lock(), &contour, !cmd.relative)?;
    Ok(())
}

/// Parses whitespace-separated `x y` pairs, skipping `#` comments.
fn parse_coordinates(text: &str) -> Result<Vec<(f64, f64)>> {
    let mut values = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let content = line.split('#').next().unwrap_or_default();
        for token in content.split_whitespace() {
            let value: f64 = token
                .parse()
                .with_context(|| format!("line {}: invalid number {token:?}", line_no + 1))?;
            values.push(value);
        }
    }

    if values.len() % 2 != 0 {
        bail!("expected x y pairs, got {} values", values.len());
    }
    Ok(values.chunks_exact(2).map(|c| (c[0], c[1])).collect())
}

/// Writes one line per boundary segment with its start coordinate.
fn write_contour(out: &mut impl Write, contour: &Polygon, zero_origin: bool) -> Result<()> {
    writeln!(out, "Figure: Number of lines is {}", contour.len())?;
    for i in 0..contour.len() {
        let segment = contour.get_segment(i, zero_origin)?;
        writeln!(out, "| < {}; {} >", segment.start.x, segment.start.y)?;
    }
    Ok(())
}
