use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use cvm_estimator::capacity::calculate_capacity;
use cvm_estimator::Estimator;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Estimate the number of distinct words in a text file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Text file to read.
    path: PathBuf,

    /// Target accuracy of the estimate, between 0 and 1.
    #[arg(long, default_value_t = 0.9)]
    accuracy: f64,

    /// Probability of reaching the target accuracy, between 0 and 1.
    #[arg(long, default_value_t = 0.99)]
    confidence: f64,

    /// Also count words exactly and report the difference.
    #[arg(long)]
    exact: bool,
}

#[derive(Tabled)]
struct Row {
    name: &'static str,
    words: String,
    unique: String,
}

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines().flat_map(|line| {
        line.chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect::<String>()
            .to_lowercase()
            .split_whitespace()
            .map(str::to_owned)
            .collect::<Vec<_>>()
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let text = fs::read_to_string(&args.path)?;

    let total = words(&text).count();
    let capacity = calculate_capacity(
        total.max(1) as f64,
        1.0 - args.accuracy,
        1.0 - args.confidence,
    )?;
    println!("CVM initialized with capacity {}", capacity);

    let mut estimator = Estimator::new(capacity)?;
    estimator.extend(words(&text));
    let estimate = estimator.estimate();

    let mut rows = vec![Row {
        name: "Estimate",
        words: total.to_string(),
        unique: estimate.to_string(),
    }];
    rows.push(Row {
        name: "Target Accuracy (%)",
        words: String::new(),
        unique: format!("100 ± {:.2}", 100.0 * (1.0 - args.accuracy)),
    });
    if args.exact {
        let distinct = words(&text).collect::<std::collections::HashSet<_>>().len();
        rows.insert(
            0,
            Row {
                name: "Exact",
                words: total.to_string(),
                unique: distinct.to_string(),
            },
        );
        rows.push(Row {
            name: "Estimate Accuracy (%)",
            words: String::new(),
            unique: format!("{:.2}", 100.0 * estimate / distinct.max(1) as f64),
        });
    }

    println!("{}", Table::new(rows).with(Style::markdown()));
    Ok(())
}
