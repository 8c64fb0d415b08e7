use std::collections::HashSet;

use cvm_estimator::capacity::default_capacity;
use cvm_estimator::Estimator;
use rand::Rng;
use tabled::settings::Style;
use tabled::{Table, Tabled};

const NUM_VALUES: usize = 1_000_000;
const TRIALS: usize = 256;

#[derive(Tabled)]
struct Row {
    measure: &'static str,
    value: String,
    relative: String,
}

fn row(measure: &'static str, value: f64, expected: f64) -> Row {
    Row {
        measure,
        value: format!("{:.2}", value),
        relative: format!("{:.2}%", 100.0 * (value / expected - 1.0)),
    }
}

fn main() {
    println!("Generating {} random integers...", NUM_VALUES);
    let mut rng = rand::thread_rng();
    let series: Vec<u32> = (0..NUM_VALUES)
        .map(|_| rng.gen_range(10_000_000..99_999_999))
        .collect();

    let expected = series.iter().collect::<HashSet<_>>().len() as f64;
    println!("Distinct: {}", expected);

    let capacity = default_capacity(NUM_VALUES as f64).unwrap();
    println!("Performing {} estimates with capacity {}...", TRIALS, capacity);
    let mut estimates: Vec<f64> = (0..TRIALS)
        .map(|_| {
            let mut estimator = Estimator::new(capacity).unwrap();
            estimator.extend(series.iter().copied());
            estimator.estimate()
        })
        .collect();
    estimates.sort_by(f64::total_cmp);

    let count = estimates.len() as f64;
    let min = estimates[0];
    let max = estimates[estimates.len() - 1];
    let avg = estimates.iter().sum::<f64>() / count;
    let mid = estimates.len() / 2;
    let median = if estimates.len() % 2 == 1 {
        estimates[mid]
    } else {
        (estimates[mid - 1] + estimates[mid]) / 2.0
    };
    let std_dev = (estimates.iter().map(|e| (e - avg).powi(2)).sum::<f64>() / count).sqrt();

    let rows = vec![
        row("min", min, expected),
        row("avg", avg, expected),
        row("max", max, expected),
        row("median", median, expected),
        Row {
            measure: "std dev",
            value: format!("{:.2}", std_dev),
            relative: format!("{:.2}%", 100.0 * std_dev / avg),
        },
    ];
    println!("Expected: {} ± 5%", expected);
    println!("{}", Table::new(rows).with(Style::markdown()));
}
