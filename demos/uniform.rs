use std::collections::HashSet;

use cvm_estimator::capacity::calculate_capacity;
use cvm_estimator::Estimator;
use rand::Rng;

const NUM_VALUES: usize = 1_000_000;
const EXPECTED_RELATIVE_ERROR: f64 = 0.1;

fn main() {
    // 90% accuracy with 99% confidence
    let capacity = calculate_capacity(NUM_VALUES as f64, EXPECTED_RELATIVE_ERROR, 0.01).unwrap();
    let mut estimator = Estimator::new(capacity).unwrap();
    let mut exact = HashSet::new();

    let mut rng = rand::thread_rng();
    for _ in 0..NUM_VALUES {
        let v: u32 = rng.gen_range(10_000_000..99_999_999);
        estimator.add(v);
        exact.insert(v);
    }

    let expected = exact.len();
    let actual = estimator.estimate();
    let relative_error = actual / expected as f64 - 1.0;

    println!("Total values: {}", NUM_VALUES);
    println!("CVM capacity: {}", estimator.capacity());
    println!(
        "Expected uniques: {} ± {:.2}%",
        expected,
        100.0 * EXPECTED_RELATIVE_ERROR
    );
    println!(
        "Estimated uniques: {} ({:.2}%)",
        actual,
        100.0 * relative_error
    );
}
