#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::collections::HashSet;

use cvm_estimator::random::Randomness;
use cvm_estimator::Estimator;
use tabled::{
    settings::{Settings, Style},
    Table, Tabled,
};

const CAPACITY: usize = 1_000;

#[derive(Tabled)]
struct Record {
    cardinality: usize,
    cvm_estimator: String,
    hash_set: String,
}

struct Usage {
    size: usize,
    peak_bytes: usize,
    total_blocks: u64,
}

impl Usage {
    fn describe(&self) -> String {
        format!("{} / {} / {}", self.size, self.peak_bytes, self.total_blocks)
    }
}

fn measure_memory_usage<T>(
    cardinality: usize,
    create: impl Fn() -> T,
    insert: impl Fn(&mut T, usize),
) -> Usage
where
    T: Sized,
{
    let _profiler = dhat::Profiler::builder().testing().build();
    let mut estimator = create();
    for i in 0..cardinality {
        insert(&mut estimator, i);
    }
    let stats = dhat::HeapStats::get();
    Usage {
        size: std::mem::size_of::<T>(),
        peak_bytes: stats.max_bytes,
        total_blocks: stats.total_blocks,
    }
}

#[test]
fn test_allocations() {
    let cardinalities: Vec<usize> = std::iter::once(0)
        .chain((0..).map(|c| 1 << c))
        .take_while(|&c| c <= 1 << 20)
        .collect();

    let usages: Vec<(usize, Usage, Usage)> = cardinalities
        .iter()
        .map(|&cardinality| {
            let cvm = measure_memory_usage(
                cardinality,
                || {
                    Estimator::<usize>::builder(CAPACITY)
                        .random(Randomness::seeded(cardinality as u64))
                        .build()
                        .unwrap()
                },
                |est, i| {
                    est.add(i);
                },
            );
            let exact = measure_memory_usage(cardinality, HashSet::new, |set, i| {
                set.insert(i);
            });
            (cardinality, cvm, exact)
        })
        .collect();

    // once capacity is reached the sample set never grows again
    let reference = usages
        .iter()
        .find(|(cardinality, _, _)| *cardinality >= 2 * CAPACITY)
        .map(|(_, cvm, _)| cvm.peak_bytes)
        .unwrap();
    for (cardinality, cvm, _) in &usages {
        assert!(
            cvm.peak_bytes <= reference,
            "peak {} bytes at cardinality {} exceeds {} bytes",
            cvm.peak_bytes,
            cardinality,
            reference
        );
    }

    let results: Vec<Record> = usages
        .iter()
        .map(|(cardinality, cvm, exact)| Record {
            cardinality: *cardinality,
            cvm_estimator: cvm.describe(),
            hash_set: exact.describe(),
        })
        .collect();

    let table_config = Settings::default().with(Style::markdown());
    let markdown = Table::new(results).with(table_config).to_string();
    println!("{}", markdown);
}
