#![no_main]

use cvm_estimator::random::Randomness;
use cvm_estimator::Estimator;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&head, rest)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(head % 32) + 1;
    let seed = rest.iter().fold(0u64, |acc, &b| acc.rotate_left(5) ^ u64::from(b));
    let mut estimator = Estimator::<u16>::builder(capacity)
        .random(Randomness::seeded(seed))
        .build()
        .unwrap();

    let mut rate = estimator.rate();
    for chunk in rest.chunks(2) {
        let value = chunk.iter().fold(0u16, |acc, &b| (acc << 8) | u16::from(b));
        estimator.add(value);
        assert!(estimator.len() < capacity);
        assert!(estimator.rate() > 0.0 && estimator.rate() <= rate);
        assert_eq!(estimator.estimate(), estimator.len() as f64 / estimator.rate());
        rate = estimator.rate();
    }

    estimator.clear();
    assert_eq!(estimator.estimate(), 0.0);
});
