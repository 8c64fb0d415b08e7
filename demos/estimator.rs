use cvm_estimator::Estimator;

fn main() {
    let mut estimator = Estimator::<usize>::new(100).unwrap();
    for i in 0..10 {
        estimator.add(i);
    }
    println!("small stream estimate = {}", estimator.estimate());

    for i in 0..10_000 {
        estimator.add(i % 1_000);
    }
    println!("large stream estimate = {}", estimator.estimate());
    println!("{:?}", estimator);

    estimator.clear();
    println!("cleared estimate = {}", estimator.estimate());
}
