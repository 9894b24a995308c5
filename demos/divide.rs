//! Division pipeline returning `Expected` instead of `Result`.
//!
//! Run with `cargo run --example divide`.

use expected_rail::{ensure, try_value, Expected};

fn divide(a: i32, b: i32) -> Expected<i32> {
    ensure!(b != 0, "division by zero".to_string());
    Expected::from_value(a / b)
}

fn mean(values: &[i32]) -> Expected<i32> {
    let total: i32 = values.iter().sum();
    let count = i32::try_from(values.len()).unwrap_or(i32::MAX);
    let average = try_value!(divide(total, count));
    Expected::from_value(average)
}

fn main() {
    let quotient = divide(10, 2);
    println!("10 / 2 = {:?}", quotient);

    let shouted = divide(1, 0).map_error(|msg| msg.to_uppercase());
    println!("1 / 0 = {:?}", shouted);

    let chained = divide(10, 2).and(divide(6, 3));
    println!("divide(10, 2) then divide(6, 3) = {:?}", chained);

    for sample in [&[3, 5, 7][..], &[][..]] {
        let line = mean(sample).map_or_else(|m| format!("mean {m}"), |e| format!("no mean: {e}"));
        println!("{sample:?}: {line}");
    }
}
