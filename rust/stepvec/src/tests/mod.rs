mod construct_tests;
mod model_tests;

use crate::StepVector;

/// Builds a strict vector and writes each `(start, end, value)` range in order.
pub(crate) fn build(start: i64, end: i64, zero: i32, sets: &[(i64, i64, i32)]) -> StepVector<i32> {
    let mut v = StepVector::new(start, end, zero).unwrap();
    for &(s, e, value) in sets {
        v.set_range(s, e, value).unwrap();
        v.verify();
    }
    v
}

/// Expands the steps of `v` into one value per position.
pub(crate) fn dense(v: &StepVector<i32>) -> Vec<i32> {
    let mut data = Vec::new();
    v.for_each_step(|start, end, &value| {
        data.extend(std::iter::repeat_n(value, (end - start) as usize));
    });
    data
}

/// Runs of the vector used throughout the read and apply suites.
pub(crate) const MIXED_RUNS: [(i64, i64, i32); 4] = [(1, 3, 3), (4, 5, 1), (7, 8, 2), (9, 10, 4)];
