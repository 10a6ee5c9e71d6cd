//! Randomized comparison against a dense model that stores one value per
//! position.

use std::collections::BTreeMap;

use crate::{BoundaryStore, StepVector, StepVectorConfig};

struct DenseModel {
    start: i64,
    values: Vec<i32>,
    zero: i32,
}

impl DenseModel {
    fn new(start: i64, end: i64, zero: i32) -> DenseModel {
        DenseModel {
            start,
            values: vec![zero; (end - start) as usize],
            zero,
        }
    }

    fn end(&self) -> i64 {
        self.start + self.values.len() as i64
    }

    fn covers(&self, start: i64, end: i64) -> bool {
        start >= self.start && end <= self.end()
    }

    fn set_range(&mut self, start: i64, end: i64, value: i32) {
        if start == end {
            return;
        }
        if start < self.start {
            let grow = (self.start - start) as usize;
            let mut values = vec![self.zero; grow];
            values.append(&mut self.values);
            self.values = values;
            self.start = start;
        }
        if end > self.end() {
            let grow = (end - self.end()) as usize;
            self.values.extend(std::iter::repeat_n(self.zero, grow));
        }
        for pos in start..end {
            self.values[(pos - self.start) as usize] = value;
        }
    }

    fn apply_range(&mut self, from: i64, to: i64, f: impl Fn(&i32) -> i32) {
        let from = from.max(self.start);
        let to = to.min(self.end());
        for pos in from..to {
            let slot = &mut self.values[(pos - self.start) as usize];
            *slot = f(slot);
        }
    }

    /// Maximal runs within `[from, to)`, clipped to the extent.
    fn steps_in(&self, from: i64, to: i64) -> Vec<(i64, i64, i32)> {
        let mut steps: Vec<(i64, i64, i32)> = Vec::new();
        for pos in from.max(self.start)..to.min(self.end()) {
            let value = self.values[(pos - self.start) as usize];
            match steps.last_mut() {
                Some(last) if last.2 == value => last.1 = pos + 1,
                _ => steps.push((pos, pos + 1, value)),
            }
        }
        steps
    }
}

fn collect_steps<S>(v: &StepVector<i32, S>) -> Vec<(i64, i64, i32)>
where
    S: BoundaryStore<Option<i32>>,
{
    v.steps()
        .map(|step| (step.start(), step.end(), *step.value))
        .collect()
}

fn check<S>(v: &StepVector<i32, S>, model: &DenseModel)
where
    S: BoundaryStore<Option<i32>>,
{
    v.verify();
    assert_eq!(v.bounds(), model.start..model.end());
    let expected = model.steps_in(model.start, model.end());
    assert_eq!(collect_steps(v), expected);
    assert_eq!(v.count(), expected.len());
}

fn run_against_model<S, F>(seed: u64, relaxed: bool, make: F)
where
    S: BoundaryStore<Option<i32>>,
    F: Fn(i64, i64, i32, StepVectorConfig) -> StepVector<i32, S>,
{
    let mut rng = fastrand::Rng::with_seed(seed);
    let config = StepVectorConfig {
        relaxed,
        ..Default::default()
    };
    let mut v = make(-20, 20, 0, config);
    let mut model = DenseModel::new(-20, 20, 0);

    for _ in 0..2000 {
        let from = rng.i64(-60..60);
        let to = from + rng.i64(0..12);
        let value = rng.i32(0..4);

        match rng.u8(0..6) {
            0 | 1 => {
                let before = v.to_string();
                match v.set_range(from, to, value) {
                    Ok(()) => {
                        assert!(relaxed || model.covers(from, to) || from == to);
                        model.set_range(from, to, value);
                    }
                    Err(e) => {
                        assert!(e.is_out_of_range());
                        assert!(!relaxed && !model.covers(from, to));
                        assert_eq!(v.to_string(), before);
                    }
                }
            }
            2 => {
                if v.set(from, value).is_ok() {
                    model.set_range(from, from + 1, value);
                } else {
                    assert!(!relaxed && !model.covers(from, from + 1));
                }
            }
            3 => {
                if rng.u8(0..8) == 0 {
                    v.apply(|&x| (x + 1) % 4);
                    model.apply_range(model.start, model.end(), |&x| (x + 1) % 4);
                } else {
                    let before = v.to_string();
                    match v.apply_range(from, to, |&x| x * 3 % 4) {
                        Ok(()) => model.apply_range(from, to, |&x| x * 3 % 4),
                        Err(e) => {
                            assert!(e.is_out_of_range());
                            assert!(to <= model.start || from >= model.end());
                            assert_eq!(v.to_string(), before);
                        }
                    }
                }
            }
            4 => match v.steps_in(from, to) {
                Ok(steps) => {
                    let actual = steps
                        .map(|step| (step.start(), step.end(), *step.value))
                        .collect::<Vec<_>>();
                    assert_eq!(actual, model.steps_in(from, to));
                }
                Err(e) => {
                    assert!(e.is_out_of_range());
                    assert!(to <= model.start || from >= model.end());
                }
            },
            _ => {
                let pos = rng.i64(model.start..model.end());
                let expected = model.values[(pos - model.start) as usize];
                assert_eq!(*v.at(pos).unwrap(), expected);
                let step = v.step_at(pos).unwrap();
                assert_eq!(*step.value, expected);
                assert!(step.contains(pos));
                assert!(v.at(model.end()).is_err());
                assert!(v.at(model.start - 1).is_err());
            }
        }
        check(&v, &model);
    }
}

#[test]
fn test_arena_store_against_model() {
    for seed in [1, 7, 42, 1234] {
        for relaxed in [false, true] {
            run_against_model(seed, relaxed, |start, end, zero, config| {
                StepVector::with_config(start, end, zero, config).unwrap()
            });
        }
    }
}

#[test]
fn test_btree_store_against_model() {
    for seed in [3, 99] {
        for relaxed in [false, true] {
            run_against_model(seed, relaxed, |start, end, zero, config| {
                let store = BTreeMap::<i64, Option<i32>>::new();
                StepVector::with_store(store, start, end, zero, config).unwrap()
            });
        }
    }
}

#[test]
fn test_stores_render_alike() {
    let mut rng = fastrand::Rng::with_seed(5);
    let mut arena = StepVector::with_config(0, 50, 0, StepVectorConfig::relaxed()).unwrap();
    let store = BTreeMap::<i64, Option<i32>>::new();
    let mut btree = StepVector::with_store(store, 0, 50, 0, StepVectorConfig::relaxed()).unwrap();

    for _ in 0..500 {
        let from = rng.i64(-10..60);
        let to = from + rng.i64(0..8);
        let value = rng.i32(0..3);
        arena.set_range(from, to, value).unwrap();
        btree.set_range(from, to, value).unwrap();
        assert_eq!(arena.to_string(), btree.to_string());
    }
    arena.store().verify();
}
