//! Demo input generation: random, nearly-sorted and reversed sequences

use rand::Rng;

/// Shape of a generated demo sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayShape {
    Random,
    NearlySorted,
    Reversed,
}

impl ArrayShape {
    pub fn label(self) -> &'static str {
        match self {
            ArrayShape::Random => "random",
            ArrayShape::NearlySorted => "nearly sorted",
            ArrayShape::Reversed => "reversed",
        }
    }
}

/// Generate `size` values of the given shape, each drawn uniformly from
/// `min..=max`. `size == 0` yields an empty sequence.
pub fn generate(shape: ArrayShape, size: usize, min: u32, max: u32) -> Vec<u32> {
    match shape {
        ArrayShape::Random => random(size, min, max),
        ArrayShape::NearlySorted => nearly_sorted(size, min, max),
        ArrayShape::Reversed => reversed(size, min, max),
    }
}

/// `size` independent uniform draws from `min..=max`
pub fn random(size: usize, min: u32, max: u32) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen_range(min..=max)).collect()
}

/// Random values sorted ascending, then perturbed by ⌊size·0.1⌋ uniform
/// index-pair swaps (a swap whose indices coincide is a no-op)
pub fn nearly_sorted(size: usize, min: u32, max: u32) -> Vec<u32> {
    let mut values = random(size, min, max);
    values.sort_unstable();

    if size > 0 {
        let mut rng = rand::thread_rng();
        for _ in 0..size / 10 {
            let a = rng.gen_range(0..size);
            let b = rng.gen_range(0..size);
            values.swap(a, b);
        }
    }
    values
}

/// Random values sorted descending
pub fn reversed(size: usize, min: u32, max: u32) -> Vec<u32> {
    let mut values = random(size, min, max);
    values.sort_unstable_by(|a, b| b.cmp(a));
    values
}
