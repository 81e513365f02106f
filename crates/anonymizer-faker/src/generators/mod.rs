//! Individual value generators, grouped by domain.
//!
//! Every generator takes the RNG explicitly so tests can drive them with a
//! seeded `StdRng` while production code uses the thread RNG.

pub mod company;
pub mod finance;
pub mod internet;
pub mod location;
pub mod person;
pub mod text;

use rand::Rng;

/// Pick one entry from a non-empty pool.
pub(crate) fn pick<R: Rng>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool[rng.random_range(0..pool.len())]
}

/// Random ASCII digit.
pub(crate) fn digit<R: Rng>(rng: &mut R, low: u8) -> char {
    (b'0' + rng.random_range(low..10)) as char
}
