//! Personal names and phone numbers.

use super::{digit, pick};
use crate::data::{FIRST_NAMES, LAST_NAMES};
use rand::Rng;

pub fn first_name<R: Rng>(rng: &mut R) -> String {
    pick(rng, FIRST_NAMES).to_string()
}

pub fn last_name<R: Rng>(rng: &mut R) -> String {
    pick(rng, LAST_NAMES).to_string()
}

pub fn full_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
}

/// North American style number, e.g. `415-555-0142`.
pub fn phone_number<R: Rng>(rng: &mut R) -> String {
    let mut number = String::with_capacity(12);
    // Area and exchange codes never start with 0 or 1.
    number.push(digit(rng, 2));
    number.push(digit(rng, 0));
    number.push(digit(rng, 0));
    number.push('-');
    number.push(digit(rng, 2));
    number.push(digit(rng, 0));
    number.push(digit(rng, 0));
    number.push('-');
    for _ in 0..4 {
        number.push(digit(rng, 0));
    }
    number
}
