//! Postal address parts.

use super::{digit, pick};
use crate::data::{CITIES, COUNTRIES, STATES, STREET_NAMES, STREET_SUFFIXES};
use rand::Rng;

pub fn street_address<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        rng.random_range(1..=9999u16),
        pick(rng, STREET_NAMES),
        pick(rng, STREET_SUFFIXES)
    )
}

pub fn city<R: Rng>(rng: &mut R) -> String {
    pick(rng, CITIES).to_string()
}

pub fn state<R: Rng>(rng: &mut R) -> String {
    pick(rng, STATES).to_string()
}

/// Five digit postal code.
pub fn zipcode<R: Rng>(rng: &mut R) -> String {
    (0..5).map(|_| digit(rng, 0)).collect()
}

pub fn country<R: Rng>(rng: &mut R) -> String {
    pick(rng, COUNTRIES).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_street_address() {
        let mut rng = StdRng::seed_from_u64(42);
        let address = street_address(&mut rng);
        let number = address.split(' ').next().unwrap();
        assert!(number.parse::<u16>().is_ok());
    }

    #[test]
    fn test_zipcode() {
        let mut rng = StdRng::seed_from_u64(42);
        let zip = zipcode(&mut rng);
        assert_eq!(zip.len(), 5);
        assert!(zip.chars().all(|c| c.is_ascii_digit()));
    }
}
