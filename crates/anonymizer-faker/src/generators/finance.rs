//! Payment card numbers.

use rand::Rng;

/// (issuer prefix, total length)
const CARD_FORMATS: &[(&str, usize)] = &[
    ("4", 16),  // Visa
    ("51", 16), // Mastercard
    ("52", 16),
    ("53", 16),
    ("54", 16),
    ("55", 16),
    ("34", 15), // American Express
    ("37", 15),
    ("6011", 16), // Discover
];

/// Card number with a valid Luhn check digit.
pub fn credit_card_number<R: Rng>(rng: &mut R) -> String {
    let (prefix, length) = CARD_FORMATS[rng.random_range(0..CARD_FORMATS.len())];

    let mut digits: Vec<u8> = prefix.bytes().map(|b| b - b'0').collect();
    while digits.len() < length - 1 {
        digits.push(rng.random_range(0..10));
    }
    digits.push(luhn_check_digit(&digits));

    digits.into_iter().map(|d| (b'0' + d) as char).collect()
}

/// Check digit that makes `payload` followed by it pass the Luhn test.
fn luhn_check_digit(payload: &[u8]) -> u8 {
    // Walking right to left, the digit next to the check digit is doubled.
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    ((10 - (sum % 10)) % 10) as u8
}
