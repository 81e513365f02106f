//! Digits and filler text.

use super::{digit, pick};
use crate::data::LOREM_WORDS;
use rand::Rng;

/// A number with exactly `digits` digits and no leading zero.
pub fn numerify<R: Rng>(rng: &mut R, digits: usize) -> String {
    if digits == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(digits);
    result.push(digit(rng, 1));
    for _ in 1..digits {
        result.push(digit(rng, 0));
    }
    result
}

pub fn sentence<R: Rng>(rng: &mut R) -> String {
    let word_count = rng.random_range(6..=12);
    let mut sentence = String::new();
    for i in 0..word_count {
        let word = pick(rng, LOREM_WORDS);
        if i == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                sentence.extend(first.to_uppercase());
                sentence.push_str(chars.as_str());
            }
        } else {
            sentence.push(' ');
            sentence.push_str(word);
        }
    }
    sentence.push('.');
    sentence
}

pub fn paragraph<R: Rng>(rng: &mut R) -> String {
    let sentence_count = rng.random_range(3..=5);
    (0..sentence_count)
        .map(|_| sentence(rng))
        .collect::<Vec<_>>()
        .join(" ")
}
