//! Internet identifiers: e-mail, usernames, addresses, URLs, UUIDs.

use super::{digit, pick};
use crate::data::{COMPANY_WORDS, EMAIL_DOMAINS, FIRST_NAMES, LAST_NAMES, TLDS};
use rand::Rng;
use uuid::Uuid;

const PASSWORD_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*-_=+";
const PASSWORD_LENGTH: usize = 16;

/// `first.last42@example.com`
pub fn email<R: Rng>(rng: &mut R) -> String {
    format!(
        "{}.{}{}{}@{}",
        pick(rng, FIRST_NAMES).to_lowercase(),
        pick(rng, LAST_NAMES).to_lowercase(),
        digit(rng, 0),
        digit(rng, 0),
        pick(rng, EMAIL_DOMAINS)
    )
}

pub fn username<R: Rng>(rng: &mut R) -> String {
    let mut name = format!(
        "{}{}",
        pick(rng, FIRST_NAMES).to_lowercase(),
        pick(rng, LAST_NAMES).to_lowercase()
    );
    for _ in 0..4 {
        name.push(digit(rng, 0));
    }
    name
}

pub fn password<R: Rng>(rng: &mut R) -> String {
    (0..PASSWORD_LENGTH)
        .map(|_| PASSWORD_CHARSET[rng.random_range(0..PASSWORD_CHARSET.len())] as char)
        .collect()
}

/// Random UUID v4 built from the provided RNG.
pub fn uuid<R: Rng>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);

    bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122

    Uuid::from_bytes(bytes).hyphenated().to_string()
}

pub fn ipv4<R: Rng>(rng: &mut R) -> String {
    format!(
        "{}.{}.{}.{}",
        rng.random_range(1..=254u8),
        rng.random::<u8>(),
        rng.random::<u8>(),
        rng.random_range(1..=254u8)
    )
}

pub fn ipv6<R: Rng>(rng: &mut R) -> String {
    (0..8)
        .map(|_| format!("{:x}", rng.random::<u16>()))
        .collect::<Vec<_>>()
        .join(":")
}

pub fn url<R: Rng>(rng: &mut R) -> String {
    format!(
        "https://www.{}{}.{}/",
        pick(rng, COMPANY_WORDS).to_lowercase(),
        pick(rng, LAST_NAMES).to_lowercase(),
        pick(rng, TLDS)
    )
}
