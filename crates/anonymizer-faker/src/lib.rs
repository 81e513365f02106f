//! Synthetic data generators for db-anonymizer.
//!
//! A [`Generator`] turns a generator kind name (`email`, `firstname`,
//! `creditcard`, ...) into one freshly generated string. Every call draws new
//! randomness; there is no caching and no seeding contract beyond "a
//! syntactically valid example of the requested kind".
//!
//! # Example
//!
//! ```rust
//! use anonymizer_faker::Generator;
//!
//! let generator = Generator::new();
//! let email = generator.generate("email").unwrap();
//! assert!(email.contains('@'));
//! assert!(generator.generate("shoe_size").is_err());
//! ```
//!
//! # Kinds
//!
//! Lookup is case-insensitive. Aliases share a generator:
//!
//! - `name`, `firstname`, `lastname`, `username`, `password`, `email`
//! - `phone` / `phonenumber`
//! - `address` / `streetaddress`, `city`, `state`, `zipcode` / `postcode`, `country`
//! - `company`, `jobtitle`
//! - `creditcard`
//! - `uuid`, `ipv4`, `ipv6`, `url`
//! - `numerify`, `sentence`, `paragraph`

mod data;
pub mod generator;
pub mod generators;
pub mod kind;

pub use generator::{Generator, UnsupportedGeneratorError};
pub use kind::FakerKind;
