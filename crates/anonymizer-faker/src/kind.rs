//! The fixed registry of supported generator kinds.

use std::fmt;
use std::str::FromStr;

/// A supported kind of synthetic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FakerKind {
    Name,
    FirstName,
    LastName,
    Email,
    Phone,
    Address,
    City,
    State,
    Zipcode,
    Country,
    Company,
    JobTitle,
    CreditCard,
    Uuid,
    Ipv4,
    Ipv6,
    Url,
    Username,
    Password,
    Numerify,
    Sentence,
    Paragraph,
}

/// Every accepted kind name, aliases included, with the kind it maps to.
const NAMES: &[(&str, FakerKind)] = &[
    ("name", FakerKind::Name),
    ("firstname", FakerKind::FirstName),
    ("lastname", FakerKind::LastName),
    ("email", FakerKind::Email),
    ("phone", FakerKind::Phone),
    ("phonenumber", FakerKind::Phone),
    ("address", FakerKind::Address),
    ("streetaddress", FakerKind::Address),
    ("city", FakerKind::City),
    ("state", FakerKind::State),
    ("zipcode", FakerKind::Zipcode),
    ("postcode", FakerKind::Zipcode),
    ("country", FakerKind::Country),
    ("company", FakerKind::Company),
    ("jobtitle", FakerKind::JobTitle),
    ("creditcard", FakerKind::CreditCard),
    ("uuid", FakerKind::Uuid),
    ("ipv4", FakerKind::Ipv4),
    ("ipv6", FakerKind::Ipv6),
    ("url", FakerKind::Url),
    ("username", FakerKind::Username),
    ("password", FakerKind::Password),
    ("numerify", FakerKind::Numerify),
    ("sentence", FakerKind::Sentence),
    ("paragraph", FakerKind::Paragraph),
];

impl FakerKind {
    /// All accepted kind names, including aliases.
    pub fn names() -> impl Iterator<Item = &'static str> {
        NAMES.iter().map(|(name, _)| *name)
    }

    /// Canonical name of this kind.
    pub fn as_str(self) -> &'static str {
        NAMES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(name, _)| *name)
            .unwrap_or("unknown")
    }
}

impl fmt::Display for FakerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FakerKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        NAMES
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, kind)| *kind)
            .ok_or(())
    }
}
