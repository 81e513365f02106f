//! Entry point that maps kind names to generators.

use crate::generators;
use crate::kind::FakerKind;
use rand::Rng;

/// Requested kind is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported faker type: {0}")]
pub struct UnsupportedGeneratorError(pub String);

/// Produces one synthetic value per call.
///
/// The generator holds no state; each call uses the thread-local RNG, so it
/// can be shared freely between tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator;

impl Generator {
    pub fn new() -> Self {
        Self
    }

    /// Generate one value of the named kind.
    pub fn generate(&self, kind: &str) -> Result<String, UnsupportedGeneratorError> {
        let kind: FakerKind = kind
            .parse()
            .map_err(|_| UnsupportedGeneratorError(kind.to_string()))?;
        Ok(self.generate_kind(kind, &mut rand::rng()))
    }

    /// Generate one value of a known kind with the given RNG.
    pub fn generate_kind<R: Rng>(&self, kind: FakerKind, rng: &mut R) -> String {
        match kind {
            FakerKind::Name => generators::person::full_name(rng),
            FakerKind::FirstName => generators::person::first_name(rng),
            FakerKind::LastName => generators::person::last_name(rng),
            FakerKind::Email => generators::internet::email(rng),
            FakerKind::Phone => generators::person::phone_number(rng),
            FakerKind::Address => generators::location::street_address(rng),
            FakerKind::City => generators::location::city(rng),
            FakerKind::State => generators::location::state(rng),
            FakerKind::Zipcode => generators::location::zipcode(rng),
            FakerKind::Country => generators::location::country(rng),
            FakerKind::Company => generators::company::company(rng),
            FakerKind::JobTitle => generators::company::job_title(rng),
            FakerKind::CreditCard => generators::finance::credit_card_number(rng),
            FakerKind::Uuid => generators::internet::uuid(rng),
            FakerKind::Ipv4 => generators::internet::ipv4(rng),
            FakerKind::Ipv6 => generators::internet::ipv6(rng),
            FakerKind::Url => generators::internet::url(rng),
            FakerKind::Username => generators::internet::username(rng),
            FakerKind::Password => generators::internet::password(rng),
            FakerKind::Numerify => generators::text::numerify(rng, 9),
            FakerKind::Sentence => generators::text::sentence(rng),
            FakerKind::Paragraph => generators::text::paragraph(rng),
        }
    }

    /// Names accepted by [`Generator::generate`].
    pub fn supported_kinds(&self) -> Vec<&'static str> {
        FakerKind::names().collect()
    }
}
