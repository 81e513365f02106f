//! Company names and job titles.

use super::pick;
use crate::data::{COMPANY_SUFFIXES, COMPANY_WORDS, JOB_FIELDS, JOB_LEVELS, JOB_ROLES, LAST_NAMES};
use rand::Rng;

pub fn company<R: Rng>(rng: &mut R) -> String {
    if rng.random_bool(0.5) {
        format!("{} {}", pick(rng, COMPANY_WORDS), pick(rng, COMPANY_SUFFIXES))
    } else {
        format!(
            "{} & {} {}",
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES),
            pick(rng, COMPANY_SUFFIXES)
        )
    }
}

pub fn job_title<R: Rng>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        pick(rng, JOB_LEVELS),
        pick(rng, JOB_FIELDS),
        pick(rng, JOB_ROLES)
    )
}
