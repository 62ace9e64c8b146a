//! Length criterion - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::{Check, Descriptor, Verdict};

pub const MIN_LENGTH: usize = 8;

const DESCRIPTOR: Descriptor = Descriptor::new("Minimum Length (8 characters)", 25);

/// Awards full marks when the password has at least [`MIN_LENGTH`] characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthCriterion;

impl Check for LengthCriterion {
    fn descriptor(&self) -> &Descriptor {
        &DESCRIPTOR
    }

    fn check(&self, password: &SecretString) -> Verdict {
        let len = password.expose_secret().chars().count();
        if len >= MIN_LENGTH {
            return Verdict::passed(&DESCRIPTOR, "Great! Password is 8+ characters long.");
        }
        Verdict::failed(format!("Needs {} more character(s).", MIN_LENGTH - len))
    }
}
