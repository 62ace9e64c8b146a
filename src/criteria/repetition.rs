//! Repetition criterion - detects runs of identical characters.

use secrecy::{ExposeSecret, SecretString};

use super::{Check, Descriptor, Verdict};

const RUN_LENGTH: usize = 3;

const DESCRIPTOR: Descriptor = Descriptor::new("No Repetitive Sequences (AAA)", 15);

/// Fails when the same character appears three or more times in a row.
/// Comparison is case-sensitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepetitionCriterion;

impl Check for RepetitionCriterion {
    fn descriptor(&self) -> &Descriptor {
        &DESCRIPTOR
    }

    fn check(&self, password: &SecretString) -> Verdict {
        let chars: Vec<char> = password.expose_secret().chars().collect();
        let repeated = chars
            .windows(RUN_LENGTH)
            .any(|w| w.iter().all(|&c| c == w[0]));

        if repeated {
            return Verdict::failed(
                "Warning: Contains three or more identical characters in a row (e.g., 'aaa').",
            );
        }
        Verdict::passed(&DESCRIPTOR, "No obvious triple repetitions found.")
    }
}
