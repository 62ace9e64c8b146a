//! Dictionary criterion - checks for common words and sequences.

use secrecy::{ExposeSecret, SecretString};

use super::{Check, Descriptor, Verdict};

/// Weak substrings, lowercase.
pub const WEAK_LIST: [&str; 10] = [
    "password", "123456", "qwerty", "admin", "qazwsx", "12345678", "abc", "god", "user", "access",
];

const DESCRIPTOR: Descriptor = Descriptor::new("Not a Common Word/Pattern", 10);

/// Fails when the password contains any entry of [`WEAK_LIST`], ignoring case.
///
/// Matching is by substring, so `"myabcdef"` fails on `"abc"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictionaryCriterion;

impl Check for DictionaryCriterion {
    fn descriptor(&self) -> &Descriptor {
        &DESCRIPTOR
    }

    fn check(&self, password: &SecretString) -> Verdict {
        let lower = password.expose_secret().to_ascii_lowercase();
        if WEAK_LIST.iter().any(|weak| lower.contains(weak)) {
            return Verdict::failed("Warning: Contains a common or dictionary word/sequence.");
        }
        Verdict::passed(&DESCRIPTOR, "Password does not contain common dictionary words.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(s: &str) -> Verdict {
        DictionaryCriterion.check(&SecretString::new(s.to_string().into()))
    }

    #[test]
    fn test_dictionary_case_insensitive() {
        let verdict = check("MyPassword99!");
        assert!(!verdict.met);
        assert_eq!(verdict.score, 0);
    }

    #[test]
    fn test_dictionary_substring_match() {
        assert!(!check("myabcdef").met);
        assert!(!check("xxGODxx").met);
        assert!(!check("000123456").met);
    }

    #[test]
    fn test_dictionary_clean_password() {
        let verdict = check("CorrectHorseBattery!9");
        assert!(verdict.met);
        assert_eq!(verdict.score, 10);
    }

    #[test]
    fn test_dictionary_every_weak_entry() {
        for weak in WEAK_LIST {
            assert!(!check(&weak.to_uppercase()).met, "{weak} should be flagged");
        }
    }
}
