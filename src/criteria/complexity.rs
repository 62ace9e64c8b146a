//! Complexity criterion - checks for uppercase, lowercase, digits, special chars.

use secrecy::{ExposeSecret, SecretString};

use super::{Check, Descriptor, Verdict};

/// Characters counted as the "special" class.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()-+={}[]|\\:;\"'<>,.?/`~";

const DESCRIPTOR: Descriptor = Descriptor::new("Character Complexity (4 types)", 50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Upper,
    Lower,
    Digit,
    Special,
}

impl CharClass {
    const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Special,
    ];

    /// First matching class, in priority order. Whitespace and non-ASCII
    /// characters belong to no class.
    fn of(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(CharClass::Upper)
        } else if c.is_ascii_lowercase() {
            Some(CharClass::Lower)
        } else if c.is_ascii_digit() {
            Some(CharClass::Digit)
        } else if SPECIAL_CHARS.contains(c) {
            Some(CharClass::Special)
        } else {
            None
        }
    }

    fn label(self) -> &'static str {
        match self {
            CharClass::Upper => "Uppercase",
            CharClass::Lower => "Lowercase",
            CharClass::Digit => "Digit",
            CharClass::Special => "Special Char",
        }
    }
}

/// Awards partial credit for each character class present; met only when
/// all four are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplexityCriterion;

impl Check for ComplexityCriterion {
    fn descriptor(&self) -> &Descriptor {
        &DESCRIPTOR
    }

    fn check(&self, password: &SecretString) -> Verdict {
        let mut present = [false; CharClass::ALL.len()];
        for class in password.expose_secret().chars().filter_map(CharClass::of) {
            present[class as usize] = true;
        }

        let types_met = present.iter().filter(|&&p| p).count() as u32;
        let score = DESCRIPTOR.max_score() * types_met / CharClass::ALL.len() as u32;

        if types_met as usize == CharClass::ALL.len() {
            return Verdict {
                met: true,
                message: "Excellent! All 4 character types are present.".to_string(),
                score,
            };
        }

        let missing: Vec<_> = CharClass::ALL
            .into_iter()
            .filter(|class| !present[*class as usize])
            .map(CharClass::label)
            .collect();

        Verdict {
            met: false,
            message: format!("Missing: {}.", missing.join(", ")),
            score,
        }
    }
}
