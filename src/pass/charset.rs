//! Fixed character classes for password generation.
//!
//! Look-alike characters (`0 O I l 1`) are left out of every alphabet.

const UPPERCASE: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijkmnopqrstuvwxyz";
const DIGITS: &[u8] = b"23456789";
const SPECIAL: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that never appear in a generated password.
pub const EXCLUDED: &[u8] = b"0OIl1";

/// One of the four character classes a password is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Special,
}

const WITHOUT_SPECIAL: &[CharClass] = &[CharClass::Upper, CharClass::Lower, CharClass::Digit];
const WITH_SPECIAL: &[CharClass] = &[
    CharClass::Upper,
    CharClass::Lower,
    CharClass::Digit,
    CharClass::Special,
];

impl CharClass {
    /// Active classes in seeding order.
    pub fn active(include_special: bool) -> &'static [CharClass] {
        if include_special {
            WITH_SPECIAL
        } else {
            WITHOUT_SPECIAL
        }
    }

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    /// Display name used in the output banner.
    pub fn name(self) -> &'static str {
        match self {
            CharClass::Upper => "Uppercase",
            CharClass::Lower => "Lowercase",
            CharClass::Digit => "Numbers",
            CharClass::Special => "Special characters",
        }
    }

    #[inline]
    pub fn contains(self, c: u8) -> bool {
        self.alphabet().contains(&c)
    }

    /// Class owning `c`, if any.
    pub fn of(c: u8) -> Option<CharClass> {
        WITH_SPECIAL.iter().copied().find(|class| class.contains(c))
    }
}

/// Size of the union of all active alphabets.
pub fn size(include_special: bool) -> usize {
    CharClass::active(include_special)
        .iter()
        .map(|class| class.alphabet().len())
        .sum()
}
