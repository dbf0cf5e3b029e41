//! Password generation.
//!
//! A password is built in three passes over a scratch buffer: one character
//! from each active class is written first, the rest of the buffer is filled
//! with characters from randomly chosen classes, then the whole buffer is
//! shuffled so the guaranteed characters land anywhere.

use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::charset::CharClass;
use crate::entropy::{self, SecureRandom};
use crate::error::{Error, Result};

/// Shortest password that can hold one character of every requested class.
#[inline]
pub const fn min_length(include_special: bool) -> usize {
    if include_special { 4 } else { 3 }
}

/// A validated generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    length: usize,
    include_special: bool,
}

impl Request {
    pub fn new(length: usize, include_special: bool) -> Result<Self> {
        let min = min_length(include_special);
        if length < min {
            return Err(Error::Validation { length, min });
        }
        Ok(Self {
            length,
            include_special,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn include_special(&self) -> bool {
        self.include_special
    }

    pub fn classes(&self) -> &'static [CharClass] {
        CharClass::active(self.include_special)
    }
}

/// Generate one password from the operating system CSPRNG.
pub fn generate(length: usize, include_special: bool) -> Result<Zeroizing<String>> {
    let request = Request::new(length, include_special)?;
    generate_with(&mut entropy::os(), &request)
}

/// Generate one password, drawing every random value from `rng`.
pub fn generate_with<R: SecureRandom + ?Sized>(
    rng: &mut R,
    request: &Request,
) -> Result<Zeroizing<String>> {
    let classes = request.classes();
    let mut buf = Zeroizing::new(vec![0u8; request.length]);
    let mut pos = 0;

    for &class in classes {
        buf[pos] = pick(rng, class)?;
        pos += 1;
    }

    for slot in &mut buf[pos..] {
        let class = classes[rng.uniform(classes.len())?];
        *slot = pick(rng, class)?;
    }

    shuffle(rng, &mut buf)?;

    trace!(
        length = request.length,
        include_special = request.include_special,
        "password generated"
    );

    // Every alphabet is ASCII, so each byte maps to exactly one char.
    Ok(Zeroizing::new(buf.iter().map(|&b| b as char).collect()))
}

/// Generate `count` independent passwords, stopping at the first failure.
pub fn generate_batch<R: SecureRandom + ?Sized>(
    rng: &mut R,
    request: &Request,
    count: usize,
) -> Result<Vec<Zeroizing<String>>> {
    debug!(count, length = request.length, "generating batch");
    (0..count).map(|_| generate_with(rng, request)).collect()
}

/// Fisher-Yates shuffle, walking from the last index down to 1.
pub fn shuffle<R: SecureRandom + ?Sized>(rng: &mut R, chars: &mut [u8]) -> Result<()> {
    for i in (1..chars.len()).rev() {
        let j = rng.uniform(i + 1)?;
        chars.swap(i, j);
    }
    Ok(())
}

#[inline]
fn pick<R: SecureRandom + ?Sized>(rng: &mut R, class: CharClass) -> Result<u8> {
    let alphabet = class.alphabet();
    Ok(alphabet[rng.uniform(alphabet.len())?])
}
