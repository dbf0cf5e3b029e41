//! Caller-facing bounds, layered on top of the generator's own minimum.

use passgen::pass::min_length;

use super::UsageError;

pub const MIN_LENGTH: usize = 3;
pub const MAX_LENGTH: usize = 128;
pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 100;

/// Check length and count against the CLI policy, in the order the
/// messages should surface. Returns them as unsigned values.
pub fn check(length: isize, count: isize, special: bool) -> Result<(usize, usize), UsageError> {
    if length < MIN_LENGTH as isize {
        return Err(UsageError::LengthTooShort(MIN_LENGTH));
    }
    if length > MAX_LENGTH as isize {
        return Err(UsageError::LengthTooLong(MAX_LENGTH));
    }
    if count < MIN_COUNT as isize {
        return Err(UsageError::CountTooSmall(MIN_COUNT));
    }
    if count > MAX_COUNT as isize {
        return Err(UsageError::CountTooLarge(MAX_COUNT));
    }

    let length = length as usize;
    if special && length < min_length(true) {
        return Err(UsageError::SpecialTooShort(min_length(true)));
    }

    Ok((length, count as usize))
}
