//! Closed-form sequence builders and draw validation.
//!
//! These are pure: the random parameters come from the caller. A draw that
//! violates the length or magnitude limits comes back as [`InvalidDraw`] and
//! the caller retries with fresh parameters.

use std::ops::RangeInclusive;

use thiserror::Error;

use crate::core::config::MIN_SEQUENCE_LEN;
use crate::puzzles::Sequence;

/// Why a candidate sequence cannot be shown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDraw {
    #[error("sequence has {len} elements, need at least 4")]
    TooShort { len: usize },

    #[error("element {index} exceeds the magnitude bound {bound}")]
    OutOfBounds { index: usize, bound: i64 },

    #[error("element {index} is {value}, not positive")]
    NonPositive { index: usize, value: i64 },
}

/// `start, start + step, start + 2*step, ...` with `length` elements.
///
/// Rejects the draw if an element would leave `[-bound, bound]` or overflow.
pub fn arithmetic_sequence(start: i64, step: i64, length: usize, bound: i64) -> Result<Sequence, InvalidDraw> {
    let mut values = Sequence::new();
    let mut current = Some(start);

    for index in 0..length {
        let value = match current {
            Some(v) if within(v, bound) => v,
            _ => return Err(InvalidDraw::OutOfBounds { index, bound }),
        };
        values.push(value);
        current = value.checked_add(step);
    }

    check_length(&values)?;
    Ok(values)
}

/// `start, start * ratio, start * ratio^2, ...` with `length` elements.
///
/// Rejects the whole draw as soon as an element would leave `[-bound, bound]`
/// (or overflow), or, unless `allow_non_positive`, is zero or negative.
pub fn geometric_sequence(
    start: i64,
    ratio: i64,
    length: usize,
    bound: i64,
    allow_non_positive: bool,
) -> Result<Sequence, InvalidDraw> {
    let mut values = Sequence::new();
    let mut current = Some(start);

    for index in 0..length {
        let value = match current {
            Some(v) if within(v, bound) => v,
            _ => return Err(InvalidDraw::OutOfBounds { index, bound }),
        };
        if !allow_non_positive && value <= 0 {
            return Err(InvalidDraw::NonPositive { index, value });
        }
        values.push(value);
        current = value.checked_mul(ratio);
    }

    check_length(&values)?;
    Ok(values)
}

/// `|value| <= bound`, without overflowing on `i64::MIN`.
#[must_use]
pub fn within(value: i64, bound: i64) -> bool {
    bound >= 0 && value.unsigned_abs() <= bound.unsigned_abs()
}

fn check_length(values: &[i64]) -> Result<(), InvalidDraw> {
    if (values.len() as i64) < MIN_SEQUENCE_LEN {
        return Err(InvalidDraw::TooShort { len: values.len() });
    }
    Ok(())
}

/// Positions the blank may take: never the first two, never the last.
///
/// Callers guarantee `len >= 4`.
#[must_use]
pub fn blank_range(len: usize) -> RangeInclusive<usize> {
    debug_assert!(len as i64 >= MIN_SEQUENCE_LEN);
    2..=len - 2
}
