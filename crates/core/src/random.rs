//! Uniform random picks, with seedable variants for tests.

use rand::Rng;

use crate::error::{Error, Result};

/// Returns a uniformly random integer in `[min, max]`.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] if `max < min`.
pub fn random_int(min: i32, max: i32) -> Result<i32> {
    random_int_with(&mut rand::rng(), min, max)
}

/// [`random_int`] drawing from the given generator.
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] if `max < min`.
pub fn random_int_with<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> Result<i32> {
    if max < min {
        return Err(Error::invalid_range(min, max));
    }

    Ok(rng.random_range(min..=max))
}

/// Returns a uniformly random element of `items`.
///
/// # Errors
///
/// Returns [`Error::EmptyChoices`] if `items` is empty.
pub fn random_element<T>(items: &[T]) -> Result<&T> {
    random_element_with(&mut rand::rng(), items)
}

/// [`random_element`] drawing from the given generator.
///
/// # Errors
///
/// Returns [`Error::EmptyChoices`] if `items` is empty.
pub fn random_element_with<'a, R: Rng + ?Sized, T>(
    rng: &mut R,
    items: &'a [T],
) -> Result<&'a T> {
    if items.is_empty() {
        return Err(Error::EmptyChoices);
    }

    Ok(&items[rng.random_range(0..items.len())])
}
