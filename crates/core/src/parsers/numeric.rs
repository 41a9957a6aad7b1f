//! Bounded numeric prompts.
//!
//! Every width shares one path: the line is parsed as an `f64`, checked
//! against the inclusive bounds, checked for a fractional part when the
//! target is an integer, then narrowed. Passing the width's own min/max as
//! the bounds is what keeps an out-of-width value from being narrowed.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::marker::PhantomData;

use crate::config::{BYTE_PROMPT, FLOAT_PROMPT, INT_PROMPT, LONG_PROMPT, SHORT_PROMPT};
use crate::console::Console;
use crate::error::{Error, Result};
use crate::prompt::{Outcome, PromptRequest, Rejection, Validator};

/// Past this magnitude an `f64` carries no fractional digits.
const MAX_EXACT_FRACTION: f64 = 9_007_199_254_740_992.0;

/// A numeric type that can be prompted for.
pub trait Numeric: Copy + PartialOrd + Display {
    /// Lower bound used when the caller gives none.
    const MIN: Self;
    /// Upper bound used when the caller gives none.
    const MAX: Self;
    /// Whether input with a fractional part must be refused.
    const INTEGRAL: bool;
    const DEFAULT_PROMPT: &'static str;

    fn to_f64(self) -> f64;

    /// Narrows an already range-checked value.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_numeric {
    ($t:ty, $min:expr, $max:expr, $integral:expr, $prompt:expr) => {
        impl Numeric for $t {
            const MIN: Self = $min;
            const MAX: Self = $max;
            const INTEGRAL: bool = $integral;
            const DEFAULT_PROMPT: &'static str = $prompt;

            #[allow(clippy::cast_lossless, clippy::cast_precision_loss)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    };
}

impl_numeric!(i8, i8::MIN, i8::MAX, true, BYTE_PROMPT);
impl_numeric!(i16, i16::MIN, i16::MAX, true, SHORT_PROMPT);
impl_numeric!(i32, i32::MIN, i32::MAX, true, INT_PROMPT);
impl_numeric!(i64, i64::MIN, i64::MAX, true, LONG_PROMPT);
impl_numeric!(f32, f32::NEG_INFINITY, f32::MAX, false, FLOAT_PROMPT);
impl_numeric!(f64, f64::NEG_INFINITY, f64::MAX, false, FLOAT_PROMPT);

/// Formats a bound with at most two decimal places and no trailing zeros,
/// e.g. `1`, `2.5`, `0.33`, `-∞`.
#[must_use]
pub fn format_bound(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    if value.abs() >= MAX_EXACT_FRACTION {
        return format!("{value:.0}");
    }

    let rounded = (value * 100.0).round_ties_even() / 100.0;
    format!("{rounded}")
}

/// Parses a base-10 real number, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`Rejection::NotANumber`] for anything that isn't a number,
/// including `NaN`.
pub fn parse_number(input: &str) -> Outcome<f64> {
    let value: f64 = input.trim().parse().map_err(|_| Rejection::NotANumber)?;

    if value.is_nan() {
        return Err(Rejection::NotANumber);
    }

    Ok(value)
}

/// Accepts numbers in `[min, max]`, refusing fractions for integer targets.
///
/// Input goes through an `f64`, so integers past 2^53 in magnitude are
/// rounded to the nearest representable value before the range check.
#[derive(Debug, Clone)]
pub struct NumberValidator<T> {
    min: f64,
    max: f64,
    min_label: String,
    max_label: String,
    target: PhantomData<T>,
}

fn bound_label<T: Numeric>(bound: T) -> String {
    if T::INTEGRAL {
        bound.to_string()
    } else {
        format_bound(bound.to_f64())
    }
}

impl<T: Numeric> NumberValidator<T> {
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `min > max`.
    pub fn new(min: T, max: T) -> Result<Self> {
        let validator = Self::with_bounds(min, max);

        // Also catches NaN bounds on float targets.
        if !(validator.min <= validator.max) {
            return Err(Error::invalid_range(validator.min_label, validator.max_label));
        }

        Ok(validator)
    }

    /// The whole representable range of `T`.
    #[must_use]
    pub fn full_range() -> Self {
        Self::with_bounds(T::MIN, T::MAX)
    }

    fn with_bounds(min: T, max: T) -> Self {
        Self {
            min: min.to_f64(),
            max: max.to_f64(),
            min_label: bound_label(min),
            max_label: bound_label(max),
            target: PhantomData,
        }
    }

    fn out_of_range(&self) -> Rejection {
        Rejection::OutOfRange {
            min: self.min_label.clone(),
            max: self.max_label.clone(),
        }
    }
}

impl<T: Numeric> Validator for NumberValidator<T> {
    type Output = T;

    fn validate(&self, input: &str) -> Outcome<T> {
        let value = parse_number(input)?;

        if value < self.min || value > self.max {
            return Err(self.out_of_range());
        }

        // A signed width's MAX rounds up to -MIN as an f64 (2^63 for i64),
        // so that value slips past the upper bound above.
        if T::INTEGRAL && value >= -T::MIN.to_f64() {
            return Err(self.out_of_range());
        }

        if T::INTEGRAL && value.fract() != 0.0 {
            return Err(Rejection::FloatingPoint);
        }

        Ok(T::from_f64(value))
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Prompts for a number of type `T` in `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] before prompting if `min > max`,
    /// [`Error::EmptyPrompt`] for an empty prompt, or a console failure.
    pub fn prompt_for_number_in<T: Numeric>(
        &mut self,
        prompt: &str,
        min: T,
        max: T,
    ) -> Result<T> {
        let validator = NumberValidator::new(min, max)?;
        self.prompt(&PromptRequest::new(prompt)?, &validator)
    }

    /// Prompts for any value representable by `T`.
    ///
    /// For `i64`, input beyond 2^53 in magnitude comes back rounded to the
    /// nearest `f64`, e.g. `9007199254740993` reads as `9007199254740992`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPrompt`] for an empty prompt, or a console failure.
    pub fn prompt_for_number<T: Numeric>(&mut self, prompt: &str) -> Result<T> {
        self.prompt(&PromptRequest::new(prompt)?, &NumberValidator::<T>::full_range())
    }

    /// Prompts for an `i32` with the default prompt.
    ///
    /// # Errors
    ///
    /// Only fails when the console does.
    pub fn prompt_for_int(&mut self) -> Result<i32> {
        self.prompt_for_number(i32::DEFAULT_PROMPT)
    }
}
