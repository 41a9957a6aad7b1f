//! IPv4 address prompts in one of four textual forms.

use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::console::Console;
use crate::error::{Error, Result};
use crate::parsers::array::split_fields;
use crate::prompt::{Outcome, PromptRequest, Rejection, Validator};

const BINARY_LENGTH: usize = 32;
const HEX_LENGTH: usize = 8;
const OCTET_COUNT: usize = 4;
const OCTET_MAX_DIGITS: usize = 3;

/// The textual encoding an address is expected in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressForm {
    /// 32 characters of `0`/`1`.
    Binary,
    /// A single decimal number.
    Decimal,
    /// Four dot-separated octets, e.g. `192.168.1.1`.
    DotDecimal,
    /// 8 hexadecimal digits.
    Hex,
}

impl AddressForm {
    pub const ALL: [AddressForm; 4] = [
        AddressForm::Binary,
        AddressForm::Decimal,
        AddressForm::DotDecimal,
        AddressForm::Hex,
    ];

    /// The prompt used when the caller doesn't supply one.
    #[must_use]
    pub fn default_prompt(self) -> String {
        format!("Enter an IP in {self} form")
    }
}

impl Display for AddressForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            AddressForm::Binary => "binary",
            AddressForm::Decimal => "decimal",
            AddressForm::DotDecimal => "dot_decimal",
            AddressForm::Hex => "hex",
        })
    }
}

impl FromStr for AddressForm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AddressForm::ALL
            .into_iter()
            .find(|form| form.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownAddressForm(s.to_string()))
    }
}

fn validate_binary(address: &str) -> Outcome<()> {
    if address.chars().count() != BINARY_LENGTH {
        return Err(Rejection::BinaryAddressLength);
    }

    if !address.chars().all(|c| c == '0' || c == '1') {
        return Err(Rejection::BinaryAddressDigits);
    }

    Ok(())
}

// TODO: validate the decimal form as an unsigned 32-bit number; every input is accepted for now.
#[allow(clippy::unnecessary_wraps)]
fn validate_decimal(_address: &str) -> Outcome<()> {
    Ok(())
}

fn validate_dot_decimal(address: &str) -> Outcome<()> {
    let octets = split_fields(address, ".");

    if octets.len() != OCTET_COUNT {
        return Err(Rejection::OctetCount);
    }

    if octets
        .iter()
        .any(|octet| octet.chars().count() > OCTET_MAX_DIGITS)
    {
        return Err(Rejection::OctetLength);
    }

    for octet in &octets {
        let value: i32 = octet.parse().map_err(|_| Rejection::OctetNotNumber)?;
        if !(0..=255).contains(&value) {
            return Err(Rejection::OctetRange);
        }
    }

    Ok(())
}

// TODO: reject characters outside 0-9a-fA-F; only the length is checked for now.
fn validate_hex(address: &str) -> Outcome<()> {
    if address.chars().count() != HEX_LENGTH {
        return Err(Rejection::HexAddressLength);
    }

    Ok(())
}

/// Accepts an address in the configured [`AddressForm`] and returns it
/// with surrounding whitespace removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressValidator {
    form: AddressForm,
}

impl AddressValidator {
    #[must_use]
    pub fn new(form: AddressForm) -> Self {
        Self { form }
    }
}

impl Validator for AddressValidator {
    type Output = String;

    fn validate(&self, input: &str) -> Outcome<String> {
        let address = input.trim();

        match self.form {
            AddressForm::Binary => validate_binary(address),
            AddressForm::Decimal => validate_decimal(address),
            AddressForm::DotDecimal => validate_dot_decimal(address),
            AddressForm::Hex => validate_hex(address),
        }?;

        Ok(address.to_string())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Prompts for an address in `form`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPrompt`] for an empty prompt, or a console failure.
    pub fn prompt_for_address(&mut self, prompt: &str, form: AddressForm) -> Result<String> {
        self.prompt(&PromptRequest::new(prompt)?, &AddressValidator::new(form))
    }

    /// Prompts for an address in `form` with the default prompt.
    ///
    /// # Errors
    ///
    /// Only fails when the console does.
    pub fn prompt_for_address_in_form(&mut self, form: AddressForm) -> Result<String> {
        self.prompt_for_address(&form.default_prompt(), form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(form: AddressForm, input: &str) -> Outcome<String> {
        AddressValidator::new(form).validate(input)
    }

    #[test]
    fn test_form_names_round_trip() {
        for form in AddressForm::ALL {
            assert_eq!(form.to_string().parse::<AddressForm>().unwrap(), form);
        }
        assert_eq!("HEX".parse::<AddressForm>().unwrap(), AddressForm::Hex);
        assert!(matches!(
            "octal".parse::<AddressForm>(),
            Err(Error::UnknownAddressForm(_))
        ));
    }

    #[test]
    fn test_default_prompt() {
        assert_eq!(
            AddressForm::DotDecimal.default_prompt(),
            "Enter an IP in dot_decimal form"
        );
    }

    #[test]
    fn test_dot_decimal_valid() {
        assert_eq!(
            check(AddressForm::DotDecimal, "192.168.1.1"),
            Ok("192.168.1.1".to_string())
        );
        assert_eq!(
            check(AddressForm::DotDecimal, "  10.0.0.255 "),
            Ok("10.0.0.255".to_string())
        );
        assert!(check(AddressForm::DotDecimal, "0.0.0.0").is_ok());
    }

    #[test]
    fn test_dot_decimal_invalid() {
        assert_eq!(
            check(AddressForm::DotDecimal, "256.1.1.1"),
            Err(Rejection::OctetRange)
        );
        assert_eq!(
            check(AddressForm::DotDecimal, "1.2.3"),
            Err(Rejection::OctetCount)
        );
        assert_eq!(
            check(AddressForm::DotDecimal, "1.2.3.4.5"),
            Err(Rejection::OctetCount)
        );
        assert_eq!(
            check(AddressForm::DotDecimal, "1.2.3.1000"),
            Err(Rejection::OctetLength)
        );
        assert_eq!(
            check(AddressForm::DotDecimal, "1.a.3.4"),
            Err(Rejection::OctetNotNumber)
        );
        assert_eq!(
            check(AddressForm::DotDecimal, "1..3.4"),
            Err(Rejection::OctetNotNumber)
        );
        assert_eq!(
            check(AddressForm::DotDecimal, "1.2.3").unwrap_err().to_string(),
            "IP must consist of 4 octets, separated by a \".\""
        );
    }

    #[test]
    fn test_dot_decimal_checks_length_before_values() {
        assert_eq!(
            check(AddressForm::DotDecimal, "abc.1.2.3456"),
            Err(Rejection::OctetLength)
        );
    }

    #[test]
    fn test_binary() {
        let valid = "11000000101010000000000100000001";
        assert_eq!(check(AddressForm::Binary, valid), Ok(valid.to_string()));
        assert_eq!(
            check(AddressForm::Binary, &valid[1..]),
            Err(Rejection::BinaryAddressLength)
        );
        assert_eq!(
            check(AddressForm::Binary, "1100000010101000000000010000000x"),
            Err(Rejection::BinaryAddressDigits)
        );
        assert_eq!(
            check(AddressForm::Binary, "1").unwrap_err().to_string(),
            "IP must consist of exactly 32 digits long"
        );
    }

    #[test]
    fn test_hex_checks_length_only() {
        assert!(check(AddressForm::Hex, "C0A80101").is_ok());
        assert!(check(AddressForm::Hex, "zzzzzzzz").is_ok());
        assert_eq!(
            check(AddressForm::Hex, "C0A801"),
            Err(Rejection::HexAddressLength)
        );
    }

    #[test]
    fn test_decimal_accepts_anything() {
        assert!(check(AddressForm::Decimal, "3232235777").is_ok());
        assert!(check(AddressForm::Decimal, "not an address").is_ok());
    }
}
