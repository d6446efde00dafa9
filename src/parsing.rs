use num_bigint::BigUint;
use num_traits::{One, Zero};
use thiserror::Error;

use crate::Ordinal;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Error)]
/// An error that can occur when parsing an [`Ordinal`].
pub enum FromStrError {
    /// Encountered malformed input. Holds the byte index of where the parsing failed.
    #[error("malformed input at character {0}")]
    MalformedInput(usize),
}

#[derive(Copy, Clone)]
pub struct ParseHead<'s> {
    input: &'s str,
    index: usize,
}

impl<'s> ParseHead<'s> {
    pub fn new(input: &'s str) -> Self {
        Self { input, index: 0 }
    }

    fn take(&mut self, pattern: impl FnOnce(&char) -> bool) -> Result<char, FromStrError> {
        let Some(chr) = self.input.chars().next() else {
            return Err(FromStrError::MalformedInput(self.index));
        };
        if !pattern(&chr) {
            return Err(FromStrError::MalformedInput(self.index));
        }
        let len = chr.len_utf8();
        self.input = &self.input[len..];
        self.index += len;
        Ok(chr)
    }

    fn chomp(&mut self, pattern: &str) -> Result<(), FromStrError> {
        if !self.input.starts_with(pattern) {
            return Err(FromStrError::MalformedInput(self.index));
        }
        let len = pattern.len();
        self.input = &self.input[len..];
        self.index += len;
        Ok(())
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.input.trim_start();
        self.index += self.input.len() - trimmed.len();
        self.input = trimmed;
    }

    fn assert(&self, f: impl FnOnce(&str) -> bool) -> Result<(), FromStrError> {
        f(self.input)
            .then_some(())
            .ok_or(FromStrError::MalformedInput(self.index))
    }
}

// Parsing rules (whitespace is allowed around "+", "(" and ")"):
// <root> ::= <sum>
// <sum> ::= <term> ("+" <term>)*
// <term> ::= <int> | <omega> ("**" <power>)? ("*" <posint>)?
// <power> ::= <int> | "(" <sum> ")" | <omega> ("**" <power>)?
// <omega> ::= "w" | "ω"
// <int> ::= "0" | (NONZERO DIGIT*)
//
// A power or coefficient that evaluates to zero is rejected. Terms are added with ordinal
// addition, so "1 + w" is read as w.

pub fn parse_ordinal(input: &mut ParseHead<'_>) -> Result<Ordinal, FromStrError> {
    let res = parse_sum(input)?;
    input.skip_whitespace();
    input.assert(str::is_empty)?;
    Ok(res)
}

fn parse_sum(input: &mut ParseHead<'_>) -> Result<Ordinal, FromStrError> {
    input.skip_whitespace();
    let mut sum = parse_term(input)?;
    loop {
        let save = *input;
        input.skip_whitespace();
        if input.chomp("+").is_err() {
            *input = save;
            return Ok(sum);
        }
        input.skip_whitespace();
        sum += parse_term(input)?;
    }
}

fn parse_omega(input: &mut ParseHead<'_>) -> Result<(), FromStrError> {
    if input.chomp("w").is_ok() {
        return Ok(());
    }
    input.chomp("ω")
}

fn parse_term(input: &mut ParseHead<'_>) -> Result<Ordinal, FromStrError> {
    if parse_omega(input).is_err() {
        return parse_int(input).map(Ordinal::from);
    }
    let exponent = if input.chomp("**").is_ok() {
        parse_power(input)?
    } else {
        Ordinal::one()
    };
    let coefficient = if input.chomp("*").is_ok() {
        let start = input.index;
        let coefficient = parse_int(input)?;
        if coefficient.is_zero() {
            return Err(FromStrError::MalformedInput(start));
        }
        coefficient
    } else {
        BigUint::one()
    };
    Ok(Ordinal::term(exponent, coefficient))
}

fn parse_power(input: &mut ParseHead<'_>) -> Result<Ordinal, FromStrError> {
    let start = input.index;
    let power = if input.chomp("(").is_ok() {
        let inner = parse_sum(input)?;
        input.skip_whitespace();
        input.chomp(")")?;
        inner
    } else if parse_omega(input).is_ok() {
        let exponent = if input.chomp("**").is_ok() {
            parse_power(input)?
        } else {
            Ordinal::one()
        };
        Ordinal::omega_pow(exponent)
    } else {
        Ordinal::from(parse_int(input)?)
    };
    if power.is_zero() {
        return Err(FromStrError::MalformedInput(start));
    }
    Ok(power)
}

fn parse_int(input: &mut ParseHead<'_>) -> Result<BigUint, FromStrError> {
    let start = input.index;
    if input.chomp("0").is_ok() {
        return Ok(BigUint::ZERO);
    }
    let mut value = BigUint::from(
        input
            .take(char::is_ascii_digit)?
            .to_digit(10)
            .ok_or(FromStrError::MalformedInput(start))?,
    );
    while let Some(digit) = input
        .take(char::is_ascii_digit)
        .ok()
        .and_then(|c| c.to_digit(10))
    {
        value = value * 10u32 + digit;
    }
    Ok(value)
}
