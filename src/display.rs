use core::fmt;

use num_traits::One;

use crate::{Ordinal, OrdinalFactors};

/// Plain-text form, e.g. `w**(w + 1)*3 + w + 7`. [`FromStr`](core::str::FromStr) reads it back.
impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self::Infinite(cnf) = self else {
            return write!(f, "{}", self.finite_part());
        };
        write!(f, "w")?;
        match cnf.exponent() {
            exponent if *exponent == 1 => {}
            // Towers of powers of omega read unambiguously without parentheses
            exponent if exponent.is_finite() || exponent.is_gamma() => write!(f, "**{exponent}")?,
            exponent => write!(f, "**({exponent})")?,
        }
        if !cnf.coefficient().is_one() {
            write!(f, "*{}", cnf.coefficient())?;
        }
        if !cnf.addend().is_zero() {
            write!(f, " + {}", cnf.addend())?;
        }
        Ok(())
    }
}

/// Displays an [`Ordinal`] as LaTeX, e.g. `\omega^{\omega+1}\cdot3+\omega+7`.
///
/// Returned by [`Ordinal::latex`].
#[derive(Debug, Clone, Copy)]
pub struct Latex<'a>(pub(crate) &'a Ordinal);

impl fmt::Display for Latex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ordinal::Infinite(cnf) = self.0 else {
            return write!(f, "{}", self.0.finite_part());
        };
        write!(f, r"\omega")?;
        if *cnf.exponent() != 1 {
            write!(f, "^{{{}}}", cnf.exponent().latex())?;
        }
        if !cnf.coefficient().is_one() {
            write!(f, r"\cdot{}", cnf.coefficient())?;
        }
        if !cnf.addend().is_zero() {
            write!(f, "+{}", cnf.addend().latex())?;
        }
        Ok(())
    }
}

/// Lists the factors as `[(base, exponent), ...]`.
impl fmt::Display for OrdinalFactors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, (base, exponent)) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({base}, {exponent})")?;
        }
        write!(f, "]")
    }
}

/// Displays [`OrdinalFactors`] as a LaTeX product.
///
/// An infinite base is put in parentheses when it has an addend or a power above one:
///
/// | factor          | LaTeX                              |
/// |-----------------|------------------------------------|
/// | `(w, 1)`        | `\omega`                           |
/// | `(w, 2)`        | `\left(\omega\right)^{2}`          |
/// | `(w + 1, 1)`    | `\left(\omega+1\right)`            |
/// | `(w**2 + 1, 3)` | `\left(\omega^{2}+1\right)^{3}`    |
#[derive(Debug, Clone, Copy)]
pub struct FactorsLatex<'a>(pub(crate) &'a OrdinalFactors);

impl fmt::Display for FactorsLatex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (base, exponent)) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, r"\cdot")?;
            }
            let Ordinal::Infinite(cnf) = base else {
                write!(f, "{base}")?;
                continue;
            };
            if !cnf.addend().is_zero() || !exponent.is_one() {
                write!(f, r"\left({}\right)", base.latex())?;
            } else {
                write!(f, "{}", base.latex())?;
            }
            if !exponent.is_one() {
                write!(f, "^{{{exponent}}}")?;
            }
        }
        Ok(())
    }
}
