use core::{ops::Index, slice};

use num_bigint::BigUint;
use num_traits::{Pow, Zero};

use crate::{display::FactorsLatex, shims::*, Ordinal};

/// An ordered product of prime ordinals raised to finite powers.
///
/// Ordinal multiplication does not commute, so the order of the `(base, exponent)` pairs
/// matters: [`product`](Self::product) multiplies them left to right. Adjacent pairs never
/// share a base.
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(from = "FactorList", into = "FactorList")
)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OrdinalFactors {
    factors: Vec<(Ordinal, BigUint)>,
}

impl OrdinalFactors {
    /// Collects `(base, exponent)` pairs, merging adjacent pairs with equal bases by adding
    /// their exponents and dropping pairs with a zero exponent.
    pub fn new(factors: impl IntoIterator<Item = (Ordinal, BigUint)>) -> Self {
        let mut grouped: Vec<(Ordinal, BigUint)> = Vec::new();
        for (base, exponent) in factors {
            if exponent.is_zero() {
                continue;
            }
            if let Some((last, total)) = grouped.last_mut() {
                if *last == base {
                    *total += exponent;
                    continue;
                }
            }
            grouped.push((base, exponent));
        }
        Self { factors: grouped }
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, (Ordinal, BigUint)> {
        self.factors.iter()
    }

    /// Whether `base` occurs as the base of any factor.
    pub fn contains(&self, base: &Ordinal) -> bool {
        self.factors.iter().any(|(factor, _)| factor == base)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&(Ordinal, BigUint)> {
        self.factors.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[(Ordinal, BigUint)] {
        &self.factors
    }

    #[inline]
    pub fn into_vec(self) -> Vec<(Ordinal, BigUint)> {
        self.factors
    }

    /// Multiplies the factors back together, left to right.
    pub fn product(&self) -> Ordinal {
        self.factors
            .iter()
            .map(|(base, exponent)| base.pow(exponent))
            .product()
    }

    /// Returns an adapter that displays the factors as a LaTeX product.
    #[inline]
    pub fn latex(&self) -> FactorsLatex<'_> {
        FactorsLatex(self)
    }
}

impl Index<usize> for OrdinalFactors {
    type Output = (Ordinal, BigUint);

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.factors[index]
    }
}

impl<'a> IntoIterator for &'a OrdinalFactors {
    type Item = &'a (Ordinal, BigUint);
    type IntoIter = slice::Iter<'a, (Ordinal, BigUint)>;

    fn into_iter(self) -> Self::IntoIter {
        self.factors.iter()
    }
}

impl IntoIterator for OrdinalFactors {
    type Item = (Ordinal, BigUint);
    type IntoIter = vec::IntoIter<(Ordinal, BigUint)>;

    fn into_iter(self) -> Self::IntoIter {
        self.factors.into_iter()
    }
}

impl FromIterator<(Ordinal, BigUint)> for OrdinalFactors {
    fn from_iter<I: IntoIterator<Item = (Ordinal, BigUint)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<(Ordinal, BigUint)>> for OrdinalFactors {
    fn from(factors: Vec<(Ordinal, BigUint)>) -> Self {
        Self::new(factors)
    }
}

impl From<OrdinalFactors> for Vec<(Ordinal, BigUint)> {
    fn from(factors: OrdinalFactors) -> Self {
        factors.factors
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
struct FactorList(Vec<(Ordinal, crate::natural::Natural)>);

#[cfg(feature = "serde")]
impl From<FactorList> for OrdinalFactors {
    fn from(list: FactorList) -> Self {
        list.0.into_iter().map(|(base, exponent)| (base, exponent.0)).collect()
    }
}

#[cfg(feature = "serde")]
impl From<OrdinalFactors> for FactorList {
    fn from(factors: OrdinalFactors) -> Self {
        Self(factors.factors.into_iter().map(|(base, exponent)| (base, crate::natural::Natural(exponent))).collect())
    }
}
