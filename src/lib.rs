#![no_std]
//! Exact arithmetic on the ordinals below ε₀, written in Cantor normal form.
//!
//! An [`Ordinal`] is either a natural number or a node `ω^exponent · coefficient + addend`
//! whose exponent and addend are themselves ordinals. Addition, multiplication and
//! exponentiation are exact and follow the (non-commutative) rules of ordinal arithmetic,
//! and [`factors`] computes the unique factorisation into prime ordinals.
//!
//! Natural numbers, coefficients and factor exponents are arbitrary precision [`BigUint`]s,
//! so no operation can overflow.
//!
//! ```
//! use cantor::{Ordinal, Pow};
//!
//! let w = Ordinal::omega();
//! assert_eq!((w.clone() + 1).pow(2), w.clone().pow(2) + w.clone() + 1);
//! assert_ne!((w.clone() + 1) * 2, 2 * (w.clone() + 1));
//! assert_eq!((w.clone().pow(2) + w.clone()).factors().product(), w.clone().pow(2) + w);
//! ```

use core::{cmp::Ordering, iter::{Product, Sum}, ops::*, str::FromStr};

use num_traits::{ConstZero, One, ToPrimitive, Zero};
pub use num_bigint::BigUint;
pub use num_traits::Pow;

mod shims;
use shims::*;

mod display;
mod error;
mod factorisation;
mod factors;
#[cfg(feature = "serde")]
mod natural;
mod parsing;

pub use display::{FactorsLatex, Latex};
pub use error::{ConstructionError, SubtractError};
pub use factorisation::{factorise_term, factorise_term_successor, factors, subtract, terms};
pub use factors::OrdinalFactors;
pub use parsing::FromStrError;

/// An ordinal below ε₀.
///
/// Finite ordinals are stored as plain integers; everything else is a [`Cnf`] node.
/// Values are immutable: every operation builds a new ordinal.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize), serde(untagged))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ordinal {
    Finite(#[cfg_attr(feature = "serde", serde(with = "natural"))] BigUint),
    Infinite(Box<Cnf>),
}

/// A node `ω^exponent · coefficient + addend` in Cantor normal form.
///
/// The exponent is never zero, the coefficient is at least one, and an infinite addend
/// always has a strictly smaller exponent than its parent. These hold for every `Cnf`
/// that exists, since the fields can only be set through [`Cnf::new`] or by arithmetic.
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "CnfParts")
)]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnf {
    exponent: Ordinal,
    #[cfg_attr(feature = "serde", serde(with = "natural"))]
    coefficient: BigUint,
    addend: Ordinal,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CnfParts {
    exponent: Ordinal,
    #[serde(with = "natural")]
    coefficient: BigUint,
    addend: Ordinal,
}

#[cfg(feature = "serde")]
impl TryFrom<CnfParts> for Cnf {
    type Error = ConstructionError;

    fn try_from(parts: CnfParts) -> Result<Self, Self::Error> {
        Self::new(parts.exponent, parts.coefficient, parts.addend)
    }
}

impl Cnf {
    /// Validates and builds `ω^exponent · coefficient + addend`.
    ///
    /// # Errors
    /// - [`ConstructionError::ZeroExponent`] if `exponent` is 0,
    /// - [`ConstructionError::ZeroCoefficient`] if `coefficient` is 0,
    /// - [`ConstructionError::AddendTooLarge`] if `addend` is not smaller than `ω^exponent`.
    pub fn new(
        exponent: impl Into<Ordinal>,
        coefficient: impl Into<BigUint>,
        addend: impl Into<Ordinal>,
    ) -> Result<Self, ConstructionError> {
        let exponent = exponent.into();
        let coefficient = coefficient.into();
        let addend = addend.into();
        if exponent.is_zero() {
            return Err(ConstructionError::ZeroExponent);
        }
        if coefficient.is_zero() {
            return Err(ConstructionError::ZeroCoefficient);
        }
        if addend.leading_exponent().is_some_and(|tail| *tail >= exponent) {
            return Err(ConstructionError::AddendTooLarge { exponent, addend });
        }
        Ok(Self { exponent, coefficient, addend })
    }

    fn new_unchecked(exponent: Ordinal, coefficient: BigUint, addend: Ordinal) -> Self {
        debug_assert!(
            !exponent.is_zero()
                && !coefficient.is_zero()
                && addend.leading_exponent().map_or(true, |tail| *tail < exponent),
            "arithmetic produced a node outside of Cantor normal form"
        );
        Self { exponent, coefficient, addend }
    }

    #[inline]
    pub fn exponent(&self) -> &Ordinal {
        &self.exponent
    }

    #[inline]
    pub fn coefficient(&self) -> &BigUint {
        &self.coefficient
    }

    #[inline]
    pub fn addend(&self) -> &Ordinal {
        &self.addend
    }

    #[inline]
    pub fn into_parts(self) -> (Ordinal, BigUint, Ordinal) {
        (self.exponent, self.coefficient, self.addend)
    }
}

impl From<u64> for Ordinal {
    #[inline]
    fn from(value: u64) -> Self {
        Self::Finite(BigUint::from(value))
    }
}

impl From<BigUint> for Ordinal {
    #[inline]
    fn from(value: BigUint) -> Self {
        Self::Finite(value)
    }
}

impl From<Cnf> for Ordinal {
    #[inline]
    fn from(cnf: Cnf) -> Self {
        Self::Infinite(Box::new(cnf))
    }
}

impl TryFrom<i64> for Ordinal {
    type Error = ConstructionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self::from)
            .map_err(|_| ConstructionError::Negative(value))
    }
}

impl ToPrimitive for Ordinal {
    fn to_i64(&self) -> Option<i64> {
        self.as_finite().and_then(BigUint::to_i64)
    }

    fn to_u64(&self) -> Option<u64> {
        self.as_finite().and_then(BigUint::to_u64)
    }
}

impl Zero for Ordinal {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Ordinal::is_zero(self)
    }
}

impl ConstZero for Ordinal {
    const ZERO: Self = Ordinal::ZERO;
}

impl One for Ordinal {
    #[inline]
    fn one() -> Self {
        Self::Finite(BigUint::one())
    }
}

impl Ord for Ordinal {
    fn cmp(&self, other: &Self) -> Ordering {
        let (mut lhs, mut rhs) = (self, other);
        loop {
            match (lhs, rhs) {
                (Self::Finite(m), Self::Finite(n)) => return m.cmp(n),
                (Self::Finite(_), Self::Infinite(_)) => return Ordering::Less,
                (Self::Infinite(_), Self::Finite(_)) => return Ordering::Greater,
                (Self::Infinite(a), Self::Infinite(b)) => {
                    let res = a.exponent.cmp(&b.exponent)
                        .then_with(|| a.coefficient.cmp(&b.coefficient));
                    if res != Ordering::Equal { return res }
                    lhs = &a.addend;
                    rhs = &b.addend;
                }
            }
        }
    }
}

impl PartialOrd for Ordinal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<u64> for Ordinal {
    #[inline]
    fn eq(&self, other: &u64) -> bool {
        self.to_u64() == Some(*other)
    }
}

impl PartialOrd<u64> for Ordinal {
    fn partial_cmp(&self, other: &u64) -> Option<Ordering> {
        match self {
            Self::Finite(n) => Some(n.cmp(&BigUint::from(*other))),
            Self::Infinite(_) => Some(Ordering::Greater),
        }
    }
}

impl PartialEq<Ordinal> for u64 {
    #[inline]
    fn eq(&self, other: &Ordinal) -> bool {
        other == self
    }
}

impl PartialOrd<Ordinal> for u64 {
    #[inline]
    fn partial_cmp(&self, other: &Ordinal) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

macro_rules! forward_binop_impl {
    ($($impl_assign_name: ident: $assign_name: ident, $impl_name: ident: $name: ident => $method: ident);*) => {$(
        impl $impl_name<&Ordinal> for &Ordinal {
            type Output = Ordinal;

            fn $name(self, rhs: &Ordinal) -> Ordinal {
                self.$method(rhs)
            }
        }

        impl $impl_name<Ordinal> for &Ordinal {
            type Output = Ordinal;

            fn $name(self, rhs: Ordinal) -> Ordinal {
                self.$method(&rhs)
            }
        }

        impl $impl_name<&Ordinal> for Ordinal {
            type Output = Ordinal;

            fn $name(self, rhs: &Ordinal) -> Ordinal {
                (&self).$method(rhs)
            }
        }

        impl $impl_name for Ordinal {
            type Output = Ordinal;

            fn $name(self, rhs: Self) -> Self {
                (&self).$method(&rhs)
            }
        }

        impl $impl_name<u64> for Ordinal {
            type Output = Ordinal;

            fn $name(self, rhs: u64) -> Self {
                (&self).$method(&Self::from(rhs))
            }
        }

        impl $impl_name<u64> for &Ordinal {
            type Output = Ordinal;

            fn $name(self, rhs: u64) -> Ordinal {
                self.$method(&Ordinal::from(rhs))
            }
        }

        impl $impl_name<Ordinal> for u64 {
            type Output = Ordinal;

            fn $name(self, rhs: Ordinal) -> Ordinal {
                Ordinal::from(self).$method(&rhs)
            }
        }

        impl $impl_name<&Ordinal> for u64 {
            type Output = Ordinal;

            fn $name(self, rhs: &Ordinal) -> Ordinal {
                Ordinal::from(self).$method(rhs)
            }
        }

        impl $impl_assign_name for Ordinal {
            fn $assign_name(&mut self, rhs: Self) {
                *self = (&*self).$method(&rhs);
            }
        }

        impl $impl_assign_name<&Ordinal> for Ordinal {
            fn $assign_name(&mut self, rhs: &Ordinal) {
                *self = (&*self).$method(rhs);
            }
        }

        impl $impl_assign_name<u64> for Ordinal {
            fn $assign_name(&mut self, rhs: u64) {
                *self = (&*self).$method(&Ordinal::from(rhs));
            }
        }
    )*};
}

forward_binop_impl! {
    AddAssign: add_assign, Add: add => add_ref;
    MulAssign: mul_assign, Mul: mul => mul_ref
}

macro_rules! forward_pow_impl {
    ($($lhs: ty, $rhs: ty => |$base: ident, $exponent: ident| $body: expr);*) => {$(
        impl Pow<$rhs> for $lhs {
            type Output = Ordinal;

            fn pow(self, $exponent: $rhs) -> Ordinal {
                let $base = self;
                $body
            }
        }
    )*};
}

forward_pow_impl! {
    Ordinal, Ordinal => |base, exponent| base.pow_ref(&exponent);
    Ordinal, &Ordinal => |base, exponent| base.pow_ref(exponent);
    &Ordinal, Ordinal => |base, exponent| base.pow_ref(&exponent);
    &Ordinal, &Ordinal => |base, exponent| base.pow_ref(exponent);
    Ordinal, u64 => |base, exponent| base.pow_finite(&BigUint::from(exponent));
    &Ordinal, u64 => |base, exponent| base.pow_finite(&BigUint::from(exponent));
    Ordinal, BigUint => |base, exponent| base.pow_finite(&exponent);
    &Ordinal, BigUint => |base, exponent| base.pow_finite(&exponent);
    Ordinal, &BigUint => |base, exponent| base.pow_finite(exponent);
    &Ordinal, &BigUint => |base, exponent| base.pow_finite(exponent);
    u64, Ordinal => |base, exponent| Ordinal::from(base).pow_ref(&exponent);
    u64, &Ordinal => |base, exponent| Ordinal::from(base).pow_ref(exponent)
}

impl Sum for Ordinal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc.add_ref(&x))
    }
}

impl<'a> Sum<&'a Ordinal> for Ordinal {
    fn sum<I: Iterator<Item = &'a Ordinal>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc.add_ref(x))
    }
}

/// Multiplies left to right, which matters since ordinal multiplication does not commute.
impl Product for Ordinal {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc.mul_ref(&x))
    }
}

impl<'a> Product<&'a Ordinal> for Ordinal {
    fn product<I: Iterator<Item = &'a Ordinal>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc.mul_ref(x))
    }
}

/// ω, built on first use and shared afterwards.
#[cfg(feature = "std")]
pub static OMEGA: LazyLock<Ordinal> = LazyLock::new(Ordinal::omega);

impl Ordinal {
    pub const ZERO: Self = Self::Finite(BigUint::ZERO);

    /// Validates and builds `ω^exponent · coefficient + addend`. See [`Cnf::new`].
    pub fn new(
        exponent: impl Into<Ordinal>,
        coefficient: impl Into<BigUint>,
        addend: impl Into<Ordinal>,
    ) -> Result<Self, ConstructionError> {
        Cnf::new(exponent, coefficient, addend).map(Self::from)
    }

    /// The first infinite ordinal, ω.
    ///
    /// Infinite ordinals live on the heap, so ω cannot be a `const` like [`Ordinal::ZERO`].
    /// With the `std` feature, [`OMEGA`] holds a copy built once.
    #[inline]
    pub fn omega() -> Self {
        Self::node(Self::one(), BigUint::one(), Self::ZERO)
    }

    /// Returns `ω^exponent`, which is 1 when `exponent` is 0.
    #[inline]
    pub fn omega_pow(exponent: impl Into<Ordinal>) -> Self {
        Self::term(exponent, BigUint::one())
    }

    /// Returns the single term `ω^exponent · coefficient`.
    pub fn term(exponent: impl Into<Ordinal>, coefficient: impl Into<BigUint>) -> Self {
        let exponent = exponent.into();
        let coefficient = coefficient.into();
        if coefficient.is_zero() { return Self::ZERO; }
        if exponent.is_zero() { return Self::Finite(coefficient); }
        Self::node(exponent, coefficient, Self::ZERO)
    }

    fn node(exponent: Ordinal, coefficient: BigUint, addend: Ordinal) -> Self {
        Self::Infinite(Box::new(Cnf::new_unchecked(exponent, coefficient, addend)))
    }

    /// Reassembles `ω^e₀·c₀ + ω^e₁·c₁ + … + tail` from `(eᵢ, cᵢ)` pairs listed largest first.
    fn assemble(leading: Vec<(Ordinal, BigUint)>, tail: Ordinal) -> Self {
        leading.into_iter()
            .rev()
            .fold(tail, |addend, (exponent, coefficient)| Self::node(exponent, coefficient, addend))
    }

    /// Splits an ordinal into the `(exponent, coefficient)` pairs of its infinite terms,
    /// largest first, and its finite remainder.
    fn split_terms(&self) -> (Vec<(&Ordinal, &BigUint)>, &BigUint) {
        let mut leading = Vec::new();
        let mut rest = self;
        loop {
            match rest {
                Self::Finite(n) => return (leading, n),
                Self::Infinite(cnf) => {
                    leading.push((&cnf.exponent, &cnf.coefficient));
                    rest = &cnf.addend;
                }
            }
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Finite(n) if n.is_zero())
    }

    #[inline]
    pub const fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    #[inline]
    pub const fn is_infinite(&self) -> bool {
        matches!(self, Self::Infinite(_))
    }

    #[inline]
    pub const fn as_finite(&self) -> Option<&BigUint> {
        match self {
            Self::Finite(n) => Some(n),
            Self::Infinite(_) => None,
        }
    }

    #[inline]
    pub fn as_cnf(&self) -> Option<&Cnf> {
        match self {
            Self::Finite(_) => None,
            Self::Infinite(cnf) => Some(cnf),
        }
    }

    /// Returns the exponent of the leading term, or `None` for finite ordinals.
    #[inline]
    pub fn leading_exponent(&self) -> Option<&Ordinal> {
        self.as_cnf().map(Cnf::exponent)
    }

    /// Returns the trailing natural number `n` of `ω^e₀·c₀ + … + n`.
    pub fn finite_part(&self) -> &BigUint {
        let mut rest = self;
        loop {
            match rest {
                Self::Finite(n) => return n,
                Self::Infinite(cnf) => rest = &cnf.addend,
            }
        }
    }

    /// Whether this is `α + 1` for some ordinal `α`.
    #[inline]
    pub fn is_successor(&self) -> bool {
        !self.finite_part().is_zero()
    }

    /// Whether this is neither zero nor a successor.
    #[inline]
    pub fn is_limit(&self) -> bool {
        self.is_infinite() && self.finite_part().is_zero()
    }

    /// Whether this is additively indecomposable, i.e. of the form `ω^α`.
    pub fn is_gamma(&self) -> bool {
        self.as_cnf()
            .is_some_and(|cnf| cnf.coefficient.is_one() && cnf.addend.is_zero())
    }

    /// Whether this is multiplicatively indecomposable, i.e. of the form `ω^(ω^α)`.
    pub fn is_delta(&self) -> bool {
        self.as_cnf().is_some_and(|cnf| {
            self.is_gamma()
                && match &cnf.exponent {
                    Self::Finite(e) => e.is_one(),
                    exponent => exponent.is_gamma(),
                }
        })
    }

    /// Whether this ordinal cannot be written as a product of two smaller ordinals.
    ///
    /// The infinite primes are exactly `ω^α + 1` and `ω^(ω^α)`; the finite ones are the
    /// usual prime numbers, tested with Miller–Rabin. The test is deterministic below
    /// 3.3·10²⁴ and a strong probable-prime test above that.
    pub fn is_prime(&self) -> bool {
        match self {
            Self::Finite(n) => is_prime_natural(n),
            Self::Infinite(cnf) => {
                (cnf.coefficient.is_one() && cnf.addend == 1) || self.is_delta()
            }
        }
    }

    /// Factorises this ordinal into primes. See [`factors`].
    #[inline]
    pub fn factors(&self) -> OrdinalFactors {
        factorisation::factors(self)
    }

    /// Returns an adapter that displays this ordinal as LaTeX.
    #[inline]
    pub fn latex(&self) -> Latex<'_> {
        Latex(self)
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        let mut leading = Vec::new();
        let mut lhs = self;
        let tail = loop {
            match (lhs, rhs) {
                (Self::Finite(m), Self::Finite(n)) => break Self::Finite(m + n),
                // n + α = α for finite n
                (Self::Finite(_), Self::Infinite(_)) => break rhs.clone(),
                (Self::Infinite(a), Self::Finite(_)) => {
                    leading.push((a.exponent.clone(), a.coefficient.clone()));
                    lhs = &a.addend;
                }
                (Self::Infinite(a), Self::Infinite(b)) => match a.exponent.cmp(&b.exponent) {
                    Ordering::Greater => {
                        leading.push((a.exponent.clone(), a.coefficient.clone()));
                        lhs = &a.addend;
                    }
                    // the rest of the left operand is absorbed by the right
                    Ordering::Equal => break Self::node(
                        a.exponent.clone(),
                        &a.coefficient + &b.coefficient,
                        b.addend.clone(),
                    ),
                    Ordering::Less => break rhs.clone(),
                },
            }
        };
        Self::assemble(leading, tail)
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Self::Finite(m), Self::Finite(n)) => Self::Finite(m * n),
            _ if self.is_zero() || rhs.is_zero() => Self::ZERO,
            (Self::Infinite(a), Self::Finite(n)) => Self::node(
                a.exponent.clone(),
                &a.coefficient * n,
                a.addend.clone(),
            ),
            // n·(ω^F·D + … + m) = ω^F·D + … + n·m
            (Self::Finite(n), Self::Infinite(_)) => {
                let (leading, m) = rhs.split_terms();
                let leading = leading.into_iter().map(|(f, d)| (f.clone(), d.clone())).collect();
                Self::assemble(leading, Self::Finite(n * m))
            }
            // (ω^E·C + A)·(ω^F·D + B) = ω^(E+F)·D + (A·B + (ω^E·C + A)·B), unrolled over the
            // terms of the right operand. A·B always lies below (ω^E·C + A)·B and vanishes.
            (Self::Infinite(a), Self::Infinite(_)) => {
                let (leading, m) = rhs.split_terms();
                let leading = leading.into_iter().map(|(f, d)| (&a.exponent + f, d.clone())).collect();
                Self::assemble(leading, self.mul_ref(&Self::Finite(m.clone())))
            }
        }
    }

    fn pow_ref(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (_, Self::Finite(n)) => self.pow_finite(n),
            (Self::Finite(n), Self::Infinite(_)) if n.is_zero() || n.is_one() => self.clone(),
            // n^(ω^F·D + B) = n^(ω^F·D) · n^B, one factor per term of the exponent
            (Self::Finite(_), Self::Infinite(_)) => {
                let (leading, m) = rhs.split_terms();
                leading.into_iter()
                    .map(|(f, d)| match f {
                        // n^(ω·d) = ω^d
                        Self::Finite(k) if k.is_one() => Self::omega_pow(Self::Finite(d.clone())),
                        // n^(ω^k·d) = ω^(ω^(k-1)·d)
                        Self::Finite(k) => Self::omega_pow(Self::term(k - 1u32, d.clone())),
                        // n^(ω^f·d) = ω^(ω^f·d) for infinite f
                        Self::Infinite(_) => Self::omega_pow(Self::term(f.clone(), d.clone())),
                    })
                    .chain(core::iter::once(self.pow_finite(m)))
                    .product()
            }
            // α^(ω^F·D + B) = ω^(E·ω^F·D) · α^B
            (Self::Infinite(a), Self::Infinite(_)) => {
                let (leading, m) = rhs.split_terms();
                leading.into_iter()
                    .map(|(f, d)| Self::omega_pow(&a.exponent * Self::term(f.clone(), d.clone())))
                    .chain(core::iter::once(self.pow_finite(m)))
                    .product()
            }
        }
    }

    /// Exponentiation by squaring, with ordinal multiplication as the monoid operation.
    fn pow_finite(&self, exponent: &BigUint) -> Self {
        match self {
            Self::Finite(base) => Self::Finite(Pow::pow(base, exponent)),
            Self::Infinite(_) => {
                let bits = exponent.bits();
                let mut result = Self::one();
                let mut square = self.clone();
                for bit in 0..bits {
                    if exponent.bit(bit) {
                        result = result.mul_ref(&square);
                    }
                    if bit + 1 < bits {
                        square = square.mul_ref(&square);
                    }
                }
                result
            }
        }
    }
}

/// Miller–Rabin with the first thirteen primes as witnesses.
fn is_prime_natural(n: &BigUint) -> bool {
    const WITNESSES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

    if *n < BigUint::from(2u32) { return false; }
    for p in WITNESSES {
        if *n == BigUint::from(p) { return true; }
        if (n % p).is_zero() { return false; }
    }

    let one = BigUint::one();
    let n_minus_one = n - &one;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;
    'witness: for a in WITNESSES {
        let mut x = BigUint::from(a).modpow(&d, n);
        if x == one || x == n_minus_one { continue; }
        for _ in 1..s {
            x = &x * &x % n;
            if x == n_minus_one { continue 'witness; }
        }
        return false;
    }
    true
}

impl FromStr for Ordinal {
    type Err = FromStrError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        parsing::parse_ordinal(&mut parsing::ParseHead::new(string))
    }
}
