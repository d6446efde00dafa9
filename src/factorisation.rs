//! Prime factorisation of ordinals.
//!
//! Every ordinal above one factors uniquely into primes once the factors are put in the
//! order produced here: the limit primes `ω^(ω^α)` first, largest first, followed by the
//! successor primes `ω^α + 1` and natural numbers. Natural numbers are not factored further.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::{shims::*, Cnf, Ordinal, OrdinalFactors, SubtractError};

/// Returns the ordinal `c` such that `b + c == a`.
///
/// # Errors
/// Returns a [`SubtractError`] unless `a > b`.
pub fn subtract(a: &Ordinal, b: &Ordinal) -> Result<Ordinal, SubtractError> {
    if a <= b {
        return Err(SubtractError { minuend: a.clone(), subtrahend: b.clone() });
    }
    Ok(difference(a, b))
}

/// [`subtract`] for callers that already know `a > b`.
fn difference(a: &Ordinal, b: &Ordinal) -> Ordinal {
    let (mut a, mut b) = (a, b);
    loop {
        match (a, b) {
            (Ordinal::Finite(m), Ordinal::Finite(n)) => return Ordinal::Finite(m - n),
            (Ordinal::Infinite(x), Ordinal::Infinite(y)) if x.exponent() == y.exponent() => {
                if x.coefficient() == y.coefficient() {
                    a = x.addend();
                    b = y.addend();
                    continue;
                }
                return Ordinal::node(
                    x.exponent().clone(),
                    x.coefficient() - y.coefficient(),
                    x.addend().clone(),
                );
            }
            // b is finite or has a smaller leading exponent, so a absorbs it
            _ => return a.clone(),
        }
    }
}

/// Returns the terms of an ordinal, largest first.
///
/// For example, `w**w**w + w**3 + w*7 + 9` becomes `[w**w**w, w**3, w*7, 9]`.
/// Zero has no terms.
pub fn terms(ordinal: &Ordinal) -> Vec<Ordinal> {
    let (leading, remainder) = ordinal.split_terms();
    let mut terms: Vec<Ordinal> = leading
        .into_iter()
        .map(|(exponent, coefficient)| Ordinal::term(exponent.clone(), coefficient.clone()))
        .collect();
    if !remainder.is_zero() {
        terms.push(Ordinal::Finite(remainder.clone()));
    }
    terms
}

/// Factorises the leading term `ω^E·C` of `term`; its addend is ignored.
///
/// For example, `w**(w**w*7 + w*3 + 2)*5` becomes `[(w**w**w, 7), (w**w, 3), (w, 2), (5, 1)]`.
pub fn factorise_term(term: &Cnf) -> Vec<(Ordinal, BigUint)> {
    term_factors(term.exponent(), term.coefficient())
}

/// Factorises the successor `ω^E·C + 1` of the leading term of `term`; its addend is ignored.
///
/// `ω^E + 1` is always prime, so this is `[(ω^E + 1, 1)]` followed by `(C, 1)` when `C > 1`.
pub fn factorise_term_successor(term: &Cnf) -> Vec<(Ordinal, BigUint)> {
    successor_factors(term.exponent(), term.coefficient())
}

fn term_factors(exponent: &Ordinal, coefficient: &BigUint) -> Vec<(Ordinal, BigUint)> {
    let (leading, remainder) = exponent.split_terms();
    // ω^(ω^g·d) = (ω^(ω^g))^d
    let mut factors: Vec<(Ordinal, BigUint)> = leading
        .into_iter()
        .map(|(g, d)| (Ordinal::omega_pow(Ordinal::omega_pow(g.clone())), d.clone()))
        .collect();
    if !remainder.is_zero() {
        factors.push((Ordinal::omega(), remainder.clone()));
    }
    if !coefficient.is_one() {
        factors.push((Ordinal::Finite(coefficient.clone()), BigUint::one()));
    }
    factors
}

fn successor_factors(exponent: &Ordinal, coefficient: &BigUint) -> Vec<(Ordinal, BigUint)> {
    let mut factors = vec![(Ordinal::node(exponent.clone(), BigUint::one(), Ordinal::one()), BigUint::one())];
    if !coefficient.is_one() {
        factors.push((Ordinal::Finite(coefficient.clone()), BigUint::one()));
    }
    factors
}

/// Divides every term `ω^e·c` by `ω^divisor` on the left, leaving `ω^(e - divisor)·c`.
fn divide_terms(terms: &mut [(Ordinal, BigUint)], divisor: &Ordinal) {
    for (exponent, _) in terms.iter_mut() {
        *exponent = difference(exponent, divisor);
    }
}

/// Returns the prime factors of an ordinal.
///
/// Natural numbers (including 0 and 1) and primes are returned as a single factor. Otherwise
/// the smallest term is split off and the remaining terms are divided by it, repeatedly, so
/// that `ω^a·c + ω^b·d + … = ω^b·(ω^(a-b)·c + …)` unwinds into a product of successor primes.
///
/// ```
/// use cantor::{factors, Ordinal, Pow};
///
/// let w = Ordinal::omega();
/// // w**2 + w == w * (w + 1)
/// let fs = factors(&(w.clone().pow(2) + w.clone()));
/// assert_eq!(fs.to_string(), "[(w, 1), (w + 1, 1)]");
/// assert_eq!(fs.product(), w.clone().pow(2) + w);
/// ```
pub fn factors(ordinal: &Ordinal) -> OrdinalFactors {
    if ordinal.is_finite() || ordinal.is_prime() {
        return OrdinalFactors::new([(ordinal.clone(), BigUint::one())]);
    }
    trace!(ordinal = %ordinal, "factorising");

    let (leading, remainder) = ordinal.split_terms();
    let mut remaining: Vec<(Ordinal, BigUint)> = leading
        .into_iter()
        .map(|(exponent, coefficient)| (exponent.clone(), coefficient.clone()))
        .collect();
    let mut factors = Vec::new();

    if remainder.is_zero() {
        // A limit ordinal: its smallest term is a left factor of every other term
        if let Some((exponent, coefficient)) = remaining.pop() {
            trace!(exponent = %exponent, coefficient = %coefficient, "peeled limit term");
            factors.extend(term_factors(&exponent, &coefficient));
            divide_terms(&mut remaining, &exponent);
        }
    } else if !remainder.is_one() {
        factors.push((Ordinal::Finite(remainder.clone()), BigUint::one()));
    }

    // What is left is always some ω^a·c + … + ω^b·d + 1 = (ω^b·d + 1)·(ω^(a-b)·c + … + 1)
    while let Some((exponent, coefficient)) = remaining.pop() {
        trace!(exponent = %exponent, coefficient = %coefficient, "peeled successor term");
        factors.extend(successor_factors(&exponent, &coefficient));
        divide_terms(&mut remaining, &exponent);
    }

    let factors = OrdinalFactors::new(factors);
    trace!(factors = %factors, "factorised");
    factors
}
