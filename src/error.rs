use thiserror::Error;

use crate::Ordinal;

/// An attempt to build an ordinal that is not in Cantor normal form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    #[error("exponent must be an ordinal greater than 0")]
    ZeroExponent,
    #[error("coefficient must be an integer greater than 0")]
    ZeroCoefficient,
    /// The addend is at least `ω^exponent`, so the terms would not be strictly decreasing.
    #[error("addend {addend} must be smaller than w**({exponent})")]
    AddendTooLarge { exponent: Ordinal, addend: Ordinal },
    #[error("ordinals must be non-negative (got {0})")]
    Negative(i64),
}

/// Returned by [`subtract`](crate::subtract) when the minuend is not the larger ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot subtract {subtrahend} from {minuend}: the minuend must be strictly greater")]
pub struct SubtractError {
    pub minuend: Ordinal,
    pub subtrahend: Ordinal,
}
