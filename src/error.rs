use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlasError {
    #[error("stride for {arg} must be at least 1")]
    ZeroStride { arg: &'static str },
    #[error("element count {n} does not fit the BLAS integer type")]
    CountOutOfRange { n: usize },
    #[error("stride {inc} for {arg} does not fit the BLAS integer type")]
    StrideOutOfRange { arg: &'static str, inc: usize },
    #[error("length of {arg} is too short: {len}, need at least {required}")]
    TooShort { arg: &'static str, len: usize, required: usize },
    #[error("{n} elements at stride {inc} for {arg} exceed the addressable length")]
    LengthOverflow { arg: &'static str, n: usize, inc: usize },
    #[error("length mismatch: x has {x} elements, y has {y}")]
    LengthMismatch { x: usize, y: usize },
}
