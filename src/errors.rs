//! Errors related to proving and verifying proofs.

/// Represents an error in proof creation, verification, or parsing.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ProofError {
    /// Two vector operands of a vector-algebra operation had different
    /// lengths.
    #[error("vector operands have mismatched lengths")]
    LengthMismatch,

    /// A vector was split into halves but its length was odd.
    #[error("vector has odd length and cannot be halved")]
    OddLength,

    /// A scalar had no modular inverse, or a transcript draw produced a
    /// zero challenge.
    #[error("scalar is not invertible mod N")]
    InvalidScalar,

    /// A compressed point failed to decode (off-curve x-coordinate, wrong
    /// length, or bad parity byte).
    #[error("point failed to decode")]
    InvalidPoint,

    /// The requested bit-length is not one of `{2,4,8,16,32,64}`.
    #[error("bitlength must be one of 2, 4, 8, 16, 32, 64")]
    BitlengthUnsupported,

    /// The range-proof verification equation (eq. 61 of the paper) did not
    /// hold.
    #[error("range proof failed the polynomial identity check")]
    Eq61Failed,

    /// The inner-product argument embedded in a range proof did not verify.
    #[error("inner-product argument failed to verify")]
    IPAFailed,

    /// The serialized proof did not have the expected length for the
    /// claimed bit-length.
    #[error("malformed proof: unexpected byte length")]
    WrongLength,
}
