//! A pedagogical implementation of single-value Bulletproofs range proofs
//! (Bünz, Bootle, Boneh, Poelstra, Wuille, Maxwell — ePrint 2017/1066, §4.2)
//! over a secp256k1-compatible curve.
//!
//! A range proof lets a prover convince a verifier that a value `v` hidden
//! inside a Pedersen commitment `V` satisfies `0 <= v < 2^n`, without
//! revealing `v` or the commitment's blinding factor. Proof size grows with
//! `log2(n)` rather than `n`, via the inner-product argument in
//! [`inner_product_proof`].
//!
//! ```no_run
//! use bulletproofs::{range_proof_prove, range_proof_verify};
//!
//! let (v_commit, proof_bytes) = range_proof_prove(5, 8).unwrap();
//! assert!(range_proof_verify(&proof_bytes, &v_commit, 8));
//! ```

pub mod ec;
pub mod errors;
pub mod generators;
pub mod inner_product_proof;
pub mod pedersen;
pub mod range_proof;
pub mod scalar;
pub mod transcript;
pub mod vector;

pub use crate::ec::Point;
pub use crate::errors::ProofError;
pub use crate::generators::{nums, RangeProofGenerators};
pub use crate::inner_product_proof::InnerProductProof;
pub use crate::range_proof::RangeProof;
pub use crate::scalar::Scalar;
pub use crate::transcript::Transcript;
pub use crate::vector::Vector;

/// A validated bit-length, one of `{2, 4, 8, 16, 32, 64}`.
///
/// Constructing a proof or generator set for any other width is a
/// programming error, not a condition a verifier can recover from — so
/// validation happens once, here, at the boundary, rather than being
/// re-checked inside every internal routine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitLength(usize);

impl BitLength {
    pub fn new(n: usize) -> Result<BitLength, ProofError> {
        match n {
            2 | 4 | 8 | 16 | 32 | 64 => Ok(BitLength(n)),
            _ => Err(ProofError::BitlengthUnsupported),
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

/// Prove that `value < 2^bitlength`, returning the value commitment `V` and
/// the proof's wire encoding.
///
/// `bitlength` must be one of `{2, 4, 8, 16, 32, 64}`; anything else fails
/// with [`ProofError::BitlengthUnsupported`] before any cryptography runs.
pub fn range_proof_prove(value: u64, bitlength: usize) -> Result<(Point, Vec<u8>), ProofError> {
    let n = BitLength::new(bitlength)?;
    let (v_commit, proof) = range_proof::prove(value, n.get())?;
    Ok((v_commit, proof.to_bytes()?))
}

/// Verify a range proof's wire encoding against the value commitment `V`.
///
/// Returns `false` for every cryptographic or structural failure — a
/// malformed byte length, an undecodable point, a failed polynomial
/// identity, or a failed inner-product argument — rather than propagating an
/// error.
pub fn range_proof_verify(proof_bytes: &[u8], v_commit: &Point, bitlength: usize) -> bool {
    let n = match BitLength::new(bitlength) {
        Ok(n) => n,
        Err(_) => return false,
    };
    let proof = match RangeProof::from_bytes(proof_bytes, n.get()) {
        Ok(p) => p,
        Err(_) => return false,
    };
    range_proof::verify(v_commit, &proof, n.get())
}
