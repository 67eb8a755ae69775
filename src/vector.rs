//! Fixed-length sequences of [`Scalar`]s, and the vector algebra used by the
//! inner-product argument and the range proof.

use crate::errors::ProofError;
use crate::scalar::Scalar;

/// An ordered sequence of `n` scalars. The length is immutable once
/// constructed and all elements lie in `[0, N)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vector(Vec<Scalar>);

impl Vector {
    /// Wrap a `Vec<Scalar>` as a `Vector` of that length.
    pub fn new(v: Vec<Scalar>) -> Vector {
        Vector(v)
    }

    /// The zero vector of length `n`.
    pub fn zero(n: usize) -> Vector {
        Vector(vec![Scalar::zero(); n])
    }

    /// The all-ones vector of length `n`.
    pub fn one(n: usize) -> Vector {
        Vector(vec![Scalar::one(); n])
    }

    /// The constant vector `[k; n]`.
    pub fn constant(k: &Scalar, n: usize) -> Vector {
        Vector(vec![k.clone(); n])
    }

    /// `PowerVector(y, n)`: `(y^0, y^1, ..., y^(n-1)) mod N`.
    pub fn powers(y: &Scalar, n: usize) -> Vector {
        let mut v = Vec::with_capacity(n);
        let mut acc = Scalar::one();
        for _ in 0..n {
            v.push(acc.clone());
            acc = acc.mul(y);
        }
        Vector(v)
    }

    /// The little-endian length-`n` bit decomposition of `v` as scalars `0`
    /// or `1`.
    ///
    /// Callers use this with no bounds check: an out-of-range `v` (`v >=
    /// 2^n`) yields a vector built from the low `n` bits of `v`, which in
    /// turn yields a range proof that the verifier will reject. The prover
    /// proceeds regardless; only the verifier rejects.
    pub fn bit_decompose(v: u64, n: usize) -> Vector {
        let mut bits = Vec::with_capacity(n);
        for i in 0..n {
            let bit = if i < 64 { (v >> i) & 1 } else { 0 };
            bits.push(Scalar::from_u64(bit));
        }
        Vector(bits)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Scalar] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Scalar> {
        self.0
    }

    fn check_len(&self, other: &Vector) -> Result<(), ProofError> {
        if self.len() != other.len() {
            Err(ProofError::LengthMismatch)
        } else {
            Ok(())
        }
    }

    /// Pairwise sum; fails with [`ProofError::LengthMismatch`] if lengths
    /// differ.
    pub fn add(&self, other: &Vector) -> Result<Vector, ProofError> {
        self.check_len(other)?;
        Ok(Vector(
            self.0.iter().zip(other.0.iter()).map(|(a, b)| a.add(b)).collect(),
        ))
    }

    /// Pairwise difference; fails with [`ProofError::LengthMismatch`] if
    /// lengths differ.
    pub fn sub(&self, other: &Vector) -> Result<Vector, ProofError> {
        self.check_len(other)?;
        Ok(Vector(
            self.0.iter().zip(other.0.iter()).map(|(a, b)| a.sub(b)).collect(),
        ))
    }

    /// Pairwise (Hadamard) product; fails with [`ProofError::LengthMismatch`]
    /// if lengths differ.
    pub fn hadamard(&self, other: &Vector) -> Result<Vector, ProofError> {
        self.check_len(other)?;
        Ok(Vector(
            self.0.iter().zip(other.0.iter()).map(|(a, b)| a.mul(b)).collect(),
        ))
    }

    /// Element-wise `k * v_i mod N`.
    pub fn scalar_mult(&self, k: &Scalar) -> Vector {
        Vector(self.0.iter().map(|v| v.mul(k)).collect())
    }

    /// `<u, v> = sum(u_i * v_i) mod N`; fails with
    /// [`ProofError::LengthMismatch`] if lengths differ.
    pub fn inner_product(&self, other: &Vector) -> Result<Scalar, ProofError> {
        self.check_len(other)?;
        let mut acc = Scalar::zero();
        for (a, b) in self.0.iter().zip(other.0.iter()) {
            acc = acc.add(&a.mul(b));
        }
        Ok(acc)
    }

    /// Split into `(left, right)` halves; fails with
    /// [`ProofError::OddLength`] if the length is odd.
    pub fn halves(&self) -> Result<(Vector, Vector), ProofError> {
        if self.0.len() % 2 != 0 {
            return Err(ProofError::OddLength);
        }
        let mid = self.0.len() / 2;
        Ok((
            Vector(self.0[..mid].to_vec()),
            Vector(self.0[mid..].to_vec()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_decompose_matches_value() {
        let v = Vector::bit_decompose(5, 8);
        let twon = Vector::powers(&Scalar::from_u64(2), 8);
        assert_eq!(v.inner_product(&twon).unwrap(), Scalar::from_u64(5));
    }

    #[test]
    fn hadamard_of_aL_aR_is_zero() {
        let n = 8;
        let a_l = Vector::bit_decompose(5, n);
        let a_r = a_l.sub(&Vector::one(n)).unwrap();
        assert_eq!(a_l.hadamard(&a_r).unwrap(), Vector::zero(n));
    }

    #[test]
    fn length_mismatch_is_reported() {
        let a = Vector::zero(4);
        let b = Vector::zero(5);
        assert_eq!(a.add(&b), Err(ProofError::LengthMismatch));
    }

    #[test]
    fn odd_length_cannot_be_halved() {
        let v = Vector::zero(5);
        assert_eq!(v.halves().unwrap_err(), ProofError::OddLength);
    }

    #[test]
    fn power_vector_matches_definition() {
        let y = Scalar::from_u64(3);
        let pv = Vector::powers(&y, 4);
        assert_eq!(
            pv.as_slice(),
            &[
                Scalar::from_u64(1),
                Scalar::from_u64(3),
                Scalar::from_u64(9),
                Scalar::from_u64(27)
            ]
        );
    }
}
