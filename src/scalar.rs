//! Modular arithmetic in `Z_N`, where `N` is the prime order of the curve's
//! scalar field.
//!
//! [`Scalar`] is the integer-form representation used for arithmetic; the
//! 32-byte big-endian encoding used for hashing, transport and EC scalar
//! multiplication lives on the same type via [`Scalar::to_bytes`] /
//! [`Scalar::from_bytes_mod_order`].

use num_bigint::BigUint;
use num_traits::{One, Zero};
use once_cell::sync::Lazy;
use subtle::ConstantTimeEq;

use crate::errors::ProofError;

/// The prime order of the secp256k1 scalar field, as supplied by the
/// external curve library (`secp256k1::constants::CURVE_ORDER`).
static ORDER: Lazy<BigUint> =
    Lazy::new(|| BigUint::from_bytes_be(&secp256k1::constants::CURVE_ORDER));

/// An integer in `[0, N)`.
///
/// Two representations are used throughout the crate: this integer form for
/// arithmetic, and a fixed 32-byte big-endian encoding for hashing,
/// transport, and EC scalar multiplication. Conversion between the two is
/// total and bijective on `[0, N)`.
#[derive(Clone, Debug)]
pub struct Scalar(BigUint);

// Scalars hold secret material (blinding factors, challenge responses), so
// equality is compared in constant time over the canonical encoding rather
// than via `BigUint`'s own (length- and value-dependent) comparison.
impl PartialEq for Scalar {
    fn eq(&self, other: &Scalar) -> bool {
        bool::from(self.to_bytes()[..].ct_eq(&other.to_bytes()[..]))
    }
}

impl Eq for Scalar {}

impl Scalar {
    /// The additive identity.
    pub fn zero() -> Scalar {
        Scalar(BigUint::zero())
    }

    /// The multiplicative identity.
    pub fn one() -> Scalar {
        Scalar(BigUint::one())
    }

    /// Build a scalar from a `u64`, reducing mod `N` (a no-op, since `N` is
    /// a 256-bit prime).
    pub fn from_u64(v: u64) -> Scalar {
        Scalar(BigUint::from(v))
    }

    /// Decode a 32-byte big-endian string and reduce the result mod `N`.
    ///
    /// Challenges are drawn from a hash digest as a raw 256-bit integer and
    /// only reduced mod `N` here, at the point they are first used
    /// arithmetically.
    pub fn from_bytes_mod_order(bytes: &[u8; 32]) -> Scalar {
        Scalar(BigUint::from_bytes_be(bytes) % &*ORDER)
    }

    /// Encode as a 32-byte big-endian string, zero-padded. The integer is
    /// assumed already reduced mod `N`.
    pub fn to_bytes(&self) -> [u8; 32] {
        let be = self.0.to_bytes_be();
        let mut out = [0u8; 32];
        out[32 - be.len()..].copy_from_slice(&be);
        out
    }

    /// `a + b mod N`.
    pub fn add(&self, other: &Scalar) -> Scalar {
        Scalar((&self.0 + &other.0) % &*ORDER)
    }

    /// `a - b mod N`.
    pub fn sub(&self, other: &Scalar) -> Scalar {
        Scalar((&*ORDER + &self.0 - &other.0) % &*ORDER)
    }

    /// `a * b mod N`.
    pub fn mul(&self, other: &Scalar) -> Scalar {
        Scalar((&self.0 * &other.0) % &*ORDER)
    }

    /// Additive inverse, `-a mod N`.
    pub fn negate(&self) -> Scalar {
        if self.0.is_zero() {
            Scalar::zero()
        } else {
            Scalar(&*ORDER - &self.0)
        }
    }

    /// Whether this scalar is congruent to zero mod `N`.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// `self^k mod N`.
    pub fn pow(&self, mut k: u64) -> Scalar {
        let mut result = Scalar::one();
        let mut base = self.clone();
        while k > 0 {
            if k & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            k >>= 1;
        }
        result
    }

    /// The modular inverse `x` with `a * x == 1 (mod N)`.
    ///
    /// Fails with [`ProofError::InvalidScalar`] if `a` is congruent to zero
    /// mod `N` (the only non-invertible residue, since `N` is prime).
    pub fn invert(&self) -> Result<Scalar, ProofError> {
        modinv(&self.0, &ORDER).map(Scalar)
    }
}

/// `modinv(a, N)`: the unique `x in [1, N)` with `a * x == 1 (mod N)`.
///
/// Fails with [`ProofError::InvalidScalar`] if `a == 0 (mod N)` (or more
/// generally `gcd(a, N) != 1`, which cannot occur for nonzero `a` since `N`
/// is prime).
pub fn modinv(a: &BigUint, n: &BigUint) -> Result<BigUint, ProofError> {
    if a.is_zero() {
        return Err(ProofError::InvalidScalar);
    }
    let (g, x, _y) = extended_gcd(&a.clone().into(), &n.clone().into());
    if g != num_bigint::BigInt::one() {
        return Err(ProofError::InvalidScalar);
    }
    let n_i = num_bigint::BigInt::from(n.clone());
    let x = ((x % &n_i) + &n_i) % &n_i;
    Ok(x.to_biguint().expect("reduced mod n is non-negative"))
}

/// Standard recursive extended Euclidean algorithm over signed integers,
/// returning `(gcd, x, y)` with `a*x + b*y == gcd`.
fn extended_gcd(
    a: &num_bigint::BigInt,
    b: &num_bigint::BigInt,
) -> (num_bigint::BigInt, num_bigint::BigInt, num_bigint::BigInt) {
    if a.is_zero() {
        (b.clone(), num_bigint::BigInt::zero(), num_bigint::BigInt::one())
    } else {
        let (g, x, y) = extended_gcd(&(b % a), a);
        (g, y - (b / a) * &x, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modinv_round_trips() {
        for a in 1u64..50 {
            let s = Scalar::from_u64(a);
            let inv = s.invert().unwrap();
            assert_eq!(s.mul(&inv), Scalar::one());
        }
    }

    #[test]
    fn modinv_rejects_zero() {
        assert_eq!(Scalar::zero().invert(), Err(ProofError::InvalidScalar));
    }

    #[test]
    fn encode_decode_round_trip() {
        let s = Scalar::from_u64(0xdead_beef);
        let bytes = s.to_bytes();
        assert_eq!(Scalar::from_bytes_mod_order(&bytes), s);
    }

    #[test]
    fn pow_matches_repeated_mul() {
        let base = Scalar::from_u64(7);
        let mut acc = Scalar::one();
        for _ in 0..10 {
            acc = acc.mul(&base);
        }
        assert_eq!(base.pow(10), acc);
    }
}
