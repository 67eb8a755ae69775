//! Typed wrappers around the external curve library.
//!
//! This is the only module that talks to `secp256k1` directly; every other
//! module works in terms of [`Point`] and [`Scalar`](crate::scalar::Scalar).
//! The two operations exposed here — [`ecmult`] and [`ecadd`] — are, per the
//! design, the only curve operations the rest of the crate needs.

use once_cell::sync::Lazy;
use secp256k1::{PublicKey, Secp256k1};

use crate::errors::ProofError;
use crate::scalar::Scalar;

static SECP: Lazy<Secp256k1<secp256k1::All>> = Lazy::new(Secp256k1::new);

/// An element of the prime-order curve group, always held in 33-byte
/// compressed encoding. The infinity point is represented as a distinguished
/// absent value (`None`) and is never a valid component of a proof — callers
/// that attempt to serialize an absent point get [`ProofError::InvalidPoint`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Point(Option<PublicKey>);

impl Point {
    /// The distinguished absent value (point at infinity).
    pub fn infinity() -> Point {
        Point(None)
    }

    /// The curve's standard base point `G`.
    pub fn generator() -> Point {
        let one = secp256k1::SecretKey::from_slice(&one_scalar_bytes()).expect("1 < N");
        Point(Some(PublicKey::from_secret_key(&SECP, &one)))
    }

    /// Decode a 33-byte compressed point: a leading parity byte `0x02` or
    /// `0x03` followed by 32 bytes of x-coordinate.
    ///
    /// Fails with [`ProofError::InvalidPoint`] if the bytes are not a valid
    /// compressed-point encoding (including an off-curve x-coordinate).
    pub fn from_bytes(bytes: &[u8; 33]) -> Result<Point, ProofError> {
        PublicKey::from_slice(bytes)
            .map(|pk| Point(Some(pk)))
            .map_err(|_| ProofError::InvalidPoint)
    }

    /// Encode as 33 bytes, leading parity byte followed by the x-coordinate.
    ///
    /// Fails with [`ProofError::InvalidPoint`] if called on the absent
    /// (infinity) value, which is never a valid component of a proof.
    pub fn to_bytes(&self) -> Result<[u8; 33], ProofError> {
        self.0.map(|pk| pk.serialize()).ok_or(ProofError::InvalidPoint)
    }

    pub fn is_infinity(&self) -> bool {
        self.0.is_none()
    }
}

fn one_scalar_bytes() -> [u8; 32] {
    let mut b = [0u8; 32];
    b[31] = 1;
    b
}

/// `ecmult(k, P)`: if `k` is congruent to zero mod `N`, returns the absent
/// point; otherwise returns `k * P` as a compressed point.
pub fn ecmult(k: &Scalar, p: &Point) -> Point {
    if k.is_zero() {
        return Point::infinity();
    }
    let pk = match p.0 {
        None => return Point::infinity(),
        Some(pk) => pk,
    };
    let tweak =
        secp256k1::Scalar::from_be_bytes(k.to_bytes()).expect("scalar already reduced mod N");
    let result = pk.mul_tweak(&SECP, &tweak).expect("tweak is nonzero mod N");
    Point(Some(result))
}

/// `ecadd(points)`: filters out absent points, then sums what remains.
///
/// If the filtered list has exactly one point it is returned directly. An
/// empty filtered list is an invariant violation (callers never sum an
/// all-infinity list in this protocol) and panics.
pub fn ecadd(points: &[Point]) -> Point {
    let present: Vec<PublicKey> = points.iter().filter_map(|p| p.0).collect();
    match present.len() {
        0 => panic!("ecadd: invariant violation, no non-infinity points to sum"),
        1 => Point(Some(present[0])),
        _ => {
            let refs: Vec<&PublicKey> = present.iter().collect();
            let summed = PublicKey::combine_keys(&refs).expect("sum of distinct curve points");
            Point(Some(summed))
        }
    }
}
