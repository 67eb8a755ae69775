//! Deterministic "nothing up my sleeve" (NUMS) generator points.
//!
//! `nums(i)` is pure and memoized: two invocations — in this process or in
//! any other conformant implementation — return the identical 33-byte
//! encoding.

use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};

use crate::ec::Point;

static NUMS_CACHE: Lazy<Mutex<HashMap<u8, Point>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// Derive (or fetch from cache) the NUMS generator at `index`.
///
/// Algorithm (normative — two implementations must agree on `nums(i)` for
/// every `i`):
///
/// 1. For `G_enc` in `{compressed G, uncompressed G}` (compressed first):
/// 2.   for `counter` in `0..256`:
/// 3.     `seed = G_enc || byte(index) || byte(counter)`
/// 4.     `h = SHA-256(seed)`
/// 5.     attempt to decode `0x02 || h` as a compressed point
/// 6.     if decoding succeeds, return that point
///
/// Parity byte `0x02` (never `0x03`) and the iteration order are both
/// normative. Panics if all 512 trials fail, which is vanishingly unlikely
/// to ever occur (per the design, "assert unreachable").
pub fn nums(index: u8) -> Point {
    if let Some(p) = NUMS_CACHE.lock().unwrap().get(&index) {
        return p.clone();
    }
    let g = Point::generator();
    let g_compressed = g.to_bytes().expect("G is never infinity");
    let g_uncompressed = uncompressed_generator_bytes();

    for g_enc in [&g_compressed[..], &g_uncompressed[..]] {
        for counter in 0u16..256 {
            let mut seed = Vec::with_capacity(g_enc.len() + 2);
            seed.extend_from_slice(g_enc);
            seed.push(index);
            seed.push(counter as u8);
            let h = Sha256::digest(&seed);

            let mut candidate = [0u8; 33];
            candidate[0] = 0x02;
            candidate[1..].copy_from_slice(&h);

            if let Ok(point) = Point::from_bytes(&candidate) {
                log::trace!("nums({index}): derived after {counter} trials");
                NUMS_CACHE.lock().unwrap().insert(index, point.clone());
                return point;
            }
        }
    }
    unreachable!("nums({}): no valid curve point found in 512 trials", index);
}

fn uncompressed_generator_bytes() -> [u8; 65] {
    // secp256k1's PublicKey has no direct uncompressed accessor on our
    // Point wrapper (the rest of the crate never needs it), so we go
    // through the underlying library once here.
    let g = Point::generator();
    let compressed = g.to_bytes().expect("G is never infinity");
    let pk = secp256k1::PublicKey::from_slice(&compressed).expect("G round-trips");
    pk.serialize_uncompressed()
}

/// The generator set needed by a single range proof of bit-length `n`:
/// `U = nums(0)`, `G_i = nums(i+1)`, `H_i = nums(n+i+1)` for `i in [0,n)`,
/// and the dedicated blinding generator `H_blind = nums(255)`.
pub struct RangeProofGenerators {
    pub u: Point,
    pub g: Vec<Point>,
    pub h: Vec<Point>,
    pub h_blind: Point,
}

impl RangeProofGenerators {
    pub fn new(n: usize) -> RangeProofGenerators {
        RangeProofGenerators {
            u: nums(0),
            g: (0..n).map(|i| nums((i + 1) as u8)).collect(),
            h: (0..n).map(|i| nums((n + i + 1) as u8)).collect(),
            h_blind: nums(255),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nums_is_deterministic() {
        assert_eq!(nums(0), nums(0));
        assert_eq!(nums(255), nums(255));
    }

    #[test]
    fn nums_indices_are_distinct() {
        assert_ne!(nums(1), nums(2));
    }

    #[test]
    fn full_generator_set_has_no_duplicates() {
        let gens = RangeProofGenerators::new(64);
        let mut all = vec![gens.u.clone(), gens.h_blind.clone()];
        all.extend(gens.g.iter().cloned());
        all.extend(gens.h.iter().cloned());
        for i in 0..all.len() {
            for j in (i + 1)..all.len() {
                assert_ne!(all[i], all[j]);
            }
        }
    }
}
