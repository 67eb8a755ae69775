//! The Fiat–Shamir transcript.
//!
//! Unlike the teacher crate's `merlin::Transcript` (a STROBE-based sponge
//! with labeled domain separation), this protocol pins down an exact SHA-256
//! chaining construction so that two independent implementations derive
//! identical challenges byte-for-byte. The type is still threaded through
//! prover and verifier the same way `merlin`'s is: an owned, mutable handle
//! whose lifetime matches one proof/verification run.

use sha2::{Digest, Sha256};

use crate::ec::Point;
use crate::scalar::Scalar;

/// Anything that can be absorbed into the transcript, via its canonical
/// fixed-size byte encoding (33 bytes for a point, 32 for a scalar).
pub trait Absorb {
    fn canonical_bytes(&self) -> Vec<u8>;
}

impl Absorb for Point {
    fn canonical_bytes(&self) -> Vec<u8> {
        self.to_bytes()
            .expect("a point appended to the transcript is never infinity")
            .to_vec()
    }
}

impl Absorb for Scalar {
    fn canonical_bytes(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }
}

/// The Fiat–Shamir state: the empty byte string at the start of a protocol
/// run, a 32-byte digest thereafter.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    state: Vec<u8>,
}

impl Transcript {
    /// A fresh transcript with empty initial state, as required at the
    /// start of every proof generation or verification run.
    pub fn new() -> Transcript {
        Transcript { state: Vec::new() }
    }

    /// Draw `n_ret` challenge scalars from the values appended so far plus
    /// `values` (in the given order), and advance the transcript state.
    ///
    /// `msg = fs || concat(canonical_bytes(v_i))`, `h_0 = SHA256(msg)`, each
    /// emitted scalar is `h_j` reduced mod `N` (the reduction happens here
    /// since the emitted scalar's only use is arithmetic), `h_{j+1} =
    /// SHA256(h_j)`, and `fs := h_{n_ret}`.
    pub fn challenge(&mut self, values: &[&dyn Absorb], n_ret: usize) -> Vec<Scalar> {
        let mut msg = self.state.clone();
        for v in values {
            msg.extend_from_slice(&v.canonical_bytes());
        }
        let mut h: [u8; 32] = Sha256::digest(&msg).into();

        let mut out = Vec::with_capacity(n_ret);
        for _ in 0..n_ret {
            out.push(Scalar::from_bytes_mod_order(&h));
            h = Sha256::digest(h).into();
        }
        self.state = h.to_vec();
        out
    }
}
