//! The recursive inner-product argument, expressed iteratively.
//!
//! The protocol is stated recursively in the design (and in the original
//! proof-of-concept this was distilled from), but the recursion depth is at
//! most 6 (for `n = 64`), so — per the design notes — an iterative
//! implementation is used here instead; it is equivalent and avoids one
//! stack frame per fold.

use crate::ec::{ecadd, ecmult, Point};
use crate::errors::ProofError;
use crate::pedersen::ipc_commit;
use crate::scalar::Scalar;
use crate::transcript::Transcript;
use crate::vector::Vector;

/// A proof that a committed pair of vectors `(a*, b*)` has a claimed inner
/// product, of size `2` scalars plus `2 * log2(n)` points.
#[derive(Clone, Debug)]
pub struct InnerProductProof {
    pub l_vec: Vec<Point>,
    pub r_vec: Vec<Point>,
    pub a: Scalar,
    pub b: Scalar,
}

impl InnerProductProof {
    /// Create an inner-product proof for secret vectors `a*, b*` of length
    /// `n` (a power of two) against the public commitment `p = <a,b>*U +
    /// sum(a_i*G_i) + sum(b_i*H_i)`.
    ///
    /// Fails with [`ProofError::LengthMismatch`] if the input vector/
    /// generator lengths disagree, with [`ProofError::OddLength`] if `n` is
    /// not a power of two, and with [`ProofError::InvalidScalar`] in the
    /// vanishingly unlikely event a drawn challenge is zero.
    pub fn create(
        transcript: &mut Transcript,
        mut p: Point,
        u: &Point,
        mut g: Vec<Point>,
        mut h: Vec<Point>,
        mut a: Vec<Scalar>,
        mut b: Vec<Scalar>,
    ) -> Result<InnerProductProof, ProofError> {
        let mut n = a.len();
        if n != b.len() || n != g.len() || n != h.len() {
            return Err(ProofError::LengthMismatch);
        }

        let mut l_vec = Vec::new();
        let mut r_vec = Vec::new();

        while n > 1 {
            if n % 2 != 0 {
                return Err(ProofError::OddLength);
            }
            let half = n / 2;

            let a_l = Vector::new(a[..half].to_vec());
            let a_r = Vector::new(a[half..].to_vec());
            let b_l = Vector::new(b[..half].to_vec());
            let b_r = Vector::new(b[half..].to_vec());
            let g_l = &g[..half];
            let g_r = &g[half..];
            let h_l = &h[..half];
            let h_r = &h[half..];

            // L_j = IPC(aL, bR; G=GR, H=HL, U); R_j = IPC(aR, bL; G=GL, H=HR, U)
            let l = ipc_commit(&a_l, &b_r, u, g_r, h_l);
            let r = ipc_commit(&a_r, &b_l, u, g_l, h_r);

            let x = transcript.challenge(&[&l, &r, &p], 1)[0].clone();
            if x.is_zero() {
                return Err(ProofError::InvalidScalar);
            }
            let x_inv = x.invert()?;
            let x_sq = x.mul(&x);
            let x_inv_sq = x_inv.mul(&x_inv);

            let mut new_g = Vec::with_capacity(half);
            let mut new_h = Vec::with_capacity(half);
            let mut new_a = Vec::with_capacity(half);
            let mut new_b = Vec::with_capacity(half);
            for i in 0..half {
                new_g.push(ecadd(&[ecmult(&x_inv, &g_l[i]), ecmult(&x, &g_r[i])]));
                new_h.push(ecadd(&[ecmult(&x, &h_l[i]), ecmult(&x_inv, &h_r[i])]));
                new_a.push(x.mul(&a_l.as_slice()[i]).add(&x_inv.mul(&a_r.as_slice()[i])));
                new_b.push(x_inv.mul(&b_l.as_slice()[i]).add(&x.mul(&b_r.as_slice()[i])));
            }
            p = ecadd(&[p, ecmult(&x_sq, &l), ecmult(&x_inv_sq, &r)]);

            l_vec.push(l);
            r_vec.push(r);
            g = new_g;
            h = new_h;
            a = new_a;
            b = new_b;
            n = half;
        }

        Ok(InnerProductProof {
            l_vec,
            r_vec,
            a: a[0].clone(),
            b: b[0].clone(),
        })
    }

    /// Verify this proof against the public commitment `p` and generators.
    ///
    /// Any length mismatch, a proof whose `L*`/`R*` lists don't match the
    /// expected `log2(n)` rounds, or a zero challenge, makes this return
    /// `false` rather than panicking or propagating an error.
    pub fn verify(
        &self,
        transcript: &mut Transcript,
        mut p: Point,
        u: &Point,
        mut g: Vec<Point>,
        mut h: Vec<Point>,
    ) -> bool {
        if g.is_empty() || g.len() != h.len() {
            return false;
        }
        if self.l_vec.len() != self.r_vec.len() {
            return false;
        }

        let mut n = g.len();
        let mut round = 0usize;
        while n > 1 {
            if n % 2 != 0 {
                return false;
            }
            let (l, r) = match (self.l_vec.get(round), self.r_vec.get(round)) {
                (Some(l), Some(r)) => (l.clone(), r.clone()),
                _ => return false,
            };

            let x = transcript.challenge(&[&l, &r, &p], 1)[0].clone();
            if x.is_zero() {
                return false;
            }
            let x_inv = match x.invert() {
                Ok(v) => v,
                Err(_) => return false,
            };
            let x_sq = x.mul(&x);
            let x_inv_sq = x_inv.mul(&x_inv);

            let half = n / 2;
            let (g_l, g_r) = g.split_at(half);
            let (h_l, h_r) = h.split_at(half);
            let mut new_g = Vec::with_capacity(half);
            let mut new_h = Vec::with_capacity(half);
            for i in 0..half {
                new_g.push(ecadd(&[ecmult(&x_inv, &g_l[i]), ecmult(&x, &g_r[i])]));
                new_h.push(ecadd(&[ecmult(&x, &h_l[i]), ecmult(&x_inv, &h_r[i])]));
            }
            p = ecadd(&[p, ecmult(&x_sq, &l), ecmult(&x_inv_sq, &r)]);

            g = new_g;
            h = new_h;
            n = half;
            round += 1;
        }

        if round != self.l_vec.len() {
            return false;
        }

        let p_prime = ecadd(&[
            ecmult(&self.a, &g[0]),
            ecmult(&self.b, &h[0]),
            ecmult(&self.a.mul(&self.b), u),
        ]);
        p == p_prime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::nums;

    fn gens(n: usize) -> (Point, Vec<Point>, Vec<Point>) {
        (
            nums(0),
            (0..n).map(|i| nums((i + 1) as u8)).collect(),
            (0..n).map(|i| nums((n + i + 1) as u8)).collect(),
        )
    }

    #[test]
    fn round_trip_for_direct_vectors() {
        // a = (1..8), b = (9..16), <a,b> = 492.
        let n = 8;
        let (u, g, h) = gens(n);
        let a: Vec<Scalar> = (1..=8u64).map(Scalar::from_u64).collect();
        let b: Vec<Scalar> = (9..=16u64).map(Scalar::from_u64).collect();
        let av = Vector::new(a.clone());
        let bv = Vector::new(b.clone());
        assert_eq!(av.inner_product(&bv).unwrap(), Scalar::from_u64(492));

        let p = ipc_commit(&av, &bv, &u, &g, &h);

        let mut prover_ts = Transcript::new();
        let proof =
            InnerProductProof::create(&mut prover_ts, p.clone(), &u, g.clone(), h.clone(), a, b)
                .unwrap();

        let mut verifier_ts = Transcript::new();
        assert!(proof.verify(&mut verifier_ts, p, &u, g, h));
    }

    #[test]
    fn tampered_proof_fails() {
        let n = 4;
        let (u, g, h) = gens(n);
        let a: Vec<Scalar> = (1..=4u64).map(Scalar::from_u64).collect();
        let b: Vec<Scalar> = (5..=8u64).map(Scalar::from_u64).collect();
        let av = Vector::new(a.clone());
        let bv = Vector::new(b.clone());
        let p = ipc_commit(&av, &bv, &u, &g, &h);

        let mut prover_ts = Transcript::new();
        let mut proof =
            InnerProductProof::create(&mut prover_ts, p.clone(), &u, g.clone(), h.clone(), a, b)
                .unwrap();
        proof.a = proof.a.add(&Scalar::one());

        let mut verifier_ts = Transcript::new();
        assert!(!proof.verify(&mut verifier_ts, p, &u, g, h));
    }

    #[test]
    fn every_power_of_two_up_to_64_round_trips() {
        let mut n = 1;
        while n <= 64 {
            let (u, g, h) = gens(n);
            let a: Vec<Scalar> = (0..n as u64).map(Scalar::from_u64).collect();
            let b: Vec<Scalar> = (0..n as u64).map(|i| Scalar::from_u64(i + 100)).collect();
            let av = Vector::new(a.clone());
            let bv = Vector::new(b.clone());
            let p = ipc_commit(&av, &bv, &u, &g, &h);

            let mut prover_ts = Transcript::new();
            let proof = InnerProductProof::create(
                &mut prover_ts,
                p.clone(),
                &u,
                g.clone(),
                h.clone(),
                a,
                b,
            )
            .unwrap();

            let mut verifier_ts = Transcript::new();
            assert!(proof.verify(&mut verifier_ts, p, &u, g, h), "failed at n={n}");
            n *= 2;
        }
    }
}
