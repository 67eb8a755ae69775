//! The single-value range proof: proves a Pedersen-committed integer `v`
//! lies in `[0, 2^n)` without revealing `v` or its blinding.

use crate::ec::{ecadd, ecmult, Point};
use crate::errors::ProofError;
use crate::generators::RangeProofGenerators;
use crate::inner_product_proof::InnerProductProof;
use crate::pedersen::{ipc_commit, pc_commit, random_scalar, vpc_commit};
use crate::scalar::Scalar;
use crate::transcript::Transcript;
use crate::vector::Vector;

/// Bit-lengths the protocol supports. Anything else is
/// [`ProofError::BitlengthUnsupported`].
const SUPPORTED_BITLENGTHS: [usize; 6] = [2, 4, 8, 16, 32, 64];

fn validate_bitlength(n: usize) -> Result<(), ProofError> {
    if SUPPORTED_BITLENGTHS.contains(&n) {
        Ok(())
    } else {
        Err(ProofError::BitlengthUnsupported)
    }
}

/// `A, S, T1, T2, tau_x, mu, t` plus the embedded inner-product argument —
/// everything a verifier needs besides the value commitment `V` itself.
#[derive(Clone, Debug)]
pub struct RangeProof {
    pub a: Point,
    pub s: Point,
    pub t1: Point,
    pub t2: Point,
    pub tau_x: Scalar,
    pub mu: Scalar,
    pub t: Scalar,
    pub ipa: InnerProductProof,
}

impl RangeProof {
    /// Serialize per the fixed wire layout: `292 + 66*log2(n)` bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProofError> {
        let log_n = self.ipa.l_vec.len();
        let mut out = Vec::with_capacity(292 + 66 * log_n);
        out.extend_from_slice(&self.a.to_bytes()?);
        out.extend_from_slice(&self.s.to_bytes()?);
        out.extend_from_slice(&self.t1.to_bytes()?);
        out.extend_from_slice(&self.t2.to_bytes()?);
        out.extend_from_slice(&self.tau_x.to_bytes());
        out.extend_from_slice(&self.mu.to_bytes());
        out.extend_from_slice(&self.t.to_bytes());
        out.extend_from_slice(&self.ipa.a.to_bytes());
        out.extend_from_slice(&self.ipa.b.to_bytes());
        for l in &self.ipa.l_vec {
            out.extend_from_slice(&l.to_bytes()?);
        }
        for r in &self.ipa.r_vec {
            out.extend_from_slice(&r.to_bytes()?);
        }
        Ok(out)
    }

    /// Deserialize for a proof claimed to be over bit-length `n`.
    ///
    /// Fails with [`ProofError::WrongLength`] if `bytes.len()` does not
    /// match `292 + 66*log2(n)` exactly, and with [`ProofError::InvalidPoint`]
    /// if any embedded point fails to decode.
    pub fn from_bytes(bytes: &[u8], n: usize) -> Result<RangeProof, ProofError> {
        let log_n = n.trailing_zeros() as usize;
        let expected_len = 292 + 66 * log_n;
        if bytes.len() != expected_len {
            return Err(ProofError::WrongLength);
        }

        let point = |off: usize| -> Result<Point, ProofError> {
            let mut buf = [0u8; 33];
            buf.copy_from_slice(&bytes[off..off + 33]);
            Point::from_bytes(&buf)
        };
        let scalar = |off: usize| -> Scalar {
            let mut buf = [0u8; 32];
            buf.copy_from_slice(&bytes[off..off + 32]);
            Scalar::from_bytes_mod_order(&buf)
        };

        let a = point(0)?;
        let s = point(33)?;
        let t1 = point(66)?;
        let t2 = point(99)?;
        let tau_x = scalar(132);
        let mu = scalar(164);
        let t = scalar(196);
        let ipa_a = scalar(228);
        let ipa_b = scalar(260);

        let mut l_vec = Vec::with_capacity(log_n);
        let mut r_vec = Vec::with_capacity(log_n);
        let mut off = 292;
        for _ in 0..log_n {
            l_vec.push(point(off)?);
            off += 33;
        }
        for _ in 0..log_n {
            r_vec.push(point(off)?);
            off += 33;
        }

        Ok(RangeProof {
            a,
            s,
            t1,
            t2,
            tau_x,
            mu,
            t,
            ipa: InnerProductProof {
                l_vec,
                r_vec,
                a: ipa_a,
                b: ipa_b,
            },
        })
    }
}

/// `H'_i = y^{-i} * H_i` for `i in [0, n)`.
fn shifted_h_generators(y: &Scalar, h: &[Point]) -> Result<Vec<Point>, ProofError> {
    let y_inv = y.invert()?;
    Ok(h.iter()
        .enumerate()
        .map(|(i, hi)| ecmult(&y_inv.pow(i as u64), hi))
        .collect())
}

/// Prove that `v < 2^n`, returning the value commitment `V` and the proof.
///
/// There is no precondition check on `v` here. If `v >= 2^n`, the prover
/// still runs to completion and produces a proof — it will simply fail to
/// verify.
pub fn prove(v: u64, n: usize) -> Result<(Point, RangeProof), ProofError> {
    validate_bitlength(n)?;
    let gens = RangeProofGenerators::new(n);

    let gamma = random_scalar();
    let v_scalar = Scalar::from_u64(v);
    let v_commit = pc_commit(&v_scalar, &gamma);

    let a_l = Vector::bit_decompose(v, n);
    let a_r = a_l.sub(&Vector::one(n))?;

    let alpha = random_scalar();
    let a_point = vpc_commit(&a_l, &a_r, &alpha, &gens.h_blind, &gens.g, &gens.h);

    let s_l = Vector::new((0..n).map(|_| random_scalar()).collect());
    let s_r = Vector::new((0..n).map(|_| random_scalar()).collect());
    let rho = random_scalar();
    let s_point = vpc_commit(&s_l, &s_r, &rho, &gens.h_blind, &gens.g, &gens.h);

    let mut ts = Transcript::new();
    let yz = ts.challenge(&[&v_commit, &a_point, &s_point], 2);
    let (y, z) = (yz[0].clone(), yz[1].clone());
    let z2 = z.mul(&z);

    let y_n = Vector::powers(&y, n);
    let two_n = Vector::powers(&Scalar::from_u64(2), n);

    let l0 = a_l.sub(&Vector::constant(&z, n))?;
    let l1 = s_l;
    let r0 = y_n
        .hadamard(&a_r.add(&Vector::constant(&z, n))?)?
        .add(&two_n.scalar_mult(&z2))?;
    let r1 = y_n.hadamard(&s_r)?;

    let t1 = l0.inner_product(&r1)?.add(&l1.inner_product(&r0)?);
    let t2 = l1.inner_product(&r1)?;

    let tau1 = random_scalar();
    let tau2 = random_scalar();
    let t1_point = pc_commit(&t1, &tau1);
    let t2_point = pc_commit(&t2, &tau2);

    let x = ts.challenge(&[&t1_point, &t2_point], 1)[0].clone();

    let lx = l0.add(&l1.scalar_mult(&x))?;
    let rx = r0.add(&r1.scalar_mult(&x))?;
    let t = lx.inner_product(&rx)?;
    let tau_x = tau1.mul(&x).add(&tau2.mul(&x.mul(&x))).add(&z2.mul(&gamma));
    let mu = alpha.add(&rho.mul(&x));

    let h_prime = shifted_h_generators(&y, &gens.h)?;

    let u = ts.challenge(&[&tau_x, &mu, &t], 1)[0].clone();
    let u_point = ecmult(&u, &Point::generator());

    let p_initial = ipc_commit(&lx, &rx, &u_point, &gens.g, &h_prime);
    let ipa = InnerProductProof::create(
        &mut ts,
        p_initial,
        &u_point,
        gens.g.clone(),
        h_prime,
        lx.into_vec(),
        rx.into_vec(),
    )?;

    Ok((
        v_commit,
        RangeProof {
            a: a_point,
            s: s_point,
            t1: t1_point,
            t2: t2_point,
            tau_x,
            mu,
            t,
            ipa,
        },
    ))
}

/// Verify a range proof against the value commitment `v_commit`, for public
/// bit-length `n`.
///
/// Never panics and never propagates an error: every cryptographic failure
/// mode (a failed polynomial identity, a failed inner-product argument, an
/// unsupported bit-length, a non-invertible challenge) collapses to `false`.
pub fn verify(v_commit: &Point, proof: &RangeProof, n: usize) -> bool {
    verify_result(v_commit, proof, n).is_ok()
}

fn verify_result(v_commit: &Point, proof: &RangeProof, n: usize) -> Result<(), ProofError> {
    validate_bitlength(n)?;
    let gens = RangeProofGenerators::new(n);

    let mut ts = Transcript::new();
    let yz = ts.challenge(&[v_commit, &proof.a, &proof.s], 2);
    let (y, z) = (yz[0].clone(), yz[1].clone());
    let x = ts.challenge(&[&proof.t1, &proof.t2], 1)[0].clone();
    let u = ts.challenge(&[&proof.tau_x, &proof.mu, &proof.t], 1)[0].clone();
    let u_point = ecmult(&u, &Point::generator());

    let h_prime = shifted_h_generators(&y, &gens.h)?;

    let one_n = Vector::one(n);
    let y_n = Vector::powers(&y, n);
    let two_n = Vector::powers(&Scalar::from_u64(2), n);
    let z2 = z.mul(&z);
    let z3 = z2.mul(&z);

    let dot_1_y = one_n.inner_product(&y_n)?;
    let dot_1_2 = one_n.inner_product(&two_n)?;
    let delta = z.sub(&z2).mul(&dot_1_y).sub(&z3.mul(&dot_1_2));

    // eq. 61: t*G + tau_x*H == delta(y,z)*G + z^2*V + x*T1 + x^2*T2
    let g = Point::generator();
    let lhs = ecadd(&[ecmult(&proof.t, &g), ecmult(&proof.tau_x, &gens.h_blind)]);
    let rhs = ecadd(&[
        ecmult(&delta, &g),
        ecmult(&z2, v_commit),
        ecmult(&x, &proof.t1),
        ecmult(&x.mul(&x), &proof.t2),
    ]);
    if lhs != rhs {
        return Err(ProofError::Eq61Failed);
    }

    // eq. 62: reconstruct P, then strip the mu*H_blind blinding term.
    let mut terms = Vec::with_capacity(2 + 2 * n + 1);
    terms.push(proof.a.clone());
    terms.push(ecmult(&x, &proof.s));
    let neg_z = z.negate();
    for gi in &gens.g {
        terms.push(ecmult(&neg_z, gi));
    }
    for i in 0..n {
        let coeff = z.mul(&y_n.as_slice()[i]).add(&z2.mul(&two_n.as_slice()[i]));
        terms.push(ecmult(&coeff, &h_prime[i]));
    }
    terms.push(ecmult(&proof.t, &u_point));
    let p = ecadd(&terms);
    let p_prime = ecadd(&[p, ecmult(&proof.mu.negate(), &gens.h_blind)]);

    if proof.ipa.verify(&mut ts, p_prime, &u_point, gens.g.clone(), h_prime) {
        Ok(())
    } else {
        Err(ProofError::IPAFailed)
    }
}
