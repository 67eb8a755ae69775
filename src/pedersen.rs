//! Pedersen and vector-Pedersen commitments.
//!
//! The original proof-of-concept threads these through stateful
//! `PC`/`VPC`/`IPC` objects that exist only to compute a commitment. Here
//! they are pure functions instead.

use crate::ec::{ecadd, ecmult, Point};
use crate::generators::nums;
use crate::scalar::Scalar;
use crate::vector::Vector;

/// Sample a fresh blinding scalar from the OS entropy source, reduced mod
/// `N`. Used wherever a blinding factor is not supplied explicitly.
pub fn random_scalar() -> Scalar {
    use rand::RngCore;
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    Scalar::from_bytes_mod_order(&bytes)
}

/// `PC(v, gamma) = gamma * H + v * G`, with `H = nums(255)`.
pub fn pc_commit(v: &Scalar, gamma: &Scalar) -> Point {
    let h = nums(255);
    let g = Point::generator();
    ecadd(&[ecmult(gamma, &h), ecmult(v, &g)])
}

/// `vpc_commit(a*, b*, gamma, U, G*, H*) = gamma * U + sum(a_i * G_i) +
/// sum(b_i * H_i)`.
///
/// This single pure function implements both `VPC` (arbitrary blinding
/// `gamma`) and `IPC` (blinding fixed to `<a*, b*> mod N`, via
/// [`ipc_commit`]) from the design — the two differ only in what the caller
/// passes as `gamma`.
pub fn vpc_commit(a: &Vector, b: &Vector, gamma: &Scalar, u: &Point, g: &[Point], h: &[Point]) -> Point {
    assert_eq!(a.len(), g.len(), "vpc_commit: a* and G* length mismatch");
    assert_eq!(b.len(), h.len(), "vpc_commit: b* and H* length mismatch");

    let mut terms = Vec::with_capacity(1 + g.len() + h.len());
    terms.push(ecmult(gamma, u));
    for (ai, gi) in a.as_slice().iter().zip(g.iter()) {
        terms.push(ecmult(ai, gi));
    }
    for (bi, hi) in b.as_slice().iter().zip(h.iter()) {
        terms.push(ecmult(bi, hi));
    }
    ecadd(&terms)
}

/// `IPC(a*, b*) = <a*, b*> * U + sum(a_i * G_i) + sum(b_i * H_i)`: a
/// [`vpc_commit`] whose blinding is the vectors' own inner product rather
/// than an independent secret.
pub fn ipc_commit(a: &Vector, b: &Vector, u: &Point, g: &[Point], h: &[Point]) -> Point {
    let c = a
        .inner_product(b)
        .expect("IPC commitment requires equal-length vectors");
    vpc_commit(a, b, &c, u, g, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commitment_homomorphism() {
        // VPC(a+a', b+b', gamma+gamma') == VPC(a,b,gamma) + VPC(a',b',gamma').
        let n = 3;
        let u = nums(0);
        let g: Vec<Point> = (0..n).map(|i| nums((i + 1) as u8)).collect();
        let h: Vec<Point> = (0..n).map(|i| nums((n + i + 1) as u8)).collect();

        let a = Vector::new(vec![Scalar::from_u64(1), Scalar::from_u64(2), Scalar::from_u64(3)]);
        let b = Vector::new(vec![Scalar::from_u64(10), Scalar::from_u64(11), Scalar::from_u64(12)]);
        let a2 = Vector::new(vec![Scalar::from_u64(4), Scalar::from_u64(5), Scalar::from_u64(6)]);
        let b2 = Vector::new(vec![Scalar::from_u64(13), Scalar::from_u64(14), Scalar::from_u64(15)]);

        let gamma1 = random_scalar();
        let gamma2 = random_scalar();
        let gamma_sum = gamma1.add(&gamma2);

        let c1 = vpc_commit(&a, &b, &gamma1, &u, &g, &h);
        let c2 = vpc_commit(&a2, &b2, &gamma2, &u, &g, &h);

        let a_sum = a.add(&a2).unwrap();
        let b_sum = b.add(&b2).unwrap();
        let c_sum = vpc_commit(&a_sum, &b_sum, &gamma_sum, &u, &g, &h);

        assert_eq!(c_sum, ecadd(&[c1, c2]));
    }

    #[test]
    fn pc_is_deterministic_given_blinding() {
        let v = Scalar::from_u64(5);
        let gamma = Scalar::from_u64(77);
        assert_eq!(pc_commit(&v, &gamma), pc_commit(&v, &gamma));
    }

    #[test]
    fn ipc_blinding_is_the_inner_product() {
        let n = 2;
        let u = nums(0);
        let g: Vec<Point> = (0..n).map(|i| nums((i + 1) as u8)).collect();
        let h: Vec<Point> = (0..n).map(|i| nums((n + i + 1) as u8)).collect();
        let a = Vector::new(vec![Scalar::from_u64(2), Scalar::from_u64(3)]);
        let b = Vector::new(vec![Scalar::from_u64(5), Scalar::from_u64(7)]);
        // <a,b> = 10 + 21 = 31
        let expected_gamma = Scalar::from_u64(31);
        assert_eq!(
            ipc_commit(&a, &b, &u, &g, &h),
            vpc_commit(&a, &b, &expected_gamma, &u, &g, &h)
        );
    }
}
