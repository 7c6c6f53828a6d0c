use itertools::izip;

use crate::error::DomainError;
use crate::reg::{LANES, VecReg};

/// Montgomery constants for an odd 32-bit modulus `m`, radix `R = 2^32`.
///
/// `qinv = -m^{-1} mod 2^32` drives the per-lane reduction; `rr = R^2 mod m`
/// is the radix power multiplied back in to cancel the `R^{-1}` factor a
/// single reduction leaves behind. Both constants are tied to one specific
/// `m`; every modular-multiply entry point re-checks that consistency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MontgomeryParams {
    qinv: u32,
    rr: u32,
}

impl MontgomeryParams {
    /// Derives the constants for `m`. Fails on even moduli, which have no
    /// inverse modulo a power of two.
    pub fn new(m: u32) -> Result<Self, DomainError> {
        if m & 1 == 0 {
            return Err(DomainError::EvenModulus(m));
        }
        let r: u64 = (1u64 << 32) % u64::from(m);
        Ok(Self {
            qinv: inv_pow2(m).wrapping_neg(),
            rr: ((r * r) % u64::from(m)) as u32,
        })
    }

    /// Reads the combined `[m, qinv]` register layout used by the hardware
    /// test data (lane 0 = modulus, lane 1 = `-m^{-1} mod 2^32`), validating
    /// that lane 1 really belongs to lane 0's modulus.
    ///
    /// Returns the modulus together with the full parameter set.
    pub fn from_reg(v: VecReg) -> Result<(u32, Self), DomainError> {
        let m: u32 = v.lane(0);
        let params: Self = Self::new(m)?;
        if params.qinv != v.lane(1) {
            return Err(DomainError::MontgomeryParams { m });
        }
        Ok((m, params))
    }

    pub fn qinv(self) -> u32 {
        self.qinv
    }

    /// `R^2 mod m`.
    pub fn rr(self) -> u32 {
        self.rr
    }

    fn check(self, m: u32) -> Result<(), DomainError> {
        if Self::new(m)? != self {
            return Err(DomainError::MontgomeryParams { m });
        }
        Ok(())
    }
}

/// `m^{-1} mod 2^32` for odd `m`, by Hensel lifting: starting from the
/// 3-bit-exact seed `m` itself, each step doubles the number of correct low
/// bits.
fn inv_pow2(m: u32) -> u32 {
    let mut x: u32 = m;
    (0..4).for_each(|_| x = x.wrapping_mul(2u32.wrapping_sub(m.wrapping_mul(x))));
    x
}

/// Montgomery reduction of a 64-bit value: `t * R^{-1} mod m`, in `[0, m)`
/// whenever `t < m * R`.
#[inline]
fn mont_reduce(t: u64, m: u32, qinv: u32) -> u32 {
    let u: u32 = (t as u32).wrapping_mul(qinv);
    // t + u*m is divisible by R and can exceed 64 bits for m close to 2^32.
    let s: u128 = u128::from(t) + u128::from(u) * u128::from(m);
    let r: u64 = (s >> 32) as u64;
    let m64: u64 = u64::from(m);
    if r >= m64 { (r - m64) as u32 } else { r as u32 }
}

#[inline]
fn mont_mul_lane(x: u32, y: u32, m: u32, qinv: u32) -> u32 {
    mont_reduce(u64::from(x) * u64::from(y), m, qinv)
}

/// Per-lane product `(x * y) mod m`, via two Montgomery steps:
/// reduce the double-width product (picking up `R^{-1}`), then multiply by
/// `rr` to cancel it.
#[inline]
fn mod_mul_lane(x: u32, y: u32, m: u32, p: MontgomeryParams) -> u32 {
    mont_mul_lane(mont_mul_lane(x, y, m, p.qinv), p.rr, m, p.qinv)
}

fn check_lane_index(idx: usize) -> Result<(), DomainError> {
    if idx >= LANES {
        return Err(DomainError::LaneIndex(idx));
    }
    Ok(())
}

/// Lane-wise truncating multiply: low 32 bits of each 64-bit product.
pub fn mulv(a: VecReg, b: VecReg) -> VecReg {
    let mut out: [u32; LANES] = [0; LANES];
    izip!(out.iter_mut(), a.lanes(), b.lanes()).for_each(|(r, &x, &y)| *r = x.wrapping_mul(y));
    VecReg::new(out)
}

/// Truncating multiply of every lane of `a` by the single lane `b[idx]`.
pub fn mulvl(a: VecReg, b: VecReg, idx: usize) -> Result<VecReg, DomainError> {
    check_lane_index(idx)?;
    let y: u32 = b.lane(idx);
    Ok(VecReg::from_fn(|i| a.lane(i).wrapping_mul(y)))
}

/// Lane-wise modular multiply: `(a[i] * b[i]) mod m`, each lane in `[0, m)`.
///
/// Lanes are expected reduced modulo `m`; like the modular adds, out-of-range
/// lanes are not flagged.
pub fn mulvm(a: VecReg, b: VecReg, m: u32, params: MontgomeryParams) -> Result<VecReg, DomainError> {
    params.check(m)?;
    let mut out: [u32; LANES] = [0; LANES];
    izip!(out.iter_mut(), a.lanes(), b.lanes())
        .for_each(|(r, &x, &y)| *r = mod_mul_lane(x, y, m, params));
    Ok(VecReg::new(out))
}

/// Broadcast variant of [mulvm]: every lane of `a` times `b[idx]`, mod `m`.
pub fn mulvml(
    a: VecReg,
    b: VecReg,
    m: u32,
    params: MontgomeryParams,
    idx: usize,
) -> Result<VecReg, DomainError> {
    params.check(m)?;
    check_lane_index(idx)?;
    let y: u32 = b.lane(idx);
    Ok(VecReg::from_fn(|i| mod_mul_lane(a.lane(i), y, m, params)))
}

/// Lane-wise Montgomery-domain product: `a[i] * b[i] * R^{-1} mod m`.
///
/// This is the uncorrected single-reduction result the hardware's modular
/// multiply produces, kept verbatim so device readbacks can be checked
/// bit-for-bit.
pub fn mont_mulv(
    a: VecReg,
    b: VecReg,
    m: u32,
    params: MontgomeryParams,
) -> Result<VecReg, DomainError> {
    params.check(m)?;
    let mut out: [u32; LANES] = [0; LANES];
    izip!(out.iter_mut(), a.lanes(), b.lanes())
        .for_each(|(r, &x, &y)| *r = mont_mul_lane(x, y, m, params.qinv));
    Ok(VecReg::new(out))
}

/// Broadcast variant of [mont_mulv].
pub fn mont_mulvl(
    a: VecReg,
    b: VecReg,
    m: u32,
    params: MontgomeryParams,
    idx: usize,
) -> Result<VecReg, DomainError> {
    params.check(m)?;
    check_lane_index(idx)?;
    let y: u32 = b.lane(idx);
    Ok(VecReg::from_fn(|i| {
        mont_mul_lane(a.lane(i), y, m, params.qinv)
    }))
}
