use itertools::izip;

use crate::reg::{LANES, VecReg};

/// Lane-wise wrapping addition; no carry crosses a lane boundary.
pub fn addv(a: VecReg, b: VecReg) -> VecReg {
    let mut out: [u32; LANES] = [0; LANES];
    izip!(out.iter_mut(), a.lanes(), b.lanes()).for_each(|(r, &x, &y)| *r = x.wrapping_add(y));
    VecReg::new(out)
}

/// Lane-wise wrapping subtraction (two's-complement wraparound per lane).
pub fn subv(a: VecReg, b: VecReg) -> VecReg {
    let mut out: [u32; LANES] = [0; LANES];
    izip!(out.iter_mut(), a.lanes(), b.lanes()).for_each(|(r, &x, &y)| *r = x.wrapping_sub(y));
    VecReg::new(out)
}

/// Lane-wise modular addition: `a[i] + b[i]`, minus `m` once if the 33-bit
/// sum reaches `m`.
///
/// Trust boundary: callers guarantee `a[i], b[i] < m`. Out-of-range lanes
/// produce a well-defined but numerically wrong result (a single conditional
/// subtraction, exactly like the hardware), not an error.
pub fn addvm(a: VecReg, b: VecReg, m: u32) -> VecReg {
    let m64: u64 = u64::from(m);
    let mut out: [u32; LANES] = [0; LANES];
    izip!(out.iter_mut(), a.lanes(), b.lanes()).for_each(|(r, &x, &y)| {
        let s: u64 = u64::from(x) + u64::from(y);
        *r = if s >= m64 { (s - m64) as u32 } else { s as u32 };
    });
    VecReg::new(out)
}

/// Lane-wise modular subtraction: `a[i] - b[i]`, plus `m` once if the lane
/// would underflow. Same trust boundary as [addvm].
pub fn subvm(a: VecReg, b: VecReg, m: u32) -> VecReg {
    let mut out: [u32; LANES] = [0; LANES];
    izip!(out.iter_mut(), a.lanes(), b.lanes()).for_each(|(r, &x, &y)| {
        *r = if x < y {
            x.wrapping_sub(y).wrapping_add(m)
        } else {
            x - y
        };
    });
    VecReg::new(out)
}
