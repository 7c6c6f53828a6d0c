use crate::arith;
use crate::error::DomainError;
use crate::mul::{self, MontgomeryParams};
use crate::reg::VecReg;
use crate::repack;
use crate::shift::{self, ShiftDirection};
use crate::shuffle::{self, Granularity};

/// Façade over the lane-ISA semantic units, one method per named operation.
///
/// [Model] carries no state: it is a zero-sized handle whose methods are pure
/// functions, so a single value (or one per thread, they are
/// indistinguishable) can drive any number of expected-output computations
/// concurrently. Operations with a parameter domain return
/// `Result<VecReg, DomainError>`; the parameterless lane ops are total.
#[derive(Clone, Copy, Debug, Default)]
pub struct Model;

impl Model {
    pub fn new() -> Self {
        Model
    }

    /// Lane-wise wrapping add.
    pub fn addv(&self, a: VecReg, b: VecReg) -> VecReg {
        arith::addv(a, b)
    }

    /// Lane-wise wrapping subtract.
    pub fn subv(&self, a: VecReg, b: VecReg) -> VecReg {
        arith::subv(a, b)
    }

    /// Lane-wise modular add; lanes assumed reduced modulo `m`.
    pub fn addvm(&self, a: VecReg, b: VecReg, m: u32) -> VecReg {
        arith::addvm(a, b, m)
    }

    /// Lane-wise modular subtract; lanes assumed reduced modulo `m`.
    pub fn subvm(&self, a: VecReg, b: VecReg, m: u32) -> VecReg {
        arith::subvm(a, b, m)
    }

    /// Whole-register 256-bit logical shift, bits crossing lane boundaries.
    pub fn shift(
        &self,
        v: VecReg,
        amount: usize,
        dir: ShiftDirection,
    ) -> Result<VecReg, DomainError> {
        shift::shift_reg(v, amount, dir)
    }

    /// Per-lane logical shift, every lane independently.
    pub fn shift_lanes(
        &self,
        v: VecReg,
        amount: usize,
        dir: ShiftDirection,
    ) -> Result<VecReg, DomainError> {
        shift::shift_lanes(v, amount, dir)
    }

    /// Even-granule interleave of `a` and `b` at granularity `g`.
    pub fn trn1(&self, a: VecReg, b: VecReg, g: Granularity) -> VecReg {
        shuffle::trn1(a, b, g)
    }

    /// Odd-granule interleave of `a` and `b` at granularity `g`.
    pub fn trn2(&self, a: VecReg, b: VecReg, g: Granularity) -> VecReg {
        shuffle::trn2(a, b, g)
    }

    /// Lane-wise truncating multiply.
    pub fn mulv(&self, a: VecReg, b: VecReg) -> VecReg {
        mul::mulv(a, b)
    }

    /// Truncating multiply of `a` by the broadcast lane `b[idx]`.
    pub fn mulvl(&self, a: VecReg, b: VecReg, idx: usize) -> Result<VecReg, DomainError> {
        mul::mulvl(a, b, idx)
    }

    /// Lane-wise modular multiply: `(a[i] * b[i]) mod m`, lanes in `[0, m)`.
    pub fn mulvm(
        &self,
        a: VecReg,
        b: VecReg,
        m: u32,
        params: MontgomeryParams,
    ) -> Result<VecReg, DomainError> {
        mul::mulvm(a, b, m, params)
    }

    /// Broadcast modular multiply: `(a[i] * b[idx]) mod m`.
    pub fn mulvml(
        &self,
        a: VecReg,
        b: VecReg,
        m: u32,
        params: MontgomeryParams,
        idx: usize,
    ) -> Result<VecReg, DomainError> {
        mul::mulvml(a, b, m, params, idx)
    }

    /// Lane-wise Montgomery-domain multiply: `a[i] * b[i] * R^{-1} mod m`,
    /// the uncorrected product the hardware instruction returns.
    pub fn mont_mulv(
        &self,
        a: VecReg,
        b: VecReg,
        m: u32,
        params: MontgomeryParams,
    ) -> Result<VecReg, DomainError> {
        mul::mont_mulv(a, b, m, params)
    }

    /// Broadcast Montgomery-domain multiply.
    pub fn mont_mulvl(
        &self,
        a: VecReg,
        b: VecReg,
        m: u32,
        params: MontgomeryParams,
        idx: usize,
    ) -> Result<VecReg, DomainError> {
        mul::mont_mulvl(a, b, m, params, idx)
    }

    /// Serializes 8 `w`-bit elements into a dense stream.
    pub fn pack(&self, v: VecReg, w: usize) -> Result<VecReg, DomainError> {
        repack::pack(v, w)
    }

    /// Widens 8 consecutive `w`-bit stream elements back to full lanes.
    pub fn unpk(&self, v: VecReg, w: usize) -> Result<VecReg, DomainError> {
        repack::unpk(v, w)
    }
}
