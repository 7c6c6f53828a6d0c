use crate::error::DomainError;
use crate::reg::{LANE_BITS, LANES, VecReg};

/// Transpose element size: the contiguous bit-group moved as one unit.
///
/// Only the widths that evenly divide the 256-bit register are
/// representable, so a [Granularity] value is always valid; the fallible
/// check happens once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    G32,
    G64,
    G128,
}

impl Granularity {
    /// Parses a raw bit count, rejecting anything but 32, 64 or 128.
    pub fn try_from_bits(bits: usize) -> Result<Self, DomainError> {
        match bits {
            32 => Ok(Self::G32),
            64 => Ok(Self::G64),
            128 => Ok(Self::G128),
            _ => Err(DomainError::Granularity(bits)),
        }
    }

    pub fn bits(self) -> usize {
        match self {
            Self::G32 => 32,
            Self::G64 => 64,
            Self::G128 => 128,
        }
    }

    /// Lanes per granule.
    pub(crate) fn lanes(self) -> usize {
        self.bits() / LANE_BITS
    }
}

/// Shared interleave kernel: `sel = 0` takes even-indexed source granules
/// (trn1), `sel = 1` odd-indexed (trn2).
fn trn(a: VecReg, b: VecReg, g: Granularity, sel: usize) -> VecReg {
    let gl: usize = g.lanes();
    let granules: usize = LANES / gl;
    let mut out: [u32; LANES] = [0; LANES];
    (0..granules / 2).for_each(|j| {
        let src: usize = (2 * j + sel) * gl;
        (0..gl).for_each(|k| {
            out[2 * j * gl + k] = a.lane(src + k);
            out[(2 * j + 1) * gl + k] = b.lane(src + k);
        });
    });
    VecReg::new(out)
}

/// Interleaves the even-indexed granules of `a` and `b`: output granule `2j`
/// is granule `2j` of `a`, output granule `2j+1` is granule `2j` of `b`.
pub fn trn1(a: VecReg, b: VecReg, g: Granularity) -> VecReg {
    trn(a, b, g, 0)
}

/// Interleaves the odd-indexed granules of `a` and `b`: output granule `2j`
/// is granule `2j+1` of `a`, output granule `2j+1` is granule `2j+1` of `b`.
pub fn trn2(a: VecReg, b: VecReg, g: Granularity) -> VecReg {
    trn(a, b, g, 1)
}
