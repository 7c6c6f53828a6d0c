use crate::error::DomainError;
use crate::reg::{LANE_BITS, LANES, REG_BITS, VecReg};

/// Direction of a logical shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftDirection {
    Left,
    Right,
}

/// Logical shift of the whole 256-bit register by `amount` bits.
///
/// The register is treated as one 256-bit unsigned integer (lane 7 most
/// significant), so any amount that is not a multiple of 32 moves bits
/// between adjacent lanes. Vacated bits are zero. `amount` must lie in
/// `0..=255`.
pub fn shift_reg(v: VecReg, amount: usize, dir: ShiftDirection) -> Result<VecReg, DomainError> {
    if amount >= REG_BITS {
        return Err(DomainError::ShiftAmount {
            amount,
            max: REG_BITS - 1,
        });
    }

    let word: usize = amount / LANE_BITS;
    let bit: u32 = (amount % LANE_BITS) as u32;
    let mut out: [u32; LANES] = [0; LANES];

    match dir {
        // Output lane i reads a 64-bit window of the source starting at lane
        // i + word; the window absorbs the bits flowing in from above.
        ShiftDirection::Right => (0..LANES).for_each(|i| {
            let src: usize = i + word;
            let lo: u64 = if src < LANES { u64::from(v.lane(src)) } else { 0 };
            let hi: u64 = if src + 1 < LANES {
                u64::from(v.lane(src + 1))
            } else {
                0
            };
            out[i] = (((hi << 32) | lo) >> bit) as u32;
        }),
        // Symmetric: lane i is fed from lanes i - word and i - word - 1.
        ShiftDirection::Left => (0..LANES).for_each(|i| {
            let hi: u64 = if i >= word {
                u64::from(v.lane(i - word))
            } else {
                0
            };
            let lo: u64 = if i >= word + 1 {
                u64::from(v.lane(i - word - 1))
            } else {
                0
            };
            out[i] = (((hi << 32) | lo) >> (32 - bit)) as u32;
        }),
    }
    Ok(VecReg::new(out))
}

/// Independent logical shift of every 32-bit lane by `amount` bits.
///
/// No bit crosses a lane boundary. `amount` must lie in `0..=31`.
pub fn shift_lanes(v: VecReg, amount: usize, dir: ShiftDirection) -> Result<VecReg, DomainError> {
    if amount >= LANE_BITS {
        return Err(DomainError::ShiftAmount {
            amount,
            max: LANE_BITS - 1,
        });
    }
    let amount: u32 = amount as u32;
    Ok(match dir {
        ShiftDirection::Left => VecReg::from_fn(|i| v.lane(i) << amount),
        ShiftDirection::Right => VecReg::from_fn(|i| v.lane(i) >> amount),
    })
}
