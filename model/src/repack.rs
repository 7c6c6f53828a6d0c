use crate::error::DomainError;
use crate::reg::{LANE_BITS, LANES, VecReg};

fn check_width(w: usize) -> Result<u32, DomainError> {
    if w == 0 || w > LANE_BITS {
        return Err(DomainError::ElementWidth(w));
    }
    Ok(u32::MAX >> (LANE_BITS - w))
}

/// Serializes 8 narrow elements into a dense bit-stream.
///
/// Each lane is masked to its low `w` bits; the 8 `w`-bit values are
/// concatenated element 0 first (least significant) and the resulting
/// `8*w`-bit stream is re-chunked into 32-bit lanes. A partial final lane is
/// zero-extended and everything above the stream is zero.
pub fn pack(v: VecReg, w: usize) -> Result<VecReg, DomainError> {
    let mask: u32 = check_width(w)?;
    let mut out: [u32; LANES] = [0; LANES];
    let mut acc: u64 = 0;
    let mut acc_bits: usize = 0;
    let mut next: usize = 0;
    v.lanes().iter().for_each(|&x| {
        acc |= u64::from(x & mask) << acc_bits;
        acc_bits += w;
        if acc_bits >= LANE_BITS {
            out[next] = acc as u32;
            acc >>= 32;
            acc_bits -= LANE_BITS;
            next += 1;
        }
    });
    if acc_bits > 0 {
        out[next] = acc as u32;
    }
    Ok(VecReg::new(out))
}

/// Inverse of [pack]: slices 8 consecutive `w`-bit elements off the
/// register's bit-stream (element 0 least significant) and zero-extends each
/// into a full lane.
pub fn unpk(v: VecReg, w: usize) -> Result<VecReg, DomainError> {
    let mask: u32 = check_width(w)?;
    Ok(VecReg::from_fn(|e| {
        let off: usize = e * w;
        let lane: usize = off / LANE_BITS;
        let bit: u32 = (off % LANE_BITS) as u32;
        let lo: u64 = u64::from(v.lane(lane));
        let hi: u64 = if lane + 1 < LANES {
            u64::from(v.lane(lane + 1))
        } else {
            0
        };
        ((((hi << 32) | lo) >> bit) as u32) & mask
    }))
}
