use std::fmt;
use std::ops::Index;

/// Number of 32-bit lanes in a vector register.
pub const LANES: usize = 8;

/// Width of one lane in bits.
pub const LANE_BITS: usize = 32;

/// Total register width in bits.
pub const REG_BITS: usize = LANES * LANE_BITS;

/// A 256-bit vector register: eight ordered `u32` lanes, lane 0 least
/// significant.
///
/// Seen as a single 256-bit unsigned integer, lane 7 holds the most
/// significant word. [VecReg] is an immutable value type: operations return a
/// fresh register and never mutate their operands.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct VecReg {
    lanes: [u32; LANES],
}

impl VecReg {
    /// The all-zero register.
    pub const ZERO: VecReg = VecReg { lanes: [0; LANES] };

    pub const fn new(lanes: [u32; LANES]) -> Self {
        Self { lanes }
    }

    /// Broadcasts `x` into every lane.
    pub const fn splat(x: u32) -> Self {
        Self { lanes: [x; LANES] }
    }

    /// Builds a register lane by lane, lane 0 first.
    pub fn from_fn(f: impl FnMut(usize) -> u32) -> Self {
        Self {
            lanes: std::array::from_fn(f),
        }
    }

    /// Value of lane `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= LANES`.
    #[inline]
    pub fn lane(&self, i: usize) -> u32 {
        self.lanes[i]
    }

    #[inline]
    pub fn lanes(&self) -> &[u32; LANES] {
        &self.lanes
    }
}

impl From<[u32; LANES]> for VecReg {
    fn from(lanes: [u32; LANES]) -> Self {
        Self { lanes }
    }
}

impl Index<usize> for VecReg {
    type Output = u32;

    fn index(&self, i: usize) -> &u32 {
        &self.lanes[i]
    }
}

impl fmt::Debug for VecReg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for VecReg {
    /// Prints the full 256-bit value, most significant lane first.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x")?;
        self.lanes
            .iter()
            .rev()
            .try_for_each(|x| write!(f, "{:08x}", x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lane_order_is_lsw_first() {
        let v: VecReg = VecReg::from_fn(|i| i as u32);
        assert_eq!(v.lane(0), 0);
        assert_eq!(v.lane(7), 7);
        assert_eq!(v[3], 3);
    }

    #[test]
    fn display_msw_first() {
        let mut lanes: [u32; LANES] = [0; LANES];
        lanes[0] = 0x3a60e2eb;
        lanes[7] = 0x9397271b;
        let v: VecReg = VecReg::new(lanes);
        assert_eq!(
            format!("{}", v),
            "0x9397271b0000000000000000000000000000000000000000000000003a60e2eb"
        );
    }
}
