//! Bit-accurate software model of an 8-lane vectorized bignum ALU.
//!
//! The modelled unit operates on 256-bit wide registers made of eight 32-bit
//! lanes (lane 0 least significant). Depending on the instruction, a register
//! is treated either as 8 independent unsigned words or as one 256-bit
//! unsigned integer. The model covers lane-wise and modular add/subtract,
//! whole-register and lane-wise logical shifts, multi-granularity transpose,
//! plain/broadcast/Montgomery lane multiplies, and bit-stream repacking of
//! narrow coefficients.
//!
//! Every operation is a pure function of its arguments: registers are `Copy`
//! values, nothing is mutated in place and no state is carried between calls,
//! so the model can be driven from any number of threads without
//! coordination. Expected outputs for a hardware run are obtained by feeding
//! the same operands through [Model] and comparing lane by lane.

mod arith;
mod error;
mod model;
mod mul;
mod reg;
mod repack;
mod shift;
mod shuffle;

pub use error::DomainError;
pub use model::Model;
pub use mul::MontgomeryParams;
pub use reg::{LANE_BITS, LANES, REG_BITS, VecReg};
pub use shift::ShiftDirection;
pub use shuffle::Granularity;
