//! The two ways an encoding run can end without a result.

use thiserror::Error;

#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum EncodeError {
  /// Appending another opcode would push the output past its ceiling. No partial output is kept.
  #[error("bytecode output exceeded its capacity of {capacity} bytes")]
  CapacityExceeded {
    capacity: usize
  },

  /// Only raised under `UnmatchedPolicy::Reject`. The default policy maps unknown names to `nop`.
  #[error("unknown instruction `{name}` at offset {offset}")]
  UnknownInstruction {
    offset : usize,
    name   : String
  },
}

pub type EncodeResult<T> = Result<T, EncodeError>;
