/*!
  The bytecode emitter. A `BytecodeOutput` writes opcodes into a fixed-size region handed to it
  by the arena and refuses to grow past that region.
*/

use std::fmt::{Display, Formatter};

use crate::error::{EncodeError, EncodeResult};
use super::listing::listing;
use super::Opcode;

/// Ceiling on the bytes a single encoding run may emit.
pub const MAX_BYTECODE_OUTPUT_SIZE: usize = 2000;

/**
  An opcode buffer borrowed from an `Arena`. `length` counts the bytes written so far and never
  exceeds `capacity()`; the bytes past `length` are the arena's zero fill.
*/
#[derive(Debug)]
pub struct BytecodeOutput<'a> {
  bytes  : &'a mut [u8],
  length : usize,
}

impl<'a> BytecodeOutput<'a> {

  pub fn new(bytes: &'a mut [u8]) -> BytecodeOutput<'a> {
    BytecodeOutput {
      bytes,
      length: 0
    }
  }

  /// Appends one opcode byte. Fails without writing if the buffer is already full.
  pub fn append_opcode(&mut self, opcode: Opcode) -> EncodeResult<()> {
    match self.bytes.get_mut(self.length) {

      Some(slot) => {
        *slot = opcode.code();
        self.length += 1;
        Ok(())
      }

      None => {
        Err(EncodeError::CapacityExceeded { capacity: self.capacity() })
      }

    }
  }

  pub fn len(&self) -> usize {
    self.length
  }

  pub fn is_empty(&self) -> bool {
    self.length == 0
  }

  pub fn capacity(&self) -> usize {
    self.bytes.len()
  }

  /// The emitted bytes, without the unused tail.
  pub fn as_bytes(&self) -> &[u8] {
    &self.bytes[..self.length]
  }

  /// The emitted opcodes. Every byte written through `append_opcode` decodes.
  pub fn opcodes(&self) -> impl Iterator<Item = Opcode> + '_ {
    self.as_bytes().iter().filter_map(|byte| Opcode::from_byte(*byte))
  }

  /// Copies the emitted bytes out of the arena.
  pub fn to_vec(&self) -> Vec<u8> {
    self.as_bytes().to_vec()
  }
}

impl<'a> Display for BytecodeOutput<'a> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} of {} bytes\n{}", self.length, self.capacity(), listing(self.as_bytes(), None))
  }
}
