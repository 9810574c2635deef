use std::cmp::min;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::IntoEnumIterator;
use strum_macros::{Display as StrumDisplay, EnumIter, EnumString, IntoStaticStr};

/// Number of opcodes in the instruction table.
pub const OPCODE_COUNT: usize = 14;

/**
  Opcodes of the stack machine, one byte each.

  The discriminants are the wire format, so each one is pinned to a literal. Declaration order
  is also significant: it is the order in which `resolve` tests names, which decides what a
  prefix such as `func` resolves to. Append new opcodes at the end.

  In `()` are arguments to the instruction, in `[]` what it expects on the stack (top on the
  left). Arguments are not encoded yet; every instruction is a bare opcode byte.
*/
#[derive(
StrumDisplay, IntoStaticStr, EnumString, EnumIter, TryFromPrimitive, IntoPrimitive,
Clone,        Copy,          Eq,         PartialEq, Debug,            Hash
)]
#[repr(u8)]
pub enum Opcode {
  #[strum(to_string = "nop")]
  Nop      = 0,

  #[strum(to_string = "func_new")]
  FuncNew  = 1,  // () [argType] -> [func]
  #[strum(to_string = "func_call")]
  FuncCall = 2,

  #[strum(to_string = "local_get")]
  LocalGet = 3,
  #[strum(to_string = "local_set")]
  LocalSet = 4,

  #[strum(to_string = "type_new")]
  TypeNew  = 5,

  #[strum(to_string = "table_new")]
  TableNew = 6,
  #[strum(to_string = "table_set")]
  TableSet = 7,  // (size: u8 name: char[size]) [value, table] -> [table]
  #[strum(to_string = "table_get")]
  TableGet = 8,

  #[strum(to_string = "f32_new")]
  F32New   = 9,  // (value: f32) []
  #[strum(to_string = "f32_add")]
  F32Add   = 10, // () [right: f32, left: f32]
  #[strum(to_string = "f32_sub")]
  F32Sub   = 11, // () [right: f32, left: f32]
  #[strum(to_string = "f32_mul")]
  F32Mul   = 12, // () [right: f32, left: f32]
  #[strum(to_string = "f32_div")]
  F32Div   = 13, // () [right: f32, left: f32]
}

impl Opcode {
  pub fn code(&self) -> u8 {
    Into::<u8>::into(*self)
  }

  /// The textual instruction name, e.g. `f32_add`.
  pub fn name(&self) -> &'static str {
    (*self).into()
  }

  /// Decodes a single byte. Bytes past the end of the table are not opcodes.
  pub fn from_byte(byte: u8) -> Option<Opcode> {
    match Opcode::try_from_primitive(byte) {
      Ok(opcode) => Some(opcode),
      Err(_e)    => None
    }
  }
}

/// How a token is compared against an instruction name.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum MatchMode {
  /**
    Compares only the first `min(token length, name length)` bytes, so `func` matches
    `func_new` and `f32_add_extra` matches `f32_add`. The first entry in table order wins.
    An empty token matches `nop`.
  */
  Prefix,
  /// Byte-for-byte equality.
  Exact
}

impl Default for MatchMode {
  fn default() -> Self {
    MatchMode::Prefix
  }
}

impl MatchMode {
  pub fn matches(&self, token: &[u8], name: &[u8]) -> bool {
    match self {
      MatchMode::Prefix => {
        let length = min(token.len(), name.len());
        token[..length] == name[..length]
      }
      MatchMode::Exact => token == name
    }
  }
}

/// The outcome of looking a token up in the instruction table.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Resolution {
  Resolved(Opcode),
  Unmatched
}

impl Resolution {
  /// Today's lenient behavior: anything that didn't match is a `nop`.
  pub fn or_nop(self) -> Opcode {
    match self {
      Resolution::Resolved(opcode) => opcode,
      Resolution::Unmatched        => Opcode::Nop
    }
  }

  pub fn opcode(self) -> Option<Opcode> {
    match self {
      Resolution::Resolved(opcode) => Some(opcode),
      Resolution::Unmatched        => None
    }
  }
}

/// Looks `token` up against every instruction name in opcode order, stopping at the first match.
pub fn resolve(token: &[u8], mode: MatchMode) -> Resolution {
  match Opcode::iter().find(|opcode| mode.matches(token, opcode.name().as_bytes())) {
    Some(opcode) => Resolution::Resolved(opcode),
    None         => Resolution::Unmatched
  }
}
