/*!
  Encodes parenthesized stack-machine instruction text, such as `(f32_new f32_new f32_add)`, into
  a flat stream of one-byte opcodes for a linear-memory runtime. See `encoder` for the pipeline
  and `arena` for where the output lives.
*/

#[macro_use] extern crate prettytable;
#[macro_use] extern crate lazy_static;

pub mod arena;
pub mod bytecode;
pub mod diagnostics;
pub mod encoder;
pub mod error;
pub mod scanner;

pub use arena::{Arena, Region};
pub use bytecode::{listing, resolve, BytecodeOutput, MatchMode, Opcode, Resolution,
                   MAX_BYTECODE_OUTPUT_SIZE};
pub use diagnostics::{DiagnosticSink, NullSink, TracingSink};
pub use encoder::{encode, encode_to_vec, EncoderConfig, UnmatchedPolicy};
pub use error::{EncodeError, EncodeResult};
pub use scanner::{Scanner, Token};
