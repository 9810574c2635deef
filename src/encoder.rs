/*!
  Produces bytecode from instruction text.

  The pipeline is this:
  ```text
  text -> [`Scanner`] -> `Token`s -> [`resolve`] -> `Opcode`s -> [`BytecodeOutput`] -> bytes
  ```
  The output's storage is allocated from the caller's `Arena` once per run, sized to the
  configured capacity. The run fails as a whole if the text has more tokens than fit.
*/

use tracing::{debug, trace};

use crate::arena::Arena;
use crate::bytecode::*;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::error::{EncodeError, EncodeResult};
use crate::scanner::Scanner;

/// What to do with a token that matches no instruction name.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum UnmatchedPolicy {
  /// Emit `nop` and keep going. Indistinguishable from a written `nop` in the output.
  MapToNop,
  /// Fail the run with `EncodeError::UnknownInstruction`.
  Reject
}

impl Default for UnmatchedPolicy {
  fn default() -> Self {
    UnmatchedPolicy::MapToNop
  }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EncoderConfig {
  /// Most bytes one run may emit.
  pub capacity             : usize,
  pub match_mode           : MatchMode,
  pub unmatched            : UnmatchedPolicy,
  /// Emit a final token that has no delimiter after it instead of dropping it.
  pub flush_trailing_token : bool,
}

impl Default for EncoderConfig {
  fn default() -> Self {
    EncoderConfig {
      capacity             : MAX_BYTECODE_OUTPUT_SIZE,
      match_mode           : MatchMode::default(),
      unmatched            : UnmatchedPolicy::default(),
      flush_trailing_token : false
    }
  }
}

impl EncoderConfig {
  pub fn with_capacity(mut self, capacity: usize) -> Self {
    self.capacity = capacity;
    self
  }

  pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
    self.match_mode = match_mode;
    self
  }

  pub fn with_unmatched(mut self, unmatched: UnmatchedPolicy) -> Self {
    self.unmatched = unmatched;
    self
  }

  pub fn with_flush_trailing_token(mut self, flush: bool) -> Self {
    self.flush_trailing_token = flush;
    self
  }

  /// Exact names, unknown names rejected, trailing token kept.
  pub fn strict() -> Self {
    EncoderConfig::default()
      .with_match_mode(MatchMode::Exact)
      .with_unmatched(UnmatchedPolicy::Reject)
      .with_flush_trailing_token(true)
  }
}

/**
  Encodes `text` into a buffer allocated from `arena`. The whole input is shown to `sink` first,
  then every token as it is delimited.

  On success the returned output borrows the arena, which therefore cannot be reset until the
  output is dropped. On failure nothing is returned; the bytes already allocated stay allocated
  until the next reset.
*/
pub fn encode<'a, S>(
  text   : &[u8],
  arena  : &'a mut Arena,
  config : &EncoderConfig,
  sink   : &mut S
) -> EncodeResult<BytecodeOutput<'a>>
  where S: DiagnosticSink + ?Sized
{
  sink.inspect(text);

  let mut output = BytecodeOutput::new(arena.allocate(config.capacity).into_bytes());
  let tokens = Scanner::new(text).flush_trailing_token(config.flush_trailing_token);

  for token in tokens {
    let name = token.text(text);
    sink.inspect(name);

    let opcode =
      match (resolve(name, config.match_mode), config.unmatched) {

        (Resolution::Resolved(opcode), _) => opcode,

        (Resolution::Unmatched, UnmatchedPolicy::MapToNop) => Opcode::Nop,

        (Resolution::Unmatched, UnmatchedPolicy::Reject) => {
          return Err(EncodeError::UnknownInstruction {
            offset : token.start,
            name   : String::from_utf8_lossy(name).into_owned()
          });
        }

      };

    if let Err(e) = output.append_opcode(opcode) {
      debug!(capacity = output.capacity(), "abandoning encoding run: {}", e);
      return Err(e);
    }
    trace!(offset = token.start, opcode = %opcode, "emitted");
  }

  debug!(bytes = output.len(), capacity = output.capacity(), "encoded");
  Ok(output)
}

/// Runs `encode` against a private arena and copies the result out.
pub fn encode_to_vec(text: &[u8], config: &EncoderConfig) -> EncodeResult<Vec<u8>> {
  let mut arena = Arena::with_capacity(0, config.capacity);
  let output = encode(text, &mut arena, config, &mut TracingSink)?;
  Ok(output.to_vec())
}
