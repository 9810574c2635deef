/*!

  The bytecode is a flat stream of one-byte opcodes. There are no section headers, type
  signatures or operands: an instruction is exactly its opcode, and the opcode's value is its
  position in the instruction table (`nop` is 0, `f32_div` is 13).

  Text becomes bytecode in three steps. The scanner delimits instruction names, the instruction
  table resolves each name to an `Opcode`, and a `BytecodeOutput` appends the opcode byte,
  failing the whole run once the output would exceed its capacity. The output's storage comes
  from an `Arena`, so the finished bytes live until the arena is reset.

  An enum is used for the opcode alone rather than for the whole instruction, so that when
  operands are added they can be laid out after the opcode byte without widening every
  instruction to the size of the largest payload.

*/

mod listing;
mod opcode;
mod output;

pub use listing::listing;
pub use opcode::{resolve, MatchMode, Opcode, Resolution, OPCODE_COUNT};
pub use output::{BytecodeOutput, MAX_BYTECODE_OUTPUT_SIZE};
