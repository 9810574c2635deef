/*!
  A human readable dump of a bytecode stream. Each byte gets its own row: the offset, the byte in
  hex, the instruction it encodes, and the byte as a character, which is handy once operand
  payloads such as `table_set` names start appearing in the stream.
*/

use prettytable::{format as TableFormat, Table};

use super::Opcode;

/// Builds the listing table for the first `top` bytes of `bytecode`, or all of them for `None`.
pub fn listing(bytecode: &[u8], top: Option<usize>) -> Table {
  let mut table = Table::new();

  table.set_format(*TABLE_DISPLAY_FORMAT);
  table.set_titles(row![ubr->"Offset", ubr->"Byte", ubl->"Instruction", ubl->"Char"]);

  let shown = match top {
    Some(top) => &bytecode[..top.min(bytecode.len())],
    None      => bytecode
  };

  for (offset, byte) in shown.iter().enumerate() {
    let instruction = match Opcode::from_byte(*byte) {
      Some(opcode) => format!("({})", opcode),
      None         => "?".to_string()
    };
    table.add_row(
      row![r->offset, r->format!("0x{:02x}", byte), instruction, printable(*byte)]
    );
  }
  table
}

fn printable(byte: u8) -> char {
  match byte.is_ascii_graphic() || byte == b' ' {
    true  => byte as char,
    false => '.'
  }
}

lazy_static! {
  static ref TABLE_DISPLAY_FORMAT: TableFormat::TableFormat =
    TableFormat::FormatBuilder::new()
      .column_separator('│')
      .borders(' ')
      .separator(
        TableFormat::LinePosition::Title,
        TableFormat::LineSeparator::new('─', '┼', ' ', ' ')
      )
      .padding(1, 1)
      .build();
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn one_row_per_byte() {
    let table = listing(&[9, 10, 0], None);
    assert_eq!(table.len(), 3);
    let text = table.to_string();
    assert!(text.contains("(f32_new)"));
    assert!(text.contains("(f32_add)"));
    assert!(text.contains("(nop)"));
    assert!(text.contains("0x0a"));
  }

  #[test]
  fn top_limits_rows() {
    assert_eq!(listing(&[1, 2, 3, 4], Some(2)).len(), 2);
    assert_eq!(listing(&[1, 2], Some(10)).len(), 2);
  }

  #[test]
  fn non_opcode_bytes() {
    let text = listing(&[b'x'], None).to_string();
    assert!(text.contains("0x78"));
    assert!(text.contains('?'));
    assert!(text.contains('x'));
    assert_eq!(printable(7), '.');
  }
}
