/*!
  Splits instruction text into instruction-name tokens.

  The scanner is a two state machine that looks at one byte at a time, left to right:

    ```text
    byte         Idle                      Accumulating(token)
    ─────────    ──────────────────────    ───────────────────────────────
    '('          stay Idle                 stay, token unchanged
    ' ' or ')'   stay Idle                 emit token, go Idle
    other        start token here          token.length += 1
    ```

  Parentheses carry no structure; nesting is accepted and ignored. A `(` inside a token neither
  ends it nor counts toward its length, so the token view still begins at the token's first byte.
  Only the space byte delimits; tabs and newlines are token bytes.

  A token still open at the end of input has no delimiter and is dropped, unless the scanner is
  told to flush it.
*/

/// A view into the source text: `length` bytes starting at `start`.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct Token {
  pub start  : usize,
  pub length : usize,
}

impl Token {
  pub fn text<'s>(&self, source: &'s [u8]) -> &'s [u8] {
    &source[self.start..self.start + self.length]
  }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
enum ScanState {
  Idle,
  Accumulating(Token)
}

#[derive(Clone, Debug)]
pub struct Scanner<'s> {
  source               : &'s [u8],
  position             : usize,
  state                : ScanState,
  flush_trailing_token : bool,
}

impl<'s> Scanner<'s> {

  pub fn new(source: &'s [u8]) -> Scanner<'s> {
    Scanner {
      source,
      position             : 0,
      state                : ScanState::Idle,
      flush_trailing_token : false
    }
  }

  /// Emit a token left open at the end of input instead of dropping it.
  pub fn flush_trailing_token(mut self, flush: bool) -> Scanner<'s> {
    self.flush_trailing_token = flush;
    self
  }
}

impl<'s> Iterator for Scanner<'s> {
  type Item = Token;

  fn next(&mut self) -> Option<Token> {
    while let Some(&byte) = self.source.get(self.position) {
      self.position += 1;

      match (byte, self.state) {

        (b'(', _) => {}

        (b' ', ScanState::Accumulating(token))
        | (b')', ScanState::Accumulating(token)) => {
          self.state = ScanState::Idle;
          return Some(token);
        }

        (b' ', ScanState::Idle) | (b')', ScanState::Idle) => {}

        (_, ScanState::Idle) => {
          self.state = ScanState::Accumulating(Token { start: self.position - 1, length: 1 });
        }

        (_, ScanState::Accumulating(token)) => {
          self.state = ScanState::Accumulating(Token { length: token.length + 1, ..token });
        }

      } // end match on (byte, state)
    }

    // End of input.
    match self.state {
      ScanState::Accumulating(token) => {
        self.state = ScanState::Idle;
        match self.flush_trailing_token {
          true  => Some(token),
          false => None
        }
      }
      ScanState::Idle => None
    }
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  fn token_texts(text: &str, flush: bool) -> Vec<String> {
    let source = text.as_bytes();
    Scanner::new(source)
      .flush_trailing_token(flush)
      .map(|token| String::from_utf8_lossy(token.text(source)).into_owned())
      .collect()
  }

  #[test]
  fn splits_on_space_and_close_paren() {
    assert_eq!(token_texts("(f32_new f32_new f32_add)", false), vec!["f32_new", "f32_new", "f32_add"]);
  }

  #[test]
  fn token_offsets() {
    let tokens: Vec<Token> = Scanner::new(b"(ab cd)").collect();
    assert_eq!(tokens, vec![Token { start: 1, length: 2 }, Token { start: 4, length: 2 }]);
  }

  #[test]
  fn parentheses_are_ignored() {
    assert_eq!(token_texts("(f32_new)", false), vec!["f32_new"]);
    assert_eq!(token_texts("((f32_new))", false), vec!["f32_new"]);
    assert_eq!(token_texts("f32_new ", false), vec!["f32_new"]);
    assert_eq!(token_texts("((a) ((b)) c)", false), vec!["a", "b", "c"]);
  }

  #[test]
  fn consecutive_delimiters_emit_nothing() {
    assert_eq!(token_texts("   ) )  ", false), Vec::<String>::new());
    assert_eq!(token_texts("(a    b)))", false), vec!["a", "b"]);
    assert_eq!(token_texts("", false), Vec::<String>::new());
  }

  #[test]
  fn unterminated_trailing_token_is_dropped() {
    assert_eq!(token_texts("(f32_add f32_su", false), vec!["f32_add"]);
    assert_eq!(token_texts("f32_new", false), Vec::<String>::new());
  }

  #[test]
  fn unterminated_trailing_token_can_be_flushed() {
    assert_eq!(token_texts("(f32_add f32_su", true), vec!["f32_add", "f32_su"]);
    assert_eq!(token_texts("f32_new", true), vec!["f32_new"]);
    assert_eq!(token_texts("(a) ", true), vec!["a"]);
  }

  #[test]
  fn open_paren_inside_token_keeps_start_and_counts_other_bytes() {
    let tokens: Vec<Token> = Scanner::new(b"ab(cd ").collect();
    assert_eq!(tokens, vec![Token { start: 0, length: 4 }]);
    assert_eq!(tokens[0].text(b"ab(cd "), b"ab(c");
  }

  #[test]
  fn only_space_delimits() {
    assert_eq!(token_texts("(a\tb)\nc ", false), vec!["a\tb", "\nc"]);
  }

  #[test]
  fn exhausted_scanner_stays_exhausted() {
    let mut scanner = Scanner::new(b"a b").flush_trailing_token(true);
    assert_eq!(scanner.next(), Some(Token { start: 0, length: 1 }));
    assert_eq!(scanner.next(), Some(Token { start: 2, length: 1 }));
    assert_eq!(scanner.next(), None);
    assert_eq!(scanner.next(), None);
  }
}
