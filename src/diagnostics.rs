//! The diagnostic hook. The encoder forwards the raw input and every delimited token to a sink so
//! the text can be inspected; a sink returns nothing and cannot change the outcome of a run.

use tracing::debug;

pub trait DiagnosticSink {
  fn inspect(&mut self, fragment: &[u8]);
}

/// Logs each fragment through `tracing` at debug level.
#[derive(Clone, Copy, Default, Debug)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
  fn inspect(&mut self, fragment: &[u8]) {
    debug!(target: "wat_bytecode::diagnostics", "{}", String::from_utf8_lossy(fragment));
  }
}

#[derive(Clone, Copy, Default, Debug)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
  fn inspect(&mut self, _fragment: &[u8]) {}
}

/// Records fragments, lossily decoded. Mostly useful in tests.
impl DiagnosticSink for Vec<String> {
  fn inspect(&mut self, fragment: &[u8]) {
    self.push(String::from_utf8_lossy(fragment).into_owned());
  }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
  fn inspect(&mut self, fragment: &[u8]) {
    (**self).inspect(fragment)
  }
}
