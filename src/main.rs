use std::process;

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use wat_bytecode::{encode, Arena, BytecodeOutput, EncoderConfig, TracingSink};

/// Encoded when no instruction text is given on the command line.
const SAMPLE_TEXT: &str = "(f32_new)";

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env().add_directive(LevelFilter::WARN.into()))
    .init();

  let args: Vec<String> = std::env::args().skip(1).collect();
  let text = match args.is_empty() {
    true  => SAMPLE_TEXT.to_string(),
    false => args.join(" ")
  };

  let mut arena = Arena::new();
  let config = EncoderConfig::default();

  match encode(text.as_bytes(), &mut arena, &config, &mut TracingSink) {
    Ok(output) => {
      println!("Instruction Text: {}", text);
      println!("Bytecode: {:?}", output.as_bytes());
      print_listing(&output);
    }
    Err(e) => {
      eprintln!("Error: {}", e);
      process::exit(1);
    }
  }
}

#[cfg(feature = "trace_encoding")]
fn print_listing(output: &BytecodeOutput) {
  println!("{}", output);
}

#[cfg(not(feature = "trace_encoding"))]
fn print_listing(_output: &BytecodeOutput) {}
