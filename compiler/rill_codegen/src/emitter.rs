//! Output Emitter
//!
//! Append-only sink the code generator writes through. The generator never
//! reads emitted text back.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Append-only text sink.
pub trait Emitter {
    /// Append a text fragment.
    fn emit(&mut self, text: &str);

    /// Append a newline (Unix-style `\n`).
    fn emit_newline(&mut self);
}

/// In-memory emitter; the primary sink for compilation and tests.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create an empty emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the emitter and return everything emitted.
    pub fn output(self) -> String {
        self.buffer
    }

    /// Current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }
}

/// Buffered file emitter for compiling straight to disk.
pub struct FileEmitter {
    writer: BufWriter<File>,
}

impl FileEmitter {
    /// Create the file and an emitter over it.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(FileEmitter {
            writer: BufWriter::new(file),
        })
    }

    /// Flush buffered output and surface any write error.
    pub fn finish(mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

impl Emitter for FileEmitter {
    fn emit(&mut self, text: &str) {
        // Write errors surface at finish; emit itself stays infallible to
        // match the sink contract.
        let _ = self.writer.write_all(text.as_bytes());
    }

    fn emit_newline(&mut self) {
        let _ = self.writer.write_all(b"\n");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Emitter, StringEmitter};

    #[test]
    fn string_emitter_appends_fragments() {
        let mut emitter = StringEmitter::new();
        emitter.emit("x = ");
        emitter.emit("1.0;");
        emitter.emit_newline();
        assert_eq!(emitter.output(), "x = 1.0;\n");
    }

    #[test]
    fn as_str_exposes_the_buffer_without_consuming() {
        let mut emitter = StringEmitter::new();
        emitter.emit("break;");
        assert_eq!(emitter.as_str(), "break;");
        emitter.emit_newline();
        assert_eq!(emitter.output(), "break;\n");
    }
}
