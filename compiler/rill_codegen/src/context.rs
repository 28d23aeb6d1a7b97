//! Codegen context: indentation-aware line writer over an emitter.

use crate::emitter::Emitter;

const INDENT: &str = "    ";

/// Line-oriented writer used by the statement generator.
pub(crate) struct CodegenContext<'a> {
    emitter: &'a mut dyn Emitter,
    indent: usize,
}

impl<'a> CodegenContext<'a> {
    pub(crate) fn new(emitter: &'a mut dyn Emitter) -> Self {
        CodegenContext { emitter, indent: 0 }
    }

    /// Write one line at the current indent.
    pub(crate) fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.emitter.emit(INDENT);
        }
        self.emitter.emit(text);
        self.emitter.emit_newline();
    }

    /// Run `body` one indent level deeper.
    pub(crate) fn indented(&mut self, body: impl FnOnce(&mut Self)) {
        self.indent += 1;
        body(self);
        self.indent -= 1;
    }
}
