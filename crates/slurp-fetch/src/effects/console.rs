use console::{style, Term};

/// Terminal collaborator for the in-place progress line and status output.
///
/// All output goes to stdout. When stdout is not a terminal (or the console
/// is constructed silent, as in tests), the progress line is suppressed
/// entirely; diagnostic lines additionally require `verbose`.
pub struct Console {
    term: Term,
    verbose: bool,
    enabled: bool,
}

impl Console {
    /// Console attached to stdout.
    pub fn stdout(verbose: bool) -> Self {
        let term = Term::stdout();
        let enabled = term.is_term();
        Self {
            term,
            verbose,
            enabled,
        }
    }

    /// Console that renders nothing, for embedding and tests.
    pub fn silent() -> Self {
        Self {
            term: Term::stdout(),
            verbose: false,
            enabled: false,
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Redraw the progress line in place via carriage return.
    pub fn draw(&self, line: &str) {
        if self.enabled {
            let _ = self.term.write_str(&format!("\r{line}"));
        }
    }

    /// Overwrite the progress line with blanks and park the cursor at
    /// column zero.
    pub fn clear(&self, width: usize) {
        if self.enabled && width > 0 {
            let _ = self.term.write_str(&format!("\r{}\r", " ".repeat(width)));
        }
    }

    /// Unconditional status line.
    pub fn info(&self, line: &str) {
        if self.enabled {
            let _ = self.term.write_line(line);
        }
    }

    /// Diagnostic line, shown only when verbose.
    pub fn debug(&self, line: &str) {
        if self.enabled && self.verbose {
            let _ = self.term.write_line(&format!("{}", style(line).dim()));
        }
    }

    /// Failure notice, printed before the error propagates.
    pub fn error(&self, line: &str) {
        if self.enabled {
            let _ = self.term.write_line(&format!("{}", style(line).red()));
        }
    }
}
