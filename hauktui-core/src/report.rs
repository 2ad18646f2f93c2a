//! Console reporting facade
//!
//! All user-facing output flows through [`Reporter`] so commands never touch
//! stdout/stderr directly. The writers are injected, which lets tests capture
//! output in a `Vec<u8>` instead of the real process streams. Diagnostics are
//! separate and go through `tracing`.

use std::io::{self, Stderr, Stdout, Write};

use console::style;

/// Two-stream reporter: `log`/`info`/`success` write to the out stream,
/// `warn`/`error` to the err stream.
pub struct Reporter<O: Write = Stdout, E: Write = Stderr> {
    out: O,
    err: E,
}

impl Reporter {
    /// Reporter bound to the process streams. Color is handled by `console`,
    /// which disables styling when the stream is not a terminal.
    pub fn color() -> Self {
        Reporter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Reporter { out, err }
    }

    /// Plain line, no prefix. Used for data output (listings, details, diffs).
    pub fn log(&mut self, message: impl AsRef<str>) {
        let _ = writeln!(self.out, "{}", message.as_ref());
    }

    pub fn info(&mut self, message: impl AsRef<str>) {
        let _ = writeln!(self.out, "{} {}", style("→").cyan(), message.as_ref());
    }

    pub fn success(&mut self, message: impl AsRef<str>) {
        let _ = writeln!(self.out, "{} {}", style("✓").green(), message.as_ref());
    }

    pub fn warn(&mut self, message: impl AsRef<str>) {
        let _ = writeln!(self.err, "{} {}", style("!").yellow(), message.as_ref());
    }

    pub fn error(&mut self, message: impl AsRef<str>) {
        let _ = writeln!(self.err, "{} {}", style("✗").red(), message.as_ref());
    }

    /// Hand back the writers, mainly so tests can inspect captured output.
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capture() -> Reporter<Vec<u8>, Vec<u8>> {
        Reporter::new(Vec::new(), Vec::new())
    }

    #[test]
    fn test_log_and_info_go_to_out() {
        let mut reporter = capture();
        reporter.log("plain line");
        reporter.info("informational");
        reporter.success("done");

        let (out, err) = reporter.into_writers();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("plain line"));
        assert!(out.contains("informational"));
        assert!(out.contains("done"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_warn_and_error_go_to_err() {
        let mut reporter = capture();
        reporter.warn("heads up");
        reporter.error("broken");

        let (out, err) = reporter.into_writers();
        let err = String::from_utf8(err).unwrap();

        assert!(out.is_empty());
        assert!(err.contains("heads up"));
        assert!(err.contains("broken"));
    }

    #[test]
    fn test_log_keeps_message_verbatim() {
        let mut reporter = capture();
        reporter.log("  padded   columns");

        let (out, _) = reporter.into_writers();
        assert_eq!(String::from_utf8(out).unwrap(), "  padded   columns\n");
    }
}
