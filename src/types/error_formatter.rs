//! Console presentation of an [`ErrorValue`].
//!
//! [`ErrorValue::log`] prints a banner with the kind name and code, the
//! parsed (and optionally filtered) stack, the context entries and a closing
//! banner. The layout is presentation only and may change between releases.

use core::fmt::Write;

use serde_json::Value;

use crate::types::error_value::ErrorValue;
use crate::types::ErrorVec;

const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const DIM: &str = "\x1b[90m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

const BANNER: &str = "━━━━━━━━━━━━━━━━━━━━";

/// Frame-location fragments hidden when filtering is on.
pub const DEFAULT_NOISE: &[&str] =
    &["/rustc/", "/.cargo/registry/", "std::", "core::", "alloc::", "backtrace::", "tokio::runtime"];

/// Knobs for [`ErrorValue::log`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// Print context entries.
    pub log_context: bool,
    /// Drop frames whose location matches one of `noise`.
    pub filter: bool,
    /// ANSI colors in the output.
    pub colored: bool,
    pub noise: Vec<String>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            log_context: true,
            filter: true,
            colored: true,
            noise: DEFAULT_NOISE.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

impl LogOptions {
    /// Default options without ANSI escapes.
    #[inline]
    pub fn plain() -> Self {
        Self { colored: false, ..Default::default() }
    }

    #[inline]
    pub fn log_context(mut self, enabled: bool) -> Self {
        self.log_context = enabled;
        self
    }

    #[inline]
    pub fn filter(mut self, enabled: bool) -> Self {
        self.filter = enabled;
        self
    }

    /// Replaces the noise list.
    pub fn with_noise<I, S>(mut self, noise: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noise = noise.into_iter().map(Into::into).collect();
        self
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.colored {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_owned()
        }
    }

    fn is_noise(&self, frame: &StackFrame) -> bool {
        let reference = frame.location.as_deref().unwrap_or(&frame.function);
        self.noise.iter().any(|keyword| reference.contains(keyword.as_str()))
    }
}

/// One entry of a captured stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrame {
    pub function: String,
    /// `file:line:column` when the backtrace resolved it.
    pub location: Option<String>,
}

/// Splits a stack string into frames, skipping the header line.
///
/// Understands the `std::backtrace` layout (`N: symbol` followed by an
/// optional `at file:line:col` line); any other non-empty line becomes a
/// frame of its own.
pub fn parse_stack(stack: &str) -> ErrorVec<StackFrame> {
    let mut frames: ErrorVec<StackFrame> = ErrorVec::new();
    for line in stack.lines().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(location) = line.strip_prefix("at ") {
            match frames.last_mut().filter(|frame| frame.location.is_none()) {
                Some(frame) => frame.location = Some(location.to_owned()),
                None => frames
                    .push(StackFrame { function: String::new(), location: Some(location.to_owned()) }),
            }
            continue;
        }
        let function = match line.split_once(": ") {
            Some((index, symbol)) if index.chars().all(|c| c.is_ascii_digit()) => symbol,
            _ => line,
        };
        frames.push(StackFrame { function: function.to_owned(), location: None });
    }
    frames
}

impl ErrorValue {
    /// Renders the console report without printing it.
    pub fn render_log(&self, options: &LogOptions) -> String {
        let mut out = String::with_capacity(256);
        let title = format!("{} {} [{}] {}", BANNER, self.name(), self.code(), BANNER);
        let _ = writeln!(out, "{}", options.paint(&format!("{}{}", BOLD, RED), &title));

        if !self.message().is_empty() {
            let _ = writeln!(out, "{} {}", options.paint(YELLOW, "message:"), self.message());
        }
        let _ = writeln!(
            out,
            "{} {} ({}, operational: {})",
            options.paint(YELLOW, "status:"),
            self.status_code(),
            self.category(),
            self.is_operational()
        );
        if let Some(trace_id) = self.trace_id() {
            let _ = writeln!(out, "{} {}", options.paint(YELLOW, "trace:"), trace_id);
        }

        let frames = parse_stack(self.stack());
        let _ = writeln!(out, "{}", options.paint(YELLOW, "stack:"));
        let mut shown = 0usize;
        for frame in frames.iter().filter(|frame| !options.filter || !options.is_noise(frame)) {
            shown += 1;
            match &frame.location {
                Some(location) if frame.function.is_empty() => {
                    let _ = writeln!(out, "  at {}", options.paint(DIM, location));
                },
                Some(location) => {
                    let _ = writeln!(out, "  {} {}", frame.function, options.paint(DIM, location));
                },
                None => {
                    let _ = writeln!(out, "  {}", frame.function);
                },
            }
        }
        if shown == 0 {
            let _ = writeln!(out, "  {}", options.paint(DIM, "(no frames)"));
        }

        if options.log_context {
            let _ = writeln!(out, "{}", options.paint(YELLOW, "context:"));
            if self.context().is_empty() {
                let _ = writeln!(out, "  {}", options.paint(DIM, "(no context)"));
            }
            for (key, value) in self.context() {
                let rendered = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                let _ = writeln!(out, "  {}: {}", options.paint(CYAN, key), rendered);
            }
        }

        let closing = format!("{} end {} {}", BANNER, self.name(), BANNER);
        let _ = writeln!(out, "{}", options.paint(&format!("{}{}", BOLD, RED), &closing));
        out
    }

    /// Prints [`render_log`](Self::render_log) to stderr.
    pub fn log(&self, options: &LogOptions) {
        eprint!("{}", self.render_log(options));
    }
}
