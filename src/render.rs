//! Output rendering for the conversation transcript.
//!
//! This module provides a trait-based rendering abstraction so the
//! conversation controller never talks to stdout directly. The default
//! implementation writes plain text with optional ANSI styling.
//!
//! Rendering a message is a pure function of the message, so replaying a
//! transcript with [`render_transcript`] always reproduces the same output.

use std::io::{self, Stdout, Write};

use crate::types::{ChatMessage, MessageKind, Sender};

/// ANSI escape code for cyan text (used for the navigator label).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for yellow text (used for answer options).
const ANSI_YELLOW: &str = "\x1b[33m";

/// ANSI escape code for green text (used for notices).
const ANSI_GREEN: &str = "\x1b[32m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// Strips control characters from server- or user-supplied text.
///
/// Newlines and tabs survive; everything else in the control range is
/// dropped so remote strings cannot smuggle terminal escape sequences into
/// the output.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| *c == '\n' || *c == '\t' || !c.is_control())
        .collect()
}

/// Trait for rendering conversation output.
///
/// This abstraction allows for different rendering strategies:
/// - Plain text with ANSI styling
/// - Plain text without styling (for piping/redirecting)
/// - Recording renderers in tests
pub trait Renderer: Send {
    /// Render one transcript message.
    ///
    /// Called exactly once when a message is appended, and again for each
    /// message when a transcript is replayed.
    fn print_message(&mut self, message: &ChatMessage);

    /// Print an out-of-band notice (e.g. "plan generated").
    fn print_notice(&mut self, notice: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);
}

/// Renders every message of a transcript in order.
pub fn render_transcript(messages: &[ChatMessage], renderer: &mut dyn Renderer) {
    for message in messages {
        renderer.print_message(message);
    }
}

/// Plain text renderer with optional ANSI styling.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            use_color: true,
        }
    }

    /// Creates a new PlainTextRenderer with specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
        }
    }

    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }

    fn label(&self, sender: Sender) -> String {
        match (sender, self.use_color) {
            (Sender::User, _) => "You:".to_string(),
            (Sender::Agent, true) => format!("{ANSI_CYAN}Navigator:{ANSI_RESET}"),
            (Sender::Agent, false) => "Navigator:".to_string(),
        }
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_message(&mut self, message: &ChatMessage) {
        let label = self.label(message.sender);
        let text = sanitize(&message.text);
        match &message.kind {
            MessageKind::Plain => {
                println!("{label} {text}");
            }
            MessageKind::Question { options } => {
                println!("{label} {text}");
                for (index, option) in options.iter().enumerate() {
                    let option = sanitize(option);
                    if self.use_color {
                        println!("  {ANSI_YELLOW}[{}]{ANSI_RESET} {option}", index + 1);
                    } else {
                        println!("  [{}] {option}", index + 1);
                    }
                }
            }
            MessageKind::FinalPlan => {
                println!("{label}");
                for line in text.lines() {
                    println!("  {line}");
                }
            }
        }
        self.flush();
    }

    fn print_notice(&mut self, notice: &str) {
        let notice = sanitize(notice);
        if self.use_color {
            println!("{ANSI_GREEN}{notice}{ANSI_RESET}");
        } else {
            println!("{notice}");
        }
        self.flush();
    }

    fn print_error(&mut self, error: &str) {
        eprintln!("\nError: {}", sanitize(error));
    }
}
