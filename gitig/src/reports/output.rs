//! Output trait for rendering reports to different formats.

use console::Style;

/// Target output for reports.
///
/// Reports describe *what* to output using these semantic methods.
/// Implementations decide *how* to render it.
pub trait Output {
    /// Start a new section with a heading.
    fn section(&mut self, name: &str);

    /// Render a key-value pair.
    fn key_value(&mut self, key: &str, value: &str);

    /// Render a bullet list item.
    fn list_item(&mut self, text: &str);

    /// Render an added item (e.g., applied template).
    fn added_item(&mut self, text: &str);

    /// Render a removed item (e.g., skipped pattern).
    fn removed_item(&mut self, text: &str);

    /// Render a completed action.
    fn success(&mut self, msg: &str);

    /// Render a warning message.
    fn warning(&mut self, msg: &str);

    /// Render a secondary hint.
    fn hint(&mut self, msg: &str);

    /// Render text exactly as given, such as a template body.
    fn preformatted(&mut self, text: &str);

    /// Render a blank line.
    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    /// Render this report to the given output.
    fn render(&self, out: &mut dyn Output);
}

/// Terminal output implementation.
///
/// In quiet mode only data (sections, list items, preformatted text) and
/// warnings are printed.
pub struct TerminalOutput {
    quiet: bool,
}

impl TerminalOutput {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Output for TerminalOutput {
    fn section(&mut self, name: &str) {
        println!("{}", Style::new().bold().apply_to(format!("{name}:")));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}: {}", Style::new().dim().apply_to(key), value);
        }
    }

    fn list_item(&mut self, text: &str) {
        println!("  {text}");
    }

    fn added_item(&mut self, text: &str) {
        if !self.quiet {
            println!("  {} {}", Style::new().green().apply_to("+"), text);
        }
    }

    fn removed_item(&mut self, text: &str) {
        if !self.quiet {
            println!("  {} {}", Style::new().dim().apply_to("-"), text);
        }
    }

    fn success(&mut self, msg: &str) {
        if !self.quiet {
            println!("{} {}", Style::new().green().apply_to("✓"), msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{} {}", Style::new().yellow().apply_to("⚠"), msg);
    }

    fn hint(&mut self, msg: &str) {
        if !self.quiet {
            println!("{}", Style::new().dim().apply_to(msg));
        }
    }

    fn preformatted(&mut self, text: &str) {
        if text.ends_with('\n') {
            print!("{text}");
        } else {
            println!("{text}");
        }
    }

    fn newline(&mut self) {
        if !self.quiet {
            println!();
        }
    }
}

/// Output that records calls as plain lines, for asserting on reports.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingOutput {
    pub lines: Vec<String>,
}

#[cfg(test)]
impl RecordingOutput {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
impl Output for RecordingOutput {
    fn section(&mut self, name: &str) {
        self.lines.push(format!("{name}:"));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("  {key}: {value}"));
    }

    fn list_item(&mut self, text: &str) {
        self.lines.push(format!("  {text}"));
    }

    fn added_item(&mut self, text: &str) {
        self.lines.push(format!("  + {text}"));
    }

    fn removed_item(&mut self, text: &str) {
        self.lines.push(format!("  - {text}"));
    }

    fn success(&mut self, msg: &str) {
        self.lines.push(format!("ok {msg}"));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("warning: {msg}"));
    }

    fn hint(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }

    fn preformatted(&mut self, text: &str) {
        self.lines.push(text.trim_end_matches('\n').to_string());
    }

    fn newline(&mut self) {
        self.lines.push(String::new());
    }
}
