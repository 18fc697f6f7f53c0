//! Terminal implementation of [`View`] using colored output and dialoguer prompts.

use colored::*;
use dialoguer::Confirm;
use tracing::warn;

use super::format::{ExpiryLabel, HistoryRow, ResultPanel};
use super::view::View;

/// Prints session events to stdout; loading and errors go to stderr.
///
/// History indices are shown 1-based.
#[derive(Debug, Clone, Default)]
pub struct TerminalView {
    /// Answer every confirmation with yes (`--yes`).
    pub assume_yes: bool,
    /// Print the history list whenever it is re-rendered.
    pub show_history: bool,
}

impl TerminalView {
    pub fn new(assume_yes: bool, show_history: bool) -> Self {
        Self {
            assume_yes,
            show_history,
        }
    }
}

impl View for TerminalView {
    fn show_loading(&mut self) {
        eprintln!("{}", "⏳ Shortening...".bright_black());
    }

    fn hide_loading(&mut self) {}

    fn show_result(&mut self, panel: &ResultPanel) {
        println!();
        println!("{}", "✅ URL shortened".green().bold());
        println!();
        println!("  Short URL: {}", panel.short_url.bright_yellow().bold());
        println!("  Original:  {}", panel.original_url.cyan());
        println!("  Created:   {}", panel.created_at.bright_black());
        if let Some(ref expires_at) = panel.expires_at {
            println!("  Expires:   {}", expires_at.yellow());
        }
        println!();
    }

    fn hide_result(&mut self) {}

    fn show_error(&mut self, message: &str) {
        eprintln!("{} {}", "❌ Error:".red().bold(), message.red());
    }

    fn hide_error(&mut self) {}

    fn show_validation_error(&mut self, message: &str) {
        eprintln!("{} {}", "⚠️  Invalid URL:".yellow().bold(), message.yellow());
    }

    fn clear_validation_error(&mut self) {}

    fn render_history(&mut self, rows: &[HistoryRow]) {
        if !self.show_history {
            return;
        }

        println!("{}", "📋 Recent URLs".bright_blue().bold());
        println!();

        if rows.is_empty() {
            println!("{}", "  No history yet".yellow());
            println!();
            return;
        }

        println!(
            "  {:<3} {:<36} {:<12} {}",
            "#".bright_white().bold(),
            "Short URL".bright_white().bold(),
            "Created".bright_white().bold(),
            "Status".bright_white().bold()
        );
        println!("  {}", "─".repeat(75).bright_black());

        for row in rows {
            let status = match row.expiry {
                Some(ExpiryLabel::Expired) => "Expired".red().bold(),
                Some(ref label) => label.to_string().bright_yellow(),
                None => "Active".green(),
            };
            let short_url = if row.is_expired {
                row.short_url.bright_black()
            } else {
                row.short_url.cyan()
            };

            println!(
                "  {:<3} {:<36} {:<12} {}",
                (row.index + 1).to_string().bright_black(),
                short_url,
                row.created.bright_black(),
                status
            );
            println!("      {}", row.original_url.bright_black());
        }

        println!();
        println!("  Total: {}", rows.len().to_string().bright_white().bold());
        println!();
    }

    fn reset_form(&mut self) {}

    fn toast(&mut self, message: &str) {
        println!("{}", format!("✨ {message}").green());
    }

    fn select_text(&mut self, text: &str) {
        println!("  {}", text.bright_yellow().bold().underline());
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .unwrap_or_else(|e| {
                warn!("Confirmation prompt failed: {}", e);
                false
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assume_yes_skips_prompt() {
        let mut view = TerminalView::new(true, false);
        assert!(view.confirm("Clear?"));
    }

    #[test]
    fn test_default_is_quiet_and_asks() {
        let view = TerminalView::default();
        assert!(!view.assume_yes);
        assert!(!view.show_history);
    }
}
