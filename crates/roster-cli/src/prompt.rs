//! Yes/no confirmation on the terminal.

use std::io::{self, BufRead, Write};

use roster_model::Locale;
use roster_view::{ConfirmPrompt, ConfirmationGate, Decision};

/// Asks on `output` and reads the answer from `input`.
///
/// Only an explicit yes confirms (`y`, `yes`, `e`, `evet`, any case). An
/// empty line, end of input or a read error declines.
pub struct TerminalGate<R, W> {
    input: R,
    output: W,
    locale: Locale,
}

impl<R: BufRead, W: Write> TerminalGate<R, W> {
    pub fn new(input: R, output: W, locale: Locale) -> Self {
        Self {
            input,
            output,
            locale,
        }
    }

    fn ask(&mut self, prompt: &ConfirmPrompt) -> io::Result<String> {
        writeln!(self.output, "{}", prompt.title(self.locale))?;
        write!(
            self.output,
            "{} [{}] (y/N): ",
            prompt.message,
            prompt.action_label(self.locale)
        )?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }
}

impl TerminalGate<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr, answer on stdin.
    pub fn stdio(locale: Locale) -> Self {
        Self::new(io::stdin().lock(), io::stderr(), locale)
    }
}

/// Whether `answer` means yes.
pub fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "e" | "evet"
    )
}

impl<R: BufRead, W: Write> ConfirmationGate for TerminalGate<R, W> {
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Decision {
        match self.ask(prompt) {
            Ok(answer) => Decision::from(is_yes(&answer)),
            Err(e) => {
                tracing::warn!("Could not read confirmation: {e}");
                Decision::Declined
            }
        }
    }
}
