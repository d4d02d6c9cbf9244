//! Line input for menus and quiz answers.
//!
//! [`Terminal`] reads from the real terminal through rustyline, [`ScriptedInput`]
//! replays a fixed list of inputs so the whole menu can be exercised in tests.

use crate::quiz::{Prompter, Question, Reply, Verdict};
use crate::render::{self, Palette};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::collections::VecDeque;
use std::io::Write;
use tracing::warn;

/// One read from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl+C
    Interrupted,
    /// Ctrl+D or closed input
    Eof,
}

/// Source of user input lines.
pub trait LineSource {
    /// Show `prompt` and read one line.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Input>;
}

/// Interactive terminal input with line editing and answer history.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()
                .map_err(|err| anyhow::anyhow!("failed to initialize line editor: {err}"))?,
        })
    }
}

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor
                        .add_history_entry(line.as_str())
                        .map_err(|err| anyhow::anyhow!("failed to record history: {err}"))?;
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(anyhow::anyhow!("failed to read line: {err}")),
        }
    }
}

/// Memory-backed input. Yields [`Input::Eof`] once the script is exhausted.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    inputs: VecDeque<Input>,
    /// Prompts shown so far, in order.
    pub prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = Input>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    /// Convenience: every entry is a typed line.
    pub fn from_lines<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self::new(lines.into_iter().map(|l| Input::Line(l.into())))
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Input> {
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front().unwrap_or(Input::Eof))
    }
}

/// [`Prompter`] that renders questions to a writer and reads answers from a
/// [`LineSource`].
///
/// Read failures end the session like a cancellation; write failures are logged
/// and otherwise ignored so that a score is always produced.
pub struct ConsolePrompter<'a> {
    input: &'a mut dyn LineSource,
    out: &'a mut dyn Write,
    palette: &'a Palette,
}

impl<'a> ConsolePrompter<'a> {
    pub fn new(input: &'a mut dyn LineSource, out: &'a mut dyn Write, palette: &'a Palette) -> Self {
        Self {
            input,
            out,
            palette,
        }
    }
}

impl Prompter for ConsolePrompter<'_> {
    fn ask(&mut self, question: &Question<'_>) -> Reply {
        let shown = render::question(self.out, self.palette, question).and_then(|()| self.out.flush());
        if let Err(err) = shown {
            warn!(error = %err, "failed to write question");
        }

        match self.input.read_line(&render::answer_prompt(self.palette)) {
            Ok(Input::Line(line)) => Reply::Answer(line),
            Ok(Input::Interrupted | Input::Eof) => Reply::Cancel,
            Err(err) => {
                warn!(error = %err, "failed to read answer, ending session");
                Reply::Cancel
            }
        }
    }

    fn feedback(&mut self, question: &Question<'_>, verdict: Verdict) {
        if let Err(err) = render::feedback(self.out, self.palette, question, verdict) {
            warn!(error = %err, "failed to write feedback");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::quiz::run_session;
    use crate::select::select_all;

    #[test]
    fn test_scripted_input_replays_then_reports_eof() {
        let mut input = ScriptedInput::new([Input::Line("1".to_string()), Input::Interrupted]);
        assert_eq!(input.read_line("a> ").unwrap(), Input::Line("1".to_string()));
        assert_eq!(input.read_line("b> ").unwrap(), Input::Interrupted);
        assert_eq!(input.read_line("c> ").unwrap(), Input::Eof);
        assert_eq!(input.prompts, vec!["a> ", "b> ", "c> "]);
    }

    #[test]
    fn test_console_prompter_runs_a_session() {
        let items = vec![Item::alias("gs", "git status", "Show working tree status", "Git")];
        let mut input = ScriptedInput::from_lines(["gs"]);
        let mut out: Vec<u8> = Vec::new();
        let palette = Palette::plain();

        let result = {
            let mut prompter = ConsolePrompter::new(&mut input, &mut out, &palette);
            run_session(&select_all(&items), &mut prompter)
        };

        assert_eq!(result.score, 1);
        assert_eq!(input.prompts, vec!["   Enter command: "]);
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("[1/1]"));
        assert!(s.contains("Show working tree status"));
        assert!(s.contains("✅ Correct!"));
    }

    #[test]
    fn test_console_prompter_cancels_on_interrupt() {
        let items = vec![
            Item::alias("gs", "git status", "Show status", "Git"),
            Item::alias("gd", "git diff", "Show diff", "Git"),
        ];
        let mut input = ScriptedInput::new([Input::Interrupted]);
        let mut out: Vec<u8> = Vec::new();
        let palette = Palette::plain();

        let result = {
            let mut prompter = ConsolePrompter::new(&mut input, &mut out, &palette);
            run_session(&select_all(&items), &mut prompter)
        };

        assert_eq!(result.score, 0);
        assert_eq!(result.total, 2);
        assert_eq!(result.answered, 0);
    }
}
