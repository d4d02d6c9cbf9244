use crate::console::{ConsolePrompter, Input, LineSource};
use crate::extractor::load_items;
use crate::item::{Item, ItemKind};
use crate::quiz::{Outcome, SessionResult, run_session_with_rng};
use crate::render::{self, Palette};
use crate::select::Selection;
use crate::stats::compute_stats;
use anyhow::{Context, Result};
use rand::RngCore;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

const MENU_OPTIONS: usize = 5;

/// Load the definitions file, reporting problems to `out` instead of failing.
///
/// An unknown location, an unreadable file and a file without definitions all
/// print the install hint and yield an empty pool.
pub fn load_or_report(
    source: Option<&Path>,
    out: &mut dyn Write,
    palette: &Palette,
) -> Result<Vec<Item>> {
    let items = match source {
        Some(path) => match load_items(path) {
            Ok(items) => items,
            Err(err) => {
                warn!(error = %err, "could not load shortcut definitions");
                render::source_error(out, palette, &err)?;
                Vec::new()
            }
        },
        None => {
            warn!("no home directory and no definitions file given");
            render::source_unknown(out, palette)?;
            Vec::new()
        }
    };

    if items.is_empty() {
        render::install_hint(out, palette)?;
    }
    Ok(items)
}

/// The interactive front end: menus, quiz screens and reports over one item pool.
///
/// Input comes from a [`LineSource`] and output goes to any writer, so the
/// same code drives the real terminal and scripted tests.
///
/// Example
/// ```
/// use learn_aliases::app::App;
/// use learn_aliases::console::ScriptedInput;
/// use learn_aliases::render::Palette;
/// use learn_aliases::{Item, select::Selection};
///
/// let items = vec![Item::alias("gs", "git status", "Show status", "Git")];
/// let input = ScriptedInput::from_lines(["gs"]);
/// let mut app = App::new(items, Palette::plain(), Box::new(input), Box::new(std::io::sink()));
/// let result = app.quiz(&Selection::All).unwrap();
/// assert_eq!(result.score, 1);
/// ```
pub struct App {
    items: Vec<Item>,
    palette: Palette,
    input: Box<dyn LineSource>,
    out: Box<dyn Write>,
    rng: Box<dyn RngCore>,
}

impl App {
    pub fn new(
        items: Vec<Item>,
        palette: Palette,
        input: Box<dyn LineSource>,
        out: Box<dyn Write>,
    ) -> Self {
        Self {
            items,
            palette,
            input,
            out,
            rng: Box::new(rand::rng()),
        }
    }

    /// Replace the random source used to order questions.
    pub fn with_rng(mut self, rng: Box<dyn RngCore>) -> Self {
        self.rng = rng;
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn show_stats(&mut self) -> Result<()> {
        render::stats(self.out.as_mut(), &self.palette, &compute_stats(&self.items))?;
        Ok(())
    }

    /// Run one quiz over the items picked by `selection` and print the summary.
    ///
    /// An empty selection prints a notice and returns an empty result.
    pub fn quiz(&mut self, selection: &Selection) -> Result<SessionResult> {
        let selected = selection.apply(&self.items);
        if selected.is_empty() {
            render::nothing_to_quiz(self.out.as_mut(), &self.palette)?;
            return Ok(SessionResult::empty());
        }

        let title = selection.title();
        debug!(quiz = %title, items = selected.len(), "starting quiz");
        render::quiz_header(self.out.as_mut(), &self.palette, &title, selected.len())?;

        let result = {
            let mut prompter =
                ConsolePrompter::new(self.input.as_mut(), self.out.as_mut(), &self.palette);
            run_session_with_rng(&selected, &mut prompter, self.rng.as_mut())
        };

        if result.outcome == Outcome::Abandoned {
            render::interrupted(self.out.as_mut(), &self.palette)?;
        }
        render::summary(self.out.as_mut(), &self.palette, &title, &result)?;
        self.out.flush().context("failed to flush output")?;
        Ok(result)
    }

    /// Ask for a category and quiz on it. `None` when the user backed out.
    pub fn quiz_by_category(&mut self) -> Result<Option<SessionResult>> {
        let stats = compute_stats(&self.items);
        render::category_menu(self.out.as_mut(), &self.palette, &stats)?;
        let categories: Vec<&String> = stats.by_category.keys().collect();

        let prompt = render::choice_prompt(&self.palette, "category", categories.len());
        let choice = match self.read_choice(&prompt)? {
            Some(choice) => choice,
            None => {
                render::cancelled(self.out.as_mut(), &self.palette)?;
                return Ok(None);
            }
        };

        let Ok(index) = choice.parse::<usize>() else {
            render::cancelled(self.out.as_mut(), &self.palette)?;
            return Ok(None);
        };

        match index.checked_sub(1).and_then(|i| categories.get(i)) {
            Some(&category) => {
                let selection = Selection::Category(category.clone());
                self.quiz(&selection).map(Some)
            }
            None => {
                render::invalid_choice(self.out.as_mut(), &self.palette)?;
                Ok(None)
            }
        }
    }

    /// Ask for aliases or functions and quiz on them. `None` when the user backed out.
    pub fn quiz_by_kind(&mut self) -> Result<Option<SessionResult>> {
        render::kind_menu(self.out.as_mut(), &self.palette)?;
        let prompt = render::choice_prompt(&self.palette, "type", 2);

        let kind = match self.read_choice(&prompt)?.as_deref() {
            Some("1") => ItemKind::Alias,
            Some("2") => ItemKind::Function,
            Some(_) => {
                render::invalid_choice(self.out.as_mut(), &self.palette)?;
                return Ok(None);
            }
            None => {
                render::cancelled(self.out.as_mut(), &self.palette)?;
                return Ok(None);
            }
        };

        self.quiz(&Selection::Kind(kind)).map(Some)
    }

    /// Main menu loop. Returns when the user picks exit or interrupts the menu.
    pub fn run_menu(&mut self) -> Result<()> {
        loop {
            render::main_menu(self.out.as_mut(), &self.palette)?;
            let prompt = render::choice_prompt(&self.palette, "option", MENU_OPTIONS);

            match self.read_choice(&prompt)?.as_deref() {
                Some("1") => self.show_stats()?,
                Some("2") => {
                    self.quiz(&Selection::All)?;
                }
                Some("3") => {
                    self.quiz_by_category()?;
                }
                Some("4") => {
                    self.quiz_by_kind()?;
                }
                Some("5") => {
                    render::farewell(self.out.as_mut(), &self.palette)?;
                    break;
                }
                Some(_) => {
                    render::invalid_menu_choice(self.out.as_mut(), &self.palette, MENU_OPTIONS)?;
                }
                None => {
                    render::goodbye(self.out.as_mut(), &self.palette)?;
                    break;
                }
            }
        }
        self.out.flush().context("failed to flush output")?;
        Ok(())
    }

    /// Read a trimmed menu choice; `None` on Ctrl+C or end of input.
    fn read_choice(&mut self, prompt: &str) -> Result<Option<String>> {
        self.out.flush().context("failed to flush output")?;
        match self.input.read_line(prompt)? {
            Input::Line(line) => Ok(Some(line.trim().to_string())),
            Input::Interrupted | Input::Eof => Ok(None),
        }
    }
}
