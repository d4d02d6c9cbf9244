//! Terminal rendering for menus, questions and reports.
//!
//! Every function writes to a caller-supplied `Write`, so output can be
//! captured in tests. Colors come from an explicit [`Palette`].

use crate::env::SOURCE_VAR;
use crate::error::ExtractError;
use crate::item::ItemKind;
use crate::quiz::{Question, SessionResult, Tier, Verdict};
use crate::stats::Stats;
use std::io::{Result, Write};

const INSTALL_URL: &str = "https://github.com/nikolay-e/mac-dev-setup";

/// ANSI escape sequences used for output. [`Palette::plain`] has them all empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub green: &'static str,
    pub red: &'static str,
    pub blue: &'static str,
    pub yellow: &'static str,
    pub magenta: &'static str,
    pub cyan: &'static str,
    pub bold: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        if color { Self::ansi() } else { Self::plain() }
    }

    pub fn ansi() -> Self {
        Self {
            green: "\x1b[92m",
            red: "\x1b[91m",
            blue: "\x1b[94m",
            yellow: "\x1b[93m",
            magenta: "\x1b[95m",
            cyan: "\x1b[96m",
            bold: "\x1b[1m",
            reset: "\x1b[0m",
        }
    }

    pub fn plain() -> Self {
        Self {
            green: "",
            red: "",
            blue: "",
            yellow: "",
            magenta: "",
            cyan: "",
            bold: "",
            reset: "",
        }
    }

    fn kind_color(&self, kind: ItemKind) -> &'static str {
        match kind {
            ItemKind::Alias => self.green,
            ItemKind::Function => self.blue,
        }
    }
}

fn kind_symbol(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Alias => "📎",
        ItemKind::Function => "⚙️",
    }
}

fn rule(out: &mut dyn Write, width: usize) -> Result<()> {
    writeln!(out, "{}", "=".repeat(width))
}

pub fn main_menu(out: &mut dyn Write, p: &Palette) -> Result<()> {
    writeln!(out, "\n{}{}🚀 Mac Dev Setup - Learn Shortcuts{}", p.bold, p.cyan, p.reset)?;
    rule(out, 40)?;
    writeln!(out, "1. {}📊 Show Statistics{}", p.green, p.reset)?;
    writeln!(out, "2. {}🎯 Quiz All Items{}", p.magenta, p.reset)?;
    writeln!(out, "3. {}📚 Quiz by Category{}", p.yellow, p.reset)?;
    writeln!(out, "4. {}🎭 Quiz by Type{}", p.blue, p.reset)?;
    writeln!(out, "5. {}🚪 Exit{}", p.red, p.reset)
}

pub fn stats(out: &mut dyn Write, p: &Palette, stats: &Stats) -> Result<()> {
    writeln!(out, "\n{}{}📊 Available Items{}", p.bold, p.cyan, p.reset)?;
    rule(out, 50)?;
    writeln!(out, "Total: {}{}{} items", p.bold, stats.total, p.reset)?;
    writeln!(out, "  • {}{}{} aliases", p.green, stats.by_kind.aliases, p.reset)?;
    writeln!(out, "  • {}{}{} functions", p.blue, stats.by_kind.functions, p.reset)?;

    writeln!(out, "\n{}By Category:{}", p.bold, p.reset)?;
    for (category, counts) in &stats.by_category {
        writeln!(
            out,
            "  {}{:<15}{} {:>2} aliases, {:>2} functions",
            p.yellow, category, p.reset, counts.aliases, counts.functions
        )?;
    }
    Ok(())
}

/// Numbered list of categories, in the order of `stats.by_category`.
pub fn category_menu(out: &mut dyn Write, p: &Palette, stats: &Stats) -> Result<()> {
    writeln!(out, "\n{}{}📚 Select Category{}", p.bold, p.cyan, p.reset)?;
    rule(out, 30)?;
    for (idx, (category, counts)) in stats.by_category.iter().enumerate() {
        writeln!(
            out,
            "{:>2}. {}{:<15}{} ({} items)",
            idx + 1,
            p.yellow,
            category,
            p.reset,
            counts.total()
        )?;
    }
    Ok(())
}

pub fn kind_menu(out: &mut dyn Write, p: &Palette) -> Result<()> {
    writeln!(out, "\n{}{}🎯 Select Type{}", p.bold, p.cyan, p.reset)?;
    rule(out, 25)?;
    writeln!(out, "1. {}Aliases only{}", p.green, p.reset)?;
    writeln!(out, "2. {}Functions only{}", p.blue, p.reset)
}

/// Prompt text for a menu choice, e.g. `Choose option (1-5): `.
pub fn choice_prompt(p: &Palette, what: &str, max: usize) -> String {
    format!("\n{}Choose {what} (1-{max}): {}", p.bold, p.reset)
}

pub fn answer_prompt(p: &Palette) -> String {
    format!("   {}Enter command: {}", p.bold, p.reset)
}

pub fn quiz_header(out: &mut dyn Write, p: &Palette, title: &str, total: usize) -> Result<()> {
    writeln!(out, "\n{}{}🎓 {title} Quiz{}", p.bold, p.magenta, p.reset)?;
    rule(out, title.chars().count() + 10)?;
    writeln!(out, "Total items: {}{total}{}", p.bold, p.reset)?;
    writeln!(out, "{}Press Ctrl+C to quit at any time{}\n", p.cyan, p.reset)
}

pub fn question(out: &mut dyn Write, p: &Palette, question: &Question<'_>) -> Result<()> {
    let item = question.item;
    writeln!(
        out,
        "{}[{}/{}]{} {}{}{} {}{}{}",
        p.bold,
        question.number,
        question.total,
        p.reset,
        p.kind_color(item.kind()),
        kind_symbol(item.kind()),
        p.reset,
        p.yellow,
        item.category(),
        p.reset
    )?;
    writeln!(out, "   {}", item.description())
}

pub fn feedback(
    out: &mut dyn Write,
    p: &Palette,
    question: &Question<'_>,
    verdict: Verdict,
) -> Result<()> {
    match verdict {
        Verdict::Correct => writeln!(out, "   {}✅ Correct!{}\n", p.green, p.reset),
        Verdict::Incorrect => {
            writeln!(out, "   {}❌ Incorrect{}", p.red, p.reset)?;
            writeln!(
                out,
                "   {}Answer:{} {}{}{}",
                p.bold,
                p.reset,
                p.cyan,
                question.item.name(),
                p.reset
            )?;
            writeln!(out, "   {}Runs:{} {}\n", p.bold, p.reset, question.item.command())
        }
    }
}

pub fn interrupted(out: &mut dyn Write, p: &Palette) -> Result<()> {
    writeln!(out, "\n\n{}Quiz interrupted by user.{}\n", p.yellow, p.reset)
}

pub fn nothing_to_quiz(out: &mut dyn Write, p: &Palette) -> Result<()> {
    writeln!(out, "{}No items found to quiz on.{}", p.red, p.reset)
}

pub fn invalid_choice(out: &mut dyn Write, p: &Palette) -> Result<()> {
    writeln!(out, "{}Invalid choice!{}", p.red, p.reset)
}

pub fn invalid_menu_choice(out: &mut dyn Write, p: &Palette, options: usize) -> Result<()> {
    writeln!(out, "{}Invalid choice! Please enter 1-{options}.{}", p.red, p.reset)
}

pub fn cancelled(out: &mut dyn Write, p: &Palette) -> Result<()> {
    writeln!(out, "\n{}Cancelled.{}", p.yellow, p.reset)
}

/// Final score and a tier message mentioning the quiz title.
pub fn summary(out: &mut dyn Write, p: &Palette, title: &str, result: &SessionResult) -> Result<()> {
    let percentage = result.percentage().unwrap_or(0.0);
    writeln!(out, "\n{}{}🏆 Final Score{}", p.bold, p.cyan, p.reset)?;
    rule(out, 20)?;
    writeln!(
        out,
        "Score: {}{}/{}{} ({percentage:.1}%)",
        p.bold, result.score, result.total, p.reset
    )?;

    let title = title.to_lowercase();
    match result.tier() {
        Some(Tier::Perfect) => {
            writeln!(out, "{}🎉 Perfect! You know all the {title}!{}", p.green, p.reset)?
        }
        Some(Tier::Excellent) => writeln!(
            out,
            "{}🌟 Excellent! You know most of the {title}.{}",
            p.green, p.reset
        )?,
        Some(Tier::Good) => {
            writeln!(out, "{}👍 Good progress! Keep practicing.{}", p.yellow, p.reset)?
        }
        Some(Tier::GettingThere) => writeln!(
            out,
            "{}📚 Getting there! These shortcuts will save you time.{}",
            p.yellow, p.reset
        )?,
        Some(Tier::NeedsPractice) => writeln!(
            out,
            "{}📖 Keep practicing - these tools boost productivity!{}",
            p.red, p.reset
        )?,
        None => {}
    }
    writeln!(out)
}

/// Diagnostic for a definitions file that could not be loaded.
pub fn source_error(out: &mut dyn Write, p: &Palette, err: &ExtractError) -> Result<()> {
    if err.is_missing() {
        writeln!(out, "{}Alias file not found: {}{}", p.red, err.path().display(), p.reset)?;
        writeln!(out, "\nMake sure mac-dev-setup is installed and aliases are linked.")
    } else {
        writeln!(out, "{}Error reading alias file: {err}{}", p.red, p.reset)
    }
}

pub fn source_unknown(out: &mut dyn Write, p: &Palette) -> Result<()> {
    writeln!(
        out,
        "{}Cannot locate the alias file: no home directory and {SOURCE_VAR} is not set.{}",
        p.red, p.reset
    )
}

pub fn install_hint(out: &mut dyn Write, p: &Palette) -> Result<()> {
    writeln!(out, "{}Please install mac-dev-setup first: {INSTALL_URL}{}", p.red, p.reset)
}

pub fn goodbye(out: &mut dyn Write, p: &Palette) -> Result<()> {
    writeln!(out, "\n{}Goodbye! 👋{}", p.cyan, p.reset)
}

pub fn farewell(out: &mut dyn Write, p: &Palette) -> Result<()> {
    writeln!(out, "{}Happy coding! 🎉{}", p.cyan, p.reset)
}
