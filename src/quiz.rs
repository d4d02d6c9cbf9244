//! The quiz session state machine.
//!
//! A [`Session`] owns a shuffled working copy of the selected items and walks
//! through it one question at a time. All interaction goes through a
//! [`Prompter`], so the engine itself never touches the terminal.

use crate::item::Item;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use tracing::{debug, info};

/// One question as shown to the user. `number` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question<'a> {
    pub number: usize,
    pub total: usize,
    pub item: &'a Item,
}

/// What the user did when asked a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Answer(String),
    /// The user asked to stop (Ctrl+C, end of input).
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// The input/output side of a quiz.
///
/// Implementations render questions and feedback however they like; the
/// session only needs a reply for each question.
pub trait Prompter {
    /// Show `question` and wait for the user's reply.
    fn ask(&mut self, question: &Question<'_>) -> Reply;

    /// Report the verdict for the answer just given. On an incorrect answer
    /// the expected name and command are available through `question.item`.
    fn feedback(&mut self, question: &Question<'_>, verdict: Verdict);
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every question was asked.
    Completed,
    /// The user stopped before the last question.
    Abandoned,
    /// There was nothing to ask.
    Empty,
}

/// Qualitative rating of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    NeedsPractice,
    GettingThere,
    Good,
    Excellent,
    Perfect,
}

impl Tier {
    /// Rate `score` out of `total`. There is no tier for an empty session.
    pub fn from_score(score: usize, total: usize) -> Option<Tier> {
        if total == 0 {
            return None;
        }
        let tier = if score >= total {
            Tier::Perfect
        } else if score * 100 >= total * 80 {
            Tier::Excellent
        } else if score * 100 >= total * 60 {
            Tier::Good
        } else if score * 100 >= total * 40 {
            Tier::GettingThere
        } else {
            Tier::NeedsPractice
        };
        Some(tier)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Perfect => "perfect",
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::GettingThere => "getting there",
            Tier::NeedsPractice => "needs practice",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final numbers of a session.
///
/// `total` is always the size of the selected pool, even when the session was
/// abandoned early; `answered` is how many questions were actually answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionResult {
    pub score: usize,
    pub total: usize,
    pub answered: usize,
    pub outcome: Outcome,
}

impl SessionResult {
    pub fn empty() -> Self {
        Self {
            score: 0,
            total: 0,
            answered: 0,
            outcome: Outcome::Empty,
        }
    }

    pub fn tier(&self) -> Option<Tier> {
        Tier::from_score(self.score, self.total)
    }

    /// Score as a percentage of the full pool, `None` for an empty session.
    pub fn percentage(&self) -> Option<f64> {
        (self.total > 0).then(|| self.score as f64 * 100.0 / self.total as f64)
    }
}

/// A running quiz over a private, shuffled copy of the selected items.
#[derive(Debug)]
pub struct Session<'a> {
    queue: Vec<&'a Item>,
    position: usize,
    score: usize,
    abandoned: bool,
}

impl<'a> Session<'a> {
    /// Start a session, putting `items` in a uniformly random order.
    pub fn new<R: Rng + ?Sized>(items: &[&'a Item], rng: &mut R) -> Self {
        let mut queue = items.to_vec();
        queue.shuffle(rng);
        Self {
            queue,
            position: 0,
            score: 0,
            abandoned: false,
        }
    }

    /// The question waiting for an answer, if any.
    pub fn current(&self) -> Option<Question<'a>> {
        if self.is_finished() {
            return None;
        }
        self.queue.get(self.position).map(|&item| Question {
            number: self.position + 1,
            total: self.queue.len(),
            item,
        })
    }

    /// Check `answer` against the current question and move on.
    ///
    /// Surrounding whitespace is ignored, the comparison is otherwise exact and
    /// case-sensitive. Returns `None` once the session is over.
    pub fn answer(&mut self, answer: &str) -> Option<Verdict> {
        let question = self.current()?;
        self.position += 1;
        if answer.trim() == question.item.name() {
            self.score += 1;
            Some(Verdict::Correct)
        } else {
            Some(Verdict::Incorrect)
        }
    }

    /// Stop asking. Whatever was scored so far is kept.
    pub fn cancel(&mut self) {
        if self.position < self.queue.len() {
            self.abandoned = true;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.abandoned || self.position >= self.queue.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn finish(self) -> SessionResult {
        let outcome = if self.queue.is_empty() {
            Outcome::Empty
        } else if self.abandoned {
            Outcome::Abandoned
        } else {
            Outcome::Completed
        };
        SessionResult {
            score: self.score,
            total: self.queue.len(),
            answered: self.position,
            outcome,
        }
    }
}

/// Run a full quiz over `items` using the thread-local random source.
pub fn run_session<P: Prompter + ?Sized>(items: &[&Item], prompter: &mut P) -> SessionResult {
    run_session_with_rng(items, prompter, &mut rand::rng())
}

/// Run a full quiz over `items`, shuffling with `rng`.
///
/// An empty pool returns immediately without prompting.
pub fn run_session_with_rng<P, R>(items: &[&Item], prompter: &mut P, rng: &mut R) -> SessionResult
where
    P: Prompter + ?Sized,
    R: Rng + ?Sized,
{
    if items.is_empty() {
        debug!("empty pool, not starting a session");
        return SessionResult::empty();
    }

    let mut session = Session::new(items, rng);
    debug!(total = items.len(), "session started");

    while let Some(question) = session.current() {
        match prompter.ask(&question) {
            Reply::Answer(answer) => {
                if let Some(verdict) = session.answer(&answer) {
                    prompter.feedback(&question, verdict);
                }
            }
            Reply::Cancel => session.cancel(),
        }
    }

    let result = session.finish();
    info!(
        score = result.score,
        total = result.total,
        answered = result.answered,
        outcome = ?result.outcome,
        "session finished"
    );
    result
}
