//! Input collaborator seam.
//!
//! The core never reads a terminal. Whenever a decision is needed (which
//! command, which item, on whom) it asks a [`Prompt`] and validates the
//! answer against the offered labels. Unknown answers are asked again; a
//! [`Selection::Pass`] yields "no selection".

use std::collections::VecDeque;

/// Raw answer returned by an input collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Free-text label, matched case-insensitively against the options.
    Label(String),
    /// Cancel / pass.
    Pass,
}

impl Selection {
    /// Interprets the conventional `pass` word as [`Selection::Pass`].
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("pass") {
            Self::Pass
        } else {
            Self::Label(trimmed.to_owned())
        }
    }
}

/// Blocking source of decisions.
pub trait Prompt {
    /// Asks `question` with the given labeled options.
    fn prompt_choice(&mut self, question: &str, options: &[String]) -> Selection;

    /// Whether a human (or script) stands behind this prompt.
    ///
    /// Non-interactive prompts are never asked; the caller applies its
    /// automatic policy instead.
    fn is_interactive(&self) -> bool {
        true
    }
}

/// Asks until the answer names one of `options`, returning its index.
///
/// Returns `None` on pass or when there is nothing to choose from.
pub fn choose(prompt: &mut dyn Prompt, question: &str, options: &[String]) -> Option<usize> {
    if options.is_empty() || !prompt.is_interactive() {
        return None;
    }

    loop {
        match prompt.prompt_choice(question, options) {
            Selection::Pass => return None,
            Selection::Label(label) => {
                let label = label.trim();
                if let Some(index) = options
                    .iter()
                    .position(|option| option.eq_ignore_ascii_case(label))
                {
                    return Some(index);
                }
                tracing::debug!("unrecognized answer {:?} to {:?}", label, question);
            }
        }
    }
}

/// Prompt for combatants without a controller. Never asked.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoPilot;

impl Prompt for AutoPilot {
    fn prompt_choice(&mut self, _question: &str, _options: &[String]) -> Selection {
        Selection::Pass
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Replays a fixed list of answers, then passes.
///
/// Useful for tests and scripted replays. Every question asked is recorded.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for ScriptedPrompt {
    fn prompt_choice(&mut self, question: &str, _options: &[String]) -> Selection {
        self.asked.push(question.to_owned());
        match self.answers.pop_front() {
            Some(answer) => Selection::from_input(&answer),
            None => Selection::Pass,
        }
    }
}
