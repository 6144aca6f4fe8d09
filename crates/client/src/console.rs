//! Line-oriented terminal I/O.
//!
//! Battles need a prompt and an observer at the same time, and both talk to
//! the same terminal. [`Console`] keeps its reader and writer behind
//! `RefCell`s so that `&Console` can serve as either.

use std::cell::RefCell;
use std::io::{BufRead, Write};

use tilequest_core::{BattleEvent, BattleObserver, Prompt, Selection};

use crate::render;

pub struct Console<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
        }
    }

    /// Prints `text` as-is.
    pub fn print(&self, text: &str) {
        let mut output = self.output.borrow_mut();
        if let Err(e) = output.write_all(text.as_bytes()).and_then(|_| output.flush()) {
            tracing::warn!("failed to write to terminal: {}", e);
        }
    }

    pub fn say(&self, line: &str) {
        self.print(line);
        self.print("\n");
    }

    /// Reads one trimmed line. `None` at end of input.
    pub fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_owned()),
            Err(e) => {
                tracing::warn!("failed to read from terminal: {}", e);
                None
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}

impl<R: BufRead, W: Write> Prompt for &Console<R, W> {
    fn prompt_choice(&mut self, question: &str, options: &[String]) -> Selection {
        self.say(question);
        self.say(&format!("  [{}] (or pass)", options.join(", ")));
        self.print("> ");
        match self.read_line() {
            Some(answer) => Selection::from_input(&answer),
            // Nobody left to answer.
            None => Selection::Pass,
        }
    }
}

impl<R: BufRead, W: Write> BattleObserver for &Console<R, W> {
    fn on_event(&mut self, event: &BattleEvent) {
        self.say(&render::battle_line(event));
    }
}
