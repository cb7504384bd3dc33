//! # Prompts
//!
//! Single-choice selection prompts.
//!
//! ## Prompt Flavours
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TermPrompter (stdin and stdout are a terminal)                         │
//! │                                                                         │
//! │    ? Select a food item (Enter 'No, that's all' to finish)              │
//! │    > Veg Burger Rs. 115.0          ↑/k  ↓/j  move (wraps)               │
//! │      Veg Wrap Rs. 130.0            Enter    confirm                     │
//! │      ...                                                                │
//! │                                                                         │
//! │  NumberedPrompter (piped input, or --plain)                             │
//! │                                                                         │
//! │    ? Select a food item (Enter 'No, that's all' to finish)              │
//! │      1) Veg Burger Rs. 115.0                                            │
//! │      2) Veg Wrap Rs. 130.0                                              │
//! │      ...                                                                │
//! │      Answer: 1                     index or exact label                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both return the chosen label exactly as offered. Resolving it back to a
//! menu option is the catalog's job.

use std::io::{self, BufRead, IsTerminal, Write};

use colored::Colorize;
use console::{Key, Term};
use tracing::debug;

/// Something that can ask the user to pick one of several labels.
pub trait Prompter {
    /// Shows `message` and `choices`, blocks until one is picked, and
    /// returns the picked label.
    fn select(&mut self, message: &str, choices: &[String]) -> io::Result<String>;
}

impl<P: Prompter + ?Sized> Prompter for Box<P> {
    fn select(&mut self, message: &str, choices: &[String]) -> io::Result<String> {
        (**self).select(message, choices)
    }
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn select(&mut self, message: &str, choices: &[String]) -> io::Result<String> {
        (**self).select(message, choices)
    }
}

/// Picks the prompt flavour for the current process.
///
/// The arrow-key list needs both ends to be a terminal; anything else gets
/// the numbered list.
pub fn for_terminal(force_plain: bool) -> Box<dyn Prompter> {
    let term = Term::stdout();
    let attended = term.is_term() && io::stdin().is_terminal();

    if attended && !force_plain {
        debug!("using arrow-key prompt");
        Box::new(TermPrompter::new(term))
    } else {
        debug!(force_plain, "using numbered prompt");
        Box::new(NumberedPrompter::new(io::stdin().lock(), io::stdout()))
    }
}

fn ensure_choices(choices: &[String]) -> io::Result<()> {
    if choices.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "no choices to select from",
        ));
    }
    Ok(())
}

fn question(message: &str) -> String {
    format!("{} {}", "?".green().bold(), message.bold())
}

// =============================================================================
// Arrow-key Prompt
// =============================================================================

/// Arrow-key list drawn on a terminal.
pub struct TermPrompter {
    term: Term,
}

impl TermPrompter {
    pub fn new(term: Term) -> Self {
        TermPrompter { term }
    }

    fn draw(&self, message: &str, choices: &[String], cursor: usize) -> io::Result<()> {
        self.term.write_line(&question(message))?;
        for (idx, choice) in choices.iter().enumerate() {
            if idx == cursor {
                self.term
                    .write_line(&format!("{} {}", ">".cyan().bold(), choice.cyan()))?;
            } else {
                self.term.write_line(&format!("  {}", choice))?;
            }
        }
        Ok(())
    }

    fn navigate(&self, message: &str, choices: &[String]) -> io::Result<usize> {
        let mut cursor = 0;
        loop {
            self.draw(message, choices, cursor)?;
            let key = self.term.read_key()?;
            self.term.clear_last_lines(choices.len() + 1)?;

            match key {
                Key::ArrowUp | Key::Char('k') => {
                    cursor = (cursor + choices.len() - 1) % choices.len();
                }
                Key::ArrowDown | Key::Char('j') | Key::Tab => {
                    cursor = (cursor + 1) % choices.len();
                }
                Key::Enter => return Ok(cursor),
                _ => {}
            }
        }
    }
}

impl Prompter for TermPrompter {
    fn select(&mut self, message: &str, choices: &[String]) -> io::Result<String> {
        ensure_choices(choices)?;

        self.term.hide_cursor()?;
        let picked = self.navigate(message, choices);
        self.term.show_cursor()?;
        let idx = picked?;

        self.term
            .write_line(&format!("{} {}", question(message), choices[idx].cyan()))?;
        Ok(choices[idx].clone())
    }
}

// =============================================================================
// Numbered Prompt
// =============================================================================

/// Numbered list read line by line.
///
/// An answer is either a 1-based index or the exact label. Anything else
/// re-asks; end of input is an `UnexpectedEof` error.
pub struct NumberedPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> NumberedPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        NumberedPrompter { input, output }
    }

    fn read_answer(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a choice was made",
            ));
        }
        Ok(line.trim().to_string())
    }
}

/// Maps an answer to a choice index.
pub fn parse_answer(answer: &str, choices: &[String]) -> Option<usize> {
    let answer = answer.trim();
    if let Ok(number) = answer.parse::<usize>() {
        return (1..=choices.len()).contains(&number).then(|| number - 1);
    }
    choices.iter().position(|choice| choice == answer)
}

impl<R: BufRead, W: Write> Prompter for NumberedPrompter<R, W> {
    fn select(&mut self, message: &str, choices: &[String]) -> io::Result<String> {
        ensure_choices(choices)?;

        writeln!(self.output, "{}", question(message))?;
        for (idx, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {}", idx + 1, choice)?;
        }

        loop {
            write!(self.output, "  Answer: ")?;
            self.output.flush()?;

            let answer = self.read_answer()?;
            match parse_answer(&answer, choices) {
                Some(idx) => return Ok(choices[idx].clone()),
                None => {
                    debug!(%answer, "rejected answer");
                    writeln!(
                        self.output,
                        "{}",
                        format!("Please enter a number between 1 and {}", choices.len()).yellow()
                    )?;
                }
            }
        }
    }
}

// =============================================================================
// Scripted Prompt (tests)
// =============================================================================

/// Replays a fixed list of answers; used to drive whole sessions in tests.
#[cfg(test)]
pub(crate) struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    pub(crate) asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub(crate) fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompter {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn select(&mut self, message: &str, _choices: &[String]) -> io::Result<String> {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    }
}
