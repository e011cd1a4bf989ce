//! Scripted collaborators for driving operations without a terminal
//!
//! [`ScriptedPrompter`] answers prompts from a queue, [`RecordingReporter`]
//! captures console messages and [`RecordingRunner`] records shell-outs
//! instead of running them.

use hookpilot_core::{CommandRunner, Error, Level, Prompter, Reporter, Result};
use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

/// One queued answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Answer to [`Prompter::select`]
    Select(usize),
    /// Answer to [`Prompter::multi_select`]
    MultiSelect(Vec<usize>),
    /// Answer to [`Prompter::confirm`]
    Confirm(bool),
    /// Answer to [`Prompter::input`]
    Input(String),
}

/// Prompter answering from a fixed script
///
/// A prompt with no queued answer, or with an answer of the wrong kind,
/// fails with [`Error::Prompt`].
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    /// Prompter that will give `answers` in order
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// Prompts shown so far
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.borrow().len()
    }

    fn next(&self, prompt: &str) -> Result<Answer> {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::Prompt(format!("no scripted answer for '{prompt}'")))
    }
}

fn unexpected(prompt: &str, answer: &Answer) -> Error {
    Error::Prompt(format!("unexpected answer {answer:?} for '{prompt}'"))
}

impl Prompter for ScriptedPrompter {
    fn select(&self, prompt: &str, items: &[String], _default: usize) -> Result<usize> {
        match self.next(prompt)? {
            Answer::Select(index) if index < items.len() => Ok(index),
            other => Err(unexpected(prompt, &other)),
        }
    }

    fn multi_select(&self, prompt: &str, items: &[String]) -> Result<Vec<usize>> {
        match self.next(prompt)? {
            Answer::MultiSelect(indices) if indices.iter().all(|&i| i < items.len()) => {
                Ok(indices)
            }
            other => Err(unexpected(prompt, &other)),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool> {
        match self.next(prompt)? {
            Answer::Confirm(yes) => Ok(yes),
            other => Err(unexpected(prompt, &other)),
        }
    }

    fn input(&self, prompt: &str, _default: Option<&str>) -> Result<String> {
        match self.next(prompt)? {
            Answer::Input(text) => Ok(text),
            other => Err(unexpected(prompt, &other)),
        }
    }
}

/// Reporter keeping every message in memory
#[derive(Debug, Default)]
pub struct RecordingReporter {
    messages: RefCell<Vec<(Level, String)>>,
}

impl RecordingReporter {
    /// Empty reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages in emission order
    pub fn messages(&self) -> Vec<(Level, String)> {
        self.messages.borrow().clone()
    }

    /// Messages emitted at `level`
    pub fn at(&self, level: Level) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Whether any message at `level` contains `needle`
    pub fn contains(&self, level: Level, needle: &str) -> bool {
        self.at(level).iter().any(|message| message.contains(needle))
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, level: Level, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

/// One recorded shell-out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommand {
    /// Program name
    pub program: String,
    /// Arguments
    pub args: Vec<String>,
    /// Working directory
    pub dir: PathBuf,
}

/// Runner that records commands and succeeds, unless told to fail
#[derive(Debug, Default)]
pub struct RecordingRunner {
    commands: RefCell<Vec<RecordedCommand>>,
    failing: HashSet<String>,
}

impl RecordingRunner {
    /// Runner where every command succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every invocation of `program` fail
    #[must_use]
    pub fn failing(mut self, program: &str) -> Self {
        self.failing.insert(program.to_string());
        self
    }

    /// Commands run so far
    pub fn commands(&self) -> Vec<RecordedCommand> {
        self.commands.borrow().clone()
    }

    /// Commands run so far as `program arg...` lines
    pub fn command_lines(&self) -> Vec<String> {
        self.commands
            .borrow()
            .iter()
            .map(|c| {
                std::iter::once(c.program.as_str())
                    .chain(c.args.iter().map(String::as_str))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<()> {
        self.commands.borrow_mut().push(RecordedCommand {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
            dir: dir.to_path_buf(),
        });
        if self.failing.contains(program) {
            return Err(Error::CommandFailed {
                command: format!("{program} {}", args.join(" ")),
                message: "exit status: 1".to_string(),
            });
        }
        Ok(())
    }
}
