//! Gesture scripts: pointer input laid out over frames.
//!
//! One command per line. `#` starts a comment and blank lines are skipped.
//!
//! ```text
//! down <x> [y]    press the left button
//! move <x> [y]    move the pointer
//! up [x] [y]      release the left button
//! leave           pointer leaves the surface
//! wait <frames>   tick that many frames
//! settle          tick until animations stop
//! ```

use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;

use thiserror::Error;

use crate::input::{Event, MouseButton};

#[derive(Debug, Error, PartialEq)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: `{command}` is missing an argument")]
    MissingArgument { line: usize, command: String },
    #[error("line {line}: `{command}` takes fewer arguments")]
    UnexpectedArgument { line: usize, command: String },
    #[error("line {line}: invalid coordinate `{value}`")]
    InvalidCoordinate {
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("line {line}: invalid frame count `{value}`")]
    InvalidFrameCount {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// One scripted step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Deliver a pointer event without ticking
    Input(Event),
    /// Tick this many frames
    Wait(usize),
    /// Tick until nothing is animating
    Settle,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    steps: Vec<Step>,
}

impl Script {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn parse(source: &str) -> Result<Self, ScriptError> {
        let mut steps = Vec::new();
        for (index, raw) in source.lines().enumerate() {
            let line = index + 1;
            let content = raw.split('#').next().unwrap_or_default().trim();
            if content.is_empty() {
                continue;
            }
            steps.push(parse_step(line, content)?);
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Script::parse(s)
    }
}

fn parse_step(line: usize, content: &str) -> Result<Step, ScriptError> {
    let mut words = content.split_whitespace();
    let command = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let arity = |min: usize, max: usize| -> Result<(), ScriptError> {
        if args.len() < min {
            Err(ScriptError::MissingArgument {
                line,
                command: command.to_string(),
            })
        } else if args.len() > max {
            Err(ScriptError::UnexpectedArgument {
                line,
                command: command.to_string(),
            })
        } else {
            Ok(())
        }
    };

    let coord = |value: &str| -> Result<f32, ScriptError> {
        value
            .parse::<f32>()
            .map_err(|source| ScriptError::InvalidCoordinate {
                line,
                value: value.to_string(),
                source,
            })
    };

    let point = || -> Result<(f32, f32), ScriptError> {
        let x = match args.first() {
            Some(&value) => coord(value)?,
            None => 0.0,
        };
        let y = match args.get(1) {
            Some(&value) => coord(value)?,
            None => 0.0,
        };
        Ok((x, y))
    };

    match command {
        "down" => {
            arity(1, 2)?;
            let (x, y) = point()?;
            Ok(Step::Input(Event::MouseDown {
                x,
                y,
                button: MouseButton::Left,
            }))
        }
        "move" => {
            arity(1, 2)?;
            let (x, y) = point()?;
            Ok(Step::Input(Event::MouseMove { x, y }))
        }
        "up" => {
            arity(0, 2)?;
            let (x, y) = point()?;
            Ok(Step::Input(Event::MouseUp {
                x,
                y,
                button: MouseButton::Left,
            }))
        }
        "leave" => {
            arity(0, 0)?;
            Ok(Step::Input(Event::MouseLeave))
        }
        "wait" => {
            arity(1, 1)?;
            let frames = args[0]
                .parse::<usize>()
                .map_err(|source| ScriptError::InvalidFrameCount {
                    line,
                    value: args[0].to_string(),
                    source,
                })?;
            Ok(Step::Wait(frames))
        }
        "settle" => {
            arity(0, 0)?;
            Ok(Step::Settle)
        }
        other => Err(ScriptError::UnknownCommand {
            line,
            command: other.to_string(),
        }),
    }
}
