use super::{Program, Runtime, Word};
use crate::error;
use crate::lang::Error;
use itertools::Itertools;
use std::ops::Range;

type Result<T> = std::result::Result<T, Error>;

/// ## Amplifier circuits
///
/// Several machines built from one program, each seeded with its own
/// phase setting. Signals move between them only through
/// `append_input`; the machines share nothing.

pub struct Circuit {
    stages: Vec<Runtime>,
}

impl Circuit {
    pub fn new(program: &Program, phases: &[Word]) -> Circuit {
        let stages = phases
            .iter()
            .map(|&phase| {
                let mut runtime = Runtime::new(program.clone());
                runtime.append_input(phase);
                runtime
            })
            .collect();
        Circuit { stages }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Pass `signal` through every stage once, each stage producing
    /// exactly one output for the next.
    pub fn pipeline(&mut self, signal: Word) -> Result<Word> {
        self.check_stages()?;
        let mut signal = signal;
        for (index, stage) in self.stages.iter_mut().enumerate() {
            stage.append_input(signal);
            signal = match stage.run_to_next_output()? {
                Some(value) => value,
                None => return Err(no_signal(index)),
            };
        }
        Ok(signal)
    }

    /// Feed the last stage's output back into the first until the
    /// first stage halts. Returns the last signal the final stage wrote.
    pub fn feedback(&mut self, signal: Word) -> Result<Word> {
        self.check_stages()?;
        let mut signal = signal;
        let mut last = None;
        'ring: loop {
            for (index, stage) in self.stages.iter_mut().enumerate() {
                stage.append_input(signal);
                match stage.run_to_next_output()? {
                    Some(value) => signal = value,
                    None if index == 0 => break 'ring,
                    None => return Err(no_signal(index)),
                }
            }
            last = Some(signal);
        }
        last.ok_or_else(|| no_signal(0))
    }

    fn check_stages(&self) -> Result<()> {
        if self.stages.is_empty() {
            Err(error!(InternalError; "EMPTY CIRCUIT"))
        } else {
            Ok(())
        }
    }
}

fn no_signal(stage: usize) -> Error {
    error!(InternalError; &format!("STAGE {} HALTED WITHOUT SIGNAL", stage))
}

/// Try every ordering of `phases` and return the best one with its signal.
pub fn max_signal(
    program: &Program,
    phases: Range<Word>,
    feedback: bool,
) -> Result<Option<(Vec<Word>, Word)>> {
    let count = phases.clone().count();
    if count == 0 {
        return Ok(None);
    }
    let mut best: Option<(Vec<Word>, Word)> = None;
    for order in phases.permutations(count) {
        let mut circuit = Circuit::new(program, &order);
        let signal = if feedback {
            circuit.feedback(0)?
        } else {
            circuit.pipeline(0)?
        };
        if best.as_ref().map_or(true, |(_, b)| signal > *b) {
            best = Some((order, signal));
        }
    }
    tracing::debug!(?best, feedback, "phase search");
    Ok(best)
}
