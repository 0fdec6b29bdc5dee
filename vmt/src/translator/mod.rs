mod arith;
mod resolve;
mod stack;

pub use resolve::{Staged, SCRATCH};

use crate::{
    emitter::Emitter,
    error::{Diag, Error},
    labels::Labels,
    parser::Command,
    source::Unit,
};
use arch::Inst;
use std::ops::Range;

/// Translation state of one compilation unit.
///
/// Owns the output and the address cursor; never shared between units since
/// static cells and labels are named after the unit.
#[derive(Debug)]
pub struct Context {
    unit: String,
    em: Emitter,
    labels: Labels,
}

impl Context {
    pub fn new(unit: &str) -> Self {
        Context {
            unit: unit.to_string(),
            em: Emitter::new(),
            labels: Labels::new(unit),
        }
    }

    pub fn translate(&mut self, cmd: &Command) -> Result<(), Error> {
        match *cmd {
            Command::Push(seg, operand) => self.push(seg, operand),
            Command::Pop(seg, operand) => self.pop(seg, operand),
            Command::Arith(op) => self.arith(op),
        }
    }

    /// Number of instructions emitted so far.
    pub fn len(&self) -> usize {
        self.em.len()
    }

    pub fn is_empty(&self) -> bool {
        self.em.is_empty()
    }

    pub fn finish(self) -> Vec<Inst> {
        self.em.finish()
    }
}

/// Output of one unit.
#[derive(Debug)]
pub struct Translation {
    pub insts: Vec<Inst>,
    /// For each translated source line, its raw line index and the output
    /// range it produced.
    pub spans: Vec<(usize, Range<usize>)>,
}

impl Translation {
    pub fn text(&self) -> String {
        let mut out = String::new();
        for inst in &self.insts {
            out.push_str(&inst.to_string());
            out.push('\n');
        }
        out
    }
}

/// Translate a whole unit, stopping at the first error.
pub fn translate_unit(unit: &Unit) -> Result<Translation, Diag> {
    let mut ctx = Context::new(&unit.name);
    let mut spans = Vec::with_capacity(unit.lines.len());

    for line in &unit.lines {
        let start = ctx.len();
        Command::parse(&line.code)
            .and_then(|cmd| ctx.translate(&cmd))
            .map_err(|error| Diag {
                file: unit.path.clone(),
                line_idx: line.idx,
                raw: line.raw.clone(),
                error,
            })?;
        spans.push((line.idx, start..ctx.len()));
    }

    Ok(Translation {
        insts: ctx.finish(),
        spans,
    })
}
