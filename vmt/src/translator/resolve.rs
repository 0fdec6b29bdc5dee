use super::Context;
use crate::{
    emitter::Address,
    error::Error,
    segment::{Policy, Segment},
};
use arch::{symbol, Comp, Dest, Inst};

/// Cell that holds a pop destination while the stack is read.
pub const SCRATCH: &str = "R13";

/// A destination address parked in [`SCRATCH`], returned by
/// [`Context::stage`] and consumed by the write that follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staged {
    pub(super) segment: Segment,
    pub(super) cell: &'static str,
}

impl Context {
    /// Leave the address register on the cell for `seg[operand]`.
    ///
    /// For `Constant` the register holds the value itself. `Indirect` segments
    /// use the accumulator to carry the offset, so it is clobbered.
    pub(super) fn resolve(&mut self, seg: Segment, operand: u16) -> Result<(), Error> {
        match seg.policy() {
            Policy::Value => self.em.point_to(literal(operand)?),
            Policy::Indirect(base) => {
                self.em.point_to(literal(operand)?);
                self.em.append(Inst::assign(Dest::D, Comp::A));
                self.em.point_to(Address::Symbol(base.to_string()));
                self.em.append(Inst::assign(Dest::A, Comp::DPlusM));
            }
            Policy::Fixed { base, len } => {
                if operand >= len {
                    return Err(Error::OperandOutOfRange(seg, operand, len - 1));
                }
                self.em.point_to(Address::Literal(base + operand));
            }
            Policy::Select(cells) => {
                let cell = cells.get(operand as usize).ok_or(Error::OperandOutOfRange(
                    seg,
                    operand,
                    cells.len() as u16 - 1,
                ))?;
                self.em.point_to(Address::Symbol(cell.to_string()));
            }
            Policy::Unit => {
                let name = format!("{}.{}", self.unit, operand);
                self.em.point_to(Address::Symbol(name));
            }
            Policy::Stack => self.em.point_to(Address::Deref(symbol::SP.to_string())),
        }
        Ok(())
    }

    /// Compute the address of `seg[operand]` and park it in the scratch cell.
    pub(super) fn stage(&mut self, seg: Segment, operand: u16) -> Result<Staged, Error> {
        self.resolve(seg, operand)?;
        self.em.append(Inst::assign(Dest::D, Comp::A));
        self.em.point_to(Address::Symbol(SCRATCH.to_string()));
        self.em.append(Inst::assign(Dest::M, Comp::D));
        Ok(Staged {
            segment: seg,
            cell: SCRATCH,
        })
    }
}

fn literal(v: u16) -> Result<Address, Error> {
    if v > symbol::MAX_LITERAL {
        return Err(Error::LiteralTooLarge(v));
    }
    Ok(Address::Literal(v))
}
