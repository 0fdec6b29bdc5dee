use super::{resolve::Staged, Context};
use crate::{emitter::Address, error::Error, segment::Segment};
use arch::{symbol, Comp, Dest, Inst};

impl Context {
    pub(super) fn push(&mut self, seg: Segment, operand: u16) -> Result<(), Error> {
        self.fetch_into(seg, operand, true)?;
        self.write_from(Segment::StackTop, 0, None, true)
    }

    pub(super) fn pop(&mut self, seg: Segment, operand: u16) -> Result<(), Error> {
        if seg == Segment::Constant {
            return Err(Error::NotWritable(seg));
        }
        let staged = if seg.policy().needs_staging() {
            Some(self.stage(seg, operand)?)
        } else {
            None
        };
        self.fetch_into(Segment::StackTop, 0, true)?;
        self.write_from(seg, operand, staged.as_ref(), true)
    }

    /// Point at `seg[operand]` and, with `load`, read it into D.
    ///
    /// On the stack this addresses the top element; a load also pops it.
    pub(super) fn fetch_into(&mut self, seg: Segment, operand: u16, load: bool) -> Result<(), Error> {
        if seg == Segment::StackTop {
            self.em.point_to(sp());
            self.em.append(Inst::assign(Dest::A, Comp::MMinusOne));
            if load {
                self.em.append(Inst::assign(Dest::D, Comp::M));
                self.em.point_to(sp());
                self.em.append(Inst::assign(Dest::M, Comp::MMinusOne));
            }
            return Ok(());
        }

        self.resolve(seg, operand)?;
        if load {
            let comp = match seg {
                Segment::Constant => Comp::A,
                _ => Comp::M,
            };
            self.em.append(Inst::assign(Dest::D, comp));
        }
        Ok(())
    }

    /// Point at `seg[operand]` and, with `store`, write D into it.
    ///
    /// On the stack this addresses the first free slot; a store also pushes.
    /// Segments whose address needs the accumulator must have been staged.
    pub(super) fn write_from(
        &mut self,
        seg: Segment,
        operand: u16,
        staged: Option<&Staged>,
        store: bool,
    ) -> Result<(), Error> {
        let policy = seg.policy();
        if seg == Segment::Constant {
            return Err(Error::NotWritable(seg));
        }

        if policy.needs_staging() {
            let staged = match staged {
                Some(staged) if staged.segment == seg => staged,
                _ => return Err(Error::UnstagedDestination(seg)),
            };
            self.em.point_to(Address::Deref(staged.cell.to_string()));
        } else {
            self.resolve(seg, operand)?;
        }

        if store {
            self.em.append(Inst::assign(Dest::M, Comp::D));
            if seg == Segment::StackTop {
                self.em.point_to(sp());
                self.em.append(Inst::assign(Dest::M, Comp::MPlusOne));
            }
        }
        Ok(())
    }

    /// Drop the top slot without reading it.
    pub(super) fn decrement_sp(&mut self) {
        self.em.point_to(sp());
        self.em.append(Inst::assign(Dest::M, Comp::MMinusOne));
    }
}

fn sp() -> Address {
    Address::Symbol(symbol::SP.to_string())
}
