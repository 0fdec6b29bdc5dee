use super::{Context, SCRATCH};
use crate::{emitter::Address, error::Error, labels::CmpLabels, parser::Op, segment::Segment};
use arch::{Comp, Dest, Inst, Jump};

impl Context {
    /// Pop the operands, compute in D and push the result.
    pub(super) fn arith(&mut self, op: Op) -> Result<(), Error> {
        // y, or the only operand
        self.fetch_into(Segment::StackTop, 0, true)?;

        match op {
            Op::Neg => self.em.append(Inst::assign(Dest::D, Comp::NegD)),
            Op::Not => self.em.append(Inst::assign(Dest::D, Comp::NotD)),
            Op::Add | Op::Sub | Op::And | Op::Or => {
                let comp = match op {
                    Op::Add => Comp::DPlusM,
                    Op::Sub => Comp::MMinusD,
                    Op::And => Comp::DAndM,
                    _ => Comp::DOrM,
                };
                // x stays in memory; only the pointer moves
                self.fetch_into(Segment::StackTop, 0, false)?;
                self.em.append(Inst::assign(Dest::D, comp));
                self.decrement_sp();
            }
            Op::Eq | Op::Gt | Op::Lt => {
                let jump = match op {
                    Op::Eq => Jump::JEQ,
                    Op::Gt => Jump::JGT,
                    _ => Jump::JLT,
                };
                let labels = self.labels.fresh();
                self.order(&labels)?;
                self.truth(jump, &labels);
                self.decrement_sp();
            }
        }

        self.write_from(Segment::StackTop, 0, None, true)
    }

    /// With y in D and x on the stack top, leave in D a value that is
    /// negative, zero or positive as x is below, equal to or above y.
    ///
    /// `x - y` only when the signs agree; otherwise the sign of x decides,
    /// as ±1.
    fn order(&mut self, labels: &CmpLabels) -> Result<(), Error> {
        self.em.point_to(scratch());
        self.em.append(Inst::assign(Dest::M, Comp::D));
        self.fetch_into(Segment::StackTop, 0, false)?;
        self.em.append(Inst::assign(Dest::D, Comp::M));
        self.em.point_to(Address::Symbol(labels.x_neg.clone()));
        self.em.append(Inst::branch(Comp::D, Jump::JLT));

        // x >= 0
        self.em.point_to(scratch());
        self.em.append(Inst::assign(Dest::D, Comp::M));
        self.em.point_to(Address::Symbol(labels.same_sign.clone()));
        self.em.append(Inst::branch(Comp::D, Jump::JGE));
        self.em.append(Inst::assign(Dest::D, Comp::One));
        self.em.point_to(Address::Symbol(labels.ready.clone()));
        self.em.append(Inst::branch(Comp::Zero, Jump::JMP));

        // x < 0
        self.em.append(Inst::Label(labels.x_neg.clone()));
        self.em.point_to(scratch());
        self.em.append(Inst::assign(Dest::D, Comp::M));
        self.em.point_to(Address::Symbol(labels.same_sign.clone()));
        self.em.append(Inst::branch(Comp::D, Jump::JLT));
        self.em.append(Inst::assign(Dest::D, Comp::MinusOne));
        self.em.point_to(Address::Symbol(labels.ready.clone()));
        self.em.append(Inst::branch(Comp::Zero, Jump::JMP));

        self.em.append(Inst::Label(labels.same_sign.clone()));
        self.fetch_into(Segment::StackTop, 0, false)?;
        self.em.append(Inst::assign(Dest::D, Comp::M));
        self.em.point_to(scratch());
        self.em.append(Inst::assign(Dest::D, Comp::DMinusM));

        self.em.append(Inst::Label(labels.ready.clone()));
        Ok(())
    }

    /// Turn D into -1 when `jump` holds on it and 0 otherwise.
    fn truth(&mut self, jump: Jump, labels: &CmpLabels) {
        self.em.point_to(Address::Symbol(labels.on_true.clone()));
        self.em.append(Inst::branch(Comp::D, jump));
        self.em.append(Inst::assign(Dest::D, Comp::Zero));
        self.em.point_to(Address::Symbol(labels.end.clone()));
        self.em.append(Inst::branch(Comp::Zero, Jump::JMP));

        self.em.append(Inst::Label(labels.on_true.clone()));
        self.em.append(Inst::assign(Dest::D, Comp::MinusOne));

        self.em.append(Inst::Label(labels.end.clone()));
    }
}

fn scratch() -> Address {
    Address::Symbol(SCRATCH.to_string())
}
