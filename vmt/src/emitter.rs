use arch::{Comp, Dest, Inst, Value};

/// What the address register is known to hold.
///
/// The emitter keeps this as `Option<Address>`; `None` means nothing is known
/// and the next `point_to` always emits a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Address {
    /// A numeric literal loaded with `@n`.
    Literal(u16),
    /// The address of a symbol, loaded with `@name`.
    Symbol(String),
    /// The value stored in a symbol's cell, loaded with `@name` + `A=M`.
    Deref(String),
}

/// Append-only output with a cursor over the address register.
///
/// Every address load goes through [`Emitter::point_to`]. Everything else goes
/// through [`Emitter::append`], which keeps the cursor honest for any
/// instruction that overwrites the register or is a jump target.
#[derive(Debug, Default)]
pub struct Emitter {
    output: Vec<Inst>,
    cursor: Option<Address>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Option<&Address> {
        self.cursor.as_ref()
    }

    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Make the address register hold `target`, emitting only what the cursor
    /// says is missing.
    pub fn point_to(&mut self, target: Address) {
        if self.cursor.as_ref() == Some(&target) {
            return;
        }
        match target {
            Address::Literal(v) => self.append(Inst::at_num(v)),
            Address::Symbol(name) => self.append(Inst::at_sym(name)),
            Address::Deref(name) => {
                self.point_to(Address::Symbol(name.clone()));
                self.append(Inst::assign(Dest::A, Comp::M));
                self.cursor = Some(Address::Deref(name));
            }
        }
    }

    /// Append one instruction and update the cursor for its effect on the
    /// address register.
    pub fn append(&mut self, inst: Inst) {
        match &inst {
            Inst::At(Value::Num(v)) => self.cursor = Some(Address::Literal(*v)),
            Inst::At(Value::Sym(s)) => self.cursor = Some(Address::Symbol(s.clone())),
            Inst::Compute(dest, _, _) if dest.writes_a() => self.cursor = None,
            Inst::Compute(..) => {}
            // reachable from any jump, so the register is whatever the jumper held
            Inst::Label(_) => self.cursor = None,
        }
        self.output.push(inst);
    }

    pub fn finish(self) -> Vec<Inst> {
        self.output
    }
}
