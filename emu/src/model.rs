use crate::{
    error::Error,
    program::{Program, Word},
};

pub const RAM_SIZE: usize = 0x8000;

/// A cell named by number or by symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Addr(u16),
    Name(String),
}

impl From<u16> for Cell {
    fn from(addr: u16) -> Self {
        Cell::Addr(addr)
    }
}

impl From<&str> for Cell {
    fn from(name: &str) -> Self {
        Cell::Name(name.to_string())
    }
}

/// CPU registers and data memory running one program.
pub struct Machine {
    pub program: Program,
    pub a: u16,
    pub d: u16,
    pub pc: u16,
    ram: Vec<u16>,
}

impl Machine {
    pub fn new(program: Program) -> Self {
        Machine {
            program,
            a: 0,
            d: 0,
            pc: 0,
            ram: vec![0; RAM_SIZE],
        }
    }

    pub fn load(text: &str) -> Result<Self, Error> {
        Ok(Self::new(Program::parse(text)?))
    }

    pub fn addr(&self, cell: &Cell) -> Result<u16, Error> {
        let addr = match cell {
            Cell::Addr(addr) => *addr,
            Cell::Name(name) => self
                .program
                .cell(name)
                .ok_or_else(|| Error::UnknownCell(name.clone()))?,
        };
        if addr as usize >= RAM_SIZE {
            return Err(Error::UnknownCell(addr.to_string()));
        }
        Ok(addr)
    }

    pub fn get(&self, cell: impl Into<Cell>) -> Result<u16, Error> {
        Ok(self.ram[self.addr(&cell.into())? as usize])
    }

    pub fn set(&mut self, cell: impl Into<Cell>, val: u16) -> Result<(), Error> {
        let addr = self.addr(&cell.into())?;
        self.ram[addr as usize] = val;
        Ok(())
    }

    /// Signed view of a cell.
    pub fn get_i16(&self, cell: impl Into<Cell>) -> Result<i16, Error> {
        self.get(cell).map(|v| v as i16)
    }

    /// The program counter has left the program.
    pub fn is_halted(&self) -> bool {
        self.pc as usize >= self.program.len()
    }

    /// Execute one instruction. Returns its address, or `None` when halted.
    pub fn step(&mut self) -> Result<Option<u16>, Error> {
        if self.is_halted() {
            return Ok(None);
        }
        let pc = self.pc;
        let word = self.program.words[pc as usize];
        match word {
            Word::Load(v) => {
                self.a = v;
                self.pc += 1;
            }
            Word::Compute(dest, comp, jump) => {
                let a = self.a;
                let m = if comp.reads_m() { self.mem(a, pc)? } else { 0 };
                let out = comp.eval(a, self.d, m);

                if dest.writes_m() {
                    self.check(a, pc)?;
                    self.ram[a as usize] = out;
                }
                if dest.writes_a() {
                    self.a = out;
                }
                if dest.writes_d() {
                    self.d = out;
                }

                // target is the address register before this instruction
                self.pc = if jump.taken(out) { a } else { pc + 1 };
            }
        }
        Ok(Some(pc))
    }

    /// Step until halted or `limit` steps ran. Returns the number of steps.
    pub fn run(&mut self, limit: u64) -> Result<u64, Error> {
        let mut steps = 0;
        while steps < limit && self.step()?.is_some() {
            steps += 1;
        }
        Ok(steps)
    }

    fn mem(&self, addr: u16, pc: u16) -> Result<u16, Error> {
        self.check(addr, pc)?;
        Ok(self.ram[addr as usize])
    }

    fn check(&self, addr: u16, pc: u16) -> Result<(), Error> {
        if addr as usize >= RAM_SIZE {
            return Err(Error::BadAddress(addr, pc));
        }
        Ok(())
    }
}
