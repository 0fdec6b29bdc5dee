use crate::error::Error;
use arch::{symbol, Comp, Dest, Inst, Jump, Value};
use bimap::BiMap;
use std::collections::HashMap;

pub const ROM_SIZE: usize = 0x8000;

/// Variables live below the screen map.
const VAR_END: u16 = 0x4000;

/// A resolved instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    Load(u16),
    Compute(Dest, Comp, Jump),
}

impl Word {
    /// 16-bit machine word: `0vvv..v` for loads, `111a cccc ccdd djjj` for
    /// computes.
    pub fn encode(self) -> u16 {
        match self {
            Word::Load(v) => v & symbol::MAX_LITERAL,
            Word::Compute(dest, comp, jump) => {
                (0b111 << 13) | (comp.bits() << 6) | ((dest.bits() as u16) << 3) | jump.bits() as u16
            }
        }
    }
}

/// Assembly text with every symbol resolved.
#[derive(Debug, Default)]
pub struct Program {
    pub words: Vec<Word>,
    /// Source form of each word, for traces.
    pub insts: Vec<Inst>,
    /// Label -> ROM address.
    pub labels: HashMap<String, u16>,
    /// Variable -> RAM address, in allocation order from 16.
    pub vars: BiMap<String, u16>,
}

impl Program {
    pub fn parse(text: &str) -> Result<Self, Error> {
        let mut prog = Program::default();

        // 1. Parse lines and collect labels
        for (idx, raw) in text.lines().enumerate() {
            let line = match raw.find("//") {
                Some(i) => &raw[..i],
                None => raw,
            }
            .trim();
            if line.is_empty() {
                continue;
            }
            match Inst::parse(line).map_err(|e| Error::Parse(idx + 1, e))? {
                Inst::Label(name) => {
                    let pc = prog.insts.len() as u16;
                    if prog.labels.insert(name.clone(), pc).is_some() {
                        return Err(Error::RedefinedLabel(name));
                    }
                }
                inst => prog.insts.push(inst),
            }
        }
        if prog.insts.len() > ROM_SIZE {
            return Err(Error::RomOverflow(prog.insts.len()));
        }

        // 2. Resolve symbols, allocating variables on first use
        let mut next_var = symbol::VAR_BASE;
        for inst in &prog.insts {
            let word = match inst {
                Inst::At(Value::Num(v)) => Word::Load(*v),
                Inst::At(Value::Sym(name)) => {
                    if let Some(addr) = symbol::predefined(name) {
                        Word::Load(addr)
                    } else if let Some(pc) = prog.labels.get(name) {
                        Word::Load(*pc)
                    } else if let Some(addr) = prog.vars.get_by_left(name) {
                        Word::Load(*addr)
                    } else {
                        if next_var >= VAR_END {
                            return Err(Error::RamOverflow(name.clone()));
                        }
                        prog.vars.insert(name.clone(), next_var);
                        next_var += 1;
                        Word::Load(next_var - 1)
                    }
                }
                Inst::Compute(dest, comp, jump) => Word::Compute(*dest, *comp, *jump),
                Inst::Label(_) => unreachable!("labels are not stored as code"),
            };
            prog.words.push(word);
        }

        Ok(prog)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// RAM address of a predefined symbol or variable.
    pub fn cell(&self, name: &str) -> Option<u16> {
        symbol::predefined(name).or_else(|| self.vars.get_by_left(name).copied())
    }

    /// Name of a RAM address, if it has one.
    pub fn cell_name(&self, addr: u16) -> Option<&str> {
        symbol::PREDEFINED
            .get_by_right(&addr)
            .or_else(|| self.vars.get_by_right(&addr))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_symbols() {
        let prog = Program::parse(
            "// count\n@i\nM=1\n(LOOP)\n@j\nM=M+1\n@i\n@LOOP\n0;JMP\n(END)\n@END\n0;JMP\n@SP\n",
        )
        .unwrap();
        assert_eq!(prog.len(), 10);
        assert_eq!(prog.labels["LOOP"], 2);
        assert_eq!(prog.labels["END"], 7);
        assert_eq!(prog.words[0], Word::Load(16));
        assert_eq!(prog.words[2], Word::Load(17));
        assert_eq!(prog.words[4], Word::Load(16));
        assert_eq!(prog.words[5], Word::Load(2));
        assert_eq!(prog.words[9], Word::Load(0));
        assert_eq!(prog.cell("j"), Some(17));
        assert_eq!(prog.cell_name(16), Some("i"));
        assert_eq!(prog.cell_name(13), Some("R13"));
    }

    #[test]
    fn adjacent_labels() {
        let prog = Program::parse("(A)\n(B)\n@A\n0;JMP\n").unwrap();
        assert_eq!(prog.labels["A"], 0);
        assert_eq!(prog.labels["B"], 0);
    }

    #[test]
    fn rejects() {
        assert!(matches!(
            Program::parse("(X)\n@1\n(X)\n"),
            Err(Error::RedefinedLabel(_))
        ));
        assert!(matches!(
            Program::parse("@1\nD=Q\n"),
            Err(Error::Parse(2, _))
        ));
    }

    #[test]
    fn encodes() {
        let prog = Program::parse("@7\nD=M\nAM=M+1\n0;JMP\nD;JGT\n@SP\nM=D\n").unwrap();
        let bin: Vec<String> = prog.words.iter().map(|w| format!("{:016b}", w.encode())).collect();
        assert_eq!(
            bin,
            vec![
                "0000000000000111",
                "1111110000010000",
                "1111110111101000",
                "1110101010000111",
                "1110001100000001",
                "0000000000000000",
                "1110001100001000",
            ]
        );
    }
}
