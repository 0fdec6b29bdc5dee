use crate::{error::Error, segment::Segment};
use strum::{Display, EnumIter, EnumString};

/// Zero-operand stack operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Op {
    Add,
    Sub,
    Neg,
    Eq,
    Gt,
    Lt,
    And,
    Or,
    Not,
}

/// One parsed source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Push(Segment, u16),
    Pop(Segment, u16),
    Arith(Op),
}

impl Command {
    /// Parse one normalized (trimmed, upper-cased, comment-free) line.
    pub fn parse(code: &str) -> Result<Command, Error> {
        let words: Vec<&str> = code.split_whitespace().collect();

        match words.as_slice() {
            [op] => match op.parse::<Op>() {
                Ok(op) => Ok(Command::Arith(op)),
                Err(_) if is_transfer(op) => Err(Error::MalformedInstruction(code.to_string())),
                Err(_) => Err(Error::UnknownOperation(op.to_string())),
            },
            [op, seg, operand] => {
                if !is_transfer(op) {
                    return match op.parse::<Op>() {
                        Ok(_) => Err(Error::MalformedInstruction(code.to_string())),
                        Err(_) => Err(Error::UnknownOperation(op.to_string())),
                    };
                }
                let seg = Segment::parse(seg)?;
                // plain decimal digits only; `u16::from_str` would take a sign
                let operand = Some(*operand)
                    .filter(|s| s.bytes().all(|b| b.is_ascii_digit()))
                    .and_then(|s| s.parse::<u16>().ok())
                    .ok_or_else(|| Error::InvalidOperand(code.to_string()))?;
                match *op {
                    "PUSH" => Ok(Command::Push(seg, operand)),
                    _ => Ok(Command::Pop(seg, operand)),
                }
            }
            _ => Err(Error::MalformedInstruction(code.to_string())),
        }
    }
}

fn is_transfer(op: &str) -> bool {
    op == "PUSH" || op == "POP"
}
