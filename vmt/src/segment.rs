use crate::error::Error;
use arch::symbol;
use strum::{Display, EnumIter, EnumString};

/// Base of the temp segment (`R5`).
pub const TEMP_BASE: u16 = 5;
/// Number of temp slots (`R5..R12`).
pub const TEMP_LEN: u16 = 8;

/// Memory regions a VM instruction can address.
///
/// `StackTop` is internal: push and pop use it for the stack side of the
/// transfer, and source code cannot name it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Segment {
    Constant,
    Local,
    Argument,
    This,
    That,
    Temp,
    Pointer,
    Static,
    #[strum(serialize = "STACK")]
    StackTop,
}

/// How a segment turns an operand into an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// The operand is the value itself.
    Value,
    /// `RAM[base] + operand`.
    Indirect(&'static str),
    /// `base + operand`, `operand < len`.
    Fixed { base: u16, len: u16 },
    /// The operand picks one of a few pointer cells.
    Select(&'static [&'static str]),
    /// `<unit>.<operand>`, allocated by the assembler.
    Unit,
    /// The cell `RAM[SP]` points at.
    Stack,
}

const POINTERS: &[&str] = &[symbol::THIS, symbol::THAT];

impl Segment {
    pub fn parse(s: &str) -> Result<Self, Error> {
        match s.parse::<Self>() {
            Ok(Segment::StackTop) | Err(_) => Err(Error::UnknownSegment(s.to_string())),
            Ok(seg) => Ok(seg),
        }
    }

    pub fn policy(self) -> Policy {
        match self {
            Segment::Constant => Policy::Value,
            Segment::Local => Policy::Indirect(symbol::LCL),
            Segment::Argument => Policy::Indirect(symbol::ARG),
            Segment::This => Policy::Indirect(symbol::THIS),
            Segment::That => Policy::Indirect(symbol::THAT),
            Segment::Temp => Policy::Fixed {
                base: TEMP_BASE,
                len: TEMP_LEN,
            },
            Segment::Pointer => Policy::Select(POINTERS),
            Segment::Static => Policy::Unit,
            Segment::StackTop => Policy::Stack,
        }
    }
}

impl Policy {
    /// Resolving the address clobbers the accumulator, or the target is a
    /// pointer cell, so a pop must compute the destination before it loads
    /// the popped value.
    pub fn needs_staging(self) -> bool {
        matches!(self, Policy::Indirect(_) | Policy::Select(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn source_names() {
        assert_eq!(Segment::parse("LOCAL").unwrap(), Segment::Local);
        assert_eq!(Segment::parse("POINTER").unwrap(), Segment::Pointer);
        assert!(matches!(
            Segment::parse("local"),
            Err(Error::UnknownSegment(_))
        ));
        assert!(matches!(
            Segment::parse("STACK"),
            Err(Error::UnknownSegment(_))
        ));
    }

    #[test]
    fn staging() {
        let staged: Vec<_> = Segment::iter()
            .filter(|seg| seg.policy().needs_staging())
            .collect();
        assert_eq!(
            staged,
            vec![
                Segment::Local,
                Segment::Argument,
                Segment::This,
                Segment::That,
                Segment::Pointer
            ]
        );
    }
}
