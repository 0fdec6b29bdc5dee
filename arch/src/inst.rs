use crate::{comp::Comp, dest::Dest, error::Error, jump::Jump, symbol};

use color_print::cformat;
use std::fmt;

/// Operand of an address load.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Num(u16),
    Sym(String),
}

impl Value {
    pub fn parse(s: &str) -> Result<Self, Error> {
        if s.starts_with(|c: char| c.is_ascii_digit()) {
            return match s.parse::<u16>() {
                Ok(v) if v <= symbol::MAX_LITERAL => Ok(Value::Num(v)),
                Ok(_) => Err(Error::LiteralTooLarge(s.to_string())),
                Err(_) if s.chars().all(|c| c.is_ascii_digit()) => {
                    Err(Error::LiteralTooLarge(s.to_string()))
                }
                Err(_) => Err(Error::InvalidSymbol(s.to_string())),
            };
        }
        if symbol::is_symbol(s) {
            Ok(Value::Sym(s.to_string()))
        } else {
            Err(Error::InvalidSymbol(s.to_string()))
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Num(v) => write!(f, "{v}"),
            Value::Sym(s) => write!(f, "{s}"),
        }
    }
}

/// One line of target code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inst {
    /// `@value`: loads the address register.
    At(Value),
    /// `dest=comp;jump`
    Compute(Dest, Comp, Jump),
    /// `(NAME)`: branch target, emits no word.
    Label(String),
}

impl Inst {
    pub fn at_num(v: u16) -> Self {
        Inst::At(Value::Num(v))
    }

    pub fn at_sym(s: impl Into<String>) -> Self {
        Inst::At(Value::Sym(s.into()))
    }

    /// `dest=comp`
    pub fn assign(dest: Dest, comp: Comp) -> Self {
        Inst::Compute(dest, comp, Jump::Null)
    }

    /// `comp;jump`
    pub fn branch(comp: Comp, jump: Jump) -> Self {
        Inst::Compute(Dest::Null, comp, jump)
    }

    pub fn label(name: impl Into<String>) -> Self {
        Inst::Label(name.into())
    }

    /// Labels take no ROM slot.
    pub fn is_code(&self) -> bool {
        !matches!(self, Inst::Label(_))
    }

    /// Parse one comment-free, trimmed line.
    pub fn parse(line: &str) -> Result<Self, Error> {
        let syntax = |why: String| Error::Syntax(line.to_string(), why);

        if let Some(value) = line.strip_prefix('@') {
            return Value::parse(value).map(Inst::At);
        }

        if let Some(inner) = line.strip_prefix('(') {
            let name = inner
                .strip_suffix(')')
                .ok_or_else(|| syntax("unclosed label".to_string()))?;
            if !symbol::is_symbol(name) {
                return Err(Error::InvalidSymbol(name.to_string()));
            }
            return Ok(Inst::Label(name.to_string()));
        }

        let (dest, rest) = match line.split_once('=') {
            Some((d, rest)) => (Dest::parse(d).map_err(syntax)?, rest),
            None => (Dest::Null, line),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((c, j)) => (c, Jump::parse(j).map_err(syntax)?),
            None => (rest, Jump::Null),
        };
        let comp = Comp::parse(comp).map_err(syntax)?;
        Ok(Inst::Compute(dest, comp, jump))
    }
}

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inst::At(v) => write!(f, "@{v}"),
            Inst::Compute(dest, comp, jump) => {
                if *dest != Dest::Null {
                    write!(f, "{dest}=")?;
                }
                write!(f, "{comp}")?;
                if *jump != Jump::Null {
                    write!(f, ";{jump}")?;
                }
                Ok(())
            }
            Inst::Label(name) => write!(f, "({name})"),
        }
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::At(Value::Num(v)) => cformat!("<b>@</><y>{}</>", v),
            Inst::At(Value::Sym(s)) => cformat!("<b>@</><c>{}</>", s),
            Inst::Compute(dest, comp, jump) => {
                let dest = match dest {
                    Dest::Null => String::new(),
                    d => cformat!("<b>{}</>=", d),
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    j => cformat!(";<r>{}</>", j),
                };
                format!("{dest}{comp}{jump}")
            }
            Inst::Label(name) => cformat!("<g>({})</>", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_inst {
        ($($name:ident: $text:expr => $inst:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let inst = Inst::parse($text).unwrap();
                    assert_eq!(inst, $inst);
                    assert_eq!(inst.to_string(), $text);
                }
            )*
        }
    }

    test_inst! {
        test_at_num: "@7" => Inst::at_num(7),
        test_at_max: "@32767" => Inst::at_num(32767),
        test_at_sym: "@Foo.3" => Inst::at_sym("Foo.3"),
        test_assign: "D=M" => Inst::assign(Dest::D, Comp::M),
        test_assign_am: "AM=M-1" => Inst::assign(Dest::AM, Comp::MMinusOne),
        test_branch: "D;JEQ" => Inst::branch(Comp::D, Jump::JEQ),
        test_goto: "0;JMP" => Inst::branch(Comp::Zero, Jump::JMP),
        test_full: "D=D-1;JNE" => Inst::Compute(Dest::D, Comp::DMinusOne, Jump::JNE),
        test_label: "(LOOP)" => Inst::label("LOOP"),
    }

    #[test]
    fn normalizes_spelling() {
        let inst = Inst::parse("M=M+D").unwrap();
        assert_eq!(inst.to_string(), "M=D+M");
    }

    #[test]
    fn rejects() {
        assert_eq!(
            Inst::parse("@32768"),
            Err(Error::LiteralTooLarge("32768".to_string()))
        );
        assert_eq!(
            Inst::parse("@99999999"),
            Err(Error::LiteralTooLarge("99999999".to_string()))
        );
        assert!(matches!(Inst::parse("@1x"), Err(Error::InvalidSymbol(_))));
        assert!(matches!(Inst::parse("(LOOP"), Err(Error::Syntax(..))));
        assert!(matches!(Inst::parse("D=Q"), Err(Error::Syntax(..))));
        assert!(matches!(Inst::parse("D;JXX"), Err(Error::Syntax(..))));
        assert!(matches!(Inst::parse("X=D"), Err(Error::Syntax(..))));
    }

    #[test]
    fn code_slots() {
        assert!(Inst::at_num(0).is_code());
        assert!(!Inst::label("END").is_code());
    }
}
