use strum::{Display, EnumIter, EnumString};

/// Computation field of a compute instruction.
///
/// Every form the ALU can evaluate is one variant, so lowering code matches
/// over a closed set instead of building expression strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum Comp {
    #[strum(to_string = "0")]
    Zero,
    #[strum(to_string = "1")]
    One,
    #[strum(to_string = "-1")]
    MinusOne,
    #[strum(to_string = "D")]
    D,
    #[strum(to_string = "A")]
    A,
    #[strum(to_string = "!D")]
    NotD,
    #[strum(to_string = "!A")]
    NotA,
    #[strum(to_string = "-D")]
    NegD,
    #[strum(to_string = "-A")]
    NegA,
    #[strum(to_string = "D+1")]
    DPlusOne,
    #[strum(to_string = "A+1")]
    APlusOne,
    #[strum(to_string = "D-1")]
    DMinusOne,
    #[strum(to_string = "A-1")]
    AMinusOne,
    #[strum(to_string = "D+A", serialize = "A+D")]
    DPlusA,
    #[strum(to_string = "D-A")]
    DMinusA,
    #[strum(to_string = "A-D")]
    AMinusD,
    #[strum(to_string = "D&A", serialize = "A&D")]
    DAndA,
    #[strum(to_string = "D|A", serialize = "A|D")]
    DOrA,
    #[strum(to_string = "M")]
    M,
    #[strum(to_string = "!M")]
    NotM,
    #[strum(to_string = "-M")]
    NegM,
    #[strum(to_string = "M+1")]
    MPlusOne,
    #[strum(to_string = "M-1")]
    MMinusOne,
    #[strum(to_string = "D+M", serialize = "M+D")]
    DPlusM,
    #[strum(to_string = "D-M")]
    DMinusM,
    #[strum(to_string = "M-D")]
    MMinusD,
    #[strum(to_string = "D&M", serialize = "M&D")]
    DAndM,
    #[strum(to_string = "D|M", serialize = "M|D")]
    DOrM,
}

impl Comp {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(c) => Ok(c),
            Err(_) => Err(format!("Unknown computation: {s}")),
        }
    }

    /// True when the form reads memory at the address register.
    pub fn reads_m(self) -> bool {
        use Comp::*;
        matches!(
            self,
            M | NotM | NegM | MPlusOne | MMinusOne | DPlusM | DMinusM | MMinusD | DAndM | DOrM
        )
    }

    /// The 7-bit `a c1..c6` field of the machine word.
    pub fn bits(self) -> u16 {
        use Comp::*;
        match self {
            Zero => 0b0_101010,
            One => 0b0_111111,
            MinusOne => 0b0_111010,
            D => 0b0_001100,
            A => 0b0_110000,
            NotD => 0b0_001101,
            NotA => 0b0_110001,
            NegD => 0b0_001111,
            NegA => 0b0_110011,
            DPlusOne => 0b0_011111,
            APlusOne => 0b0_110111,
            DMinusOne => 0b0_001110,
            AMinusOne => 0b0_110010,
            DPlusA => 0b0_000010,
            DMinusA => 0b0_010011,
            AMinusD => 0b0_000111,
            DAndA => 0b0_000000,
            DOrA => 0b0_010101,
            M => 0b1_110000,
            NotM => 0b1_110001,
            NegM => 0b1_110011,
            MPlusOne => 0b1_110111,
            MMinusOne => 0b1_110010,
            DPlusM => 0b1_000010,
            DMinusM => 0b1_010011,
            MMinusD => 0b1_000111,
            DAndM => 0b1_000000,
            DOrM => 0b1_010101,
        }
    }

    pub fn eval(self, a: u16, d: u16, m: u16) -> u16 {
        use Comp::*;
        match self {
            Zero => 0,
            One => 1,
            MinusOne => 0xFFFF,
            D => d,
            A => a,
            NotD => !d,
            NotA => !a,
            NegD => d.wrapping_neg(),
            NegA => a.wrapping_neg(),
            DPlusOne => d.wrapping_add(1),
            APlusOne => a.wrapping_add(1),
            DMinusOne => d.wrapping_sub(1),
            AMinusOne => a.wrapping_sub(1),
            DPlusA => d.wrapping_add(a),
            DMinusA => d.wrapping_sub(a),
            AMinusD => a.wrapping_sub(d),
            DAndA => d & a,
            DOrA => d | a,
            M => m,
            NotM => !m,
            NegM => m.wrapping_neg(),
            MPlusOne => m.wrapping_add(1),
            MMinusOne => m.wrapping_sub(1),
            DPlusM => d.wrapping_add(m),
            DMinusM => d.wrapping_sub(m),
            MMinusD => m.wrapping_sub(d),
            DAndM => d & m,
            DOrM => d | m,
        }
    }
}
