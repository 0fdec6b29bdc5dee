use num_enum::{FromPrimitive, IntoPrimitive};
use strum::{Display, EnumIter, EnumString};

/// Jump field. The discriminant is the 3-bit `lt eq gt` encoding.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    FromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
    EnumIter,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(to_string = "")]
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(j) if j != Jump::Null => Ok(j),
            _ => Err(format!("Unknown jump: {s}")),
        }
    }

    pub fn bits(self) -> u8 {
        self.into()
    }

    /// Decide the jump on an ALU result read as a signed word.
    pub fn taken(self, value: u16) -> bool {
        let bits = self.bits();
        let value = value as i16;
        let flag = if value < 0 {
            0b100
        } else if value == 0 {
            0b010
        } else {
            0b001
        };
        bits & flag != 0
    }
}
