use num_enum::{FromPrimitive, IntoPrimitive};
use strum::{Display, EnumIter, EnumString};

/// Destination field. The discriminant is the 3-bit `d1 d2 d3` encoding.
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
pub enum Dest {
    #[default]
    #[strum(to_string = "")]
    Null = 0b000,
    M = 0b001,
    D = 0b010,
    #[strum(to_string = "MD", serialize = "DM")]
    MD = 0b011,
    A = 0b100,
    #[strum(to_string = "AM", serialize = "MA")]
    AM = 0b101,
    #[strum(to_string = "AD", serialize = "DA")]
    AD = 0b110,
    #[strum(to_string = "AMD", serialize = "ADM")]
    AMD = 0b111,
}

impl Dest {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(d) if d != Dest::Null => Ok(d),
            _ => Err(format!("Unknown destination: {s}")),
        }
    }

    pub fn bits(self) -> u8 {
        self.into()
    }

    pub fn writes_a(self) -> bool {
        self.bits() & 0b100 != 0
    }

    pub fn writes_d(self) -> bool {
        self.bits() & 0b010 != 0
    }

    pub fn writes_m(self) -> bool {
        self.bits() & 0b001 != 0
    }
}
