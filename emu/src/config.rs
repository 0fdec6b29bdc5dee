use crate::{error::Error, model::Cell, model::Machine};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

/// Simulation setup, read from YAML:
///
/// ```yaml
/// init:
///   SP: 256
///   LCL: 300
///   300: -7
/// dump: [SP, 256, 257]
/// ```
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Setup {
    #[serde(default)]
    pub init: HashMap<Cell, i16>,
    #[serde(default)]
    pub dump: Vec<Cell>,
}

impl Setup {
    pub fn open(fname: &str) -> Result<Self, Error> {
        let file = File::open(fname).map_err(|e| Error::FileOpen(fname.to_string(), e))?;
        serde_yaml::from_reader(BufReader::new(file)).map_err(|e| Error::Setup(fname.to_string(), e))
    }

    pub fn parse(text: &str) -> Result<Self, Error> {
        serde_yaml::from_str(text).map_err(|e| Error::Setup("<str>".to_string(), e))
    }

    /// Write the initial values into RAM.
    pub fn apply(&self, machine: &mut Machine) -> Result<(), Error> {
        for (cell, val) in &self.init {
            machine.set(cell.clone(), *val as u16)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_addresses() {
        let setup = Setup::parse("init:\n  SP: 256\n  300: -7\ndump: [SP, 256]\n").unwrap();
        assert_eq!(setup.init[&Cell::Name("SP".into())], 256);
        assert_eq!(setup.init[&Cell::Addr(300)], -7);
        assert_eq!(setup.dump, vec![Cell::Name("SP".into()), Cell::Addr(256)]);
    }

    #[test]
    fn applies() {
        let mut m = Machine::load("@SP\n").unwrap();
        Setup::parse("init:\n  SP: 256\n  300: -7\n")
            .unwrap()
            .apply(&mut m)
            .unwrap();
        assert_eq!(m.get("SP").unwrap(), 256);
        assert_eq!(m.get_i16(300u16).unwrap(), -7);
    }

    #[test]
    fn empty_setup() {
        let setup = Setup::parse("{}").unwrap();
        assert!(setup.init.is_empty());
        assert!(setup.dump.is_empty());
    }
}
