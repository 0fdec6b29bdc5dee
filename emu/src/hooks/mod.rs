pub mod dump;
pub mod trace;

use crate::{error::Error, model::Machine};

/// Side effects run around the main loop.
pub trait Hook {
    fn init(&mut self, machine: Machine) -> Result<Machine, Error> {
        Ok(machine)
    }
    fn exec(&mut self, _time: u64, _pc: u16, machine: Machine) -> Machine {
        machine
    }
    fn finish(&mut self, _machine: &Machine) {}
}
