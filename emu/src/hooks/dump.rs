use super::Hook;
use crate::{
    config::Setup,
    error::Error,
    model::{Cell, Machine},
};

/// Apply the setup's initial values and print its dump cells at the end.
#[derive(Debug)]
pub struct Dump {
    file: Option<String>,
    setup: Setup,
}

impl Dump {
    pub fn arg(file: Option<String>) -> Result<Self, Error> {
        let setup = match &file {
            Some(fname) => Setup::open(fname)?,
            None => Setup::default(),
        };
        Ok(Dump { file, setup })
    }

    fn label(machine: &Machine, cell: &Cell) -> String {
        match cell {
            Cell::Name(name) => name.clone(),
            Cell::Addr(addr) => match machine.program.cell_name(*addr) {
                Some(name) => format!("{addr} ({name})"),
                None => addr.to_string(),
            },
        }
    }
}

impl Hook for Dump {
    fn init(&mut self, mut machine: Machine) -> Result<Machine, Error> {
        if let Some(fname) = &self.file {
            println!(
                " * Setup {:?}: init[{}] dump[{}]",
                fname,
                self.setup.init.len(),
                self.setup.dump.len()
            );
        }
        self.setup.apply(&mut machine)?;
        Ok(machine)
    }

    fn finish(&mut self, machine: &Machine) {
        if self.setup.dump.is_empty() {
            return;
        }
        println!(" +--------------------+--------+");
        for cell in &self.setup.dump {
            let label = Self::label(machine, cell);
            match machine.get_i16(cell.clone()) {
                Ok(val) => println!(" | {:<18} | {:>6} |", label, val),
                Err(e) => println!(" | {:<18} | {}", label, e),
            }
        }
        println!(" +--------------------+--------+");
    }
}
