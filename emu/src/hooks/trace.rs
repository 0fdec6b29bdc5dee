use color_print::cprintln;

use super::Hook;
use crate::model::Machine;

/// Print every executed instruction with the registers after it.
pub struct Trace {
    enabled: bool,
}

impl Trace {
    pub fn arg(enabled: bool) -> Self {
        Trace { enabled }
    }
}

impl Hook for Trace {
    fn exec(&mut self, time: u64, pc: u16, machine: Machine) -> Machine {
        if self.enabled {
            let inst = &machine.program.insts[pc as usize];
            cprintln!(
                " <k>{:>6}</> [{:0>4X}] {:<24} | A={:0>4X} D={:0>4X}",
                time,
                pc,
                inst.cformat(),
                machine.a,
                machine.d
            );
        }
        machine
    }
}
