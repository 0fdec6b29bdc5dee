use crate::{source::Unit, translator::Translation};
use color_print::cformat;

const RULE: usize = 64;

/// Listing of a translated unit: every source line followed by the code it
/// produced, with ROM addresses.
pub fn render(unit: &Unit, tr: &Translation) -> Vec<String> {
    let mut out = vec![];
    let title = format!("[{}]", unit.path);
    out.push(format!(
        "{}+------{}{}",
        "-".repeat(8),
        title,
        "-".repeat(RULE.saturating_sub(title.len() + 15))
    ));

    let mut pc: usize = 0;
    for (idx, range) in &tr.spans {
        let raw = unit
            .lines
            .iter()
            .find(|line| line.idx == *idx)
            .map(|line| line.raw.trim())
            .unwrap_or("");
        out.push(cformat!("{:8}| {:>4}: <m>{}</>", "", idx + 1, raw));

        for inst in &tr.insts[range.clone()] {
            if inst.is_code() {
                out.push(format!("[{:04X}]  |       {}", pc, inst.cformat()));
                pc += 1;
            } else {
                out.push(format!("{:8}|     {}", "", inst.cformat()));
            }
        }
    }
    out.push(format!("{}+{}", "-".repeat(8), "-".repeat(RULE - 9)));
    out
}

pub fn print(unit: &Unit, tr: &Translation) {
    for line in render(unit, tr) {
        println!("{}", line);
    }
}
