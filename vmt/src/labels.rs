/// Branch targets of one comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmpLabels {
    /// Left operand is negative.
    pub x_neg: String,
    /// Both operands have the same sign; subtraction cannot overflow.
    pub same_sign: String,
    /// D holds a value whose sign orders the operands.
    pub ready: String,
    pub on_true: String,
    pub end: String,
}

/// Per-unit label generator.
///
/// Names are `<unit>$CMP_<n>_<TAG>` with a counter that only moves forward,
/// so every set is unique within the unit and the output is reproducible.
#[derive(Debug)]
pub struct Labels {
    prefix: String,
    counter: usize,
}

impl Labels {
    pub fn new(unit: &str) -> Self {
        Labels {
            prefix: format!("{unit}$CMP"),
            counter: 0,
        }
    }

    pub fn fresh(&mut self) -> CmpLabels {
        let base = format!("{}_{}", self.prefix, self.counter);
        self.counter += 1;
        CmpLabels {
            x_neg: format!("{base}_XNEG"),
            same_sign: format!("{base}_SAME"),
            ready: format!("{base}_READY"),
            on_true: format!("{base}_TRUE"),
            end: format!("{base}_END"),
        }
    }
}
