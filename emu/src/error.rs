use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Line {0}: {1}")]
    Parse(usize, #[source] arch::Error),

    #[error("Re-defined label: `{0}`")]
    RedefinedLabel(String),

    #[error("Program too large: {0} instructions")]
    RomOverflow(usize),

    #[error("Out of memory allocating variable `{0}`")]
    RamOverflow(String),

    #[error("Memory access out of range: 0x{0:04X} at pc 0x{1:04X}")]
    BadAddress(u16, u16),

    #[error("Unknown cell: `{0}`")]
    UnknownCell(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Invalid setup file: {0}")]
    Setup(String, #[source] serde_yaml::Error),
}
