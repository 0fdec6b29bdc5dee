use crate::segment::Segment;
use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed instruction: `{0}`")]
    MalformedInstruction(String),

    #[error("Cannot parse operand of `{0}` as a non-negative integer")]
    InvalidOperand(String),

    #[error("Unknown operation: `{0}`")]
    UnknownOperation(String),

    #[error("Unknown segment: `{0}`")]
    UnknownSegment(String),

    #[error("Operand {1} out of range for segment {0} (max {2})")]
    OperandOutOfRange(Segment, u16, u16),

    #[error("Literal out of range: {0} (max 32767)")]
    LiteralTooLarge(u16),

    #[error("Cannot pop into segment {0}")]
    NotWritable(Segment),

    #[error("No staged destination address for a write to segment {0}")]
    UnstagedDestination(Segment),

    #[error("Expected a Hack VM (.vm) file: {0}")]
    NotVmFile(String),

    #[error("File name `{0}` is not usable as a static symbol prefix")]
    InvalidUnitName(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

/// An error pinned to the source line that caused it.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct Diag {
    pub file: String,
    /// 0-based index into the raw file.
    pub line_idx: usize,
    pub raw: String,
    #[source]
    pub error: Error,
}

impl Diag {
    /// Print error with file location and line content
    pub fn print(&self) {
        cprintln!("<red,bold>error</>: {}", self.error);

        let line_num = self.line_idx + 1;
        cprintln!("     <blue>--></> <underline>{}:{}</>", self.file, line_num);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line_num, self.raw);
        cprintln!("      <blue>|</>");
    }
}

/// Print an error that has no source position.
pub fn print(error: &Error) {
    cprintln!("<red,bold>error</>: {}", error);
}
