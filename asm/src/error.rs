use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Expected a Hack assembly (.asm) file: {0}")]
    NotAsmFile(String),

    #[error(transparent)]
    Program(#[from] hackemu::Error),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}
