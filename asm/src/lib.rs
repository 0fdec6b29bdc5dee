pub mod error;

pub use error::Error;

use hackemu::Program;
use std::path::{Path, PathBuf};

pub const SOURCE_EXT: &str = "asm";
pub const OUTPUT_EXT: &str = "hack";

/// Resolve labels and variables in assembly text.
pub fn assemble(text: &str) -> Result<Program, Error> {
    Ok(Program::parse(text)?)
}

/// One 16-digit binary word per line.
pub fn hack_text(prog: &Program) -> String {
    let mut out = String::new();
    for word in &prog.words {
        out.push_str(&format!("{:016b}\n", word.encode()));
    }
    out
}

/// `dir/Foo.asm` -> `dir/Foo.hack`.
pub fn output_path(path: &str) -> Result<PathBuf, Error> {
    let path = Path::new(path);
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case(SOURCE_EXT) => Ok(path.with_extension(OUTPUT_EXT)),
        _ => Err(Error::NotAsmFile(path.display().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        hack_text(&assemble(text).unwrap())
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn add() {
        let text = "\
            // Computes R0 = 2 + 3\n\
            @2\n\
            D=A\n\
            @3\n\
            D=D+A\n\
            @0\n\
            M=D\n";
        assert_eq!(
            words(text),
            vec![
                "0000000000000010",
                "1110110000010000",
                "0000000000000011",
                "1110000010010000",
                "0000000000000000",
                "1110001100001000",
            ]
        );
    }

    #[test]
    fn labels_and_variables() {
        let text = "\
            @R0\n\
            D=M\n\
            @sum\n\
            M=D\n\
            (LOOP)\n\
            @LOOP\n\
            D;JGT\n\
            @KBD\n\
            (END)\n\
            @END\n\
            0;JMP\n";
        assert_eq!(
            words(text),
            vec![
                "0000000000000000",
                "1111110000010000",
                "0000000000010000", // sum -> 16
                "1110001100001000",
                "0000000000000100", // LOOP -> 4
                "1110001100000001",
                "0110000000000000", // KBD
                "0000000000000111", // END -> 7
                "1110101010000111",
            ]
        );
    }

    #[test]
    fn errors() {
        assert!(matches!(
            assemble("@1\nD=X\n"),
            Err(Error::Program(hackemu::Error::Parse(2, _)))
        ));
        assert!(matches!(
            assemble("@40000\n"),
            Err(Error::Program(hackemu::Error::Parse(1, _)))
        ));
    }

    #[test]
    fn output_paths() {
        assert_eq!(output_path("dir/Max.asm").unwrap(), PathBuf::from("dir/Max.hack"));
        assert!(matches!(output_path("Max.vm"), Err(Error::NotAsmFile(_))));
    }
}
