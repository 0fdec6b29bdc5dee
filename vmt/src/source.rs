use crate::error::Error;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const COMMENT_MARKER: &str = "//";
pub const SOURCE_EXT: &str = "vm";
pub const OUTPUT_EXT: &str = "asm";

/// A source line that carries an instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 0-based index in the raw file.
    pub idx: usize,
    pub raw: String,
    /// Trimmed, upper-cased, comment-free text.
    pub code: String,
}

/// One compilation unit: a `.vm` file and its instruction lines.
#[derive(Debug, Clone)]
pub struct Unit {
    pub path: String,
    /// File stem; prefixes the unit's static cells and labels.
    pub name: String,
    pub lines: Vec<SourceLine>,
}

impl Unit {
    pub fn load(path: &str) -> Result<Self, Error> {
        let name = unit_name(path)?;
        let file = File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;

        let mut raws = vec![];
        for raw in BufReader::new(file).lines() {
            raws.push(raw.map_err(|e| Error::FileRead(path.to_string(), e))?);
        }
        Ok(Self::build(path, name, raws))
    }

    /// Build a unit from in-memory text.
    pub fn from_source(name: &str, text: &str) -> Self {
        let path = format!("{name}.{SOURCE_EXT}");
        Self::build(&path, name.to_string(), text.lines().map(str::to_string))
    }

    fn build(path: &str, name: String, raws: impl IntoIterator<Item = String>) -> Self {
        let lines = raws
            .into_iter()
            .enumerate()
            .filter_map(|(idx, raw)| {
                normalize(&raw).map(|code| SourceLine { idx, raw, code })
            })
            .collect();
        Unit {
            path: path.to_string(),
            name,
            lines,
        }
    }
}

/// Strip the comment, trim and upper-case; `None` for lines with no code.
pub fn normalize(raw: &str) -> Option<String> {
    let code = match raw.find(COMMENT_MARKER) {
        Some(i) => &raw[..i],
        None => raw,
    };
    let code = code.trim();
    if code.is_empty() {
        None
    } else {
        Some(code.to_uppercase())
    }
}

/// `dir/Foo.vm` -> `Foo`.
pub fn unit_name(path: &str) -> Result<String, Error> {
    let path = Path::new(path);
    let is_vm = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case(SOURCE_EXT));
    let stem = path.file_stem().and_then(|s| s.to_str());
    match (is_vm, stem) {
        (true, Some(stem)) if arch::symbol::is_symbol(stem) => Ok(stem.to_string()),
        (true, Some(stem)) => Err(Error::InvalidUnitName(stem.to_string())),
        _ => Err(Error::NotVmFile(path.display().to_string())),
    }
}

/// `dir/Foo.vm` -> `dir/Foo.asm`.
pub fn output_path(path: &str) -> PathBuf {
    Path::new(path).with_extension(OUTPUT_EXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes() {
        assert_eq!(normalize("  push constant 7 // x"), Some("PUSH CONSTANT 7".into()));
        assert_eq!(normalize("\tAdd"), Some("ADD".into()));
        assert_eq!(normalize("// only a comment"), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("pop temp 1// tight"), Some("POP TEMP 1".into()));
    }

    #[test]
    fn names() {
        assert_eq!(unit_name("/home/test/Add.vm").unwrap(), "Add");
        assert_eq!(unit_name("StaticTest.VM").unwrap(), "StaticTest");
        assert!(matches!(unit_name("Add.asm"), Err(Error::NotVmFile(_))));
        assert!(matches!(unit_name("Add"), Err(Error::NotVmFile(_))));
        assert!(matches!(
            unit_name("my-prog.vm"),
            Err(Error::InvalidUnitName(_))
        ));
    }

    #[test]
    fn output_paths() {
        assert_eq!(output_path("dir/Foo.vm"), PathBuf::from("dir/Foo.asm"));
    }

    #[test]
    fn keeps_raw_positions() {
        let unit = Unit::from_source("Foo", "// header\n\npush constant 1\n  add // sum\n");
        assert_eq!(unit.path, "Foo.vm");
        assert_eq!(
            unit.lines,
            vec![
                SourceLine {
                    idx: 2,
                    raw: "push constant 1".into(),
                    code: "PUSH CONSTANT 1".into(),
                },
                SourceLine {
                    idx: 3,
                    raw: "  add // sum".into(),
                    code: "ADD".into(),
                },
            ]
        );
    }
}
