use bimap::BiMap;
use once_cell::sync::Lazy;

pub const SP: &str = "SP";
pub const LCL: &str = "LCL";
pub const ARG: &str = "ARG";
pub const THIS: &str = "THIS";
pub const THAT: &str = "THAT";

/// First RAM cell handed out to variables.
pub const VAR_BASE: u16 = 16;

/// Largest value an address load can carry (15 bits).
pub const MAX_LITERAL: u16 = 0x7FFF;

pub static PREDEFINED: Lazy<BiMap<String, u16>> = Lazy::new(|| {
    let mut map = BiMap::new();
    // R0..R4 alias SP..THAT; the named form wins in reverse lookups
    for i in 0..16 {
        map.insert(format!("R{i}"), i);
    }
    for (i, name) in [SP, LCL, ARG, THIS, THAT].iter().enumerate() {
        map.insert(name.to_string(), i as u16);
    }
    map.insert("SCREEN".to_string(), 0x4000);
    map.insert("KBD".to_string(), 0x6000);
    map
});

/// Address of a predefined symbol, including the `R0..R4` aliases that the
/// bimap drops in favour of the named pointers.
pub fn predefined(name: &str) -> Option<u16> {
    if let Some(addr) = PREDEFINED.get_by_left(name) {
        return Some(*addr);
    }
    match name.strip_prefix('R')?.parse::<u16>() {
        Ok(i) if i < 16 && name[1..] == i.to_string() => Some(i),
        _ => None,
    }
}

/// Symbols are letters, digits, `_ . $ :` and do not start with a digit.
pub fn is_symbol(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if !c.is_ascii_digit() && is_symbol_char(c) => chars.all(is_symbol_char),
        _ => false,
    }
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointers() {
        assert_eq!(predefined(SP), Some(0));
        assert_eq!(predefined(THAT), Some(4));
        assert_eq!(predefined("R3"), Some(3));
        assert_eq!(predefined("R13"), Some(13));
        assert_eq!(predefined("KBD"), Some(0x6000));
        assert_eq!(predefined("R16"), None);
        assert_eq!(predefined("R013"), None);
        assert_eq!(PREDEFINED.get_by_right(&3).map(String::as_str), Some(THIS));
    }

    #[test]
    fn symbol_names() {
        assert!(is_symbol("Foo.3"));
        assert!(is_symbol("Main$CMP_0_TRUE"));
        assert!(!is_symbol("3Foo"));
        assert!(!is_symbol("my-file"));
        assert!(!is_symbol(""));
    }
}
