use vmt::{translate_str, Error};

fn lines(text: &str) -> Vec<String> {
    let tr = translate_str("Prog", text).unwrap();
    tr.insts.iter().map(|inst| inst.to_string()).collect()
}

fn reject(text: &str) -> Error {
    let diag = translate_str("Prog", text).unwrap_err();
    println!("{} (line {})", diag, diag.line_idx + 1);
    diag.error
}

macro_rules! golden {
    ($name:ident, $code:expr, $expects:expr) => {
        #[test]
        fn $name() {
            let expects: Vec<&str> = $expects;
            assert_eq!(lines($code), expects);
        }
    };
}

golden!(
    push_constant,
    "push constant 7",
    vec!["@7", "D=A", "@SP", "A=M", "M=D", "@SP", "M=M+1"]
);

golden!(
    two_pushes_share_sp,
    "push constant 7\npush constant 8\n",
    vec![
        "@7", "D=A", "@SP", "A=M", "M=D", "@SP", "M=M+1", "@8", "D=A", "@SP", "A=M", "M=D",
        "@SP", "M=M+1",
    ]
);

golden!(
    pop_then_push_sp_elided,
    "push constant 1\npop temp 0",
    vec![
        "@1", "D=A", "@SP", "A=M", "M=D", "@SP", "M=M+1", // push
        "A=M-1", "D=M", "@SP", "M=M-1", "@5", "M=D", // pop
    ]
);

golden!(
    push_static,
    "push static 3",
    vec!["@Prog.3", "D=M", "@SP", "A=M", "M=D", "@SP", "M=M+1"]
);

golden!(
    push_pointer,
    "push pointer 1",
    vec!["@THAT", "D=M", "@SP", "A=M", "M=D", "@SP", "M=M+1"]
);

golden!(
    comments_and_case,
    "// header\n\n   PUSH Constant 2   // two\n",
    vec!["@2", "D=A", "@SP", "A=M", "M=D", "@SP", "M=M+1"]
);

golden!(empty, "// nothing\n\n", vec![]);

#[test]
fn labels_are_unique_per_unit() {
    let text = "push constant 1\npush constant 2\neq\npush constant 3\npush constant 4\ngt\n";
    let out = lines(text);
    let labels: Vec<&String> = out.iter().filter(|l| l.starts_with('(')).collect();
    let unique: std::collections::HashSet<_> = labels.iter().collect();
    assert_eq!(labels.len(), 10);
    assert_eq!(unique.len(), 10);
    for name in ["(Prog$CMP_0_TRUE)", "(Prog$CMP_0_END)", "(Prog$CMP_1_TRUE)", "(Prog$CMP_1_END)"] {
        assert!(out.iter().any(|l| l == name), "{name}");
    }
}

#[test]
fn deterministic() {
    let text = "push constant 5\npush constant 6\nlt\npop local 0\n";
    assert_eq!(lines(text), lines(text));
}

#[test]
fn spans_cover_output() {
    let tr = translate_str("Prog", "// c\npush constant 1\n\nneg\n").unwrap();
    assert_eq!(tr.spans.len(), 2);
    assert_eq!(tr.spans[0], (1, 0..7));
    assert_eq!(tr.spans[1].0, 3);
    assert_eq!(tr.spans[1].1.end, tr.insts.len());
    assert!(tr.text().ends_with("M=M+1\n"));
}

#[test]
fn errors() {
    use vmt::Segment::*;
    assert!(matches!(
        reject("push temp 9"),
        Error::OperandOutOfRange(Temp, 9, 7)
    ));
    assert!(matches!(
        reject("pop pointer 2"),
        Error::OperandOutOfRange(Pointer, 2, 1)
    ));
    assert!(matches!(reject("pop constant 1"), Error::NotWritable(Constant)));
    assert!(matches!(reject("push constant 40000"), Error::LiteralTooLarge(40000)));
    assert!(matches!(reject("push heap 1"), Error::UnknownSegment(_)));
    assert!(matches!(reject("push stack 1"), Error::UnknownSegment(_)));
    assert!(matches!(reject("mul"), Error::UnknownOperation(_)));
    assert!(matches!(reject("push local"), Error::MalformedInstruction(_)));
    assert!(matches!(reject("add 1 2"), Error::MalformedInstruction(_)));
    assert!(matches!(reject("push local -1"), Error::InvalidOperand(_)));
}

#[test]
fn error_position() {
    let diag = translate_str("Prog", "push constant 1\n// c\npush temp 8\n").unwrap_err();
    assert_eq!(diag.line_idx, 2);
    assert_eq!(diag.raw, "push temp 8");
    assert_eq!(diag.file, "Prog.vm");
}
