use color_print::cprintln;
use std::io::Write;

use hackasm::{assemble, hack_text, output_path, Error};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file (.asm)
    input: String,

    /// Output file (default: input with .hack extension)
    #[clap(short, long)]
    output: Option<String>,

    /// Dump the assembled words
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    if let Err(err) = run(&args) {
        cprintln!("<red,bold>error</>: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    println!("Hack Assembler");

    let out = match &args.output {
        Some(out) => out.clone(),
        None => output_path(&args.input)?.display().to_string(),
    };

    println!("1. Read File");
    println!("  < {}", args.input);
    let text = std::fs::read_to_string(&args.input)
        .map_err(|e| Error::FileOpen(args.input.clone(), e))?;

    println!("2. Resolve Symbols & Encode");
    let prog = assemble(&text)?;
    println!(
        "  * {} words, {} labels, {} variables",
        prog.len(),
        prog.labels.len(),
        prog.vars.len()
    );

    println!("3. Write");
    println!("  > {}", out);
    let mut file = std::fs::File::create(&out).map_err(|e| Error::FileCreate(out.clone(), e))?;
    file.write_all(hack_text(&prog).as_bytes())
        .map_err(|e| Error::FileWrite(out.clone(), e))?;

    if args.dump {
        for (pc, (word, inst)) in prog.words.iter().zip(&prog.insts).enumerate() {
            cprintln!("[{:04X}] <k>{:016b}</> | {}", pc, word.encode(), inst.cformat());
        }
    }

    Ok(())
}
