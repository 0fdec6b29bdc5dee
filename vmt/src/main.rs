use color_print::cprintln;
use indexmap::IndexMap;
use std::io::Write;
use vmt::{error, listing, source, translate_unit, Error, Translation, Unit};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input files (.vm), one compilation unit each
    #[clap(required = true)]
    input: Vec<String>,

    /// Output file (single input only; default: input with .asm extension)
    #[clap(short, long)]
    output: Option<String>,

    /// Dump a listing of the generated code
    #[clap(short, long)]
    dump: bool,

    /// Only print errors
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    if let Err(err) = run(&args) {
        error::print(&err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let say = |msg: String| {
        if !args.quiet {
            println!("{}", msg);
        }
    };

    if args.output.is_some() && args.input.len() > 1 {
        cprintln!("<red,bold>error</>: --output needs exactly one input file");
        std::process::exit(2);
    }

    say("Hack VM Translator".to_string());

    say("1. Read Files".to_string());
    let mut units: IndexMap<String, Unit> = IndexMap::new();
    for path in &args.input {
        say(format!("  < {}", path));
        units.insert(path.clone(), Unit::load(path)?);
    }

    say("2. Translate".to_string());
    let mut outputs: IndexMap<String, Translation> = IndexMap::new();
    let mut failed = false;
    for (path, unit) in &units {
        match translate_unit(unit) {
            Ok(tr) => {
                say(format!("  * {} ({} lines)", unit.name, tr.insts.len()));
                outputs.insert(path.clone(), tr);
            }
            Err(diag) => {
                diag.print();
                failed = true;
            }
        }
    }
    if failed {
        std::process::exit(1);
    }

    say("3. Write".to_string());
    for (path, tr) in &outputs {
        let out = match &args.output {
            Some(out) => out.clone(),
            None => source::output_path(path).display().to_string(),
        };
        say(format!("  > {}", out));
        let mut file =
            std::fs::File::create(&out).map_err(|e| Error::FileCreate(out.clone(), e))?;
        file.write_all(tr.text().as_bytes())
            .map_err(|e| Error::FileWrite(out.clone(), e))?;
    }

    if args.dump {
        for (path, tr) in &outputs {
            listing::print(&units[path], tr);
        }
    }

    Ok(())
}
