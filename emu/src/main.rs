use clap::Parser;
use color_print::cprintln;

use hackemu::{
    hooks::{dump::Dump, trace::Trace, Hook},
    Error, Machine,
};

#[derive(Parser, Debug)]
#[clap(version, about = "Emulator for Hack assembly text")]
struct Args {
    /// Stop after this many instructions
    #[arg(short = 't', long)]
    tmax: Option<u64>,

    /// YAML setup: initial RAM values and cells to dump
    #[arg(short, long)]
    config: Option<String>,

    /// Print every executed instruction
    #[arg(long)]
    trace: bool,

    input_file: String,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        cprintln!("<red,bold>error</>: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Error> {
    println!("Hack Emulator");

    println!("+-----------------------------------------------+");
    println!("| {:<45} |", args.input_file);
    println!("+-----------------------------------------------+");

    // ------------------------------------------------------------------------
    // Initialize machine
    let mut machine = {
        let text = std::fs::read_to_string(&args.input_file)
            .map_err(|e| Error::FileOpen(args.input_file.clone(), e))?;
        Machine::load(&text)?
    };

    // ------------------------------------------------------------------------
    // Initialize hooks
    println!("[INIT]");
    let mut hooks: Vec<Box<dyn Hook>> =
        vec![Box::new(Dump::arg(args.config)?), Box::new(Trace::arg(args.trace))];
    for hook in hooks.iter_mut() {
        machine = hook.init(machine)?;
    }

    // ------------------------------------------------------------------------
    // Main loop
    let tmax = args.tmax.unwrap_or(u64::MAX);
    let mut time = 0;
    while time < tmax {
        let Some(pc) = machine.step()? else {
            break;
        };
        machine = hooks
            .iter_mut()
            .fold(machine, |machine, hook| hook.exec(time, pc, machine));
        time += 1;
    }

    // Exit
    println!("[EXIT] {} steps, pc={:0>4X}", time, machine.pc);
    for hook in hooks.iter_mut() {
        hook.finish(&machine);
    }
    println!("=================================================");
    Ok(())
}
