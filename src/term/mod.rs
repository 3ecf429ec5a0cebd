extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::Style;
use clap::{Parser, Subcommand};
use intcode::lang::Error;
use intcode::mach::{circuit, Event, Program, Runtime, Word};
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io::Write;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};
use tracing_subscriber::EnvFilter;

/// Instructions per slice between interrupt checks.
const CYCLES: usize = 5000;

#[derive(Parser, Debug)]
#[command(name = "intcode", version, about = "Run Intcode programs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a program to completion and print every output.
    Run {
        /// Comma separated program text.
        path: PathBuf,
        /// Value to queue for READ. Repeat for more.
        #[arg(short, long = "input", allow_negative_numbers = true)]
        inputs: Vec<Word>,
        /// Patch address 1 after reset.
        #[arg(long, allow_negative_numbers = true)]
        noun: Option<Word>,
        /// Patch address 2 after reset.
        #[arg(long, allow_negative_numbers = true)]
        verb: Option<Word>,
        /// Print memory after the program halts.
        #[arg(long)]
        dump: bool,
    },
    /// Run a program, prompting for input whenever the queue is empty.
    Interactive {
        path: PathBuf,
        #[arg(short, long = "input", allow_negative_numbers = true)]
        inputs: Vec<Word>,
    },
    /// Find the phase settings giving the strongest amplifier signal.
    Amplify {
        path: PathBuf,
        /// Wire the amplifiers in a feedback loop using phases 5 to 9.
        #[arg(long)]
        feedback: bool,
    },
}

pub fn main() {
    setup_logger();
    let cli = Cli::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    match main_loop(cli.command, interrupted) {
        Ok(Ok(())) => {}
        Ok(Err(error)) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            std::process::exit(1);
        }
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(2);
        }
    }
}

fn setup_logger() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
        tracing_subscriber::fmt::Subscriber::builder()
            .compact()
            .without_time()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter)
            .init();
    });
}

fn main_loop(command: Command, interrupted: Arc<AtomicBool>) -> std::io::Result<Result<(), Error>> {
    match command {
        Command::Run {
            path,
            inputs,
            noun,
            verb,
            dump,
        } => {
            let program = match Program::load(&path) {
                Ok(program) => program,
                Err(error) => return Ok(Err(error)),
            };
            let mut runtime = Runtime::new(program);
            runtime.reset(inputs);
            let patches = [(1, noun), (2, verb)];
            for (addr, value) in patches.iter() {
                if let Some(value) = value {
                    if let Err(error) = runtime.poke(*addr, *value) {
                        return Ok(Err(error));
                    }
                }
            }
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let result = drive(&mut runtime, &interrupted, |value| writeln!(out, "{}", value))?;
            if result.is_ok() && dump {
                let words: Vec<String> = runtime
                    .memory_snapshot()
                    .iter()
                    .map(|w| w.to_string())
                    .collect();
                writeln!(out, "{}", words.join(","))?;
            }
            Ok(result)
        }
        Command::Interactive { path, inputs } => {
            let program = match Program::load(&path) {
                Ok(program) => program,
                Err(error) => return Ok(Err(error)),
            };
            let interface = Arc::new(Interface::new("intcode")?);
            interface.set_report_signal(Signal::Interrupt, true);
            interface.set_prompt("? ")?;
            let mut runtime = Runtime::new(program);
            runtime.reset(inputs);
            let failure = Rc::new(RefCell::new(None));
            runtime.set_input_source(prompt(interface.clone(), failure.clone()));
            let result = drive(&mut runtime, &interrupted, |value| {
                interface.write_fmt(format_args!("{}\n", value))
            })?;
            let parked = failure.borrow_mut().take();
            match parked {
                Some(error) => Err(error),
                None => Ok(result),
            }
        }
        Command::Amplify { path, feedback } => {
            let program = match Program::load(&path) {
                Ok(program) => program,
                Err(error) => return Ok(Err(error)),
            };
            let phases = if feedback { 5..10 } else { 0..5 };
            match circuit::max_signal(&program, phases, feedback) {
                Ok(Some((order, signal))) => {
                    let order: Vec<String> = order.iter().map(|p| p.to_string()).collect();
                    println!("{} {}", order.join(","), signal);
                    Ok(Ok(()))
                }
                Ok(None) => Ok(Ok(())),
                Err(error) => Ok(Err(error)),
            }
        }
    }
}

/// Run until halted, a fault, or the stop flag is raised.
fn drive<F>(runtime: &mut Runtime, stop: &AtomicBool, mut output: F) -> std::io::Result<Result<(), Error>>
where
    F: FnMut(Word) -> std::io::Result<()>,
{
    loop {
        if stop.swap(false, Ordering::SeqCst) {
            eprintln!("{}", Style::new().bold().paint(format!("BREAK AT {}", runtime.pc())));
            return Ok(Ok(()));
        }
        match runtime.execute(CYCLES) {
            Ok(Event::Running) => {}
            Ok(Event::Output(value)) => {
                if !stop.load(Ordering::SeqCst) {
                    output(value)?;
                }
            }
            Ok(Event::Halted) => return Ok(Ok(())),
            Err(error) => return Ok(Err(error)),
        }
    }
}

/// Input source that reads one integer per line from the terminal.
/// End of input or an interrupt yields nothing, so the `READ` starves.
/// A terminal error is parked in `failure` for the caller to report.
fn prompt(
    interface: Arc<Interface<DefaultTerminal>>,
    failure: Rc<RefCell<Option<std::io::Error>>>,
) -> impl FnMut() -> Option<Word> {
    move || loop {
        match interface.read_line() {
            Ok(ReadResult::Input(string)) => match string.trim().parse::<Word>() {
                Ok(value) => {
                    interface.add_history_unique(string);
                    return Some(value);
                }
                Err(_) => {
                    if let Err(error) = interface.write_fmt(format_args!("?REDO FROM START\n")) {
                        *failure.borrow_mut() = Some(error);
                        return None;
                    }
                }
            },
            Ok(ReadResult::Signal(_)) | Ok(ReadResult::Eof) => return None,
            Err(error) => {
                *failure.borrow_mut() = Some(error);
                return None;
            }
        }
    }
}
