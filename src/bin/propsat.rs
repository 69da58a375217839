use std::io::Write;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::{Builder, Target};
use log::{LevelFilter, Record};

use propsat::cnf::text::to_text;
use propsat::generate::{GenOptions, random_cnf};
use propsat::modes::{Mode, convert_lines, run};
use propsat::solver::{Backend, SatBackend};

#[derive(Debug, Parser)]
#[command(name = "propsat")]
#[command(about = "Propositional logic solver: BNF to CNF conversion and DPLL")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Convert BNF sentences to CNF clause lines
    Cnf {
        path: String,
        /// Write the clauses to this file instead of stdout
        #[arg(long)]
        emit: Option<String>,
    },
    /// Solve CNF clause lines with DPLL
    Dpll(SolveArgs),
    /// Convert BNF sentences and solve them
    Solve(SolveArgs),
    /// Print a random k-CNF instance as clause lines
    Gen {
        #[arg(long, default_value_t = 8)]
        atoms: usize,
        #[arg(long, default_value_t = 24)]
        clauses: usize,
        #[arg(long, default_value_t = 3)]
        width: usize,
        #[arg(long, default_value_t = 1)]
        seed: u64,
        #[arg(long)]
        planted: bool,
    },
}

#[derive(Debug, Args)]
struct SolveArgs {
    path: String,
    #[arg(long, default_value = "dpll")]
    backend: Backend,
    /// Print search counters to stderr
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Cmd::Cnf { path, emit } => cnf_cmd(&path, emit.as_deref())?,
        Cmd::Dpll(args) => solve_cmd(Mode::Dpll, &args)?,
        Cmd::Solve(args) => solve_cmd(Mode::Solve, &args)?,
        Cmd::Gen {
            atoms,
            clauses,
            width,
            seed,
            planted,
        } => gen_cmd(GenOptions {
            atoms,
            clauses,
            width,
            seed,
            planted,
        })?,
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let format = |buf: &mut env_logger::fmt::Formatter, record: &Record| {
        writeln!(buf, "{}", record.args())
    };

    let mut builder = Builder::new();
    builder.target(Target::Stderr).format(format).filter(None, level);
    if let Ok(filters) = std::env::var("PROPSAT_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn read_input(path: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path))
}

fn cnf_cmd(path: &str, emit: Option<&str>) -> Result<()> {
    let text = read_input(path)?;
    let out = to_text(&convert_lines(&text)?);
    match emit {
        Some(dest) => {
            std::fs::write(dest, &out).with_context(|| format!("failed to write '{}'", dest))?
        }
        None => print!("{out}"),
    }
    Ok(())
}

fn solve_cmd(mode: Mode, args: &SolveArgs) -> Result<()> {
    let text = read_input(&args.path)?;
    let mut backend = args.backend.build();
    let out = run(mode, &text, backend.as_mut())?;
    print!("{out}");
    if args.stats {
        print_stats(backend.as_ref());
    }
    Ok(())
}

fn print_stats(backend: &dyn SatBackend) {
    let s = backend.stats();
    eprintln!(
        "backend={} solve_calls={} decisions={} backtracks={} units={} pures={} conflicts={} max_depth={}",
        backend.backend_name(),
        s.solve_calls,
        s.decisions,
        s.backtracks,
        s.unit_propagations,
        s.pure_literals,
        s.conflicts,
        s.max_depth
    );
}

fn gen_cmd(opts: GenOptions) -> Result<()> {
    let clauses = random_cnf(&opts)?;
    print!("{}", to_text(&clauses));
    Ok(())
}
