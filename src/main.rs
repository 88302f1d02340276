//! Gilmore CLI - runs built-in first-order problems through the prover.
//!
//! # Commands
//!
//! - `gilmore prove <problem>` - Try to prove a built-in formula valid
//! - `gilmore herbrand --levels N` - Print a Herbrand universe level by level
//! - `gilmore eval` - Evaluate the parity formula over {0..7}

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use gilmore::gilmore::{prove, GilmoreConfig};
use gilmore::herbrand::HerbrandUniverse;
use gilmore::semantics::{Equal, Even, LowerOrEqual, Odd, One, Plus, Structure, Times, Valuation, Zero};
use gilmore::syntax::{Formula, Signature, Term, Var};
use gilmore::LogicResult;

#[derive(Parser)]
#[command(name = "gilmore")]
#[command(about = "First-order normalization and Gilmore-style Herbrand refutation")]
#[command(version)]
struct Cli {
    /// More log output (repeat for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Try to prove a built-in formula valid
    Prove {
        /// Problem to run
        #[arg(value_enum)]
        problem: Problem,
        /// Herbrand levels to try before giving up
        #[arg(long, default_value_t = GilmoreConfig::default().max_levels)]
        max_levels: usize,
    },
    /// Print the Herbrand universe of p1(f(c1,c2), x)
    Herbrand {
        /// Number of levels to grow
        #[arg(long, default_value = "1")]
        levels: usize,
    },
    /// Evaluate (A x).(A y).((even(x) /\ even(y)) ==> even(plus(x,y))) over {0..7}
    Eval,
}

#[derive(Clone, Copy, ValueEnum)]
enum Problem {
    /// Symmetry and transitivity imply reflexivity on the field
    Symmetry,
    /// (E x).(p(x) ==> (A y).p(y))
    Drinker,
    /// (A x).p(x) ==> (A x).q(x), which is not valid
    Invalid,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Prove {
            problem,
            max_levels,
        } => run_prove(problem, max_levels),
        Commands::Herbrand { levels } => run_herbrand(levels),
        Commands::Eval => run_eval(),
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_prove(problem: Problem, max_levels: usize) -> LogicResult<()> {
    let (mut sig, formula) = match problem {
        Problem::Symmetry => symmetry_problem()?,
        Problem::Drinker => drinker_problem()?,
        Problem::Invalid => invalid_problem()?,
    };
    println!("{}", formula);
    let config = GilmoreConfig::default().with_max_levels(max_levels);
    let outcome = prove(&mut sig, &formula, &config)?;
    println!("{}", outcome);
    Ok(())
}

fn run_herbrand(levels: usize) -> LogicResult<()> {
    let mut sig = Signature::new();
    sig.add_function_symbol("c1", 0);
    sig.add_function_symbol("c2", 0);
    sig.add_function_symbol("f", 2);
    sig.add_predicate_symbol("p1", 2);
    let c1 = Term::constant(&sig, "c1")?;
    let c2 = Term::constant(&sig, "c2")?;
    let formula = Formula::atom(&sig, "p1", vec![Term::app(&sig, "f", vec![c1, c2])?, Term::var("x")])?;
    println!("{}", formula);

    let mut universe = HerbrandUniverse::new(&mut sig, &formula)?;
    println!("level 0: {}", universe);
    for _ in 0..levels {
        universe.next_level();
        println!("level {}: {}", universe.depth(), universe);
    }
    Ok(())
}

fn run_eval() -> LogicResult<()> {
    let mut sig = Signature::new();
    sig.add_function_symbol("zero", 0);
    sig.add_function_symbol("one", 0);
    sig.add_function_symbol("plus", 2);
    sig.add_function_symbol("times", 2);
    sig.add_predicate_symbol("even", 1);
    sig.add_predicate_symbol("odd", 1);
    sig.add_predicate_symbol("eq", 2);
    sig.add_predicate_symbol("le", 2);

    let mut structure = Structure::new(&sig, (0..8).collect());
    structure.add_function("zero", Zero)?;
    structure.add_function("one", One)?;
    structure.add_function("plus", Plus::modulo(8))?;
    structure.add_function("times", Times::modulo(8))?;
    structure.add_relation("even", Even)?;
    structure.add_relation("odd", Odd)?;
    structure.add_relation("eq", Equal)?;
    structure.add_relation("le", LowerOrEqual)?;

    let (x, y) = (Var::new("x"), Var::new("y"));
    let even = |t: Term| Formula::atom(&sig, "even", vec![t]);
    let sum = Term::app(&sig, "plus", vec![Term::var("x"), Term::var("y")])?;
    let formula = Formula::forall(
        x,
        Formula::forall(
            y,
            Formula::imp(
                Formula::and(even(Term::var("x"))?, even(Term::var("y"))?),
                even(sum)?,
            ),
        ),
    );
    println!("{}", formula);
    let valuation = Valuation::new(structure.domain());
    println!("{}", formula.eval(&structure, &valuation)?);
    Ok(())
}

/// H /\ K ==> L over p/2 with H symmetry, K transitivity and
/// L = (A x).(A y).(p(x,y) ==> p(x,x)).
fn symmetry_problem() -> LogicResult<(Signature, Formula)> {
    let mut sig = Signature::new();
    sig.add_predicate_symbol("p", 2);
    let p = |a: &str, b: &str| Formula::atom(&sig, "p", vec![Term::var(a), Term::var(b)]);
    let (x, y, z) = (Var::new("x"), Var::new("y"), Var::new("z"));

    let h = Formula::forall(
        x.clone(),
        Formula::forall(y.clone(), Formula::imp(p("x", "y")?, p("y", "x")?)),
    );
    let k = Formula::forall(
        x.clone(),
        Formula::forall(
            y.clone(),
            Formula::forall(
                z,
                Formula::imp(Formula::and(p("x", "y")?, p("y", "z")?), p("x", "z")?),
            ),
        ),
    );
    let l = Formula::forall(x, Formula::forall(y, Formula::imp(p("x", "y")?, p("x", "x")?)));
    let formula = Formula::imp(Formula::and(h, k), l);
    Ok((sig, formula))
}

fn drinker_problem() -> LogicResult<(Signature, Formula)> {
    let mut sig = Signature::new();
    sig.add_predicate_symbol("p", 1);
    let p = |v: &str| Formula::atom(&sig, "p", vec![Term::var(v)]);
    let formula = Formula::exists(
        Var::new("x"),
        Formula::imp(p("x")?, Formula::forall(Var::new("y"), p("y")?)),
    );
    Ok((sig, formula))
}

fn invalid_problem() -> LogicResult<(Signature, Formula)> {
    let mut sig = Signature::new();
    sig.add_predicate_symbol("p", 1);
    sig.add_predicate_symbol("q", 1);
    let atom = |pred: &str| Formula::atom(&sig, pred, vec![Term::var("x")]);
    let formula = Formula::imp(
        Formula::forall(Var::new("x"), atom("p")?),
        Formula::forall(Var::new("x"), atom("q")?),
    );
    Ok((sig, formula))
}
