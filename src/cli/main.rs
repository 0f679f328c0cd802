use std::{fs::File, io::BufReader, path::PathBuf};

use clap::{Parser, Subcommand};

use kripke_sat::{
    config::Config,
    model::read_model,
    parser::parse_formula,
    procedures::Evaluator,
    reports::dot,
    structures::formula::Formula,
};

#[derive(Parser)]
#[command(
    name = "kripke_cli",
    version,
    about = "Parses modal logic formulas and evaluates them over finite Kripke models"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a formula and print its structure
    Parse {
        /// The formula, e.g. "[]p -> <>p"
        formula: String,
    },

    /// Evaluate a formula at every world of a model
    Eval {
        /// Path to a .kripke model file
        model: PathBuf,

        /// The formula to evaluate
        formula: String,

        /// Print the model before evaluating
        #[arg(long)]
        show_model: bool,

        /// Ceiling on recursion into the formula
        #[arg(long)]
        depth_ceiling: Option<usize>,
    },

    /// Render a formula's parse tree in DOT, for Graphviz
    Dot {
        /// The formula to render
        formula: String,

        /// File to write to; stdout otherwise
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Parse { formula } => {
            let formula = parse_or_exit(&formula);

            println!("structure : {formula:?}");
            println!("canonical : {formula}");
        }

        Command::Eval { model, formula, show_model, depth_ceiling } => {
            let formula = parse_or_exit(&formula);

            let file = match File::open(&model) {
                Ok(file) => file,
                Err(e) => {
                    eprintln!("cannot open {}: {e}", model.display());
                    std::process::exit(1);
                }
            };

            let model = match read_model(BufReader::new(file)) {
                Ok(model) => model,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(2);
                }
            };

            if show_model {
                println!("{model}");
            }

            let mut config = Config::default();
            if let Some(value) = depth_ceiling {
                let (min, max) = config.depth_ceiling.min_max();
                if value < min || max < value {
                    eprintln!("{} requires a value between {min} and {max}", config.depth_ceiling.name);
                    std::process::exit(1);
                }
                config.depth_ceiling.value = value;
            }

            let evaluator = Evaluator::new(&model, &config);

            let report = match evaluator.scan(&formula) {
                Ok(report) => report,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(2);
                }
            };

            match report.entailed() {
                true => println!("M |= {formula}"),
                false => println!("M |/= {formula}"),
            }
            print!("{}", report.render(&model));
        }

        Command::Dot { formula, output } => {
            let formula = parse_or_exit(&formula);

            let rendered = match dot::render(&formula) {
                Ok(rendered) => rendered,
                Err(_) => {
                    eprintln!("failed to render the parse tree");
                    std::process::exit(2);
                }
            };

            match output {
                Some(path) => {
                    if let Err(e) = std::fs::write(&path, rendered) {
                        eprintln!("cannot write {}: {e}", path.display());
                        std::process::exit(1);
                    }
                }

                None => print!("{rendered}"),
            }
        }
    }
}

fn parse_or_exit(text: &str) -> Formula {
    match parse_formula(text) {
        Ok(formula) => formula,

        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    }
}
