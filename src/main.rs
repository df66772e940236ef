use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use tsp_genetic::ga::{Crossover, EngineConfig, EvolutionEngine, Selection};
use tsp_genetic::problem::loader::load_instance;
use tsp_genetic::telemetry::{stdout_logger, LogObserver};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SelectionArg {
    /// Roulette wheel favouring cheaper tours
    InverseCost,
    /// Roulette wheel weighted by raw cost (favours expensive tours)
    CostProportional,
    /// Best of `--tournament-size` random tours
    Tournament,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CrossoverArg {
    SinglePoint,
    Order,
}

/// Solve a TSP instance with a genetic algorithm.
#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// instance file: N, then N names, then N rows of N costs
    #[arg(default_value = "tsp.txt")]
    instance: PathBuf,

    /// initial population size
    #[arg(long, default_value_t = 200)]
    population_size: usize,

    /// per-child mutation probability
    #[arg(long, default_value_t = 0.05)]
    mutation_rate: f64,

    /// number of generations
    #[arg(long, default_value_t = 1000)]
    generations: usize,

    /// RNG seed (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// parent selection strategy
    #[arg(long, value_enum, default_value_t = SelectionArg::InverseCost)]
    selection: SelectionArg,

    /// tournament size (with --selection tournament)
    #[arg(long, default_value_t = 3)]
    tournament_size: usize,

    /// crossover operator
    #[arg(long, value_enum, default_value_t = CrossoverArg::SinglePoint)]
    crossover: CrossoverArg,

    /// evaluate children on all cores
    #[arg(long)]
    parallel: bool,

    /// only print the final result
    #[arg(long)]
    quiet: bool,
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        let selection = match self.selection {
            SelectionArg::InverseCost => Selection::InverseCost,
            SelectionArg::CostProportional => Selection::CostProportional,
            SelectionArg::Tournament => Selection::Tournament(self.tournament_size),
        };
        let crossover = match self.crossover {
            CrossoverArg::SinglePoint => Crossover::SinglePoint,
            CrossoverArg::Order => Crossover::Order,
        };
        EngineConfig {
            population_size: self.population_size,
            generations: self.generations,
            mutation_rate: self.mutation_rate,
            selection,
            crossover,
            parallel: self.parallel,
            seed: self.seed,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let instance = load_instance(&args.instance)
        .with_context(|| format!("cannot load instance '{}'", args.instance.display()))?;

    let observer = LogObserver::new(stdout_logger()).with_log_best(if args.quiet { 0 } else { 1 });
    let mut engine = EvolutionEngine::new(&instance.costs, args.engine_config())?;
    let result = engine.run(&observer)?;

    let names = instance.resolve(result.best.order())?;
    println!("Best route: {}", names.join(" -> "));
    if result.best_seen.cost() < result.best_cost {
        println!(
            "Best path seen during the run: {} ({})",
            result.best_seen,
            result.best_seen.cost()
        );
    }

    Ok(())
}
