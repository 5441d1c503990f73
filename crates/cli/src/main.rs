use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::fmt::SubscriberBuilder;

use modgraph::prelude::*;

mod puzzle;

use puzzle::PuzzleFile;

#[derive(Parser)]
#[command(name = "modgraph")]
#[command(about = "Shortest-solution solver for mod-m graph increment puzzles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a puzzle file and print the press sequence and replay
    Solve {
        #[arg(long)]
        input: PathBuf,
        /// Cap on dequeued states; omit to run to exhaustion
        #[arg(long)]
        max_expansions: Option<usize>,
        /// Emit a machine-readable JSON result instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Generate a random solvable puzzle file
    Gen {
        #[arg(long)]
        nodes: usize,
        #[arg(long, default_value_t = 3)]
        modulus: u32,
        /// Random edges drawn on top of the self-loops
        #[arg(long, default_value_t = 4)]
        extra_edges: usize,
        /// Presses used to scramble the initial state into the goal
        #[arg(long, default_value_t = 6)]
        scramble: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            input,
            max_expansions,
            json,
        } => run_solve(&input, max_expansions, json),
        Action::Gen {
            nodes,
            modulus,
            extra_edges,
            scramble,
            seed,
            out,
        } => run_gen(nodes, modulus, extra_edges, scramble, seed, &out),
    }
}

fn run_solve(input: &Path, max_expansions: Option<usize>, json: bool) -> Result<ExitCode> {
    let file = PuzzleFile::load(input)?;
    let model = file.build_model()?;
    tracing::info!(
        nodes = model.node_count(),
        modulus = model.modulus(),
        cap = ?max_expansions,
        "solving"
    );
    let cfg = SolverCfg { max_expansions };
    let outcome = solve(&model, &file.initial, &file.goal, cfg)?;

    if json {
        print_json(&model, &file, &outcome)?;
    } else {
        print_text(&model, &file, &outcome);
    }

    // distinct exit codes: callers must not confuse a proof of
    // unreachability with a capped, inconclusive stop
    Ok(match outcome {
        Outcome::Solved(_) => ExitCode::SUCCESS,
        Outcome::Unreachable => ExitCode::from(1),
        Outcome::Aborted { .. } => ExitCode::from(2),
    })
}

fn print_text(model: &GraphModel, file: &PuzzleFile, outcome: &Outcome) {
    match outcome {
        Outcome::Solved(sol) => {
            println!("solved in {} move(s): {:?}", sol.len(), sol.moves);
            let states = model.replay(&file.initial, &sol.moves);
            println!("initial state: {:?}", states[0]);
            for (step, state) in states.iter().enumerate().skip(1) {
                println!("after pressing node {}: {:?}", sol.moves[step - 1], state);
            }
        }
        Outcome::Unreachable => println!("unreachable: no press sequence reaches the goal"),
        Outcome::Aborted { expanded } => {
            println!("aborted after {expanded} expansions (inconclusive; raise --max-expansions)")
        }
    }
}

fn print_json(model: &GraphModel, file: &PuzzleFile, outcome: &Outcome) -> Result<()> {
    let value = match outcome {
        Outcome::Solved(sol) => {
            let states = model.replay(&file.initial, &sol.moves);
            serde_json::json!({
                "status": "solved",
                "moves": sol.moves,
                "states": states,
            })
        }
        Outcome::Unreachable => serde_json::json!({ "status": "unreachable" }),
        Outcome::Aborted { expanded } => serde_json::json!({
            "status": "aborted",
            "expanded": expanded,
        }),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn run_gen(
    nodes: usize,
    modulus: u32,
    extra_edges: usize,
    scramble: usize,
    seed: u64,
    out: &Path,
) -> Result<ExitCode> {
    let params = RandomPuzzleParams {
        node_count: nodes,
        modulus,
        extra_edges,
        self_loops: true,
        scramble_moves: scramble,
    };
    let sample = RandomPuzzleGenerator::generate_single(&params, seed)?;
    // persist the raw edges without the injected self-loops; the file's
    // add_self_loops flag re-applies them on load
    let mut edges = Vec::new();
    for from in 0..sample.model.node_count() {
        for &to in sample.model.targets(from) {
            if from != to {
                edges.push((from, to));
            }
        }
    }
    let file = PuzzleFile {
        node_count: nodes,
        modulus,
        edges,
        initial: sample.initial.clone(),
        goal: sample.goal.clone(),
        add_self_loops: true,
    };
    file.save(out)?;
    tracing::info!(out = %out.display(), seed, "puzzle written");
    Ok(ExitCode::SUCCESS)
}
