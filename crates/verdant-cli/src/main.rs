//! `verdant` — talk to the compiler and grow a plant grammar from your
//! input.
//!
//! Prints the compiled rules, seed, and color (or a JSON dump with
//! `--json`), and with `--depth N` the generation-N symbol string.
//! Rendering the string is a separate program's job.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use verdant_file::{read_plant, write_plant};
use verdant_grammar::{
    compile_input, symbols_to_string, CompileOptions, Plant, TableVariant,
};

#[derive(Parser)]
#[command(name = "verdant")]
#[command(about = "Grow a procedurally-generated plant grammar from your input")]
struct Cli {
    /// Generation string to compile instead of prompting on stdin.
    /// Use quotation marks for a longer input.
    #[arg(long, short = 'g')]
    genstring: Option<String>,

    /// Read a stored plant file instead of compiling new input.
    #[arg(long, short = 'r', conflicts_with = "genstring")]
    read: Option<PathBuf>,

    /// Write the compiled ruleset, seed, and color to a file.
    #[arg(long, short = 't')]
    dumpto: Option<PathBuf>,

    /// Advance to this generation and print its symbol string.
    #[arg(long, short = 'd')]
    depth: Option<u32>,

    /// Use the full (9-operation) transition tables.
    #[arg(long, short = 'l')]
    full: bool,

    /// Flowers last only for the generation that produced them.
    #[arg(long, short = 'f')]
    tipflowers: bool,

    /// Emit the plant as a JSON object instead of plain text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("verdant=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut plant = match obtain_plant(&cli) {
        Ok(plant) => plant,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(path) = &cli.dumpto {
        if let Err(e) = write_plant(path, &plant) {
            eprintln!("could not dump to file: {e}");
            return ExitCode::FAILURE;
        }
        info!(path = %path.display(), "plant written");
    }

    if let Some(depth) = cli.depth {
        plant.advance_to(depth);
    }

    print_plant(&plant, cli.json);
    ExitCode::SUCCESS
}

/// Build the plant from a file, the `--genstring` flag, or a stdin
/// prompt, in that priority order. Errors are user-facing messages.
fn obtain_plant(cli: &Cli) -> Result<Plant, String> {
    if let Some(path) = &cli.read {
        return read_plant(path).map_err(|e| {
            format!(
                "could not read from file: {e}\n\
                 check to make sure the file exists and is not malformed"
            )
        });
    }

    let options = CompileOptions {
        variant: if cli.full { TableVariant::Full } else { TableVariant::Reduced },
        tip_flowers: cli.tipflowers,
    };

    let input = match &cli.genstring {
        Some(text) => text.clone(),
        None => prompt_input().map_err(|e| format!("could not read input: {e}"))?,
    };

    Ok(compile_input(&input, options))
}

fn prompt_input() -> io::Result<String> {
    print!("Input generation string: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

fn print_plant(plant: &Plant, as_json: bool) {
    if as_json {
        let rules: serde_json::Map<String, serde_json::Value> = plant
            .grammar()
            .heads()
            .map(|head| {
                let body = plant.grammar().rule(head).unwrap_or(&[]);
                (head.to_string(), symbols_to_string(body).into())
            })
            .collect();
        let dump = serde_json::json!({
            "rules": rules,
            "seed": symbols_to_string(plant.seed()),
            "color": plant.color(),
            "symbol_count": plant.symbol_count(),
            "generation": plant.generation(),
            "state": plant.state_string(),
        });
        println!("{dump}");
        return;
    }

    println!("Rules:");
    for head in plant.grammar().heads() {
        let body = plant.grammar().rule(head).unwrap_or(&[]);
        println!("  {head} : {}", symbols_to_string(body));
    }
    println!("Seed: {}", symbols_to_string(plant.seed()));
    println!("Color: {}", plant.color());
    if plant.generation() > 0 {
        println!("Generation {}: {}", plant.generation(), plant.state_string());
    }
}
