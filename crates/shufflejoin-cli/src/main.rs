//! shufflejoin CLI: run a repartition equi-join over two CSV relations.

use clap::Parser;
use shufflejoin_core::config::JoinConfig;
use shufflejoin_exec::Engine;
use std::fs;

#[derive(Parser)]
#[command(name = "shufflejoin")]
#[command(about = "Repartition (shuffle) equi-join over two CSV relations", long_about = None)]
struct Cli {
    /// First (left) input file
    input1: String,

    /// Zero-based join field index in the first input
    index1: usize,

    /// Second (right) input file
    input2: String,

    /// Zero-based join field index in the second input
    index2: usize,

    /// Output directory for the joined shards
    output: String,

    /// Number of partitions (reduce tasks); falls back to
    /// SHUFFLEJOIN_PARTITIONS, then 1
    #[arg(long)]
    partitions: Option<usize>,

    /// Write the run's stats as JSON to this path
    #[arg(long)]
    stats: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_join(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_join(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let partitions = cli
        .partitions
        .or_else(JoinConfig::env_partitions)
        .unwrap_or(1);

    let config = JoinConfig::new(
        cli.input1.clone(),
        cli.index1,
        cli.input2.clone(),
        cli.index2,
        cli.output.clone(),
        partitions,
    )?;

    let engine = Engine::new(config);
    let stats = engine.run()?;

    println!("✓ Join completed");
    println!("  Duration: {}ms", stats.duration_ms());
    println!("  Output records: {}", stats.counters.output_records);
    println!(
        "  Tasks: {} map, {} reduce",
        stats.map_tasks.len(),
        stats.reduce_tasks.len()
    );

    if let Some(path) = &cli.stats {
        fs::write(path, serde_json::to_string_pretty(&stats)?)?;
        println!("  Stats written to {path}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::CommandFactory;
    use clap::Parser;

    #[test]
    fn five_positional_values_parse() {
        let cli =
            Cli::try_parse_from(["shufflejoin", "a.csv", "0", "b.csv", "1", "out"]).unwrap();
        assert_eq!(cli.input1, "a.csv");
        assert_eq!(cli.index1, 0);
        assert_eq!(cli.input2, "b.csv");
        assert_eq!(cli.index2, 1);
        assert_eq!(cli.output, "out");
        assert_eq!(cli.partitions, None);
    }

    #[test]
    fn missing_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["shufflejoin", "a.csv", "0"]).is_err());
    }

    #[test]
    fn extra_arguments_are_rejected() {
        assert!(
            Cli::try_parse_from(["shufflejoin", "a", "0", "b", "1", "out", "extra"]).is_err()
        );
    }

    #[test]
    fn negative_index_is_a_parse_error() {
        assert!(Cli::try_parse_from(["shufflejoin", "a", "-1", "b", "1", "out"]).is_err());
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
