//! Branch-predictor testbench stimulus fixture CLI.

use clap::{Parser, Subcommand};
use std::process;

use gbpstim::generate::{GenerateConfig, generate};
use gbpstim::loader;
use gbpstim::stimulus::StimulusRecord;

#[derive(Parser, Debug)]
#[command(
    name = "gbpstim",
    author,
    version,
    about = "Stimulus fixture generator and loader for the gshare branch-predictor testbench",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the exhaustive stimulus sweep and write it to a fixture file.
    Gen {
        /// Width of vpc_i in bits.
        #[arg(long, default_value_t = 4)]
        vlen: u32,

        /// BHT depth (power of two).
        #[arg(long, default_value_t = 8)]
        nr_entries: u32,

        /// Instructions per fetch bundle (power of two).
        #[arg(long, default_value_t = 2)]
        instr_per_fetch: u32,

        /// Output fixture file.
        #[arg(short, long, default_value = "gbp_combinations.json")]
        output: String,
    },

    /// Load a fixture file and print every record.
    Show {
        /// Fixture file to load.
        fixture: String,
    },

    /// Validate a fixture file and report the record count.
    Check {
        /// Fixture file to validate.
        fixture: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Gen {
            vlen,
            nr_entries,
            instr_per_fetch,
            output,
        } => cmd_gen(
            GenerateConfig {
                vlen,
                nr_entries,
                instr_per_fetch,
            },
            &output,
        ),
        Command::Show { fixture } => cmd_show(&fixture),
        Command::Check { fixture } => cmd_check(&fixture),
    }
}

fn cmd_gen(config: GenerateConfig, output: &str) {
    let records = generate(&config).unwrap_or_else(|e| fatal(&e.to_string()));

    if let Err(e) = loader::save(output, &records) {
        fatal(&format!("failed to write fixture file '{output}': {e}"));
    }
    println!("[gen] wrote {} records to '{}'", records.len(), output);
}

fn cmd_show(fixture: &str) {
    let records = load_or_exit(fixture);

    println!("Loaded {} combinations.", records.len());
    for (i, record) in records.iter().enumerate() {
        print_record(i, record);
    }
}

fn cmd_check(fixture: &str) {
    let records = load_or_exit(fixture);
    println!("[check] '{}' OK: {} records", fixture, records.len());
}

fn load_or_exit(fixture: &str) -> Vec<StimulusRecord> {
    loader::load(fixture).unwrap_or_else(|e| fatal(&e.to_string()))
}

fn print_record(i: usize, record: &StimulusRecord) {
    println!("Combination {}:", i + 1);
    println!("  vpc_i: {}", record.vpc_i);
    println!("  bht_update_i_valid: {}", record.bht_update_i_valid);
    println!("  bht_update_i_taken: {}", record.bht_update_i_taken);
    println!("  flush_bp_i: {}", record.flush_bp_i);
    println!("  debug_mode_i: {}", record.debug_mode_i);
    println!("  nr_entries: {}", record.nr_entries);
    println!("  instr_per_fetch: {}", record.instr_per_fetch);
    println!();
}

fn fatal(msg: &str) -> ! {
    eprintln!("\n\x1b[1;31merror:\x1b[0m {msg}");
    process::exit(1);
}
