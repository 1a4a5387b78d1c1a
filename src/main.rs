use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Instant;

use holdfast::errors::ProcessingError;
use holdfast::handle_table::HandleTable;
use holdfast::read_ext::read_bin;

#[derive(Parser, Debug)]
#[command(name = "holdfast")]
#[command(
    about = "holdfast - read a file behind a scope guard",
    long_about = "Reads a file through a guarded handle and proves the handle is released on every exit path"
)]
struct Cli {
    /// Path to the file to read
    #[arg(required = true)]
    path: PathBuf,

    /// Fail processing on purpose to show the handle still gets released
    #[arg(short = 'f', long, default_value_t = false)]
    simulate_failure: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let start = Instant::now();
    let cli = Cli::parse();

    let table = HandleTable::new();
    let read_result = read_bin(&table, &cli.path, |bin| {
        if cli.simulate_failure {
            return Err(ProcessingError::Failed("simulated failure".to_string()));
        }
        log::debug!("processing {} bytes", bin.len());
        Ok(())
    })
    .with_context(|| format!("Failed to read {}", cli.path.display()));
    let elapsed = start.elapsed();

    match read_result {
        Ok(bin) => {
            println!(
                "Read {} byte(s) from {} in {:.2}s",
                bin.len(),
                cli.path.display(),
                elapsed.as_secs_f64()
            );
            println!("checksum: {:08x}", checksum(&bin));
        }
        Err(err) => {
            eprintln!("read_bin failed, err: {:?}", err);
        }
    }

    if table.open_count() == 0 {
        println!("{}", "All handles released.".green());
        Ok(())
    } else {
        eprintln!(
            "{}",
            format!("{} handle(s) leaked!", table.open_count())
                .bold()
                .red()
        );
        std::process::exit(1);
    }
}

fn checksum(bin: &[u8]) -> u32 {
    bin.iter()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(*b as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_is_order_sensitive() {
        assert_eq!(checksum(b""), 0);
        assert_ne!(checksum(b"ab"), checksum(b"ba"));
    }
}
