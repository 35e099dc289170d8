use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fp_summation::dataset::Variant;
use fp_summation::experiment::{self, ExperimentConfig};
use fp_summation::random::create_entropy_rng;
use fp_summation::report::write_histogram;
use fp_summation::ExperimentError;

/// Sum a fixed set of f32 values in random orders and print how often each
/// distinct total appears.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Value set to sum: powers of ten (decimal) or powers of two (binary)
    #[arg(long, value_enum, default_value_t = Variant::Binary)]
    variant: Variant,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = ExperimentConfig::new(args.variant);

    let mut rng = create_entropy_rng().context("seeding the shuffle generator")?;
    let table = experiment::run(&config, &mut rng);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    write_histogram(&table, &mut out)
        .map_err(ExperimentError::from)
        .context("writing histogram to stdout")?;
    out.flush().context("flushing stdout")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_default_variant_is_binary() {
        let args = Args::try_parse_from(["fp-summation"]).unwrap();
        assert_eq!(args.variant, Variant::Binary);
    }

    #[test]
    fn test_decimal_variant() {
        let args = Args::try_parse_from(["fp-summation", "--variant", "decimal"]).unwrap();
        assert_eq!(args.variant, Variant::Decimal);
    }

    #[test]
    fn test_rejects_unknown_variant() {
        assert!(Args::try_parse_from(["fp-summation", "--variant", "octal"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(Args::try_parse_from(["fp-summation", "--trials", "10"]).is_err());
    }
}
