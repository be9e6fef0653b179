use anyhow::Context;
use clap::Parser;
use fuzzy_locate::HarnessFields;

/// Locate a pattern approximately in a sample text and print where it starts.
#[derive(Debug, Parser)]
#[command(name = "fuzzy-locate", version, about)]
struct Cli {
    /// Sample text to search in.
    #[arg(long)]
    text: String,

    /// Pattern to look for.
    #[arg(long)]
    pattern: String,

    /// Expected location of the pattern, in graphemes.
    #[arg(long, env = "FUZZY_LOCATION", default_value = "0", allow_hyphen_values = true)]
    location: String,

    /// How far a match may drift from the location before it is rejected.
    #[arg(long, env = "FUZZY_DISTANCE", default_value = "1000", allow_hyphen_values = true)]
    distance: String,

    /// 0.0 accepts only perfect matches, 1.0 accepts nearly anything.
    #[arg(long, env = "FUZZY_THRESHOLD", default_value = "0.5", allow_hyphen_values = true)]
    threshold: String,

    /// Compare case-insensitively.
    #[arg(long, short = 'i')]
    ignore_case: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let fields = HarnessFields {
        sample_text: cli.text,
        pattern: cli.pattern,
        location: cli.location,
        distance: cli.distance,
        threshold: cli.threshold,
        ignore_case: cli.ignore_case,
    };
    let query = fields.parse().context("invalid harness input")?;
    println!("{}", query.run());
    Ok(())
}
