use clap::Parser;

/// Print the next waste pickup dates for the configured address.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub(crate) struct Arguments {
    /// print the records as one JSON array instead of text lines
    #[arg(short = 'j', long = "json")]
    pub json: bool,
}
