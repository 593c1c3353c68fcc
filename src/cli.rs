// CLI-specific types and structures
// This module contains the command-line interface definitions and parsing logic

use clap::Parser;
use std::path::PathBuf;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "tagrank")]
#[command(about = "Parallel top-K hashtag and language ranking for line-delimited Twitter JSON dumps")]
#[command(
    long_about = "Parallel top-K hashtag and language ranking for line-delimited Twitter JSON dumps\n\nThe input is scanned by a fixed pool of worker threads (one per CPU unless\nTAGRANK_WORKERS says otherwise), each keeping a round-robin shard of the\nlines. Partial counts are merged after the scan and the top entries of each\ncategory are reported together with the elapsed wall-clock time."
)]
#[command(version)]
pub struct Cli {
    /// Line-delimited Twitter JSON file to process
    #[arg(value_parser = valid_json_path)]
    pub file: PathBuf,

    /// Ranking depth for both the hashtag and the language table
    #[arg(short = 'n', long = "top", default_value_t = 10)]
    pub top: usize,

    /// Report output format
    #[arg(
        short = 'F',
        long = "output-format",
        value_enum,
        default_value = "text"
    )]
    pub output_format: OutputFormat,

    /// Print scan statistics to stderr after the report
    #[arg(long = "stats")]
    pub stats: bool,
}

/// The dump is line-delimited JSON but the files ship with a plain `.json`
/// extension; anything else is a user error caught before processing starts.
fn valid_json_path(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(path),
        _ => Err(format!("'{}' must have a .json extension", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_json_path_accepts_json() {
        assert!(valid_json_path("tweets.json").is_ok());
        assert!(valid_json_path("/data/bigTwitter.JSON").is_ok());
    }

    #[test]
    fn test_valid_json_path_rejects_other_extensions() {
        assert!(valid_json_path("tweets.txt").is_err());
        assert!(valid_json_path("tweets.jsonl").is_err());
        assert!(valid_json_path("tweets").is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["tagrank", "tweets.json"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("tweets.json"));
        assert_eq!(cli.top, 10);
        assert_eq!(cli.output_format, OutputFormat::Text);
        assert!(!cli.stats);
    }

    #[test]
    fn test_cli_rejects_bad_extension() {
        assert!(Cli::try_parse_from(["tagrank", "tweets.csv"]).is_err());
    }

    #[test]
    fn test_cli_json_output_and_depth() {
        let cli =
            Cli::try_parse_from(["tagrank", "-n", "5", "-F", "json", "tweets.json"]).unwrap();
        assert_eq!(cli.top, 5);
        assert_eq!(cli.output_format, OutputFormat::Json);
    }
}
