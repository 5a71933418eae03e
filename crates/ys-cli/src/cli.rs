use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "yamlstats",
    about = "Find duplicate, different and missing keys across YAML files",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Disable ANSI colours
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Maximum table width (defaults to the terminal width, capped at 160)
    #[arg(long, global = true)]
    pub width: Option<usize>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare the top-level keys of two YAML files
    Compare(CompareArgs),
    /// Merge YAML files in order, later files overriding earlier ones
    Merge(MergeArgs),
}

#[derive(Args)]
pub struct CompareArgs {
    /// First file
    pub a: PathBuf,
    /// Second file; report rows follow its key order
    pub b: PathBuf,
    /// Show a table of keys whose values differ
    #[arg(short, long)]
    pub differences: bool,
    /// Show keys present in only one of the files
    #[arg(short, long)]
    pub additional: bool,
    /// Report differences even when one side is empty
    #[arg(long)]
    pub keep_empty: bool,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Files to merge, lowest precedence first
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Do not prefix each key with the file it came from
    #[arg(long)]
    pub no_annotate: bool,
    /// Write the merged YAML here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_compare() {
        let cli = Cli::try_parse_from(["yamlstats", "compare", "a.yaml", "b.yaml"]).unwrap();
        if let Command::Compare(args) = cli.command {
            assert_eq!(args.a, PathBuf::from("a.yaml"));
            assert_eq!(args.b, PathBuf::from("b.yaml"));
            assert!(!args.differences);
            assert!(!args.additional);
            assert!(!args.keep_empty);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_compare_flags() {
        let cli = Cli::try_parse_from(["yamlstats", "compare", "-d", "-a", "--keep-empty", "a.yaml", "b.yaml"]).unwrap();
        if let Command::Compare(args) = cli.command {
            assert!(args.differences);
            assert!(args.additional);
            assert!(args.keep_empty);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn compare_needs_two_files() {
        assert!(Cli::try_parse_from(["yamlstats", "compare", "a.yaml"]).is_err());
    }

    #[test]
    fn parse_merge() {
        let cli = Cli::try_parse_from(["yamlstats", "merge", "base.yaml", "dev.yaml", "local.yaml"]).unwrap();
        if let Command::Merge(args) = cli.command {
            assert_eq!(args.files.len(), 3);
            assert_eq!(args.files[2], PathBuf::from("local.yaml"));
            assert!(!args.no_annotate);
            assert!(args.output.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_merge_output() {
        let cli = Cli::try_parse_from(["yamlstats", "merge", "--no-annotate", "-o", "out.yaml", "a.yaml"]).unwrap();
        if let Command::Merge(args) = cli.command {
            assert!(args.no_annotate);
            assert_eq!(args.output, Some(PathBuf::from("out.yaml")));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn merge_needs_a_file() {
        assert!(Cli::try_parse_from(["yamlstats", "merge"]).is_err());
    }

    #[test]
    fn parse_globals() {
        let cli = Cli::try_parse_from(["yamlstats", "--verbose", "--no-color", "--width", "80", "compare", "a", "b"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.width, Some(80));
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["yamlstats", "--format", "json", "merge", "a.yaml"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
