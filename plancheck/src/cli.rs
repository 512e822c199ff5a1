// plancheck/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use plancheck_core::ports::DimensionKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plancheck")]
#[command(about = "Building-regulation compliance checks for CAD drawings", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project directory (where plancheck.yaml lives)
    #[arg(long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Standards directory, overriding settings and environment
    #[arg(long, global = true)]
    pub standards_dir: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📚 Lists the available rule sets
    ListRules,

    /// 🔎 Shows every rule of one rule set
    ShowRules {
        /// Rule set name (ex: "ubbl-spatial")
        name: String,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// ✅ Lists the rules that apply to a building
    Check {
        /// Rule sets to evaluate, comma separated (default: ubbl-spatial,ubbl-fire)
        #[arg(short = 'r', long = "rule-sets", value_delimiter = ',')]
        rule_sets: Vec<String>,

        /// Building type (ex: "residential")
        #[arg(short, long)]
        building_type: Option<String>,

        /// Categories to keep, comma separated
        #[arg(short, long, value_delimiter = ',')]
        categories: Vec<String>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Also write a JSON report to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// 📐 Lists the dimensions found in the drawings of a folder
    ExtractDims {
        /// Folder containing .dwg drawings
        #[arg(short, long)]
        folder: PathBuf,

        /// Layer names to keep, comma separated
        #[arg(short, long, value_delimiter = ',')]
        layers: Vec<String>,

        /// Dimension types to keep (linear, aligned, angular...)
        #[arg(short = 't', long = "types", value_delimiter = ',')]
        dimension_types: Vec<DimensionKind>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// 📏 Measures drawings against the rule thresholds
    Measure {
        /// Folder containing .dwg drawings
        #[arg(short, long)]
        folder: PathBuf,

        /// Rule sets to measure against, comma separated (default: ubbl-spatial)
        #[arg(short = 'r', long = "rule-sets", value_delimiter = ',')]
        rule_sets: Vec<String>,

        #[arg(short, long)]
        building_type: Option<String>,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        #[arg(long)]
        output: Option<PathBuf>,

        /// Exit with error if any check fails or any drawing could not be read
        #[arg(long)]
        strict: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_check_defaults() -> Result<()> {
        let args = Cli::parse_from(["plancheck", "check"]);
        assert_eq!(args.project_dir.to_string_lossy(), ".");
        match args.command {
            Commands::Check {
                rule_sets,
                building_type,
                categories,
                format,
                output,
            } => {
                assert!(rule_sets.is_empty());
                assert_eq!(building_type, None);
                assert!(categories.is_empty());
                assert_eq!(format, OutputFormat::Table);
                assert_eq!(output, None);
                Ok(())
            }
            _ => bail!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_parse_check_lists() -> Result<()> {
        let args = Cli::parse_from([
            "plancheck",
            "check",
            "-r",
            "ubbl-spatial,ubbl-fire",
            "-b",
            "residential",
            "-c",
            "corridor,staircase",
            "--format",
            "json",
        ]);
        match args.command {
            Commands::Check {
                rule_sets,
                building_type,
                categories,
                format,
                ..
            } => {
                assert_eq!(rule_sets, vec!["ubbl-spatial", "ubbl-fire"]);
                assert_eq!(building_type.as_deref(), Some("residential"));
                assert_eq!(categories, vec!["corridor", "staircase"]);
                assert_eq!(format, OutputFormat::Json);
                Ok(())
            }
            _ => bail!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_parse_extract_types() -> Result<()> {
        let args = Cli::parse_from(["plancheck", "extract-dims", "-f", "plans", "-t", "linear,aligned"]);
        match args.command {
            Commands::ExtractDims {
                folder,
                dimension_types,
                ..
            } => {
                assert_eq!(folder, PathBuf::from("plans"));
                assert_eq!(
                    dimension_types,
                    vec![DimensionKind::Linear, DimensionKind::Aligned]
                );
                Ok(())
            }
            _ => bail!("Expected ExtractDims command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_dimension_type() {
        let res = Cli::try_parse_from(["plancheck", "extract-dims", "-f", "plans", "-t", "spline"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_cli_parse_measure_global_flags() -> Result<()> {
        let args = Cli::parse_from([
            "plancheck",
            "measure",
            "-f",
            "plans",
            "--strict",
            "--standards-dir",
            "/srv/standards",
            "-vv",
        ]);
        assert_eq!(args.standards_dir, Some(PathBuf::from("/srv/standards")));
        assert_eq!(args.verbose, 2);
        match args.command {
            Commands::Measure { strict, folder, .. } => {
                assert!(strict);
                assert_eq!(folder, PathBuf::from("plans"));
                Ok(())
            }
            _ => bail!("Expected Measure command"),
        }
    }
}
