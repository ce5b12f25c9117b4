//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::llm_client::Provider;
use crate::models::tailoring::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "bespoke",
    about = "Tailor resumes to job descriptions with LLM assistance",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tailor a resume to a job description
    Tailor {
        /// Job description text, or a path to a file containing it
        #[arg(short = 'j', long)]
        job_description: String,

        /// Path to the resume file (.txt, .md, or .pdf)
        #[arg(short = 'r', long)]
        resume: PathBuf,

        /// Explicit output file path
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "markdown")]
        format: OutputFormat,

        /// Also write an original-vs-tailored comparison document
        #[arg(long)]
        comparison: bool,

        /// Skip the keyword match score
        #[arg(long)]
        no_score: bool,

        /// Override the configured LLM provider
        #[arg(long, value_enum)]
        provider: Option<Provider>,

        /// Override the configured Bedrock model ID
        #[arg(long)]
        model_id: Option<String>,

        /// Print the result as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Analyze a job description without tailoring anything
    Analyze {
        /// Job description text, or a path to a file containing it
        #[arg(short = 'j', long)]
        job_description: String,

        /// Override the configured LLM provider
        #[arg(long, value_enum)]
        provider: Option<Provider>,

        /// Print the analysis as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Parse a resume into sections and contact info (no LLM calls)
    Parse {
        /// Path to the resume file (.txt, .md, or .pdf)
        #[arg(short = 'r', long)]
        resume: PathBuf,

        /// Print the parsed structure as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config,

    /// Run the HTTP API server
    Serve {
        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tailor_args_parse() {
        let cli = Cli::parse_from([
            "bespoke", "tailor", "-j", "posting.txt", "-r", "resume.pdf", "-f", "txt",
            "--comparison", "--provider", "mock",
        ]);
        match cli.command {
            Command::Tailor {
                job_description,
                resume,
                format,
                comparison,
                no_score,
                provider,
                ..
            } => {
                assert_eq!(job_description, "posting.txt");
                assert_eq!(resume, PathBuf::from("resume.pdf"));
                assert_eq!(format, OutputFormat::Txt);
                assert!(comparison);
                assert!(!no_score);
                assert_eq!(provider, Some(Provider::Mock));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_format_defaults_to_markdown() {
        let cli = Cli::parse_from(["bespoke", "tailor", "-j", "text", "-r", "resume.txt"]);
        match cli.command {
            Command::Tailor { format, .. } => assert_eq!(format, OutputFormat::Markdown),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_serve_port_override() {
        let cli = Cli::parse_from(["bespoke", "serve", "--port", "3000"]);
        match cli.command {
            Command::Serve { port } => assert_eq!(port, Some(3000)),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
