use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use zentao::core::source::CopySource;
use zentao::error::RequestError;

/// `zentao` - score marketing copy with the ZEN TAO rubric.
#[derive(Parser, Debug)]
#[command(name = "zentao")]
#[command(version)]
#[command(about = "Rule-based marketing copy evaluator.", long_about = None)]
pub struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where to read the copy from. Exactly one is required.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Copy to evaluate
    pub text: Option<String>,

    /// Fetch the copy from a web page
    #[arg(long)]
    pub url: Option<String>,

    /// Read the copy from a file
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl InputArgs {
    pub fn into_source(self) -> Result<CopySource, RequestError> {
        CopySource::from_parts(self.text, self.url, self.file)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score copy on the six pillars (or list the triggers that vetoed it)
    Evaluate {
        #[command(flatten)]
        input: InputArgs,

        /// Print the HTTP API response body instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Ask the LLM for an in-depth critique
    Feedback {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Write a PDF report of the evaluation
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// Output path (default: Evaluacion_Copy_<timestamp>.pdf in the report dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the LLM critique section
        #[arg(long)]
        no_feedback: bool,
    },

    /// Start the HTTP API
    Gateway {
        /// Port to listen on (default from config; 0 picks a free port)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (default from config)
        #[arg(long)]
        host: Option<String>,
    },
}
