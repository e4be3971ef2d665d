//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use crate::contact::InquiryIndustry;
use crate::content::DocumentName;
use crate::loader::FailurePolicy;
use crate::pages::Route;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Content client, page loader and static host for the Qubitwise site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root; config and relative paths resolve against it
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: qsite.toml)
    #[arg(short = 'C', long, default_value = "qsite.toml")]
    pub config: PathBuf,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Read documents over HTTP from this origin instead of the content directory
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    /// What pages do when a document fails to load
    #[arg(long, value_enum)]
    pub failure: Option<FailurePolicy>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Fetch one document and print it as JSON
    Fetch {
        /// Document name (company, services, case-studies, ...)
        document: DocumentName,
    },

    /// Load a page and render it in the terminal
    Page {
        /// Site path, e.g. `/`, `/services`, `/case-studies/<id>`
        #[arg(default_value = "/")]
        route: Route,
    },

    /// Fetch every document and check it against its record shape
    Check,

    /// Submit a contact inquiry
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        company: String,

        #[arg(long, value_enum)]
        industry: InquiryIndustry,

        /// Describe the decision problem
        #[arg(long)]
        problem: String,

        /// We already have data for a pilot
        #[arg(long)]
        data_ready: bool,
    },

    /// Serve the site and its content store
    Serve {
        /// Interface to bind on
        #[arg(short, long)]
        interface: Option<String>,

        /// The port you should provide
        #[arg(short, long)]
        port: Option<u16>,
    },
}
