//! Command-line interface for Enquiry Desk.

mod commands;

use clap::{Parser, Subcommand};

/// Enquiry Desk - contact form, newsletter signups and an admin panel
#[derive(Parser)]
#[command(name = "enquiry-desk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (default)
    #[command(alias = "web")]
    Serve,

    /// Create default config file
    #[command(alias = "--init")]
    Init,

    /// Print stored enquiries
    #[command(alias = "ls")]
    Enquiries {
        /// Only show enquiries with this status ("all" shows every status)
        #[arg(long)]
        status: Option<String>,
        /// Match against name, email or phone
        #[arg(long)]
        search: Option<String>,
    },
}

pub use commands::*;
