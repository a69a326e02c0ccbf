use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a license expression and print the tree as JSON
    Expression {
        /// License expression, e.g. "(MIT OR Apache-2.0)"
        expression: String,
    },

    /// Render a license template file as HTML
    Html {
        /// Path to the template file
        template_file: String,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Render a license template file as plain text with default values
    /// substituted for variables
    Text {
        /// Path to the template file
        template_file: String,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}
