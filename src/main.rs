use std::error::Error;
use std::fs::{self, File};
use std::io::Write;

use anyhow::Context;
use clap::Parser;
use log::debug;
use serde_json::to_string_pretty;

use licet::cli::{Cli, Command};
use licet::{parse_expression_with_catalog, template_to_html, template_to_text};

fn main() -> std::io::Result<()> {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Expression { expression } => {
            let parsed = parse_expression_with_catalog(&expression)?;
            debug!("parsed expression: {:?}", parsed);
            println!("{}", to_string_pretty(&parsed)?);
        }
        Command::Html {
            template_file,
            output,
        } => {
            let template = read_template(&template_file)?;
            let html = template_to_html(&template)?;
            write_output(output.as_deref(), &html)?;
        }
        Command::Text {
            template_file,
            output,
        } => {
            let template = read_template(&template_file)?;
            let text = template_to_text(&template)?;
            write_output(output.as_deref(), &text)?;
        }
    }
    Ok(())
}

fn read_template(path: &str) -> anyhow::Result<String> {
    debug!("reading template from {}", path);
    fs::read_to_string(path).with_context(|| format!("Failed to read template file {path}"))
}

fn write_output(output_file: Option<&str>, content: &str) -> std::io::Result<()> {
    match output_file {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(content.as_bytes())?;
            println!("Output written to {}", path);
        }
        None => println!("{content}"),
    }
    Ok(())
}
