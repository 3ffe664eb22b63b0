//! Command-line interface implementation for tombot.
//! Provides argument parsing and the top-level run flow.

use crate::answers::{parse_var, resolve_variables};
use crate::bootstrap::bootstrap_project;
use crate::config::get_config;
use crate::error::Result;
use crate::loader::load_template;
use crate::prompt::{DefaultsPrompter, DialoguerPrompter, Prompter};
use crate::template::TemplateEngine;
use crate::transformers::Transformers;
use clap::{error::ErrorKind, CommandFactory, Parser};
use indexmap::IndexMap;
use std::path::PathBuf;

/// Command-line arguments structure for tombot.
#[derive(Parser, Debug)]
#[command(author, version, about = "tombot: bootstrap a project from a template", long_about = None)]
pub struct Args {
    /// Name of the template inside the templates directory
    #[arg(short, long, value_name = "NAME")]
    pub template: String,

    /// Directory to place files in
    #[arg(value_name = "DIR")]
    pub directory: PathBuf,

    /// Directory containing the templates
    #[arg(long, value_name = "PATH", env = "TOMBOT_TEMPLATES_DIR", default_value = ".")]
    pub templates_dir: PathBuf,

    /// Answer for a variable, skipping its prompt (repeatable)
    #[arg(long = "var", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,

    /// Accept every default without prompting
    #[arg(long)]
    pub no_input: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Prints the condensed help shown when required arguments are missing.
pub fn print_usage() -> std::io::Result<()> {
    Args::command()
        .help_template(
            r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
        )
        .print_help()
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                if let Err(e) = print_usage() {
                    eprintln!("Failed to print help: {e}");
                }
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}

/// Main application logic.
///
/// # Flow
/// 1. Locates the template and loads its `config.toml`
/// 2. Resolves variables from presets and prompts
/// 3. Bootstraps every variant directory of the template
pub fn run(args: Args) -> Result<()> {
    let template_root = load_template(&args.templates_dir, &args.template)?;
    let config = get_config(&template_root)?;
    let transformers = Transformers::with_defaults();

    let presets = args
        .vars
        .iter()
        .map(|raw| parse_var(raw))
        .collect::<Result<IndexMap<_, _>>>()?;

    let prompter: Box<dyn Prompter> = if args.no_input {
        Box::new(DefaultsPrompter)
    } else {
        Box::new(DialoguerPrompter::new())
    };
    let variables = resolve_variables(&config.variables, &presets, &transformers, &*prompter)?;

    let engine = TemplateEngine::new(&variables, &transformers);
    for published in bootstrap_project(&engine, &template_root, &args.directory)? {
        println!("Created: '{}'", published.display());
    }
    Ok(())
}
