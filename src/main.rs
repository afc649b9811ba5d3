use anyhow::Result;
use casefmt::cli::output::OutputFormat;
use casefmt::{cli, CaseConverter, Config, Mode, Style};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "casefmt")]
#[command(version, about = "Convert text to camelCase, kebab-case or dot.case", long_about = None)]
struct Cli {
    /// Text to convert; stdin lines are used when omitted
    #[arg(value_name = "INPUTS")]
    inputs: Vec<String>,

    /// Target style (camel, kebab, dot)
    #[arg(short, long, global = true)]
    style: Option<Style>,

    /// Fail on non-text input
    #[arg(long, conflicts_with = "lenient", global = true)]
    strict: bool,

    /// Convert non-text input to an empty string
    #[arg(long, global = true)]
    lenient: bool,

    /// Read stdin as JSON (a single value or an array of values)
    #[arg(long, conflicts_with = "inputs")]
    json: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Config file to apply on top of the global and local ones
    #[arg(short, long, env = "CASEFMT_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert every line of the given files
    Files {
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,

        /// Rewrite the files instead of printing the result
        #[arg(short, long)]
        in_place: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show where config files are looked up
    Path,
    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "casefmt", &mut io::stdout());
        return Ok(());
    }

    let mode = if cli.strict {
        Some(Mode::Strict)
    } else if cli.lenient {
        Some(Mode::Lenient)
    } else {
        None
    };

    let config = Config::load(cli.config.as_deref(), cli.style, mode)?;

    let use_color = config.color && !cli.no_color && io::stdout().is_terminal();
    if !use_color {
        colored::control::set_override(false);
    }

    let converter = CaseConverter::new(&config);

    match cli.command {
        Some(Commands::Files { files, in_place }) => {
            return convert_files(&converter, &files, in_place, use_color);
        }
        Some(Commands::Config { action }) => return handle_config(action, &config),
        None => {}
    }

    let interactive = io::stdin().is_terminal();
    let conversions = if cli.json {
        let values = cli::input::read_json_values(io::stdin().lock(), interactive)?;
        converter.convert_values(&values)?
    } else {
        let inputs = if cli.inputs.is_empty() {
            cli::input::read_lines(io::stdin().lock(), interactive)?
        } else {
            cli.inputs
        };
        converter.convert_texts(&inputs)
    };

    cli::output::print_conversions(&conversions, use_color, &cli.format)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn convert_files(
    converter: &CaseConverter,
    files: &[PathBuf],
    in_place: bool,
    colored: bool,
) -> Result<()> {
    let mut total_changed = 0;
    let mut missing = 0;

    for file_path in files {
        if !file_path.exists() {
            eprintln!("Error: File not found: {}", file_path.display());
            missing += 1;
            continue;
        }

        let result = converter.convert_file(file_path, in_place)?;
        if !in_place {
            cli::output::print_file_conversion(&result, colored);
        }
        total_changed += result.changed_count;
    }

    cli::output::print_files_summary(total_changed, files, in_place, colored);

    if missing > 0 {
        anyhow::bail!("{} of {} files not found", missing, files.len());
    }

    Ok(())
}

fn handle_config(action: ConfigCommands, config: &Config) -> Result<()> {
    match action {
        ConfigCommands::Path => {
            match Config::global_config_path() {
                Some(path) => println!("global: {}", path.display()),
                None => println!("global: unavailable"),
            }
            println!("local:  {}", casefmt::config::LOCAL_CONFIG_FILE);
        }
        ConfigCommands::Show => {
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}
