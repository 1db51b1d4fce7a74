use std::process::ExitCode;

use clap::Parser;

use copd_cli::cli::{Cli, Command, ConfigAction};
use copd_cli::{commands, config, logging};

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init(cli.log_json, cli.verbose)?;

    let config_path = config::resolve_path(cli.config.as_deref())?;

    match cli.command {
        Command::Assess { record, format } => {
            let config = config::load_config(&config_path)?;
            let record = commands::load_record(&record)?;
            let assessment = commands::assess(&record);
            let format = format.unwrap_or(config.default_format);
            print!("{}", commands::format_assessment(&record, &assessment, format)?);
        }
        Command::Validate { record } => {
            let outcome = commands::walk(commands::load_record(&record)?);
            print!("{}", commands::format_walk(&outcome));
            if !outcome.completed {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Report { record, out, date } => {
            let config = config::load_config(&config_path)?;
            let record = commands::load_record(&record)?;
            let date = date.unwrap_or_else(|| jiff::Zoned::now().date());
            let rendered = commands::report(&record, date, &config)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    tracing::info!(path = %path.display(), "report written");
                }
                None => print!("{rendered}"),
            }
        }
        Command::Template => println!("{}", commands::template()?),
        Command::Config { action } => match action {
            ConfigAction::Show => {
                let config = config::load_config(&config_path)?;
                eprintln!("# {}", config_path.display());
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            ConfigAction::Init { force } => {
                if config_path.exists() && !force {
                    return Err(eyre::eyre!(
                        "config already exists at {} (use --force to overwrite)",
                        config_path.display()
                    ));
                }
                config::save_config(&config_path, &config::CliConfig::default())?;
                println!("{}", config_path.display());
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
