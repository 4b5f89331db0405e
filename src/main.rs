use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use hiername::verify::check_delimiter;
use hiername::{mask, split, unmask, Name, StringArrayName, StringName, DEFAULT_DELIMITER};

mod cli;
use cli::display::{component, masked, row, section_bot, section_top, themed, GRAY};
use cli::{Cli, Commands, Edit, Representation};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// `HIERNAME_LOG` wins over `--log-level`; logs go to stderr.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_env("HIERNAME_LOG")
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Mask {
            component,
            delimiter,
        } => {
            let delimiter = check_delimiter(&delimiter)?;
            println!("{}", mask(&component, delimiter));
        }
        Commands::Unmask { encoded } => {
            println!("{}", unmask(&encoded));
        }
        Commands::Parse {
            data,
            delimiter,
            representation,
            json,
        } => {
            let delimiter = check_delimiter(&delimiter)?;
            match representation {
                Representation::Array => run_parse::<StringArrayName>(&data, delimiter, json)?,
                Representation::String => run_parse::<StringName>(&data, delimiter, json)?,
            }
        }
        Commands::Render {
            components,
            delimiter,
        } => {
            let delimiter = check_delimiter(&delimiter)?;
            let name = StringArrayName::from_parts(components, delimiter)?;
            println!("{}", name.as_string());
            println!("{}", masked(&name.as_data_string()));
        }
        Commands::Edit {
            data,
            edits,
            representation,
        } => match representation {
            Representation::Array => run_edits::<StringArrayName>(&data, &edits)?,
            Representation::String => run_edits::<StringName>(&data, &edits)?,
        },
    }
    Ok(())
}

/// Data strings are always split on the default delimiter; `delimiter` only
/// decides how the parsed name renders itself.
fn parse_data<N: Name>(data: &str, delimiter: char) -> hiername::Result<N> {
    N::from_parts(split(data, DEFAULT_DELIMITER), delimiter)
}

fn run_parse<N: Name>(data: &str, delimiter: char, as_json: bool) -> Result<()> {
    let name: N = parse_data(data, delimiter)
        .with_context(|| format!("Failed to parse data string {:?}", data))?;
    debug!(components = name.no_components(), "parsed");

    if as_json {
        let output = json!({
            "delimiter": name.delimiter().to_string(),
            "components": name.components(),
            "data": name.as_data_string(),
            "hash": name.hash_code(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    section_top("NAME");
    row(&format!(" string      {}", name.as_string()));
    row(&format!(" data        {}", masked(&name.as_data_string())));
    row(&format!(" delimiter   {}", name.delimiter()));
    row(&format!(" hash        {}", name.hash_code()));
    section_bot();

    section_top(&format!("COMPONENTS ({})", name.no_components()));
    for (i, raw) in name.components().iter().enumerate() {
        row(&format!(" {}  {}", themed(GRAY, &[], &format!("[{}]", i)), component(raw)));
    }
    section_bot();
    Ok(())
}

fn apply<N: Name>(name: &N, edit: &Edit) -> hiername::Result<N> {
    match edit {
        Edit::Set(i, c) => name.set_component(*i, c),
        Edit::Insert(i, c) => name.insert(*i, c),
        Edit::Append(c) => name.append(c),
        Edit::Remove(i) => name.remove(*i),
    }
}

fn run_edits<N: Name>(data: &str, edits: &[Edit]) -> Result<()> {
    let mut name: N = parse_data(data, DEFAULT_DELIMITER)
        .with_context(|| format!("Failed to parse data string {:?}", data))?;
    println!("{}", masked(&name.as_data_string()));

    for edit in edits {
        name = apply(&name, edit).with_context(|| format!("Edit {:?} failed", edit))?;
        println!("{}", masked(&name.as_data_string()));
    }
    Ok(())
}
