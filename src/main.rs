use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use ini_parser::{Document, DuplicateSections, FileOptions};
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ini-parser")]
#[command(about = "Inspect, edit and normalise INI files", long_about = None)]
struct Args {
    /// Text encoding of the files (WHATWG label, default utf-8)
    #[arg(long, short = 'e', global = true, value_name = "LABEL")]
    encoding: Option<String>,

    /// Merge repeated section headers instead of starting them afresh
    #[arg(long, global = true)]
    merge_sections: bool,

    /// Log more (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List section names
    Sections {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Print a single value
    Get {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        section: String,
        key: String,
    },
    /// Set a value and write the file back
    Set {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        section: String,
        key: String,
        value: String,
        /// Write to this path instead of FILE
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
    /// Print the canonical form of the file
    Fmt {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Write to this path instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(level)
        .init();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> ini_parser::Result<ExitCode> {
    let mut options = FileOptions::default();
    if let Some(label) = &args.encoding {
        options = options.with_encoding_label(label)?;
    }
    if args.merge_sections {
        options = options.with_duplicate_sections(DuplicateSections::Merge);
    }

    match args.command {
        Command::Sections { file } => {
            let doc = Document::from_file_with(&file, &options)?;
            for name in doc.section_names() {
                println!("{}", name);
            }
        }
        Command::Get { file, section, key } => {
            let doc = Document::from_file_with(&file, &options)?;
            match doc.get(&section, &key) {
                Some(value) => println!("{}", value),
                None => {
                    eprintln!("{}.{} not found", section, key);
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Set { file, section, key, value, output } => {
            let mut doc = Document::from_file_with(&file, &options)?;
            doc.set(section, key, value);
            doc.save_to_file_with(output.as_ref().unwrap_or(&file), &options)?;
        }
        Command::Fmt { file, output } => {
            let doc = Document::from_file_with(&file, &options)?;
            match output {
                Some(path) => doc.save_to_file_with(&path, &options)?,
                None => print!("{}", doc),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
