use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io;
use std::path::PathBuf;

use todo_index::Priority;
use todo_scan::config::AppConfig;
use todo_scan::{run_draft, run_link, run_scan, ScanOptions};

fn cli() -> Command {
    let file_and_line = [
        Arg::new("file")
            .required(true)
            .value_parser(value_parser!(PathBuf))
            .help("File containing the marker"),
        Arg::new("line")
            .required(true)
            .value_parser(value_parser!(usize))
            .help("One-based line number of the marker"),
    ];

    Command::new("todo-scan")
        .version("0.1.0")
        .about("Finds TODO/FIXME/HACK/XXX/BUG markers and links them to tracker issues")
        .subcommand_required(true)
        .arg(
            Arg::new("markers")
                .long("markers")
                .global(true)
                .num_args(1)
                .help("Comma-separated marker keywords (overrides TODO_MARKERS)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .global(true)
                .help("Only log errors")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("scan")
                .about("List markers in files and directories")
                .arg(
                    Arg::new("paths")
                        .num_args(0..)
                        .value_parser(value_parser!(PathBuf))
                        .default_value(".")
                        .help("Files or directories to scan"),
                )
                .arg(
                    Arg::new("context")
                        .long("context")
                        .help("Print the lines around each marker")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print items as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("link")
                .about("Write an issue link token in front of a marker")
                .args(file_and_line.clone())
                .arg(
                    Arg::new("issue")
                        .required(true)
                        .help("Issue id such as ABC-123"),
                ),
        )
        .subcommand(
            Command::new("draft")
                .about("Print the tracker issue that would be filed for a marker")
                .args(file_and_line)
                .arg(
                    Arg::new("impact")
                        .long("impact")
                        .num_args(1)
                        .value_parser(value_parser!(Priority))
                        .help("Override the inferred priority (high, medium, low)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the draft as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn init_logging(config: &AppConfig) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if config.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if config.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn file_and_line(matches: &ArgMatches) -> (PathBuf, usize) {
    (
        matches.get_one::<PathBuf>("file").cloned().unwrap_or_default(),
        matches.get_one::<usize>("line").copied().unwrap_or_default(),
    )
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let config = AppConfig::resolve(
        matches.get_one::<String>("markers").map(String::as_str),
        matches.get_flag("verbose"),
        matches.get_flag("quiet"),
    );
    init_logging(&config);
    log::debug!("{:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match matches.subcommand() {
        Some(("scan", sub)) => {
            let paths: Vec<PathBuf> = sub
                .get_many::<PathBuf>("paths")
                .unwrap_or_default()
                .cloned()
                .collect();
            let options = ScanOptions {
                show_context: sub.get_flag("context"),
                json: sub.get_flag("json"),
            };
            run_scan(&config, &paths, options, &mut out)?;
        }
        Some(("link", sub)) => {
            let (file, line) = file_and_line(sub);
            let issue = sub.get_one::<String>("issue").map(String::as_str).unwrap_or_default();
            run_link(&config, &file, line, issue, &mut out)?;
        }
        Some(("draft", sub)) => {
            let (file, line) = file_and_line(sub);
            let impact = sub.get_one::<Priority>("impact").copied();
            run_draft(&config, &file, line, impact, sub.get_flag("json"), &mut out)?;
        }
        _ => unreachable!("clap requires a subcommand"),
    }
    Ok(())
}
