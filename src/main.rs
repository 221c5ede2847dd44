use std::process;

use clap::{Arg, ArgMatches, Command};

use autolinks::commands;
use autolinks::config::{load_config, Config};
use autolinks::logging::{init_logging, log_error};

fn main() {
    let _ = init_logging();
    let config = load_config();
    apply_color_mode(&config);

    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("preview", sub)) => {
            let (file, repo) = file_and_repo(sub, &config);
            let format = sub.get_one::<String>("format").map(String::as_str).unwrap_or("tree");
            commands::preview::run(&file, &repo, format)
        }
        Some(("inspect", sub)) => {
            let (file, repo) = file_and_repo(sub, &config);
            let id = sub.get_one::<String>("id").expect("required arg");
            commands::inspect::run(&file, &repo, id, config.trust_tooltips)
        }
        Some(("copy", sub)) => {
            let (file, repo) = file_and_repo(sub, &config);
            let id = sub.get_one::<String>("id").expect("required arg");
            commands::copy::run(&file, &repo, id)
        }
        _ => unreachable!("subcommand required"),
    };

    if let Err(err) = result {
        log_error(&err.to_string());
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn build_cli() -> Command {
    let file_arg = Arg::new("file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .help("JSON file with the autolinked items to present")
        .required(true);
    let repo_arg = Arg::new("repo")
        .short('r')
        .long("repo")
        .value_name("PATH")
        .help("Repository path the items were detected in");

    Command::new("autolinks")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Presents autolinked issue and pull request references as tree items")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("preview")
                .about("Render all items as tree rows")
                .arg(file_arg.clone())
                .arg(repo_arg.clone())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FORMAT")
                        .help("Output format: tree, table, or json")
                        .default_value("tree"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the rendered tooltip for one item")
                .arg(Arg::new("id").required(true).help("Item id"))
                .arg(file_arg.clone())
                .arg(repo_arg.clone()),
        )
        .subcommand(
            Command::new("copy")
                .about("Print the clipboard text (URL) for one item")
                .arg(Arg::new("id").required(true).help("Item id"))
                .arg(file_arg)
                .arg(repo_arg),
        )
}

fn file_and_repo(sub: &ArgMatches, config: &Config) -> (String, String) {
    let file = sub
        .get_one::<String>("file")
        .expect("required arg")
        .clone();
    let repo = sub
        .get_one::<String>("repo")
        .cloned()
        .or_else(|| config.default_repo.clone())
        .unwrap_or_else(|| ".".to_string());
    (file, repo)
}

fn apply_color_mode(config: &Config) {
    match config.color.as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => {}
    }
}
