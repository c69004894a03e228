//! Command-line interface for symlog
//! A debugging aid: parses markup in one of the configured languages and prints what the
//! library makes of it.
//!
//! Usage:
//!   symlog [--language `<name>`] [--config `<file>`] parse `<markup>` [--format `<format>`]
//!   symlog subformulas `<markup>` [--atomic | --immediate]
//!   symlog main-operator `<markup>`
//!   symlog unabbreviate `<markup>`
//!   symlog match `<pattern>` `<candidate>`
//!   symlog languages
//!
//! Logging goes through env_logger, e.g. `RUST_LOG=classify=trace symlog parse '𝐴'`.

use clap::{Arg, ArgAction, ArgMatches, Command};
use symlog::logic::ast::Expression;
use symlog::logic::language::{Language, LanguageRegistry, Loader};
use symlog::logic::loader::ExpressionLoader;
use symlog::logic::matching::MatchSession;
use symlog::logic::token::ToMarkup;

fn markup_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).help(help).required(true).index(1)
}

fn cli() -> Command {
    Command::new("symlog")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse, query and unabbreviate symbolic-logic expressions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("language")
                .long("language")
                .short('l')
                .global(true)
                .help("Language name (e.g. 'Lq', 'Ls')")
                .default_value("Lq"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .action(ArgAction::Append)
                .help("Extra language definitions (TOML), layered over the defaults"),
        )
        .subcommand(
            Command::new("parse")
                .about("Print the parse tree")
                .arg(markup_arg("markup", "Expression in ^{…}/_{…} markup"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format: 'debug', 'json' or 'markup'")
                        .default_value("debug"),
                ),
        )
        .subcommand(
            Command::new("subformulas")
                .about("List subformulas, lowest level first")
                .arg(markup_arg("markup", "Formula in ^{…}/_{…} markup"))
                .arg(
                    Arg::new("atomic")
                        .long("atomic")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("immediate")
                        .help("Only atomic subformulas"),
                )
                .arg(
                    Arg::new("immediate")
                        .long("immediate")
                        .action(ArgAction::SetTrue)
                        .help("Only the operands of the main operator"),
                ),
        )
        .subcommand(
            Command::new("main-operator")
                .about("Print the main operator")
                .arg(markup_arg("markup", "Formula in ^{…}/_{…} markup")),
        )
        .subcommand(
            Command::new("unabbreviate")
                .about("Expand every defined construct")
                .arg(markup_arg("markup", "Expression in ^{…}/_{…} markup")),
        )
        .subcommand(
            Command::new("match")
                .about("Match a pattern with meta-symbols against a candidate")
                .arg(markup_arg("pattern", "Pattern in ^{…}/_{…} markup"))
                .arg(
                    Arg::new("candidate")
                        .help("Candidate in ^{…}/_{…} markup")
                        .required(true)
                        .index(2),
                ),
        )
        .subcommand(Command::new("languages").about("List the configured languages"))
}

fn main() {
    env_logger::init();
    let matches = cli().get_matches();

    let registry = load_registry(&matches);
    if let Some(("languages", _)) = matches.subcommand() {
        for name in registry.names() {
            println!("{name}");
        }
        return;
    }

    let name = matches
        .get_one::<String>("language")
        .map(String::as_str)
        .unwrap_or("Lq");
    let language = registry.get(name).cloned().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("Available languages: {}", registry.names().join(", "));
        std::process::exit(1);
    });

    let output = match matches.subcommand() {
        Some(("parse", sub)) => handle_parse(language, sub),
        Some(("subformulas", sub)) => handle_subformulas(language, sub),
        Some(("main-operator", sub)) => handle_main_operator(language, sub),
        Some(("unabbreviate", sub)) => handle_unabbreviate(language, sub),
        Some(("match", sub)) => handle_match(language, sub),
        _ => unreachable!("subcommand is required"),
    };
    match output {
        Ok(text) => println!("{text}"),
        Err(message) => {
            eprintln!("Error: {message}");
            std::process::exit(1);
        }
    }
}

fn load_registry(matches: &ArgMatches) -> LanguageRegistry {
    let mut loader = Loader::new();
    if let Some(files) = matches.get_many::<String>("config") {
        for file in files {
            loader = loader.with_file(file);
        }
    }
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading languages: {e}");
        std::process::exit(1);
    })
}

fn loader_for(language: Language, sub: &ArgMatches, arg: &str) -> ExpressionLoader {
    let markup = sub.get_one::<String>(arg).map(String::as_str).unwrap_or_default();
    ExpressionLoader::from_markup(language, markup)
}

fn render(loader: &ExpressionLoader, expr: &Expression) -> String {
    loader.language().render_expression(expr).to_markup()
}

fn handle_parse(language: Language, sub: &ArgMatches) -> Result<String, String> {
    let loader = loader_for(language, sub, "markup");
    let expr = loader.parse().map_err(|e| e.to_string())?;
    let format = sub.get_one::<String>("format").map(String::as_str);
    match format {
        Some("json") => serde_json::to_string_pretty(&expr).map_err(|e| e.to_string()),
        Some("markup") => Ok(render(&loader, &expr)),
        Some("debug") | None => Ok(format!("{expr:#?}")),
        Some(other) => Err(format!("unknown format '{other}' (debug, json, markup)")),
    }
}

fn handle_subformulas(language: Language, sub: &ArgMatches) -> Result<String, String> {
    let loader = loader_for(language, sub, "markup");
    let formulas = if sub.get_flag("atomic") {
        loader.atomic_subformulas()
    } else if sub.get_flag("immediate") {
        loader.immediate_subformulas()
    } else {
        loader.subformulas()
    }
    .map_err(|e| e.to_string())?;
    let lines: Vec<String> = formulas
        .into_iter()
        .map(|formula| {
            let level = formula.level();
            format!("{level}  {}", render(&loader, &Expression::Formula(formula)))
        })
        .collect();
    Ok(lines.join("\n"))
}

fn handle_main_operator(language: Language, sub: &ArgMatches) -> Result<String, String> {
    let loader = loader_for(language, sub, "markup");
    let op = loader.main_operator().map_err(|e| e.to_string())?;
    Ok(match op {
        Some(op) => format!(
            "{} ({})",
            loader.language().render_operator(op).glyph,
            op.name()
        ),
        None => "none".to_string(),
    })
}

fn handle_unabbreviate(language: Language, sub: &ArgMatches) -> Result<String, String> {
    let loader = loader_for(language, sub, "markup");
    let expr = loader.unabbreviate().map_err(|e| e.to_string())?;
    Ok(render(&loader, &expr))
}

fn handle_match(language: Language, sub: &ArgMatches) -> Result<String, String> {
    let pattern = loader_for(language.clone(), sub, "pattern")
        .parse()
        .map_err(|e| e.to_string())?;
    let candidate = loader_for(language, sub, "candidate")
        .parse()
        .map_err(|e| e.to_string())?;
    let mut session = MatchSession::new();
    session
        .match_expression(&pattern, &candidate)
        .map_err(|e| e.to_string())?;
    let lines: Vec<String> = session
        .bindings()
        .into_iter()
        .map(|(key, bound)| format!("{key} := {bound}"))
        .collect();
    if lines.is_empty() {
        Ok("match (no meta-symbols)".to_string())
    } else {
        Ok(lines.join("\n"))
    }
}
