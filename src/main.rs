use crate::catalog::{Catalog, ResultOrder};
use crate::day::day_as_number;
use crate::restaurant::RestaurantRow;
use crate::time::{parse_24h, Time};
use chrono::NaiveDateTime;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::Arc;
use tabled::settings::Style;

mod catalog;
mod day;
mod error;
mod restaurant;
mod time;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Parser)]
struct Args {
    /// Path to the JSON restaurant catalog
    #[arg(short, long, value_name = "FILE", default_value = "data/restaurant_data.json")]
    data: PathBuf,

    /// Print the restaurants open at "YYYY-MM-DD HH:MM" and exit
    #[arg(short, long, value_name = "TIMESTAMP")]
    at: Option<String>,

    /// Sort names alphabetically and list each restaurant once
    #[arg(short, long)]
    sorted: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

fn paginate(content: &str) -> std::io::Result<()> {
    let mut pager = Command::new("less")
        .arg("-R")
        .stdin(Stdio::piped())
        .spawn()
        .or_else(|_| Command::new("more").stdin(Stdio::piped()).spawn())?;

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // Broken pipe when the user quits early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(e);
            }
        }
    }

    pager.wait()?;
    Ok(())
}

fn print_open(names: &[Arc<str>]) {
    if names.is_empty() {
        println!("{}", "No restaurants are open.".yellow());
    } else {
        println!("{}", "Restaurants that are open:".green());
        for name in names {
            println!("  {}", name);
        }
    }
}

fn print_catalog(catalog: &Catalog) {
    if catalog.restaurants.is_empty() {
        println!("{}", "Catalog is empty.".yellow());
        return;
    }
    let rows = catalog.restaurants.iter().map(RestaurantRow::from).collect::<Vec<_>>();
    let mut table = tabled::Table::new(&rows);
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if rows.len() > 20 {
        if let Err(e) = paginate(&table.to_string()) {
            log::warn!("Pager failed: {}", e);
            println!("{}", table);
        }
    } else {
        println!("{}", table);
    }
}

fn order_of(sorted: bool) -> ResultOrder {
    if sorted { ResultOrder::Alphabetical } else { ResultOrder::default() }
}

#[derive(Debug, PartialEq)]
enum ReplCommand {
    At(NaiveDateTime),
    Open(u8, Time),
    List,
    SetOrder(ResultOrder),
    Help,
    Exit,
    Usage(&'static str),
    Unknown(String),
}

fn parse_command(line: &str) -> Option<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let command = match *parts.first()? {
        "at" => parts
            .get(1..3)
            .and_then(|p| NaiveDateTime::parse_from_str(&p.join(" "), TIMESTAMP_FORMAT).ok())
            .map(ReplCommand::At)
            .unwrap_or(ReplCommand::Usage("at <YYYY-MM-DD> <HH:MM>")),
        "open" => parts
            .get(1)
            .and_then(|d| day_as_number(d).ok())
            .zip(parts.get(2).and_then(|t| parse_24h(t)))
            .map(|(weekday, time)| ReplCommand::Open(weekday, time))
            .unwrap_or(ReplCommand::Usage("open <mon..sun> <HH:MM>")),
        "ls" => ReplCommand::List,
        "order" => match parts.get(1).copied() {
            Some("catalog") => ReplCommand::SetOrder(ResultOrder::Catalog),
            Some("alpha") => ReplCommand::SetOrder(ResultOrder::Alphabetical),
            _ => ReplCommand::Usage("order <catalog|alpha>"),
        },
        "help" | "?" => ReplCommand::Help,
        "exit" | "quit" => ReplCommand::Exit,
        other => ReplCommand::Unknown(other.to_string()),
    };
    Some(command)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let catalog = Catalog::load_from_file(&args.data)?;
    let mut order = order_of(args.sorted);

    if let Some(at) = args.at {
        let instant = NaiveDateTime::parse_from_str(&at, TIMESTAMP_FORMAT)?;
        print_open(&catalog.open_at(instant, order));
        return Ok(());
    }

    println!(
        "Loaded {} restaurants from {}",
        catalog.restaurants.len(),
        args.data.display()
    );

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: ["at", "open", "ls", "order", "help", "exit"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                let Some(command) = parse_command(trimmed) else { continue; };

                rl.add_history_entry(trimmed)?;

                match command {
                    ReplCommand::At(instant) => print_open(&catalog.open_at(instant, order)),
                    ReplCommand::Open(weekday, time) => print_open(&catalog.open_on(weekday, time, order)),
                    ReplCommand::List => print_catalog(&catalog),
                    ReplCommand::SetOrder(o) => order = o,
                    ReplCommand::Help => {
                        println!("\nAvailable Commands:");
                        println!("  at <date> <HH:MM>   - List restaurants open at a date and time, e.g. at 2021-05-18 12:45");
                        println!("  open <day> <HH:MM>  - List restaurants open on a weekday, e.g. open sun 21:30");
                        println!("  ls                  - Show every restaurant and its opening hours");
                        println!("  order <mode>        - catalog: file order with repeats, alpha: sorted and unique");
                        println!("  help / ?            - Show this help menu");
                        println!("  exit / quit         - Exit\n");
                    },
                    ReplCommand::Exit => break,
                    ReplCommand::Usage(usage) => println!("Usage: {} (order is {:?})", usage, order),
                    ReplCommand::Unknown(cmd) => println!("{} {}", "Unknown command:".red(), cmd),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        let args = Args::parse_from(["opening-hours", "--at", "2021-05-18 12:45", "--sorted"]);
        assert_eq!(PathBuf::from("data/restaurant_data.json"), args.data);
        assert_eq!(Some("2021-05-18 12:45".to_string()), args.at);
        assert_eq!(ResultOrder::Alphabetical, order_of(args.sorted));
    }

    #[test]
    fn test_default_order() {
        assert_eq!(ResultOrder::Catalog, order_of(false));
        assert_eq!(ResultOrder::default(), order_of(false));
    }

    #[test]
    fn test_parse_open_command() {
        assert_eq!(Some(ReplCommand::Open(6, Time::from_hm(21, 30))), parse_command("open sun 21:30"));
        assert_eq!(Some(ReplCommand::Open(0, Time::from_hm(8, 5))), parse_command("  open MON 08:05 "));
        assert!(matches!(parse_command("open sun"), Some(ReplCommand::Usage(_))));
        assert!(matches!(parse_command("open xyz 10:00"), Some(ReplCommand::Usage(_))));
        assert!(matches!(parse_command("open sun 25:00"), Some(ReplCommand::Usage(_))));
    }

    #[test]
    fn test_parse_order_command() {
        assert_eq!(Some(ReplCommand::SetOrder(ResultOrder::Alphabetical)), parse_command("order alpha"));
        assert_eq!(Some(ReplCommand::SetOrder(ResultOrder::Catalog)), parse_command("order catalog"));
        assert!(matches!(parse_command("order"), Some(ReplCommand::Usage(_))));
        assert!(matches!(parse_command("order random"), Some(ReplCommand::Usage(_))));
    }

    #[test]
    fn test_parse_other_commands() {
        let instant = NaiveDateTime::parse_from_str("2021-05-18 12:45", TIMESTAMP_FORMAT).unwrap();
        assert_eq!(Some(ReplCommand::At(instant)), parse_command("at 2021-05-18 12:45"));
        assert!(matches!(parse_command("at 2021-05-18"), Some(ReplCommand::Usage(_))));
        assert_eq!(Some(ReplCommand::List), parse_command("ls"));
        assert_eq!(Some(ReplCommand::Help), parse_command("?"));
        assert_eq!(Some(ReplCommand::Exit), parse_command("quit"));
        assert_eq!(Some(ReplCommand::Unknown("dance".to_string())), parse_command("dance now"));
        assert_eq!(None, parse_command("   "));
    }

    #[test]
    fn test_timestamp_format() {
        let instant = NaiveDateTime::parse_from_str("2021-05-18 12:45", TIMESTAMP_FORMAT).unwrap();
        assert_eq!("2021-05-18 12:45", instant.format(TIMESTAMP_FORMAT).to_string());
    }
}
