use crate::catalog::{Catalog, WordPair};
use crate::error::AppError;
use crate::filter;
use crate::ui::list::EMPTY_STATE;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;

/// Dictionary of Russian paronyms with definitions and usage examples
#[derive(Parser, Debug)]
#[command(name = "paronyms", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log file for the interactive explorer (defaults to the cache directory)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the interactive explorer (default)
    Tui,
    /// Print the pairs whose words contain a query
    List {
        /// Case-insensitive substring of either word
        #[arg(short, long, default_value = "")]
        query: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print one pair with all of its examples
    Show {
        /// Pair id as shown in the list
        id: u32,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub fn handle_list(
    catalog: &Catalog,
    query: &str,
    as_json: bool,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let matches = filter::filter(catalog, query);

    if as_json {
        let payload = json!({
            "query": query,
            "count": matches.len(),
            "total": catalog.len(),
            "results": matches,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
        return Ok(());
    }

    if !query.is_empty() {
        writeln!(out, "Найдено пар: {}", matches.len())?;
        if matches.is_empty() {
            writeln!(out, "{EMPTY_STATE}")?;
            return Ok(());
        }
        writeln!(out)?;
    }
    for pair in &matches {
        writeln!(out, "#{:<3} {} — {}", pair.id, pair.word1, pair.word2)?;
        writeln!(out, "     {}: {}", pair.word1, pair.definition1)?;
        writeln!(out, "     {}: {}", pair.word2, pair.definition2)?;
    }
    writeln!(out)?;
    writeln!(out, "Всего в словаре: {} пар паронимов", catalog.len())?;
    Ok(())
}

pub fn handle_show(
    catalog: &Catalog,
    id: u32,
    as_json: bool,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let pair = catalog.get(id).ok_or(AppError::UnknownPair(id))?;

    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(pair)?)?;
    } else {
        print_pair(pair, out)?;
    }
    Ok(())
}

fn print_pair(pair: &WordPair, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "#{} {} — {}", pair.id, pair.word1, pair.word2)?;
    for (word, definition, examples) in [
        (&pair.word1, &pair.definition1, &pair.examples_word1),
        (&pair.word2, &pair.definition2, &pair.examples_word2),
    ] {
        writeln!(out)?;
        writeln!(out, "{word}: {definition}")?;
        for example in examples {
            writeln!(out, "  ✓ {example}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_list(query: &str, as_json: bool) -> String {
        let catalog = Catalog::builtin().unwrap();
        let mut out = Vec::new();
        handle_list(&catalog, query, as_json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_defaults_to_no_command() {
        let cli = Cli::try_parse_from(["paronyms"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_list_and_show() {
        let cli = Cli::try_parse_from(["paronyms", "-vv", "list", "-q", "эфф", "--json"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(
            cli.command,
            Some(Command::List {
                query: "эфф".to_string(),
                json: true
            })
        );

        let cli = Cli::try_parse_from(["paronyms", "show", "3"]).unwrap();
        assert_eq!(cli.command, Some(Command::Show { id: 3, json: false }));
        assert!(Cli::try_parse_from(["paronyms", "show", "abc"]).is_err());
    }

    #[test]
    fn test_list_without_query_prints_everything() {
        let text = run_list("", false);
        assert!(!text.contains("Найдено пар"));
        assert_eq!(text.lines().filter(|l| l.starts_with('#')).count(), 6);
        assert!(text.contains("Всего в словаре: 6 пар паронимов"));
    }

    #[test]
    fn test_list_with_query_prints_count() {
        let text = run_list("ЭФФЕКТ", false);
        assert!(text.starts_with("Найдено пар: 1"));
        assert!(text.contains("#1   эффектный — эффективный"));
    }

    #[test]
    fn test_list_no_match_prints_empty_state() {
        let text = run_list("zzz-no-match", false);
        assert!(text.contains("Найдено пар: 0"));
        assert!(text.contains(EMPTY_STATE));
    }

    #[test]
    fn test_list_json() {
        let text = run_list("адрес", true);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["total"], 6);
        assert_eq!(value["results"][0]["word2"], "адресант");
        assert_eq!(value["results"][0]["examples_word1"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_show_prints_examples_verbatim() {
        let catalog = Catalog::builtin().unwrap();
        let mut out = Vec::new();
        handle_show(&catalog, 3, false, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let pair = catalog.get(3).unwrap();
        for example in pair.examples_word1.iter().chain(&pair.examples_word2) {
            assert!(text.contains(&format!("  ✓ {example}")));
        }
        assert_eq!(text.matches('✓').count(), 6);
    }

    #[test]
    fn test_show_unknown_id() {
        let catalog = Catalog::builtin().unwrap();
        let mut out = Vec::new();
        let err = handle_show(&catalog, 77, true, &mut out).unwrap_err();
        assert!(matches!(err, AppError::UnknownPair(77)));
        assert!(out.is_empty());
    }
}
