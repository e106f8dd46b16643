use anyhow::{Context, Result};
use blockwise_config::Settings;
use blockwise_engine::{
    Editor, LineSource, Position, SelectOutcome, Selection, TextDocument, handle_keystroke,
    locate, parsing::snapshot, select_block, suggest_at_cursor,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "blockwise",
    version,
    about = "Block-aware selection and prefix replacement for Markdown lines"
)]
struct Cli {
    /// Settings file (defaults to ~/.config/blockwise/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the block prefix of every line
    Classify { file: PathBuf },
    /// Select the block content under a caret or selection
    Select {
        file: PathBuf,
        #[arg(long)]
        line: usize,
        #[arg(long)]
        ch: usize,
        /// Head line when selecting a range (defaults to --line)
        #[arg(long)]
        head_line: Option<usize>,
        /// Head column when selecting a range (defaults to --ch)
        #[arg(long)]
        head_ch: Option<usize>,
    },
    /// Show the interior lines of the code block around a caret
    CodeBlock {
        file: PathBuf,
        #[arg(long)]
        line: usize,
        #[arg(long)]
        ch: usize,
    },
    /// Apply prefix replacement to a line as it reads after a keystroke
    Override {
        text: String,
        /// Caret column (defaults to the end of the text)
        #[arg(long)]
        cursor: Option<usize>,
    },
    /// List checkbox or callout suggestions for a partially typed line
    Suggest {
        text: String,
        /// Caret column (defaults to the end of the text)
        #[arg(long)]
        cursor: Option<usize>,
    },
}

fn load_document(path: &Path) -> Result<TextDocument> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    TextDocument::from_bytes(&bytes).with_context(|| format!("Failed to load {}", path.display()))
}

/// A one-line document with the caret at `cursor` (or the end).
fn line_document(text: &str, cursor: Option<usize>) -> TextDocument {
    let mut doc = TextDocument::new(text);
    let ch = cursor.unwrap_or_else(|| text.chars().count());
    doc.set_selections(&[Selection::caret(Position::new(0, ch))]);
    doc
}

fn classify_file(path: &Path) -> Result<()> {
    let doc = load_document(path)?;
    let snap = snapshot::normalize(&doc);
    for l in snap.lines {
        let kind = l.kind.as_deref().unwrap_or("-");
        let code = if l.in_code_block { " code" } else { "" };
        println!(
            "{:>4} {:<8} {:>3}{} | {}",
            l.line, kind, l.prefix_len, code, l.content
        );
    }
    Ok(())
}

fn select(path: &Path, selection: Selection, settings: &Settings) -> Result<()> {
    let mut doc = load_document(path)?;
    doc.set_selections(&[selection]);

    match select_block(&mut doc, settings) {
        SelectOutcome::Expanded(_) => println!("expanded"),
        SelectOutcome::CodeBlock { start, end } => println!("code block {start}..={end}"),
        SelectOutcome::Fallback(reason) => println!("fallback: {reason:?}"),
    }
    for sel in doc.selections() {
        println!("{sel}");
        println!("{}", doc.range(sel.from(), sel.to()));
    }
    Ok(())
}

fn code_block(path: &Path, cursor: Position) -> Result<()> {
    let doc = load_document(path)?;
    match locate(&doc, cursor, "") {
        Some((start, end)) => {
            println!("{start}..={end}");
            for index in start..=end {
                if let Some(line) = doc.line(index) {
                    println!("{line}");
                }
            }
        }
        None => println!("not inside a code block"),
    }
    Ok(())
}

fn override_line(text: &str, cursor: Option<usize>, settings: &Settings) {
    let mut doc = line_document(text, cursor);
    match handle_keystroke(&mut doc, settings) {
        Some(edit) => {
            println!(
                "replace {}..{} with {:?}",
                edit.range.start, edit.range.end, edit.text
            );
            println!("{}", doc.text());
        }
        None => println!("no override"),
    }
}

fn suggest(text: &str, cursor: Option<usize>, settings: &Settings) {
    let doc = line_document(text, cursor);
    match suggest_at_cursor(&doc, settings) {
        Some(s) => {
            println!("{:?} query {:?}", s.trigger.kind, s.trigger.query);
            for candidate in s.candidates {
                println!("{candidate:?}");
            }
        }
        None => println!("no suggestions"),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    let settings = Settings::load_or_default(cli.config.as_deref())
        .context("Failed to load settings")?;
    log::debug!("settings: {settings:?}");

    match cli.command {
        Command::Classify { file } => classify_file(&file)?,
        Command::Select {
            file,
            line,
            ch,
            head_line,
            head_ch,
        } => {
            let anchor = Position::new(line, ch);
            let head = Position::new(head_line.unwrap_or(line), head_ch.unwrap_or(ch));
            select(&file, Selection::new(anchor, head), &settings)?;
        }
        Command::CodeBlock { file, line, ch } => code_block(&file, Position::new(line, ch))?,
        Command::Override { text, cursor } => override_line(&text, cursor, &settings),
        Command::Suggest { text, cursor } => suggest(&text, cursor, &settings),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn select_parses_range_flags() {
        let cli = Cli::parse_from([
            "blockwise", "select", "notes.md", "--line", "2", "--ch", "4", "--head-ch", "9",
        ]);
        match cli.command {
            Command::Select {
                line,
                ch,
                head_line,
                head_ch,
                ..
            } => assert_eq!((line, ch, head_line, head_ch), (2, 4, None, Some(9))),
            _ => panic!("expected select"),
        }
    }

    #[test]
    fn line_document_caret_defaults_to_end() {
        let doc = line_document("1. - ", None);
        assert_eq!(doc.cursor(), Position::new(0, 5));
    }
}
