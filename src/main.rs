//! lexlight - style a source file and inspect its brackets from the terminal

use std::env;
use std::fs;
use std::io::{self, Write};
use std::cell::OnceCell;
use std::path::{Path, PathBuf};
use std::process;

use tracing::level_filters::LevelFilter;

use lexlight::brackets::{self, BracketReport, CaretMatch};
use lexlight::config::Config;
use lexlight::error::{LexlightError, Result};
use lexlight::syntax::{LanguageDefinition, LanguageRegistry, StyledSpan, FALLBACK_LANGUAGE};
use lexlight::terminal::{self, BracketHighlights};
use lexlight::text::line_col;
use lexlight::{Engine, Outcome, TooLarge};

/// What the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Report {
    Styled,
    Spans,
    Pairs,
    Unmatched,
    Balanced,
}

#[derive(Debug, Default)]
struct Options {
    file: Option<PathBuf>,
    language: Option<String>,
    caret: Option<usize>,
    config: Option<PathBuf>,
    reports: Vec<Report>,
    list_languages: bool,
    no_color: bool,
    verbosity: u8,
    help: bool,
    version: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let opts = parse_args(env::args().skip(1))?;

    if opts.help {
        print_usage();
        return Ok(());
    }
    if opts.version {
        print_version();
        return Ok(());
    }

    let config = match &opts.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    init_logging(bump_level(config.log_level, opts.verbosity));

    let mut registry = LanguageRegistry::with_builtins();
    if let Some(dir) = &config.language_dir {
        if let Err(e) = registry.load_dir(dir) {
            tracing::warn!(dir = %dir.display(), "cannot read language directory: {}", e);
        }
    }

    if opts.list_languages {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let path = opts
        .file
        .as_deref()
        .ok_or_else(|| LexlightError::Message("no input file (try --help)".to_string()))?;
    let text = read_document(path)?;

    let fallback = LanguageDefinition::new(FALLBACK_LANGUAGE);
    let language = match &opts.language {
        Some(name) => registry
            .get(name)
            .ok_or_else(|| LexlightError::UnknownLanguage(name.clone()))?,
        None => registry.detect(path).unwrap_or(&fallback),
    };
    tracing::info!(file = %path.display(), language = %language.name, "styling");

    let engine = Engine::new(config.limits());
    let mut out = io::stdout().lock();

    let reports = if opts.reports.is_empty() {
        vec![Report::Styled]
    } else {
        opts.reports.clone()
    };

    let caret_found = opts.caret.and_then(|caret| engine.caret_match(&text, caret).done());
    let bracket_report = OnceCell::new();
    let scan = || engine.scan_document(&text);

    for report in reports {
        match report {
            Report::Styled => {
                let color = config.color && !opts.no_color;
                let spans = style_or_warn(&engine, &text, language);
                let highlights = highlights_for(caret_found, bracket_report.get_or_init(scan));
                terminal::render(&mut out, &text, &spans, &highlights, color)?;
                if let (Some(caret), Some(found)) = (opts.caret, caret_found) {
                    print_caret(&text, caret, found, config.tab_width);
                }
            }
            Report::Spans => print_spans(&mut out, &engine, &text, language)?,
            Report::Pairs => print_pairs(&mut out, &text, bracket_report.get_or_init(scan))?,
            Report::Unmatched => print_unmatched(&mut out, &text, bracket_report.get_or_init(scan))?,
            Report::Balanced => {
                print_balanced(&mut out, &text, engine.is_balanced(&text), bracket_report.get_or_init(scan))?
            }
        }
    }

    Ok(())
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Options> {
    let mut opts = Options::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => opts.help = true,
            "--version" | "-V" => opts.version = true,
            "--lang" | "-l" => opts.language = Some(value_for(&arg, args.next())?),
            "--caret" | "-c" => {
                let value = value_for(&arg, args.next())?;
                let caret = value
                    .parse()
                    .map_err(|_| LexlightError::Message(format!("invalid caret offset '{}'", value)))?;
                opts.caret = Some(caret);
            }
            "--config" => opts.config = Some(PathBuf::from(value_for(&arg, args.next())?)),
            "--spans" => opts.reports.push(Report::Spans),
            "--pairs" => opts.reports.push(Report::Pairs),
            "--unmatched" => opts.reports.push(Report::Unmatched),
            "--balanced" => opts.reports.push(Report::Balanced),
            "--languages" => opts.list_languages = true,
            "--no-color" => opts.no_color = true,
            "-v" | "--verbose" => opts.verbosity += 1,
            "-vv" => opts.verbosity += 2,
            s if s.starts_with('-') && s.len() > 1 => {
                return Err(LexlightError::Message(format!("unknown option '{}'", s)));
            }
            _ => {
                if opts.file.is_some() {
                    return Err(LexlightError::Message("only one input file is supported".to_string()));
                }
                opts.file = Some(PathBuf::from(arg));
            }
        }
    }

    Ok(opts)
}

fn value_for(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| LexlightError::Message(format!("{} needs a value", flag)))
}

fn bump_level(level: LevelFilter, verbosity: u8) -> LevelFilter {
    const LEVELS: [LevelFilter; 6] = [
        LevelFilter::OFF,
        LevelFilter::ERROR,
        LevelFilter::WARN,
        LevelFilter::INFO,
        LevelFilter::DEBUG,
        LevelFilter::TRACE,
    ];
    let current = LEVELS.iter().position(|&l| l == level).unwrap_or(2);
    LEVELS[(current + verbosity as usize).min(LEVELS.len() - 1)]
}

fn init_logging(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LexlightError::FileNotFound(path.display().to_string()),
        _ => LexlightError::Io(e),
    })
}

fn style_or_warn(engine: &Engine, text: &str, language: &LanguageDefinition) -> Vec<StyledSpan> {
    match engine.style(text, language) {
        Outcome::Done(spans) => spans,
        Outcome::Skipped(reason) => {
            tracing::warn!("document has {} chars, over the style limit of {}", reason.chars, reason.limit);
            Vec::new()
        }
    }
}

/// Caret pair plus every unmatched bracket in the document
fn highlights_for(caret: Option<CaretMatch>, report: &Outcome<BracketReport>) -> BracketHighlights {
    let mut highlights = caret.map(BracketHighlights::from_caret).unwrap_or_default();
    if let Outcome::Done(report) = report {
        highlights.bad.extend(report.unmatched.iter().copied());
    }
    highlights
}

/// Describe the caret lookup on stderr so it does not mix with the text
fn print_caret(text: &str, caret: usize, found: CaretMatch, tab_width: usize) {
    match found {
        CaretMatch::Matched { .. } => {
            if let Some(pair) = found.pair() {
                let (open_line, _) = line_col(text, pair.open);
                let (close_line, _) = line_col(text, pair.close);
                eprintln!(
                    "caret {}: brackets {} and {} match (lines {}-{}, guide column {})",
                    caret,
                    pair.open,
                    pair.close,
                    open_line + 1,
                    close_line + 1,
                    brackets::guide_column(text, pair, tab_width)
                );
            }
        }
        CaretMatch::Bad { at } => eprintln!("caret {}: bracket {} has no partner", caret, at),
        CaretMatch::NoBracket => eprintln!("caret {}: no bracket", caret),
    }
}

fn print_spans<W: Write>(out: &mut W, engine: &Engine, text: &str, language: &LanguageDefinition) -> Result<()> {
    match engine.style(text, language) {
        Outcome::Done(spans) => {
            for span in spans {
                let (line, col) = line_col(text, span.start);
                writeln!(out, "{}:{}\t{}\t{}\t{}", line + 1, col + 1, span.start, span.len, span.category.name())?;
            }
        }
        Outcome::Skipped(reason) => write_skipped(out, reason)?,
    }
    Ok(())
}

fn print_pairs<W: Write>(out: &mut W, text: &str, report: &Outcome<BracketReport>) -> Result<()> {
    match report {
        Outcome::Done(report) => {
            for pair in &report.pairs {
                let (open_line, open_col) = line_col(text, pair.open);
                let (close_line, close_col) = line_col(text, pair.close);
                writeln!(
                    out,
                    "{}:{} -> {}:{}\t({}, {})",
                    open_line + 1,
                    open_col + 1,
                    close_line + 1,
                    close_col + 1,
                    pair.open,
                    pair.close
                )?;
            }
        }
        Outcome::Skipped(reason) => write_skipped(out, *reason)?,
    }
    Ok(())
}

fn print_unmatched<W: Write>(out: &mut W, text: &str, report: &Outcome<BracketReport>) -> Result<()> {
    match report {
        Outcome::Done(report) => {
            let chars: Vec<char> = text.chars().collect();
            for &pos in &report.unmatched {
                let (line, col) = line_col(text, pos);
                writeln!(out, "{}:{}\t{}\t{}", line + 1, col + 1, pos, chars[pos])?;
            }
        }
        Outcome::Skipped(reason) => write_skipped(out, *reason)?,
    }
    Ok(())
}

fn print_balanced<W: Write>(
    out: &mut W,
    text: &str,
    balanced: Outcome<bool>,
    report: &Outcome<BracketReport>,
) -> Result<()> {
    match balanced {
        Outcome::Done(true) => writeln!(out, "balanced")?,
        Outcome::Done(false) => {
            let first_bad = match report {
                Outcome::Done(report) => report.unmatched.iter().copied().min(),
                Outcome::Skipped(_) => None,
            };
            match first_bad {
                Some(pos) => {
                    let (line, col) = line_col(text, pos);
                    writeln!(out, "unbalanced (first unmatched bracket at {}:{})", line + 1, col + 1)?
                }
                // tolerant pairing accepted every bracket; only the nesting is crossed
                None => writeln!(out, "unbalanced (crossed nesting)")?,
            }
        }
        Outcome::Skipped(reason) => write_skipped(out, reason)?,
    }
    Ok(())
}

fn write_skipped<W: Write>(out: &mut W, reason: TooLarge) -> Result<()> {
    writeln!(out, "skipped: {} chars exceeds limit {}", reason.chars, reason.limit)?;
    Ok(())
}

fn print_usage() {
    println!("lexlight {} - syntax styling and brace matching", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: lexlight [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -l, --lang NAME    Use language NAME instead of detecting it");
    println!("  -c, --caret N      Highlight the brackets around char offset N");
    println!("      --spans        Print styled spans (line:col, start, length, category)");
    println!("      --pairs        Print matched bracket pairs");
    println!("      --unmatched    Print unmatched brackets");
    println!("      --balanced     Check strict bracket nesting");
    println!("      --languages    List known languages");
    println!("      --config PATH  Read settings from PATH instead of ~/.lexlight.conf");
    println!("      --no-color     Print the text without styling");
    println!("  -v, --verbose      More log output (repeatable)");
    println!("  -h, --help         Show this help message");
    println!("  -V, --version      Show version information");
}

fn print_version() {
    println!("lexlight {}", env!("CARGO_PKG_VERSION"));
}
