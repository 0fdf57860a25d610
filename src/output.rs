//! Output formatting for parsed queries and raw tokens

use crate::query::{ParsedQuery, RawToken, Token, classify};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// How a parsed query is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented, colored tree
    #[default]
    Tree,
    /// Single-line JSON
    Json,
    /// Indented JSON
    Pretty,
}

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto => ColorChoice::Auto,
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }
}

/// Print a parsed query to stdout
pub fn print_query(query: &ParsedQuery, format: OutputFormat, color: ColorMode) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color.choice());
    write_query(&mut stdout, query, format)
}

/// Write a parsed query in the given format
pub fn write_query<W: WriteColor>(
    out: &mut W,
    query: &ParsedQuery,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Tree => write_tree(out, query),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, query)?;
            writeln!(out)
        }
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut *out, query)?;
            writeln!(out)
        }
    }
}

/// Write the query as a tree of sections: terms, filters, operators
pub fn write_tree<W: WriteColor>(out: &mut W, query: &ParsedQuery) -> io::Result<()> {
    write_section(out, "terms", query.terms.len())?;
    for token in &query.terms {
        write_token_line(out, token)?;
    }

    write_section(out, "filters", query.filters.len())?;
    for token in &query.filters {
        write_token_line(out, token)?;
    }

    write_section(out, "operators", query.operators.len())?;
    for op in &query.operators {
        write!(out, "  ")?;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        writeln!(out, "{}", op)?;
        out.reset()?;
    }

    Ok(())
}

fn write_section<W: WriteColor>(out: &mut W, name: &str, count: usize) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(out, "{}", name)?;
    out.reset()?;
    writeln!(out, " ({})", count)
}

fn write_token_line<W: WriteColor>(out: &mut W, token: &Token) -> io::Result<()> {
    write!(out, "  ")?;
    out.set_color(ColorSpec::new().set_fg(Some(kind_color(token))))?;
    write!(out, "{:<16}", token.kind())?;
    out.reset()?;

    match token {
        Token::FieldSearch { field, value } => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(out, "{}", field)?;
            out.reset()?;
            writeln!(out, " = {:?}", value)
        }
        Token::DateFilter { field, value } => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
            write!(out, "{}", field.as_str())?;
            out.reset()?;
            writeln!(out, " = {:?}", value)
        }
        Token::DurationFilter { value } => {
            write!(out, "{:?}", value)?;
            if value.has_nan() {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
                write!(out, " (not a number)")?;
                out.reset()?;
            }
            writeln!(out)
        }
        Token::Term { value } | Token::Not { value } | Token::ExactPhrase { value } => {
            writeln!(out, "{:?}", value)
        }
        Token::Operator { value } => writeln!(out, "{}", value),
    }
}

fn kind_color(token: &Token) -> Color {
    match token {
        Token::Term { .. } => Color::Green,
        Token::Not { .. } => Color::Red,
        Token::ExactPhrase { .. } => Color::Blue,
        Token::FieldSearch { .. } => Color::Cyan,
        Token::DateFilter { .. } | Token::DurationFilter { .. } => Color::Magenta,
        Token::Operator { .. } => Color::Yellow,
    }
}

/// Print raw tokens with their phrase flag and classification
pub fn print_raw_tokens(tokens: &[RawToken], color: ColorMode) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color.choice());
    write_raw_tokens(&mut stdout, tokens)
}

pub fn write_raw_tokens<W: WriteColor>(out: &mut W, tokens: &[RawToken]) -> io::Result<()> {
    for (i, raw) in tokens.iter().enumerate() {
        let token = classify(raw);

        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "{}", i)?;
        out.reset()?;
        write!(out, ":")?;

        write!(out, "{:?}", raw.text)?;
        if raw.phrase {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)))?;
            write!(out, " [phrase]")?;
            out.reset()?;
        }

        write!(out, " -> ")?;
        out.set_color(ColorSpec::new().set_fg(Some(kind_color(&token))).set_bold(true))?;
        writeln!(out, "{}", token.kind())?;
        out.reset()?;
    }

    Ok(())
}
