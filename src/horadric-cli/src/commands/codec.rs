//! Property codec commands: translate, parse, templates

use anyhow::{bail, Context, Result};
use horadric::{combine_all_attributes, Property, PropertyCodec};
use std::io::{self, BufRead};

use super::standard_codec;
use crate::cli::ParseFormat;

/// Handle `translate`
pub fn translate(code: &str, min: i32, max: Option<i32>, param: Option<String>) -> Result<()> {
    let codec = standard_codec()?;
    let prop = build_property(code, min, max, param);
    println!("{}", codec.translate(&prop));
    Ok(())
}

fn build_property(code: &str, min: i32, max: Option<i32>, param: Option<String>) -> Property {
    let max = max.unwrap_or(min);
    match param {
        Some(p) => Property::with_param(code, p, min, max),
        None => Property::new(code, min, max),
    }
}

/// Handle `parse`
pub fn parse(text: Vec<String>, format: ParseFormat, no_combine: bool) -> Result<()> {
    let lines = if text.is_empty() {
        read_stdin_lines()?
    } else {
        text
    };

    if lines.is_empty() {
        bail!("No text to parse (pass lines as arguments or on stdin)");
    }

    let codec = standard_codec()?;
    let props = parse_lines(&codec, &lines, !no_combine);

    match format {
        ParseFormat::Json => {
            let json = serde_json::to_string_pretty(&props).context("Failed to serialize properties")?;
            println!("{}", json);
        }
        ParseFormat::Text => {
            for prop in &props {
                println!("{}", format_parsed(prop));
            }
        }
    }

    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let mut lines = Vec::new();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    Ok(lines)
}

/// Reverse-translate lines, optionally folding the four attributes together
pub fn parse_lines(codec: &PropertyCodec, lines: &[String], combine: bool) -> Vec<Property> {
    let props: Vec<Property> = lines.iter().map(|l| codec.reverse_translate(l)).collect();
    if combine {
        combine_all_attributes(&props, codec)
    } else {
        props
    }
}

fn format_parsed(prop: &Property) -> String {
    if prop.is_raw() {
        return format!("{:<16} {:?}", prop.code, prop.display_text);
    }

    let value = if prop.min == prop.max {
        prop.min.to_string()
    } else {
        format!("{}..{}", prop.min, prop.max)
    };

    if prop.param.is_empty() {
        format!("{:<16} {:<10} {}", prop.code, value, prop.display_text)
    } else {
        format!(
            "{:<16} {:<10} [{}] {}",
            prop.code, value, prop.param, prop.display_text
        )
    }
}

/// Handle `templates`
pub fn templates(code: Option<String>, order: bool) -> Result<()> {
    let codec = standard_codec()?;

    if order {
        for (i, code) in codec.pattern_order().enumerate() {
            println!("{:>4}  {:<16} {}", i + 1, code, codec.template(code).unwrap_or(""));
        }
        return Ok(());
    }

    let rows = template_rows(&codec, code.as_deref());
    if rows.is_empty() {
        if let Some(c) = code {
            bail!("No template for code '{}'", c);
        }
    }

    for (code, template) in rows {
        println!("{:<16} {}", code, template);
    }

    Ok(())
}

/// Code/template pairs sorted by code, optionally limited to one code
fn template_rows(codec: &PropertyCodec, filter: Option<&str>) -> Vec<(&'static str, &'static str)> {
    let mut rows: Vec<_> = codec
        .known_codes()
        .filter(|c| filter.map_or(true, |f| f.eq_ignore_ascii_case(c)))
        .filter_map(|c| codec.template(c).map(|t| (c, t)))
        .collect();
    rows.sort_unstable();
    rows
}
