use anyhow::{bail, Context, Result};
use colored::Colorize;
use nhakhoa_forms::{AppConfig, SchemaKind};
use nhakhoa_validation::{ValidationErrors, Validator};
use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

pub fn execute(config: &AppConfig, kind: SchemaKind, input: &Path, json: bool) -> Result<ExitCode> {
    debug!(schema = %kind, ?input, "validating record");
    let raw = read_input(input)?;
    let record: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {:?}", input))?;

    let errors = validate_value(&config.validator(), kind, &record)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&errors)?);
    } else if errors.is_empty() {
        println!("{} {}", "✓".green().bold(), format!("{} record is valid", kind).green());
    } else {
        println!(
            "{} {}",
            "✗".red().bold(),
            format!("{} record has {} invalid field(s)", kind, errors.len()).red()
        );
        for (field, message) in errors.iter() {
            println!("  {}: {}", field.yellow(), message);
        }
    }

    Ok(if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Validate one JSON object against the named schema
pub fn validate_value(
    validator: &Validator,
    kind: SchemaKind,
    record: &serde_json::Value,
) -> Result<ValidationErrors> {
    if !record.is_object() {
        bail!("Expected a JSON object, got: {}", record);
    }
    let schema = kind.schema(validator.messages());
    Ok(validator.validate_form(record, &schema))
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(input).with_context(|| format!("Failed to read input file: {:?}", input))
}
