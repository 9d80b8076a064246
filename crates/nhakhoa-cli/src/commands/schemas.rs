use anyhow::Result;
use colored::Colorize;
use nhakhoa_forms::{AppConfig, SchemaKind};
use nhakhoa_validation::{Messages, Rule};
use std::process::ExitCode;

pub fn execute(config: &AppConfig) -> Result<ExitCode> {
    let messages = config.messages();

    for kind in SchemaKind::ALL {
        println!("{}", kind.name().cyan().bold());
        for (field, rules) in describe(kind, &messages) {
            println!("  {:<14} {}", field, rules.dimmed());
        }
        println!();
    }

    Ok(ExitCode::SUCCESS)
}

/// Field name and a one-line rule summary, in declaration order
pub fn describe(kind: SchemaKind, messages: &Messages) -> Vec<(&'static str, String)> {
    let schema = kind.schema(messages);

    kind.field_names(messages)
        .into_iter()
        .map(|field| {
            let summary = schema
                .rules(field)
                .map(|rules| {
                    rules
                        .iter()
                        .map(Rule::describe)
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .unwrap_or_default();
            (field, summary)
        })
        .collect()
}
