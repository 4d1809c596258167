use std::{fs, path::Path, process::ExitCode};

use anyhow::{Context, Result};
use pingtower_checks::{
    CheckType, CreateCheckRequest, UpdateCheckRequest, ValidationResult,
    discriminate::discriminate_value,
    target::{classify_target, suggest_target_fix},
    templates::{create_check_template, variants},
    validate_create_check_request, validate_update_check_request,
};

use crate::config::Config;

/// Validate a JSON payload file as a create or an update request
pub fn validate_file(path: &Path, update: bool) -> Result<ValidationResult> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload {}", path.display()))?;

    let result = if update {
        let request: UpdateCheckRequest = serde_json::from_str(&raw)
            .with_context(|| format!("{} is not an update payload", path.display()))?;
        if let (None, Some(config)) = (request.check_type, &request.config) {
            let shape = discriminate_value(config)
                .map_or_else(|| "no known".to_string(), |kind| format!("a {kind}"));
            println!("Note: config is not checked without a type, it looks like {shape} config");
        }
        validate_update_check_request(&request)
    } else {
        let request: CreateCheckRequest = serde_json::from_str(&raw)
            .with_context(|| format!("{} is not a create payload", path.display()))?;
        validate_create_check_request(&request)
    };

    Ok(result)
}

pub fn validate(path: &Path, update: bool) -> Result<ExitCode> {
    let result = validate_file(path, update)?;
    print_result(&result);

    Ok(if result.is_valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn print_result(result: &ValidationResult) {
    if result.is_valid {
        println!("Check is valid");
        return;
    }

    println!("Check is invalid ({} error(s)):", result.errors.len());
    for error in &result.errors {
        match &error.value {
            Some(value) => println!("  - {error} (got {value})"),
            None => println!("  - {error}"),
        }
    }
}

fn placeholder_target(kind: CheckType) -> &'static str {
    match kind {
        CheckType::Http => "https://example.com",
        CheckType::Tcp => "example.com",
        CheckType::Ping => "8.8.8.8",
    }
}

pub fn template(
    kind: CheckType,
    variant: &str,
    name: Option<String>,
    target: Option<String>,
) -> Result<ExitCode> {
    if !variants(kind).contains(&variant) {
        tracing::warn!(
            "Unknown {kind} variant '{variant}', using 'basic' (known: {})",
            variants(kind).join(", ")
        );
    }

    let name = name.unwrap_or_else(|| format!("New {kind} check"));
    let target = target.unwrap_or_else(|| placeholder_target(kind).to_string());
    let request = create_check_template(kind, name, target, variant);

    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(ExitCode::SUCCESS)
}

pub fn suggest(kind: CheckType, target: &str) -> ExitCode {
    if classify_target(kind, target) {
        println!("'{target}' is a valid {kind} target");
        return ExitCode::SUCCESS;
    }

    let suggestions = suggest_target_fix(kind, target);
    if suggestions.is_empty() {
        println!("'{target}' is not a valid {kind} target");
    } else {
        println!("'{target}' is not a valid {kind} target, did you mean:");
        for suggestion in suggestions {
            println!("  {suggestion}");
        }
    }

    ExitCode::FAILURE
}

pub async fn submit(config: &Config, path: &Path) -> Result<ExitCode> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read payload {}", path.display()))?;
    let request: CreateCheckRequest = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a create payload", path.display()))?;

    let client = config.client()?;
    match client.create_check(&request).await {
        Ok(check) => {
            println!("Created check #{} '{}'", check.id, check.name);
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            tracing::debug!("Create failed: {:?}", error.details());
            eprintln!("{}", error.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
