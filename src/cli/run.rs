//! Command dispatch for the schemaform CLI.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde_json::Value;

use super::args::{Arguments, Command, CompileCommand};
use crate::{
    builder::FormBuilder,
    config::{CONFIG_FILE_NAME, default_config_json, load_config},
    language::{Culture, LanguageProvider, MessageCatalog, PassthroughProvider},
    metadata::TypeRegistry,
};

pub fn run(args: Arguments) -> Result<()> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(());
    };

    match command {
        Some(Command::Compile(cmd)) => compile(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}

fn compile(CompileCommand { args }: CompileCommand) -> Result<()> {
    let config = load_config(Path::new("."))?.config;

    let registry = TypeRegistry::from_json_file(&args.schema)?;

    // CLI arguments override the config file
    let messages_dir = args
        .messages
        .clone()
        .or_else(|| config.messages_root.as_deref().map(PathBuf::from));
    let language: Box<dyn LanguageProvider> = match messages_dir {
        Some(dir) => Box::new(MessageCatalog::load_dir(&dir)?),
        None => Box::new(PassthroughProvider),
    };

    let cultures: Vec<Culture> = if args.culture.is_empty() {
        vec![Culture::new(config.default_culture.as_str())]
    } else {
        args.culture.iter().map(|c| Culture::new(c.as_str())).collect()
    };

    let builder = FormBuilder::new(&registry, language.as_ref());

    // Each culture is an independent compilation request with its own
    // output tree.
    let documents: Vec<(Culture, Vec<Value>)> = cultures
        .par_iter()
        .map(|culture| {
            let document = builder.build(&args.type_name, culture)?;
            Ok((culture.clone(), document))
        })
        .collect::<Result<_>>()?;

    let output = render_output(documents);
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    match &args.output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write output to {}", path.display()))?,
        None => println!("{}", rendered),
    }
    Ok(())
}

/// A single culture renders as the bare document; multiple cultures render
/// as an object keyed by culture tag.
fn render_output(documents: Vec<(Culture, Vec<Value>)>) -> Value {
    if let [(_, document)] = documents.as_slice() {
        return Value::Array(document.clone());
    }

    let mut by_culture = serde_json::Map::new();
    for (culture, document) in documents {
        by_culture.insert(culture.to_string(), Value::Array(document));
    }
    Value::Object(by_culture)
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
