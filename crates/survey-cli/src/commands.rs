//! Command implementations over the engine.

use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use comfy_table::{Table, presets::UTF8_FULL_CONDENSED};
use survey_engine::cascade::{CascadeImporter, CascadeState};
use survey_engine::paths::{PathOptions, flatten_questions, resolve_paths};
use survey_engine::{library, locking};
use survey_model::{Document, Restriction};

use crate::cli::{CascadeArgs, ExtractArgs, LocksArgs, PathsArgs, SummaryArgs};

fn load_document(path: &Path) -> anyhow::Result<Document> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading document {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parsing document {}", path.display()))
}

fn write_document(doc: &Document, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(doc).context("serializing document")?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn run_paths(args: &PathsArgs) -> anyhow::Result<()> {
    let doc = load_document(&args.document)?;
    let table = resolve_paths(
        &doc.rows,
        PathOptions {
            include_groups: args.include_groups,
            include_meta: args.include_meta,
        },
    );

    let mut out = Table::new();
    out.load_preset(UTF8_FULL_CONDENSED);
    out.set_header(["Identity", "Path"]);
    for entry in &table {
        out.add_row([entry.identity.as_str(), entry.path.as_str()]);
    }
    println!("{out}");
    tracing::info!(paths = table.len(), "resolved paths");
    Ok(())
}

pub fn run_summary(args: &SummaryArgs) -> anyhow::Result<()> {
    let doc = load_document(&args.document)?;
    let translation_index = match args.language.as_deref() {
        Some(language) => doc
            .translation_index(language)
            .with_context(|| format!("document declares no translation {language:?}"))?,
        None => 0,
    };
    let questions = flatten_questions(&doc.rows, translation_index, args.include_meta);

    let mut out = Table::new();
    out.load_preset(UTF8_FULL_CONDENSED);
    out.set_header(["Path", "Label", "Groups", "In repeat"]);
    for question in &questions {
        out.add_row([
            question.path.clone(),
            question.label.clone().unwrap_or_default(),
            question.group_labels.join(" > "),
            if question.in_repeat { "yes" } else { "" }.to_string(),
        ]);
    }
    println!("{out}");
    Ok(())
}

pub fn run_extract(args: &ExtractArgs) -> anyhow::Result<()> {
    let doc = load_document(&args.document)?;
    let asset = match (&args.question, &args.group) {
        (Some(identity), None) => library::extract_question(&doc, identity)
            .with_context(|| format!("no question with identity {identity:?}"))?,
        (None, Some(identity)) => library::extract_group(&doc, identity)
            .with_context(|| format!("no extractable group with identity {identity:?}"))?,
        _ => bail!("exactly one of --question or --group is required"),
    };

    match &args.output {
        Some(path) => {
            write_document(&asset, path)?;
            tracing::info!(
                rows = asset.rows.len(),
                choices = asset.choices.len(),
                output = %path.display(),
                "asset extracted"
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&asset)?),
    }
    Ok(())
}

pub fn run_cascade(args: &CascadeArgs) -> anyhow::Result<()> {
    let mut doc = load_document(&args.document)?;
    let text = fs::read_to_string(&args.table)
        .with_context(|| format!("reading table {}", args.table.display()))?;

    let mut importer = CascadeImporter::new();
    importer.update_input(&text);
    match importer.state() {
        CascadeState::Idle => bail!("cascade importer did not consume the input"),
        CascadeState::Invalid { message } => bail!("invalid table: {message}"),
        CascadeState::Ready { row_count } => {
            println!("parsed cascade: {row_count} select questions");
        }
    }

    if args.apply {
        let inserted = importer
            .confirm(&mut doc, args.after.as_deref())
            .context("splicing cascade into document")?;
        let output = args.output.as_ref().expect("clap enforces --output with --apply");
        write_document(&doc, output)?;
        println!("spliced {inserted} rows into {}", output.display());
    }
    Ok(())
}

pub fn run_locks(args: &LocksArgs) -> anyhow::Result<()> {
    let doc = load_document(&args.document)?;
    println!(
        "locking: {}  fully locked: {}",
        if locking::has_any_locking(&doc) { "yes" } else { "no" },
        if locking::is_fully_locked(&doc) { "yes" } else { "no" },
    );

    let mut out = Table::new();
    out.load_preset(UTF8_FULL_CONDENSED);
    out.set_header(["Restriction", "Document", "Rows affected"]);
    for restriction in Restriction::all() {
        let document_level = locking::has_restriction(&doc, None, *restriction);
        let rows_affected = doc
            .rows
            .iter()
            .filter(|row| locking::has_restriction(&doc, Some(row), *restriction))
            .count();
        if document_level || rows_affected > 0 {
            out.add_row([
                restriction.as_str().to_string(),
                if document_level { "yes" } else { "" }.to_string(),
                if rows_affected > 0 {
                    rows_affected.to_string()
                } else {
                    String::new()
                },
            ]);
        }
    }
    println!("{out}");
    Ok(())
}
