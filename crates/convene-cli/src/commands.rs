use std::path::PathBuf;

use anyhow::{bail, Context};
use colored::Colorize;
use convene_sdk::{ContentStore, EntityService, Patch, SeedOutcome, StoreConfig};
use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::*;

/// Run `$body` with `$svc` bound to the service for `$kind`.
macro_rules! with_service {
    ($store:expr, $kind:expr, |$svc:ident| $body:expr) => {
        match $kind {
            Kind::Events => {
                let $svc = $store.events();
                $body
            }
            Kind::Speakers => {
                let $svc = $store.speakers();
                $body
            }
            Kind::Agenda => {
                let $svc = $store.agenda();
                $body
            }
            Kind::Topics => {
                let $svc = $store.topics();
                $body
            }
            Kind::Partners => {
                let $svc = $store.partners();
                $body
            }
            Kind::Faqs => {
                let $svc = $store.faqs();
                $body
            }
            Kind::Resources => {
                let $svc = $store.resources();
                $body
            }
            Kind::Challenges => {
                let $svc = $store.challenges();
                $body
            }
            Kind::Press => {
                let $svc = $store.press_releases();
                $body
            }
            Kind::Marquee => {
                let $svc = $store.marquee();
                $body
            }
        }
    };
}

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(&cli)?;
    if matches!(cli.command, Command::Seed) {
        // Seed explicitly so the report reflects this run.
        config.seed_on_open = false;
    }
    let store = ContentStore::open(&config)
        .with_context(|| format!("opening store at {}", config.data_dir.display()))?;
    let format = cli.format;

    match cli.command {
        Command::Seed => cmd_seed(&store, &format),
        Command::List(args) => {
            let records = with_service!(store, args.kind, |svc| list_records(
                svc,
                args.event.as_deref()
            ))?;
            print_records(&records, &format)
        }
        Command::Show(args) => {
            let record = with_service!(store, args.kind, |svc| show_record(svc, &args.id))?;
            match record {
                Some(record) => print_record(&record, &format),
                None => bail!("no {} record with id {}", kind_name(args.kind), args.id),
            }
        }
        Command::Add(args) => {
            let created = with_service!(store, args.kind, |svc| add_record(svc, &args.json))?;
            if matches!(format, OutputFormat::Text) {
                println!("{} Created {}", "✓".green().bold(), id_of(&created).yellow());
            }
            print_record(&created, &format)
        }
        Command::Set(args) => {
            let patch = build_patch(&args.assignments)?;
            let updated =
                with_service!(store, args.kind, |svc| update_record(svc, &args.id, patch))?;
            match updated {
                Some(record) => {
                    if matches!(format, OutputFormat::Text) {
                        println!("{} Updated {}", "✓".green().bold(), args.id.yellow());
                    }
                    print_record(&record, &format)
                }
                None => bail!(
                    "no {} record with id {} accepted the update",
                    kind_name(args.kind),
                    args.id
                ),
            }
        }
        Command::Remove(args) => {
            let removed = with_service!(store, args.kind, |svc| svc.remove(&args.id));
            if !removed {
                bail!("no {} record with id {}", kind_name(args.kind), args.id);
            }
            println!("{} Removed {}", "✓".green().bold(), args.id.yellow());
            Ok(())
        }
        Command::Overview(args) => {
            let overview = store
                .event_overview(&args.event_id)
                .with_context(|| format!("no event with id {}", args.event_id))?;
            match format {
                OutputFormat::Json => print_json(&overview),
                OutputFormat::Text => {
                    println!(
                        "{}  {}",
                        overview.event.title.bold(),
                        overview.event.id.dimmed()
                    );
                    let state = if overview.event.published {
                        "published".green()
                    } else {
                        "draft".yellow()
                    };
                    println!("  Status:    {state}");
                    println!("  Speakers:  {}", overview.speakers);
                    println!(
                        "  Agenda:    {} days, {} sessions",
                        overview.agenda_days, overview.sessions
                    );
                    println!("  Topics:    {}", overview.topics);
                    println!("  Partners:  {}", overview.partners);
                    println!("  FAQs:      {}", overview.faqs);
                    println!("  Resources: {}", overview.resources);
                    println!("  Challenges: {}", overview.challenges);
                    println!("  Press:     {}", overview.press_releases);
                    println!("  Marquee:   {}", overview.marquee_items);
                    Ok(())
                }
            }
        }
        Command::Partitions => {
            let partitions = store.partitions();
            match format {
                OutputFormat::Json => print_json(&partitions),
                OutputFormat::Text => {
                    for p in &partitions {
                        if p.present {
                            println!("  {:<14} {}", p.key.bold(), p.records);
                        } else {
                            println!("  {:<14} {}", p.key.bold(), "absent".dimmed());
                        }
                    }
                    Ok(())
                }
            }
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<StoreConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("config file {} not found", path.display());
            }
            StoreConfig::load(path)?
        }
        None => StoreConfig::load(&PathBuf::from("convene.toml"))?,
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    Ok(config)
}

fn cmd_seed(store: &ContentStore, format: &OutputFormat) -> anyhow::Result<()> {
    let report = store.seed();
    if let OutputFormat::Json = format {
        let entries: Vec<Value> = report
            .partitions
            .iter()
            .map(|(key, outcome)| match outcome {
                SeedOutcome::Seeded { records } => {
                    json!({ "partition": key, "outcome": "seeded", "records": records })
                }
                SeedOutcome::Skipped => json!({ "partition": key, "outcome": "skipped" }),
                SeedOutcome::Failed(reason) => {
                    json!({ "partition": key, "outcome": "failed", "reason": reason })
                }
            })
            .collect();
        return print_json(&entries);
    }

    for (key, outcome) in &report.partitions {
        match outcome {
            SeedOutcome::Seeded { records } => {
                println!("  {} {key} ({records} records)", "seeded:".green())
            }
            SeedOutcome::Skipped => println!("  {} {key}", "exists:".dimmed()),
            SeedOutcome::Failed(reason) => println!("  {} {key}: {reason}", "failed:".red()),
        }
    }
    if !report.failed().is_empty() {
        bail!("{} partitions failed to seed", report.failed().len());
    }
    Ok(())
}

fn list_records<S: EntityService>(svc: &S, event: Option<&str>) -> anyhow::Result<Vec<Value>> {
    let records = match event {
        Some(event_id) => svc.get_by_event_id(event_id),
        None => svc.get_all(),
    };
    records
        .iter()
        .map(|r| serde_json::to_value(r).context("encoding record"))
        .collect()
}

fn show_record<S: EntityService>(svc: &S, id: &str) -> anyhow::Result<Option<Value>> {
    svc.get_by_id(id)
        .map(|r| serde_json::to_value(r).context("encoding record"))
        .transpose()
}

fn add_record<S: EntityService>(svc: &S, raw: &str) -> anyhow::Result<Value> {
    let item: S::Entity = serde_json::from_str(raw).context("parsing record JSON")?;
    match svc.create(item)? {
        Some(created) => Ok(serde_json::to_value(created)?),
        None => bail!("the record could not be written; see the log for the storage error"),
    }
}

fn update_record<S: EntityService>(
    svc: &S,
    id: &str,
    patch: Patch,
) -> anyhow::Result<Option<Value>> {
    svc.update(id, patch)
        .map(|r| serde_json::to_value(r).context("encoding record"))
        .transpose()
}

/// Parse `field=value` pairs. Values that are valid JSON keep their type;
/// anything else is taken as a string.
fn build_patch(assignments: &[String]) -> anyhow::Result<Patch> {
    let mut patch = Patch::new();
    for assignment in assignments {
        let Some((field, raw)) = assignment.split_once('=') else {
            bail!("expected field=value, got {assignment:?}");
        };
        let field = field.trim();
        if field.is_empty() {
            bail!("empty field name in {assignment:?}");
        }
        if field == "id" {
            bail!("record ids cannot be changed");
        }
        let value =
            serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        patch = patch.set(field, value);
    }
    Ok(patch)
}

fn kind_name(kind: Kind) -> String {
    format!("{kind:?}").to_lowercase()
}

fn id_of(record: &Value) -> &str {
    record.get("id").and_then(Value::as_str).unwrap_or("")
}

/// A short human label for a record of any kind.
fn label(record: &Value) -> String {
    for field in ["title", "name", "question", "text"] {
        if let Some(s) = record.get(field).and_then(Value::as_str) {
            return s.to_string();
        }
    }
    match (record.get("dayNumber"), record.get("date").and_then(Value::as_str)) {
        (Some(n), Some(date)) => format!("Day {n} ({date})"),
        _ => String::new(),
    }
}

fn print_records(records: &[Value], format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(&records),
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No records.");
            }
            for record in records {
                println!("{}  {}", id_of(record).yellow(), label(record));
            }
            Ok(())
        }
    }
}

fn print_record(record: &Value, format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(record),
        OutputFormat::Text => {
            println!("{}  {}", id_of(record).yellow().bold(), label(record).bold());
            if let Some(fields) = record.as_object() {
                for (key, value) in fields {
                    if key == "id" {
                        continue;
                    }
                    match value {
                        Value::String(s) => println!("  {}: {s}", key.cyan()),
                        other => println!("  {}: {other}", key.cyan()),
                    }
                }
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
