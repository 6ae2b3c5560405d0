//! Command handlers — load a record, drive an editor session, persist results.

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::Local;
use tracing::info;

use crate::cli::{Commands, EventCommands, EventFields};
use crate::config::Config;
use crate::editor::{Editor, EventPatch};
use crate::export::write_html;
use crate::import::import_file;
use crate::models::NewsletterData;

pub fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Init { output } => init(output.as_deref()),
        Commands::Render {
            input,
            imports,
            output_dir,
            stdout,
        } => {
            let mut editor = Editor::new(load_record(&input)?);
            for file in &imports {
                editor.import_events(import_file(file)?);
            }
            if stdout {
                print!("{}", editor.html());
                return Ok(());
            }
            let dir = output_dir.as_deref().unwrap_or(config.output_dir.as_path());
            let path = write_html(dir, &editor.export_filename(), editor.html())?;
            println!("{}", path.display());
            Ok(())
        }
        Commands::Filename { input } => {
            let editor = Editor::new(load_record(&input)?);
            println!("{}", editor.export_filename());
            Ok(())
        }
        Commands::Event(command) => run_event(command),
    }
}

fn run_event(command: EventCommands) -> Result<()> {
    match command {
        EventCommands::Add { input } => edit_record(&input, |editor| {
            editor.add_event();
            info!("Added event {}", editor.snapshot().events.len());
            Ok(())
        }),
        EventCommands::Update {
            input,
            number,
            fields,
        } => {
            let index = position_to_index(number)?;
            let patch = EventPatch::from(fields);
            edit_record(&input, |editor| Ok(editor.update_event(index, &patch)?))
        }
        EventCommands::Remove { input, number } => {
            let index = position_to_index(number)?;
            edit_record(&input, |editor| {
                let removed = editor.remove_event(index)?;
                info!("Removed event {number} ({})", removed.title);
                Ok(())
            })
        }
        EventCommands::Import { input, file } => {
            let events = import_file(&file)?;
            edit_record(&input, |editor| {
                editor.import_events(events);
                Ok(())
            })
        }
    }
}

impl From<EventFields> for EventPatch {
    fn from(fields: EventFields) -> Self {
        EventPatch {
            title: fields.title,
            date: fields.date,
            time: fields.time,
            location: fields.location,
            description: fields.description,
            learn_more_url: fields.learn_more_url,
            register_url: fields.register_url,
        }
    }
}

fn init(output: Option<&Path>) -> Result<()> {
    let record = NewsletterData::initial(Local::now().date_naive());
    match output {
        Some(path) => {
            if path.exists() {
                bail!("{} already exists; refusing to overwrite", path.display());
            }
            save_record(path, &record)?;
            info!("Created newsletter record {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&record)?),
    }
    Ok(())
}

fn position_to_index(number: usize) -> Result<usize> {
    match number.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("Event numbers start at 1"),
    }
}

/// Runs `edit` against a session on the record at `path`, then writes the
/// resulting snapshot back.
fn edit_record<F>(path: &Path, edit: F) -> Result<()>
where
    F: FnOnce(&mut Editor) -> Result<()>,
{
    let mut editor = Editor::new(load_record(path)?);
    edit(&mut editor)?;
    save_record(path, &editor.snapshot())
}

pub fn load_record(path: &Path) -> Result<NewsletterData> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read newsletter record {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Newsletter record {} is not valid JSON", path.display()))
}

fn save_record(path: &Path, record: &NewsletterData) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    std::fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write newsletter record {}", path.display()))
}
