use chrono::{Local, NaiveDate};
use clap::Parser;
use moodiary::application::{
    delete_entry, export_entries, import_entries, init::init, reset_all, save_entry, AssumeYes,
    ConfigService, Confirm, DraftService, EntryStore, Notice, ThemeService,
};
use moodiary::cli::{
    format_calendar, format_draft, format_entry, format_entry_list, format_notice, format_stats,
    Cli, Commands, StdinConfirm,
};
use moodiary::domain::{
    mood_counts, resolve_date, Analytics, ChartData, Mood, MonthCursor, Theme,
};
use moodiary::error::{DiaryError, Result, ValidationError};
use moodiary::infrastructure::{FileStorage, Storage};
use std::io::{self, BufRead};
use std::str::FromStr;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            let notice = Notice::error(format!("Error: {}", e.display_with_suggestions()));
            eprintln!("{}", format_notice(&notice));
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr; RUST_LOG overrides the default `warn` level
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let today = Local::now().date_naive();

    let Some(command) = cli.command else {
        println!("moodiary - Mood-tagged personal diary");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized moodiary at {}", path.display());
            Ok(())
        }
        Commands::Write {
            date,
            mood,
            content,
            from_draft,
        } => {
            let storage = FileStorage::discover()?;
            let date = resolve_date(&date, today)?;
            let mood = parse_mood(mood.as_deref())?;
            let config = storage.load_config()?;
            let mut store = EntryStore::load(&storage)?;
            let mut drafts = DraftService::new(&storage, config.autosave_delay());

            let (mood, content) = if from_draft {
                let draft = drafts
                    .stored()?
                    .filter(|d| d.date == date)
                    .ok_or(DiaryError::NoDraft(date))?;
                (mood.or(Some(draft.mood)), draft.content)
            } else {
                match content {
                    Some(text) => (mood, text),
                    None => (mood, compose_from_stdin(&mut drafts, mood, date)?),
                }
            };

            match save_entry(&mut store, &mut drafts, date, mood, &content) {
                Ok((entry, notice)) => {
                    println!("{}", format_notice(&notice));
                    println!(
                        "{}  {} {}  {} words",
                        entry.date.format("%Y-%m-%d"),
                        entry.mood.icon(),
                        entry.mood,
                        entry.word_count
                    );
                    Ok(())
                }
                Err(e) => {
                    keep_draft(&mut drafts);
                    Err(e)
                }
            }
        }
        Commands::Show { date } => {
            let storage = FileStorage::discover()?;
            let date = resolve_date(&date, today)?;
            let store = EntryStore::load(&storage)?;
            let entry = store.find_by_date(date).ok_or(DiaryError::NotFound(date))?;
            print!("{}", format_entry(entry));
            Ok(())
        }
        Commands::List => {
            let storage = FileStorage::discover()?;
            let store = EntryStore::load(&storage)?;
            println!("{}", format_entry_list(store.list()).trim_end());
            Ok(())
        }
        Commands::Delete { date, yes } => {
            let storage = FileStorage::discover()?;
            let date = resolve_date(&date, today)?;
            let mut store = EntryStore::load(&storage)?;
            let notice = delete_entry(&mut store, date, confirmer(yes).as_mut())?;
            println!("{}", format_notice(&notice));
            Ok(())
        }
        Commands::Reset { yes } => {
            let storage = FileStorage::discover()?;
            let mut store = EntryStore::load(&storage)?;
            let notice = reset_all(&mut store, confirmer(yes).as_mut())?;
            println!("{}", format_notice(&notice));
            Ok(())
        }
        Commands::Calendar { month, prev, next } => {
            let storage = FileStorage::discover()?;
            let cursor = match month {
                Some(m) => MonthCursor::parse(&m).ok_or(ValidationError::InvalidDate(m))?,
                None => MonthCursor::containing(today),
            };
            let delta = i64::from(next) - i64::from(prev);
            let cursor = cursor.shift(delta).ok_or_else(|| {
                ValidationError::InvalidDate(format!("{} {:+} months", cursor.label(), delta))
            })?;
            let store = EntryStore::load(&storage)?;
            print!(
                "{}",
                format_calendar(&cursor, &cursor.grid(store.list(), today))
            );
            Ok(())
        }
        Commands::Stats => {
            let storage = FileStorage::discover()?;
            let store = EntryStore::load(&storage)?;
            let analytics = Analytics::compute(store.list(), today);
            let chart = ChartData::from_counts(&mood_counts(store.list()));
            print!("{}", format_stats(&analytics, &chart));
            Ok(())
        }
        Commands::Export { dir } => {
            let storage = FileStorage::discover()?;
            let store = EntryStore::load(&storage)?;
            let path = export_entries(&store, &dir, today)?;
            println!(
                "{}",
                format_notice(&Notice::success("Data exported successfully!"))
            );
            println!("{}", path.display());
            Ok(())
        }
        Commands::Import { file } => {
            let storage = FileStorage::discover()?;
            let mut store = EntryStore::load(&storage)?;
            let applied = import_entries(&mut store, &file)?;
            println!(
                "{}",
                format_notice(&Notice::success(format!("Imported {} entries", applied)))
            );
            Ok(())
        }
        Commands::Draft {
            date,
            mood,
            content,
            show,
            clear,
        } => {
            let storage = FileStorage::discover()?;
            let config = storage.load_config()?;
            let mut drafts = DraftService::new(&storage, config.autosave_delay());
            if show {
                match drafts.recover(today)? {
                    Some(draft) => print!("{}", format_draft(&draft)),
                    None => println!("No draft saved"),
                }
                return Ok(());
            }
            if clear {
                drafts.clear()?;
                println!("{}", format_notice(&Notice::success("Draft cleared")));
                return Ok(());
            }

            let date = resolve_date(&date, today)?;
            let mood = parse_mood(mood.as_deref())?.ok_or(ValidationError::MissingMood)?;
            let content = content.unwrap_or_default();
            if !drafts.record_input(Some(mood), &content, date, Instant::now()) {
                return Err(ValidationError::EmptyContent.into());
            }
            drafts.flush()?;
            println!("{}", format_notice(&Notice::success("Draft saved")));
            Ok(())
        }
        Commands::Theme { value } => {
            let storage = FileStorage::discover()?;
            let themes = ThemeService::new(&storage);
            let theme = match value.as_deref() {
                None => themes.current()?,
                Some("toggle") => themes.toggle()?,
                Some(name) => {
                    let theme = Theme::from_str(name)?;
                    themes.set(theme)?;
                    theme
                }
            };
            println!("Theme: {}", theme);
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let storage = FileStorage::discover()?;
            let service = ConfigService::new(storage);

            if list {
                let config = service.list()?;
                println!("autosave_delay_ms = {}", config.autosave_delay_ms);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: moodiary config [--list | <key> [<value>]]");
                println!("Valid keys: autosave_delay_ms, created");
                Ok(())
            }
        }
    }
}

fn parse_mood(input: Option<&str>) -> Result<Option<Mood>> {
    Ok(input.map(Mood::from_str).transpose()?)
}

fn confirmer(assume_yes: bool) -> Box<dyn Confirm> {
    if assume_yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm)
    }
}

/// Keep whatever was typed so it can be recovered with `write --from-draft`
fn keep_draft<S: Storage>(drafts: &mut DraftService<S>) {
    if let Err(e) = drafts.flush() {
        warn!(error = %e, "could not keep draft");
    }
}

/// Read the entry body from stdin line by line. Every line is an input
/// event for the draft auto-save, and the draft is written once input has
/// been idle for the quiet period, so an interrupted session leaves a draft.
fn compose_from_stdin<S: Storage>(
    drafts: &mut DraftService<S>,
    mood: Option<Mood>,
    date: NaiveDate,
) -> Result<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let failed = line.is_err();
            if tx.send(line).is_err() || failed {
                break;
            }
        }
    });

    let mut content = String::new();
    loop {
        let received = match drafts.pending_deadline() {
            Some(deadline) => {
                rx.recv_timeout(deadline.saturating_duration_since(Instant::now()))
            }
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(Ok(line)) => {
                if !content.is_empty() {
                    content.push('\n');
                }
                content.push_str(&line);
                drafts.record_input(mood, &content, date, Instant::now());
            }
            Ok(Err(e)) => {
                keep_draft(drafts);
                return Err(e.into());
            }
            Err(RecvTimeoutError::Timeout) => {
                if let Err(e) = drafts.tick(Instant::now()) {
                    warn!(error = %e, "could not auto-save draft");
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    Ok(content)
}
