use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use memopad::api::MemopadApi;
use memopad::config::{MemopadConfig, TitlePolicy};
use memopad::editor::{edit_content, EditorContent};
use memopad::error::{MemopadError, Result};
use memopad::store::fs::FileStore;
use std::io::Read;
use std::path::PathBuf;

mod args;
mod cli;
use args::{Cli, Commands};
use cli::print::{print_list, print_messages, print_note};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: MemopadApi<FileStore>,
    config: MemopadConfig,
    data_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::New) => handle_new(&mut ctx),
        Some(Commands::List) => handle_list(&ctx),
        Some(Commands::Select { selector }) => handle_select(&mut ctx, &selector),
        Some(Commands::Show) => handle_show(&ctx),
        Some(Commands::Write { content }) => handle_write(&mut ctx, content),
        Some(Commands::Edit) => handle_edit(&mut ctx),
        Some(Commands::Rename { title }) => handle_rename(&mut ctx, &title.join(" ")),
        Some(Commands::Delete) => handle_delete(&mut ctx),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Export { dir }) => handle_export(&ctx, dir),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx),
    }?;

    remember_selection(&mut ctx)
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = MemopadConfig::load(&data_dir).unwrap_or_default();

    let store = FileStore::new(data_dir.clone());
    let mut api = MemopadApi::open(store, config.title_policy)?;

    // A remembered id may be stale (note deleted elsewhere); restore_selection
    // ignores it and the first note stays selected.
    if let Some(remembered) = &config.current_note {
        api.restore_selection(remembered);
    }

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.dir {
        return Ok(dir.clone());
    }
    if let Ok(home) = std::env::var("MEMOPAD_HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    let proj_dirs = ProjectDirs::from("com", "memopad", "memopad")
        .ok_or_else(|| MemopadError::Store("Could not determine data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn remember_selection(ctx: &mut AppContext) -> Result<()> {
    let current = ctx.api.current_id().map(str::to_string);
    if ctx.config.current_note != current {
        ctx.config.current_note = current;
        ctx.config.save(&ctx.data_dir)?;
    }
    Ok(())
}

fn handle_new(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.create()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_list(&result.listed_entries, ctx.config.list_width);
    Ok(())
}

fn handle_select(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let result = ctx.api.select(selector)?;
    print_messages(&result.messages);
    if let Some(note) = result.affected_notes.first() {
        print_note(note);
    }
    Ok(())
}

fn handle_show(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.show()?;
    if let Some(note) = result.affected_notes.first() {
        print_note(note);
    }
    Ok(())
}

fn handle_write(ctx: &mut AppContext, content: Option<String>) -> Result<()> {
    let content = match content {
        Some(content) => content,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(MemopadError::Io)?;
            buffer
        }
    };

    let result = ctx.api.write(&content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext) -> Result<()> {
    let shown = ctx.api.show()?;
    let note = shown
        .affected_notes
        .first()
        .ok_or_else(|| MemopadError::Api("No note is selected".to_string()))?;

    let initial = EditorContent::new(note.title.clone(), note.content.clone());
    let edited = edit_content(&initial)?;

    ctx.api.rename(&edited.title)?;
    let result = ctx.api.write(&edited.content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_rename(ctx: &mut AppContext, title: &str) -> Result<()> {
    let result = ctx.api.rename(title)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.delete()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let result = ctx.api.clear(yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, dir: Option<PathBuf>) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(MemopadError::Io)?,
    };
    let result = ctx.api.export(&dir)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(
    ctx: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!("title-policy: {}", policy_name(ctx.config.title_policy));
            println!("list-width: {}", ctx.config.list_width);
            Ok(())
        }
        (Some("title-policy"), None) => {
            println!("{}", policy_name(ctx.config.title_policy));
            Ok(())
        }
        (Some("title-policy"), Some(value)) => {
            ctx.config.title_policy = value.parse().map_err(MemopadError::Api)?;
            ctx.config.save(&ctx.data_dir)
        }
        (Some("list-width"), None) => {
            println!("{}", ctx.config.list_width);
            Ok(())
        }
        (Some("list-width"), Some(value)) => {
            let width: usize = value
                .parse()
                .map_err(|_| MemopadError::Api(format!("Invalid width: {}", value)))?;
            ctx.config.set_list_width(width);
            ctx.config.save(&ctx.data_dir)
        }
        (Some(other), _) => Err(MemopadError::Api(format!(
            "Unknown config key '{}' (expected title-policy or list-width)",
            other
        ))),
    }
}

fn policy_name(policy: TitlePolicy) -> &'static str {
    match policy {
        TitlePolicy::Sequential => "sequential",
        TitlePolicy::Timestamp => "timestamp",
    }
}
