//! Terminal presentation layer.
//!
//! Each invocation loads the list from disk, runs one operation, and
//! re-renders the current page. No list logic lives here.

mod args;
mod print;

use args::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use namelist::config::NamesConfig;
use namelist::error::{NamesError, Result};
use namelist::names::NameList;
use namelist::store::fs::FsBackend;
use print::{print_messages, print_page, print_per_page_options, Message};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn, Level};

struct AppContext {
    list: NameList<FsBackend>,
    config: NamesConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search, page }) => handle_list(&mut ctx, search, page),
        Some(Commands::Add { title }) => handle_add(&mut ctx, title),
        Some(Commands::Edit { index, title }) => handle_edit(&mut ctx, index, title),
        Some(Commands::Done { indexes }) => handle_done(&mut ctx, indexes),
        Some(Commands::Remove { indexes }) => handle_remove(&mut ctx, indexes),
        Some(Commands::ClearDone) => handle_clear_done(&mut ctx),
        Some(Commands::ClearAll { yes }) => handle_clear_all(&mut ctx, yes),
        Some(Commands::Page { page }) => handle_page(&mut ctx, page),
        Some(Commands::PerPage { size }) => handle_per_page(&mut ctx, size),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, None, None),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "namelist", "namelist")
            .ok_or_else(|| NamesError::Api("Could not determine data dir".to_string()))?
            .data_dir()
            .to_path_buf(),
    };
    debug!(data_dir = %data_dir.display(), "Using data directory");

    let backend = FsBackend::new(&data_dir);
    let config = NamesConfig::load(&backend).unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring unreadable config");
        NamesConfig::default()
    });
    let list = NameList::load(backend);

    Ok(AppContext { list, config })
}

fn render(ctx: &AppContext, messages: &[Message]) {
    print_messages(messages);
    print_page(&ctx.list, ctx.config.line_width);
}

fn handle_list(ctx: &mut AppContext, search: Option<String>, page: Option<usize>) -> Result<()> {
    if let Some(query) = search {
        ctx.list.set_query(query);
    }
    if let Some(page) = page {
        ctx.list.go_to_page(page);
    }
    render(ctx, &[]);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, title: Vec<String>) -> Result<()> {
    let title = title.join(" ");
    let messages = match ctx.list.add(&title)? {
        Some(_) => vec![Message::success(format!("Added: {}", title.trim()))],
        None => vec![Message::info("Nothing to add.")],
    };
    render(ctx, &messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, index: usize, title: Vec<String>) -> Result<()> {
    let position = to_position(index, ctx.list.items().len())?;
    ctx.list.begin_edit(position)?;
    let old = ctx
        .list
        .get(position)
        .map(|item| item.title.clone())
        .unwrap_or_default();
    if let Err(e) = ctx.list.edit(position, &title.join(" ")) {
        ctx.list.cancel_edit(position)?;
        return Err(e);
    }
    let new = ctx
        .list
        .get(position)
        .map(|item| item.title.clone())
        .unwrap_or_default();
    render(ctx, &[Message::success(format!("Renamed: {} → {}", old, new))]);
    Ok(())
}

fn handle_done(ctx: &mut AppContext, indexes: Vec<usize>) -> Result<()> {
    // Resolve every index before mutating so a bad index changes nothing
    let targets = indexes
        .iter()
        .map(|&index| {
            let position = to_position(index, ctx.list.items().len())?;
            let item = &ctx.list.items()[position];
            Ok((item.id, item.title.clone()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut messages = Vec::new();
    for (id, title) in targets {
        ctx.list.complete(id)?;
        messages.push(Message::success(format!("Done: {}", title)));
    }
    render(ctx, &messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, indexes: Vec<usize>) -> Result<()> {
    let mut positions = indexes
        .iter()
        .map(|&index| to_position(index, ctx.list.items().len()))
        .collect::<Result<Vec<_>>>()?;
    // Highest first so earlier removals don't shift later positions
    positions.sort_unstable_by(|a, b| b.cmp(a));
    positions.dedup();

    let mut messages = Vec::new();
    for position in positions {
        let removed = ctx.list.remove(position)?;
        messages.push(Message::success(format!("Removed: {}", removed.title)));
    }
    render(ctx, &messages);
    Ok(())
}

fn handle_clear_done(ctx: &mut AppContext) -> Result<()> {
    let removed = ctx.list.clear_done();
    let message = if removed == 0 {
        Message::info("Nothing marked as done.")
    } else {
        Message::success(format!("Cleared {} done", removed))
    };
    render(ctx, &[message]);
    Ok(())
}

fn handle_clear_all(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let count = ctx.list.items().len();
    if count == 0 {
        render(ctx, &[Message::info("The list is already empty.")]);
        return Ok(());
    }

    ctx.list.request_clear_all();
    let confirmed = yes || !ctx.config.confirm_clear || confirm(count)?;
    let message = if confirmed {
        ctx.list.confirm_clear_all();
        Message::success(format!("Cleared {} names", count))
    } else {
        ctx.list.cancel_clear_all();
        Message::warning("Nothing cleared.")
    };
    render(ctx, &[message]);
    Ok(())
}

fn confirm(count: usize) -> Result<bool> {
    print!("Clear all {} names? [y/N] ", count);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn handle_page(ctx: &mut AppContext, page: usize) -> Result<()> {
    let landed = ctx.list.go_to_page(page);
    let messages = if landed != page {
        vec![Message::info(format!("Page {} does not exist, showing page {}", page, landed))]
    } else {
        Vec::new()
    };
    render(ctx, &messages);
    Ok(())
}

fn handle_per_page(ctx: &mut AppContext, size: Option<usize>) -> Result<()> {
    match size {
        Some(size) => {
            ctx.list.set_items_per_page(size)?;
            render(ctx, &[Message::success(format!("Showing {} per page", size))]);
        }
        None => print_per_page_options(ctx.list.per_page_options(), ctx.list.items_per_page()),
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in NamesConfig::KEYS {
                if let Some(value) = ctx.config.get(key) {
                    println!("{} = {}", key, value);
                }
            }
        }
        (Some(key), None) => match ctx.config.get(&key) {
            Some(value) => println!("{}", value),
            None => return Err(NamesError::Config(format!("Unknown config key: {}", key))),
        },
        (Some(key), Some(value)) => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(ctx.list.backend())?;
            let shown = ctx.config.get(&key).unwrap_or(value);
            print_messages(&[Message::success(format!("{} set to {}", key, shown))]);
        }
    }
    Ok(())
}

/// Converts a 1-based index from the command line into a list position.
fn to_position(index: usize, len: usize) -> Result<usize> {
    if index == 0 || index > len {
        return Err(NamesError::IndexOutOfRange { index, len });
    }
    Ok(index - 1)
}
