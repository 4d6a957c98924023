pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod layout;
pub mod render;
pub mod scene;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::{
    fs,
    io::{self, Stdout, Write},
};

use anyhow::{Context, Result};
use app::events::{AppEvent, spawn_input_task};
use app::state::{AppMode, AppState};
use cli::{Cli, Command, DumpArgs, PreviewArgs, RenderArgs};
use config::{CloudConfig, load_config};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::info;
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use render::html::{PageOptions, render_page};
use scene::Scene;
use tokio::sync::mpsc;

pub async fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    info!("using seed {seed}");

    match cli.command {
        Command::Render(args) => render_command(&config, seed, &args),
        Command::Dump(args) => dump_command(&config, seed, &args),
        Command::Preview(args) => preview_command(config, seed, &args).await,
    }
}

pub fn resolve_config(cli: &Cli) -> Result<CloudConfig> {
    let (mut config, source) =
        load_config(cli.config.as_deref()).context("loading cloud config failed")?;
    info!("cloud config from {source}");
    if let Some(count) = cli.count {
        config.count = count;
    }
    Ok(config)
}

fn render_command(config: &CloudConfig, seed: u64, args: &RenderArgs) -> Result<()> {
    let scene = Scene::generate(config, seed);
    let options = PageOptions {
        title: args.title.clone(),
        ..PageOptions::default()
    };
    let page = render_page(&scene, &options);

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).context("creating output directory failed")?;
            }
            fs::write(path, page).context("writing page failed")?;
            info!("wrote {} clouds to {}", scene.clouds.len(), path.display());
        }
        None => io::stdout()
            .write_all(page.as_bytes())
            .context("writing page to stdout failed")?,
    }
    Ok(())
}

fn dump_command(config: &CloudConfig, seed: u64, args: &DumpArgs) -> Result<()> {
    let scene = Scene::generate(config, seed);
    let payload = if args.pretty {
        serde_json::to_string_pretty(&scene)
    } else {
        serde_json::to_string(&scene)
    }
    .context("serializing scene failed")?;

    let mut stdout = io::stdout();
    writeln!(stdout, "{payload}").context("writing scene to stdout failed")
}

async fn preview_command(config: CloudConfig, seed: u64, args: &PreviewArgs) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_preview(&mut terminal, config, seed, args).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_preview(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: CloudConfig,
    seed: u64,
    args: &PreviewArgs,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(256);
    let input_stream = spawn_input_task();
    tokio::pin!(input_stream);
    let mut app = AppState::new(config, seed, args);

    tx.send(AppEvent::Bootstrap).await?;

    while app.running {
        tokio::select! {
            maybe_input = input_stream.next() => {
                if let Some(input) = maybe_input {
                    app.handle_event(AppEvent::Input(input), &tx);
                }
            }
            maybe_event = rx.recv() => {
                if let Some(event) = maybe_event {
                    app.handle_event(event, &tx);
                }
            }
        }

        terminal.draw(|frame| ui::render(frame, &app))?;

        if app.mode == AppMode::Quit {
            app.running = false;
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        existing(panic);
    }));
}
