use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use crossterm::style::{Color, Stylize};
use tracing_subscriber::EnvFilter;

use projcolor::action::{Notification, NotificationLevel, Request};
use projcolor::app::{App, AppOptions};
use projcolor::cli::{ApplyArgs, Args, Command};
use projcolor::color::parse_rgb;
use projcolor::current::CurrentColor;
use projcolor::menu::{quick_pick_items, QuickPickItem};
use projcolor::ColorItem;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    let cwd = std::env::current_dir()?;
    let app = App::load(
        AppOptions {
            workspace: args.workspace,
            store: args.store,
            assume_yes: args.yes,
        },
        &cwd,
    )?;

    let request = match args.command {
        Command::Current => {
            print_current(&app.current().await);
            return Ok(ExitCode::SUCCESS);
        }
        Command::List => {
            print_list(&app).await?;
            return Ok(ExitCode::SUCCESS);
        }
        Command::Apply(apply) => match apply_request(&app, apply).await {
            Ok(request) => request,
            Err(notification) => return Ok(report(&notification)),
        },
        Command::Add { name, color } => Request::Add { name, color },
        Command::Edit {
            name,
            color,
            new_name,
            new_color,
            recent,
        } => {
            let original = ColorItem::new(name, color);
            let updated = ColorItem::new(
                new_name.unwrap_or_else(|| original.name.clone()),
                new_color.unwrap_or_else(|| original.color.clone()),
            );
            if recent {
                Request::EditRecent { original, updated }
            } else {
                Request::Edit { original, updated }
            }
        }
        Command::Delete {
            name,
            color,
            recent,
        } => {
            let item = ColorItem::new(name, color);
            if recent {
                Request::DeleteRecent(item)
            } else {
                Request::Delete(item)
            }
        }
        Command::ClearRecent => Request::ClearRecent,
        Command::Reset => Request::Reset,
    };

    let response = app.handle(request).await;
    match &response.notification {
        Some(notification) => Ok(report(notification)),
        None => Ok(ExitCode::SUCCESS),
    }
}

/// Resolve a saved color by name, or build and validate a custom one
async fn apply_request(app: &App, apply: ApplyArgs) -> std::result::Result<Request, Notification> {
    let item = match apply.saved {
        Some(name) => app
            .find_saved(&name)
            .await
            .map_err(|e| Notification::warning(e.to_string()))?,
        None => {
            let item = ColorItem::new(
                apply.name.unwrap_or_default(),
                apply.color.unwrap_or_default(),
            );
            item.validate()
                .map_err(|e| Notification::error(e.to_string()))?;
            item
        }
    };
    Ok(Request::Apply(item))
}

fn report(notification: &Notification) -> ExitCode {
    match notification.level {
        NotificationLevel::Info => {
            println!("{}", notification.message);
            ExitCode::SUCCESS
        }
        NotificationLevel::Warning => {
            eprintln!("{} {}", "warning:".yellow().bold(), notification.message);
            ExitCode::FAILURE
        }
        NotificationLevel::Error => {
            eprintln!("{} {}", "error:".red().bold(), notification.message);
            ExitCode::FAILURE
        }
    }
}

fn swatch(hex: &str) -> String {
    match parse_rgb(hex) {
        Some((r, g, b)) => "  ".on(Color::Rgb { r, g, b }).to_string(),
        None => "  ".to_string(),
    }
}

fn print_current(current: &CurrentColor) {
    match &current.hex {
        Some(hex) if *hex != current.name => {
            println!("{} {} ({})", swatch(hex), current.name, hex)
        }
        Some(hex) => println!("{} {}", swatch(hex), hex),
        None => println!("{}", current.name),
    }
}

async fn print_list(app: &App) -> Result<()> {
    let current = app.current().await;
    let palette = app.palette().await?;
    let recent = app.recent().await?;

    print!("Current: ");
    print_current(&current);

    for item in quick_pick_items(&palette, &recent) {
        match &item {
            QuickPickItem::Separator(title) => println!("\n{}", title.bold()),
            QuickPickItem::Recent(color) | QuickPickItem::Predefined(color) => {
                let marker = match &current.hex {
                    Some(hex) if color.has_color(hex) => "*",
                    _ => " ",
                };
                println!(
                    "{} {} {:<24} {}",
                    marker,
                    swatch(&color.color),
                    item.label(),
                    item.description()
                );
            }
            _ => {}
        }
    }

    Ok(())
}
