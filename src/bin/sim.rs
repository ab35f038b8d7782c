//! Nav Toggle Simulator - replays clicks against the stock header markup
//!
//! Usage: nav-toggle-sim [CLICKS] [--config PATH] [--no-trigger] [--no-panel]

use anyhow::{bail, Context, Result};

use nav_toggle::prelude::*;

struct Args {
    clicks: usize,
    config: Option<String>,
    with_trigger: bool,
    with_panel: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        clicks: 1,
        config: None,
        with_trigger: true,
        with_panel: true,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().context("--config needs a path")?;
                args.config = Some(path);
            }
            "--no-trigger" => args.with_trigger = false,
            "--no-panel" => args.with_panel = false,
            other if other.starts_with("--") => bail!("unknown option '{other}'"),
            other => {
                args.clicks = other
                    .parse()
                    .with_context(|| format!("invalid click count '{other}'"))?;
            }
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => ToggleConfig::from_file(path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => ToggleConfig::default(),
    };

    // The stock markup uses the default class and attribute names; mirror any
    // custom selectors so the lookup still finds something.
    let mut doc = MemoryDocument::new();
    let trigger = if args.with_trigger {
        let element = MemoryElement::for_selector("button", &config.trigger()?);
        Some(doc.append(element))
    } else {
        None
    };
    if args.with_panel {
        doc.append(MemoryElement::for_selector("nav", &config.panel()?));
    }

    let controller = ToggleController::locate(&doc, &config)?;
    println!("=== Nav Toggle Simulator ===");
    println!("trigger: {}  panel: {}", config.trigger_selector, config.panel_selector);
    println!("bound: {}\n", controller.is_bound());

    for n in 1..=args.clicks {
        if let Some(trigger) = &trigger {
            trigger.click();
        }
        let state = controller
            .state()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        let expanded = trigger
            .as_ref()
            .and_then(|t| t.attribute(&config.expanded_attribute))
            .unwrap_or_else(|| "-".to_string());
        println!("click {n:>3}: panel {state:<6}  {}={expanded}", config.expanded_attribute);
    }

    Ok(())
}
