use anyhow::Context;
use clap::ArgMatches;
use colored::Colorize;
use commands::command_argument_builder;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::Duration;
use wikirace::handlers::{parse_article_url, print_banner, print_path_summary};
use wikirace_core::Racer;

mod commands;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let cmd = command_argument_builder();
    let matches = cmd.get_matches();
    let quiet = matches.get_flag("quiet");
    let json = matches.get_flag("json");

    // Show banner unless --quiet or --json is set
    if !quiet && !json {
        print_banner();
    }

    let start = require_article_url(&matches, "start")?;
    let finish = require_article_url(&matches, "finish")?;
    let workers = *matches.get_one::<usize>("workers").unwrap();
    let max_steps = *matches.get_one::<usize>("max-steps").unwrap();
    let timeout = *matches.get_one::<u64>("timeout").unwrap();
    let seed = matches.get_one::<u64>("seed").copied();

    let progress = if quiet || json {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Resolving target keyword...");
        Some(Arc::new(pb))
    };

    let mut racer = Racer::with_timeout(Duration::from_secs(timeout))
        .with_workers(workers)
        .with_max_steps(max_steps);
    if let Some(seed) = seed {
        racer = racer.with_seed(seed);
    }
    if let Some(ref pb) = progress {
        let pb = pb.clone();
        racer = racer.with_step_callback(Arc::new(move |step, url, score| {
            pb.set_message(format!("Click {}: {} ({} matches)", step, url, score));
        }));
    }

    match racer.race(&start, &finish).await {
        Ok(result) => {
            if let Some(pb) = progress {
                pb.finish_and_clear();
            }
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_path_summary(&result);
            }
            Ok(())
        }
        Err(e) => {
            if let Some(pb) = progress {
                pb.finish_and_clear();
            }
            eprintln!("{} {}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn require_article_url(matches: &ArgMatches, name: &str) -> anyhow::Result<String> {
    let raw = matches
        .get_one::<String>(name)
        .expect("required argument enforced by clap");
    parse_article_url(raw).with_context(|| format!("invalid --{} URL '{}'", name, raw))
}
