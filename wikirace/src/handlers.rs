use colored::Colorize;
use url::Url;
use wikirace_core::RaceResult;

/// Parse a CLI article argument, trying to add https:// if needed
pub fn parse_article_url(raw: &str) -> Option<String> {
    // Try to parse as-is
    if Url::parse(raw).is_ok() {
        return Some(raw.to_string());
    }

    // Try adding https://
    let with_scheme = format!("https://{}", raw);
    if Url::parse(&with_scheme).is_ok() {
        return Some(with_scheme);
    }

    None
}

pub fn print_banner() {
    println!("{}", "═".repeat(60).bright_blue().bold());
    println!("{}", "  WIKIRACE".bright_white().bold());
    println!("{}", "  greedy wiki-golf path finder".bright_blue());
    println!("{}", "═".repeat(60).bright_blue().bold());
    println!();
}

/// Print a colored summary of a finished race.
pub fn print_path_summary(result: &RaceResult) {
    println!();
    println!(
        "{} Reached the target in {} clicks ({} by random fallback)",
        "✓".green().bold(),
        result.steps.to_string().bright_white().bold(),
        result.fallback_steps
    );
    println!(
        "{} Target keyword: {}",
        "→".blue(),
        result.keyword.bright_white()
    );
    println!("{} Elapsed: {:.2?}", "→".blue(), result.elapsed);
    println!();

    if let Some(start) = result.path.first() {
        println!("{}", start.bright_white());
    }
    for hop in &result.hops {
        let marker = if hop.fallback {
            "↷".yellow().bold()
        } else {
            "↳".green().bold()
        };
        println!(
            "  {} {} {}",
            marker,
            hop.url,
            format!("({} matches)", hop.score).dimmed()
        );
    }
}
