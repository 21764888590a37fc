use std::env;

use anyhow::{bail, Context};
use tracing::debug;

use pagekit_core::{
    page_range_with_window, PageRangeResult, PageToken, DEFAULT_BOUNDARY_COUNT,
    DEFAULT_SIBLING_COUNT,
};

const USAGE: &str = "usage: pagekit <current_page> <total_pages> [sibling_count] [boundary_count]";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Load the .env file
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 4 {
        bail!("{USAGE}");
    }

    let current_page = parse_count(&args[0])
        .with_context(|| format!("invalid current_page {:?}", args[0]))?;
    let total_pages = parse_count(&args[1])
        .with_context(|| format!("invalid total_pages {:?}", args[1]))?;

    let sibling_count = window_arg(args.get(2), "PAGEKIT_SIBLING_COUNT", DEFAULT_SIBLING_COUNT)
        .context("invalid sibling_count")?;
    let boundary_count = window_arg(args.get(3), "PAGEKIT_BOUNDARY_COUNT", DEFAULT_BOUNDARY_COUNT)
        .context("invalid boundary_count")?;

    debug!(current_page, total_pages, sibling_count, boundary_count, "computing page range");

    let range = page_range_with_window(current_page, total_pages, sibling_count, boundary_count)
        .context("cannot compute page range")?;

    println!("{}", render_range(&range, current_page));
    Ok(())
}

/// Parse a non-negative count argument.
fn parse_count(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()
}

/// Resolve a window parameter: positional argument, then environment
/// variable, then the library default.
fn window_arg(positional: Option<&String>, env_key: &str, default: usize) -> Option<usize> {
    if let Some(raw) = positional {
        return parse_count(raw);
    }
    match env::var(env_key) {
        Ok(raw) => parse_count(&raw),
        Err(_) => Some(default),
    }
}

/// Render one range as a single line, e.g. `◀ 1 … 4 [5] 6 … 20 ▶`.
///
/// The current page is bracketed; disabled prev/next arrows are blanked so
/// the page numbers keep their column position.
fn render_range(range: &PageRangeResult, current_page: usize) -> String {
    let mut parts = Vec::with_capacity(range.tokens.len() + 2);

    parts.push(if range.has_previous { "◀" } else { " " }.to_owned());
    for token in &range.tokens {
        parts.push(match token {
            PageToken::Page(index) if *index == current_page => format!("[{index}]"),
            PageToken::Page(index) => index.to_string(),
            PageToken::Ellipsis => "…".to_owned(),
        });
    }
    parts.push(if range.has_next { "▶" } else { " " }.to_owned());

    parts.join(" ")
}
