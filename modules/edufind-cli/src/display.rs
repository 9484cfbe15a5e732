//! Terminal rendering for search results: summary table and detail panels.

use console::{pad_str, style, Alignment};

use edufind_common::Resource;

const TYPE_WIDTH: usize = 13;
const TITLE_WIDTH: usize = 60;
const SCORE_WIDTH: usize = 5;
const URL_WIDTH: usize = 70;

const PANEL_WIDTH: usize = 80;

/// Number of resources shown with a detail panel.
pub const DETAIL_COUNT: usize = 5;

/// Shorten `text` to at most `len` characters, ending in "..." when cut.
pub fn truncate_text(text: &str, len: usize) -> String {
    if text.chars().count() <= len {
        return text.to_string();
    }
    let keep = len.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn border(left: &str, fill: &str, sep: &str, right: &str) -> String {
    let cols = [TYPE_WIDTH, TITLE_WIDTH, SCORE_WIDTH, URL_WIDTH];
    let segments: Vec<String> = cols.iter().map(|w| fill.repeat(w + 2)).collect();
    format!("{left}{}{right}", segments.join(sep))
}

/// Fit `text` to exactly `width` columns. Length is bounded by
/// [`truncate_text`]; `pad_str` only pads.
fn cell(text: &str, width: usize, align: Alignment) -> String {
    pad_str(&truncate_text(text, width), width, align, None).into_owned()
}

pub fn render_table(resources: &[Resource]) -> String {
    let bar = style("│").blue().to_string();
    let mut out = Vec::with_capacity(resources.len() * 2 + 3);

    out.push(style(border("┌", "─", "┬", "┐")).blue().to_string());
    out.push(format!(
        "{bar} {} {bar} {} {bar} {} {bar} {} {bar}",
        style(cell("Type", TYPE_WIDTH, Alignment::Left)).magenta().bold(),
        style(cell("Title", TITLE_WIDTH, Alignment::Left)).magenta().bold(),
        style(cell("Score", SCORE_WIDTH, Alignment::Right)).magenta().bold(),
        style(cell("URL", URL_WIDTH, Alignment::Left)).magenta().bold(),
    ));

    for resource in resources {
        out.push(style(border("├", "─", "┼", "┤")).blue().to_string());
        let score = format!("{:.2}", resource.combined_score());
        out.push(format!(
            "{bar} {} {bar} {} {bar} {} {bar} {} {bar}",
            style(cell(resource.resource_type.as_str(), TYPE_WIDTH, Alignment::Left)).cyan(),
            cell(&resource.title, TITLE_WIDTH, Alignment::Left),
            style(cell(&score, SCORE_WIDTH, Alignment::Right)).green(),
            style(cell(&resource.url, URL_WIDTH, Alignment::Left)).blue(),
        ));
    }

    out.push(style(border("└", "─", "┴", "┘")).blue().to_string());
    out.join("\n")
}

/// Body lines must already fit in `PANEL_WIDTH - 4` columns.
fn panel(title: &str, body: &[String]) -> String {
    let inner = PANEL_WIDTH - 4;
    let heading = format!(" {title} ");
    let fill = (PANEL_WIDTH - 2).saturating_sub(console::measure_text_width(&heading) + 1);

    let mut out = Vec::with_capacity(body.len() + 2);
    out.push(format!(
        "{}{}{}",
        style("╭─").yellow(),
        style(&heading).yellow().bold(),
        style(format!("{}╮", "─".repeat(fill))).yellow()
    ));
    for line in body {
        out.push(format!(
            "{} {} {}",
            style("│").yellow(),
            pad_str(line, inner, Alignment::Left, None),
            style("│").yellow()
        ));
    }
    out.push(style(format!("╰{}╯", "─".repeat(PANEL_WIDTH - 2))).yellow().to_string());
    out.join("\n")
}

pub fn render_panel(resource: &Resource, index: usize) -> String {
    let inner = PANEL_WIDTH - 4;
    let mut body = Vec::new();

    body.extend(
        wrap(&resource.title, inner)
            .into_iter()
            .map(|l| style(truncate_text(&l, inner)).white().bold().to_string()),
    );
    body.push(String::new());
    body.push(
        style(format!("Type: {}", resource.resource_type))
            .cyan()
            .to_string(),
    );
    body.push(String::new());
    body.push(style("Description:").cyan().to_string());
    body.extend(
        wrap(&resource.description, inner)
            .into_iter()
            .map(|l| truncate_text(&l, inner)),
    );
    body.push(String::new());
    body.push(
        style(format!("Credibility Score: {:.2}", resource.credibility_score))
            .green()
            .to_string(),
    );
    body.push(
        style(format!("Relevance Score: {:.2}", resource.relevance_score))
            .green()
            .to_string(),
    );
    body.push(String::new());
    body.push(style("URL:").blue().to_string());
    body.push(
        style(truncate_text(&resource.url, inner))
            .blue()
            .underlined()
            .to_string(),
    );

    panel(&format!("Resource #{index}"), &body)
}

pub fn config_error_panel() -> String {
    let body = vec![
        style("Error: SERPER_API_KEY not found in environment variables.")
            .red()
            .to_string(),
        "Please create a .env file with your Serper API key:".to_string(),
        "SERPER_API_KEY=your_key_here".to_string(),
    ];
    panel("Configuration Error", &body)
}

pub fn print_results(topic: &str, resources: &[Resource]) {
    if resources.is_empty() {
        println!("\n{}", style("❌ No resources found.").red().bold());
        return;
    }

    println!(
        "\n{}",
        style("🎯 Top Educational Resources Found:").green().bold()
    );
    println!(
        "{}\n",
        style(format!(
            "Found {} resources for {}",
            resources.len(),
            style(topic).bold()
        ))
        .green()
    );
    println!("{}", render_table(resources));

    println!(
        "\n{}\n",
        style("📚 Detailed Information for Top Resources:")
            .yellow()
            .bold()
    );
    for (i, resource) in resources.iter().take(DETAIL_COUNT).enumerate() {
        println!("{}", render_panel(resource, i + 1));
        println!();
    }

    println!(
        "{}",
        style("💡 Tip: Resources are ranked by credibility and relevance scores").dim()
    );
}
