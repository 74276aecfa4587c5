use std::fmt::Write as _;

use folio_core::{AppViewModel, Backdrop, EntryCard, Layout, LoadStatus, Selection};

const STYLE: &str = "\
body{font-family:sans-serif;margin:0 auto;max-width:72rem;padding:1rem;background:#f4f2f8}\
.filters{display:flex;flex-wrap:wrap;gap:1rem;margin-bottom:1rem}\
.filters .hint{flex-basis:100%;margin:0;color:#666;font-size:.85rem}\
.notice{padding:.75rem;border-radius:4px;background:#ece8f4}\
.notice.failed{background:#f6dede}\
.columns{display:grid;gap:1rem}\
.columns-1{grid-template-columns:1fr}\
.columns-2{grid-template-columns:1fr 1fr}\
.column{display:flex;flex-direction:column;gap:1rem}\
.entry{background:#fff;border-radius:6px;overflow:hidden}\
.entry img,.entry .tile{display:block;width:100%;height:12rem;object-fit:cover}\
.entry h2,.entry p,.entry ul,.entry a{margin:.5rem 1rem}\
.tags{list-style:none;padding:0;display:flex;flex-wrap:wrap;gap:.25rem}\
.tags li{font-size:.8rem;padding:.1rem .4rem;border-radius:3px;background:#e4e0ee}\
footer{margin-top:1rem;color:#666;font-size:.85rem}";

/// Self-contained HTML page for the current view.
pub fn render_page(view: &AppViewModel, generated_at: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Portfolio</title>\n");
    let _ = writeln!(html, "<style>{STYLE}</style>");
    html.push_str("</head>\n<body>\n");

    // The page is static, so the controls only show the current selection.
    html.push_str("<form class=\"filters\">\n");
    render_select(
        &mut html,
        "architecture",
        "Architecture",
        &view.architecture_options,
        &view.filter.architecture,
    );
    render_select(
        &mut html,
        "technology",
        "Technology",
        &view.technology_options,
        &view.filter.technology,
    );
    html.push_str(
        "<p class=\"hint\">Regenerate with <code>--architecture</code> or \
         <code>--technology</code> to change the filter.</p>\n",
    );
    html.push_str("</form>\n");

    if let Some((class, text)) = notice(view) {
        let _ = writeln!(html, "<p class=\"notice {class}\">{}</p>", escape(&text));
    }

    let _ = writeln!(html, "<main class=\"columns columns-{}\">", column_count(view));
    for column in &view.columns {
        html.push_str("<section class=\"column\">\n");
        for card in column {
            render_card(&mut html, card);
        }
        html.push_str("</section>\n");
    }
    html.push_str("</main>\n");

    let _ = writeln!(
        html,
        "<footer>Showing {} of {} entries. Generated {}.</footer>",
        view.shown_entries,
        view.total_entries,
        escape(generated_at)
    );
    html.push_str("</body>\n</html>\n");
    html
}

/// One-line status for the terminal.
pub fn summary_line(view: &AppViewModel) -> String {
    let status = match &view.status {
        LoadStatus::Idle => "Idle".to_string(),
        LoadStatus::Loading => "Loading".to_string(),
        LoadStatus::Loaded => "Loaded".to_string(),
        LoadStatus::Failed { reason } => format!("Failed ({reason})"),
    };
    format!(
        "Status: {} | Entries: {} of {} | Architecture: {} | Technology: {}",
        status,
        view.shown_entries,
        view.total_entries,
        view.filter.architecture,
        view.filter.technology
    )
}

fn render_select(
    html: &mut String,
    name: &str,
    label: &str,
    options: &[Selection],
    selected: &Selection,
) {
    let _ = writeln!(html, "<label>{label} <select name=\"{name}\" disabled>");
    for option in options {
        let marker = if option == selected { " selected" } else { "" };
        let value = escape(option.label());
        let _ = writeln!(html, "<option value=\"{value}\"{marker}>{value}</option>");
    }
    html.push_str("</select></label>\n");
}

fn render_card(html: &mut String, card: &EntryCard) {
    let title = escape(&card.title);
    html.push_str("<article class=\"entry\">\n");
    match &card.backdrop {
        Backdrop::Picture(url) => {
            let _ = writeln!(html, "<img src=\"{}\" alt=\"{title}\">", escape(url));
        }
        Backdrop::Tile(color) => {
            let _ = writeln!(
                html,
                "<div class=\"tile\" style=\"background-color: {}\"></div>",
                color.to_css()
            );
        }
    }
    let _ = writeln!(html, "<h2>{title}</h2>");
    let _ = writeln!(html, "<p>{}</p>", escape(&card.description));

    let tags: Vec<&String> = card.architecture.iter().chain(&card.technologies).collect();
    if !tags.is_empty() {
        html.push_str("<ul class=\"tags\">");
        for tag in tags {
            let _ = write!(html, "<li>{}</li>", escape(tag));
        }
        html.push_str("</ul>\n");
    }

    if let Some(link) = &card.link {
        let _ = writeln!(
            html,
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">Visit</a>",
            escape(link)
        );
    }
    html.push_str("</article>\n");
}

fn notice(view: &AppViewModel) -> Option<(&'static str, String)> {
    match &view.status {
        LoadStatus::Idle | LoadStatus::Loading => Some(("loading", "Loading entries...".into())),
        LoadStatus::Failed { reason } => {
            Some(("failed", format!("Could not load entries: {reason}")))
        }
        LoadStatus::Loaded if view.total_entries == 0 => Some(("empty", "No entries yet.".into())),
        LoadStatus::Loaded if view.shown_entries == 0 => Some((
            "empty",
            "No entries match the selected filters.".into(),
        )),
        LoadStatus::Loaded => None,
    }
}

fn column_count(view: &AppViewModel) -> usize {
    match view.layout {
        Layout::Single => 1,
        Layout::Columns => 2,
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
