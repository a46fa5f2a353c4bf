//! HTML builders for the three containers: the card list, the detail
//! overlay, and the static error message. Every render is a full rebuild of
//! the target container; there is no diffing.

use crate::fetch::FetchError;
use crate::recipe::{FilterToken, Recipe};

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Build the card list in document order. Units failing the active filter
/// are still emitted, just hidden, so the unit count is invariant under
/// filtering.
pub fn render_cards(records: &[Recipe], filter: &FilterToken, quick_max: u32) -> String {
    let mut html = String::new();
    for r in records {
        let total = r.total_time();
        let hidden = if filter.matches(&r.category, total, quick_max) {
            ""
        } else {
            r#" style="display:none""#
        };
        html.push_str(&format!(
            concat!(
                "<article class=\"card recipe-card\" data-category=\"{category}\"",
                " data-time=\"{total}\" tabindex=\"0\"{hidden}>\n",
                "  <img src=\"{image}\" alt=\"{name}\">\n",
                "  <div class=\"card-content\">\n",
                "    <h3>{name}</h3>\n",
                "    <p>{description}</p>\n",
                "    <div class=\"recipe-meta\">\n",
                "      <span class=\"meta-item\">\u{23f1}\u{fe0f} {total} mins</span>\n",
                "      <span class=\"meta-item\">\u{1f465} {servings} servings</span>\n",
                "      <span class=\"meta-item\">\u{1f4b0} {currency} {cost}</span>\n",
                "    </div>\n",
                "    <button class=\"btn view-recipe-btn\" data-id=\"{id}\"",
                " aria-label=\"View recipe for {name}\">View Recipe</button>\n",
                "  </div>\n",
                "</article>\n",
            ),
            category = escape_html(&r.category),
            total = total,
            hidden = hidden,
            image = escape_html(&r.image),
            name = escape_html(&r.name),
            description = escape_html(&r.description),
            servings = r.servings,
            currency = escape_html(&r.cost_currency),
            cost = escape_html(&r.cost),
            id = escape_html(&r.id),
        ));
    }
    html
}

/// Build the full-detail overlay content: header block, then ingredients,
/// steps, and tips, one list item per element in original order.
pub fn render_detail(r: &Recipe) -> String {
    let mut html = format!(
        concat!(
            "<div class=\"recipe-header\">\n",
            "  <h1>{name}</h1>\n",
            "  <p>{description}</p>\n",
            "  <img src=\"{image}\" alt=\"{name}\" class=\"recipe-image\">\n",
            "  <div class=\"recipe-meta\">\n",
            "    <span class=\"meta-item\">\u{23f1}\u{fe0f} Prep: {prep} mins</span>\n",
            "    <span class=\"meta-item\">\u{23f1}\u{fe0f} Cook: {cook} mins</span>\n",
            "    <span class=\"meta-item\">\u{1f465} Servings: {servings}</span>\n",
            "    <span class=\"meta-item\">\u{1f4b0} Cost: {currency} {cost}</span>\n",
            "    <span class=\"meta-item\">\u{2b50} Difficulty: {difficulty}</span>\n",
            "  </div>\n",
            "</div>\n",
        ),
        name = escape_html(&r.name),
        description = escape_html(&r.description),
        image = escape_html(&r.image),
        prep = r.prep_time,
        cook = r.cook_time,
        servings = r.servings,
        currency = escape_html(&r.cost_currency),
        cost = escape_html(&r.cost),
        difficulty = escape_html(&r.difficulty),
    );

    push_list_section(&mut html, "recipe-ingredients", "Ingredients", "ul", &r.ingredients);
    push_list_section(&mut html, "recipe-steps", "Instructions", "ol", &r.steps);
    push_list_section(&mut html, "recipe-tips", "Cooking Tips", "ul", &r.tips);
    html
}

fn push_list_section(html: &mut String, class: &str, title: &str, tag: &str, items: &[String]) {
    html.push_str(&format!(
        "<div class=\"{class}\">\n  <h2>{title}</h2>\n  <{tag}>\n"
    ));
    for item in items {
        html.push_str(&format!("    <li>{}</li>\n", escape_html(item)));
    }
    html.push_str(&format!("  </{tag}>\n</div>\n"));
}

/// The static message substituted into a container when a load fails.
pub fn render_error(err: &FetchError) -> String {
    let msg = match err {
        FetchError::Transport(_) | FetchError::Io { .. } => {
            "Network error occurred. Please check your connection and try again."
        }
        FetchError::Status(_) => "Error loading recipes. Please try again later.",
        FetchError::Source(_) => "Error parsing recipes. Please try again later.",
    };
    format!("<p>{msg}</p>")
}
