//! Server-side page rendering: one small HTML document per view.
//!
//! The pack carries no templating engine, so pages are assembled with
//! `format!` and escaped by hand.

use vidshelf_core::nav;
use vidshelf_core::types::{Playback, View};

pub fn render(view: &View) -> String {
    match view {
        View::Home { names } => home_page(names),
        View::Seasons { name, seasons } => seasons_page(name, seasons),
        View::Parts { name, parts } => parts_page(name, parts),
        View::Episodes {
            name,
            season,
            episodes,
        } => episodes_page(name, *season, episodes),
        View::Playback(playback) => playback_page(playback),
    }
}

fn home_page(names: &[String]) -> String {
    let items: String = names
        .iter()
        .map(|name| list_item(&nav::title_url(name), name))
        .collect();
    page("Catalog", &format!("<h1>Catalog</h1><ul>{items}</ul>"))
}

fn seasons_page(name: &str, seasons: &[i64]) -> String {
    let items: String = seasons
        .iter()
        .map(|&s| list_item(&nav::season_url(name, s), &format!("Season {s}")))
        .collect();
    page(
        name,
        &format!(
            "<h1>{}</h1><ul>{items}</ul>{}",
            escape(name),
            back_link("/")
        ),
    )
}

fn parts_page(name: &str, parts: &[i64]) -> String {
    let items: String = parts
        .iter()
        .map(|&p| list_item(&nav::part_url(name, p), &format!("Part {p}")))
        .collect();
    page(
        name,
        &format!(
            "<h1>{}</h1><ul>{items}</ul>{}",
            escape(name),
            back_link("/")
        ),
    )
}

fn episodes_page(name: &str, season: i64, episodes: &[i64]) -> String {
    let items: String = episodes
        .iter()
        .map(|&e| list_item(&nav::episode_url(name, season, e), &format!("Episode {e}")))
        .collect();
    page(
        &format!("{name} — Season {season}"),
        &format!(
            "<h1>{} — Season {season}</h1><ul>{items}</ul>{}",
            escape(name),
            back_link(&nav::title_url(name))
        ),
    )
}

fn playback_page(p: &Playback) -> String {
    let heading = match (p.season, p.episode, p.part) {
        (Some(s), Some(e), _) => format!("{} — Season {s}, Episode {e}", escape(&p.name)),
        (_, _, Some(part)) => format!("{} — Part {part}", escape(&p.name)),
        _ => escape(&p.name),
    };

    let mut navigation = String::new();
    if !p.prev_url.is_empty() {
        navigation.push_str(&format!(
            "<a class=\"nav\" href=\"{}\">&larr; Previous</a>",
            escape(&p.prev_url)
        ));
    }
    if !p.next_url.is_empty() {
        navigation.push_str(&format!(
            "<a class=\"nav\" href=\"{}\">Next &rarr;</a>",
            escape(&p.next_url)
        ));
    }

    page(
        &p.name,
        &format!(
            "<h1>{heading}</h1>\
             <video controls src=\"{}\"></video>\
             <div class=\"navs\">{navigation}</div>",
            escape(&p.url)
        ),
    )
}

fn list_item(href: &str, label: &str) -> String {
    format!("<li><a href=\"{}\">{}</a></li>", escape(href), escape(label))
}

fn back_link(href: &str) -> String {
    format!("<p><a href=\"{}\">Back</a></p>", escape(href))
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\">\
         <head>\
         <meta charset=\"utf-8\">\
         <title>{}</title>\
         <style>\
         body{{font-family:sans-serif;max-width:40rem;margin:2rem auto;padding:0 1rem}}\
         video{{width:100%}}\
         ul{{list-style:none;padding:0}}\
         li{{margin:.25rem 0}}\
         .navs{{display:flex;justify-content:space-between;margin-top:1rem}}\
         </style>\
         </head>\
         <body>{body}</body>\
         </html>",
        escape(title)
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ─── Tests ───────────────────────────────────────────────────────────────────
