//! Navigation resolution: maps a request path onto a [`Target`] and a set of
//! already-fetched catalog rows onto the [`View`] to render.
//!
//! Everything here is pure. Fetching is the caller's job; the resolver only
//! decides the catalog's shape at a point (flat list vs. seasons vs. parts)
//! and computes ordered sibling links for playback.

use crate::error::NavError;
use crate::types::{CatalogEntry, Playback, Target, View};

impl Target {
    /// Parse a request path into a navigation target.
    ///
    /// Recognized shapes (trailing slash optional on input, always present
    /// on emitted links):
    ///
    /// - `/`
    /// - `/name=:name/`
    /// - `/name=:name/season=:season/`
    /// - `/name=:name/season=:season/episode=:episode/`
    /// - `/name=:name/part=:part/`
    ///
    /// Returns `None` for anything else, including non-numeric ordinals.
    pub fn parse(path: &str) -> Option<Target> {
        let trimmed = path.trim_start_matches('/').trim_end_matches('/');
        if trimmed.is_empty() {
            return Some(Target::Home);
        }

        let mut segments = trimmed.split('/');

        let name = match param(segments.next()?)? {
            ("name", value) if !value.is_empty() => value.to_string(),
            _ => return None,
        };

        let second = match segments.next() {
            Some(seg) => seg,
            None => return Some(Target::Title { name }),
        };

        match param(second)? {
            ("season", value) => {
                let season: i64 = value.parse().ok()?;
                let third = match segments.next() {
                    Some(seg) => seg,
                    None => return Some(Target::Season { name, season }),
                };
                let episode: i64 = match param(third)? {
                    ("episode", value) => value.parse().ok()?,
                    _ => return None,
                };
                if segments.next().is_some() {
                    return None;
                }
                Some(Target::Episode {
                    name,
                    season,
                    episode,
                })
            }
            ("part", value) => {
                let part: i64 = value.parse().ok()?;
                if segments.next().is_some() {
                    return None;
                }
                Some(Target::Part { name, part })
            }
            _ => None,
        }
    }
}

fn param(segment: &str) -> Option<(&str, &str)> {
    segment.split_once('=')
}

// ---------------------------------------------------------------------------
// Canonical link grammar
// ---------------------------------------------------------------------------

pub fn title_url(name: &str) -> String {
    format!("/name={name}/")
}

pub fn season_url(name: &str, season: i64) -> String {
    format!("/name={name}/season={season}/")
}

pub fn episode_url(name: &str, season: i64, episode: i64) -> String {
    format!("/name={name}/season={season}/episode={episode}/")
}

pub fn part_url(name: &str, part: i64) -> String {
    format!("/name={name}/part={part}/")
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Sort ascending and drop duplicates. Index views are built from raw rows,
/// so every listing goes through here.
pub fn distinct_sorted<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    values.sort();
    values.dedup();
    values
}

/// Home view over the raw `name` column of the whole catalog.
pub fn resolve_home(names: Vec<String>) -> View {
    View::Home {
        names: distinct_sorted(names),
    }
}

/// Title view: seasons-index if any entry carries a season, parts-index
/// otherwise. Seasons win whenever at least one non-null season exists.
pub fn resolve_title(name: &str, entries: &[CatalogEntry]) -> View {
    let seasons = distinct_sorted(entries.iter().filter_map(|e| e.season).collect());
    if !seasons.is_empty() {
        return View::Seasons {
            name: name.to_string(),
            seasons,
        };
    }

    let parts = distinct_sorted(entries.iter().filter_map(|e| e.part).collect());
    View::Parts {
        name: name.to_string(),
        parts,
    }
}

/// Episodes-index for one season of a title.
pub fn resolve_season(name: &str, season: i64, entries: &[CatalogEntry]) -> View {
    View::Episodes {
        name: name.to_string(),
        season,
        episodes: distinct_sorted(entries.iter().filter_map(|e| e.episode).collect()),
    }
}

/// Playback view for a specific episode. `entries` is the season's rows
/// sorted ascending by episode; prev/next are the positional neighbors in
/// that order, not ordinal arithmetic, so gaps in numbering still link to
/// the nearest existing episode.
pub fn resolve_episode(
    name: &str,
    season: i64,
    episode: i64,
    entries: &[CatalogEntry],
) -> Result<Playback, NavError> {
    let pos = entries
        .iter()
        .position(|e| e.episode == Some(episode))
        .ok_or_else(|| {
            NavError::upstream(format!("no episode {episode} in season {season} of {name}"))
        })?;

    let prev_url = entries[..pos]
        .last()
        .and_then(|e| e.episode)
        .map(|ep| episode_url(name, season, ep))
        .unwrap_or_default();
    let next_url = entries
        .get(pos + 1)
        .and_then(|e| e.episode)
        .map(|ep| episode_url(name, season, ep))
        .unwrap_or_default();

    Ok(Playback {
        name: name.to_string(),
        season: Some(season),
        episode: Some(episode),
        part: None,
        url: entries[pos].link.clone(),
        prev_url,
        next_url,
    })
}

/// Playback view for a specific part. `entries` is the title's rows sorted
/// ascending by part.
pub fn resolve_part(name: &str, part: i64, entries: &[CatalogEntry]) -> Result<Playback, NavError> {
    let pos = entries
        .iter()
        .position(|e| e.part == Some(part))
        .ok_or_else(|| NavError::upstream(format!("no part {part} of {name}")))?;

    let prev_url = entries[..pos]
        .last()
        .and_then(|e| e.part)
        .map(|p| part_url(name, p))
        .unwrap_or_default();
    let next_url = entries
        .get(pos + 1)
        .and_then(|e| e.part)
        .map(|p| part_url(name, p))
        .unwrap_or_default();

    Ok(Playback {
        name: name.to_string(),
        season: None,
        episode: None,
        part: Some(part),
        url: entries[pos].link.clone(),
        prev_url,
        next_url,
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn ep(name: &str, season: i64, episode: i64) -> CatalogEntry {
        CatalogEntry {
            name: name.into(),
            season: Some(season),
            episode: Some(episode),
            part: None,
            link: format!("http://cdn/{name}/s{season}e{episode}.mp4"),
        }
    }

    fn pt(name: &str, part: i64) -> CatalogEntry {
        CatalogEntry {
            name: name.into(),
            season: None,
            episode: None,
            part: Some(part),
            link: format!("http://cdn/{name}/p{part}.mp4"),
        }
    }

    #[test]
    fn parse_home() {
        assert_eq!(Target::parse("/"), Some(Target::Home));
        assert_eq!(Target::parse(""), Some(Target::Home));
    }

    #[test]
    fn parse_title() {
        assert_eq!(
            Target::parse("/name=The Wire/"),
            Some(Target::Title {
                name: "The Wire".into()
            })
        );
    }

    #[test]
    fn parse_season_and_episode() {
        assert_eq!(
            Target::parse("/name=x/season=2/"),
            Some(Target::Season {
                name: "x".into(),
                season: 2
            })
        );
        assert_eq!(
            Target::parse("/name=x/season=2/episode=10/"),
            Some(Target::Episode {
                name: "x".into(),
                season: 2,
                episode: 10
            })
        );
    }

    #[test]
    fn parse_part() {
        assert_eq!(
            Target::parse("/name=x/part=3/"),
            Some(Target::Part {
                name: "x".into(),
                part: 3
            })
        );
    }

    #[test]
    fn parse_trailing_slash_optional() {
        assert_eq!(
            Target::parse("/name=x/season=1"),
            Some(Target::Season {
                name: "x".into(),
                season: 1
            })
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Target::parse("/favicon.ico"), None);
        assert_eq!(Target::parse("/name=/"), None);
        assert_eq!(Target::parse("/name=x/episode=1/"), None);
        assert_eq!(Target::parse("/name=x/season=abc/"), None);
        assert_eq!(Target::parse("/name=x/part=1/extra=2/"), None);
        assert_eq!(Target::parse("/name=x/season=1/episode=2/more=3/"), None);
    }

    #[test]
    fn distinct_sorted_dedups_ascending() {
        assert_eq!(distinct_sorted(vec![3, 1, 3, 2, 1]), vec![1, 2, 3]);
    }

    #[test]
    fn home_names_are_sorted_distinct() {
        let view = resolve_home(vec!["b".into(), "a".into(), "b".into()]);
        assert_eq!(
            view,
            View::Home {
                names: vec!["a".to_string(), "b".to_string()]
            }
        );
    }

    #[test]
    fn title_prefers_seasons_over_parts() {
        // One stray season is enough to pick the seasons-index.
        let entries = [pt("x", 1), ep("x", 1, 1)];
        assert_eq!(
            resolve_title("x", &entries),
            View::Seasons {
                name: "x".into(),
                seasons: vec![1]
            }
        );
    }

    #[test]
    fn title_without_seasons_lists_parts() {
        let entries = [pt("x", 2), pt("x", 1), pt("x", 2)];
        assert_eq!(
            resolve_title("x", &entries),
            View::Parts {
                name: "x".into(),
                parts: vec![1, 2]
            }
        );
    }

    #[test]
    fn season_view_lists_distinct_episodes() {
        let entries = [ep("x", 1, 2), ep("x", 1, 1), ep("x", 1, 2)];
        assert_eq!(
            resolve_season("x", 1, &entries),
            View::Episodes {
                name: "x".into(),
                season: 1,
                episodes: vec![1, 2]
            }
        );
    }

    #[test]
    fn episode_with_both_neighbors() {
        let entries = [ep("x", 1, 1), ep("x", 1, 2), ep("x", 1, 3), ep("x", 1, 4)];
        let p = resolve_episode("x", 1, 3, &entries).unwrap();
        assert_eq!(p.url, "http://cdn/x/s1e3.mp4");
        assert_eq!(p.prev_url, "/name=x/season=1/episode=2/");
        assert_eq!(p.next_url, "/name=x/season=1/episode=4/");
    }

    #[test]
    fn first_episode_has_no_prev() {
        let entries = [ep("x", 1, 1), ep("x", 1, 2)];
        let p = resolve_episode("x", 1, 1, &entries).unwrap();
        assert_eq!(p.prev_url, "");
        assert_eq!(p.next_url, "/name=x/season=1/episode=2/");
    }

    #[test]
    fn last_episode_has_no_next() {
        let entries = [ep("x", 1, 1), ep("x", 1, 2)];
        let p = resolve_episode("x", 1, 2, &entries).unwrap();
        assert_eq!(p.prev_url, "/name=x/season=1/episode=1/");
        assert_eq!(p.next_url, "");
    }

    #[test]
    fn adjacency_is_positional_across_gaps() {
        // Episodes 1, 2, 5: "next" from 2 is 5, not a dead link to 3.
        let entries = [ep("x", 1, 1), ep("x", 1, 2), ep("x", 1, 5)];
        let p = resolve_episode("x", 1, 2, &entries).unwrap();
        assert_eq!(p.next_url, "/name=x/season=1/episode=5/");
    }

    #[test]
    fn ordinals_above_nine_sort_numerically() {
        let entries = [ep("x", 1, 1), ep("x", 1, 2), ep("x", 1, 10)];
        assert_eq!(
            resolve_season("x", 1, &entries),
            View::Episodes {
                name: "x".into(),
                season: 1,
                episodes: vec![1, 2, 10]
            }
        );
        let p = resolve_episode("x", 1, 10, &entries).unwrap();
        assert_eq!(p.prev_url, "/name=x/season=1/episode=2/");
        assert_eq!(p.next_url, "");
    }

    #[test]
    fn missing_episode_is_a_retrieval_failure() {
        let entries = [ep("x", 1, 1)];
        let err = resolve_episode("x", 1, 9, &entries).unwrap_err();
        assert!(err.to_string().contains("no episode 9"));
    }

    #[test]
    fn part_navigation() {
        let entries = [pt("x", 1), pt("x", 2), pt("x", 3)];
        let p = resolve_part("x", 2, &entries).unwrap();
        assert_eq!(p.url, "http://cdn/x/p2.mp4");
        assert_eq!(p.prev_url, "/name=x/part=1/");
        assert_eq!(p.next_url, "/name=x/part=3/");

        let first = resolve_part("x", 1, &entries).unwrap();
        assert_eq!(first.prev_url, "");
        let last = resolve_part("x", 3, &entries).unwrap();
        assert_eq!(last.next_url, "");
    }

    #[test]
    fn missing_part_is_a_retrieval_failure() {
        let entries = [pt("x", 1)];
        assert!(resolve_part("x", 4, &entries).is_err());
    }
}
