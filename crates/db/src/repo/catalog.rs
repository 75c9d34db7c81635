use sqlx::SqlitePool;
use vidshelf_core::types::CatalogEntry;

type EntryTuple = (String, Option<i64>, Option<i64>, Option<i64>, String);

fn row_to_entry(r: EntryTuple) -> CatalogEntry {
    CatalogEntry {
        name: r.0,
        season: r.1,
        episode: r.2,
        part: r.3,
        link: r.4,
    }
}

/// All entries for a name+season, ordered by episode ascending. Feeds both
/// the episodes-index and episode playback resolution.
pub async fn season_entries(
    pool: &SqlitePool,
    name: &str,
    season: i64,
) -> Result<Vec<CatalogEntry>, sqlx::Error> {
    let rows: Vec<EntryTuple> = sqlx::query_as(
        "SELECT name, season, episode, part, link FROM catalog_entry \
         WHERE name = ? AND season = ? ORDER BY episode",
    )
    .bind(name)
    .bind(season)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(row_to_entry).collect())
}

/// All entries for a name, ordered by part ascending. Feeds the title view
/// (seasons vs. parts decision) and part playback resolution.
pub async fn title_entries(
    pool: &SqlitePool,
    name: &str,
) -> Result<Vec<CatalogEntry>, sqlx::Error> {
    let rows: Vec<EntryTuple> = sqlx::query_as(
        "SELECT name, season, episode, part, link FROM catalog_entry \
         WHERE name = ? ORDER BY part",
    )
    .bind(name)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(row_to_entry).collect())
}

/// The `name` column of every entry, duplicates included. The resolver
/// dedups and sorts.
pub async fn all_names(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    let rows: Vec<(String,)> = sqlx::query_as("SELECT name FROM catalog_entry")
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(|(name,)| name).collect())
}

/// Insert one catalog entry. The HTTP surface is read-only; this exists for
/// provisioning scripts and tests.
pub async fn insert_entry(
    pool: &SqlitePool,
    name: &str,
    season: Option<i64>,
    episode: Option<i64>,
    part: Option<i64>,
    link: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO catalog_entry (name, season, episode, part, link) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(name)
    .bind(season)
    .bind(episode)
    .bind(part)
    .bind(link)
    .execute(pool)
    .await?;
    Ok(result.last_insert_rowid())
}
