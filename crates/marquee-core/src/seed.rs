//! One-shot seed-file bootstrap.
//!
//! At process start, if the registry is empty and a seed file is present,
//! the file is parsed and the registry populated from it. The load is gated
//! by an explicit empty-store check so re-running it cannot duplicate
//! entities, and it is two-phase (parse everything, then apply) so a
//! malformed file leaves the registry empty rather than half-populated.
//!
//! The seed format is a semicolon-delimited text file with a header row
//! naming the `year`, `title`, `studios`, `producers`, and `winner` columns.
//! Studio and producer cells hold multiple names joined by commas or the
//! word `and`; a winner cell holding the literal `yes` marks a win.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::NewMovie;
use crate::registry::MovieRegistry;

const DELIMITER: char = ';';

/// One parsed row of the seed file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SeedRecord {
    year: i32,
    title: String,
    studios: Vec<String>,
    producers: Vec<String>,
    winner: bool,
}

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    year: usize,
    title: usize,
    studios: usize,
    producers: usize,
    winner: usize,
}

/// Populates the registry from the seed file at `path`.
///
/// Returns the number of movies loaded. When the registry already holds
/// movies the file is not read and `Ok(0)` is returned; bootstrap runs at
/// most once per process.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, [`Error::SeedParse`]
/// for malformed content, or [`Error::Validation`] if a parsed row is
/// rejected by the registry. On error the registry is left empty.
pub fn bootstrap(registry: &mut MovieRegistry, path: &Path) -> Result<usize> {
    if !registry.is_empty() {
        tracing::debug!("registry already populated; skipping seed load");
        return Ok(0);
    }

    let contents = fs::read_to_string(path)?;
    let records = parse_seed(&contents)?;

    // Stage into a fresh registry so a rejected row cannot leave the live
    // one half-populated.
    let mut staged = MovieRegistry::new();
    let count = apply(&mut staged, records)?;
    *registry = staged;
    Ok(count)
}

/// Parses the whole seed file into records without touching the registry.
fn parse_seed(contents: &str) -> Result<Vec<SeedRecord>> {
    let mut lines = contents
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| Error::seed_parse(1, "missing header row"))?;
    let columns = parse_header(header_line, header)?;

    let mut records = Vec::new();
    for (line_no, line) in lines {
        records.push(parse_row(line_no, line, columns)?);
    }
    Ok(records)
}

fn parse_header(line_no: usize, header: &str) -> Result<ColumnIndices> {
    let mut year = None;
    let mut title = None;
    let mut studios = None;
    let mut producers = None;
    let mut winner = None;

    for (idx, field) in header.split(DELIMITER).enumerate() {
        match field.trim().to_ascii_lowercase().as_str() {
            "year" => year = Some(idx),
            "title" => title = Some(idx),
            "studios" => studios = Some(idx),
            "producers" => producers = Some(idx),
            "winner" => winner = Some(idx),
            _ => {}
        }
    }

    let require = |column: Option<usize>, name: &str| {
        column.ok_or_else(|| Error::seed_parse(line_no, format!("missing column `{name}`")))
    };

    Ok(ColumnIndices {
        year: require(year, "year")?,
        title: require(title, "title")?,
        studios: require(studios, "studios")?,
        producers: require(producers, "producers")?,
        winner: require(winner, "winner")?,
    })
}

fn parse_row(line_no: usize, line: &str, columns: ColumnIndices) -> Result<SeedRecord> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();

    let year_raw = row_field(&fields, columns.year, line_no, "year")?;
    let year: i32 = year_raw
        .parse()
        .map_err(|_| Error::seed_parse(line_no, format!("invalid year `{year_raw}`")))?;

    Ok(SeedRecord {
        year,
        title: row_field(&fields, columns.title, line_no, "title")?.to_string(),
        studios: split_names(row_field(&fields, columns.studios, line_no, "studios")?),
        producers: split_names(row_field(&fields, columns.producers, line_no, "producers")?),
        winner: row_field(&fields, columns.winner, line_no, "winner")? == "yes",
    })
}

fn row_field<'a>(fields: &[&'a str], idx: usize, line_no: usize, name: &str) -> Result<&'a str> {
    fields
        .get(idx)
        .map(|value| value.trim())
        .ok_or_else(|| Error::seed_parse(line_no, format!("missing `{name}` field")))
}

/// Applies parsed records to the registry, creating studios and producers on
/// first mention.
fn apply(registry: &mut MovieRegistry, records: Vec<SeedRecord>) -> Result<usize> {
    let count = records.len();
    for record in records {
        let studio_ids = record
            .studios
            .iter()
            .map(|name| registry.get_or_create_studio(name))
            .collect::<Result<Vec<_>>>()?;
        let producer_ids = record
            .producers
            .iter()
            .map(|name| registry.get_or_create_producer(name))
            .collect::<Result<Vec<_>>>()?;

        registry.insert_movie(NewMovie {
            year: record.year,
            title: record.title,
            winner: record.winner,
            studio_ids,
            producer_ids,
        })?;
    }
    Ok(count)
}

/// Splits a multi-name cell on commas or the standalone word `and`.
///
/// Each resulting name is whitespace-normalized; empty names are dropped.
/// `and` only separates when it stands alone between whitespace, so names
/// containing it as a substring stay intact.
fn split_names(raw: &str) -> Vec<String> {
    let mut names = Vec::new();
    for chunk in raw.split(',') {
        let mut current = String::new();
        for word in chunk.split_whitespace() {
            if word == "and" {
                take_name(&mut names, &mut current);
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }
        }
        take_name(&mut names, &mut current);
    }
    names
}

fn take_name(names: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        names.push(std::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "year;title;studios;producers;winner";

    fn parse(contents: &str) -> Result<Vec<SeedRecord>> {
        parse_seed(contents)
    }

    #[test]
    fn splits_names_on_commas_and_the_word_and() {
        assert_eq!(
            split_names("Producer A, Producer B and Producer C"),
            vec!["Producer A", "Producer B", "Producer C"]
        );
        assert_eq!(split_names("Producer A and Producer B"), vec!["Producer A", "Producer B"]);
        assert_eq!(split_names("Solo Producer"), vec!["Solo Producer"]);
    }

    #[test]
    fn and_inside_a_word_does_not_split() {
        assert_eq!(split_names("Sandy Islander"), vec!["Sandy Islander"]);
        assert_eq!(split_names("Brandon Sand"), vec!["Brandon Sand"]);
    }

    #[test]
    fn empty_name_fragments_are_dropped() {
        assert_eq!(split_names("Producer A, , and Producer B"), vec!["Producer A", "Producer B"]);
        assert!(split_names("  ").is_empty());
    }

    #[test]
    fn parses_rows_using_header_positions() -> Result<()> {
        // Columns deliberately reordered relative to the usual layout.
        let contents = "title;year;winner;producers;studios\n\
                        First Feature;1990;yes;Producer A;Studio A\n\
                        Second Feature;1991;;Producer B;Studio B\n";
        let records = parse(contents)?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "First Feature");
        assert_eq!(records[0].year, 1990);
        assert!(records[0].winner);
        assert_eq!(records[1].producers, vec!["Producer B"]);
        assert!(!records[1].winner);
        Ok(())
    }

    #[test]
    fn only_the_literal_yes_marks_a_winner() -> Result<()> {
        let contents = format!(
            "{HEADER}\n\
             1990;A;Studio;Producer;yes\n\
             1991;B;Studio;Producer;no\n\
             1992;C;Studio;Producer;YES\n\
             1993;D;Studio;Producer;\n"
        );
        let records = parse(&contents)?;
        let winners: Vec<bool> = records.iter().map(|r| r.winner).collect();
        assert_eq!(winners, vec![true, false, false, false]);
        Ok(())
    }

    #[test]
    fn invalid_year_reports_the_line_number() {
        let contents = format!("{HEADER}\n1990;Fine;Studio;Producer;yes\noops;Bad;Studio;Producer;no\n");
        let err = parse(&contents).unwrap_err();
        let Error::SeedParse { line, reason } = err else {
            panic!("unexpected error: {err:?}");
        };
        assert_eq!(line, 3);
        assert!(reason.contains("oops"));
    }

    #[test]
    fn missing_header_column_is_rejected() {
        let contents = "year;title;studios;winner\n1990;A;Studio;yes\n";
        let err = parse(contents).unwrap_err();
        let Error::SeedParse { reason, .. } = err else {
            panic!("unexpected error: {err:?}");
        };
        assert!(reason.contains("producers"));
    }

    #[test]
    fn short_row_is_rejected() {
        let contents = format!("{HEADER}\n1990;Only Title\n");
        let err = parse(&contents).unwrap_err();
        assert!(matches!(err, Error::SeedParse { .. }));
    }

    #[test]
    fn blank_lines_are_skipped() -> Result<()> {
        let contents = format!("\n{HEADER}\n\n1990;A;Studio;Producer;yes\n\n");
        let records = parse(&contents)?;
        assert_eq!(records.len(), 1);
        Ok(())
    }

    #[test]
    fn bootstrap_populates_an_empty_registry() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("movies.csv");
        std::fs::write(
            &path,
            format!("{HEADER}\n1990;First;Studio A;Producer A and Producer B;yes\n"),
        )?;

        let mut registry = MovieRegistry::new();
        let loaded = bootstrap(&mut registry, &path)?;
        assert_eq!(loaded, 1);
        assert_eq!(registry.movie_count(), 1);

        let movies = registry.movies_by_year();
        assert_eq!(movies[0].producer_ids.len(), 2);
        assert!(movies[0].winner);
        Ok(())
    }

    #[test]
    fn bootstrap_skips_a_populated_registry() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("movies.csv");
        std::fs::write(&path, format!("{HEADER}\n1990;First;Studio;Producer;yes\n"))?;

        let mut registry = MovieRegistry::new();
        assert_eq!(bootstrap(&mut registry, &path)?, 1);
        // A second call must not duplicate anything.
        assert_eq!(bootstrap(&mut registry, &path)?, 0);
        assert_eq!(registry.movie_count(), 1);
        Ok(())
    }

    #[test]
    fn bootstrap_reuses_entities_across_rows() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("movies.csv");
        std::fs::write(
            &path,
            format!(
                "{HEADER}\n\
                 1990;First;Studio A;Producer A;yes\n\
                 1995;Second;Studio A;Producer A;yes\n"
            ),
        )?;

        let mut registry = MovieRegistry::new();
        bootstrap(&mut registry, &path)?;

        let movies = registry.movies_by_year();
        assert_eq!(movies[0].producer_ids, movies[1].producer_ids);
        assert_eq!(movies[0].studio_ids, movies[1].studio_ids);
        Ok(())
    }
}
