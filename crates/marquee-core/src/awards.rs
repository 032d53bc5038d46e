//! Award interval query engine.
//!
//! Computes, per producer, the interval in years between consecutive Worst
//! Picture wins, and selects the producers sharing the global minimum and
//! maximum interval. The computation is a pure read over the registry:
//! re-entrant, repeatable, and free of side effects.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::ProducerId;
use crate::registry::MovieRegistry;

/// One interval between two consecutive wins of the same producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AwardInterval {
    /// Name of the producer.
    pub producer: String,
    /// Years between the two wins.
    pub interval: i32,
    /// Year of the earlier win.
    pub previous_win: i32,
    /// Year of the later win.
    pub following_win: i32,
}

/// Producers sharing the global minimum and maximum win interval.
///
/// Ties are never broken: every interval record equal to the extreme value
/// is included in its group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AwardIntervalExtremes {
    /// All interval records equal to the global minimum.
    pub min: Vec<AwardInterval>,
    /// All interval records equal to the global maximum.
    pub max: Vec<AwardInterval>,
}

/// Computes every candidate interval record.
///
/// The winner-restricted (producer, movie) association set is partitioned by
/// producer identity; each partition is ordered by year ascending and emits
/// one record per adjacent pair of wins. Partitions with fewer than two wins
/// emit nothing, and a producer with `n` wins emits exactly `n - 1` records,
/// each compared independently against the global extremes.
///
/// Records are ordered by producer name, then by the earlier win year, so
/// repeated invocations over unchanged data are byte-identical.
#[must_use]
pub fn candidate_intervals(registry: &MovieRegistry) -> Vec<AwardInterval> {
    let mut wins_by_producer: BTreeMap<ProducerId, (&str, Vec<i32>)> = BTreeMap::new();
    for (producer, year) in registry.winning_credits() {
        wins_by_producer
            .entry(producer.id)
            .or_insert_with(|| (producer.name.as_str(), Vec::new()))
            .1
            .push(year);
    }

    let mut candidates = Vec::new();
    for (name, mut years) in wins_by_producer.into_values() {
        if years.len() < 2 {
            continue;
        }
        years.sort_unstable();
        for pair in years.windows(2) {
            candidates.push(AwardInterval {
                producer: name.to_string(),
                interval: pair[1] - pair[0],
                previous_win: pair[0],
                following_win: pair[1],
            });
        }
    }

    candidates.sort_by(|a, b| {
        a.producer
            .cmp(&b.producer)
            .then(a.previous_win.cmp(&b.previous_win))
    });
    candidates
}

/// Computes the producers with the minimum and maximum win interval.
///
/// With no candidate records (no producer has two wins) both groups are
/// empty. A single candidate record appears in both groups.
#[must_use]
pub fn award_interval_extremes(registry: &MovieRegistry) -> AwardIntervalExtremes {
    let candidates = candidate_intervals(registry);

    let Some(min_interval) = candidates.iter().map(|c| c.interval).min() else {
        return AwardIntervalExtremes::default();
    };
    let Some(max_interval) = candidates.iter().map(|c| c.interval).max() else {
        return AwardIntervalExtremes::default();
    };

    let min = candidates
        .iter()
        .filter(|c| c.interval == min_interval)
        .cloned()
        .collect();
    let max = candidates
        .iter()
        .filter(|c| c.interval == max_interval)
        .cloned()
        .collect();

    AwardIntervalExtremes { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::model::NewMovie;

    /// Builds a registry where each (producer, years) entry wins in each
    /// listed year.
    fn registry_with_wins(wins: &[(&str, &[i32])]) -> Result<MovieRegistry> {
        let mut registry = MovieRegistry::new();
        for (name, years) in wins {
            let producer = registry.get_or_create_producer(name)?;
            for year in *years {
                registry.insert_movie(NewMovie {
                    year: *year,
                    title: format!("{name} {year}"),
                    winner: true,
                    studio_ids: Vec::new(),
                    producer_ids: vec![producer],
                })?;
            }
        }
        Ok(registry)
    }

    fn record(producer: &str, interval: i32, previous: i32, following: i32) -> AwardInterval {
        AwardInterval {
            producer: producer.to_string(),
            interval,
            previous_win: previous,
            following_win: following,
        }
    }

    #[test]
    fn producer_with_n_wins_emits_n_minus_one_candidates() -> Result<()> {
        let registry = registry_with_wins(&[("Producer A", &[2000, 2004, 2006, 2013])])?;
        let candidates = candidate_intervals(&registry);
        assert_eq!(
            candidates,
            vec![
                record("Producer A", 4, 2000, 2004),
                record("Producer A", 2, 2004, 2006),
                record("Producer A", 7, 2006, 2013),
            ]
        );
        Ok(())
    }

    #[test]
    fn producers_with_fewer_than_two_wins_emit_nothing() -> Result<()> {
        let registry = registry_with_wins(&[("Producer A", &[2000]), ("Producer B", &[])])?;
        assert!(candidate_intervals(&registry).is_empty());

        let extremes = award_interval_extremes(&registry);
        assert!(extremes.min.is_empty());
        assert!(extremes.max.is_empty());
        Ok(())
    }

    #[test]
    fn wins_are_ordered_within_the_producer_not_globally() -> Result<()> {
        // Producer B's wins interleave with A's; each partition is ordered
        // on its own.
        let registry = registry_with_wins(&[
            ("Producer A", &[2000, 2006]),
            ("Producer B", &[2003, 2004]),
        ])?;
        let candidates = candidate_intervals(&registry);
        assert_eq!(
            candidates,
            vec![
                record("Producer A", 6, 2000, 2006),
                record("Producer B", 1, 2003, 2004),
            ]
        );
        Ok(())
    }

    #[test]
    fn extremes_match_spec_scenario() -> Result<()> {
        let registry = registry_with_wins(&[
            ("Producer A", &[2000, 2004, 2006]),
            ("Producer B", &[2001, 2010]),
        ])?;

        let extremes = award_interval_extremes(&registry);
        assert_eq!(extremes.min, vec![record("Producer A", 2, 2004, 2006)]);
        assert_eq!(extremes.max, vec![record("Producer B", 9, 2001, 2010)]);
        Ok(())
    }

    #[test]
    fn single_candidate_appears_in_both_groups() -> Result<()> {
        let registry = registry_with_wins(&[("Producer A", &[1999, 2002])])?;
        let extremes = award_interval_extremes(&registry);
        let expected = vec![record("Producer A", 3, 1999, 2002)];
        assert_eq!(extremes.min, expected);
        assert_eq!(extremes.max, expected);
        Ok(())
    }

    #[test]
    fn tied_producers_share_the_extreme_group() -> Result<()> {
        let registry = registry_with_wins(&[
            ("Producer A", &[2000, 2003]),
            ("Producer B", &[2005, 2008]),
        ])?;

        let extremes = award_interval_extremes(&registry);
        let expected = vec![
            record("Producer A", 3, 2000, 2003),
            record("Producer B", 3, 2005, 2008),
        ];
        assert_eq!(extremes.min, expected);
        assert_eq!(extremes.max, expected);
        Ok(())
    }

    #[test]
    fn each_consecutive_pair_is_compared_independently() -> Result<()> {
        // A's middle interval (2) is the minimum even though A also holds a
        // wide interval; records are never aggregated per producer.
        let registry = registry_with_wins(&[
            ("Producer A", &[1990, 1992, 2005]),
            ("Producer B", &[2000, 2004]),
        ])?;

        let extremes = award_interval_extremes(&registry);
        assert_eq!(extremes.min, vec![record("Producer A", 2, 1990, 1992)]);
        assert_eq!(extremes.max, vec![record("Producer A", 13, 1992, 2005)]);
        Ok(())
    }

    #[test]
    fn shared_winning_movie_credits_every_producer() -> Result<()> {
        // One winning movie credited to two producers; a second win each.
        let mut registry = MovieRegistry::new();
        let a = registry.get_or_create_producer("Producer A")?;
        let b = registry.get_or_create_producer("Producer B")?;
        registry.insert_movie(NewMovie {
            year: 2000,
            title: "Joint Feature".to_string(),
            winner: true,
            studio_ids: Vec::new(),
            producer_ids: vec![a, b],
        })?;
        registry.insert_movie(NewMovie {
            year: 2002,
            title: "Solo A".to_string(),
            winner: true,
            studio_ids: Vec::new(),
            producer_ids: vec![a],
        })?;
        registry.insert_movie(NewMovie {
            year: 2005,
            title: "Solo B".to_string(),
            winner: true,
            studio_ids: Vec::new(),
            producer_ids: vec![b],
        })?;

        let candidates = candidate_intervals(&registry);
        assert_eq!(
            candidates,
            vec![
                record("Producer A", 2, 2000, 2002),
                record("Producer B", 5, 2000, 2005),
            ]
        );
        Ok(())
    }

    #[test]
    fn repeated_invocations_return_identical_results() -> Result<()> {
        let registry = registry_with_wins(&[
            ("Producer A", &[2000, 2004, 2006]),
            ("Producer B", &[2001, 2010]),
        ])?;

        let first = award_interval_extremes(&registry);
        let second = award_interval_extremes(&registry);
        assert_eq!(first, second);
        Ok(())
    }
}
