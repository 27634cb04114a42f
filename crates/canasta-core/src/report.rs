// Season aggregation
//
// Walks a season's game days up to and including the one flagged current and
// accumulates per-player totals for one designated team. Bye rounds and rows
// with zero minutes played are skipped; rows are keyed by player name after
// trimming incidental whitespace. The aggregation holds no intermediate
// state outside the accumulator, so it can be recomputed idempotently from
// the same season payload.

use std::collections::BTreeMap;

use tracing::debug;

use canasta_api::model::{Match, PlayerStats, Season, Stats};
use canasta_api::{Client, Error};

/// Field-wise running sums for one player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerTotals {
    /// Matches in which the player logged nonzero minutes.
    pub games_played: i32,
    pub rating: i32,
    pub points: i32,

    pub shots_1p: i32,
    pub made_1p: i32,
    pub shots_2p: i32,
    pub made_2p: i32,
    pub shots_3p: i32,
    pub made_3p: i32,

    pub assists: i32,
    pub turnovers: i32,
    pub steals: i32,

    pub fouls: i32,
    pub fouled: i32,

    pub rebounds: i32,
    pub rebounds_off: i32,
    pub rebounds_def: i32,

    pub blocks: i32,
    pub blocked: i32,

    pub played_millis: i64,
}

impl PlayerTotals {
    fn add(&mut self, row: &PlayerStats) {
        self.games_played += 1;
        self.rating += row.rating;
        self.points += row.points;

        self.shots_1p += row.shots_1p;
        self.made_1p += row.made_1p;
        self.shots_2p += row.shots_2p;
        self.made_2p += row.made_2p;
        self.shots_3p += row.shots_3p;
        self.made_3p += row.made_3p;

        self.assists += row.assists;
        self.turnovers += row.turnovers;
        self.steals += row.steals;

        self.fouls += row.fouls;
        self.fouled += row.fouled;

        self.rebounds += row.rebounds;
        self.rebounds_off += row.rebounds_off;
        self.rebounds_def += row.rebounds_def;

        self.blocks += row.blocks;
        self.blocked += row.blocked;

        self.played_millis += row.played_millis;
    }

    /// Total minutes played across the accumulated games.
    pub fn minutes(&self) -> i64 {
        self.played_millis / 60_000
    }

    /// Per-game average of any counted stat; 0.0 when nothing accumulated.
    pub fn per_game(&self, total: i32) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(total) / f64::from(self.games_played)
        }
    }
}

/// Per-player season totals for one designated team, keyed by trimmed
/// player name. The synthetic "TOTALES" row accumulates like any other,
/// which yields team-level season sums under that key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonTotals {
    team: String,
    players: BTreeMap<String, PlayerTotals>,
}

impl SeasonTotals {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            players: BTreeMap::new(),
        }
    }

    /// The designated team's name.
    pub fn team(&self) -> &str {
        &self.team
    }

    /// Accumulated totals, ordered by player name.
    pub fn players(&self) -> &BTreeMap<String, PlayerTotals> {
        &self.players
    }

    /// Fold one match's stat sheet into the running totals.
    ///
    /// Picks the home or away sheet by matching the designated team name
    /// against the match summary, then adds every row with nonzero minutes.
    pub fn add_match(&mut self, stats: &Stats) {
        let rows = if stats.match_summary.home == self.team {
            &stats.players.home
        } else {
            &stats.players.away
        };

        for row in rows {
            if row.played_millis == 0 {
                continue;
            }
            self.players
                .entry(row.name.trim().to_owned())
                .or_default()
                .add(row);
        }
    }

    /// Fetch and accumulate stats for every relevant match of `team` in
    /// `season`. A single failed fetch aborts the whole computation; there
    /// are no partial results on error.
    pub async fn collect(client: &Client, season: &Season, team: &str) -> Result<Self, Error> {
        let mut totals = Self::new(team);
        for m in matches_through_current(season, team) {
            debug!(match_id = %m.id, "accumulating {}", m.title());
            let stats = client.stats(m).await?;
            totals.add_match(&stats);
        }
        Ok(totals)
    }
}

/// The designated team's matches in every game day up to and including the
/// one flagged current, byes excluded. Game days after the current one are
/// never visited.
pub fn matches_through_current<'a>(season: &'a Season, team: &str) -> Vec<&'a Match> {
    let mut out = Vec::new();
    for day in &season.game_days {
        out.extend(
            day.matches
                .iter()
                .filter(|m| !m.is_bye() && (m.home_team == team || m.away_team == team)),
        );
        if day.current {
            break;
        }
    }
    out
}

/// Season win/loss record and aggregate score from a team's perspective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamRecord {
    pub won: i32,
    pub lost: i32,
    pub scored: i32,
    pub received: i32,
}

impl TeamRecord {
    /// Derive the record from the matches involving `team`.
    ///
    /// Byes and matches whose score strings don't parse as integers
    /// (not yet played, placeholders) are skipped.
    pub fn from_matches<'a>(matches: impl IntoIterator<Item = &'a Match>, team: &str) -> Self {
        let mut record = Self::default();

        for m in matches {
            if m.is_bye() {
                continue;
            }
            let (Ok(home), Ok(away)) = (
                m.home_score.trim().parse::<i32>(),
                m.away_score.trim().parse::<i32>(),
            ) else {
                continue;
            };

            let (scored, received) = if m.home_team == team {
                (home, away)
            } else {
                (away, home)
            };

            if scored > received {
                record.won += 1;
            } else {
                record.lost += 1;
            }
            record.scored += scored;
            record.received += received;
        }

        record
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use canasta_api::model::{GameDay, LiveMatch, StatSheets, BYE_TEAM, TEAM_TOTALS};
    use pretty_assertions::assert_eq;

    use super::*;

    const TEAM: &str = "Club A";

    fn played(id: &str, home: &str, away: &str, hs: &str, aws: &str) -> Match {
        Match {
            id: id.into(),
            home_team: home.into(),
            away_team: away.into(),
            home_score: hs.into(),
            away_score: aws.into(),
            ..Match::default()
        }
    }

    fn day(current: bool, matches: Vec<Match>) -> GameDay {
        GameDay {
            current,
            matches,
            ..GameDay::default()
        }
    }

    fn row(name: &str, points: i32, millis: i64) -> PlayerStats {
        PlayerStats {
            number: "7".into(),
            name: name.into(),
            points,
            rebounds: 2,
            played_millis: millis,
            ..PlayerStats::default()
        }
    }

    fn home_stats(home: &str, rows: Vec<PlayerStats>) -> Stats {
        Stats {
            match_summary: LiveMatch {
                home: home.into(),
                ..LiveMatch::default()
            },
            players: StatSheets {
                home: rows,
                away: vec![row("RIVAL", 99, 1)],
            },
            ..Stats::default()
        }
    }

    #[test]
    fn walk_stops_after_current_game_day_inclusive() {
        let season = Season {
            game_days: vec![
                day(false, vec![played("m1", TEAM, "Club B", "78", "75")]),
                day(false, vec![played("m2", "Club C", TEAM, "60", "71")]),
                day(true, vec![played("m3", TEAM, "Club D", "", "")]),
                day(false, vec![played("m4", TEAM, "Club E", "90", "50")]),
            ],
            ..Season::default()
        };

        let ids: Vec<&str> = matches_through_current(&season, TEAM)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn walk_skips_byes_and_other_teams() {
        let season = Season {
            game_days: vec![day(
                true,
                vec![
                    played("m1", TEAM, BYE_TEAM, "", ""),
                    played("m2", "Club B", "Club C", "1", "2"),
                    played("m3", "Club D", TEAM, "3", "4"),
                ],
            )],
            ..Season::default()
        };

        let ids: Vec<&str> = matches_through_current(&season, TEAM)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["m3"]);
    }

    #[test]
    fn totals_sum_field_wise_across_matches() {
        let mut totals = SeasonTotals::new(TEAM);
        totals.add_match(&home_stats(TEAM, vec![row("PEREZ, J.", 21, 1_800_000)]));
        totals.add_match(&home_stats(TEAM, vec![row("PEREZ, J.", 10, 600_000)]));

        let perez = &totals.players()["PEREZ, J."];
        assert_eq!(perez.games_played, 2);
        assert_eq!(perez.points, 31);
        assert_eq!(perez.rebounds, 4);
        assert_eq!(perez.played_millis, 2_400_000);
        assert_eq!(perez.minutes(), 40);
    }

    #[test]
    fn totals_pick_away_sheet_when_team_is_visitor() {
        let stats = Stats {
            match_summary: LiveMatch {
                home: "Club B".into(),
                ..LiveMatch::default()
            },
            players: StatSheets {
                home: vec![row("HOME GUY", 50, 1)],
                away: vec![row("PEREZ, J.", 12, 300_000)],
            },
            ..Stats::default()
        };

        let mut totals = SeasonTotals::new(TEAM);
        totals.add_match(&stats);

        assert_eq!(totals.players().len(), 1);
        assert_eq!(totals.players()["PEREZ, J."].points, 12);
    }

    #[test]
    fn totals_skip_rows_with_zero_minutes() {
        let mut totals = SeasonTotals::new(TEAM);
        totals.add_match(&home_stats(
            TEAM,
            vec![row("PEREZ, J.", 21, 1_800_000), row("BANCO, S.", 0, 0)],
        ));

        assert!(totals.players().contains_key("PEREZ, J."));
        assert!(!totals.players().contains_key("BANCO, S."));
    }

    #[test]
    fn totals_key_by_trimmed_name() {
        let mut totals = SeasonTotals::new(TEAM);
        totals.add_match(&home_stats(TEAM, vec![row(" PEREZ, J.", 10, 60_000)]));
        totals.add_match(&home_stats(TEAM, vec![row("PEREZ, J. ", 5, 60_000)]));

        assert_eq!(totals.players().len(), 1);
        assert_eq!(totals.players()["PEREZ, J."].points, 15);
    }

    #[test]
    fn totals_row_accumulates_under_its_sentinel_name() {
        let mut totals = SeasonTotals::new(TEAM);
        let mut team_row = row(TEAM_TOTALS, 78, 12_000_000);
        team_row.number = String::new();
        totals.add_match(&home_stats(TEAM, vec![team_row]));

        assert_eq!(totals.players()[TEAM_TOTALS].points, 78);
    }

    #[test]
    fn per_game_guards_division_by_zero() {
        let empty = PlayerTotals::default();
        assert!((empty.per_game(10) - 0.0).abs() < f64::EPSILON);

        let mut totals = PlayerTotals::default();
        totals.games_played = 2;
        assert!((totals.per_game(10) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn record_counts_wins_losses_and_scores() {
        let matches = vec![
            played("m1", TEAM, "Club B", "78", "75"),
            played("m2", "Club C", TEAM, "60", "71"),
            played("m3", TEAM, "Club D", "65", "80"),
        ];

        let record = TeamRecord::from_matches(&matches, TEAM);
        assert_eq!(
            record,
            TeamRecord {
                won: 2,
                lost: 1,
                scored: 78 + 71 + 65,
                received: 75 + 60 + 80,
            }
        );
    }

    #[test]
    fn record_skips_byes_and_unplayed_matches() {
        let matches = vec![
            played("m1", TEAM, BYE_TEAM, "", ""),
            played("m2", TEAM, "Club B", "", ""),
            played("m3", TEAM, "Club C", "80", "70"),
        ];

        let record = TeamRecord::from_matches(&matches, TEAM);
        assert_eq!(record.won, 1);
        assert_eq!(record.lost, 0);
        assert_eq!(record.scored, 80);
    }
}
