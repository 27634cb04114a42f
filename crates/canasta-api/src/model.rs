// Vendor response types
//
// Models for the Afición JSON API. Wire names are Spanish and the server is
// inconsistent about field presence, so fields carry `#[serde(rename)]` and
// `#[serde(default)]` liberally: absent fields decode to zero values rather
// than failing the call. All types are immutable value snapshots; nothing
// is mutated after decoding.

use serde::{Deserialize, Serialize};

/// Sentinel team name meaning a bye round (no opponent).
pub const BYE_TEAM: &str = "LIBRE";

/// Sentinel player name for the synthetic team-totals row of a stat sheet.
pub const TEAM_TOTALS: &str = "TOTALES";

// ── Teams ────────────────────────────────────────────────────────────

/// A team followed by the session's user, from `misequiposV2.ashx`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub club: String,
    #[serde(default, rename = "nombre")]
    pub name: String,
    #[serde(default, rename = "idEquipoNotificacion")]
    pub notification_id: String,
}

// ── Season ───────────────────────────────────────────────────────────

/// A team's season: ordered game days plus the standings table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    /// The team this season was requested for. Not part of the payload;
    /// filled in by [`Client::season`](crate::Client::season).
    #[serde(skip)]
    pub team_id: String,
    #[serde(default, rename = "jornadas")]
    pub game_days: Vec<GameDay>,
    #[serde(default, rename = "clasificacion")]
    pub standings: Vec<Position>,
}

/// One named round of the season. At most one game day is current at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDay {
    #[serde(default, rename = "jornada")]
    pub name: String,
    #[serde(default, rename = "fecha")]
    pub date: String,
    #[serde(default, rename = "activa")]
    pub current: bool,
    #[serde(default, rename = "partidos")]
    pub matches: Vec<Match>,
}

/// A scheduled or played match.
///
/// Scores are strings: empty before the game, and occasionally non-numeric
/// placeholders. The opaque `id` token is the sole key for requesting stats
/// or the live feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    #[serde(default, rename = "idPartido")]
    pub id: String,
    #[serde(default, rename = "nombreEquipo1")]
    pub home_team: String,
    #[serde(default, rename = "nombreEquipo2")]
    pub away_team: String,
    #[serde(default, rename = "puntosEquipo1")]
    pub home_score: String,
    #[serde(default, rename = "puntosEquipo2")]
    pub away_score: String,
    #[serde(default, rename = "fecha")]
    pub date: String,
    #[serde(default, rename = "hora")]
    pub time: String,
    #[serde(default, rename = "estado")]
    pub status: String,
}

impl Match {
    /// One-line description, e.g. `"Club A 78 - Club B 75"`.
    pub fn title(&self) -> String {
        format!(
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }

    /// `true` when either side is the bye sentinel.
    pub fn is_bye(&self) -> bool {
        self.home_team == BYE_TEAM || self.away_team == BYE_TEAM
    }
}

/// A standings table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub id: i64,
    #[serde(default, rename = "nombre")]
    pub name: String,
    #[serde(default, rename = "posicion")]
    pub rank: i32,
    #[serde(default, rename = "pj")]
    pub played: i32,
    #[serde(default, rename = "pg")]
    pub won: i32,
    #[serde(default, rename = "pp")]
    pub lost: i32,
    #[serde(default, rename = "puntos")]
    pub points: i32,
    #[serde(default, rename = "pf")]
    pub scored: i32,
    #[serde(default, rename = "pc")]
    pub received: i32,
}

impl Position {
    /// Points scored per game played; 0.0 when no games have been played.
    pub fn scored_per_game(&self) -> f64 {
        per_game(self.scored, self.played)
    }

    /// Points received per game played; 0.0 when no games have been played.
    pub fn received_per_game(&self) -> f64 {
        per_game(self.received, self.played)
    }
}

fn per_game(total: i32, played: i32) -> f64 {
    if played == 0 {
        0.0
    } else {
        f64::from(total) / f64::from(played)
    }
}

// ── Match statistics ─────────────────────────────────────────────────

/// Per-match box score from `envivo/estadisticas.ashx`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// The match these stats were requested for. Not part of the payload;
    /// filled in by [`Client::stats`](crate::Client::stats).
    #[serde(skip)]
    pub match_id: String,
    #[serde(default, rename = "partido")]
    pub match_summary: LiveMatch,
    #[serde(default, rename = "estadisticas")]
    pub players: StatSheets,
}

/// The two ordered per-player stat sheets of a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSheets {
    #[serde(default, rename = "estadisticasequipolocal")]
    pub home: Vec<PlayerStats>,
    #[serde(default, rename = "estadisticasequipovisitante")]
    pub away: Vec<PlayerStats>,
}

/// One player's line in a match, or the synthetic team-totals row
/// (empty `number`, name [`TEAM_TOTALS`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(default, rename = "dorsal")]
    pub number: String,
    #[serde(default, rename = "nombre")]
    pub name: String,
    #[serde(default, rename = "valoracion")]
    pub rating: i32,

    #[serde(default, rename = "puntos")]
    pub points: i32,

    #[serde(default, rename = "tiro1p")]
    pub shots_1p: i32,
    #[serde(default, rename = "canasta1p")]
    pub made_1p: i32,
    #[serde(default, rename = "tiro1pFallado")]
    pub missed_1p: i32,

    #[serde(default, rename = "tiro2p")]
    pub shots_2p: i32,
    #[serde(default, rename = "canasta2p")]
    pub made_2p: i32,
    #[serde(default, rename = "tiro2pFallado")]
    pub missed_2p: i32,

    #[serde(default, rename = "tiro3p")]
    pub shots_3p: i32,
    #[serde(default, rename = "canasta3p")]
    pub made_3p: i32,
    #[serde(default, rename = "tiro3pFallado")]
    pub missed_3p: i32,

    #[serde(default, rename = "asistencias")]
    pub assists: i32,
    #[serde(default, rename = "perdidas")]
    pub turnovers: i32,
    #[serde(default, rename = "recuperaciones")]
    pub steals: i32,

    #[serde(default, rename = "faltascometidas")]
    pub fouls: i32,
    #[serde(default, rename = "faltasrecibidas")]
    pub fouled: i32,

    #[serde(default, rename = "rebotes")]
    pub rebounds: i32,
    #[serde(default, rename = "reboteofensivo")]
    pub rebounds_off: i32,
    #[serde(default, rename = "rebotedefensivo")]
    pub rebounds_def: i32,

    #[serde(default, rename = "taponescometidos")]
    pub blocks: i32,
    #[serde(default, rename = "taponesrecibidos")]
    pub blocked: i32,

    #[serde(default, rename = "milisegundos_jugados")]
    pub played_millis: i64,
    #[serde(default, rename = "tiempo_jugado")]
    pub played: String,
}

impl PlayerStats {
    /// `true` for the synthetic row aggregating team totals.
    pub fn is_team_total(&self) -> bool {
        self.number.is_empty() && self.name == TEAM_TOTALS
    }
}

// ── Live ─────────────────────────────────────────────────────────────

/// Score summary of a match, period by period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveMatch {
    #[serde(default, rename = "local")]
    pub home: String,
    #[serde(default, rename = "idlocal")]
    pub home_id: i64,
    #[serde(default, rename = "tanteo_local")]
    pub home_score: i32,
    #[serde(default, rename = "visitante")]
    pub away: String,
    #[serde(default, rename = "idvisitante")]
    pub away_id: i64,
    #[serde(default, rename = "tanteo_visitante")]
    pub away_score: i32,
    #[serde(default, rename = "numperiodos")]
    pub num_periods: i32,
    #[serde(default, rename = "tiene_prorrogas")]
    pub overtime: bool,
    #[serde(default, rename = "periodos")]
    pub periods: Vec<Period>,
}

/// One period's score within a [`LiveMatch`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    #[serde(default, rename = "periodo")]
    pub period: i32,
    #[serde(default, rename = "tanteo_periodo_local")]
    pub home_score: i32,
    #[serde(default, rename = "tanteo_periodo_visitante")]
    pub away_score: i32,
}

/// Live feed from `envivo/partido.ashx`: the match summary plus the
/// append-only play-by-play history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Live {
    /// The match this feed was requested for. Not part of the payload;
    /// filled in by [`Client::live`](crate::Client::live).
    #[serde(skip)]
    pub match_id: String,
    #[serde(default, rename = "partido")]
    pub match_summary: LiveMatch,
    #[serde(default, rename = "envivo")]
    pub feed: LiveFeed,
}

/// The play-by-play container nested inside a [`Live`] response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveFeed {
    #[serde(default, rename = "historialacciones")]
    pub actions: Vec<Action>,
}

/// One play-by-play event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    #[serde(default, rename = "autoincremental_id")]
    pub seq: i64,
    #[serde(default, rename = "accion_tipo")]
    pub kind: String,
    #[serde(default, rename = "informacion_adicional")]
    pub info: String,
    #[serde(default, rename = "numero_periodo")]
    pub period: i32,
    #[serde(default, rename = "tiempo_partido")]
    pub clock: String,
    #[serde(default, rename = "equipo_id")]
    pub team_id: i64,
    #[serde(default, rename = "dorsal")]
    pub player_number: String,
    #[serde(default, rename = "componente_id")]
    pub actor_id: String,
}

// ── Competition hierarchy ────────────────────────────────────────────

/// A league (provincial delegation) from `delegaciones.ashx`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    #[serde(default, rename = "provincia")]
    pub name: String,
}

/// A tournament within a league.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tournament {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "nombre")]
    pub name: String,
}

/// A category within a tournament.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "nombre")]
    pub name: String,
}

/// A club within a tournament/category pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "nombre")]
    pub name: String,
}
