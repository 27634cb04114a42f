// Per-match detail endpoints
//
// Both take the opaque match id token issued inside a season's game days;
// there is no other way to address a match.

use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::model::{Live, Match, Stats};

impl Client {
    /// Per-player box score plus the period-by-period summary.
    ///
    /// `POST envivo/estadisticas.ashx`.
    pub async fn stats(&self, m: &Match) -> Result<Stats, Error> {
        debug!(match_id = %m.id, "fetching match statistics");
        let mut stats: Stats = self
            .request("envivo/estadisticas.ashx", &[("id_partido", m.id.as_str())])
            .await?;
        stats.match_id = m.id.clone();
        Ok(stats)
    }

    /// Live play-by-play feed. The action sequence is append-only; polling
    /// again returns a superset of the previous call.
    ///
    /// `POST envivo/partido.ashx`.
    pub async fn live(&self, m: &Match) -> Result<Live, Error> {
        debug!(match_id = %m.id, "fetching live feed");
        let mut live: Live = self
            .request("envivo/partido.ashx", &[("id_partido", m.id.as_str())])
            .await?;
        live.match_id = m.id.clone();
        Ok(live)
    }
}
