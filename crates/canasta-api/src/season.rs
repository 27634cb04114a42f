// Season detail endpoint
//
// Shares `misequiposV2.ashx` with the team listing; the `accion` field
// selects the operation.

use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::model::Season;

impl Client {
    /// Fetch a team's season: ordered game days plus the standings table.
    ///
    /// `POST misequiposV2.ashx` with `accion=detalleEquipo`.
    pub async fn season(&self, team_id: &str) -> Result<Season, Error> {
        debug!(team_id, "fetching season");
        let mut season: Season = self
            .request(
                "misequiposV2.ashx",
                &[("accion", "detalleEquipo"), ("id_equipo", team_id)],
            )
            .await?;
        season.team_id = team_id.to_owned();
        Ok(season)
    }
}
