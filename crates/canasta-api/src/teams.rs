// Followed-teams endpoint

use serde::Deserialize;
use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::model::Team;

#[derive(Deserialize)]
struct TeamsResponse {
    #[serde(default, rename = "misequipos")]
    teams: Vec<Team>,
}

impl Client {
    /// List the teams the session's user follows.
    ///
    /// `POST misequiposV2.ashx` with `accion=listado`.
    pub async fn teams(&self) -> Result<Vec<Team>, Error> {
        debug!("listing followed teams");
        let response: TeamsResponse = self
            .request("misequiposV2.ashx", &[("accion", "listado")])
            .await?;
        Ok(response.teams)
    }
}
