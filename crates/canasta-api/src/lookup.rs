// Competition hierarchy lookups
//
// Flat reference lists for browsing leagues, tournaments, categories and
// clubs outside the user's own teams. Everything but `leagues` goes through
// `equipos-jugadores.ashx`, selected by the `accion` field and returned
// under a shared `valores` key.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::model::{Category, Club, League, Tournament};

#[derive(Deserialize)]
struct LeaguesResponse {
    #[serde(default, rename = "delegaciones")]
    leagues: Vec<League>,
}

/// Shared wrapper for the `equipos-jugadores.ashx` lookups.
#[derive(Deserialize)]
struct ValuesResponse<T> {
    #[serde(default = "Vec::new", rename = "valores")]
    values: Vec<T>,
}

impl Client {
    /// List all leagues (provincial delegations).
    ///
    /// `POST delegaciones.ashx`, no parameters.
    pub async fn leagues(&self) -> Result<Vec<League>, Error> {
        debug!("listing leagues");
        let response: LeaguesResponse = self.request("delegaciones.ashx", &[]).await?;
        Ok(response.leagues)
    }

    /// List the tournaments of a league, addressed by league name.
    pub async fn tournaments(&self, league: &str) -> Result<Vec<Tournament>, Error> {
        debug!(league, "listing tournaments");
        self.values(&[("accion", "competiciones"), ("delegacion", league)])
            .await
    }

    /// List the categories of a tournament.
    pub async fn categories(&self, tournament: &Tournament) -> Result<Vec<Category>, Error> {
        debug!(tournament = %tournament.id, "listing categories");
        self.values(&[
            ("accion", "categorias"),
            ("competicion", tournament.id.as_str()),
        ])
        .await
    }

    /// List the clubs of a tournament/category pair.
    pub async fn clubs(
        &self,
        tournament: &Tournament,
        category: &Category,
    ) -> Result<Vec<Club>, Error> {
        debug!(tournament = %tournament.id, category = %category.id, "listing clubs");
        self.values(&[
            ("accion", "clubes"),
            ("categoria", category.id.as_str()),
            ("competicion", tournament.id.as_str()),
        ])
        .await
    }

    async fn values<T: DeserializeOwned>(&self, fields: &[(&str, &str)]) -> Result<Vec<T>, Error> {
        let response: ValuesResponse<T> = self.request("equipos-jugadores.ashx", fields).await?;
        Ok(response.values)
    }
}
