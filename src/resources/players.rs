use reqwest::Method;

use crate::client::Client;
use crate::errors::Result;
use crate::models::{Player, PlayerCreateRequest};

const PLAYERS_PATH: &str = "/1/players";

/// Embeddable video players.
///
/// See <https://doc.platformcraft.ru/filespot/api/en/#players>.
pub struct PlayersApi<'a> {
    client: &'a Client,
}

impl<'a> PlayersApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, request: &PlayerCreateRequest) -> Result<Player> {
        let req = self
            .client
            .new_request(Method::POST, PLAYERS_PATH, Some(request))?;
        self.client.execute_field(req, "player").await
    }
}
