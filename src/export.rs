use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use crate::pipeline::{ExportStream, GameSource};
use crate::visitor::GameStream;

const PGN_MEDIA_TYPE: &str = "application/x-chess-pgn";
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Lichess game-export client.
///
/// One GET per account against `/api/games/user/{account}.pgn`, asking the
/// server for rated Chess960 with moves and opening tags. The response body
/// is decoded straight off the wire into a `GameStream`; a full export is
/// never buffered. No overall request timeout: exports of a busy bot can
/// legitimately take minutes to stream.
pub struct LichessExporter {
    client: Client,
    base_url: String,
    token: Option<String>,
    max_games: u32,
}

impl LichessExporter {
    pub fn new(base_url: &str, token: Option<String>, max_games: u32) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("chess960-book/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(None::<Duration>)
            .build()
            .context("building HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            max_games,
        })
    }
}

impl GameSource for LichessExporter {
    fn games(&self, account: &str) -> Result<ExportStream> {
        let url = format!("{}/api/games/user/{}.pgn", self.base_url, account);

        let mut request = self
            .client
            .get(&url)
            .query(&[
                ("max", self.max_games.to_string().as_str()),
                ("perfType", "chess960"),
                ("rated", "true"),
                ("moves", "true"),
                ("opening", "true"),
            ])
            .header(ACCEPT, PGN_MEDIA_TYPE);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("game export request for {account}"))?;

        Ok(GameStream::new(Box::new(response)))
    }
}
