use smallvec::SmallVec;

/// Mainline SAN tokens in game order.
pub type SanLine = SmallVec<[String; 128]>;

fn lookup<'a>(headers: &'a [(String, String)], key: &str) -> &'a str {
    headers
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}

/// One game as exported: tag pairs verbatim in first-seen order, plus the
/// mainline moves. Variations, comments and NAGs are already stripped.
#[derive(Debug, Clone, Default)]
pub struct RawGame {
    pub headers: Vec<(String, String)>,
    pub moves: SanLine,
}

impl RawGame {
    /// Tag value lookup; absent tags read as empty.
    pub fn header(&self, key: &str) -> &str {
        lookup(&self.headers, key)
    }
}

/// The opening prefix of an accepted game: headers identical to the source
/// game (the `FEN` tag in particular), moves re-rendered in canonical SAN and
/// cut to at most `config::MAX_PLIES` plies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimmedGame {
    pub headers: Vec<(String, String)>,
    pub moves: SanLine,
}

impl TrimmedGame {
    pub fn header(&self, key: &str) -> &str {
        lookup(&self.headers, key)
    }
}
