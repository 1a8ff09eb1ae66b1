/// Lowest rating either player may have for a game to count.
pub const MIN_RATING: i32 = 2375;

/// Stored games are cut down to this many plies.
pub const MAX_PLIES: usize = 24;

/// Per-account cap passed to the export request.
pub const MAX_GAMES_PER_BOT: u32 = 5000;

/// A starting position needs at least this many distinct games to make the
/// final dataset.
pub const MIN_FEN_GAMES: usize = 3;

/// Accepted values of the `Speed` tag, compared case-insensitively.
pub const SPEEDS: [&str; 6] = [
    "blitz",
    "rapid",
    "classical",
    "bullet",
    "ultraBullet",
    "correspondence",
];

pub const API_BASE: &str = "https://lichess.org";

pub const MASTER_PGN: &str = "master_chess960_book.pgn";

/// Bot accounts whose Chess960 histories feed the book, in processing order.
/// Order matters: the first occurrence of a duplicated line is the one kept.
pub const BOTS: [&str; 20] = [
    "SoggiestShrimp",
    "AttackKing_Bot",
    "PositionalAI",
    "mayhem23111",
    "InvinxibleFlxsh",
    "YoBot_v2",
    "VEER-OMEGA-BOT",
    "MaggiChess16",
    "NimsiluBot",
    "pangubot",
    "Loss-Not-Defined",
    "Alexnajax_Fan",
    "strain-on-veins",
    "BOTTYBADDY11",
    "ChampionKitten",
    "LeelaMultiPoss",
    "ToromBot",
    "NNUE_Drift",
    "Strain-On-Veins",
    "Yuki_1324",
];
