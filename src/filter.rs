use crate::config::{MIN_RATING, SPEEDS};
use crate::types::RawGame;

/// Whether an exported game qualifies for the book dataset.
///
/// Every upstream filter is re-checked here: the export endpoint is asked for
/// rated Chess960 only, but its output is not trusted. Malformed tag values
/// (a non-numeric rating, say) make a game ineligible rather than failing the
/// run.
pub fn is_eligible(game: &RawGame) -> bool {
    if !game.header("Variant").eq_ignore_ascii_case("chess960") {
        return false;
    }

    if game.header("SetUp") != "1" || game.header("FEN").is_empty() {
        return false;
    }

    let speed = game.header("Speed");
    if !SPEEDS.iter().any(|s| s.eq_ignore_ascii_case(speed)) {
        return false;
    }

    let Ok(white) = game.header("WhiteElo").parse::<i32>() else {
        return false;
    };
    let Ok(black) = game.header("BlackElo").parse::<i32>() else {
        return false;
    };
    if white < MIN_RATING || black < MIN_RATING {
        return false;
    }

    matches!(game.header("Result"), "1-0" | "0-1" | "1/2-1/2")
}
