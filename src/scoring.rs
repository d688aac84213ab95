//! Golf-style labels for a finished game. Cosmetic only.

pub const DEFAULT_PAR: usize = 7;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScoreLabel {
    AlbatrossPlus,
    Eagle,
    DoubleBirdie,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TriplePlusBogey,
}

impl ScoreLabel {
    pub fn for_guesses(guess_count: usize, par: usize) -> Self {
        let diff = guess_count as i64 - par as i64;

        match diff {
            i64::MIN..=-4 => ScoreLabel::AlbatrossPlus,
            -3 => ScoreLabel::Eagle,
            -2 => ScoreLabel::DoubleBirdie,
            -1 => ScoreLabel::Birdie,
            0 => ScoreLabel::Par,
            1 => ScoreLabel::Bogey,
            2 => ScoreLabel::DoubleBogey,
            _ => ScoreLabel::TriplePlusBogey,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreLabel::AlbatrossPlus => "Albatross+",
            ScoreLabel::Eagle => "Eagle",
            ScoreLabel::DoubleBirdie => "Double Birdie",
            ScoreLabel::Birdie => "Birdie",
            ScoreLabel::Par => "Par",
            ScoreLabel::Bogey => "Bogey",
            ScoreLabel::DoubleBogey => "Double Bogey",
            ScoreLabel::TriplePlusBogey => "Triple+ Bogey",
        }
    }
}

pub fn score_message(guess_count: usize, par: usize) -> String {
    format!(
        "Solved in {} guesses ({})",
        guess_count,
        ScoreLabel::for_guesses(guess_count, par).as_str()
    )
}
