//! Static game identity tables for the 29 supported titles.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[serde(rename_all = "lowercase")]
pub enum GameId {
    Hrtp,
    Soew,
    Podd,
    Lls,
    Ms,
    Eosd,
    Pcb,
    In,
    Pofv,
    Mof,
    Sa,
    Ufo,
    Td,
    Ddc,
    Lolk,
    Hsifs,
    Wbawc,
    Um,
    Iamp,
    Swr,
    Soku,
    Hm,
    Ulil,
    Aocf,
    Stb,
    Ds,
    Gfw,
    Isc,
    Vd,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameCategory {
    MainSeries,
    Fighting,
    Other,
}

impl GameCategory {
    pub fn title(&self) -> &'static str {
        match self {
            GameCategory::MainSeries => "Main Games",
            GameCategory::Fighting => "Fighting Games",
            GameCategory::Other => "Other Games",
        }
    }
}

pub const ALL_GAMES: [GameId; 29] = [
    GameId::Hrtp,
    GameId::Soew,
    GameId::Podd,
    GameId::Lls,
    GameId::Ms,
    GameId::Eosd,
    GameId::Pcb,
    GameId::In,
    GameId::Pofv,
    GameId::Mof,
    GameId::Sa,
    GameId::Ufo,
    GameId::Td,
    GameId::Ddc,
    GameId::Lolk,
    GameId::Hsifs,
    GameId::Wbawc,
    GameId::Um,
    GameId::Iamp,
    GameId::Swr,
    GameId::Soku,
    GameId::Hm,
    GameId::Ulil,
    GameId::Aocf,
    GameId::Stb,
    GameId::Ds,
    GameId::Gfw,
    GameId::Isc,
    GameId::Vd,
];

impl GameId {
    /// Short name used by thcrap profiles and external tooling.
    pub fn thcrap_name(&self) -> &'static str {
        match self {
            GameId::Hrtp => "th01",
            GameId::Soew => "th02",
            GameId::Podd => "th03",
            GameId::Lls => "th04",
            GameId::Ms => "th05",
            GameId::Eosd => "th06",
            GameId::Pcb => "th07",
            GameId::In => "th08",
            GameId::Pofv => "th09",
            GameId::Mof => "th10",
            GameId::Sa => "th11",
            GameId::Ufo => "th12",
            GameId::Td => "th13",
            GameId::Ddc => "th14",
            GameId::Lolk => "th15",
            GameId::Hsifs => "th16",
            GameId::Wbawc => "th17",
            GameId::Um => "th18",
            GameId::Iamp => "th75",
            GameId::Swr => "th105",
            GameId::Soku => "th123",
            GameId::Hm => "th135",
            GameId::Ulil => "th145",
            GameId::Aocf => "th155",
            GameId::Stb => "th95",
            GameId::Ds => "th125",
            GameId::Gfw => "th128",
            GameId::Isc => "th143",
            GameId::Vd => "th165",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GameId::Hrtp => "Highly Responsive to Prayers",
            GameId::Soew => "Story of Eastern Wonderland",
            GameId::Podd => "Phantasmagoria of Dim. Dream",
            GameId::Lls => "Lotus Land Story",
            GameId::Ms => "Mystic Square",
            GameId::Eosd => "Embodiment of Scarlet Devil",
            GameId::Pcb => "Perfect Cherry Blossom",
            GameId::In => "Imperishable Night",
            GameId::Pofv => "Phantasmagoria of Flower View",
            GameId::Mof => "Mountain of Faith",
            GameId::Sa => "Subterranean Animism",
            GameId::Ufo => "Undefined Fantastic Object",
            GameId::Td => "Ten Desires",
            GameId::Ddc => "Double Dealing Character",
            GameId::Lolk => "Legacy of Lunatic Kingdom",
            GameId::Hsifs => "Hidden Star in Four Seasons",
            GameId::Wbawc => "Wily Beast and Weakest Creature",
            GameId::Um => "Unconnected Marketeers",
            GameId::Iamp => "Immaterial and Missing Power",
            GameId::Swr => "Scarlet Weather Rhapsody",
            GameId::Soku => "Hisotensoku",
            GameId::Hm => "Hopeless Masquerade",
            GameId::Ulil => "Urban Legend in Limbo",
            GameId::Aocf => "Antinomy of Common Flowers",
            GameId::Stb => "Shoot the Bullet",
            GameId::Ds => "Double Spoiler",
            GameId::Gfw => "Great Fairy Wars",
            GameId::Isc => "Impossible Spell Card",
            GameId::Vd => "Violet Detector",
        }
    }

    pub fn short_title(&self) -> &'static str {
        match self {
            GameId::Hrtp => "HRtP",
            GameId::Soew => "SoEW",
            GameId::Podd => "PoDD",
            GameId::Lls => "LLS",
            GameId::Ms => "MS",
            GameId::Eosd => "EoSD",
            GameId::Pcb => "PCB",
            GameId::In => "IN",
            GameId::Pofv => "PoFV",
            GameId::Mof => "MoF",
            GameId::Sa => "SA",
            GameId::Ufo => "UFO",
            GameId::Td => "TD",
            GameId::Ddc => "DDC",
            GameId::Lolk => "LoLK",
            GameId::Hsifs => "HSiFS",
            GameId::Wbawc => "WBaWC",
            GameId::Um => "UM",
            GameId::Iamp => "IaMP",
            GameId::Swr => "SWR",
            GameId::Soku => "Hisotensoku",
            GameId::Hm => "HM",
            GameId::Ulil => "ULiL",
            GameId::Aocf => "AoCF",
            GameId::Stb => "StB",
            GameId::Ds => "DS",
            GameId::Gfw => "GFW",
            GameId::Isc => "ISC",
            GameId::Vd => "VD",
        }
    }

    pub fn category(&self) -> GameCategory {
        match self {
            GameId::Hrtp
            | GameId::Soew
            | GameId::Podd
            | GameId::Lls
            | GameId::Ms
            | GameId::Eosd
            | GameId::Pcb
            | GameId::In
            | GameId::Pofv
            | GameId::Mof
            | GameId::Sa
            | GameId::Ufo
            | GameId::Td
            | GameId::Ddc
            | GameId::Lolk
            | GameId::Hsifs
            | GameId::Wbawc
            | GameId::Um => GameCategory::MainSeries,
            GameId::Iamp
            | GameId::Swr
            | GameId::Soku
            | GameId::Hm
            | GameId::Ulil
            | GameId::Aocf => GameCategory::Fighting,
            GameId::Stb | GameId::Ds | GameId::Gfw | GameId::Isc | GameId::Vd => {
                GameCategory::Other
            }
        }
    }

    /// The first five titles ran on PC-98 hardware and go through the
    /// Neko Project emulator instead of Wine directly.
    pub fn is_pc98(&self) -> bool {
        matches!(
            self,
            GameId::Hrtp | GameId::Soew | GameId::Podd | GameId::Lls | GameId::Ms
        )
    }
}

/// Games of one category, in series order.
pub fn games_in_category(category: GameCategory) -> Vec<GameId> {
    ALL_GAMES
        .iter()
        .copied()
        .filter(|g| g.category() == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ── identity tables ─────────────────────────────────────────

    #[test]
    fn pc98_set_is_exactly_first_five() {
        let pc98: Vec<GameId> = ALL_GAMES.iter().copied().filter(|g| g.is_pc98()).collect();
        assert_eq!(
            pc98,
            vec![GameId::Hrtp, GameId::Soew, GameId::Podd, GameId::Lls, GameId::Ms]
        );
    }

    #[test]
    fn all_pc98_games_are_main_series() {
        for game in ALL_GAMES.iter().filter(|g| g.is_pc98()) {
            assert_eq!(game.category(), GameCategory::MainSeries);
        }
    }

    #[test]
    fn categories_partition_all_games() {
        let main = games_in_category(GameCategory::MainSeries).len();
        let fighting = games_in_category(GameCategory::Fighting).len();
        let other = games_in_category(GameCategory::Other).len();
        assert_eq!(main, 18);
        assert_eq!(fighting, 6);
        assert_eq!(other, 5);
        assert_eq!(main + fighting + other, ALL_GAMES.len());
    }

    #[test]
    fn thcrap_names_are_unique() {
        let names: HashSet<&str> = ALL_GAMES.iter().map(|g| g.thcrap_name()).collect();
        assert_eq!(names.len(), ALL_GAMES.len());
    }

    #[test]
    fn game_id_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&GameId::Eosd).unwrap(), "\"eosd\"");
        assert_eq!(serde_json::to_string(&GameId::In).unwrap(), "\"in\"");
        let parsed: GameId = serde_json::from_str("\"soku\"").unwrap();
        assert_eq!(parsed, GameId::Soku);
    }
}
