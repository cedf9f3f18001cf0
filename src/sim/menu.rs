//! Title menu rows and difficulty selection

use serde::{Deserialize, Serialize};

use super::state::DifficultyProfile;
use crate::settings::Settings;

/// Selectable difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Normal,
    /// Faster obstacles and a faster player
    Hell,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Normal => "NORMAL",
            Difficulty::Hell => "HELL",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hell" => Some(Difficulty::Hell),
            _ => None,
        }
    }

    /// Speeds for one episode at this level
    pub fn profile(&self, settings: &Settings) -> DifficultyProfile {
        let (obstacle_bonus, player_bonus) = match self {
            Difficulty::Easy => (2.5, 0.0),
            Difficulty::Normal => (5.0, 0.0),
            Difficulty::Hell => (11.0, 1.0),
        };
        DifficultyProfile {
            level: *self,
            obstacle_base_speed: settings.obstacle_base_speed + obstacle_bonus,
            player_horizontal_speed: settings.player_base_speed + player_bonus,
        }
    }
}

/// One row of the title menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuRow {
    Play(Difficulty),
    /// Blank gap above the exit row, never highlighted
    Spacer,
    Exit,
}

impl MenuRow {
    pub fn label(&self) -> &'static str {
        match self {
            MenuRow::Play(d) => d.as_str(),
            MenuRow::Spacer => "",
            MenuRow::Exit => "EXIT",
        }
    }

    fn selectable(&self) -> bool {
        !matches!(self, MenuRow::Spacer)
    }
}

/// Menu rows top to bottom
pub const MENU_ROWS: [MenuRow; 5] = [
    MenuRow::Play(Difficulty::Easy),
    MenuRow::Play(Difficulty::Normal),
    MenuRow::Play(Difficulty::Hell),
    MenuRow::Spacer,
    MenuRow::Exit,
];

/// Highlighted menu row; moves clamp at both ends and never wrap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuSelection {
    index: usize,
}

impl MenuSelection {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> MenuRow {
        MENU_ROWS[self.index]
    }

    pub fn move_down(&mut self) {
        if let Some(next) = (self.index + 1..MENU_ROWS.len()).find(|&i| MENU_ROWS[i].selectable()) {
            self.index = next;
        }
    }

    pub fn move_up(&mut self) {
        if let Some(prev) = (0..self.index).rev().find(|&i| MENU_ROWS[i].selectable()) {
            self.index = prev;
        }
    }

    /// Highlight the row for `difficulty`
    pub fn select(&mut self, difficulty: Difficulty) {
        if let Some(i) = MENU_ROWS.iter().position(|r| *r == MenuRow::Play(difficulty)) {
            self.index = i;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_clamps() {
        let mut menu = MenuSelection::default();
        menu.move_up();
        assert_eq!(menu.index(), 0);

        for _ in 0..10 {
            menu.move_down();
        }
        assert_eq!(menu.current(), MenuRow::Exit);
    }

    #[test]
    fn test_navigation_skips_spacer() {
        let mut menu = MenuSelection::default();
        menu.move_down();
        menu.move_down();
        assert_eq!(menu.current(), MenuRow::Play(Difficulty::Hell));
        menu.move_down();
        assert_eq!(menu.current(), MenuRow::Exit);
        menu.move_up();
        assert_eq!(menu.current(), MenuRow::Play(Difficulty::Hell));
    }

    #[test]
    fn test_profiles() {
        let settings = Settings::default();
        let easy = Difficulty::Easy.profile(&settings);
        assert_eq!(easy.obstacle_base_speed, 7.5);
        assert_eq!(easy.player_horizontal_speed, 2.5);

        let normal = Difficulty::Normal.profile(&settings);
        assert_eq!(normal.obstacle_base_speed, 10.0);

        let hell = Difficulty::Hell.profile(&settings);
        assert_eq!(hell.obstacle_base_speed, 16.0);
        assert_eq!(hell.player_horizontal_speed, 3.5);
        assert_eq!(hell.level, Difficulty::Hell);
    }

    #[test]
    fn test_select_and_parse() {
        let mut menu = MenuSelection::default();
        menu.select(Difficulty::from_str("Hell").unwrap());
        assert_eq!(menu.index(), 2);
        assert!(Difficulty::from_str("nightmare").is_none());
        assert_eq!(MENU_ROWS[3].label(), "");
    }
}
