use std::collections::BTreeSet;

use crate::config::UiConfig;
use crate::game::{Coord, GameOutcome, Player};
use crate::session::GameEvent;

/// How a player's panel is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Normal,
    MyTurn,
    Win,
    Lose,
}

/// One side's panel: mood plus an optional speech bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerPanel {
    pub name: String,
    pub mood: Mood,
    pub speech: Option<String>,
}

/// Presentation state derived purely from [`GameEvent`]s.
#[derive(Debug, Clone)]
pub struct Presenter {
    panels: [PlayerPanel; 2],
    highlight: BTreeSet<Coord>,
    finished: bool,
    my_turn_text: String,
    win_text: String,
    tie_text: String,
}

impl Presenter {
    pub fn new(config: &UiConfig) -> Self {
        let panel = |name: &String| PlayerPanel {
            name: name.clone(),
            mood: Mood::Normal,
            speech: None,
        };
        let mut presenter = Presenter {
            panels: [panel(&config.player_names[0]), panel(&config.player_names[1])],
            highlight: BTreeSet::new(),
            finished: false,
            my_turn_text: config.my_turn_text.clone(),
            win_text: config.win_text.clone(),
            tie_text: config.tie_text.clone(),
        };
        presenter.hand_turn_to(Player::Red);
        presenter
    }

    pub fn panel(&self, player: Player) -> &PlayerPanel {
        &self.panels[player.index()]
    }

    /// Cells on a winning line; empty unless the game was won.
    pub fn highlight(&self) -> &BTreeSet<Coord> {
        &self.highlight
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Reset => {
                self.highlight.clear();
                self.finished = false;
                self.hand_turn_to(Player::Red);
            }
            GameEvent::MoveApplied(applied) => match applied.outcome() {
                None => self.hand_turn_to(applied.player.other()),
                Some(GameOutcome::Winner(winner)) => {
                    self.finished = true;
                    self.highlight = applied.win_paths.iter().flatten().copied().collect();
                    self.set(winner, Mood::Win, Some(self.win_text.clone()));
                    self.set(winner.other(), Mood::Lose, None);
                }
                Some(GameOutcome::Tie) => {
                    self.finished = true;
                    self.highlight.clear();
                    let tie = self.tie_text.clone();
                    self.set(Player::Red, Mood::Win, Some(tie.clone()));
                    self.set(Player::Yellow, Mood::Win, Some(tie));
                }
            },
        }
    }

    fn hand_turn_to(&mut self, player: Player) {
        self.set(player, Mood::MyTurn, Some(self.my_turn_text.clone()));
        self.set(player.other(), Mood::Normal, None);
    }

    fn set(&mut self, player: Player, mood: Mood, speech: Option<String>) {
        let panel = &mut self.panels[player.index()];
        panel.mood = mood;
        panel.speech = speech;
    }
}
