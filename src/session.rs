//! A long-lived game session that broadcasts state changes to subscribers.

use std::sync::mpsc;

use tracing::{debug, trace};

use crate::game::{GameState, MoveApplied};

/// Notifications sent from the session to presentation layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    MoveApplied(MoveApplied),
    Reset,
}

/// Owns the single [`GameState`] and fans out [`GameEvent`]s.
pub struct Session {
    state: GameState,
    subscribers: Vec<mpsc::Sender<GameEvent>>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            state: GameState::initial(),
            subscribers: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Register a new listener. Dropping the receiver unsubscribes it.
    pub fn subscribe(&mut self) -> mpsc::Receiver<GameEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Forward a move request to the game. Only accepted moves are broadcast.
    pub fn attempt_move(&mut self, column: usize) -> Option<MoveApplied> {
        let applied = self.state.attempt_move(column)?;
        self.emit(GameEvent::MoveApplied(applied.clone()));
        Some(applied)
    }

    /// Start a fresh game. Always broadcasts [`GameEvent::Reset`].
    pub fn reset(&mut self) {
        self.state.reset();
        self.emit(GameEvent::Reset);
    }

    fn emit(&mut self, event: GameEvent) {
        trace!(?event, "broadcasting");
        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            debug!(dropped, "pruned closed subscribers");
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_accepted_move_is_broadcast() {
        let mut session = Session::new();
        let rx = session.subscribe();

        session.attempt_move(2);

        match rx.try_recv().unwrap() {
            GameEvent::MoveApplied(applied) => {
                assert_eq!(applied.column, 2);
                assert_eq!(applied.row, 5);
                assert_eq!(applied.player, Player::Red);
                assert!(!applied.game_over);
            }
            other => panic!("unexpected event {other:?}"),
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_ignored_move_is_silent() {
        let mut session = Session::new();
        let rx = session.subscribe();

        assert_eq!(session.attempt_move(9), None);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_reset_is_broadcast_to_all() {
        let mut session = Session::new();
        let a = session.subscribe();
        let b = session.subscribe();

        session.attempt_move(0);
        session.reset();

        assert!(matches!(a.try_recv(), Ok(GameEvent::MoveApplied(_))));
        assert_eq!(a.try_recv(), Ok(GameEvent::Reset));
        assert!(matches!(b.try_recv(), Ok(GameEvent::MoveApplied(_))));
        assert_eq!(b.try_recv(), Ok(GameEvent::Reset));
        assert_eq!(session.state().moves(), 0);
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut session = Session::new();
        let kept = session.subscribe();
        drop(session.subscribe());
        assert_eq!(session.subscriber_count(), 2);

        session.reset();

        assert_eq!(session.subscriber_count(), 1);
        assert_eq!(kept.try_recv(), Ok(GameEvent::Reset));
    }
}
