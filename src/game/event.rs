//! Frame events
//!
//! The simulation never touches audio or IO directly. Instead it sends
//! events that the outer loop drains after each tick: sound playback,
//! status logging, and anything else that should stay out of the
//! per-entity update code.

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all game events.
/// Add new event types as fields here.
#[derive(Debug)]
pub struct Events {
    /// Player left the ground via a jump
    pub jumped: EventQueue<JumpedEvent>,

    /// Player fired a projectile
    pub fired: EventQueue<FiredEvent>,

    /// Player picked up a coin
    pub coin_collected: EventQueue<CoinCollectedEvent>,

    /// Player landed on an enemy and destroyed it
    pub enemy_stomped: EventQueue<EnemyStompedEvent>,

    /// An enemy caught the player; player was reset to spawn
    pub player_hurt: EventQueue<PlayerHurtEvent>,

    /// Player crossed a level-end threshold
    pub level_advanced: EventQueue<LevelAdvancedEvent>,

    /// The last level was completed
    pub game_won: EventQueue<GameWonEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self {
            jumped: EventQueue::new(),
            fired: EventQueue::new(),
            coin_collected: EventQueue::new(),
            enemy_stomped: EventQueue::new(),
            player_hurt: EventQueue::new(),
            level_advanced: EventQueue::new(),
            game_won: EventQueue::new(),
        }
    }

    /// Clear all event queues. Call at end of frame.
    pub fn clear_all(&mut self) {
        self.jumped.clear();
        self.fired.clear();
        self.coin_collected.clear();
        self.enemy_stomped.clear();
        self.player_hurt.clear();
        self.level_advanced.clear();
        self.game_won.clear();
    }
}

impl Default for Events {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Event Types
// =============================================================================

use super::entities::ProjectileKind;

#[derive(Debug, Clone, Copy)]
pub struct JumpedEvent;

/// A projectile was fired
#[derive(Debug, Clone, Copy)]
pub struct FiredEvent {
    /// Which of the two alternating shot types this was
    pub kind: ProjectileKind,
}

/// A coin was collected
#[derive(Debug, Clone, Copy)]
pub struct CoinCollectedEvent {
    /// Player coin total after the pickup
    pub total: u32,
}

/// An enemy was stomped from above
#[derive(Debug, Clone, Copy)]
pub struct EnemyStompedEvent {
    /// Where the enemy was when it died
    pub x: f32,
    pub y: f32,
}

/// The player was caught by an enemy
#[derive(Debug, Clone, Copy)]
pub struct PlayerHurtEvent {
    /// Coins actually lost (may be less than the penalty near zero)
    pub coins_lost: u32,
}

/// A new level was entered
#[derive(Debug, Clone, Copy)]
pub struct LevelAdvancedEvent {
    pub level: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct GameWonEvent;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_queue() {
        let mut queue: EventQueue<i32> = EventQueue::new();

        queue.send(1);
        queue.send(2);
        queue.send(3);

        assert_eq!(queue.len(), 3);

        let collected: Vec<_> = queue.drain().collect();
        assert_eq!(collected, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_events_container() {
        let mut events = Events::new();

        events.coin_collected.send(CoinCollectedEvent { total: 1 });
        events.jumped.send(JumpedEvent);

        assert_eq!(events.coin_collected.len(), 1);
        assert!(!events.jumped.is_empty());

        events.clear_all();
        assert!(events.coin_collected.is_empty());
        assert!(events.jumped.is_empty());
    }
}
