//! Input adapter: raw key events in, game intents out
//!
//! Key events arrive whenever the platform delivers them. They only touch
//! the held-key set and a queue of one-shot intents; the simulation reads
//! both once per tick through `take_tick_input`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sim::{Intent, TickInput};

/// What a bound key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    LaunchOrPause,
    Restart,
}

/// Key names per action, compared after `normalize_key`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub action: Vec<String>,
    pub restart: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        Self {
            left: keys(&["arrowleft", "a"]),
            right: keys(&["arrowright", "d"]),
            action: keys(&["space"]),
            restart: keys(&["r"]),
        }
    }
}

impl KeyBindings {
    /// Action bound to `key`, if any; left wins if a key is bound twice
    pub fn action_for(&self, key: &str) -> Option<Action> {
        let key = normalize_key(key);
        let bound = |names: &[String]| names.iter().any(|n| normalize_key(n) == key);
        if bound(&self.left) {
            Some(Action::MoveLeft)
        } else if bound(&self.right) {
            Some(Action::MoveRight)
        } else if bound(&self.action) {
            Some(Action::LaunchOrPause)
        } else if bound(&self.restart) {
            Some(Action::Restart)
        } else {
            None
        }
    }
}

/// Lowercase key name, with the browser's spellings of space folded together
pub fn normalize_key(key: &str) -> String {
    match key {
        " " | "Spacebar" | "Space" => "space".to_string(),
        _ => key.to_lowercase(),
    }
}

/// Tracks held keys and queues edge-triggered intents between ticks
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    bindings: KeyBindings,
    held: HashSet<String>,
    pending: Vec<Intent>,
}

impl InputAdapter {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
            pending: Vec::new(),
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Record a key press
    ///
    /// Returns true if the key is bound, so the platform layer can suppress
    /// its default behavior (page scroll on space, for instance). Auto-repeat
    /// presses of a key already held don't queue another intent.
    pub fn key_down(&mut self, key: &str) -> bool {
        let name = normalize_key(key);
        let action = self.bindings.action_for(&name);
        let fresh = self.held.insert(name);

        match action {
            Some(Action::LaunchOrPause) if fresh => self.pending.push(Intent::LaunchOrPause),
            Some(Action::Restart) if fresh => self.pending.push(Intent::Restart),
            _ => {}
        }
        action.is_some()
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(&normalize_key(key));
    }

    /// Forget held keys (focus lost: key-up events won't arrive)
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Queue an intent directly (touch buttons, auto-pause)
    pub fn push_intent(&mut self, intent: Intent) {
        self.pending.push(intent);
    }

    fn held_action(&self, action: Action) -> bool {
        self.held
            .iter()
            .any(|k| self.bindings.action_for(k) == Some(action))
    }

    /// Snapshot held directions and drain queued intents for the next tick
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            left: self.held_action(Action::MoveLeft),
            right: self.held_action(Action::MoveRight),
            intents: std::mem::take(&mut self.pending),
        }
    }
}
