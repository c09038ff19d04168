use serde::{Deserialize, Serialize};

/// Player-facing actions that can be bound to keys.
///
/// The movement actions are continuous (polled while held); `Quack` and
/// `ToggleViewMode` are one-shot and checked with `just_pressed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GameAction {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    Quack,
    ToggleViewMode,
}
