/// All game entity types — pure data, no logic.

/// An axis-aligned rectangle in logical window units.
/// Invariant: `w` and `h` are never negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        debug_assert!(w >= 0 && h >= 0);
        Rect { x, y, w, h }
    }
}

/// An enemy's patrol heading.  Fixed for the enemy's whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
    pub speed: i32,
    pub dir: Direction,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Wall {
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Collectible {
    pub rect: Rect,
}

/// A signal raised by the simulation during one tick.  These replace the
/// reference behaviour of printing mid-frame: the loop never aborts on any
/// of them, the HUD just reports the latest one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// Player crossed the top bar.
    Won,
    /// Player touched an enemy.
    Died,
    /// Player picked up a collectible.
    Coin,
    /// Player overlapped a wall (no positional correction is applied).
    WallTouched,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Stopped,
}

/// Next vertical spawn slot per entity kind.  Each counter only ever
/// advances; this is the sole persistent spawn state besides the
/// registries themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnSlots {
    pub enemy_y: i32,
    pub wall_y: i32,
    pub coin_y: i32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
///
/// Registry insertion order is draw order and collision-check order.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Rect,
    pub enemies: Vec<Enemy>,
    pub walls: Vec<Wall>,
    pub collectibles: Vec<Collectible>,
    /// Crossing above this bar wins the game.
    pub top_bar: Rect,
    /// Falling below this bar bounces the player back to the start.
    pub bottom_bar: Rect,
    pub slots: SpawnSlots,
    /// Total collectibles picked up this session.
    pub coins: u32,
    /// Signals raised by the most recent tick, replaced wholesale each tick.
    pub events: Vec<GameEvent>,
    pub status: GameStatus,
}
