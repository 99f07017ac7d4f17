/// Pure game-logic functions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::entities::{
    Collectible, Direction, Enemy, GameEvent, GameState, GameStatus, Rect, SpawnSlots, Wall,
};

// ── Fixed geometry ───────────────────────────────────────────────────────────

/// Logical window size.  Rendering scales this space to the real terminal.
pub const WINDOW_W: i32 = 400;
pub const WINDOW_H: i32 = 400;

/// Height of the top and bottom boundary bars.
pub const BAR_H: i32 = 20;

/// Player, enemies, walls and coins are all the same square size.
pub const ENTITY_SIZE: i32 = 20;

/// Units the player moves per key press.
pub const MOVE_STEP: i32 = 5;

const ENEMY_SPEED: i32 = 1;

/// Random horizontal spawn positions fall in `0..SPAWN_X_MAX`.
const SPAWN_X_MAX: i32 = 300;

// First vertical slot and step per entity kind.  Steps differ so walls
// spread out twice as far as enemies and coins.
const ENEMY_SLOT_START: i32 = 50;
const ENEMY_SLOT_STEP: i32 = 25;
const COIN_SLOT_START: i32 = 75;
const COIN_SLOT_STEP: i32 = 25;
const WALL_SLOT_START: i32 = 100;
const WALL_SLOT_STEP: i32 = 50;

// ── Collision ────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle overlap, strict on both axes: rectangles whose
/// edges exactly meet do not overlap, and a zero-width or zero-height
/// rectangle never overlaps anything.  Symmetric, no side effects.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x.max(b.x) < (a.x + a.w).min(b.x + b.w) && a.y.max(b.y) < (a.y + a.h).min(b.y + b.h)
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state: boundary bars, the player at its start
/// position, and the startup batch of enemies, walls and one coin.
pub fn init_state(rng: &mut impl Rng) -> GameState {
    let mut state = GameState {
        player: Rect::new(0, 0, ENTITY_SIZE, ENTITY_SIZE),
        enemies: Vec::new(),
        walls: Vec::new(),
        collectibles: Vec::new(),
        top_bar: Rect::new(0, 0, WINDOW_W, BAR_H),
        bottom_bar: Rect::new(0, WINDOW_H - BAR_H, WINDOW_W, BAR_H),
        slots: SpawnSlots {
            enemy_y: ENEMY_SLOT_START,
            wall_y: WALL_SLOT_START,
            coin_y: COIN_SLOT_START,
        },
        coins: 0,
        events: Vec::new(),
        status: GameStatus::Running,
    };

    // Startup batch: enemies and walls interleave so each kind's slot
    // counter spreads its members down the window.
    state = add_enemy(&state, rng);
    state = add_enemy(&state, rng);
    state = add_wall(&state, rng);
    state = add_wall(&state, rng);
    state = add_collectible(&state, rng);
    state = add_enemy(&state, rng);
    state = add_enemy(&state, rng);
    state = add_wall(&state, rng);
    state = add_wall(&state, rng);

    reset_player_position(&state)
}

// ── Spawning ─────────────────────────────────────────────────────────────────

/// Append one enemy at the next enemy slot: random horizontal start,
/// random patrol direction, fixed speed.
pub fn add_enemy(state: &GameState, rng: &mut impl Rng) -> GameState {
    let rect = Rect::new(
        rng.gen_range(0..SPAWN_X_MAX),
        state.slots.enemy_y,
        ENTITY_SIZE,
        ENTITY_SIZE,
    );
    let dir = if rng.gen_bool(0.5) {
        Direction::Right
    } else {
        Direction::Left
    };

    let mut enemies = state.enemies.clone();
    enemies.push(Enemy { rect, speed: ENEMY_SPEED, dir });
    GameState {
        enemies,
        slots: SpawnSlots {
            enemy_y: state.slots.enemy_y + ENEMY_SLOT_STEP,
            ..state.slots
        },
        ..state.clone()
    }
}

/// Append one wall at the next wall slot, random horizontal start.
pub fn add_wall(state: &GameState, rng: &mut impl Rng) -> GameState {
    let rect = Rect::new(
        rng.gen_range(0..SPAWN_X_MAX),
        state.slots.wall_y,
        ENTITY_SIZE,
        ENTITY_SIZE,
    );

    let mut walls = state.walls.clone();
    walls.push(Wall { rect });
    GameState {
        walls,
        slots: SpawnSlots {
            wall_y: state.slots.wall_y + WALL_SLOT_STEP,
            ..state.slots
        },
        ..state.clone()
    }
}

/// Append one collectible at the next coin slot, random horizontal start.
pub fn add_collectible(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut collectibles = state.collectibles.clone();
    collectibles.push(spawn_coin_at(state.slots.coin_y, rng));
    GameState {
        collectibles,
        slots: SpawnSlots {
            coin_y: state.slots.coin_y + COIN_SLOT_STEP,
            ..state.slots
        },
        ..state.clone()
    }
}

fn spawn_coin_at(y: i32, rng: &mut impl Rng) -> Collectible {
    Collectible {
        rect: Rect::new(rng.gen_range(0..SPAWN_X_MAX), y, ENTITY_SIZE, ENTITY_SIZE),
    }
}

// ── Player reset ─────────────────────────────────────────────────────────────

/// The canonical start rectangle: horizontally centred, resting just above
/// the bottom bar.
fn start_rect(state: &GameState) -> Rect {
    Rect::new(
        WINDOW_W / 2 - state.player.w / 2,
        WINDOW_H - state.bottom_bar.h,
        state.player.w,
        state.player.h,
    )
}

/// Recentre the player at the canonical start position.  Called after a
/// death, after a win, and after leaving through the bottom bound.
pub fn reset_player_position(state: &GameState) -> GameState {
    GameState {
        player: start_rect(state),
        ..state.clone()
    }
}

// ── Input-driven state transitions (pure) ────────────────────────────────────
//
// Moves apply unconditionally: there is no clamp against the side bounds,
// and leaving through the bottom is corrected by the next tick.

pub fn move_player_left(state: &GameState) -> GameState {
    GameState {
        player: Rect {
            x: state.player.x - MOVE_STEP,
            ..state.player
        },
        ..state.clone()
    }
}

pub fn move_player_right(state: &GameState) -> GameState {
    GameState {
        player: Rect {
            x: state.player.x + MOVE_STEP,
            ..state.player
        },
        ..state.clone()
    }
}

pub fn move_player_up(state: &GameState) -> GameState {
    GameState {
        player: Rect {
            y: state.player.y - MOVE_STEP,
            ..state.player
        },
        ..state.clone()
    }
}

pub fn move_player_down(state: &GameState) -> GameState {
    GameState {
        player: Rect {
            y: state.player.y + MOVE_STEP,
            ..state.player
        },
        ..state.clone()
    }
}

// ── Per-tick simulation step (nearly pure — RNG is injected) ─────────────────

/// Advance the simulation by one tick.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// The returned state's `events` holds exactly the signals this tick raised.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut events: Vec<GameEvent> = Vec::new();

    // ── 1. Advance enemy patrols (wrap-around, never bounce) ────────────────
    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .map(|e| {
            let mut rect = e.rect;
            match e.dir {
                Direction::Right => {
                    rect.x += e.speed;
                    if rect.x >= WINDOW_W {
                        rect.x = 0;
                    }
                }
                Direction::Left => {
                    rect.x -= e.speed;
                    if rect.x + rect.w <= 0 {
                        rect.x = WINDOW_W - rect.w;
                    }
                }
            }
            Enemy { rect, ..e.clone() }
        })
        .collect();

    let mut player = state.player;
    let mut collectibles = state.collectibles.clone();
    let mut slots = state.slots;
    let mut coins = state.coins;

    // ── 2. Enemy contact: reset to start, keep playing ──────────────────────
    if enemies.iter().any(|e| overlaps(&e.rect, &player)) {
        player = start_rect(state);
        events.push(GameEvent::Died);
    }

    // ── 3. Coin pickup: the registry is cleared and exactly one fresh coin
    //      spawns at the advancing coin slot ──────────────────────────────────
    if collectibles.iter().any(|c| overlaps(&c.rect, &player)) {
        collectibles.clear();
        collectibles.push(spawn_coin_at(slots.coin_y, rng));
        slots.coin_y += COIN_SLOT_STEP;
        coins += 1;
        events.push(GameEvent::Coin);
    }

    // ── 4. Wall touch is reported but never corrected ───────────────────────
    if state.walls.iter().any(|w| overlaps(&w.rect, &player)) {
        events.push(GameEvent::WallTouched);
    }

    // ── 5. Boundary bars: top wins, bottom bounces back silently ────────────
    if player.y < state.top_bar.y + state.top_bar.h {
        player = start_rect(state);
        events.push(GameEvent::Won);
    }
    if player.y > state.bottom_bar.y + state.bottom_bar.h {
        player = start_rect(state);
    }

    GameState {
        player,
        enemies,
        collectibles,
        slots,
        coins,
        events,
        ..state.clone()
    }
}
