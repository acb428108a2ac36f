pub mod board;
pub mod components;
pub mod config;
pub mod fsm;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use board::*;
pub use components::*;
pub use config::*;
pub use fsm::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one Playing tick of the Snake simulation.
///
/// Returns true when the snake hit the obstacle and the round is over.
pub fn step(
    world: &mut World,
    board: &Board,
    config: &Config,
    input: &FrameInput,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> bool {
    // 1. Steer from held arrows (anti-reverse)
    steer_snakes(world, input);

    // 2. Move, wrap, bite
    move_snakes(world, board, config);

    // 3. Apple first; a pickup also moves the obstacle
    check_apple(world, board, config, score, events, rng);

    // 4. Obstacle ends the round
    check_obstacle(world, config, events)
}

/// Helper to create the snake entity at the configured start
pub fn create_snake(world: &mut World, config: &Config) -> hecs::Entity {
    world.spawn((Snake::new(
        config.snake_capacity,
        config.start_pos,
        config.clamped_initial_length(),
        config.start_dir,
        config.initial_speed,
    ),))
}

/// Helper to create an apple or obstacle entity
pub fn create_item(world: &mut World, kind: ItemKind, pos: Vec2) -> hecs::Entity {
    world.spawn((Item::new(kind, pos),))
}
