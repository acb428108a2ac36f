use hecs::World;

use crate::resources::*;
use crate::systems::{head_touches, respawn_items};
use crate::{Board, Config, ItemKind, Snake};

/// Eat the apple when the snake head is near it.
///
/// Grows and speeds up the snake, moves both the apple and the obstacle,
/// and bumps the score. Returns true when an apple was eaten.
pub fn check_apple(
    world: &mut World,
    board: &Board,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> bool {
    if !head_touches(world, ItemKind::Apple, config.hit_threshold()) {
        return false;
    }

    for (_entity, snake) in world.query_mut::<&mut Snake>() {
        snake.grow(config.growth_per_apple);
        snake.speed += config.speed_per_apple;
    }

    respawn_items(
        world,
        &[ItemKind::Apple, ItemKind::Obstacle],
        board,
        config.segment_size,
        rng,
    );

    score.increment();
    log::debug!("Apple eaten, score {}", score.apples);
    events.push(GameEvent::AppleEaten {
        score: score.apples,
    });
    true
}
