use glam::Vec2;
use hecs::World;

use crate::{FrameInput, Snake};

/// Pick the next direction from held arrows.
///
/// Keys are read in the order up, down, left, right. Each one is checked
/// against `current` (the direction at the start of the tick), so a key that
/// would reverse the snake is ignored. The last accepted key wins.
pub fn steer(current: Vec2, input: &FrameInput) -> Vec2 {
    let mut next = current;

    if input.up && current.y != 1.0 {
        next = Vec2::new(0.0, -1.0);
    }
    if input.down && current.y != -1.0 {
        next = Vec2::new(0.0, 1.0);
    }
    if input.left && current.x != 1.0 {
        next = Vec2::new(-1.0, 0.0);
    }
    if input.right && current.x != -1.0 {
        next = Vec2::new(1.0, 0.0);
    }

    next
}

/// Apply held arrows to every snake's direction
pub fn steer_snakes(world: &mut World, input: &FrameInput) {
    for (_entity, snake) in world.query_mut::<&mut Snake>() {
        snake.dir = steer(snake.dir, input);
    }
}
