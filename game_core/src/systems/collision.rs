use crate::{Config, Events, GameEvent, Item, ItemKind, Snake};
use glam::Vec2;
use hecs::World;

/// Proximity test: both axis deltas strictly below `threshold`
pub fn near(head: Vec2, target: Vec2, threshold: f32) -> bool {
    (head.x - target.x).abs() < threshold && (head.y - target.y).abs() < threshold
}

/// Head position of the first snake in the world
pub fn snake_head(world: &World) -> Option<Vec2> {
    let mut snake_query = world.query::<&Snake>();
    let head = snake_query.iter().next().map(|(_e, snake)| snake.head());
    head
}

/// Whether the snake head is near any item of `kind`
pub fn head_touches(world: &World, kind: ItemKind, threshold: f32) -> bool {
    let Some(head) = snake_head(world) else {
        return false;
    };
    let mut item_query = world.query::<&Item>();
    let touched = item_query
        .iter()
        .any(|(_e, item)| item.kind == kind && near(head, item.pos, threshold));
    touched
}

/// Check the snake head against the obstacle.
///
/// Returns true when the round should end.
pub fn check_obstacle(world: &World, config: &Config, events: &mut Events) -> bool {
    if !head_touches(world, ItemKind::Obstacle, config.hit_threshold()) {
        return false;
    }
    events.push(GameEvent::ObstacleHit);
    true
}
