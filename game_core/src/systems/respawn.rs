use glam::Vec2;
use hecs::World;

use crate::{Board, GameRng, Item, ItemKind};

/// Random item position in `[0, width - size) x [0, height - size)`.
///
/// Occupied cells are not excluded; an item may land on the snake or on the
/// other item.
pub fn spawn_position(board: &Board, segment_size: f32, rng: &mut GameRng) -> Vec2 {
    let extent = board.spawn_extent(segment_size);
    let x = rng.below(extent.x);
    let y = rng.below(extent.y);
    Vec2::new(x, y)
}

/// Move one item to a fresh random position
pub fn respawn(item: &mut Item, board: &Board, segment_size: f32, rng: &mut GameRng) {
    item.pos = spawn_position(board, segment_size, rng);
}

/// Re-randomize every item of the given kinds, apples before obstacles
pub fn respawn_items(
    world: &mut World,
    kinds: &[ItemKind],
    board: &Board,
    segment_size: f32,
    rng: &mut GameRng,
) {
    for kind in kinds {
        // Deterministic: sort by entity ID so the rng is consumed in order
        let mut entities: Vec<_> = world
            .query::<&Item>()
            .iter()
            .filter(|(_e, item)| item.kind == *kind)
            .map(|(e, _)| e)
            .collect();
        entities.sort_by_key(|e| e.id());

        for entity in entities {
            if let Ok(mut item) = world.get::<&mut Item>(entity) {
                respawn(&mut item, board, segment_size, rng);
            }
        }
    }
}
