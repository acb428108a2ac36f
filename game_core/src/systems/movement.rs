use crate::{Board, Config, Snake};
use glam::Vec2;
use hecs::World;

/// Advance one snake by a single tick.
///
/// Shifts every live segment one slot toward the tail, wraps the new head
/// around the board edges, and truncates the body at the first segment the
/// new head lands on exactly. Never increases the length.
pub fn advance(snake: &mut Snake, board: &Board, segment_size: f32) {
    let candidate = candidate_head(snake);
    let len = snake.len();

    // Shift in place; the old tail position is overwritten
    let body = snake.body_mut();
    for i in (1..len).rev() {
        body[i] = body[i - 1];
    }

    let new_head = board.wrap(candidate, segment_size);

    // Exact equality: positions move in whole multiples of speed each tick
    let bitten = snake
        .segments()
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, seg)| **seg == new_head)
        .map(|(i, _)| i);
    if let Some(i) = bitten {
        log::debug!("Snake bit itself at segment {}, length {} -> {}", i, len, i);
        snake.truncate(i);
    }

    snake.body_mut()[0] = new_head;
}

/// Apply snake movement for every snake in the world
pub fn move_snakes(world: &mut World, board: &Board, config: &Config) {
    for (_entity, snake) in world.query_mut::<&mut Snake>() {
        advance(snake, board, config.segment_size);
    }
}

/// Position the head would reach next tick, before wraparound
pub fn candidate_head(snake: &Snake) -> Vec2 {
    snake.head() + snake.dir * snake.speed
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEG: f32 = 30.0;

    fn up() -> Vec2 {
        Vec2::new(0.0, -1.0)
    }

    fn board() -> Board {
        Board::new(800.0, 600.0)
    }

    #[test]
    fn test_head_moves_by_direction_times_speed() {
        let segs = [
            Vec2::new(400.0, 300.0),
            Vec2::new(400.0, 302.0),
            Vec2::new(400.0, 304.0),
            Vec2::new(400.0, 306.0),
        ];
        let mut snake = Snake::from_segments(30, &segs, up(), 2.0);

        advance(&mut snake, &board(), SEG);

        assert_eq!(snake.head(), Vec2::new(400.0, 298.0));
        assert_eq!(&snake.segments()[1..], &segs[..3], "Body shifts one slot");
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_fractional_speed() {
        let mut snake = Snake::new(30, Vec2::new(100.0, 100.0), 1, Vec2::X, 2.5);
        advance(&mut snake, &board(), SEG);
        assert_eq!(snake.head(), Vec2::new(102.5, 100.0));
    }

    #[test]
    fn test_single_segment_snake_just_moves() {
        let mut snake = Snake::new(30, Vec2::new(100.0, 100.0), 1, Vec2::X, 2.0);
        advance(&mut snake, &board(), SEG);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Vec2::new(102.0, 100.0));
    }

    #[test]
    fn test_wraps_right_to_left() {
        let b = board();
        let mut snake = Snake::new(30, Vec2::new(b.width - 1.0, 200.0), 3, Vec2::X, 2.0);
        assert_eq!(candidate_head(&snake).x, b.width + 1.0);

        advance(&mut snake, &b, SEG);
        assert_eq!(snake.head().x, 0.0);
        assert_eq!(snake.head().y, 200.0);
    }

    #[test]
    fn test_wraps_left_to_right() {
        let b = board();
        let mut snake = Snake::new(30, Vec2::new(1.0, 200.0), 3, Vec2::NEG_X, 2.0);
        advance(&mut snake, &b, SEG);
        assert_eq!(snake.head().x, b.width - SEG);
    }

    #[test]
    fn test_wraps_top_to_bottom() {
        let b = board();
        let mut snake = Snake::new(30, Vec2::new(200.0, 1.0), 3, up(), 2.0);
        advance(&mut snake, &b, SEG);
        assert_eq!(snake.head().y, b.height - SEG);
    }

    #[test]
    fn test_wraps_bottom_to_top_past_segment_limit() {
        let b = board();
        let limit = b.height - SEG;
        let mut snake = Snake::new(30, Vec2::new(200.0, limit - 1.0), 3, Vec2::Y, 2.0);
        advance(&mut snake, &b, SEG);
        assert_eq!(snake.head().y, 0.0);
    }

    #[test]
    fn test_self_collision_truncates_at_first_match() {
        // Moving right from (100,100) lands on (102,100), which sits in
        // slot 2 before the shift and slot 3 after it.
        let segs = [
            Vec2::new(100.0, 100.0),
            Vec2::new(100.0, 102.0),
            Vec2::new(102.0, 100.0),
            Vec2::new(102.0, 102.0),
            Vec2::new(102.0, 100.0),
        ];
        let mut snake = Snake::from_segments(30, &segs, Vec2::X, 2.0);

        advance(&mut snake, &board(), SEG);

        assert_eq!(snake.len(), 3, "First match after the shift wins");
        assert_eq!(snake.head(), Vec2::new(102.0, 100.0));
        assert_eq!(snake.segments()[1], Vec2::new(100.0, 100.0));
        assert_eq!(snake.segments()[2], Vec2::new(100.0, 102.0));
    }

    #[test]
    fn test_old_tail_position_does_not_collide() {
        // The old tail is overwritten by the shift before the scan
        let segs = [
            Vec2::new(100.0, 100.0),
            Vec2::new(100.0, 98.0),
            Vec2::new(102.0, 100.0),
        ];
        let mut snake = Snake::from_segments(30, &segs, Vec2::X, 2.0);
        advance(&mut snake, &board(), SEG);
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_stale_slots_are_ignored() {
        let segs = [Vec2::new(100.0, 100.0), Vec2::new(98.0, 100.0)];
        let mut snake = Snake::from_segments(30, &segs, Vec2::X, 2.0);
        // Slot 2 and beyond are stale copies of the head
        snake.body_mut()[2] = Vec2::new(102.0, 100.0);

        advance(&mut snake, &board(), SEG);
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_length_never_increases() {
        let mut snake = Snake::new(30, Vec2::new(400.0, 300.0), 6, Vec2::X, 3.3);
        let b = board();
        let mut prev = snake.len();
        for _ in 0..2000 {
            advance(&mut snake, &b, SEG);
            assert!(snake.len() <= prev);
            prev = snake.len();
        }
    }

    #[test]
    fn test_move_snakes_system() {
        let mut world = World::new();
        let config = Config::new();
        let e = world.spawn((Snake::new(30, Vec2::new(400.0, 300.0), 4, up(), 2.0),));

        move_snakes(&mut world, &board(), &config);

        let snake = world.get::<&Snake>(e).unwrap();
        assert_eq!(snake.head(), Vec2::new(400.0, 298.0));
    }
}
