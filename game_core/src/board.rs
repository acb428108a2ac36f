use glam::Vec2;

use crate::params::Params;

/// Playfield dimensions, re-read from the window every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    pub width: f32,
    pub height: f32,
}

impl Board {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Wrap a position to the opposite edge once it leaves the board.
    ///
    /// The two axes use different upper triggers: x wraps at `x >= width`,
    /// y wraps at `y > height - segment_size`. Both lower edges wrap to
    /// `extent - segment_size`.
    pub fn wrap(&self, pos: Vec2, segment_size: f32) -> Vec2 {
        let mut wrapped = pos;

        if wrapped.x < 0.0 {
            wrapped.x = self.width - segment_size;
        } else if wrapped.x >= self.width {
            wrapped.x = 0.0;
        }

        if wrapped.y < 0.0 {
            wrapped.y = self.height - segment_size;
        } else if wrapped.y > self.height - segment_size {
            wrapped.y = 0.0;
        }

        wrapped
    }

    /// Exclusive upper bounds for item placement
    pub fn spawn_extent(&self, segment_size: f32) -> Vec2 {
        Vec2::new(self.width - segment_size, self.height - segment_size)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Params::BOARD_WIDTH, Params::BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEG: f32 = 30.0;

    #[test]
    fn test_wrap_inside_board_is_identity() {
        let board = Board::default();
        let pos = Vec2::new(400.0, 300.0);
        assert_eq!(board.wrap(pos, SEG), pos);
    }

    #[test]
    fn test_wrap_left_edge() {
        let board = Board::default();
        let wrapped = board.wrap(Vec2::new(-0.5, 100.0), SEG);
        assert_eq!(wrapped.x, board.width - SEG);
        assert_eq!(wrapped.y, 100.0);
    }

    #[test]
    fn test_wrap_right_edge_is_inclusive() {
        let board = Board::default();
        assert_eq!(board.wrap(Vec2::new(board.width, 100.0), SEG).x, 0.0);
        assert_eq!(
            board.wrap(Vec2::new(board.width - 0.5, 100.0), SEG).x,
            board.width - 0.5,
            "Just inside the right edge should not wrap"
        );
    }

    #[test]
    fn test_wrap_top_edge() {
        let board = Board::default();
        let wrapped = board.wrap(Vec2::new(100.0, -2.0), SEG);
        assert_eq!(wrapped.y, board.height - SEG);
    }

    #[test]
    fn test_wrap_bottom_edge_is_strict() {
        let board = Board::default();
        let limit = board.height - SEG;
        assert_eq!(
            board.wrap(Vec2::new(100.0, limit), SEG).y,
            limit,
            "Exactly at the bottom limit should not wrap"
        );
        assert_eq!(board.wrap(Vec2::new(100.0, limit + 0.5), SEG).y, 0.0);
    }

    #[test]
    fn test_spawn_extent() {
        let board = Board::new(800.0, 600.0);
        assert_eq!(board.spawn_extent(SEG), Vec2::new(770.0, 570.0));
    }
}
