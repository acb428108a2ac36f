use glam::Vec2;

/// Snake component - fixed-capacity body buffer with a live length
///
/// The buffer is allocated once and never resized. Index 0 is the head.
/// Slots at or beyond `len` hold stale positions and must not be rendered
/// or tested.
#[derive(Debug, Clone)]
pub struct Snake {
    body: Box<[Vec2]>,
    len: usize,
    pub dir: Vec2,  // Components in {-1, 0, 1}, never both nonzero
    pub speed: f32, // Units per tick
}

impl Snake {
    /// Create a snake with every live segment stacked on `head`
    pub fn new(capacity: usize, head: Vec2, len: usize, dir: Vec2, speed: f32) -> Self {
        let capacity = capacity.max(1);
        Self {
            body: vec![head; capacity].into_boxed_slice(),
            len: len.clamp(1, capacity),
            dir,
            speed,
        }
    }

    /// Create a snake from explicit segment positions (head first)
    pub fn from_segments(capacity: usize, segments: &[Vec2], dir: Vec2, speed: f32) -> Self {
        let head = segments.first().copied().unwrap_or(Vec2::ZERO);
        let mut snake = Self::new(capacity, head, segments.len(), dir, speed);
        for (slot, pos) in snake.body.iter_mut().zip(segments) {
            *slot = *pos;
        }
        snake
    }

    pub fn head(&self) -> Vec2 {
        self.body[0]
    }

    pub fn tail(&self) -> Vec2 {
        self.body[self.len - 1]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Never true in practice: construction keeps at least one segment and
    /// truncation never drops the head
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.body.len()
    }

    /// Live segments, head first
    pub fn segments(&self) -> &[Vec2] {
        &self.body[..self.len]
    }

    pub(crate) fn body_mut(&mut self) -> &mut [Vec2] {
        &mut self.body
    }

    /// Cut the body down to `len` segments (never below the head)
    pub fn truncate(&mut self, len: usize) {
        self.len = len.clamp(1, self.len);
    }

    /// Lengthen by `amount`, clamped at capacity.
    /// New slots take the current tail position.
    pub fn grow(&mut self, amount: usize) {
        let tail = self.tail();
        let new_len = (self.len + amount).min(self.capacity());
        for slot in &mut self.body[self.len..new_len] {
            *slot = tail;
        }
        self.len = new_len;
    }

    /// Reset for a new round. Direction is kept.
    pub fn reset(&mut self, head: Vec2, len: usize, speed: f32) {
        let len = len.clamp(1, self.capacity());
        for slot in &mut self.body[..len] {
            *slot = head;
        }
        self.len = len;
        self.speed = speed;
    }
}

/// Kind of board item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Apple,
    Obstacle,
}

/// Item component - a single-point apple or obstacle
#[derive(Debug, Clone, Copy)]
pub struct Item {
    pub kind: ItemKind,
    pub pos: Vec2,
}

impl Item {
    pub fn new(kind: ItemKind, pos: Vec2) -> Self {
        Self { kind, pos }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn up() -> Vec2 {
        Vec2::new(0.0, -1.0)
    }

    #[test]
    fn test_new_snake_stacks_segments_on_head() {
        let snake = Snake::new(30, Vec2::new(400.0, 300.0), 4, up(), 2.0);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.capacity(), 30);
        assert!(snake
            .segments()
            .iter()
            .all(|s| *s == Vec2::new(400.0, 300.0)));
    }

    #[test]
    fn test_new_snake_length_is_clamped() {
        let snake = Snake::new(8, Vec2::ZERO, 20, up(), 2.0);
        assert_eq!(snake.len(), 8);

        let snake = Snake::new(8, Vec2::ZERO, 0, up(), 2.0);
        assert_eq!(snake.len(), 1, "Length never drops below the head");
        assert!(!snake.is_empty());

        let snake = Snake::new(0, Vec2::ZERO, 0, up(), 2.0);
        assert_eq!(snake.capacity(), 1);
        assert!(!snake.is_empty());
    }

    #[test]
    fn test_from_segments() {
        let segs = [Vec2::new(3.0, 0.0), Vec2::new(2.0, 0.0), Vec2::new(1.0, 0.0)];
        let snake = Snake::from_segments(10, &segs, Vec2::X, 1.0);
        assert_eq!(snake.segments(), &segs);
        assert_eq!(snake.head(), segs[0]);
        assert_eq!(snake.tail(), segs[2]);
    }

    #[test]
    fn test_grow_fills_with_tail_and_clamps() {
        let segs = [Vec2::new(3.0, 0.0), Vec2::new(2.0, 0.0)];
        let mut snake = Snake::from_segments(5, &segs, Vec2::X, 1.0);

        snake.grow(2);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.segments()[2], Vec2::new(2.0, 0.0));
        assert_eq!(snake.segments()[3], Vec2::new(2.0, 0.0));

        snake.grow(2);
        assert_eq!(snake.len(), 5, "Growth stops at capacity");
    }

    #[test]
    fn test_truncate_keeps_head() {
        let mut snake = Snake::new(10, Vec2::ZERO, 6, up(), 2.0);
        snake.truncate(3);
        assert_eq!(snake.len(), 3);
        snake.truncate(0);
        assert_eq!(snake.len(), 1);
        assert!(!snake.is_empty());
        snake.truncate(9);
        assert_eq!(snake.len(), 1, "Truncate never lengthens");
    }

    #[test]
    fn test_reset_keeps_direction() {
        let mut snake = Snake::new(10, Vec2::ZERO, 8, Vec2::X, 9.0);
        snake.reset(Vec2::new(400.0, 300.0), 4, 2.0);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.speed, 2.0);
        assert_eq!(snake.head(), Vec2::new(400.0, 300.0));
        assert_eq!(snake.dir, Vec2::X);
    }
}
