use glam::Vec2;

use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub segment_size: f32,
    pub snake_capacity: usize,
    pub initial_length: usize,
    pub initial_speed: f32,
    pub start_pos: Vec2,
    pub start_dir: Vec2,
    pub growth_per_apple: usize,
    pub speed_per_apple: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segment_size: Params::SEGMENT_SIZE,
            snake_capacity: Params::SNAKE_CAPACITY,
            initial_length: Params::INITIAL_LENGTH,
            initial_speed: Params::INITIAL_SPEED,
            start_pos: Vec2::new(Params::START_X, Params::START_Y),
            start_dir: Vec2::new(0.0, -1.0), // Up
            growth_per_apple: Params::GROWTH_PER_APPLE,
            speed_per_apple: Params::SPEED_PER_APPLE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Proximity threshold for head vs item checks
    pub fn hit_threshold(&self) -> f32 {
        self.segment_size
    }

    /// Initial length clamped into `1..=capacity`
    pub fn clamped_initial_length(&self) -> usize {
        self.initial_length.clamp(1, self.snake_capacity.max(1))
    }
}
