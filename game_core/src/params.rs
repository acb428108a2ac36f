/// Game tuning parameters for Snake
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board (default window size; the live size comes from the client)
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 600.0;

    // Snake
    pub const SEGMENT_SIZE: f32 = 30.0; // Also the item proximity threshold
    pub const SNAKE_CAPACITY: usize = 128;
    pub const INITIAL_LENGTH: usize = 4;
    pub const INITIAL_SPEED: f32 = 2.0; // units per tick
    pub const START_X: f32 = 400.0;
    pub const START_Y: f32 = 300.0;

    // Apple pickup
    pub const GROWTH_PER_APPLE: usize = 2;
    pub const SPEED_PER_APPLE: f32 = 0.7;

    // Item sprites
    pub const APPLE_SIZE: f32 = 20.0;
    pub const OBSTACLE_SIZE: f32 = 40.0;

    // Timing
    pub const FIXED_DT: f32 = 1.0 / 60.0; // 60 Hz simulation
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large catch-up bursts
}
