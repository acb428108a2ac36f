/// Apples eaten in the current round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub apples: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.apples += 1;
    }

    pub fn reset(&mut self) {
        self.apples = 0;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform sample in `[0, upper)`, or 0 when the range is empty
    pub fn below(&mut self, upper: f32) -> f32 {
        use rand::Rng;
        if upper > 0.0 {
            self.0.gen_range(0.0..upper)
        } else {
            0.0
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Fire-and-forget audio cues the presentation layer knows how to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    GameOpening,
    CoinCollect,
    ObstacleHit,
    GameOver,
}

impl SoundCue {
    pub const ALL: [SoundCue; 4] = [
        SoundCue::GameOpening,
        SoundCue::CoinCollect,
        SoundCue::ObstacleHit,
        SoundCue::GameOver,
    ];

    /// Asset name of the cue
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::GameOpening => "game_opening",
            SoundCue::CoinCollect => "coin_collect",
            SoundCue::ObstacleHit => "obstacle_hit",
            SoundCue::GameOver => "game_over",
        }
    }
}

/// Something the presentation layer should react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    MenuEntered,
    RoundStarted,
    AppleEaten { score: u32 },
    ObstacleHit,
    GameOverEntered { score: u32 },
    QuitRequested,
}

impl GameEvent {
    pub fn sound_cue(self) -> Option<SoundCue> {
        match self {
            GameEvent::MenuEntered => Some(SoundCue::GameOpening),
            GameEvent::AppleEaten { .. } => Some(SoundCue::CoinCollect),
            GameEvent::ObstacleHit => Some(SoundCue::ObstacleHit),
            GameEvent::GameOverEntered { .. } => Some(SoundCue::GameOver),
            GameEvent::RoundStarted | GameEvent::QuitRequested => None,
        }
    }
}

/// Events produced since the presentation layer last drained them
#[derive(Debug, Clone, Default)]
pub struct Events {
    list: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.list.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn contains(&self, event: &GameEvent) -> bool {
        self.list.contains(event)
    }

    /// Take all pending events, oldest first
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.list)
    }
}

/// Keyboard state for one tick
///
/// Arrows are level-triggered (held); confirm and quit are edge-triggered
/// (pressed this frame).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub confirm: bool,
    pub quit: bool,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a newer poll into this one: held keys take the newer value,
    /// presses accumulate until consumed
    pub fn merge(&mut self, newer: FrameInput) {
        self.up = newer.up;
        self.down = newer.down;
        self.left = newer.left;
        self.right = newer.right;
        self.confirm |= newer.confirm;
        self.quit |= newer.quit;
    }

    /// Drop edge-triggered presses once a tick has seen them
    pub fn consume_presses(&mut self) {
        self.confirm = false;
        self.quit = false;
    }
}
