//! Local game session
//!
//! Owns the world and resources, drives the state machine, and runs the
//! simulation at a fixed tick rate. The presentation layer polls input,
//! calls [`Session::update`] once per rendered frame, then drains events.

use glam::Vec2;
use hecs::{Entity, World};

use crate::systems::respawn_items;
use crate::{
    create_item, create_snake, step, Board, Config, Events, FrameInput, FsmState, GameAction,
    GameEvent, GameFsm, GameRng, Item, ItemKind, Params, Score, Snake,
};

pub struct Session {
    pub world: World,
    pub board: Board,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    fsm: GameFsm,
    snake: Entity,
    accumulator: f32,
    pending: FrameInput,
}

impl Session {
    pub fn new(config: Config, board: Board, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let snake = create_snake(&mut world, &config);
        create_item(&mut world, ItemKind::Apple, Vec2::ZERO);
        create_item(&mut world, ItemKind::Obstacle, Vec2::ZERO);
        respawn_items(
            &mut world,
            &[ItemKind::Apple, ItemKind::Obstacle],
            &board,
            config.segment_size,
            &mut rng,
        );

        let mut events = Events::new();
        events.push(GameEvent::MenuEntered);

        Self {
            world,
            board,
            config,
            score: Score::new(),
            events,
            rng,
            fsm: GameFsm::new(),
            snake,
            accumulator: 0.0,
            pending: FrameInput::new(),
        }
    }

    pub fn state(&self) -> FsmState {
        self.fsm.state()
    }

    pub fn is_finished(&self) -> bool {
        self.fsm.is_exited()
    }

    /// Screen geometry is re-read from the window every frame
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Advance wall-clock time by `dt` seconds, running as many fixed ticks
    /// as have accumulated.
    pub fn update(&mut self, dt: f32, input: FrameInput) {
        self.pending.merge(input);
        self.accumulator += dt.clamp(0.0, Params::MAX_DT);

        while self.accumulator >= Params::FIXED_DT && !self.is_finished() {
            self.accumulator -= Params::FIXED_DT;
            let tick_input = self.pending;
            self.tick(&tick_input);
            self.pending.consume_presses();
        }
    }

    /// Run exactly one simulated frame in the current state
    pub fn tick(&mut self, input: &FrameInput) {
        match self.fsm.state() {
            FsmState::Menu => {
                if input.quit {
                    self.quit();
                } else if input.confirm {
                    self.start_round(GameAction::Start);
                }
            }
            FsmState::Playing => {
                let hit = step(
                    &mut self.world,
                    &self.board,
                    &self.config,
                    input,
                    &mut self.score,
                    &mut self.events,
                    &mut self.rng,
                );
                if hit && self.fsm.transition(GameAction::ObstacleHit).success {
                    log::info!("Game over with score {}", self.score.apples);
                    self.events.push(GameEvent::GameOverEntered {
                        score: self.score.apples,
                    });
                }
            }
            FsmState::GameOver => {
                if input.quit {
                    self.quit();
                } else if input.confirm {
                    self.start_round(GameAction::PlayAgain);
                }
            }
            FsmState::Exited => {}
        }
    }

    /// Take every event produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Live snake segments, head first
    pub fn snake_segments(&self) -> Vec<Vec2> {
        self.world
            .get::<&Snake>(self.snake)
            .map(|snake| snake.segments().to_vec())
            .unwrap_or_default()
    }

    /// Current position of the first item of `kind`
    pub fn item_pos(&self, kind: ItemKind) -> Option<Vec2> {
        let mut item_query = self.world.query::<&Item>();
        let pos = item_query
            .iter()
            .find(|(_e, item)| item.kind == kind)
            .map(|(_e, item)| item.pos);
        pos
    }

    fn start_round(&mut self, action: GameAction) {
        if !self.fsm.transition(action).success {
            return;
        }

        if let Ok(mut snake) = self.world.get::<&mut Snake>(self.snake) {
            snake.reset(
                self.config.start_pos,
                self.config.clamped_initial_length(),
                self.config.initial_speed,
            );
        }
        self.score.reset();
        self.events.push(GameEvent::RoundStarted);
    }

    fn quit(&mut self) {
        if self.fsm.transition(GameAction::Quit).success {
            self.events.push(GameEvent::QuitRequested);
        }
    }
}
