//! file: session.rs
//! author: Jacob Xie
//! date: 2025/12/18 20:15:37 Thursday
//! brief: one autonomous game, advanced a tick at a time

use std::{collections::VecDeque, time::Duration};

use super::{
    Cell, Direction, GameStatus, GoalPlacer, Grid, Path, Pathfinder, TerminationCause, motion,
    obstacles,
};
use crate::{
    config::{GridSettings, PacingSettings},
    score::HighScoreStore,
};

/// What a call to [`Session::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Advanced one cell without reaching the goal.
    Moved,
    /// Advanced onto the goal and grew by one.
    Consumed,
    /// This tick ended the game.
    Terminated { cause: TerminationCause, score: u32 },
    /// The game was already over; nothing changed.
    Idle,
}

/// All state of one game. Nothing is global, so independent sessions can
/// run side by side.
pub struct Session {
    grid: Grid,
    initial_length: usize,
    pacing: PacingSettings,
    snake: VecDeque<Cell>,
    direction: Direction,
    food: Cell,
    last_path: Option<Path>,
    state: GameStatus,
    score: u32,
    high_score: u32,
    placer: Box<dyn GoalPlacer>,
    store: Box<dyn HighScoreStore>,
}

impl Session {
    /// Expects settings that passed [`crate::config::Settings::validate`].
    pub fn new(
        grid: &GridSettings,
        pacing: &PacingSettings,
        placer: Box<dyn GoalPlacer>,
        store: Box<dyn HighScoreStore>,
    ) -> Self {
        let board = Grid::new(grid.cols, grid.rows);
        let high_score = store.load();
        let mut session = Self {
            grid: board,
            initial_length: grid.initial_length.min(board.max_initial_length()),
            pacing: pacing.clone(),
            snake: VecDeque::new(),
            direction: Direction::Right,
            food: Cell::new(0, 0),
            last_path: None,
            state: GameStatus::Running,
            score: 0,
            high_score,
            placer,
            store,
        };
        session.reset();
        session
    }

    /// Builds a session around an explicit body and goal.
    ///
    /// `snake` is head first; its cells must be distinct, in bounds and
    /// clear of `food`. [`Session::reset`] starts over from the longest
    /// prefix of that length that fits [`Grid::max_initial_length`].
    pub fn with_state(
        grid: Grid,
        snake: impl IntoIterator<Item = Cell>,
        food: Cell,
        direction: Direction,
        pacing: &PacingSettings,
        placer: Box<dyn GoalPlacer>,
        store: Box<dyn HighScoreStore>,
    ) -> Self {
        let snake: VecDeque<Cell> = snake.into_iter().collect();
        let high_score = store.load();
        // a later reset lays the body out from the centre, so cap it there
        let initial_length = snake.len().min(grid.max_initial_length());
        Self {
            grid,
            initial_length,
            pacing: pacing.clone(),
            snake,
            direction,
            food,
            last_path: None,
            state: GameStatus::Running,
            score: 0,
            high_score,
            placer,
            store,
        }
    }

    fn build_initial_snake(grid: &Grid, length: usize) -> VecDeque<Cell> {
        let head = Cell::new(grid.width() / 2, grid.height() / 2);
        (0..length as i32)
            .map(|offset| Cell::new(head.x - offset, head.y))
            .collect()
    }

    /// Back to the starting body heading right with score 0. The high score
    /// is kept.
    pub fn reset(&mut self) {
        self.snake = Self::build_initial_snake(&self.grid, self.initial_length);
        self.direction = Direction::Right;
        self.score = 0;
        self.last_path = None;
        self.state = GameStatus::Running;
        match self.placer.place(&self.grid, &self.snake) {
            Some(food) => self.food = food,
            None => self.state = GameStatus::GameOver(TerminationCause::BoardFull),
        }
        tracing::info!(head = ?self.head(), food = %self.food, "session reset");
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.state.is_running() {
            return TickOutcome::Idle;
        }
        let Some(head) = self.snake.front().copied() else {
            return TickOutcome::Idle;
        };

        let blocked = obstacles::snapshot(&self.snake);
        let path = Pathfinder::new(&self.grid).find_path(head, self.food, &blocked);
        self.direction = motion::next_direction(self.direction, path.as_ref());
        self.last_path = path;

        let next = head.offset(self.direction);
        if !self.grid.in_bounds(next) {
            return self.terminate(TerminationCause::Wall);
        }
        // the head's own cell is vacated this tick, so only the rest counts
        if self.snake.iter().skip(1).any(|cell| *cell == next) {
            return self.terminate(TerminationCause::SelfCollision);
        }

        self.snake.push_front(next);
        if next != self.food {
            self.snake.pop_back();
            return TickOutcome::Moved;
        }

        self.score += 1;
        tracing::info!(score = self.score, length = self.snake.len(), "goal consumed");
        match self.placer.place(&self.grid, &self.snake) {
            Some(food) => {
                self.food = food;
                TickOutcome::Consumed
            }
            None => self.terminate(TerminationCause::BoardFull),
        }
    }

    fn terminate(&mut self, cause: TerminationCause) -> TickOutcome {
        self.state = GameStatus::GameOver(cause);
        tracing::info!(score = self.score, %cause, "game over");
        if self.score > self.high_score {
            self.high_score = self.score;
            if let Err(err) = self.store.save(self.high_score) {
                tracing::warn!(%err, "failed to persist high score");
            }
        }
        TickOutcome::Terminated {
            cause,
            score: self.score,
        }
    }

    /// Ticks per second: grows with score, capped at `max_speed`.
    pub fn speed(&self) -> u32 {
        self.score
            .saturating_mul(self.pacing.speed_increment)
            .saturating_add(self.pacing.initial_speed)
            .min(self.pacing.max_speed)
    }

    pub fn tick_delay(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.speed().max(1)))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Head first.
    pub fn body(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.front().copied()
    }

    pub fn goal(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn status(&self) -> GameStatus {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Route planned on the most recent tick, if one was found.
    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{game::RandomPlacer, score::MemoryHighScoreStore};

    fn pacing() -> PacingSettings {
        PacingSettings::default()
    }

    fn session(
        grid: Grid,
        snake: &[(i32, i32)],
        food: (i32, i32),
        direction: Direction,
    ) -> Session {
        Session::with_state(
            grid,
            snake.iter().copied().map(Cell::from),
            food.into(),
            direction,
            &pacing(),
            Box::new(RandomPlacer::seeded(11)),
            Box::new(MemoryHighScoreStore::default()),
        )
    }

    #[test]
    fn new_session_starts_centered() {
        let session = Session::new(
            &GridSettings::default(),
            &pacing(),
            Box::new(RandomPlacer::seeded(5)),
            Box::new(MemoryHighScoreStore::with_score(9)),
        );
        let body: Vec<_> = session.body().iter().copied().collect();
        assert_eq!(body, vec![Cell::new(15, 15), Cell::new(14, 15), Cell::new(13, 15)]);
        assert_eq!(session.direction(), Direction::Right);
        assert_eq!(session.high_score(), 9);
        assert!(!session.body().contains(&session.goal()));
        assert!(session.status().is_running());
    }

    #[test]
    fn plain_move_keeps_length() {
        let mut s = session(Grid::new(5, 5), &[(2, 2), (1, 2), (0, 2)], (4, 0), Direction::Right);
        assert_eq!(s.tick(), TickOutcome::Moved);
        assert_eq!(s.body().len(), 3);
        assert_eq!(s.score(), 0);
        assert!(s.last_path().is_some());
    }

    #[test]
    fn eating_grows_and_scores() {
        let mut s = session(Grid::new(5, 5), &[(2, 2), (1, 2), (0, 2)], (3, 2), Direction::Right);
        assert_eq!(s.tick(), TickOutcome::Consumed);
        assert_eq!(s.score(), 1);
        assert_eq!(s.body().len(), 4);
        assert_eq!(s.head(), Some(Cell::new(3, 2)));
        assert!(!s.body().contains(&s.goal()));
    }

    #[test]
    fn trapped_snake_keeps_heading_into_wall() {
        // head in the top-right corner facing right, goal unreachable
        let grid = Grid::new(4, 4);
        let mut s = session(grid, &[(3, 0), (3, 1), (2, 1), (2, 0)], (0, 3), Direction::Right);
        let outcome = s.tick();
        assert_eq!(
            outcome,
            TickOutcome::Terminated {
                cause: TerminationCause::Wall,
                score: 0
            }
        );
        assert!(s.last_path().is_none());
        assert_eq!(s.direction(), Direction::Right);
    }

    #[test]
    fn straight_line_into_body_is_self_collision() {
        // head (1,1) heading down into its own body at (1,2); goal sealed off
        let grid = Grid::new(3, 4);
        let body = [(1, 1), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0), (1, 0), (0, 0)];
        let mut s = session(grid, &body, (1, 3), Direction::Down);
        assert_eq!(
            s.tick(),
            TickOutcome::Terminated {
                cause: TerminationCause::SelfCollision,
                score: 0
            }
        );
    }

    #[test]
    fn routes_around_the_whole_body() {
        // the only way to the goal is via (0,2); the body blocks the rest
        let grid = Grid::new(2, 3);
        let body = [(0, 1), (0, 0), (1, 0), (1, 1)];
        let mut s = session(grid, &body, (1, 2), Direction::Right);
        let outcome = s.tick();
        assert_eq!(outcome, TickOutcome::Moved);
        assert_eq!(s.head(), Some(Cell::new(0, 2)));
    }

    #[test]
    fn straight_line_onto_the_tail_is_self_collision() {
        // goal (2,0) is walled off by (1,0) and (1,1); heading down lands on
        // the tail, which still counts even though it would move this tick
        let grid = Grid::new(3, 2);
        let mut s = session(grid, &[(0, 0), (1, 0), (1, 1), (0, 1)], (2, 0), Direction::Down);
        assert_eq!(
            s.tick(),
            TickOutcome::Terminated {
                cause: TerminationCause::SelfCollision,
                score: 0
            }
        );
        assert!(s.last_path().is_none());
        assert_eq!(s.body().len(), 4);
    }

    #[test]
    fn reset_after_long_custom_body_stays_on_grid() {
        let grid = Grid::new(3, 4);
        let body = [(1, 1), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0), (1, 0), (0, 0)];
        let mut s = session(grid, &body, (1, 3), Direction::Down);
        s.reset();
        let cells: Vec<_> = s.body().iter().copied().collect();
        assert_eq!(cells, vec![Cell::new(1, 2), Cell::new(0, 2)]);
        assert!(s.body().iter().all(|cell| grid.in_bounds(*cell)));
        assert!(s.status().is_running());
        assert!(!s.body().contains(&s.goal()));
    }

    #[test]
    fn terminal_session_stays_put() {
        let mut s = session(Grid::new(3, 1), &[(2, 0), (1, 0)], (0, 0), Direction::Right);
        assert!(matches!(s.tick(), TickOutcome::Terminated { .. }));
        let body = s.body().clone();
        assert_eq!(s.tick(), TickOutcome::Idle);
        assert_eq!(s.body(), &body);
    }

    #[test]
    fn improved_score_is_saved_once() {
        let store = std::rc::Rc::new(MemoryHighScoreStore::default());
        let mut s = Session::with_state(
            Grid::new(4, 1),
            [Cell::new(1, 0), Cell::new(0, 0)],
            Cell::new(2, 0),
            Direction::Right,
            &pacing(),
            Box::new(RandomPlacer::seeded(2)),
            Box::new(SharedStore(store.clone())),
        );
        assert_eq!(s.tick(), TickOutcome::Consumed);
        // goal can only be (3,0); eat it and the board is full
        assert_eq!(s.goal(), Cell::new(3, 0));
        assert_eq!(
            s.tick(),
            TickOutcome::Terminated {
                cause: TerminationCause::BoardFull,
                score: 2
            }
        );
        assert_eq!(s.high_score(), 2);
        assert_eq!(store.load(), 2);
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn reset_restores_start_but_keeps_best() {
        let mut s = Session::new(
            &GridSettings {
                cols: 6,
                rows: 6,
                initial_length: 3,
            },
            &pacing(),
            Box::new(RandomPlacer::seeded(8)),
            Box::new(MemoryHighScoreStore::with_score(4)),
        );
        while s.status().is_running() {
            s.tick();
        }
        let best = s.high_score();
        s.reset();
        assert!(s.status().is_running());
        assert_eq!(s.score(), 0);
        assert_eq!(s.body().len(), 3);
        assert_eq!(s.head(), Some(Cell::new(3, 3)));
        assert_eq!(s.high_score(), best);
        assert!(best >= 4);
    }

    #[test]
    fn speed_ramps_to_the_cap() {
        let mut s = session(Grid::new(5, 5), &[(2, 2), (1, 2)], (4, 4), Direction::Right);
        assert_eq!(s.speed(), 15);
        assert_eq!(s.tick_delay(), Duration::from_millis(66));
        s.score = 7;
        assert_eq!(s.speed(), 22);
        s.score = 500;
        assert_eq!(s.speed(), 30);
        assert_eq!(s.tick_delay(), Duration::from_millis(33));
    }

    struct SharedStore(std::rc::Rc<MemoryHighScoreStore>);

    impl HighScoreStore for SharedStore {
        fn load(&self) -> u32 {
            self.0.load()
        }

        fn save(&self, score: u32) -> Result<(), crate::error::ScoreStoreError> {
            self.0.save(score)
        }
    }
}
