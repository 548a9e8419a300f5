//! file: view.rs
//! author: Jacob Xie
//! date: 2025/12/18 22:31:56 Thursday
//! brief: read-only rendering of a session

use std::{collections::HashSet, time::Duration};

use astar_snake::{Cell, GameStatus, Session, TickOutcome};
use gpui::{
    App, Context, FocusHandle, Focusable, Render, Window, actions, div, prelude::*, px, rgb, rgba,
};

actions!(snake, [RestartGame, QuitGame]);

const LIGHT_GREEN: u32 = 0xaad751;
const DARK_GREEN: u32 = 0xa2d149;
const BODY: u32 = 0x1d4ed8;
const HEAD: u32 = 0x0000ff;
const FOOD: u32 = 0xc80000;
const PATH: u32 = 0xfde68a;

pub struct SnakeView {
    session: Session,
    focus_handle: FocusHandle,
    cell_px: f32,
}

impl SnakeView {
    pub fn new(session: Session, cell_px: f32, cx: &mut Context<Self>) -> Self {
        Self {
            session,
            focus_handle: cx.focus_handle(),
            cell_px,
        }
    }

    pub fn tick_delay(&self) -> Duration {
        self.session.tick_delay()
    }

    pub fn tick(&mut self, cx: &mut Context<Self>) {
        if self.session.tick() != TickOutcome::Idle {
            cx.notify();
        }
    }

    fn handle_restart(&mut self, cx: &mut Context<Self>) {
        self.session.reset();
        cx.notify();
    }

    fn cell_color(&self, cell: Cell, body: &HashSet<Cell>, path: &HashSet<Cell>) -> u32 {
        if Some(cell) == self.session.head() {
            HEAD
        } else if cell == self.session.goal() {
            FOOD
        } else if body.contains(&cell) {
            BODY
        } else if path.contains(&cell) {
            PATH
        } else if (cell.x + cell.y) % 2 == 0 {
            LIGHT_GREEN
        } else {
            DARK_GREEN
        }
    }
}

impl Render for SnakeView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let body: HashSet<Cell> = self.session.body().iter().copied().collect();
        let path: HashSet<Cell> = self
            .session
            .last_path()
            .map(|path| path.cells().iter().copied().collect())
            .unwrap_or_default();
        let cell_size = px(self.cell_px);
        let grid = *self.session.grid();

        let board = div()
            .flex()
            .flex_col()
            .children((0..grid.height()).map(|y| {
                div().flex().children((0..grid.width()).map(|x| {
                    let color = self.cell_color(Cell { x, y }, &body, &path);
                    div().w(cell_size).h(cell_size).bg(rgb(color))
                }))
            }));

        let overlay = match self.session.status() {
            GameStatus::GameOver(cause) => Some(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap_2()
                    .child(div().text_3xl().child("GAME OVER!"))
                    .child(
                        div()
                            .text_sm()
                            .text_color(rgb(0xcbd5f5))
                            .child(format!("The snake {cause}")),
                    )
                    .child(
                        div()
                            .text_xl()
                            .text_color(rgb(0xffff00))
                            .child(format!("Final Score: {}", self.session.score())),
                    )
                    .child(
                        div()
                            .text_xl()
                            .text_color(rgb(0x00ff00))
                            .child(format!("High Score: {}", self.session.high_score())),
                    )
                    .child(
                        div()
                            .flex()
                            .gap_4()
                            .text_sm()
                            .child(hint("R to Restart", 0x166534))
                            .child(hint("Q to Quit", 0x991b1b)),
                    ),
            ),
            GameStatus::Running => None,
        };

        div()
            .bg(rgb(0x000000))
            .text_color(rgb(0xffffff))
            .size_full()
            .p_5()
            .gap_4()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .track_focus(&self.focus_handle(cx))
            .key_context("astar-snake")
            .on_action(cx.listener(|this, _: &RestartGame, _, cx| this.handle_restart(cx)))
            .child(
                div()
                    .flex()
                    .gap_4()
                    .items_center()
                    .child(div().text_2xl().child(format!("Score: {}", self.session.score())))
                    .child(
                        div()
                            .text_2xl()
                            .child(format!("High Score: {}", self.session.high_score())),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(rgb(0x94a3b8))
                            .child(format!("Tick: {}ms", self.tick_delay().as_millis())),
                    ),
            )
            .child(
                div()
                    .relative()
                    .child(board)
                    .when_some(overlay, |this, message| {
                        this.child(
                            div()
                                .absolute()
                                .top(px(0.))
                                .bottom(px(0.))
                                .left(px(0.))
                                .right(px(0.))
                                .flex()
                                .items_center()
                                .justify_center()
                                .bg(rgba(0x000000D0))
                                .child(message),
                        )
                    }),
            )
    }
}

fn hint(text: &'static str, color: u32) -> impl IntoElement {
    div().px_3().py_2().rounded_md().bg(rgb(color)).child(text)
}

impl Focusable for SnakeView {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
