//! file: app.rs
//! author: Jacob Xie
//! date: 2025/12/14 23:45:00 Sunday
//! brief: window setup and the timer-driven tick loop

use astar_snake::{Session, Settings, game::GoalPlacer, score::HighScoreStore};
use gpui::{
    App, AppContext, Application, Bounds, Focusable, KeyBinding, Timer, WindowBounds,
    WindowOptions, px, size,
};

use crate::view::{QuitGame, RestartGame, SnakeView};

pub fn run(settings: Settings, placer: Box<dyn GoalPlacer>, store: Box<dyn HighScoreStore>) {
    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("r", RestartGame, None),
            KeyBinding::new("enter", RestartGame, None),
            KeyBinding::new("q", QuitGame, None),
            KeyBinding::new("escape", QuitGame, None),
        ]);

        let display = settings.display.clone();
        let session = Session::new(&settings.grid, &settings.pacing, placer, store);

        let bounds = Bounds::centered(
            None,
            size(px(display.window_width), px(display.window_height)),
            cx,
        );
        let window = match cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |_, cx| cx.new(|cx| SnakeView::new(session, display.cell_px, cx)),
        ) {
            Ok(window) => window,
            Err(err) => {
                tracing::error!(%err, "failed to open window");
                cx.quit();
                return;
            }
        };

        let game = match window.update(cx, |view: &mut SnakeView, window, cx| {
            window.focus(&view.focus_handle(cx));
            cx.activate(true);
            cx.entity()
        }) {
            Ok(game) => game,
            Err(err) => {
                tracing::error!(%err, "failed to focus window");
                cx.quit();
                return;
            }
        };

        spawn_game_loop(game, cx);
        cx.on_action(|_: &QuitGame, cx| cx.quit());
        cx.activate(true);
    });
}

fn spawn_game_loop(game: gpui::Entity<SnakeView>, cx: &mut App) {
    cx.spawn({
        async move |cx| loop {
            let delay = match game.read_with(cx, |game, _| game.tick_delay()) {
                Ok(duration) => duration,
                Err(_) => break,
            };

            Timer::after(delay).await;
            if game
                .update(cx, |game, cx| {
                    game.tick(cx);
                })
                .is_err()
            {
                break;
            }
        }
    })
    .detach();
}
