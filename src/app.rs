use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval, interval_at};

use crate::game::{GameConfig, InputSnapshot, World};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::SessionStats;
use crate::render::Renderer;

/// Interactive session: owns the world, the terminal, and the timers
pub struct App {
    world: World<StdRng>,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    held: InputSnapshot,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let world = World::with_rng(config, StdRng::seed_from_u64(seed));

        Self {
            world,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            held: InputSnapshot::default(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal; the TUI lives on stderr so stdout stays free for logs
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Simulation ticks at 10 Hz (100ms per tick)
        let tick_interval = Duration::from_millis(100);
        let mut tick_timer = interval(tick_interval);

        // One spawn attempt per second, the first after a full period
        let spawn_interval = Duration::from_millis(1000);
        let mut spawn_timer = interval_at(Instant::now() + spawn_interval, spawn_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Simulation tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Food spawn attempt; keeps firing on the lose screen too
                _ = spawn_timer.tick() => {
                    match self.world.spawn_food() {
                        Some(item) => tracing::debug!(
                            col = item.cell.col,
                            row = item.cell.row,
                            kind = ?item.kind,
                            "food spawned"
                        ),
                        None => tracing::debug!("food spawn attempt discarded"),
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.stats.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.world, &self.stats);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);

            match action {
                KeyAction::Steer(heading) => {
                    self.held.press(heading);
                }
                KeyAction::Restart => {
                    // Retry is only offered on the lose screen
                    if self.world.is_game_over() {
                        self.reset_game();
                    }
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        if self.world.is_game_over() {
            return;
        }

        // The tick may clobber the score with the death sentinel; keep the
        // pre-tick value for the stats.
        let score_before = self.world.score();
        let input = std::mem::take(&mut self.held);
        self.world.tick(input);

        if self.world.is_game_over() {
            self.stats.on_game_over(score_before);
            tracing::info!(
                final_score = score_before,
                high_score = self.stats.high_score,
                games_played = self.stats.games_played,
                "game over"
            );
        }
    }

    fn reset_game(&mut self) {
        self.world.reset();
        self.stats.on_game_start();
        self.held = InputSnapshot::default();
        tracing::debug!("world reset, starting a new run");
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
