use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, CellKind, FoodKind, World};
use crate::metrics::SessionStats;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render<R>(&self, frame: &mut Frame, world: &World<R>, stats: &SessionStats) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Playfield
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with session stats
        let header = self.render_stats(world, stats);
        frame.render_widget(header, chunks[0]);

        // Center the playfield horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        // Render playfield or the lose screen
        if world.is_game_over() {
            let game_over = self.render_game_over(stats);
            frame.render_widget(game_over, game_area);
        } else {
            let grid = self.render_grid(world);
            frame.render_widget(grid, game_area);
        }

        // Render footer with controls
        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid<R>(&self, world: &World<R>) -> Paragraph<'_> {
        let grid = world.grid();
        let snake = world.snake();
        let mut lines = Vec::new();

        for row in 0..grid.rows() {
            let mut spans = Vec::new();

            for col in 0..grid.cols() {
                let cell = Cell::new(col, row);

                let span = if cell == snake.head() {
                    // Snake head - distinct glyph
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if snake.body().contains(&cell) {
                    // Snake body
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if let Some(item) = world.food().iter().find(|item| item.cell == cell) {
                    // Food, tinted by kind
                    Span::styled(
                        "● ",
                        Style::default()
                            .fg(food_color(item.kind))
                            .add_modifier(Modifier::BOLD),
                    )
                } else if grid.classify(cell) == CellKind::Boundary {
                    // Boundary ring
                    Span::styled("▓ ", Style::default().fg(Color::DarkGray))
                } else {
                    // Empty cell
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats<R>(&self, world: &World<R>, stats: &SessionStats) -> Paragraph<'_> {
        // Once the run is over the world score holds the death sentinel;
        // show the recorded final score instead.
        let score = if world.is_game_over() {
            stats.last_score
        } else {
            world.score()
        };

        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.high_score.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(stats.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, stats: &SessionStats) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "You lose!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    stats.last_score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Best Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    stats.high_score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to retry or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn food_color(kind: FoodKind) -> Color {
    match kind {
        FoodKind::Red => Color::Red,
        FoodKind::Yellow => Color::Yellow,
        FoodKind::Orange => Color::Rgb(255, 165, 0),
        FoodKind::Cyan => Color::Cyan,
    }
}
