use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::presenter::{Mood, Presenter};
use crate::game::{Board, Coord, GameState, Player, COLS, ROWS};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    presenter: &Presenter,
    selected_column: usize,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Player panels
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_panels(frame, presenter, chunks[0]);
    render_board(frame, game_state.board(), presenter, selected_column, chunks[1]);
    render_status(frame, game_state, presenter, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_panels(frame: &mut Frame, presenter: &Presenter, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (player, half) in [(Player::Red, halves[0]), (Player::Yellow, halves[1])] {
        let panel = presenter.panel(player);
        let color = player_color(player);
        let (badge, border) = match panel.mood {
            Mood::Normal => ("", Style::default().fg(Color::DarkGray)),
            Mood::MyTurn => ("▶ ", Style::default().fg(color).add_modifier(Modifier::BOLD)),
            Mood::Win => ("★ ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Mood::Lose => ("✗ ", Style::default().fg(Color::DarkGray)),
        };

        let speech = panel.speech.as_deref().unwrap_or("");
        let widget = Paragraph::new(Line::from(Span::styled(
            speech.to_string(),
            Style::default().fg(color),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!("{badge}{} ●", panel.name)),
        );

        frame.render_widget(widget, half);
    }
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    presenter: &Presenter,
    selected_column: usize,
    area: Rect,
) {
    let highlight = presenter.highlight();
    let dim_losers = !highlight.is_empty();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        if col == selected_column && !presenter.is_finished() {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let span = match board.get(col, row) {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(player) => {
                    let mut style = Style::default().fg(player_color(player));
                    if highlight.contains(&Coord::new(col, row)) {
                        style = style.add_modifier(Modifier::BOLD);
                    } else if dim_losers {
                        style = style.add_modifier(Modifier::DIM);
                    }
                    Span::styled(" ● ", style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_status(frame: &mut Frame, game_state: &GameState, presenter: &Presenter, area: Rect) {
    let name = |player: Player| presenter.panel(player).name.as_str();
    let text = match (game_state.is_game_over(), game_state.winner()) {
        (true, Some(player)) => format!("{} wins in {} moves", name(player), game_state.moves()),
        (true, None) => "Board full: tie".to_string(),
        (false, _) => format!(
            "Move {}  |  {} to play",
            game_state.moves() + 1,
            name(game_state.next_player())
        ),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  1-7: Drop in column  |  R: Replay  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
