//! Chart module for debrief
//!
//! Renders the extracted score table as an interactive terminal bar chart.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use std::io;
use std::time::Duration;

use crate::report::{format_score, ScoreTable};

/// Upper bound of the score axis in score units. Scores are expected on a
/// 1-10 scale; one unit of headroom keeps full bars off the chart ceiling.
const AXIS_MAX: u64 = 11;

/// Bars are scaled so fractional scores keep 0.1 resolution in the
/// integer-valued bar widget.
const BAR_SCALE: f64 = 10.0;

/// Show the score chart until the user dismisses it with q or Esc.
pub fn run(table: &ScoreTable) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_chart(&mut terminal, table);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_chart<B: Backend>(terminal: &mut Terminal<B>, table: &ScoreTable) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, table))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                {
                    return Ok(());
                }
            }
        }
    }
}

fn draw(frame: &mut Frame, table: &ScoreTable) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Chart
            Constraint::Length(1), // Help
        ])
        .split(frame.size());

    // Title
    let title = Paragraph::new("Interview Performance Metrics")
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    // Bar chart, one bar per metric, 1-10 scale with headroom
    let bars = score_bars(table);
    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Scores (1-10) ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(12)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::LightBlue))
        .value_style(Style::default().fg(Color::Black).bg(Color::LightBlue))
        .max(AXIS_MAX * BAR_SCALE as u64);
    frame.render_widget(chart, chunks[1]);

    // Help bar
    let help = Paragraph::new(Line::from(vec![
        Span::styled(" [q] ", Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::raw(" Quit"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn score_bars(table: &ScoreTable) -> Vec<Bar<'static>> {
    bar_data(table)
        .into_iter()
        .map(|(metric, value, text)| {
            Bar::default()
                .value(value)
                .label(Line::from(metric))
                .text_value(text)
        })
        .collect()
}

/// One (label, scaled bar value, value label) triple per metric.
fn bar_data(table: &ScoreTable) -> Vec<(String, u64, String)> {
    table
        .entries()
        .iter()
        .map(|(metric, score)| (metric.clone(), scaled_value(*score), format_score(*score)))
        .collect()
}

fn scaled_value(score: f64) -> u64 {
    // Bar lengths cannot be negative; the text label still shows the real value.
    (score.max(0.0) * BAR_SCALE).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::extract_scores;

    #[test]
    fn one_bar_per_metric_with_matching_values_and_labels() {
        let table =
            extract_scores("{\"engagement\": 7, \"clarity\": 9, \"enthusiasm\": 6}").unwrap();
        let data = bar_data(&table);

        assert_eq!(
            data,
            vec![
                ("engagement".to_string(), 70, "7".to_string()),
                ("clarity".to_string(), 90, "9".to_string()),
                ("enthusiasm".to_string(), 60, "6".to_string()),
            ]
        );
    }

    #[test]
    fn axis_upper_bound_exceeds_top_score() {
        assert!(AXIS_MAX > 10);
    }

    #[test]
    fn fractional_scores_keep_tenths_resolution() {
        assert_eq!(scaled_value(8.55), 86);
        assert_eq!(scaled_value(0.0), 0);
    }

    #[test]
    fn negative_scores_clamp_to_zero_length_bars() {
        assert_eq!(scaled_value(-2.0), 0);
    }
}
