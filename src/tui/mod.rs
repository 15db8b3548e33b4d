//! Ratatui-based terminal UI.
//!
//! The TUI provides a settings panel for choosing the model, frequency, and
//! depth range, then renders the attenuation profile as a live chart. Every
//! adjustment re-runs the (cheap) profile pipeline immediately.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Terminal,
};

use crate::cli::ProfileArgs;
use crate::domain::IceModel;
use crate::error::AppError;
use crate::units;

mod plotters_chart;

use plotters_chart::ProfilePlottersChart;

/// Start the TUI.
pub fn run(args: ProfileArgs) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(args)?;
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    config: crate::domain::ProfileConfig,
    selected_field: usize,
    status: String,
    run: Option<crate::app::pipeline::RunOutput>,
}

impl App {
    fn new(args: ProfileArgs) -> Result<Self, AppError> {
        let mut app = Self {
            config: crate::app::profile_config_from_args(&args),
            selected_field: 0,
            status: String::new(),
            run: None,
        };
        app.recompute()?;
        Ok(app)
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code)? {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) -> Result<bool, AppError> {
        match code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Up => {
                if self.selected_field > 0 {
                    self.selected_field -= 1;
                }
            }
            KeyCode::Down => {
                if self.selected_field < 3 {
                    self.selected_field += 1;
                }
            }
            KeyCode::Left => self.adjust_field(-1)?,
            KeyCode::Right => self.adjust_field(1)?,
            KeyCode::Char('m') => {
                self.config.model = self.config.model.next();
                self.recompute()?;
                self.status = format!("model: {}", self.config.model.display_name());
            }
            KeyCode::Char('d') => {
                match crate::debug::write_debug_bundle(&self.config) {
                    Ok(path) => {
                        self.status = format!("Wrote debug bundle: {}", path.display());
                    }
                    Err(err) => {
                        self.status = format!("Debug write failed: {err}");
                    }
                }
            }
            _ => {}
        }

        Ok(false)
    }

    fn adjust_field(&mut self, delta: i32) -> Result<(), AppError> {
        match self.selected_field {
            0 => {
                self.config.model = self.config.model.next();
                self.recompute()?;
                self.status = format!("model: {}", self.config.model.display_name());
            }
            1 => {
                let step = 25.0 * units::MHZ;
                let next = self.config.frequency + delta as f64 * step;
                self.config.frequency = next.max(5.0 * units::MHZ);
                self.recompute()?;
                self.status = format!("frequency: {:.0} MHz", self.config.frequency / units::MHZ);
            }
            2 => {
                let next = self.config.depth_min_m - delta as f64 * 250.0;
                // Keep at least a 250 m window below the shallow end.
                self.config.depth_min_m = next.min(self.config.depth_max_m - 250.0);
                self.recompute()?;
                self.status = format!("deep end: {:.0} m", self.config.depth_min_m);
            }
            3 => {
                let next = if delta >= 0 {
                    self.config.samples.saturating_add(20)
                } else {
                    self.config.samples.saturating_sub(20)
                };
                self.config.samples = next.max(11);
                self.recompute()?;
                self.status = format!("samples: {}", self.config.samples);
            }
            _ => {}
        }
        Ok(())
    }

    fn recompute(&mut self) -> Result<(), AppError> {
        let run = crate::app::pipeline::run_profile(&self.config)?;
        self.run = Some(run);
        Ok(())
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(vec![
            Span::styled("iceatt", Style::default().fg(Color::Cyan)),
            Span::raw(" — glacial-ice radio attenuation"),
        ]));

        let n = self.run.as_ref().map(|r| r.stats.n_points).unwrap_or(0);

        lines.push(Line::from(Span::styled(
            format!(
                "model: {} | f: {:.0} MHz | depth: [{:.0}, {:.0}] m | n={n}",
                self.config.model.display_name(),
                self.config.frequency / units::MHZ,
                self.config.depth_min_m,
                self.config.depth_max_m,
            ),
            Style::default().fg(Color::Gray),
        )));

        if let Some(run) = &self.run {
            lines.push(Line::from(Span::styled(
                format!(
                    "L=[{:.1}, {:.1}] m",
                    run.stats.length_min_m, run.stats.length_max_m,
                ),
                Style::default().fg(Color::Gray),
            )));
        }

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(7)])
            .split(area);

        self.draw_chart(frame, chunks[0]);
        self.draw_settings(frame, chunks[1]);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Attenuation Profile").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        let Some(run) = &self.run else {
            let msg = Paragraph::new("Waiting for data...")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default());
            frame.render_widget(msg, inner);
            return;
        };

        let (curve, points, x_bounds, y_bounds) = chart_series(run, self.config.model);

        let (chart_rect, insets) = chart_layout(inner);
        let widget = ProfilePlottersChart {
            curve: &curve,
            points: &points,
            x_bounds,
            y_bounds,
            x_label: "depth (m)",
            y_label: "L (m)",
            fmt_x: fmt_axis_depth,
            fmt_y: fmt_axis_length,
        };

        frame.render_widget(widget, chart_rect);
        if let Some(insets) = insets {
            draw_axis_ticks(frame, inner, chart_rect, insets, x_bounds, y_bounds);
        }
    }

    fn draw_settings(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut items = Vec::new();
        items.push(ListItem::new(format!("Model: {}", self.config.model.display_name())));
        items.push(ListItem::new(format!(
            "Frequency: {:.0} MHz",
            self.config.frequency / units::MHZ
        )));
        items.push(ListItem::new(format!("Deep end: {:.0} m", self.config.depth_min_m)));
        items.push(ListItem::new(format!("Samples: {}", self.config.samples)));

        let list = List::new(items)
            .block(Block::default().title("Settings").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ratatui::widgets::ListState::default();
        state.select(Some(self.selected_field));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  m model  d debug  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

/// Build chart series for Plotters.
fn chart_series(
    run: &crate::app::pipeline::RunOutput,
    model: IceModel,
) -> (Vec<(f64, f64)>, Vec<(f64, f64)>, [f64; 2], [f64; 2]) {
    let mut x0 = run.stats.depth_min_m;
    let mut x1 = run.stats.depth_max_m;
    if !x0.is_finite() || !x1.is_finite() || x1 <= x0 {
        x0 = -3000.0;
        x1 = 0.0;
    }
    let x_bounds = [x0, x1];

    let curve: Vec<(f64, f64)> = run.points.iter().map(|p| (p.depth_m, p.length_m)).collect();

    let points: Vec<(f64, f64)> = match model {
        IceModel::Dielectric => Vec::new(),
        IceModel::Greenland => crate::models::greenland::DEPTH_M
            .iter()
            .zip(crate::models::greenland::ATT_LENGTH_75MHZ_M.iter())
            .filter(|&(&z, _)| x0 <= z && z <= x1)
            .map(|(&z, &l)| (z, l))
            .collect(),
    };

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(_, y) in curve.iter().chain(points.iter()) {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if !y_min.is_finite() || !y_max.is_finite() || y_max <= y_min {
        y_min = 0.0;
        y_max = 1.0;
    }

    let pad = ((y_max - y_min).abs() * 0.05).max(1e-12);
    let y_bounds = [y_min - pad, y_max + pad];

    (curve, points, x_bounds, y_bounds)
}

fn fmt_axis_depth(v: f64) -> String {
    format!("{v:.0}")
}

fn fmt_axis_length(v: f64) -> String {
    format!("{v:.0}")
}

#[derive(Debug, Clone, Copy)]
struct AxisInsets {
    left: u16,
    right: u16,
    top: u16,
    bottom: u16,
}

fn chart_layout(inner: Rect) -> (Rect, Option<AxisInsets>) {
    let insets = AxisInsets {
        left: 8,
        right: 2,
        top: 1,
        bottom: 2,
    };

    if inner.width <= insets.left + insets.right + 10
        || inner.height <= insets.top + insets.bottom + 5
    {
        return (inner, None);
    }

    let rect = Rect {
        x: inner.x + insets.left,
        y: inner.y + insets.top,
        width: inner.width - insets.left - insets.right,
        height: inner.height - insets.top - insets.bottom,
    };

    (rect, Some(insets))
}

fn draw_axis_ticks(
    frame: &mut ratatui::Frame<'_>,
    inner: Rect,
    chart: Rect,
    insets: AxisInsets,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
) {
    let ticks = 5usize;
    let style = Style::default().fg(Color::Gray);

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let x_val = x_bounds[0] + u * (x_bounds[1] - x_bounds[0]);
        let x = chart.x + ((chart.width - 1) as f64 * u).round() as u16;
        let label = format!("{x_val:.0}");
        let label_len = label.len() as u16;
        let start = x.saturating_sub((label.len() / 2) as u16);
        let y = chart.y + chart.height;
        if y >= inner.y + inner.height - 1 {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    for i in 0..ticks {
        let u = i as f64 / (ticks as f64 - 1.0);
        let y_val = y_bounds[0] + u * (y_bounds[1] - y_bounds[0]);
        let y = chart.y + (chart.height - 1) - ((chart.height - 1) as f64 * u).round() as u16;
        let label = format!("{y_val:.0}");
        let label_len = label.len() as u16;
        let x = inner.x + insets.left.saturating_sub(1);
        let start = x.saturating_sub(label.len() as u16);
        if start < inner.x {
            continue;
        }
        frame.render_widget(
            Paragraph::new(label).style(style),
            Rect {
                x: start,
                y,
                width: label_len,
                height: 1,
            },
        );
    }

    let x_label = Paragraph::new("depth (m)")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    let x_rect = Rect {
        x: chart.x,
        y: chart.y + chart.height + 1,
        width: chart.width,
        height: 1,
    };
    if x_rect.y < inner.y + inner.height {
        frame.render_widget(x_label, x_rect);
    }

    let y_label = Paragraph::new("L (m)")
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
    let y_rect = Rect {
        x: inner.x,
        y: inner.y,
        width: insets.left.saturating_sub(1),
        height: 1,
    };
    frame.render_widget(y_label, y_rect);
}
