//! Orbit tracker dashboard - Terminal User Interface
//!
//! Draws the display ellipse with the moving satellite marker, the metrics
//! readout and the live position estimate. App logic lives in
//! `orbitscope::tui::orbit_app`.

#![forbid(unsafe_code)]

#[cfg(feature = "tui")]
fn main() -> orbitscope::OrbitResult<()> {
    use clap::Parser;
    use orbitscope::config::OrbitConfig;
    use orbitscope::tui::orbit_app::OrbitApp;

    /// Orbit tracker dashboard
    #[derive(Parser)]
    #[command(name = "orbit_tui", version)]
    struct Cli {
        /// YAML configuration file.
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    }

    let cli = Cli::parse();
    let config = match cli.config {
        Some(path) => OrbitConfig::load(path)?,
        None => OrbitConfig::default(),
    };
    tui::run(OrbitApp::from_config(&config)?)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn main() {
    eprintln!("TUI feature not enabled. Run with --features tui");
    std::process::exit(1);
}

#[cfg(feature = "tui")]
mod tui {
    use crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use orbitscope::tui::orbit_app::{Field, OrbitApp};
    use ratatui::{
        backend::{Backend, CrosstermBackend},
        layout::{Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{
            canvas::{Canvas, Circle, Points, Rectangle},
            Block, Borders, Paragraph,
        },
        Frame, Terminal,
    };
    use std::io;
    use std::time::{Duration, Instant};

    const FRAME_RATE: Duration = Duration::from_millis(33);
    const ELLIPSE_SAMPLES: usize = 180;

    /// Run the TUI application.
    pub fn run(mut app: OrbitApp) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = event_loop(&mut terminal, &mut app);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut OrbitApp) -> io::Result<()> {
        loop {
            let start = Instant::now();
            terminal.draw(|f| ui(f, app))?;

            let timeout = FRAME_RATE.saturating_sub(start.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }

            if app.should_quit {
                return Ok(());
            }

            app.update();
        }
    }

    fn ui(f: &mut Frame, app: &OrbitApp) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(12),
                Constraint::Length(3),
            ])
            .split(f.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Length(7),
                Constraint::Min(5),
            ])
            .split(body[1]);

        render_title(f, rows[0], app);
        render_orbit_canvas(f, body[0], app);
        render_inputs(f, side[0], app);
        render_metrics(f, side[1], app);
        render_position(f, side[2], app);
        render_help(f, rows[2], app);
    }

    fn render_title(f: &mut Frame, area: Rect, app: &OrbitApp) {
        let (label, color) = if app.is_tracking() {
            ("[TRACKING]", Color::Green)
        } else {
            ("[STOPPED]", Color::Yellow)
        };
        let title = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                " ORBIT TRACKER ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(label, Style::default().fg(color)),
            Span::raw(" | "),
            Span::styled(app.selection_name(), Style::default().fg(Color::White)),
        ])])
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    /// Points along the drawn ellipse, in canvas coordinates.
    fn ellipse_points(app: &OrbitApp) -> Vec<(f64, f64)> {
        let geometry = app.session.geometry();
        let ellipse = app.session.ellipse();
        let (a, b) = (ellipse.width / 2.0, ellipse.height / 2.0);
        (0..ELLIPSE_SAMPLES)
            .map(|i| {
                let theta = std::f64::consts::TAU * i as f64 / ELLIPSE_SAMPLES as f64;
                (
                    geometry.center_x + a * theta.cos(),
                    geometry.center_y - b * theta.sin(),
                )
            })
            .collect()
    }

    fn render_orbit_canvas(f: &mut Frame, area: Rect, app: &OrbitApp) {
        let geometry = *app.session.geometry();
        let extent = geometry.max_radius * 1.5 + geometry.marker_size;
        let (cx, cy) = (geometry.center_x, geometry.center_y);
        // Display coordinates grow downward; the canvas grows upward.
        let flip = |y: f64| 2.0 * cy - y;

        let path = ellipse_points(app);
        let trail: Vec<(f64, f64)> = app.trail().map(|&(x, y)| (x, flip(y))).collect();
        let marker = app.session.driver().last_output().map(|out| (out.x, flip(out.y)));

        let canvas = Canvas::default()
            .block(Block::default().borders(Borders::ALL).title("Orbit View"))
            .x_bounds([cx - extent, cx + extent])
            .y_bounds([cy - extent, cy + extent])
            .paint(move |ctx| {
                ctx.draw(&Circle {
                    x: cx,
                    y: cy,
                    radius: geometry.min_radius * 0.6,
                    color: Color::Blue,
                });
                ctx.draw(&Points {
                    coords: &path,
                    color: Color::DarkGray,
                });
                if !trail.is_empty() {
                    ctx.draw(&Points {
                        coords: &trail,
                        color: Color::Cyan,
                    });
                }
                if let Some((x, y)) = marker {
                    ctx.draw(&Rectangle {
                        x,
                        y: y - geometry.marker_size,
                        width: geometry.marker_size,
                        height: geometry.marker_size,
                        color: Color::Red,
                    });
                }
            });

        f.render_widget(canvas, area);
    }

    fn render_inputs(f: &mut Frame, area: Rect, app: &OrbitApp) {
        let lines: Vec<Line> = Field::ALL
            .iter()
            .map(|&field| {
                let selected = field == app.selected;
                let style = if selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::styled(format!("{:<16}", field.label()), Style::default().fg(Color::Gray)),
                    Span::styled(format!("{:>10}", app.field_value(field)), style),
                ])
            })
            .collect();
        let inputs = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Parameters"));
        f.render_widget(inputs, area);
    }

    fn render_metrics(f: &mut Frame, area: Rect, app: &OrbitApp) {
        let readout = app.metrics_readout();
        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{label:<14}"), Style::default().fg(Color::Gray)),
                Span::styled(value, Style::default().fg(Color::White)),
            ])
        };
        let metrics = Paragraph::new(vec![
            row("Period", format!("{} min", readout.period)),
            row("Velocity", format!("{} km/s", readout.velocity)),
            row("Apogee", format!("{} km", readout.apogee)),
            row("Perigee", format!("{} km", readout.perigee)),
            row("Track shift", format!("{}°/orbit", readout.ground_track)),
        ])
        .block(Block::default().borders(Borders::ALL).title("Metrics"));
        f.render_widget(metrics, area);
    }

    fn render_position(f: &mut Frame, area: Rect, app: &OrbitApp) {
        let lines = app.position_readout().map_or_else(
            || vec![Line::from(Span::styled("No fix yet", Style::default().fg(Color::DarkGray)))],
            |pos| {
                vec![
                    Line::from(format!("Altitude   {} km", pos.altitude)),
                    Line::from(format!("Latitude   {}°", pos.latitude)),
                    Line::from(format!("Longitude  {}°", pos.longitude)),
                ]
            },
        );
        let position = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Position"));
        f.render_widget(position, area);
    }

    fn render_help(f: &mut Frame, area: Rect, app: &OrbitApp) {
        let mut spans = vec![Span::styled(
            "space track | 1-6 presets | ↑↓ field | ←→ [ ] adjust | r reset | q quit",
            Style::default().fg(Color::Gray),
        )];
        if let Some(status) = &app.status {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(status.clone(), Style::default().fg(Color::Red)));
        }
        let help = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
        f.render_widget(help, area);
    }

}
