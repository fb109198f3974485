use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use deskstack::desktop::{Desktop, content};
use deskstack::{InteractionConfig, Size, StoreConfig, WindowId, WindowState, WindowStore};

const KINDS: [&str; 6] = [
    content::NOTES,
    content::CLOCK,
    content::STACK,
    content::LOG,
    content::HELP,
    "unregistered",
];

/// Violations past this many are counted but not kept.
const MAX_REPORTED_VIOLATIONS: usize = 8;

#[derive(Parser, Debug)]
#[command(
    name = "stack-bench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Drives a deterministic stream of window actions and checks the store invariants"
)]
struct BenchCli {
    /// Number of actions to apply.
    #[arg(short = 'n', long = "actions", value_name = "COUNT", default_value_t = 100_000)]
    actions: u64,

    /// Seed for the action stream. The same seed replays the same run.
    #[arg(short = 's', long = "seed", value_name = "SEED", default_value_t = 0x5EED_CAFE)]
    seed: u64,

    /// Upper bound on simultaneously open windows.
    #[arg(long = "max-windows", value_name = "COUNT", default_value_t = 24)]
    max_windows: usize,

    /// Render a frame every this many actions (0 disables rendering).
    #[arg(short = 'r', long = "render-every", value_name = "ACTIONS", default_value_t = 50)]
    render_every: u64,

    /// Virtual screen width, in cells.
    #[arg(long = "width", value_name = "CELLS", default_value_t = 120)]
    width: u16,

    /// Virtual screen height, in cells.
    #[arg(long = "height", value_name = "CELLS", default_value_t = 40)]
    height: u16,
}

struct BenchConfig {
    actions: u64,
    seed: u64,
    max_windows: usize,
    render_every: u64,
    screen: Rect,
}

impl TryFrom<&BenchCli> for BenchConfig {
    type Error = String;

    fn try_from(cli: &BenchCli) -> Result<Self, Self::Error> {
        if !(1..=10_000_000).contains(&cli.actions) {
            return Err("actions must be between 1 and 10000000".to_string());
        }
        if !(1..=512).contains(&cli.max_windows) {
            return Err("max-windows must be between 1 and 512".to_string());
        }
        if cli.width < 20 || cli.height < 8 {
            return Err("screen must be at least 20x8 cells".to_string());
        }
        Ok(Self {
            actions: cli.actions,
            seed: cli.seed,
            max_windows: cli.max_windows,
            render_every: cli.render_every,
            screen: Rect::new(0, 0, cli.width, cli.height),
        })
    }
}

fn main() -> io::Result<()> {
    let args = BenchCli::parse();
    let config = BenchConfig::try_from(&args)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    let stats = run_benchmark(&config)?;
    println!("{}", stats.final_report(&config));

    if stats.violations > 0 {
        return Err(io::Error::other(format!(
            "{} invariant violations",
            stats.violations
        )));
    }
    Ok(())
}

fn run_benchmark(config: &BenchConfig) -> io::Result<BenchStats> {
    let interaction = InteractionConfig::new(Size::new(12, 5), 1, 4)
        .map_err(|err| io::Error::other(err.to_string()))?;
    let mut desktop = Desktop::new(StoreConfig::default(), interaction);
    desktop.set_area(config.screen);

    let mut terminal = Terminal::new(TestBackend::new(config.screen.width, config.screen.height))
        .map_err(|e| io::Error::other(e.to_string()))?;
    let mut rng = Lcg::new(config.seed);
    let mut stats = BenchStats::new();

    for tick in 0..config.actions {
        let action = Action::pick(&mut rng);
        let started = Instant::now();
        let raised = apply(&mut desktop, action, &mut rng, config);
        stats.record_action(action, started.elapsed());

        if raised && let Some(message) = check_focus_on_top(desktop.store()) {
            stats.violation(tick, message);
        }
        if let Some(message) = check_invariants(desktop.store(), interaction.min_size) {
            stats.violation(tick, message);
        }

        if config.render_every > 0 && tick % config.render_every == 0 {
            let started = Instant::now();
            terminal
                .draw(|frame| desktop.render(frame))
                .map_err(|e| io::Error::other(e.to_string()))?;
            stats.record_frame(started.elapsed());
        }
        stats.peak_windows = stats.peak_windows.max(desktop.store().len());
    }

    stats.final_windows = desktop.store().len();
    stats.final_next_z = desktop.store().next_z_index();
    stats.mark_completed();
    Ok(stats)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Open,
    Close,
    CloseKind,
    Focus,
    TogglePin,
    Minimize,
    Restore,
    ToggleMaximize,
    ToggleFullscreen,
    KeyStep,
    PointerDrag,
    Cycle,
}

impl Action {
    const ALL: [Action; 12] = [
        Action::Open,
        Action::Close,
        Action::CloseKind,
        Action::Focus,
        Action::TogglePin,
        Action::Minimize,
        Action::Restore,
        Action::ToggleMaximize,
        Action::ToggleFullscreen,
        Action::KeyStep,
        Action::PointerDrag,
        Action::Cycle,
    ];

    // Weights line up with ALL. Open outweighs the closes so the desktop
    // stays populated.
    const WEIGHTS: [u32; 12] = [14, 6, 1, 14, 6, 5, 5, 4, 3, 18, 18, 6];

    fn pick(rng: &mut Lcg) -> Self {
        let total: u32 = Self::WEIGHTS.iter().sum();
        let mut roll = rng.below(total);
        for (action, weight) in Self::ALL.iter().zip(Self::WEIGHTS) {
            if roll < weight {
                return *action;
            }
            roll -= weight;
        }
        Action::Open
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|a| *a == self).unwrap_or(0)
    }

    fn label(self) -> &'static str {
        match self {
            Action::Open => "open",
            Action::Close => "close",
            Action::CloseKind => "close kind",
            Action::Focus => "focus",
            Action::TogglePin => "pin/unpin",
            Action::Minimize => "minimize",
            Action::Restore => "restore",
            Action::ToggleMaximize => "maximize",
            Action::ToggleFullscreen => "fullscreen",
            Action::KeyStep => "key step",
            Action::PointerDrag => "pointer drag",
            Action::Cycle => "cycle focus",
        }
    }
}

fn random_id(store: &WindowStore<String>, rng: &mut Lcg) -> Option<WindowId> {
    let windows = store.windows();
    if windows.is_empty() {
        return None;
    }
    let idx = rng.below(windows.len() as u32) as usize;
    Some(windows[idx].id.clone())
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Applies one action. Returns true when it moved focus onto a window that
/// did not have it, which is when that window must top its band.
fn apply(desktop: &mut Desktop, action: Action, rng: &mut Lcg, config: &BenchConfig) -> bool {
    let target = random_id(desktop.store(), rng);
    match (action, target) {
        (Action::Open, _) => {
            if desktop.store().len() < config.max_windows {
                let kind = KINDS[rng.below(KINDS.len() as u32) as usize];
                desktop.open(kind, "bench");
            }
        }
        (Action::Cycle, _) => {
            let code = if rng.below(2) == 0 {
                KeyCode::Tab
            } else {
                KeyCode::BackTab
            };
            desktop.handle_event(&key(code, KeyModifiers::NONE));
        }
        (Action::KeyStep, _) => {
            let code = [KeyCode::Left, KeyCode::Right, KeyCode::Up, KeyCode::Down]
                [rng.below(4) as usize];
            let mut modifiers = [KeyModifiers::NONE, KeyModifiers::CONTROL, KeyModifiers::ALT]
                [rng.below(3) as usize];
            if rng.below(4) == 0 {
                modifiers |= KeyModifiers::SHIFT;
            }
            desktop.handle_event(&key(code, modifiers));
        }
        (Action::PointerDrag, _) => pointer_drag(desktop, rng, config.screen),
        (_, None) => {}
        (Action::Close, Some(id)) => desktop.close(&id),
        (Action::CloseKind, Some(id)) => {
            if let Some(kind) = desktop.store().get_window(&id).map(|w| w.content_kind.clone()) {
                desktop.store_mut().close_by_type(&kind);
            }
        }
        (Action::Focus, Some(id)) => {
            let fresh = desktop
                .store()
                .get_window(&id)
                .is_some_and(|w| !w.is_focused);
            desktop.store_mut().focus(&id);
            return fresh;
        }
        (Action::TogglePin, Some(id)) => desktop.toggle_pin(&id),
        (Action::Minimize, Some(id)) => desktop.minimize(&id),
        (Action::Restore, Some(id)) => desktop.restore(&id),
        (Action::ToggleMaximize, Some(id)) => desktop.toggle_maximize(&id),
        (Action::ToggleFullscreen, Some(id)) => desktop.toggle_fullscreen(&id),
    }
    false
}

/// Press somewhere on screen, wander for a few samples, release.
fn pointer_drag(desktop: &mut Desktop, rng: &mut Lcg, screen: Rect) {
    let point = |rng: &mut Lcg| {
        (
            rng.below(u32::from(screen.width)) as u16,
            rng.below(u32::from(screen.height)) as u16,
        )
    };
    let (column, row) = point(rng);
    desktop.handle_event(&mouse(MouseEventKind::Down(MouseButton::Left), column, row));
    for _ in 0..rng.below(6) {
        let (column, row) = point(rng);
        desktop.handle_event(&mouse(MouseEventKind::Drag(MouseButton::Left), column, row));
    }
    let (column, row) = point(rng);
    desktop.handle_event(&mouse(MouseEventKind::Up(MouseButton::Left), column, row));
}

fn check_focus_on_top(store: &WindowStore<String>) -> Option<String> {
    let focused = store.get_focused_window()?;
    let beaten = store.windows().iter().find(|w| {
        w.id != focused.id && w.is_pinned == focused.is_pinned && w.z_index >= focused.z_index
    });
    beaten.map(|w| {
        format!(
            "focused {} (z {}) not above {} (z {}) in its band",
            focused.id, focused.z_index, w.id, w.z_index
        )
    })
}

fn check_invariants(store: &WindowStore<String>, min: Size) -> Option<String> {
    let windows = store.windows();
    let focused = windows.iter().filter(|w| w.is_focused).count();
    if focused > 1 {
        return Some(format!("{focused} windows focused at once"));
    }
    for (idx, window) in windows.iter().enumerate() {
        if windows[..idx].iter().any(|w| w.id == window.id) {
            return Some(format!("duplicate id {}", window.id));
        }
        if window.size.width < min.width || window.size.height < min.height {
            return Some(format!(
                "{} shrank to {}x{}",
                window.id, window.size.width, window.size.height
            ));
        }
        if !window.is_pinned && window.z_index >= store.next_z_index() {
            return Some(format!(
                "{} holds z {} at or above the counter {}",
                window.id,
                window.z_index,
                store.next_z_index()
            ));
        }
    }
    let order = store.paint_order();
    if order.iter().any(|w| w.state == WindowState::Minimized) {
        return Some("minimized window in paint order".to_string());
    }
    if order
        .windows(2)
        .any(|pair| pair[0].stacking_key() > pair[1].stacking_key())
    {
        return Some("paint order not sorted by band and z".to_string());
    }
    None
}

struct BenchStats {
    start: Instant,
    completed_at: Option<Instant>,
    per_action: [(u64, Duration); Action::ALL.len()],
    frame_count: u64,
    total_draw_time: Duration,
    slowest_frame: Duration,
    violations: u64,
    first_violations: Vec<String>,
    peak_windows: usize,
    final_windows: usize,
    final_next_z: u32,
}

impl BenchStats {
    fn new() -> Self {
        Self {
            start: Instant::now(),
            completed_at: None,
            per_action: [(0, Duration::ZERO); Action::ALL.len()],
            frame_count: 0,
            total_draw_time: Duration::ZERO,
            slowest_frame: Duration::ZERO,
            violations: 0,
            first_violations: Vec::new(),
            peak_windows: 0,
            final_windows: 0,
            final_next_z: 0,
        }
    }

    fn elapsed(&self) -> Duration {
        match self.completed_at {
            Some(done) => done.duration_since(self.start),
            None => self.start.elapsed(),
        }
    }

    fn mark_completed(&mut self) {
        self.completed_at = Some(Instant::now());
    }

    fn record_action(&mut self, action: Action, took: Duration) {
        let slot = &mut self.per_action[action.index()];
        slot.0 = slot.0.saturating_add(1);
        slot.1 += took;
    }

    fn record_frame(&mut self, draw_time: Duration) {
        self.frame_count = self.frame_count.saturating_add(1);
        self.total_draw_time += draw_time;
        self.slowest_frame = self.slowest_frame.max(draw_time);
    }

    fn violation(&mut self, tick: u64, message: String) {
        self.violations += 1;
        if self.first_violations.len() < MAX_REPORTED_VIOLATIONS {
            self.first_violations.push(format!("#{tick}: {message}"));
        }
    }

    fn average_frame_ms(&self) -> f64 {
        if self.frame_count == 0 {
            return 0.0;
        }
        (self.total_draw_time.as_secs_f64() / self.frame_count as f64) * 1_000.0
    }

    fn action_table(&self) -> String {
        Action::ALL
            .iter()
            .zip(self.per_action.iter())
            .map(|(action, (count, took))| {
                let avg_us = if *count == 0 {
                    0.0
                } else {
                    took.as_secs_f64() * 1_000_000.0 / *count as f64
                };
                format!("  {:<13} {count:>9} x {avg_us:>8.2} us", action.label())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn final_report(&self, config: &BenchConfig) -> String {
        let elapsed = self.elapsed().as_secs_f64();
        let per_second = if elapsed > 0.0 {
            config.actions as f64 / elapsed
        } else {
            0.0
        };
        let violations = if self.first_violations.is_empty() {
            "none".to_string()
        } else {
            self.first_violations.join("\n  ")
        };

        indoc::formatdoc!(
            r#"
            Stack bench finished (seed {seed:#x}).
            Actions: {actions} in {elapsed:.2}s (~{per_second:.0}/s)
            Windows: {final_windows} open at end, peak {peak}, next z {next_z}
            Frames: {frames} | Avg frame: {avg:.2} ms | Worst: {worst:.2} ms
            Per action:
            {table}
            Invariant violations: {count}
              {violations}
            "#,
            seed = config.seed,
            actions = config.actions,
            elapsed = elapsed,
            per_second = per_second,
            final_windows = self.final_windows,
            peak = self.peak_windows,
            next_z = self.final_next_z,
            frames = self.frame_count,
            avg = self.average_frame_ms(),
            worst = self.slowest_frame.as_secs_f64() * 1_000.0,
            table = self.action_table(),
            count = self.violations,
            violations = violations,
        )
    }
}

/// 64-bit linear congruential generator; deterministic per seed.
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0xA5A5_A5A5_1234_5678,
        }
    }

    fn next(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 32) as u32
    }

    /// Uniform-ish value in `0..bound`; `bound` of zero yields zero.
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.next() % bound
    }
}
