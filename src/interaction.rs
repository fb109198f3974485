//! Pointer and keyboard driven move/resize.
//!
//! A gesture captures everything it needs when it starts (the grabbed
//! window, where the pointer was, the window frame at that moment) and
//! turns each later pointer sample into `resize_window`/`move_window` calls on
//! the store. Nothing outlives the gesture: releasing the pointer drops the
//! captured values, and a window closed mid-gesture simply turns the
//! remaining samples into no-ops.

use crate::config::InteractionConfig;
use crate::geometry::{Bounds, Point, Size};
use crate::window::{WindowId, WindowStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeEdge {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        ResizeEdge::Left,
        ResizeEdge::Right,
        ResizeEdge::Top,
        ResizeEdge::Bottom,
        ResizeEdge::TopLeft,
        ResizeEdge::TopRight,
        ResizeEdge::BottomLeft,
        ResizeEdge::BottomRight,
    ];

    pub fn grabs_left(self) -> bool {
        matches!(
            self,
            ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft
        )
    }

    pub fn grabs_right(self) -> bool {
        matches!(
            self,
            ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight
        )
    }

    pub fn grabs_top(self) -> bool {
        matches!(
            self,
            ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight
        )
    }

    pub fn grabs_bottom(self) -> bool {
        matches!(
            self,
            ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight
        )
    }
}

/// Applies a pointer displacement to a frame dragged by `edge`.
///
/// Right/bottom drags only change the size. Left/top drags change the size
/// and keep the opposite edge where it was at gesture start, even when the
/// minimum-size clamp kicks in: the origin is derived from
/// `start origin + start size - clamped size`.
pub fn resize_frame(start: Bounds, edge: ResizeEdge, delta: Point, min: Size) -> Bounds {
    let dx = delta.x as i64;
    let dy = delta.y as i64;
    let mut width = start.size.width as i64;
    let mut height = start.size.height as i64;

    if edge.grabs_left() {
        width -= dx;
    } else if edge.grabs_right() {
        width += dx;
    }
    if edge.grabs_top() {
        height -= dy;
    } else if edge.grabs_bottom() {
        height += dy;
    }

    let width = width.clamp(min.width as i64, u32::MAX as i64);
    let height = height.clamp(min.height as i64, u32::MAX as i64);

    let mut x = start.origin.x as i64;
    let mut y = start.origin.y as i64;
    if edge.grabs_left() {
        x = start.right() - width;
    }
    if edge.grabs_top() {
        y = start.bottom() - height;
    }

    Bounds {
        origin: Point::new(clamp_coord(x), clamp_coord(y)),
        size: Size::new(width as u32, height as u32),
    }
}

fn clamp_coord(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Header drag: the window follows the pointer at a fixed grab offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveGesture {
    id: WindowId,
    grab_offset: Point,
}

impl MoveGesture {
    pub fn begin<P>(store: &WindowStore<P>, id: &str, pointer: Point) -> Option<Self> {
        let window = store.get_window(id)?;
        Some(Self {
            id: window.id.clone(),
            grab_offset: pointer - window.position,
        })
    }

    pub fn window_id(&self) -> &WindowId {
        &self.id
    }

    /// No clamping against the container; keeping a window reachable is the
    /// caller's concern.
    pub fn position_for(&self, pointer: Point) -> Point {
        pointer - self.grab_offset
    }

    pub fn update<P>(&self, store: &mut WindowStore<P>, pointer: Point) {
        store.move_window(&self.id, self.position_for(pointer));
    }
}

/// Edge or corner drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeGesture {
    id: WindowId,
    edge: ResizeEdge,
    start_pointer: Point,
    start: Bounds,
    min_size: Size,
}

impl ResizeGesture {
    pub fn begin<P>(
        store: &WindowStore<P>,
        id: &str,
        edge: ResizeEdge,
        pointer: Point,
        min_size: Size,
    ) -> Option<Self> {
        let window = store.get_window(id)?;
        Some(Self {
            id: window.id.clone(),
            edge,
            start_pointer: pointer,
            start: window.bounds(),
            min_size,
        })
    }

    pub fn window_id(&self) -> &WindowId {
        &self.id
    }

    pub fn edge(&self) -> ResizeEdge {
        self.edge
    }

    pub fn frame_for(&self, pointer: Point) -> Bounds {
        resize_frame(
            self.start,
            self.edge,
            pointer - self.start_pointer,
            self.min_size,
        )
    }

    /// Commits one sample: size first, then position.
    pub fn update<P>(&self, store: &mut WindowStore<P>, pointer: Point) {
        let frame = self.frame_for(pointer);
        store.resize_window(&self.id, frame.size);
        store.move_window(&self.id, frame.origin);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gesture {
    Move(MoveGesture),
    Resize(ResizeGesture),
}

impl Gesture {
    pub fn window_id(&self) -> &WindowId {
        match self {
            Gesture::Move(g) => g.window_id(),
            Gesture::Resize(g) => g.window_id(),
        }
    }

    fn update<P>(&self, store: &mut WindowStore<P>, pointer: Point) {
        match self {
            Gesture::Move(g) => g.update(store, pointer),
            Gesture::Resize(g) => g.update(store, pointer),
        }
    }
}

/// Owns the single live pointer gesture, if any.
#[derive(Debug, Clone, Default)]
pub struct GestureController {
    config: InteractionConfig,
    active: Option<Gesture>,
}

impl GestureController {
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&Gesture> {
        self.active.as_ref()
    }

    /// Starts dragging `id` by its header. Returns false (and leaves no
    /// gesture behind) when the window does not exist.
    pub fn begin_move<P>(&mut self, store: &WindowStore<P>, id: &str, pointer: Point) -> bool {
        self.active = MoveGesture::begin(store, id, pointer).map(Gesture::Move);
        self.active.is_some()
    }

    pub fn begin_resize<P>(
        &mut self,
        store: &WindowStore<P>,
        id: &str,
        edge: ResizeEdge,
        pointer: Point,
    ) -> bool {
        self.active = ResizeGesture::begin(store, id, edge, pointer, self.config.min_size)
            .map(Gesture::Resize);
        self.active.is_some()
    }

    /// Feeds a pointer sample to the live gesture. Returns whether a gesture
    /// consumed it.
    pub fn pointer_moved<P>(&mut self, store: &mut WindowStore<P>, pointer: Point) -> bool {
        match self.active.as_ref() {
            Some(gesture) => {
                gesture.update(store, pointer);
                true
            }
            None => false,
        }
    }

    /// Ends the live gesture and hands back its captured context.
    pub fn pointer_released(&mut self) -> Option<Gesture> {
        self.active.take()
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn step_move<P>(&self, store: &mut WindowStore<P>, id: &str, key: StepKey, large: bool) {
        step_move(store, id, key, large, &self.config);
    }

    pub fn step_resize<P>(
        &self,
        store: &mut WindowStore<P>,
        id: &str,
        edge: ResizeEdge,
        key: StepKey,
        large: bool,
    ) {
        step_resize(store, id, edge, key, large, &self.config);
    }
}

/// Arrow-key direction for keyboard moves and resizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKey {
    Left,
    Right,
    Up,
    Down,
}

impl StepKey {
    pub fn delta(self, step: u32) -> Point {
        let step = step.min(i32::MAX as u32) as i32;
        match self {
            StepKey::Left => Point::new(-step, 0),
            StepKey::Right => Point::new(step, 0),
            StepKey::Up => Point::new(0, -step),
            StepKey::Down => Point::new(0, step),
        }
    }
}

pub fn step_move<P>(
    store: &mut WindowStore<P>,
    id: &str,
    key: StepKey,
    large: bool,
    config: &InteractionConfig,
) {
    let Some(window) = store.get_window(id) else {
        return;
    };
    let position = window.position + key.delta(config.step(large));
    store.move_window(id, position);
}

/// One key press worth of resize, with the same clamp and fixed-edge rules
/// as a pointer drag.
pub fn step_resize<P>(
    store: &mut WindowStore<P>,
    id: &str,
    edge: ResizeEdge,
    key: StepKey,
    large: bool,
    config: &InteractionConfig,
) {
    let Some(window) = store.get_window(id) else {
        return;
    };
    let frame = resize_frame(
        window.bounds(),
        edge,
        key.delta(config.step(large)),
        config.min_size,
    );
    store.resize_window(id, frame.size);
    store.move_window(id, frame.origin);
}
