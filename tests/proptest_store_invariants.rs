//! Property-based invariant tests for the window store and resize math.
//!
//! For arbitrary action sequences over a small id pool (so duplicates and
//! unknown ids come up often):
//!
//! 1. The collection length equals successful opens minus removals.
//! 2. At most one window is focused; a successful open focuses the new window.
//! 3. Focusing an unfocused window puts it strictly above its band.
//! 4. Pinned windows always stack above non-pinned ones, by raw `z_index`,
//!    even when the plain band has caught up with the pinned offset.
//! 5. Unpin lands directly above the remaining non-pinned windows.
//! 6. Every action is idempotent when repeated with the same arguments.
//! 7. Resize never goes under the minimum and keeps the opposite edges.

use deskstack::interaction::resize_frame;
use deskstack::{Bounds, OpenOptions, Point, ResizeEdge, Size, StoreConfig, WindowStore};
use proptest::prelude::*;

const IDS: [&str; 5] = ["a", "b", "c", "d", "e"];
const KINDS: [&str; 2] = ["notes", "clock"];

#[derive(Debug, Clone)]
enum Op {
    Open { id: Option<usize>, kind: usize },
    Close(usize),
    CloseByType(usize),
    Focus(usize),
    Pin(usize),
    Unpin(usize),
    Minimize(usize),
    Maximize(usize),
    Fullscreen(usize),
    Unfullscreen(usize),
    Move(usize, i32, i32),
    Resize(usize, u32, u32),
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn op_strategy() -> impl Strategy<Value = Op> {
    let id = 0..IDS.len() + 1;
    prop_oneof![
        4 => (proptest::option::of(0..IDS.len()), 0..KINDS.len())
            .prop_map(|(id, kind)| Op::Open { id, kind }),
        1 => id.clone().prop_map(Op::Close),
        1 => (0..KINDS.len()).prop_map(Op::CloseByType),
        3 => id.clone().prop_map(Op::Focus),
        2 => id.clone().prop_map(Op::Pin),
        2 => id.clone().prop_map(Op::Unpin),
        1 => id.clone().prop_map(Op::Minimize),
        1 => id.clone().prop_map(Op::Maximize),
        1 => id.clone().prop_map(Op::Fullscreen),
        1 => id.clone().prop_map(Op::Unfullscreen),
        2 => (id.clone(), -500i32..500, -500i32..500).prop_map(|(i, x, y)| Op::Move(i, x, y)),
        1 => (id, 1u32..900, 1u32..900).prop_map(|(i, w, h)| Op::Resize(i, w, h)),
    ]
}

/// Index `IDS.len()` names a window that never exists.
fn id_name(index: usize) -> &'static str {
    IDS.get(index).copied().unwrap_or("ghost")
}

fn apply(store: &mut WindowStore, op: &Op) -> Option<String> {
    match op {
        Op::Open { id, kind } => {
            let options = match id {
                Some(i) => OpenOptions::new().id(id_name(*i)),
                None => OpenOptions::new(),
            };
            store
                .open(KINDS[*kind], (), options)
                .map(|id| id.to_string())
        }
        Op::Close(i) => {
            store.close(id_name(*i));
            None
        }
        Op::CloseByType(k) => {
            store.close_by_type(KINDS[*k]);
            None
        }
        Op::Focus(i) => {
            store.focus(id_name(*i));
            None
        }
        Op::Pin(i) => {
            store.pin(id_name(*i));
            None
        }
        Op::Unpin(i) => {
            store.unpin(id_name(*i));
            None
        }
        Op::Minimize(i) => {
            store.minimize(id_name(*i));
            None
        }
        Op::Maximize(i) => {
            store.maximize(id_name(*i));
            None
        }
        Op::Fullscreen(i) => {
            store.fullscreen(id_name(*i));
            None
        }
        Op::Unfullscreen(i) => {
            store.unfullscreen(id_name(*i));
            None
        }
        Op::Move(i, x, y) => {
            store.move_window(id_name(*i), Point::new(*x, *y));
            None
        }
        Op::Resize(i, w, h) => {
            store.resize_window(id_name(*i), Size::new(*w, *h));
            None
        }
    }
}

fn check_stacking(store: &WindowStore) -> Result<(), TestCaseError> {
    let windows = store.windows();
    let focused = windows.iter().filter(|w| w.is_focused).count();
    prop_assert!(focused <= 1, "{} windows focused", focused);

    let lowest_pinned = windows.iter().filter(|w| w.is_pinned).map(|w| w.z_index).min();
    let highest_plain = windows.iter().filter(|w| !w.is_pinned).map(|w| w.z_index).max();
    if let (Some(pinned), Some(plain)) = (lowest_pinned, highest_plain) {
        prop_assert!(pinned > plain, "pinned z {} not above plain z {}", pinned, plain);
    }
    Ok(())
}

fn edge_strategy() -> impl Strategy<Value = ResizeEdge> {
    proptest::sample::select(ResizeEdge::ALL.to_vec())
}

// ═════════════════════════════════════════════════════════════════════════
// 1–5. Sequence invariants
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn sequences_keep_store_invariants(
        ops in proptest::collection::vec(op_strategy(), 1..80),
        pinned_offset in prop_oneof![Just(1000u32), 1u32..6],
    ) {
        // Small offsets let the plain band catch up with the pinned one.
        let config = StoreConfig::new(pinned_offset, Point::new(100, 100), Size::new(400, 300))
            .unwrap();
        let mut store: WindowStore = WindowStore::with_config(config);
        let mut expected: Vec<(String, &'static str)> = Vec::new();

        for op in &ops {
            let was_focused = match op {
                Op::Focus(i) => store.get_window(id_name(*i)).map(|w| w.is_focused),
                _ => None,
            };
            let was_pinned = match op {
                Op::Unpin(i) => store.get_window(id_name(*i)).map(|w| w.is_pinned),
                _ => None,
            };

            let opened = apply(&mut store, op);

            match op {
                Op::Open { kind, .. } => {
                    if let Some(id) = opened {
                        let window = store.get_window(&id).unwrap();
                        prop_assert!(window.is_focused);
                        expected.push((id, KINDS[*kind]));
                    }
                }
                Op::Close(i) => expected.retain(|(id, _)| id != id_name(*i)),
                Op::CloseByType(k) => expected.retain(|(_, kind)| *kind != KINDS[*k]),
                Op::Focus(i) if was_focused == Some(false) => {
                    let window = store.get_window(id_name(*i)).unwrap();
                    prop_assert!(window.is_focused);
                    let beaten = store.windows().iter().any(|w| {
                        w.id != window.id
                            && w.is_pinned == window.is_pinned
                            && w.z_index >= window.z_index
                    });
                    prop_assert!(!beaten, "focused window not on top of its band");
                }
                Op::Unpin(i) if was_pinned == Some(true) => {
                    let window = store.get_window(id_name(*i)).unwrap();
                    let others = store
                        .windows()
                        .iter()
                        .filter(|w| !w.is_pinned && w.id != window.id)
                        .map(|w| w.z_index)
                        .max();
                    prop_assert_eq!(window.z_index, others.map_or(1, |z| z + 1));
                }
                _ => {}
            }

            let actual: Vec<String> = store.windows().iter().map(|w| w.id.to_string()).collect();
            let modelled: Vec<String> = expected.iter().map(|(id, _)| id.clone()).collect();
            prop_assert_eq!(actual, modelled);
            check_stacking(&store)?;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Idempotence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn repeating_an_action_changes_nothing(
        setup in proptest::collection::vec(op_strategy(), 0..30),
        op in op_strategy(),
    ) {
        // An id-less open is a fresh window every time, so it is not a repeat.
        prop_assume!(!matches!(op, Op::Open { id: None, .. }));
        let mut store: WindowStore = WindowStore::new();
        for step in &setup {
            apply(&mut store, step);
        }

        apply(&mut store, &op);
        let once = store.windows().to_vec();
        let next_once = store.next_z_index();
        apply(&mut store, &op);
        prop_assert_eq!(store.windows(), once.as_slice());
        prop_assert_eq!(store.next_z_index(), next_once);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Resize clamp and fixed edges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resize_respects_minimum_and_anchors(
        x in -2000i32..2000,
        y in -2000i32..2000,
        w in 100u32..2000,
        h in 50u32..2000,
        edge in edge_strategy(),
        dx in -5000i32..5000,
        dy in -5000i32..5000,
    ) {
        let min = Size::new(100, 50);
        let start = Bounds::new(Point::new(x, y), Size::new(w, h));
        let frame = resize_frame(start, edge, Point::new(dx, dy), min);

        prop_assert!(frame.size.width >= min.width);
        prop_assert!(frame.size.height >= min.height);
        if edge.grabs_left() {
            prop_assert_eq!(frame.right(), start.right());
        } else {
            prop_assert_eq!(frame.origin.x, start.origin.x);
        }
        if edge.grabs_top() {
            prop_assert_eq!(frame.bottom(), start.bottom());
        } else {
            prop_assert_eq!(frame.origin.y, start.origin.y);
        }
        if !edge.grabs_left() && !edge.grabs_right() {
            prop_assert_eq!(frame.size.width, w);
        }
        if !edge.grabs_top() && !edge.grabs_bottom() {
            prop_assert_eq!(frame.size.height, h);
        }
    }
}
