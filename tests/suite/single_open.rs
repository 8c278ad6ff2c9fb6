//! Arbitrary interleavings of gestures, commands, unmounts and frames never
//! leave more than one row open.

use linkman_core::{GestureSample, ListEvent, RevealState, SwipeList};
use proptest::prelude::*;

use crate::common::{FRAME, conversation_list, id, settle};

const ROWS: [&str; 5] = ["r0", "r1", "r2", "r3", "r4"];

#[derive(Debug, Clone)]
enum Op {
    GestureStart(usize),
    GestureMove { dx: f32, dy: f32 },
    GestureEnd { velocity_x: f32 },
    GestureTerminate,
    Open(usize),
    Close(usize),
    PressAction { row: usize, slot: usize },
    TapOutside,
    ScrollBegan,
    Blur,
    Unmount(usize),
    Mount(usize),
    Tick(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let row = 0..ROWS.len();
    prop_oneof![
        3 => row.clone().prop_map(Op::GestureStart),
        4 => (-300.0_f32..20.0, -30.0_f32..30.0).prop_map(|(dx, dy)| Op::GestureMove { dx, dy }),
        2 => (-3.0_f32..3.0).prop_map(|velocity_x| Op::GestureEnd { velocity_x }),
        1 => Just(Op::GestureTerminate),
        2 => row.clone().prop_map(Op::Open),
        2 => row.clone().prop_map(Op::Close),
        1 => (row.clone(), 0_usize..4).prop_map(|(row, slot)| Op::PressAction { row, slot }),
        1 => Just(Op::TapOutside),
        1 => Just(Op::ScrollBegan),
        1 => Just(Op::Blur),
        1 => row.clone().prop_map(Op::Unmount),
        1 => row.prop_map(Op::Mount),
        4 => (1_u8..6).prop_map(Op::Tick),
    ]
}

/// Last pointer position of the gesture in flight.
#[derive(Default)]
struct Pointer {
    dx: f32,
    dy: f32,
}

fn apply(list: &mut SwipeList, pointer: &mut Pointer, op: &Op) {
    match *op {
        Op::GestureStart(row) => {
            *pointer = Pointer::default();
            list.gesture_start(&id(ROWS[row]));
        }
        Op::GestureMove { dx, dy } => {
            *pointer = Pointer { dx, dy };
            list.gesture_move(GestureSample::moved(dx, dy));
        }
        Op::GestureEnd { velocity_x } => {
            list.gesture_end(GestureSample::new(pointer.dx, pointer.dy, velocity_x));
        }
        Op::GestureTerminate => list.gesture_terminate(),
        Op::Open(row) => list.open(&id(ROWS[row])),
        Op::Close(row) => list.close(&id(ROWS[row])),
        Op::PressAction { row, slot } => {
            list.press_action(&id(ROWS[row]), slot);
        }
        Op::TapOutside => list.tap_outside(),
        Op::ScrollBegan => list.scroll_began(),
        Op::Blur => list.blur(),
        Op::Unmount(row) => list.unmount(&id(ROWS[row])),
        Op::Mount(row) => list.mount(id(ROWS[row])),
        Op::Tick(frames) => {
            for _ in 0..frames {
                list.tick(FRAME);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn at_most_one_row_open(ops in prop::collection::vec(op_strategy(), 0..400)) {
        let mut list = conversation_list(&ROWS);
        let mut pointer = Pointer::default();

        for op in &ops {
            apply(&mut list, &mut pointer, op);
            prop_assert!(list.open_intent_count() <= 1, "after {:?}: {:?}", op, list);
            if let Some(open) = list.open_row() {
                let state = list.state(open);
                prop_assert!(
                    state.is_some_and(RevealState::is_open_intent)
                        || state == Some(RevealState::Dragging),
                    "after {:?}: coordinator names {} in {:?}",
                    op,
                    open,
                    state
                );
            }
        }

        list.gesture_terminate();
        settle(&mut list);
        for row in list.rows() {
            let offset = row.offset().get();
            prop_assert!(
                offset == 0.0 || offset == -240.0,
                "{} rests at {}",
                row.id(),
                offset
            );
        }
    }
}

#[test]
fn opening_every_row_in_turn_leaves_only_the_last() {
    let mut list = conversation_list(&ROWS);
    for raw in ROWS {
        list.open(&id(raw));
        list.tick(FRAME);
        assert_eq!(list.open_row(), Some(&id(raw)));
    }
    let events = settle(&mut list);
    assert!(events.contains(&ListEvent::Opened(id("r4"))));
    assert_eq!(list.open_intent_count(), 1);
    for raw in &ROWS[..4] {
        assert_eq!(list.state(&id(raw)), Some(RevealState::Closed));
    }
}
