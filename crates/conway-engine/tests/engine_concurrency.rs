//! Engine behavior with the tick thread running alongside callers.

use std::thread;
use std::time::{Duration, Instant};

use conway_board::EdgeBehavior;
use conway_core::Coord;
use conway_engine::{ChangeCause, Engine, EngineConfig, EngineEvent, EVENT_QUEUE_CAPACITY};
use conway_test_utils::{coords, live_set, Pattern};

fn engine(width: u32, height: u32, edge: EdgeBehavior) -> Engine {
    Engine::new(EngineConfig {
        edge,
        ..EngineConfig::with_size(width, height)
    })
    .expect("valid config")
}

fn place(engine: &Engine, pattern: Pattern, origin: Coord) {
    for p in pattern.cells_at(origin) {
        engine.toggle_cell(p);
    }
}

#[test]
fn glider_settles_into_corner_block() {
    let e = engine(5, 5, EdgeBehavior::Absorb);
    place(&e, Pattern::Glider, Coord::ZERO);
    for _ in 0..40 {
        e.step();
    }
    assert_eq!(e.generation(), 40);
    let live = e.with_board(live_set);
    assert_eq!(live, coords(&[(3, 3), (4, 3), (3, 4), (4, 4)]));
}

#[test]
fn glider_translates_on_torus() {
    let e = engine(10, 10, EdgeBehavior::Wrap);
    place(&e, Pattern::Glider, Coord::new(2, 2));
    for _ in 0..4 {
        e.step();
    }
    let mut expected = Pattern::Glider.cells_at(Coord::new(3, 3));
    expected.sort();
    assert_eq!(e.with_board(live_set), expected);
}

#[test]
fn step_events_arrive_in_generation_order() {
    let mut e = engine(16, 16, EdgeBehavior::Wrap);
    e.randomize_with_seed(0.3, 11);
    let rx = e.subscribe();
    e.set_requested_rate(20.0);
    e.start().expect("spawn");
    for _ in 0..20 {
        e.step();
    }
    let deadline = Instant::now() + Duration::from_secs(5);
    while e.generation() < 25 && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(5));
    }
    e.stop();

    let generations: Vec<u64> = rx
        .try_iter()
        .filter_map(|ev| match ev {
            EngineEvent::Stepped(m) => Some(m.generation),
            _ => None,
        })
        .collect();
    assert!(generations.len() >= 25);
    for pair in generations.windows(2) {
        assert_eq!(pair[1], pair[0] + 1);
    }
}

#[test]
fn edits_during_run_keep_board_consistent() {
    let mut e = engine(32, 32, EdgeBehavior::Wrap);
    e.randomize_with_seed(0.3, 7);
    e.set_requested_rate(20.0);
    e.start().expect("spawn");

    let deadline = Instant::now() + Duration::from_millis(400);
    let mut last_generation = 0;
    let mut i = 0;
    while Instant::now() < deadline {
        e.toggle_cell(Coord::new(i % 32, (i * 7) % 32));
        let generation = e.generation();
        let (population, counted) = e.with_board(|b| {
            let counted = b.cells().iter().filter(|c| c.is_alive()).count();
            (b.population(), counted)
        });
        assert_eq!(population, counted);
        assert!(generation >= last_generation);
        last_generation = generation;
        i += 1;
        thread::sleep(Duration::from_millis(1));
    }
    e.stop();
    assert!(last_generation > 0);
}

#[test]
fn stop_is_prompt_at_slowest_rate() {
    let mut e = engine(8, 8, EdgeBehavior::Wrap);
    e.set_requested_rate(1.0);
    e.start().expect("spawn");
    thread::sleep(Duration::from_millis(100));
    let asked = Instant::now();
    e.stop();
    drop(e);
    assert!(asked.elapsed() < Duration::from_millis(500));
}

#[test]
fn restart_does_not_double_tick() {
    let mut e = engine(8, 8, EdgeBehavior::Wrap);
    e.set_requested_rate(1.0);
    for _ in 0..5 {
        e.start().expect("spawn");
        e.stop();
    }
    assert!(!e.is_running());
    thread::sleep(Duration::from_millis(50));
    assert_eq!(e.generation(), 0);
}

#[test]
fn board_change_events_carry_cause() {
    let e = engine(10, 10, EdgeBehavior::Wrap);
    let rx = e.subscribe();
    e.toggle_cell(Coord::new(1, 1));
    e.resize(12, 12);
    e.set_infinite(false);
    e.randomize_with_seed(0.5, 1);
    e.clear();
    let causes: Vec<ChangeCause> = rx
        .try_iter()
        .filter_map(|ev| match ev {
            EngineEvent::BoardChanged { cause, .. } => Some(cause),
            _ => None,
        })
        .collect();
    assert_eq!(
        causes,
        vec![
            ChangeCause::CellEdit,
            ChangeCause::Resize,
            ChangeCause::Topology,
            ChangeCause::Randomize,
            ChangeCause::Clear,
        ]
    );
}

#[test]
fn resize_event_reports_new_dimensions() {
    let e = engine(10, 10, EdgeBehavior::Wrap);
    let rx = e.subscribe();
    e.resize(20, 15);
    assert_eq!(
        rx.try_recv(),
        Ok(EngineEvent::BoardChanged {
            cause: ChangeCause::Resize,
            generation: 0,
            population: 0,
            width: 20,
            height: 15,
        })
    );
}

#[test]
fn idle_subscriber_holds_bounded_backlog() {
    let e = engine(32, 32, EdgeBehavior::Wrap);
    let idle = e.subscribe();
    for i in 0..20_000 {
        e.toggle_cell(Coord::new(i % 32, (i / 32) % 32));
    }
    assert!(idle.len() <= EVENT_QUEUE_CAPACITY);

    // Still subscribed: once drained, new events arrive again.
    idle.try_iter().for_each(drop);
    e.step();
    assert!(matches!(idle.try_recv(), Ok(EngineEvent::Stepped(_))));
}
