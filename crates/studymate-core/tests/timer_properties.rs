//! Property and scenario tests for the pomodoro state machine.

use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use studymate_core::events::Event;
use studymate_core::timer::{Completion, TimerCommand, TimerEngine, TimerMode, TimerPhase, TimerState};

fn mode() -> impl Strategy<Value = TimerMode> {
    prop_oneof![
        Just(TimerMode::Focus),
        Just(TimerMode::ShortBreak),
        Just(TimerMode::LongBreak),
    ]
}

fn command() -> impl Strategy<Value = TimerCommand> {
    prop_oneof![
        2 => Just(TimerCommand::Start),
        1 => Just(TimerCommand::Pause),
        6 => Just(TimerCommand::Tick),
        1 => mode().prop_map(TimerCommand::SelectMode),
        1 => Just(TimerCommand::Reset),
    ]
}

proptest! {
    #[test]
    fn invariants_hold_for_any_command_sequence(commands in prop::collection::vec(command(), 0..200)) {
        let mut state = TimerState::new();
        for cmd in commands {
            let before = state;
            let transition = state.apply(cmd);
            state = transition.state;

            prop_assert!(state.remaining_secs <= state.mode.duration_secs());
            prop_assert!(!(state.phase == TimerPhase::Running && state.remaining_secs == 0));
            prop_assert!((0.0..=1.0).contains(&state.progress()));
            prop_assert!(state.completed_focus_count >= before.completed_focus_count);
            if transition.completion.is_some() {
                prop_assert_eq!(before.remaining_secs, 1);
                prop_assert_eq!(state.phase, TimerPhase::Expired);
            }
        }
    }

    #[test]
    fn select_mode_always_lands_idle_with_full_duration(
        commands in prop::collection::vec(command(), 0..50),
        target in mode(),
    ) {
        let state = commands
            .into_iter()
            .fold(TimerState::new(), |s, cmd| s.apply(cmd).state);
        let next = state.apply(TimerCommand::SelectMode(target)).state;
        prop_assert_eq!(next.phase, TimerPhase::Idle);
        prop_assert_eq!(next.mode, target);
        prop_assert_eq!(next.remaining_secs, target.duration_secs());
        prop_assert_eq!(next.completed_focus_count, state.completed_focus_count);
    }

    #[test]
    fn display_is_mm_ss(secs in 0u64..=1500) {
        let state = TimerState { remaining_secs: secs, ..TimerState::new() };
        let display = state.display();
        prop_assert_eq!(display.len(), 5);
        prop_assert_eq!(&display[2..3], ":");
        prop_assert_eq!(format!("{:02}", secs / 60), &display[..2]);
    }
}

fn run_to_completion(engine: &mut TimerEngine) -> Option<Event> {
    engine.start();
    let mut last = None;
    while let Some(token) = engine.active_tick() {
        last = engine.tick(token);
    }
    last
}

#[test]
fn fourth_focus_recommends_long_break() {
    let mut engine = TimerEngine::new();
    let mut recommendations = Vec::new();
    for _ in 0..8 {
        engine.select_mode(TimerMode::Focus);
        match run_to_completion(&mut engine) {
            Some(Event::TimerCompleted { recommended_next, .. }) => recommendations.push(recommended_next),
            other => panic!("expected completion, got {other:?}"),
        }
    }
    use TimerMode::{LongBreak, ShortBreak};
    assert_eq!(
        recommendations,
        vec![ShortBreak, ShortBreak, ShortBreak, LongBreak, ShortBreak, ShortBreak, ShortBreak, LongBreak]
    );
    assert_eq!(engine.completed_focus_count(), 8);
}

#[test]
fn completing_a_break_does_not_switch_mode() {
    let mut engine = TimerEngine::new();
    engine.select_mode(TimerMode::ShortBreak);
    let event = run_to_completion(&mut engine);
    assert!(matches!(
        event,
        Some(Event::TimerCompleted { completed_mode: TimerMode::ShortBreak, recommended_next: TimerMode::Focus, .. })
    ));
    assert_eq!(engine.mode(), TimerMode::ShortBreak);
    assert_eq!(engine.phase(), TimerPhase::Expired);
    assert_eq!(engine.completed_focus_count(), 0);
}

#[test]
fn notifier_fires_once_per_expiry() {
    let seen: Rc<RefCell<Vec<Completion>>> = Rc::default();
    let sink = Rc::clone(&seen);
    let mut engine = TimerEngine::new();
    engine.add_notifier(Box::new(move |c: &Completion| sink.borrow_mut().push(*c)));

    run_to_completion(&mut engine);
    // Further ticks after expiry are ignored.
    assert!(engine.active_tick().is_none());
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0].completed_focus_count, 1);
}

#[test]
fn pause_and_resume_keeps_remaining_time() {
    let mut engine = TimerEngine::new();
    engine.start();
    for _ in 0..10 {
        let token = engine.active_tick().expect("armed");
        engine.tick(token);
    }
    let first = engine.active_tick().expect("armed");
    engine.pause();
    assert_eq!(engine.remaining_secs(), 1490);
    assert!(engine.tick(first).is_none());
    assert_eq!(engine.remaining_secs(), 1490);

    engine.start();
    let second = engine.active_tick().expect("re-armed");
    assert_ne!(first, second);
    engine.tick(second);
    assert_eq!(engine.display(), "24:49");
}
