//! Property-based tests for transition selection and the hook pipeline.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated machine shapes.

use proptest::prelude::*;
use statehook::{
    EventBuilder, EventPhase, FsmError, GlobalPhase, Guard, Machine, MachineBuilder,
    TransitionBuilder,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// One event whose candidates all leave `start`; candidate `i` goes to
/// `target_i` and carries the given guard outcomes.
fn candidate_machine(guard_outcomes: &[Vec<bool>]) -> Machine {
    let transitions = guard_outcomes.iter().enumerate().map(|(i, outcomes)| {
        TransitionBuilder::between("start", format!("target_{i}"))
            .guards(outcomes.iter().map(|&pass| if pass { Guard::always() } else { Guard::never() }))
    });

    MachineBuilder::new()
        .initial("start")
        .event(EventBuilder::new("go").transitions(transitions))
        .build()
        .unwrap()
}

prop_compose! {
    fn arbitrary_candidates()(
        outcomes in prop::collection::vec(prop::collection::vec(any::<bool>(), 0..4), 1..6)
    ) -> Vec<Vec<bool>> {
        outcomes
    }
}

proptest! {
    #[test]
    fn first_passing_candidate_wins(outcomes in arbitrary_candidates()) {
        let machine = candidate_machine(&outcomes);
        let expected = outcomes.iter().position(|guards| guards.iter().all(|&pass| pass));

        let result = machine.fire("go");

        match expected {
            Some(i) => {
                prop_assert!(result.is_ok());
                prop_assert_eq!(machine.current_state(), format!("target_{i}"));
            }
            None => {
                let is_cannot_transition = matches!(
                    result,
                    Err(FsmError::CannotTransition { ref state, ref event })
                        if state == "start" && event == "go"
                );
                prop_assert!(is_cannot_transition);
                prop_assert_eq!(machine.current_state(), "start");
            }
        }
    }

    #[test]
    fn can_fire_agrees_with_fire(outcomes in arbitrary_candidates()) {
        let machine = candidate_machine(&outcomes);
        let predicted = machine.can_fire("go");
        prop_assert_eq!(predicted, machine.fire("go").is_ok());
    }

    #[test]
    fn unregistered_events_never_change_state(name in "[a-z_]{1,12}") {
        prop_assume!(name != "go");
        let machine = candidate_machine(&[vec![]]);

        let is_not_registered = matches!(
            machine.fire(&name),
            Err(FsmError::EventNotRegistered { ref event }) if *event == name
        );
        prop_assert!(is_not_registered);
        prop_assert_eq!(machine.current_state(), "start");
    }

    #[test]
    fn ensure_pair_runs_once_per_resolved_dispatch(
        script in prop::collection::vec(0..3usize, 0..20),
        block_before in any::<bool>(),
    ) {
        let event_ensures = Arc::new(AtomicUsize::new(0));
        let global_ensures = Arc::new(AtomicUsize::new(0));
        let event_counter = Arc::clone(&event_ensures);
        let global_counter = Arc::clone(&global_ensures);

        let machine = MachineBuilder::new()
            .initial("off")
            .event(
                EventBuilder::new("toggle")
                    .transitions([
                        TransitionBuilder::between("off", "on"),
                        TransitionBuilder::between("on", "off"),
                    ])
                    .on(EventPhase::Before, move |_ctx| {
                        if block_before { Err("blocked".into()) } else { Ok(()) }
                    })
                    .on(EventPhase::Ensure, move |_ctx| {
                        event_counter.fetch_add(1, Ordering::SeqCst);
                        Ok(())
                    }),
            )
            .event(EventBuilder::new("stuck").transition(TransitionBuilder::between("never", "off")))
            .global(GlobalPhase::EnsureAllEvents, move |_ctx| {
                global_counter.fetch_add(1, Ordering::SeqCst);
                Ok(())
            })
            .build()
            .unwrap();

        let names = ["toggle", "stuck", "missing"];
        let mut toggles = 0;
        let mut resolved = 0;
        for &pick in &script {
            let _ = machine.fire(names[pick]);
            if pick == 0 { toggles += 1; }
            if pick < 2 { resolved += 1; }
        }

        prop_assert_eq!(event_ensures.load(Ordering::SeqCst), toggles);
        prop_assert_eq!(global_ensures.load(Ordering::SeqCst), resolved);

        let expected = if block_before || toggles % 2 == 0 { "off" } else { "on" };
        prop_assert_eq!(machine.current_state(), expected);
    }
}
