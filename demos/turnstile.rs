//! Coin-operated Turnstile
//!
//! This example drives a turnstile through its events and shows the hook
//! pipeline at work.
//!
//! Key concepts:
//! - Guards reading host state (the coin box has room)
//! - Event and global hooks observing each dispatch
//! - A persister recording every committed state
//! - A checkpoint taken mid-run and used to rebuild the machine
//!
//! Run with: RUST_LOG=statehook=debug cargo run --example turnstile

use statehook::{
    Checkpoint, EventBuilder, EventPhase, GlobalPhase, Machine, MachineBuilder, TransitionBuilder,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const COIN_BOX_CAPACITY: usize = 2;

fn build(coins: Arc<AtomicUsize>, journal: Arc<Mutex<Vec<String>>>, resume: Option<&Checkpoint>) -> Machine {
    let room = Arc::clone(&coins);
    let counter = Arc::clone(&coins);

    let mut builder = MachineBuilder::new()
        .initial("locked")
        .event(
            EventBuilder::new("coin")
                .transition(
                    TransitionBuilder::between("locked", "unlocked")
                        .when(move || room.load(Ordering::SeqCst) < COIN_BOX_CAPACITY),
                )
                .on(EventPhase::After, move |_ctx| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }),
        )
        .event(EventBuilder::new("push").transition(TransitionBuilder::between("unlocked", "locked")))
        .global(GlobalPhase::BeforeAllEvents, |ctx| {
            println!("  -> {} (from {})", ctx.event_name(), ctx.machine().current_state());
            Ok(())
        })
        .persist_fn(move |state: &str| {
            journal
                .lock()
                .map_err(|e| e.to_string())?
                .push(state.to_string());
            Ok(())
        });

    if let Some(checkpoint) = resume {
        builder = builder.resume_from(checkpoint);
    }

    match builder.build() {
        Ok(machine) => machine,
        Err(err) => panic!("turnstile definition is invalid: {err}"),
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,statehook=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Turnstile Example ===\n");

    let coins = Arc::new(AtomicUsize::new(0));
    let journal = Arc::new(Mutex::new(Vec::new()));
    let machine = build(Arc::clone(&coins), Arc::clone(&journal), None);

    for event in ["coin", "push", "push", "coin"] {
        match machine.fire(event) {
            Ok(()) => println!("     now {}", machine.current_state()),
            Err(err) => println!("     rejected: {err}"),
        }
    }

    let checkpoint = machine.checkpoint();
    println!("\nCheckpoint:\n{}", checkpoint.to_json().unwrap_or_default());

    let restored = build(Arc::clone(&coins), Arc::clone(&journal), Some(&checkpoint));
    println!("\nRestored machine starts in {}", restored.current_state());

    for event in ["push", "coin"] {
        match restored.fire(event) {
            Ok(()) => println!("     now {}", restored.current_state()),
            Err(err) => println!("     rejected: {err}"),
        }
    }

    println!("\nCoins collected: {}", coins.load(Ordering::SeqCst));
    if let Ok(journal) = journal.lock() {
        println!("Persisted states: {:?}", *journal);
    }

    println!("\n=== Example Complete ===");
}
