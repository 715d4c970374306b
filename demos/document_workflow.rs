//! Document Approval Workflow
//!
//! This example demonstrates a multi-stage approval workflow.
//!
//! Key concepts:
//! - Linear workflow (draft -> review -> approved -> published)
//! - A rework edge back to draft
//! - Typed data-bag access with a serde payload
//!
//! Run with: cargo run --example document_workflow

use serde::{Deserialize, Serialize};
use tickstate::{allow, State, StateManager};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct ReviewOutcome {
    reviewer: String,
    round: u32,
    approved: bool,
}

fn main() {
    println!("=== Document Approval Workflow ===\n");

    let draft = State::builder("draft")
        .on_enter(|| println!("  back to the drawing board"))
        .build();

    let review_builder = State::builder("review");
    let review_bag = review_builder.data();
    let review = review_builder
        .on_enter(move || {
            let round = review_bag.get::<u32>("round").unwrap_or(0) + 1;
            review_bag.insert("round", round);
            println!("  review round {round} begins");
        })
        .build();

    let approved = State::builder("approved")
        .on_enter(|| println!("  sign-off recorded"))
        .build();
    let published = State::builder("published")
        .on_enter(|| println!("  live!"))
        .build();

    allow! {
        draft => review;
        review => approved, draft;
        approved => published;
    }

    let mut machine = StateManager::new(draft.clone());

    // First round: the reviewer bounces it.
    machine.next_state(&review);
    review
        .data()
        .set(
            "outcome",
            &ReviewOutcome {
                reviewer: "sam".to_string(),
                round: 1,
                approved: false,
            },
        )
        .expect("outcome encodes");
    machine.next_state(&draft);

    // Second round sticks.
    machine.next_state(&review);
    review
        .data()
        .set(
            "outcome",
            &ReviewOutcome {
                reviewer: "alex".to_string(),
                round: 2,
                approved: true,
            },
        )
        .expect("outcome encodes");
    machine.next_state(&approved);
    machine.next_state(&published);

    // Publishing is terminal: no edges were wired out of it.
    assert!(!machine.next_state(&draft));

    let outcome: ReviewOutcome = review.data().get("outcome").expect("outcome decodes");
    println!(
        "\nFinal state: {} (approved by {} in round {})",
        machine.current_state().name(),
        outcome.reviewer,
        outcome.round
    );

    println!("\n=== Example Complete ===");
}
