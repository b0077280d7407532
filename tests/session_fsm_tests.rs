use pretty_assertions::assert_eq;
use souschef::{
    prompt::FeedbackIntent,
    session::{RequestKind, SessionEvent, SessionMachine, SessionState},
};

#[test]
fn test_initial_state_is_idle() {
    let machine = SessionMachine::new();
    assert_eq!(*machine.state(), SessionState::Idle);
    assert!(!machine.is_loading());
}

#[test]
fn test_generate_enters_loading_from_idle() {
    let mut machine = SessionMachine::new();
    machine.transition(SessionEvent::Generate).unwrap();
    assert_eq!(*machine.state(), SessionState::Loading(RequestKind::Initial));
    assert!(machine.is_loading());
}

#[test]
fn test_completion_success_stores_result_text() {
    let mut machine = SessionMachine::new();
    machine.transition(SessionEvent::Generate).unwrap();
    machine
        .transition(SessionEvent::CompletionSucceeded(
            "Spicy Tofu Stir-Fry...".to_string(),
        ))
        .unwrap();
    assert_eq!(
        *machine.state(),
        SessionState::Success("Spicy Tofu Stir-Fry...".to_string())
    );
}

#[test]
fn test_initial_failure_uses_generate_message() {
    let mut machine = SessionMachine::new();
    machine.transition(SessionEvent::Generate).unwrap();
    machine.transition(SessionEvent::CompletionFailed).unwrap();
    assert_eq!(
        *machine.state(),
        SessionState::Error("Failed to generate recipe. Please try again.".to_string())
    );
}

#[test]
fn test_feedback_failure_uses_regenerate_message() {
    let mut machine = SessionMachine::new();
    machine.transition(SessionEvent::Generate).unwrap();
    machine
        .transition(SessionEvent::CompletionSucceeded("A recipe".to_string()))
        .unwrap();
    machine
        .transition(SessionEvent::Feedback(FeedbackIntent::Disliked))
        .unwrap();
    assert_eq!(
        *machine.state(),
        SessionState::Loading(RequestKind::Feedback)
    );

    machine.transition(SessionEvent::CompletionFailed).unwrap();
    assert_eq!(
        *machine.state(),
        SessionState::Error("Failed to generate new recipe.".to_string())
    );
}

#[test]
fn test_entering_loading_discards_previous_result() {
    let mut machine = SessionMachine::new();
    machine.transition(SessionEvent::Generate).unwrap();
    machine
        .transition(SessionEvent::CompletionSucceeded("First".to_string()))
        .unwrap();

    machine
        .transition(SessionEvent::Feedback(FeedbackIntent::LikedButDifferent))
        .unwrap();
    // Loading carries no text; the prior result is gone
    assert_eq!(
        *machine.state(),
        SessionState::Loading(RequestKind::Feedback)
    );
}

#[test]
fn test_generate_is_allowed_from_error_state() {
    let mut machine = SessionMachine::new();
    machine.transition(SessionEvent::Generate).unwrap();
    machine.transition(SessionEvent::CompletionFailed).unwrap();

    machine.transition(SessionEvent::Generate).unwrap();
    assert_eq!(*machine.state(), SessionState::Loading(RequestKind::Initial));
}

#[test]
fn test_generate_is_allowed_from_success_state() {
    let mut machine = SessionMachine::new();
    machine.transition(SessionEvent::Generate).unwrap();
    machine
        .transition(SessionEvent::CompletionSucceeded("A recipe".to_string()))
        .unwrap();

    machine.transition(SessionEvent::Generate).unwrap();
    assert_eq!(*machine.state(), SessionState::Loading(RequestKind::Initial));
}

#[test]
fn test_generate_is_rejected_while_loading() {
    let mut machine = SessionMachine::new();
    machine.transition(SessionEvent::Generate).unwrap();

    let result = machine.transition(SessionEvent::Generate);
    assert!(result.is_err());
    assert_eq!(*machine.state(), SessionState::Loading(RequestKind::Initial));
}

#[test]
fn test_feedback_is_rejected_outside_success() {
    // From idle
    let mut machine = SessionMachine::new();
    assert!(
        machine
            .transition(SessionEvent::Feedback(FeedbackIntent::Disliked))
            .is_err()
    );

    // From loading
    let mut machine = SessionMachine::new();
    machine.transition(SessionEvent::Generate).unwrap();
    assert!(
        machine
            .transition(SessionEvent::Feedback(FeedbackIntent::Disliked))
            .is_err()
    );

    // From error: the only way out is a fresh generate
    let mut machine = SessionMachine::new();
    machine.transition(SessionEvent::Generate).unwrap();
    machine.transition(SessionEvent::CompletionFailed).unwrap();
    assert!(
        machine
            .transition(SessionEvent::Feedback(FeedbackIntent::LikedButDifferent))
            .is_err()
    );
    assert_eq!(machine.state().name(), "error");
}

#[test]
fn test_completion_events_are_rejected_outside_loading() {
    let mut machine = SessionMachine::new();
    assert!(
        machine
            .transition(SessionEvent::CompletionSucceeded("text".to_string()))
            .is_err()
    );
    assert!(machine.transition(SessionEvent::CompletionFailed).is_err());

    machine.transition(SessionEvent::Generate).unwrap();
    machine
        .transition(SessionEvent::CompletionSucceeded("text".to_string()))
        .unwrap();
    assert!(machine.transition(SessionEvent::CompletionFailed).is_err());
}
