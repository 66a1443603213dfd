//! End-to-end booking flow against the demo clinic with a scripted model

use reserva_core::{Orchestrator, OrchestratorConfig, Persona, PersonaRegistry};
use reserva_llm::{Message, MessageRole, MockProvider, ToolCall, ToolCompletionResponse};
use reserva_tools::{
    BookAppointmentTool, CheckAvailabilityTool, ContextVars, GetServicesTool, ToolRegistry,
    TransferTool,
};
use reserva_domain::seed::{demo_clinic, DemoClinic};
use reserva_domain::BookingLedger;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

fn call(id: &str, name: &str, arguments: serde_json::Value) -> ToolCall {
    ToolCall {
        id: id.to_string(),
        name: name.to_string(),
        arguments: arguments.to_string(),
    }
}

fn build_orchestrator(
    clinic: &DemoClinic,
    provider: Arc<MockProvider>,
    max_round_trips: usize,
) -> Orchestrator {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(GetServicesTool::new(clinic.catalog.clone())));
    registry.register(Arc::new(CheckAvailabilityTool::new(
        clinic.staff.clone(),
        clinic.catalog.clone(),
    )));
    registry.register(Arc::new(BookAppointmentTool::new(
        clinic.staff.clone(),
        clinic.catalog.clone(),
        clinic.ledger.clone(),
    )));
    registry.register(Arc::new(TransferTool::new(
        "scheduler",
        "Hand off to the scheduling assistant.",
    )));

    let personas = PersonaRegistry::new()
        .with_persona(Persona::new(
            "frontdesk",
            "You are the front desk of a dental clinic.",
        ))
        .with_persona(Persona::new(
            "scheduler",
            "You are the scheduling assistant of a dental clinic.",
        ));

    Orchestrator::new(
        provider,
        Arc::new(registry),
        personas,
        OrchestratorConfig::new().with_max_round_trips(max_round_trips),
    )
}

fn availability_args(time: &str) -> serde_json::Value {
    serde_json::json!({
        "employee": "Alice",
        "service": "Dental Cleaning",
        "date": "2025-06-01",
        "time": time
    })
}

fn booking_args(time: &str) -> serde_json::Value {
    serde_json::json!({
        "employee": "Alice",
        "service": "Dental Cleaning",
        "date": "2025-06-01",
        "time": time,
        "name": "Jane Doe",
        "phone": "555-0100"
    })
}

#[tokio::test]
async fn test_check_book_then_overlap_rejected() {
    let clinic = demo_clinic();
    let provider = Arc::new(MockProvider::new());
    let orchestrator = build_orchestrator(&clinic, provider.clone(), 10);

    // Turn 1: the model checks availability, then answers.
    provider.add_tool_response(ToolCompletionResponse::calls(vec![call(
        "call_1",
        "check_availability",
        availability_args("09:00"),
    )]));
    provider.add_tool_response(ToolCompletionResponse::text(
        "Alice is free at 09:00 on June 1st.",
    ));

    let mut history = vec![Message::user(
        "Is Alice free for a dental cleaning at 9am on 2025-06-01?",
    )];
    let outcome = orchestrator
        .run_turn(
            "scheduler",
            &history,
            ContextVars::new(),
            CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(outcome.messages[1].content, "true");
    assert_eq!(
        outcome.response.as_deref(),
        Some("Alice is free at 09:00 on June 1st.")
    );
    history.extend(outcome.messages);

    // Turn 2: the model books the confirmed slot.
    provider.add_tool_response(ToolCompletionResponse::calls(vec![call(
        "call_2",
        "book_appointment",
        booking_args("09:00"),
    )]));
    provider.add_tool_response(ToolCompletionResponse::text(
        "Your cleaning with Alice is booked for 09:00.",
    ));

    history.push(Message::user("Yes, book it. Jane Doe, 555-0100."));
    let outcome = orchestrator
        .run_turn(
            "scheduler",
            &history,
            ContextVars::new(),
            CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(outcome.messages[1].content, "\"ok\"");
    assert!(outcome.response.is_some());
    history.extend(outcome.messages);

    let saved = clinic.ledger.bookings_for("2025-06-01", 1).unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].customer_name, "Jane Doe");

    // Turn 3: an overlapping 09:30 attempt is rejected but keeps the
    // conversation alive.
    provider.add_tool_response(ToolCompletionResponse::calls(vec![call(
        "call_3",
        "book_appointment",
        booking_args("09:30"),
    )]));
    provider.add_tool_response(ToolCompletionResponse::text(
        "I'm sorry, that slot is already taken.",
    ));

    history.push(Message::user("Also book my husband at 09:30 with Alice."));
    let outcome = orchestrator
        .run_turn(
            "scheduler",
            &history,
            ContextVars::new(),
            CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(
        outcome.messages[1].content,
        "Error: employee is not available"
    );
    assert_eq!(
        outcome.response.as_deref(),
        Some("I'm sorry, that slot is already taken.")
    );
    assert_eq!(clinic.ledger.bookings_for("2025-06-01", 1).unwrap().len(), 1);
}

#[tokio::test]
async fn test_handoff_then_availability_in_one_turn() {
    let clinic = demo_clinic();
    let provider = Arc::new(MockProvider::new());
    let orchestrator = build_orchestrator(&clinic, provider.clone(), 10);

    // Round 1: the front desk hands off; round 2: the scheduler checks the
    // slot; round 3: final answer.
    provider.add_tool_response(ToolCompletionResponse::calls(vec![call(
        "call_1",
        "transfer_to_scheduler",
        serde_json::json!({}),
    )]));
    provider.add_tool_response(ToolCompletionResponse::calls(vec![call(
        "call_2",
        "check_availability",
        availability_args("10:00"),
    )]));
    provider.add_tool_response(ToolCompletionResponse::text("10:00 works, shall I book it?"));

    let history = vec![Message::user(
        "I'd like a cleaning with Alice tomorrow at 10.",
    )];
    let outcome = orchestrator
        .run_turn(
            "frontdesk",
            &history,
            ContextVars::new(),
            CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(outcome.active_persona, "scheduler");
    assert_eq!(outcome.response.as_deref(), Some("10:00 works, shall I book it?"));

    // the round after the handoff ran under the scheduler's instructions
    let requests = provider.recorded_requests();
    assert_eq!(requests.len(), 3);
    assert!(requests[0].request.messages[0]
        .content
        .contains("front desk"));
    assert!(requests[1].request.messages[0]
        .content
        .contains("scheduling assistant"));

    // history shape: assistant(transfer) + tool + assistant(check) + tool + final
    assert_eq!(outcome.messages.len(), 5);
    assert!(outcome.messages[0].has_tool_calls());
    assert_eq!(outcome.messages[1].role, MessageRole::Tool);
    assert_eq!(outcome.messages[3].content, "true");
    assert_eq!(outcome.messages[4].role, MessageRole::Assistant);
}
