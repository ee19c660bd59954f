use coach_types::*;

#[test]
fn message_constructors_set_role() {
    assert_eq!(ChatMessage::user("hi").role, Role::User);
    assert_eq!(ChatMessage::assistant("hello").role, Role::Assistant);
    assert_eq!(ChatMessage::system("be concise").role, Role::System);
}

#[test]
fn message_constructors_set_content() {
    let msg = ChatMessage::user("What went wrong on this call?");
    assert_eq!(msg.content, "What went wrong on this call?");
}

#[test]
fn coach_request_defaults_to_no_context() {
    let req = CoachChatRequest::new(vec![ChatMessage::user("hi")]);
    assert!(req.call_context.is_none());
}

#[test]
fn coach_request_builder_attaches_context() {
    let req = CoachChatRequest::new(vec![ChatMessage::user("hi")])
        .call_context("Rep: ...\nProspect: ...");
    assert_eq!(req.call_context.as_deref(), Some("Rep: ...\nProspect: ..."));
}

#[test]
fn transcript_request_keeps_scope() {
    let req = TranscriptChatRequest::new(
        vec![ChatMessage::user("Which calls mention pricing?")],
        vec!["t-1".into(), "t-2".into()],
    );
    assert_eq!(req.transcript_ids, vec!["t-1", "t-2"]);
    assert_eq!(req.messages.len(), 1);
}

#[test]
fn message_serde_roundtrip() {
    let msg = ChatMessage::assistant("Lead with the discovery question.");
    let json = serde_json::to_string(&msg).unwrap();
    let back: ChatMessage = serde_json::from_str(&json).unwrap();
    assert_eq!(back.role, Role::Assistant);
    assert_eq!(back.content, msg.content);
}
