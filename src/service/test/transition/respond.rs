use super::*;

/// Tests that a completed transition is confirmed to the actor.
///
/// Expected: single reply naming the destination role
#[tokio::test]
async fn confirms_completed_transition() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Ivan", &[SENIOR_COMMANDER]);
    let target = harness.guild.join(200, "Petr", &[SERGEANT]);
    let conversation = FakeConversation::new();

    let result = harness
        .transitions()
        .respond(TransitionKind::Promote, &conversation, &actor, &target)
        .await;

    assert!(result.is_ok());
    assert_eq!(
        conversation.replies(),
        vec!["Успешно повышен до роли Командир".to_string()]
    );
}

/// Tests that a rejection is explained to the actor.
///
/// Expected: the rank order rejection text for demotion
#[tokio::test]
async fn explains_rejection() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Senior", &[SENIOR_COMMANDER]);
    let conversation = FakeConversation::new();

    let result = harness
        .transitions()
        .respond(TransitionKind::Demote, &conversation, &actor, &target)
        .await;

    let error = result.unwrap_err();
    assert!(error.is_rejection());
    assert_eq!(conversation.last_reply(), Some(error.user_message()));
}

/// Tests the prompt and the timeout notice of an unanswered probation exit.
///
/// Expected: the prompt followed by the timeout text
#[tokio::test]
async fn reports_probation_exit_timeout() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Recruit", &[RECRUIT]);
    let conversation = FakeConversation::new();

    let _ = harness
        .transitions()
        .respond(TransitionKind::Demote, &conversation, &actor, &target)
        .await;

    assert_eq!(
        conversation.replies(),
        vec![
            notice::PROBATION_EXIT_PROMPT.to_string(),
            TransitionError::Timeout.user_message(),
        ]
    );
}

#[tokio::test]
async fn ban_confirmation_mentions_target() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Admin", &[ADMIN]);
    let target = harness.guild.join(200, "Griefer", &[GUEST]);
    let conversation = FakeConversation::new();

    harness
        .transitions()
        .respond(TransitionKind::Ban, &conversation, &actor, &target)
        .await
        .unwrap();

    assert_eq!(
        conversation.last_reply(),
        Some("<@200> был успешно забанен.".to_string())
    );
}

/// Tests that the actor's request is acknowledged before the ban and its posts.
///
/// Verifies that slow side effects cannot delay the first answer to the actor.
///
/// Expected: ack, ban, audit post, public post, confirmation reply in that order
#[tokio::test]
async fn acknowledges_before_side_effects() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Admin", &[ADMIN]);
    let target = harness.guild.join(200, "Griefer", &[RIFLEMAN]);
    let journal = harness.guild.journal();
    let conversation = FakeConversation::new().sharing(journal.clone());

    let result = harness
        .transitions()
        .respond(TransitionKind::Ban, &conversation, &actor, &target)
        .await;

    assert_eq!(result.unwrap(), TransitionOutcome::Banned);
    assert_eq!(
        *journal.lock().unwrap(),
        vec![
            "ack".to_string(),
            "ban 200".to_string(),
            format!("post {}", AUDIT_LOG),
            format!("post {}", PUBLIC_FEED),
            "reply".to_string(),
        ]
    );
}
