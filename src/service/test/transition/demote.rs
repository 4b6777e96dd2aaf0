use super::*;

/// Tests a regular one-step demotion.
///
/// Expected: Ok(Demoted) to Стрелок, audit and feed notified
#[tokio::test]
async fn demotes_one_rank_down() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Petr", &[SERGEANT]);
    let conversation = FakeConversation::new();

    let outcome = harness
        .transitions()
        .demote(&conversation, &actor, &target)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        TransitionOutcome::Demoted {
            role_name: "Стрелок".to_string()
        }
    );
    assert_eq!(harness.guild.roles_of(200), vec![RIFLEMAN]);
    assert_eq!(
        harness.guild.posts_to(AUDIT_LOG),
        vec!["<@100> понизил <@200> до роли Стрелок.".to_string()]
    );
    assert_eq!(
        harness.guild.posts_to(PUBLIC_FEED),
        vec!["# :arrow_down: <@200> понижен до роли Стрелок.".to_string()]
    );
}

#[tokio::test]
async fn rejects_peer_demotion() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Peer", &[COMMANDER]);
    let conversation = FakeConversation::new();

    let result = harness
        .transitions()
        .demote(&conversation, &actor, &target)
        .await;

    assert!(matches!(
        result,
        Err(TransitionError::RankOrder {
            kind: TransitionKind::Demote,
            ..
        })
    ));
    assert_eq!(harness.guild.roles_of(200), vec![COMMANDER]);
}

#[tokio::test]
async fn rejects_unauthorized_actor() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Rifleman", &[RIFLEMAN]);
    let target = harness.guild.join(200, "Recruit", &[RECRUIT]);
    let conversation = FakeConversation::new();

    let result = harness
        .transitions()
        .demote(&conversation, &actor, &target)
        .await;

    assert!(matches!(result, Err(TransitionError::Unauthorized { .. })));
    assert!(conversation.replies().is_empty());
}

/// Tests that the lowest rank cannot be demoted further.
///
/// Expected: Err(LadderBoundary), guest keeps the guest role
#[tokio::test]
async fn rejects_demotion_below_guest() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Guest", &[GUEST]);
    let conversation = FakeConversation::new();

    let result = harness
        .transitions()
        .demote(&conversation, &actor, &target)
        .await;

    assert!(matches!(
        result,
        Err(TransitionError::LadderBoundary {
            kind: TransitionKind::Demote,
            ..
        })
    ));
    assert_eq!(harness.guild.roles_of(200), vec![GUEST]);
}

/// Tests the probation exit prompt answered with "1".
///
/// Verifies that the prompt is posted, the wait uses the 30 second timeout and the
/// recruit's whole role set is replaced by the guest role.
///
/// Expected: Ok(ConvertedToGuest), roles exactly [Гость], audit entry posted
#[tokio::test]
async fn probation_exit_converts_to_guest() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Recruit", &[RECRUIT, 777, 888]);
    let conversation = FakeConversation::with_messages(&["1"]);

    let outcome = harness
        .transitions()
        .demote(&conversation, &actor, &target)
        .await
        .unwrap();

    assert_eq!(outcome, TransitionOutcome::ConvertedToGuest);
    assert_eq!(harness.guild.roles_of(200), vec![GUEST]);
    assert_eq!(
        conversation.replies(),
        vec![notice::PROBATION_EXIT_PROMPT.to_string()]
    );
    assert_eq!(
        *conversation.waits.lock().unwrap(),
        vec![PROBATION_EXIT_TIMEOUT]
    );
    assert_eq!(PROBATION_EXIT_TIMEOUT, Duration::from_secs(30));
    assert_eq!(
        harness.guild.posts_to(AUDIT_LOG),
        vec!["<@100> понизил <@200> до гостя.".to_string()]
    );
}

/// Tests the probation exit prompt answered with "2".
///
/// Expected: Ok(Removed), recruit notified and kicked, removal announced
#[tokio::test]
async fn probation_exit_removes_member() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Recruit", &[RECRUIT]);
    let conversation = FakeConversation::with_messages(&["2"]);

    let outcome = harness
        .transitions()
        .demote(&conversation, &actor, &target)
        .await
        .unwrap();

    assert_eq!(outcome, TransitionOutcome::Removed);
    assert_eq!(
        harness.guild.direct_messages_to(200),
        vec![notice::REMOVAL_DIRECT_MESSAGE.to_string()]
    );
    assert_eq!(
        *harness.guild.kicks.lock().unwrap(),
        vec![(200, notice::REMOVAL_REASON.to_string())]
    );
    assert_eq!(
        harness.guild.posts_to(PUBLIC_FEED),
        vec!["# :no_entry: <@200> больше не с нами.".to_string()]
    );
}

/// Tests that a recruit with closed direct messages is still removed.
///
/// Expected: Ok(Removed) and a kick despite the failed notification
#[tokio::test]
async fn removal_survives_direct_message_failure() {
    let harness = Harness::with_guild(FakeGuild::new(ROLES).failing_direct_messages());
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Recruit", &[RECRUIT]);
    let conversation = FakeConversation::with_messages(&["2"]);

    let outcome = harness
        .transitions()
        .demote(&conversation, &actor, &target)
        .await
        .unwrap();

    assert_eq!(outcome, TransitionOutcome::Removed);
    assert_eq!(harness.guild.kicks.lock().unwrap().len(), 1);
}

/// Tests that an unanswered prompt changes nothing.
///
/// Expected: Err(Timeout), recruit keeps their roles, no kick, no posts
#[tokio::test]
async fn probation_exit_times_out() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Recruit", &[RECRUIT]);
    let conversation = FakeConversation::new();

    let result = harness
        .transitions()
        .demote(&conversation, &actor, &target)
        .await;

    assert!(matches!(result, Err(TransitionError::Timeout)));
    assert_eq!(harness.guild.roles_of(200), vec![RECRUIT]);
    assert!(harness.guild.kicks.lock().unwrap().is_empty());
    assert_eq!(harness.guild.post_count(), 0);
}

/// Tests that chatter before the answer is ignored.
///
/// Only an exact "1" or "2" counts, so padded or unrelated messages are skipped.
///
/// Expected: Ok(Removed) from the first exact answer
#[tokio::test]
async fn probation_exit_ignores_other_messages() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Recruit", &[RECRUIT]);
    let conversation = FakeConversation::with_messages(&["хм", " 1", "2", "1"]);

    let outcome = harness
        .transitions()
        .demote(&conversation, &actor, &target)
        .await
        .unwrap();

    assert_eq!(outcome, TransitionOutcome::Removed);
}
