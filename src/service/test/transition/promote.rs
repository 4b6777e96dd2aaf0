use super::*;

/// Tests a regular one-step promotion.
///
/// Verifies that the target's old rank is replaced by the next rank up and that both
/// the audit log and the public feed are notified.
///
/// Expected: Ok(Promoted) to Сержант, target holds only the new rank
#[tokio::test]
async fn promotes_one_rank_up() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Командир Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Petr", &[RIFLEMAN]);

    let outcome = harness.transitions().promote(&actor, &target).await.unwrap();

    assert_eq!(
        outcome,
        TransitionOutcome::Promoted {
            role_name: "Сержант".to_string(),
            probation: false,
        }
    );
    assert_eq!(harness.guild.roles_of(200), vec![SERGEANT]);
    assert_eq!(
        harness.guild.posts_to(AUDIT_LOG),
        vec!["<@100> повысил <@200> до роли Сержант".to_string()]
    );
    assert_eq!(
        harness.guild.posts_to(PUBLIC_FEED),
        vec!["# :saluting_face: <@200> повышен до роли Сержант".to_string()]
    );
    assert!(harness.dates.get(200).is_none());
}

/// Tests promotion of a guest into the probation rank.
///
/// Verifies that the probation start date is recorded at the current instant, the
/// onboarding direct message and public welcome are sent, and the recruit timer
/// reports the full period right away.
///
/// Expected: Ok(Promoted { probation: true }), 14 days remaining
#[tokio::test]
async fn promotion_into_probation_starts_timer() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Newbie", &[GUEST]);

    let outcome = harness.transitions().promote(&actor, &target).await.unwrap();

    assert_eq!(
        outcome,
        TransitionOutcome::Promoted {
            role_name: "Рекрут".to_string(),
            probation: true,
        }
    );
    assert_eq!(harness.guild.roles_of(200), vec![RECRUIT]);
    assert_eq!(harness.dates.get(200), Some(fixed_now()));

    let direct = harness.guild.direct_messages_to(200);
    assert_eq!(direct.len(), 1);
    assert!(direct[0].contains("<@200> теперь в рекрутах"));
    assert!(direct[0].contains("!рекрут"));
    assert_eq!(
        harness.guild.posts_to(PUBLIC_FEED),
        vec!["<@200> теперь с нами! Идём в бой!".to_string()]
    );
    assert_eq!(harness.guild.posts_to(AUDIT_LOG).len(), 1);

    let recruit = harness.guild.member(200).await.unwrap();
    let status = RecruitService::new(&harness.guild, &harness.dates, &harness.config, &harness.clock)
        .check(&recruit)
        .await
        .unwrap();
    assert_eq!(status, RecruitStatus::Remaining(14));
}

/// Tests that re-entering probation overwrites an older start date.
///
/// Expected: stored date equals the current instant
#[tokio::test]
async fn reentering_probation_restarts_timer() {
    let harness = Harness::new();
    harness
        .dates
        .put(200, fixed_now() - chrono::Duration::days(40))
        .unwrap();
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Returning", &[GUEST]);

    harness.transitions().promote(&actor, &target).await.unwrap();

    assert_eq!(harness.dates.get(200), Some(fixed_now()));
}

/// Tests that a failing store write does not undo the promotion.
///
/// Expected: Ok(Promoted), roles changed, nothing stored
#[tokio::test]
async fn store_failure_does_not_block_probation_entry() {
    let harness = Harness {
        dates: InMemoryPromotionDates::failing_writes(),
        ..Harness::new()
    };
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Newbie", &[GUEST]);

    let outcome = harness.transitions().promote(&actor, &target).await;

    assert!(outcome.is_ok());
    assert_eq!(harness.guild.roles_of(200), vec![RECRUIT]);
    assert!(harness.dates.get(200).is_none());
}

/// Tests that members outside the authorization set cannot promote.
///
/// Expected: Err(Unauthorized), no role change, no posts
#[tokio::test]
async fn rejects_unauthorized_actor() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Sergeant", &[SERGEANT]);
    let target = harness.guild.join(200, "Newbie", &[GUEST]);

    let result = harness.transitions().promote(&actor, &target).await;

    assert!(matches!(
        result,
        Err(TransitionError::Unauthorized {
            kind: TransitionKind::Promote,
            actor_id: 100
        })
    ));
    assert_eq!(harness.guild.roles_of(200), vec![GUEST]);
    assert_eq!(harness.guild.post_count(), 0);
}

/// Tests the rank order rule for equal and higher targets.
///
/// Expected: Err(RankOrder) in both cases without mutation or audit entry
#[tokio::test]
async fn rejects_target_at_or_above_actor() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let peer = harness.guild.join(200, "Peer", &[COMMANDER]);
    let senior = harness.guild.join(300, "Senior", &[SENIOR_COMMANDER]);

    let equal = harness.transitions().promote(&actor, &peer).await;
    let higher = harness.transitions().promote(&actor, &senior).await;

    assert!(matches!(equal, Err(TransitionError::RankOrder { .. })));
    assert!(matches!(higher, Err(TransitionError::RankOrder { .. })));
    assert_eq!(harness.guild.roles_of(200), vec![COMMANDER]);
    assert_eq!(harness.guild.roles_of(300), vec![SENIOR_COMMANDER]);
    assert_eq!(harness.guild.post_count(), 0);
}

/// Tests that an actor may promote a target up to the actor's own rank.
///
/// Expected: Ok(Promoted) to Командир
#[tokio::test]
async fn promotes_target_directly_below_actor() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Sergeant", &[SERGEANT]);

    let outcome = harness.transitions().promote(&actor, &target).await.unwrap();

    assert_eq!(
        outcome,
        TransitionOutcome::Promoted {
            role_name: "Командир".to_string(),
            probation: false,
        }
    );
}

/// Tests that extra roles resolve to the highest rank held.
///
/// Verifies the actor holding Стрелок and КМД is treated as КМД and the target
/// holding Рекрут and Сержант is treated as Сержант.
///
/// Expected: Ok(Promoted) to Командир, both old rank roles handled
#[tokio::test]
async fn multiple_rank_roles_resolve_to_highest() {
    let harness = Harness::new();
    let actor = harness
        .guild
        .join(100, "Ivan", &[RIFLEMAN, SENIOR_COMMANDER]);
    let target = harness.guild.join(200, "Petr", &[RECRUIT, SERGEANT]);

    let outcome = harness.transitions().promote(&actor, &target).await.unwrap();

    assert_eq!(
        outcome,
        TransitionOutcome::Promoted {
            role_name: "Командир".to_string(),
            probation: false,
        }
    );
    assert_eq!(harness.guild.roles_of(200), vec![RECRUIT, COMMANDER]);
}

/// Tests that a destination rank missing from the guild is a rejection.
///
/// Expected: Err(UnresolvedRole), target unchanged
#[tokio::test]
async fn rejects_unresolved_destination_role() {
    let harness = Harness::with_guild(FakeGuild::new(ROLES).without_role(SERGEANT));
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Petr", &[RIFLEMAN]);

    let result = harness.transitions().promote(&actor, &target).await;

    assert!(matches!(
        result,
        Err(TransitionError::UnresolvedRole {
            role_id: SERGEANT,
            ..
        })
    ));
    assert_eq!(harness.guild.roles_of(200), vec![RIFLEMAN]);
}

#[tokio::test]
async fn rejects_target_without_rank() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Stranger", &[777]);

    let result = harness.transitions().promote(&actor, &target).await;

    assert!(matches!(
        result,
        Err(TransitionError::MissingRank { user_id: 200 })
    ));
}

/// Tests that audit and feed failures never roll back the role change.
///
/// Expected: Ok(Promoted) with the new rank applied
#[tokio::test]
async fn post_failures_are_not_fatal() {
    let harness = Harness::with_guild(FakeGuild::new(ROLES).failing_channel_posts());
    let actor = harness.guild.join(100, "Admin", &[ADMIN]);
    let target = harness.guild.join(200, "Petr", &[RIFLEMAN]);

    let result = harness.transitions().promote(&actor, &target).await;

    assert!(result.is_ok());
    assert_eq!(harness.guild.roles_of(200), vec![SERGEANT]);
}
