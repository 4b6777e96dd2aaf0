use super::*;

#[tokio::test]
async fn bans_lower_ranked_target() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Admin", &[ADMIN]);
    let target = harness.guild.join(200, "Griefer", &[RIFLEMAN]);

    let outcome = harness.transitions().ban(&actor, &target).await.unwrap();

    assert_eq!(outcome, TransitionOutcome::Banned);
    assert_eq!(
        *harness.guild.bans.lock().unwrap(),
        vec![(200, notice::BAN_REASON.to_string())]
    );
    assert_eq!(
        harness.guild.posts_to(AUDIT_LOG),
        vec!["<@100> забанил игрока <@200>".to_string()]
    );
    assert_eq!(
        harness.guild.posts_to(PUBLIC_FEED),
        vec!["# :x: Игрок <@200> выгнан из клана за нарушение правил.".to_string()]
    );
}

/// Tests that an unauthorized ban attempt is recorded before it is rejected.
///
/// Expected: Err(Unauthorized), one audit entry naming actor and target, no ban
#[tokio::test]
async fn audits_unauthorized_attempt() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Rifleman", &[RIFLEMAN]);
    let target = harness.guild.join(200, "Recruit", &[RECRUIT]);

    let result = harness.transitions().ban(&actor, &target).await;

    assert!(matches!(
        result,
        Err(TransitionError::Unauthorized {
            kind: TransitionKind::Ban,
            ..
        })
    ));
    assert_eq!(
        harness.guild.posts_to(AUDIT_LOG),
        vec!["<@100> пытался забанить <@200>".to_string()]
    );
    assert!(harness.guild.posts_to(PUBLIC_FEED).is_empty());
    assert!(harness.guild.bans.lock().unwrap().is_empty());
}

/// Tests that senior members cannot be banned by a lower rank.
///
/// Expected: Err(RankOrder), no ban, no posts
#[tokio::test]
async fn rejects_higher_ranked_target() {
    let harness = Harness::new();
    let actor = harness.guild.join(100, "Ivan", &[COMMANDER]);
    let target = harness.guild.join(200, "Admin", &[ADMIN]);

    let result = harness.transitions().ban(&actor, &target).await;

    assert!(matches!(result, Err(TransitionError::RankOrder { .. })));
    assert!(harness.guild.bans.lock().unwrap().is_empty());
    assert_eq!(harness.guild.post_count(), 0);
}
