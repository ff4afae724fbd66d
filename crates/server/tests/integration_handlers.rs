//! # Integration Tests for Server Handlers
//!
//! Exercises the policy engine through the handler layer against a real
//! Postgres database. Every test skips cleanly when `DATABASE_URL` is not
//! set.

mod common;

use server::{
    dto::{
        pull_requests::{CreatePullRequestRequest, MergePullRequestRequest, ReassignReviewerRequest},
        statistics::ReviewersAmountQuery,
        teams::{AddTeamRequest, GetTeamQuery, TeamMemberDto},
        users::{DeactivateManyRequest, GetReviewQuery, ReassignmentOutcome, SetIsActiveRequest},
    },
    handlers::{
        pull_request::{create_pull_request_handler, merge_pull_request_handler, reassign_reviewer_handler},
        statistics::reviewers_amount_handler,
        team::{add_team_handler, get_team_handler},
        users::{deactivate_many_handler, get_review_handler, set_is_active_handler},
    },
    AppState,
};

macro_rules! require_db {
    () => {
        match common::test_state().await {
            Some(state) => state,
            None => {
                eprintln!("skipping: DATABASE_URL not set");
                return;
            },
        }
    };
}

/// Create a pull request and return (pr_id, assigned reviewer ids)
async fn create_pr(state: &AppState, author_id: &str) -> (String, Vec<String>) {
    let pr_id = format!("pr-{}", common::unique_id());
    let response = create_pull_request_handler(state, CreatePullRequestRequest {
        pull_request_id:   pr_id.clone(),
        pull_request_name: "Fix bug".to_string(),
        author_id:         author_id.to_string(),
    })
    .await
    .expect("Failed to create pull request");
    (pr_id, response.0.pr.assigned_reviewers)
}

// ==================== Team Handler Tests ====================

#[tokio::test]
async fn test_add_team_then_get_team_round_trip() {
    let state = require_db!();

    let run = common::unique_id();
    let team_name = format!("team-{}", run);
    let member = TeamMemberDto {
        user_id:   format!("u1-{}", run),
        username:  "Alice".to_string(),
        is_active: true,
    };

    let (status, _) = add_team_handler(&state, AddTeamRequest {
        team_name: team_name.clone(),
        members:   vec![member.clone()],
    })
    .await
    .expect("Failed to add team");
    assert_eq!(status.as_u16(), 201);

    let team = get_team_handler(&state, GetTeamQuery {
        team_name: team_name.clone(),
    })
    .await
    .expect("Failed to get team");
    assert_eq!(team.0.team_name, team_name);
    assert_eq!(team.0.members, vec![member]);
}

#[tokio::test]
async fn test_add_team_duplicate_fails_with_team_exists() {
    let state = require_db!();

    let (team_name, _) = common::create_team_fixture(&state, 1).await;
    let err = add_team_handler(&state, AddTeamRequest {
        team_name,
        members: vec![],
    })
    .await
    .unwrap_err();

    assert_eq!(err.code(), "TEAM_EXISTS");
    assert_eq!(err.status().as_u16(), 400);
}

#[tokio::test]
async fn test_add_team_upserts_existing_member() {
    let state = require_db!();

    let (_, users) = common::create_team_fixture(&state, 1).await;
    let moved_user = users[0].clone();

    // a second team claims the same user with a new username
    let run = common::unique_id();
    let second_team = format!("team-{}", run);
    add_team_handler(&state, AddTeamRequest {
        team_name: second_team.clone(),
        members:   vec![TeamMemberDto {
            user_id:   moved_user.clone(),
            username:  "Renamed".to_string(),
            is_active: false,
        }],
    })
    .await
    .expect("Failed to add second team");

    let team = get_team_handler(&state, GetTeamQuery {
        team_name: second_team,
    })
    .await
    .expect("Failed to get second team");
    assert_eq!(team.0.members.len(), 1);
    assert_eq!(team.0.members[0].user_id, moved_user);
    assert_eq!(team.0.members[0].username, "Renamed");
    assert!(!team.0.members[0].is_active);
}

#[tokio::test]
async fn test_get_team_unknown_fails_with_not_found() {
    let state = require_db!();

    let err = get_team_handler(&state, GetTeamQuery {
        team_name: format!("missing-{}", common::unique_id()),
    })
    .await
    .unwrap_err();

    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.status().as_u16(), 404);
}

// ==================== Pull Request Handler Tests ====================

#[tokio::test]
async fn test_create_assigns_two_lowest_active_teammates() {
    let state = require_db!();

    let (_, users) = common::create_team_fixture(&state, 5).await;
    let author = &users[0];

    let (_, reviewers) = create_pr(&state, author).await;

    assert_eq!(reviewers, vec![users[1].clone(), users[2].clone()]);
    assert!(!reviewers.contains(author));
}

#[tokio::test]
async fn test_create_with_no_active_teammates_assigns_nobody() {
    let state = require_db!();

    let run = common::unique_id();
    let team_name = format!("team-{}", run);
    let author = format!("u1-{}", run);
    add_team_handler(&state, AddTeamRequest {
        team_name,
        members: vec![
            TeamMemberDto {
                user_id:   author.clone(),
                username:  "Author".to_string(),
                is_active: true,
            },
            TeamMemberDto {
                user_id:   format!("u2-{}", run),
                username:  "Idle".to_string(),
                is_active: false,
            },
        ],
    })
    .await
    .expect("Failed to add team");

    let (_, reviewers) = create_pr(&state, &author).await;
    assert!(reviewers.is_empty());
}

#[tokio::test]
async fn test_create_duplicate_id_fails_with_pr_exists() {
    let state = require_db!();

    let (_, users) = common::create_team_fixture(&state, 2).await;
    let (pr_id, _) = create_pr(&state, &users[0]).await;

    let err = create_pull_request_handler(&state, CreatePullRequestRequest {
        pull_request_id:   pr_id,
        pull_request_name: "Another name".to_string(),
        author_id:         users[1].clone(),
    })
    .await
    .unwrap_err();

    assert_eq!(err.code(), "PR_EXISTS");
    assert_eq!(err.status().as_u16(), 409);
}

#[tokio::test]
async fn test_create_unknown_author_fails_with_not_found() {
    let state = require_db!();

    let err = create_pull_request_handler(&state, CreatePullRequestRequest {
        pull_request_id:   format!("pr-{}", common::unique_id()),
        pull_request_name: "Fix bug".to_string(),
        author_id:         format!("ghost-{}", common::unique_id()),
    })
    .await
    .unwrap_err();

    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.status().as_u16(), 404);
}

#[tokio::test]
async fn test_merge_transitions_open_to_merged_once() {
    let state = require_db!();

    let (_, users) = common::create_team_fixture(&state, 3).await;
    let (pr_id, reviewers) = create_pr(&state, &users[0]).await;

    let merged = merge_pull_request_handler(&state, MergePullRequestRequest {
        pull_request_id: pr_id.clone(),
    })
    .await
    .expect("Failed to merge");
    assert_eq!(
        merged.0.pr.status,
        entity::sea_orm_active_enums::PullRequestStatus::Merged
    );
    assert!(merged.0.pr.merged_at.is_some());
    assert_eq!(merged.0.pr.assigned_reviewers, reviewers);

    // re-merge is not rejected; status stays MERGED and merged_at refreshes
    let remerged = merge_pull_request_handler(&state, MergePullRequestRequest {
        pull_request_id: pr_id,
    })
    .await
    .expect("Failed to re-merge");
    assert_eq!(
        remerged.0.pr.status,
        entity::sea_orm_active_enums::PullRequestStatus::Merged
    );
    assert!(remerged.0.pr.merged_at.is_some());
}

#[tokio::test]
async fn test_merge_unknown_fails_with_not_found() {
    let state = require_db!();

    let err = merge_pull_request_handler(&state, MergePullRequestRequest {
        pull_request_id: format!("missing-{}", common::unique_id()),
    })
    .await
    .unwrap_err();

    assert_eq!(err.code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_reassign_picks_lowest_eligible_candidate() {
    let state = require_db!();

    let (_, users) = common::create_team_fixture(&state, 5).await;
    let (pr_id, reviewers) = create_pr(&state, &users[0]).await;
    assert_eq!(reviewers, vec![users[1].clone(), users[2].clone()]);

    let response = reassign_reviewer_handler(&state, ReassignReviewerRequest {
        pull_request_id: pr_id,
        old_user_id:     users[1].clone(),
    })
    .await
    .expect("Failed to reassign");

    // u3 is already assigned and u1 authored the PR, so u4 is next by id
    assert_eq!(response.0.replaced_by, users[3]);
    assert_eq!(
        response.0.pr.assigned_reviewers,
        vec![users[2].clone(), users[3].clone()]
    );
}

#[tokio::test]
async fn test_reassign_on_merged_pr_fails_and_freezes_assignments() {
    let state = require_db!();

    let (_, users) = common::create_team_fixture(&state, 5).await;
    let (pr_id, reviewers) = create_pr(&state, &users[0]).await;

    merge_pull_request_handler(&state, MergePullRequestRequest {
        pull_request_id: pr_id.clone(),
    })
    .await
    .expect("Failed to merge");

    let err = reassign_reviewer_handler(&state, ReassignReviewerRequest {
        pull_request_id: pr_id.clone(),
        old_user_id:     users[1].clone(),
    })
    .await
    .unwrap_err();
    assert_eq!(err.code(), "PR_MERGED");
    assert_eq!(err.status().as_u16(), 409);

    // assignments unchanged
    let counts = reviewers_amount_handler(&state, ReviewersAmountQuery {
        pull_request_id: Some(pr_id.clone()),
    })
    .await
    .expect("Failed to count reviewers");
    assert_eq!(
        counts.0.reviewers_amount.get(&pr_id),
        Some(&(reviewers.len() as i64))
    );
}

#[tokio::test]
async fn test_reassign_unassigned_reviewer_fails_with_not_assigned() {
    let state = require_db!();

    let (_, users) = common::create_team_fixture(&state, 5).await;
    let (pr_id, _) = create_pr(&state, &users[0]).await;

    let err = reassign_reviewer_handler(&state, ReassignReviewerRequest {
        pull_request_id: pr_id,
        old_user_id:     users[4].clone(),
    })
    .await
    .unwrap_err();

    assert_eq!(err.code(), "NOT_ASSIGNED");
}

#[tokio::test]
async fn test_reassign_with_exhausted_team_fails_with_no_candidate() {
    let state = require_db!();

    // author + two reviewers: nobody is left to take over
    let (_, users) = common::create_team_fixture(&state, 3).await;
    let (pr_id, _) = create_pr(&state, &users[0]).await;

    let err = reassign_reviewer_handler(&state, ReassignReviewerRequest {
        pull_request_id: pr_id,
        old_user_id:     users[1].clone(),
    })
    .await
    .unwrap_err();

    assert_eq!(err.code(), "NO_CANDIDATE");
}

// ==================== User Handler Tests ====================

#[tokio::test]
async fn test_set_is_active_round_trip() {
    let state = require_db!();

    let (_, users) = common::create_team_fixture(&state, 1).await;

    let user = set_is_active_handler(&state, SetIsActiveRequest {
        user_id:   users[0].clone(),
        is_active: false,
    })
    .await
    .expect("Failed to set is_active");
    assert_eq!(user.0.user_id, users[0]);
    assert!(!user.0.is_active);
}

#[tokio::test]
async fn test_set_is_active_unknown_user_is_bad_request() {
    let state = require_db!();

    let err = set_is_active_handler(&state, SetIsActiveRequest {
        user_id:   format!("ghost-{}", common::unique_id()),
        is_active: true,
    })
    .await
    .unwrap_err();

    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.status().as_u16(), 400);
}

#[tokio::test]
async fn test_get_review_placeholder_row_for_idle_user() {
    let state = require_db!();

    let (_, users) = common::create_team_fixture(&state, 1).await;

    let reviews = get_review_handler(&state, GetReviewQuery {
        user_id: users[0].clone(),
    })
    .await
    .expect("Failed to get reviews");

    assert_eq!(reviews.0.members.len(), 1);
    assert!(reviews.0.members[0].pull_request_id.is_none());
    assert!(reviews.0.members[0].status.is_none());
}

#[tokio::test]
async fn test_get_review_lists_assigned_pull_requests() {
    let state = require_db!();

    let (_, users) = common::create_team_fixture(&state, 3).await;
    let (pr_id, reviewers) = create_pr(&state, &users[0]).await;

    let reviews = get_review_handler(&state, GetReviewQuery {
        user_id: reviewers[0].clone(),
    })
    .await
    .expect("Failed to get reviews");

    assert_eq!(reviews.0.members.len(), 1);
    assert_eq!(reviews.0.members[0].pull_request_id.as_deref(), Some(pr_id.as_str()));
    assert_eq!(reviews.0.members[0].author_id.as_deref(), Some(users[0].as_str()));
}

#[tokio::test]
async fn test_get_review_unknown_user_fails_with_not_found() {
    let state = require_db!();

    let err = get_review_handler(&state, GetReviewQuery {
        user_id: format!("ghost-{}", common::unique_id()),
    })
    .await
    .unwrap_err();

    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.status().as_u16(), 404);
}

#[tokio::test]
async fn test_deactivate_many_reports_outcomes_per_user() {
    let state = require_db!();

    let (_, users) = common::create_team_fixture(&state, 5).await;
    let (_, reviewers) = create_pr(&state, &users[0]).await;
    assert_eq!(reviewers, vec![users[1].clone(), users[2].clone()]);

    // users[1] reviews the PR, users[4] reviews nothing
    let response = deactivate_many_handler(&state, DeactivateManyRequest {
        users: vec![users[1].clone(), users[4].clone()],
    })
    .await
    .expect("Failed to deactivate users");

    let reassignments = &response.0.reassignments;
    assert_eq!(reassignments.len(), 2);

    let first = reassignments.get(&users[1]).expect("missing first user");
    assert_eq!(first.len(), 1);
    match &first[0] {
        ReassignmentOutcome::Reassigned(reassigned) => {
            // users[2] is assigned and users[0] authored, so users[3] steps in
            assert_eq!(reassigned.replaced_by, users[3]);
        },
        ReassignmentOutcome::Failed(body) => panic!("expected reassignment, got {:?}", body),
    }

    let second = reassignments.get(&users[4]).expect("missing second user");
    assert!(second.is_empty());

    // both users are now inactive
    for user_id in [&users[1], &users[4]] {
        let user = set_is_active_handler(&state, SetIsActiveRequest {
            user_id:   user_id.clone(),
            is_active: false,
        })
        .await
        .expect("Failed to read back user");
        assert!(!user.0.is_active);
    }
}

#[tokio::test]
async fn test_deactivate_many_records_failed_reassignments() {
    let state = require_db!();

    // author + two reviewers: deactivating a reviewer leaves no candidate
    let (_, users) = common::create_team_fixture(&state, 3).await;
    create_pr(&state, &users[0]).await;

    let response = deactivate_many_handler(&state, DeactivateManyRequest {
        users: vec![users[1].clone()],
    })
    .await
    .expect("Failed to deactivate user");

    let outcomes = response.0.reassignments.get(&users[1]).expect("missing user");
    assert_eq!(outcomes.len(), 1);
    match &outcomes[0] {
        ReassignmentOutcome::Failed(body) => {
            assert_eq!(body.error.code, "NO_CANDIDATE");
        },
        ReassignmentOutcome::Reassigned(reassigned) => {
            panic!("expected failure, got replacement {}", reassigned.replaced_by)
        },
    }
}

#[tokio::test]
async fn test_deactivate_many_unknown_user_aborts_batch() {
    let state = require_db!();

    let err = deactivate_many_handler(&state, DeactivateManyRequest {
        users: vec![format!("ghost-{}", common::unique_id())],
    })
    .await
    .unwrap_err();

    assert_eq!(err.code(), "NOT_FOUND");
    assert_eq!(err.status().as_u16(), 404);
}

// ==================== Statistics Handler Tests ====================

#[tokio::test]
async fn test_reviewers_amount_for_single_pull_request() {
    let state = require_db!();

    let (_, users) = common::create_team_fixture(&state, 4).await;
    let (pr_id, reviewers) = create_pr(&state, &users[0]).await;
    assert_eq!(reviewers.len(), 2);

    let counts = reviewers_amount_handler(&state, ReviewersAmountQuery {
        pull_request_id: Some(pr_id.clone()),
    })
    .await
    .expect("Failed to count reviewers");

    assert_eq!(counts.0.reviewers_amount.len(), 1);
    assert_eq!(counts.0.reviewers_amount.get(&pr_id), Some(&2));
}

#[tokio::test]
async fn test_reviewers_amount_omits_zero_reviewer_pull_requests() {
    let state = require_db!();

    // a team of one: the author's PR gets no reviewers
    let (_, users) = common::create_team_fixture(&state, 1).await;
    let (pr_id, reviewers) = create_pr(&state, &users[0]).await;
    assert!(reviewers.is_empty());

    let counts = reviewers_amount_handler(&state, ReviewersAmountQuery {
        pull_request_id: Some(pr_id.clone()),
    })
    .await
    .expect("Failed to count reviewers");

    // the PR exists, so no 404 - but it carries no assignment rows and is
    // simply absent from the result
    assert!(counts.0.reviewers_amount.get(&pr_id).is_none());
}

#[tokio::test]
async fn test_reviewers_amount_unknown_pull_request_fails_with_not_found() {
    let state = require_db!();

    let err = reviewers_amount_handler(&state, ReviewersAmountQuery {
        pull_request_id: Some(format!("missing-{}", common::unique_id())),
    })
    .await
    .unwrap_err();

    assert_eq!(err.code(), "NOT_FOUND");
}
