//! Repository contract shared by every ChatRepository adapter
//!
//! Each check only looks at chats and users it creates itself, so the suite
//! can run against a database that already holds data.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use chat_core::entities::{Chat, Invitation, Participant};
use chat_core::error::DomainError;
use chat_core::traits::{find_chat, ChatFilter, ChatRepository};

/// Chat with a chief, one member, and one invitation sent by the member
pub struct Seeded {
    pub chat: Chat,
    pub chief: Uuid,
    pub member: Uuid,
    pub invitation: Invitation,
}

pub fn seeded_chat() -> Seeded {
    let chief = Uuid::new_v4();
    let member = Uuid::new_v4();
    let mut chat = Chat::new("contract chat", chief).unwrap();
    chat.add_participant(Participant::new(member).unwrap()).unwrap();
    let invitation = Invitation::new(member, Uuid::new_v4()).unwrap();
    chat.add_invitation(invitation).unwrap();
    Seeded {
        chat,
        chief,
        member,
        invitation,
    }
}

pub async fn upsert_then_find(repo: &dyn ChatRepository) {
    let seeded = seeded_chat();
    repo.upsert(&seeded.chat).await.unwrap();

    let found = find_chat(repo, &ChatFilter::by_id(seeded.chat.id()))
        .await
        .unwrap();
    assert_eq!(found, seeded.chat);
}

pub async fn upsert_replaces_children(repo: &dyn ChatRepository) {
    let Seeded {
        mut chat,
        member,
        invitation,
        ..
    } = seeded_chat();
    repo.upsert(&chat).await.unwrap();

    chat.remove_invitation(invitation.id).unwrap();
    chat.remove_participant(member).unwrap();
    let newcomer = Uuid::new_v4();
    chat.add_participant(Participant::new(newcomer).unwrap())
        .unwrap();
    chat.update_name("renamed chat").unwrap();
    chat.set_last_active_at(Utc::now() + Duration::seconds(1))
        .unwrap();
    repo.upsert(&chat).await.unwrap();

    let found = find_chat(repo, &ChatFilter::by_id(chat.id())).await.unwrap();
    assert_eq!(found, chat);
    assert!(repo
        .list(&ChatFilter::by_participant(member))
        .await
        .unwrap()
        .is_empty());
    assert!(repo
        .list(&ChatFilter::by_recipient(invitation.recipient_id))
        .await
        .unwrap()
        .is_empty());
}

pub async fn filters_by_membership_and_invitations(repo: &dyn ChatRepository) {
    let seeded = seeded_chat();
    let other = seeded_chat();
    repo.upsert(&seeded.chat).await.unwrap();
    repo.upsert(&other.chat).await.unwrap();
    let id = seeded.chat.id();

    let ids = |chats: Vec<Chat>| chats.into_iter().map(|c| c.id()).collect::<Vec<_>>();

    let by_participant = repo
        .list(&ChatFilter::by_participant(seeded.member))
        .await
        .unwrap();
    assert_eq!(ids(by_participant), vec![id]);

    let by_recipient = repo
        .list(&ChatFilter::by_recipient(seeded.invitation.recipient_id))
        .await
        .unwrap();
    assert_eq!(ids(by_recipient), vec![id]);

    let by_subject = repo
        .list(&ChatFilter::default().with_subject(seeded.member))
        .await
        .unwrap();
    assert_eq!(ids(by_subject), vec![id]);

    let by_invitation = repo
        .list(&ChatFilter::default().with_invitation(seeded.invitation.id))
        .await
        .unwrap();
    assert_eq!(ids(by_invitation), vec![id]);

    // conjunction: the invitation exists but is not addressed to the chief
    let mismatched = repo
        .list(
            &ChatFilter::default()
                .with_invitation(seeded.invitation.id)
                .with_recipient(seeded.chief),
        )
        .await
        .unwrap();
    assert!(mismatched.is_empty());

    let both = repo
        .list(&ChatFilter {
            chat_ids: Some(vec![id, other.chat.id()]),
            ..ChatFilter::default()
        })
        .await
        .unwrap();
    assert_eq!(both.len(), 2);

    let none = repo
        .list(&ChatFilter {
            chat_ids: Some(Vec::new()),
            ..ChatFilter::default()
        })
        .await
        .unwrap();
    assert!(none.is_empty());

    let all = ids(repo.list(&ChatFilter::default()).await.unwrap());
    assert!(all.contains(&id));
    assert!(all.contains(&other.chat.id()));
}

pub async fn orders_by_activity_with_cursor(repo: &dyn ChatRepository) {
    let user = Uuid::new_v4();
    let base = Utc::now() + Duration::hours(1);

    let mut expected = Vec::new();
    for offset in 0..3 {
        let mut chat = Chat::new(format!("chat {offset}"), user).unwrap();
        chat.set_last_active_at(base + Duration::minutes(offset))
            .unwrap();
        repo.upsert(&chat).await.unwrap();
        expected.push(chat);
    }
    expected.reverse();

    let filter = ChatFilter::by_participant(user);
    let listed = repo.list(&filter).await.unwrap();
    assert_eq!(listed, expected);

    let first_page = repo.list(&filter.clone().limit(2)).await.unwrap();
    assert_eq!(first_page, &expected[..2]);

    let cursor = first_page[1].last_active_at();
    let second_page = repo
        .list(&filter.clone().active_before(cursor).limit(2))
        .await
        .unwrap();
    assert_eq!(second_page, &expected[2..]);
}

pub async fn find_requires_exactly_one(repo: &dyn ChatRepository) {
    let missing = find_chat(repo, &ChatFilter::by_id(Uuid::new_v4())).await;
    assert!(matches!(missing, Err(DomainError::ChatNotFound)));

    let user = Uuid::new_v4();
    repo.upsert(&Chat::new("one", user).unwrap()).await.unwrap();
    repo.upsert(&Chat::new("two", user).unwrap()).await.unwrap();

    let ambiguous = find_chat(repo, &ChatFilter::by_participant(user)).await;
    assert!(matches!(ambiguous, Err(DomainError::ChatNotFound)));
}

/// Reads racing a writer must see each upsert whole
///
/// The writer flips one user between invited and joined. Every read must
/// find that user in exactly one of the two states.
pub async fn reads_never_see_partial_upserts(repo: Arc<dyn ChatRepository>) {
    const FLIPS: usize = 200;

    let chief = Uuid::new_v4();
    let user = Uuid::new_v4();
    let mut chat = Chat::new("busy chat", chief).unwrap();
    chat.add_invitation(Invitation::new(chief, user).unwrap())
        .unwrap();
    repo.upsert(&chat).await.unwrap();
    let filter = ChatFilter::by_id(chat.id());

    let writer_repo = Arc::clone(&repo);
    let writer = tokio::spawn(async move {
        for _ in 0..FLIPS {
            if let Ok(invitation) = chat.recipient_invitation(user).copied() {
                chat.remove_invitation(invitation.id).unwrap();
                chat.add_participant(Participant::new(user).unwrap())
                    .unwrap();
            } else {
                chat.remove_participant(user).unwrap();
                chat.add_invitation(Invitation::new(chief, user).unwrap())
                    .unwrap();
            }
            writer_repo.upsert(&chat).await.unwrap();
        }
    });

    let mut reads = 0;
    loop {
        let done = writer.is_finished();
        let found = find_chat(repo.as_ref(), &filter).await.unwrap();
        let joined = found.has_participant(user);
        let invited = found.has_invitation_with_recipient(user);
        assert!(
            joined != invited,
            "read {reads}: joined={joined} invited={invited}"
        );
        reads += 1;
        if done {
            break;
        }
    }

    writer.await.unwrap();
    // an even number of flips ends where it started
    let last = find_chat(repo.as_ref(), &filter).await.unwrap();
    assert!(last.has_invitation_with_recipient(user));
    assert!(!last.has_participant(user));
}

pub async fn run_all(repo: &dyn ChatRepository) {
    upsert_then_find(repo).await;
    upsert_replaces_children(repo).await;
    filters_by_membership_and_invitations(repo).await;
    orders_by_activity_with_cursor(repo).await;
    find_requires_exactly_one(repo).await;
}
