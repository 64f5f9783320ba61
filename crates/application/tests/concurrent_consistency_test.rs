//! 并发数据一致性测试
//!
//! 验证消息存储在高并发发送场景下不丢失、不重复、序列号唯一。

use std::collections::HashSet;
use std::sync::Arc;

use application::{
    BlockRegistry, MessageStore, RelayService, RelayServiceDependencies, SendOutcome, SystemClock,
};
use futures::future::join_all;

const SENDERS: usize = 8;
const MESSAGES_PER_SENDER: usize = 50;

fn shared_relay_service() -> Arc<RelayService> {
    Arc::new(RelayService::new(RelayServiceDependencies {
        store: Arc::new(MessageStore::new()),
        registry: Arc::new(BlockRegistry::new()),
        clock: Arc::new(SystemClock),
    }))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_sends_lose_nothing_and_duplicate_nothing() {
    let service = shared_relay_service();

    let tasks: Vec<_> = (0..SENDERS)
        .map(|sender| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                let user = format!("user-{sender}");
                let mut sequences = Vec::with_capacity(MESSAGES_PER_SENDER);
                for n in 0..MESSAGES_PER_SENDER {
                    match service.send_chat(&user, &format!("message {n}")).await {
                        SendOutcome::Stored { sequence } => sequences.push(sequence),
                        SendOutcome::RejectedBlocked => panic!("no sender is blocked"),
                    }
                }
                sequences
            })
        })
        .collect();

    let mut all_sequences = Vec::new();
    for result in join_all(tasks).await {
        all_sequences.extend(result.expect("sender task panicked"));
    }

    let expected = SENDERS * MESSAGES_PER_SENDER;
    assert_eq!(all_sequences.len(), expected);

    let unique: HashSet<u64> = all_sequences.iter().copied().collect();
    assert_eq!(unique.len(), expected, "sequence numbers must be unique");

    let messages = service.get_all_messages().await;
    assert_eq!(messages.len(), expected, "no message lost or duplicated");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn per_sender_order_is_preserved_under_concurrency() {
    let service = shared_relay_service();

    let tasks: Vec<_> = (0..SENDERS)
        .map(|sender| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                let user = format!("user-{sender}");
                for n in 0..MESSAGES_PER_SENDER {
                    service.send_chat(&user, &format!("{n}")).await;
                }
            })
        })
        .collect();

    for result in join_all(tasks).await {
        result.expect("sender task panicked");
    }

    // Within one sender the snapshot must reflect that sender's call order,
    // whatever the global interleaving was.
    let messages = service.get_all_messages().await;
    for sender in 0..SENDERS {
        let user = format!("user-{sender}");
        let bodies: Vec<usize> = messages
            .iter()
            .filter(|m| m.user == user)
            .map(|m| m.message.parse().expect("numeric body"))
            .collect();
        let expected: Vec<usize> = (0..MESSAGES_PER_SENDER).collect();
        assert_eq!(bodies, expected, "order broken for {user}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_clears_and_sends_stay_consistent() {
    let service = shared_relay_service();

    for n in 0..MESSAGES_PER_SENDER {
        service.send_chat("alice", &format!("a{n}")).await;
        service.send_chat("bob", &format!("b{n}")).await;
    }

    // alice keeps sending while someone clears her history; bob is untouched.
    let sender = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            for n in 0..MESSAGES_PER_SENDER {
                service.send_chat("alice", &format!("late-{n}")).await;
            }
        })
    };
    let clearer = {
        let service = Arc::clone(&service);
        tokio::spawn(async move { service.clear_my_messages("alice").await })
    };

    sender.await.expect("sender task panicked");
    let cleared = clearer.await.expect("clear task panicked");
    assert!(cleared >= MESSAGES_PER_SENDER, "at least the backlog goes");

    let messages = service.get_all_messages().await;
    let bob_count = messages.iter().filter(|m| m.user == "bob").count();
    assert_eq!(bob_count, MESSAGES_PER_SENDER, "bob's messages are untouched");

    let alice_count = messages.iter().filter(|m| m.user == "alice").count();
    let total_alice_sends = 2 * MESSAGES_PER_SENDER;
    assert_eq!(
        alice_count,
        total_alice_sends - cleared,
        "every alice message was either cleared or retained, never both"
    );
}
