use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide sequence for episode identifiers.
static EPISODE_SEQ: AtomicU64 = AtomicU64::new(1);

/// Build a log correlation id for a new episode.
///
/// Format: `ep-{rank}-{seq:x}`, where `seq` is a per-process hex sequence.
pub fn make_episode_id(rank: u32) -> String {
    let seq = EPISODE_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("ep-{rank}-{seq:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_tagged_with_rank() {
        let a = make_episode_id(3);
        let b = make_episode_id(3);
        assert!(a.starts_with("ep-3-"));
        assert_ne!(a, b);
    }
}
