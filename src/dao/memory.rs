//! In-memory roster store seeded with the fixed slot capacity.

use std::sync::Arc;

use futures::{FutureExt, future::BoxFuture};
use tokio::sync::RwLock;

use crate::{
    dao::storage::{RosterStore, SlotUpdate, StorageResult},
    state::roster::Participant,
};

/// Roster store backed by process memory.
///
/// Slots are created up front, one per id in `1..=capacity`, and keep that
/// order forever; a reset rewrites them in place rather than reallocating.
pub struct MemoryRosterStore {
    slots: Arc<RwLock<Vec<Participant>>>,
}

impl MemoryRosterStore {
    /// Seed a store with `capacity` unclaimed slots.
    pub fn new(capacity: u32) -> Self {
        let slots = (1..=capacity).map(Participant::unclaimed).collect();
        Self {
            slots: Arc::new(RwLock::new(slots)),
        }
    }
}

impl RosterStore for MemoryRosterStore {
    fn list(&self) -> BoxFuture<'static, StorageResult<Vec<Participant>>> {
        let slots = Arc::clone(&self.slots);
        async move { Ok(slots.read().await.clone()) }.boxed()
    }

    fn update(
        &self,
        id: u32,
        update: SlotUpdate,
    ) -> BoxFuture<'static, StorageResult<Option<Participant>>> {
        let slots = Arc::clone(&self.slots);
        async move {
            let mut guard = slots.write().await;
            let Some(slot) = guard.iter_mut().find(|slot| slot.id == id) else {
                return Ok(None);
            };
            slot.name = update.name.trim().to_string();
            slot.role = update.role;
            slot.confirmed = update.confirmed;
            Ok(Some(slot.clone()))
        }
        .boxed()
    }

    fn reset(&self) -> BoxFuture<'static, StorageResult<()>> {
        let slots = Arc::clone(&self.slots);
        async move {
            let mut guard = slots.write().await;
            for slot in guard.iter_mut() {
                *slot = Participant::unclaimed(slot.id);
            }
            Ok(())
        }
        .boxed()
    }

    fn health_check(&self) -> BoxFuture<'static, StorageResult<()>> {
        async { Ok(()) }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::roster::Role;

    fn update(name: &str, role: Role, confirmed: bool) -> SlotUpdate {
        SlotUpdate {
            name: name.into(),
            role,
            confirmed,
        }
    }

    #[tokio::test]
    async fn seeds_the_full_capacity_in_order() {
        let store = MemoryRosterStore::new(27);
        let roster = store.list().await.unwrap();

        assert_eq!(roster.len(), 27);
        let ids: Vec<u32> = roster.iter().map(|slot| slot.id).collect();
        assert_eq!(ids, (1..=27).collect::<Vec<_>>());
        assert!(roster.iter().all(|slot| !slot.is_eligible()));
    }

    #[tokio::test]
    async fn update_trims_the_stored_name() {
        let store = MemoryRosterStore::new(5);
        let stored = store
            .update(3, update("  Bia  ", Role::Goalkeeper, true))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(stored.name, "Bia");
        assert_eq!(stored.role, Role::Goalkeeper);
        assert!(stored.confirmed);

        let roster = store.list().await.unwrap();
        assert_eq!(roster[2], stored);
    }

    #[tokio::test]
    async fn unknown_slot_yields_none() {
        let store = MemoryRosterStore::new(5);
        let outcome = store.update(42, update("Ghost", Role::Field, true)).await;
        assert!(matches!(outcome, Ok(None)));
    }

    #[tokio::test]
    async fn reset_returns_every_slot_to_default() {
        let store = MemoryRosterStore::new(4);
        store
            .update(1, update("Carla", Role::Field, true))
            .await
            .unwrap();
        store
            .update(2, update("Davi", Role::Goalkeeper, true))
            .await
            .unwrap();

        store.reset().await.unwrap();

        let roster = store.list().await.unwrap();
        assert_eq!(roster.len(), 4);
        for (idx, slot) in roster.iter().enumerate() {
            assert_eq!(*slot, Participant::unclaimed(idx as u32 + 1));
        }
    }
}
