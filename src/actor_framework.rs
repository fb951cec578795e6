use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks and Patches)
// =============================================================================

/// Trait that any catalog entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Ord + Clone + Send + Sync + Display + Debug;
    type Patch: Send + Sync + Debug;

    /// Get the ID of the entity. Upserts are keyed by it.
    fn id(&self) -> &Self::Id;

    // --- Lifecycle Hooks ---

    fn on_insert(&mut self) -> Result<(), String> { Ok(()) }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;
    fn on_delete(&self) -> Result<(), String> { Ok(()) }
}

/// Failures surfaced by the generic actor and its client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Rejected by entity hook: {0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Upsert {
        item: T,
        respond_to: Response<()>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Serves requests until every client handle has been dropped.
    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items = self.store.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Upsert { mut item, respond_to } => {
                    if let Err(e) = item.on_insert() {
                        let _ = respond_to.send(Err(FrameworkError::Rejected(e)));
                        continue;
                    }
                    self.store.insert(item.id().clone(), item);
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    if let Some(item) = self.store.get_mut(&id) {
                        // Patch a copy so a rejected hook leaves the stored item intact.
                        let mut updated = item.clone();
                        if let Err(e) = updated.on_update(patch) {
                            let _ = respond_to.send(Err(FrameworkError::Rejected(e)));
                            continue;
                        }
                        *item = updated.clone();
                        let _ = respond_to.send(Ok(updated));
                    } else {
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete() {
                            let _ = respond_to.send(Err(FrameworkError::Rejected(e)));
                            continue;
                        }
                        self.store.remove(&id);
                        let _ = respond_to.send(Ok(()));
                    } else {
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Derive would demand `T: Clone` on the generic parameter itself.
impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(build(respond_to))
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }

    pub async fn upsert(&self, item: T) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Upsert { item, respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Shelf {
        id: u64,
        label: String,
        capacity: u32,
    }

    #[derive(Debug)]
    struct ShelfPatch {
        capacity: Option<u32>,
    }

    impl Entity for Shelf {
        type Id = u64;
        type Patch = ShelfPatch;

        fn id(&self) -> &u64 { &self.id }

        fn on_insert(&mut self) -> Result<(), String> {
            if self.label.is_empty() {
                return Err("label required".to_string());
            }
            Ok(())
        }

        fn on_update(&mut self, patch: ShelfPatch) -> Result<(), String> {
            if let Some(capacity) = patch.capacity {
                if capacity == 0 {
                    return Err("capacity must be positive".to_string());
                }
                self.capacity = capacity;
            }
            Ok(())
        }
    }

    fn shelf(id: u64, label: &str, capacity: u32) -> Shelf {
        Shelf { id, label: label.to_string(), capacity }
    }

    #[tokio::test]
    async fn test_resource_actor_lifecycle() {
        let (actor, client) = ResourceActor::new(10);
        tokio::spawn(actor.run());

        client.upsert(shelf(2, "B", 5)).await.unwrap();
        client.upsert(shelf(1, "A", 3)).await.unwrap();

        let found = client.get(1).await.unwrap();
        assert_eq!(found, Some(shelf(1, "A", 3)));

        // List is ordered by id
        let all = client.list().await.unwrap();
        assert_eq!(all.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 2]);

        let updated = client.update(1, ShelfPatch { capacity: Some(9) }).await.unwrap();
        assert_eq!(updated.capacity, 9);

        client.delete(2).await.unwrap();
        assert_eq!(client.get(2).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_hooks_reject_without_mutating() {
        let (actor, client) = ResourceActor::new(10);
        tokio::spawn(actor.run());

        let err = client.upsert(shelf(1, "", 3)).await.unwrap_err();
        assert!(matches!(err, FrameworkError::Rejected(_)));
        assert_eq!(client.get(1).await.unwrap(), None);

        client.upsert(shelf(1, "A", 3)).await.unwrap();
        let err = client.update(1, ShelfPatch { capacity: Some(0) }).await.unwrap_err();
        assert!(matches!(err, FrameworkError::Rejected(_)));
        assert_eq!(client.get(1).await.unwrap().unwrap().capacity, 3);
    }

    #[tokio::test]
    async fn test_missing_items_and_closed_actor() {
        let (actor, client) = ResourceActor::<Shelf>::new(10);
        let handle = tokio::spawn(actor.run());

        let err = client.update(7, ShelfPatch { capacity: None }).await.unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("7".to_string()));
        assert_eq!(client.delete(7).await.unwrap_err(), FrameworkError::NotFound("7".to_string()));

        handle.abort();
        let _ = handle.await;
        assert_eq!(client.get(1).await.unwrap_err(), FrameworkError::ActorClosed);
    }
}
