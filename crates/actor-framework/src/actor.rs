//! # Generic Actor Server
//!
//! [`ResourceActor`] owns the store for one entity type and is the only place that
//! mutates it.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::page::Page;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop, so the `store` needs
/// no `Mutex` or `RwLock`. A reader observes either the state before a write or the
/// state after it, never a merged but unversioned record.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ## Operations
///
/// * **Create**: allocates an id with [`ActorEntity::next_id`], builds the entity, runs
///   `on_create` and stores it. Returns the stored entity.
/// * **Get**: returns a clone of the entity, or `None`.
/// * **List**: walks the store in id order, keeps entities whose
///   [`ActorEntity::matches`] accepts the query, and slices the requested page.
/// * **Update**: `NotFound` when the id is missing, `VersionConflict` when the expected
///   version differs; otherwise `on_update` runs on a working copy, the version is bumped
///   and the copy replaces the stored entity. A failing hook leaves the store untouched.
/// * **Delete**: `on_delete` may veto; otherwise the entity is removed.
/// * **Action**: `handle_action` on the stored entity.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    sequence: u64,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When it is full, client calls
    /// wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            sequence: 0,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Pre-populates the store before the loop starts.
    ///
    /// Used for singleton entities that exist for the whole lifetime of the system.
    pub fn seed(mut self, id: T::Id, item: T) -> Self {
        self.store.insert(id, item);
        self
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    self.sequence += 1;
                    let id = T::next_id(self.sequence);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::entity(e)));
                                continue;
                            }
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::entity(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List {
                    query,
                    page,
                    respond_to,
                } => {
                    let result = Page::from_matches(
                        self.store.values().filter(|item| item.matches(&query)).cloned(),
                        page,
                    );
                    debug!(
                        entity_type,
                        ?query,
                        index = page.index,
                        total = result.total_elements,
                        "List"
                    );
                    let _ = respond_to.send(Ok(result));
                }
                ResourceRequest::Update {
                    id,
                    expected_version,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?expected_version, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let actual = current.version();
                    if let Some(expected) = expected_version {
                        if expected != actual {
                            warn!(entity_type, %id, expected, actual, "Version conflict");
                            let _ = respond_to.send(Err(FrameworkError::VersionConflict {
                                id: id.to_string(),
                                expected,
                                actual,
                            }));
                            continue;
                        }
                    }

                    let mut working = current.clone();
                    if let Err(e) = working.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::entity(e)));
                        continue;
                    }
                    working.bump_version();
                    let version = working.version();
                    self.store.insert(id.clone(), working.clone());
                    info!(entity_type, %id, version, "Updated");
                    let _ = respond_to.send(Ok(working));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::entity(e)));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(FrameworkError::entity);
                        match &result {
                            Ok(_) => debug!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
