//! # ActorEntity Trait
//!
//! The contract every stored record type satisfies so that one generic
//! [`ResourceActor`](crate::ResourceActor) can own it.
//!
//! Besides the lifecycle hooks, an entity exposes its optimistic-concurrency version
//! ([`ActorEntity::version`] / [`ActorEntity::bump_version`]) and a query predicate
//! ([`ActorEntity::matches`]) used by listing.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can call other actors. The `Context` type is
/// injected into every hook, which allows late binding of dependencies (passing clients
/// to `run()` instead of `new()`).
///
/// # Atomicity
/// `on_create` and `on_update` run against a value that is not yet visible in the
/// store; a failure discards it. `handle_action` mutates the stored value in place, so
/// implementations must finish all checks before their first mutation.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier. The store iterates in `Ord` order.
    type Id: Ord + Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Filter accepted by `List` requests. Use `()` when the entity is never filtered.
    type Query: Send + Sync + Debug;

    /// Enum representing resource-specific operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum per actor. Clients recover it from
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) by downcasting.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Allocates the id for the next created entity. `sequence` starts at 1 and grows by
    /// one per create request; entities with opaque ids may ignore it.
    fn next_id(sequence: u64) -> Self::Id;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Current optimistic-concurrency version.
    fn version(&self) -> u64;

    /// Advances the version by exactly one and refreshes modification metadata.
    /// Called by the actor after every successful update.
    fn bump_version(&mut self);

    /// Whether this entity belongs in the result of a `List` request.
    fn matches(&self, _query: &Self::Query) -> bool {
        true
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity becomes visible.
    /// Use this hook to perform validation or side effects (e.g., checking other actors).
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update to a working copy of the stored entity.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed. Returning an error vetoes the delete.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
