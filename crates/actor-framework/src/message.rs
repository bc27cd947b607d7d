//! # Messages
//!
//! Requests carried from [`ResourceClient`](crate::ResourceClient) to
//! [`ResourceActor`](crate::ResourceActor), each with a one-shot reply channel.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::page::{Page, PageRequest};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the resource lifecycle (create, read, list, update, delete)
/// plus `Action` for resource-specific logic that doesn't fit CRUD. The associated
/// types of [`ActorEntity`] make it impossible to send one resource's payload to
/// another resource's actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        query: T::Query,
        page: PageRequest,
        respond_to: Response<Page<T>>,
    },
    Update {
        id: T::Id,
        /// Version the caller last observed; `None` skips the guard.
        expected_version: Option<u64>,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
