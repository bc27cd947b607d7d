use actor_framework::{ActorEntity, FrameworkError, PageRequest, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Keg {
    id: u32,
    version: u64,
    label: String,
    litres: u32,
    tapped: bool,
}

#[derive(Debug)]
struct KegCreate {
    label: String,
    litres: u32,
}

#[derive(Debug)]
struct KegUpdate {
    label: Option<String>,
}

#[derive(Debug)]
struct MinLitres(u32);

#[derive(Debug)]
enum KegAction {
    Tap,
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum KegError {
    #[error("label must not be blank")]
    BlankLabel,
    #[error("keg is still tapped")]
    Tapped,
}

#[async_trait]
impl ActorEntity for Keg {
    type Id = u32;
    type Create = KegCreate;
    type Update = KegUpdate;
    type Query = MinLitres;
    type Action = KegAction;
    type ActionResult = bool;
    type Context = ();
    type Error = KegError;

    fn next_id(sequence: u64) -> u32 {
        sequence as u32
    }

    fn from_create_params(id: u32, params: KegCreate) -> Result<Self, Self::Error> {
        if params.label.trim().is_empty() {
            return Err(KegError::BlankLabel);
        }
        Ok(Self {
            id,
            version: 0,
            label: params.label,
            litres: params.litres,
            tapped: false,
        })
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn bump_version(&mut self) {
        self.version += 1;
    }

    fn matches(&self, query: &MinLitres) -> bool {
        self.litres >= query.0
    }

    async fn on_update(&mut self, update: KegUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(label) = update.label {
            if label.trim().is_empty() {
                return Err(KegError::BlankLabel);
            }
            self.label = label;
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        if self.tapped {
            return Err(KegError::Tapped);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: KegAction, _ctx: &()) -> Result<bool, Self::Error> {
        match action {
            KegAction::Tap => {
                let changed = !self.tapped;
                self.tapped = true;
                Ok(changed)
            }
        }
    }
}

fn keg(label: &str, litres: u32) -> KegCreate {
    KegCreate {
        label: label.to_string(),
        litres,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Keg>::new(10);
    tokio::spawn(actor.run(()));

    let created = client.create(keg("Pale", 50)).await.unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.version, 0);

    assert!(client.perform_action(created.id, KegAction::Tap).await.unwrap());
    assert!(!client.perform_action(created.id, KegAction::Tap).await.unwrap());

    let updated = client
        .update(
            created.id,
            Some(0),
            KegUpdate {
                label: Some("Pale Ale".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label, "Pale Ale");
    assert_eq!(updated.version, 1);

    // Tapped kegs veto their own deletion.
    let vetoed = client.delete(created.id).await.unwrap_err();
    assert_eq!(
        vetoed.downcast_entity::<KegError>().unwrap(),
        KegError::Tapped
    );

    let other = client.create(keg("Stout", 30)).await.unwrap();
    client.delete(other.id).await.unwrap();
    assert!(client.get(other.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_version_guard() {
    let (actor, client) = ResourceActor::<Keg>::new(10);
    tokio::spawn(actor.run(()));

    let created = client.create(keg("Pils", 20)).await.unwrap();

    let stale = client
        .update(created.id, Some(7), KegUpdate { label: None })
        .await;
    assert!(matches!(
        stale,
        Err(FrameworkError::VersionConflict {
            expected: 7,
            actual: 0,
            ..
        })
    ));

    let missing = client
        .update(99, Some(0), KegUpdate { label: None })
        .await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(id)) if id == "99"));

    // A rejected update leaves the stored version untouched.
    let invalid = client
        .update(
            created.id,
            Some(0),
            KegUpdate {
                label: Some("   ".into()),
            },
        )
        .await;
    assert!(invalid.is_err());
    let stored = client.get(created.id).await.unwrap().unwrap();
    assert_eq!(stored.version, 0);
    assert_eq!(stored.label, "Pils");

    let unguarded = client
        .update(created.id, None, KegUpdate { label: None })
        .await
        .unwrap();
    assert_eq!(unguarded.version, 1);
}

#[tokio::test]
async fn test_concurrent_updates_single_winner() {
    let (actor, client) = ResourceActor::<Keg>::new(10);
    tokio::spawn(actor.run(()));

    let created = client.create(keg("Gose", 10)).await.unwrap();

    let a = {
        let client = client.clone();
        tokio::spawn(async move {
            client
                .update(created.id, Some(0), KegUpdate { label: Some("A".into()) })
                .await
        })
    };
    let b = {
        let client = client.clone();
        tokio::spawn(async move {
            client
                .update(created.id, Some(0), KegUpdate { label: Some("B".into()) })
                .await
        })
    };

    let results = [a.await.unwrap(), b.await.unwrap()];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    let conflicts = results
        .iter()
        .filter(|r| matches!(r, Err(FrameworkError::VersionConflict { .. })))
        .count();
    assert_eq!((successes, conflicts), (1, 1));
    assert_eq!(client.get(created.id).await.unwrap().unwrap().version, 1);
}

#[tokio::test]
async fn test_list_filters_and_pages() {
    let (actor, client) = ResourceActor::<Keg>::new(10);
    tokio::spawn(actor.run(()));

    for litres in 1..=30 {
        client.create(keg("Lager", litres)).await.unwrap();
    }

    let page = client
        .list(MinLitres(11), PageRequest::new(1, 15))
        .await
        .unwrap();
    assert_eq!(page.total_elements, 20);
    assert_eq!(page.content.len(), 5);
    assert_eq!(page.content[0].litres, 26);

    let rejected = client.create(keg("  ", 5)).await.unwrap_err();
    assert_eq!(
        rejected.downcast_entity::<KegError>().unwrap(),
        KegError::BlankLabel
    );
}
