//! # Beer Client
//!
//! The catalog's public beer operations. Listing goes through the filter composer and
//! the page normalizer; every result leaves through the projector.
use crate::beer_actor::{BeerError, BeerQuery};
use crate::model::{Beer, BeerDraft, BeerId, BeerPatch, BeerStyle, BeerUpdate};
use crate::projection::{project, project_page, BeerView};
use actor_framework::{ActorClient, Page, PageLimits, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Listing parameters as received from a caller. Everything is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeerListParams {
    pub beer_name: Option<String>,
    pub beer_style: Option<BeerStyle>,
    pub show_inventory: Option<bool>,
    /// 1-based.
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

/// Client for interacting with the Beer actor.
#[derive(Clone)]
pub struct BeerClient {
    inner: ResourceClient<Beer>,
    limits: PageLimits,
}

#[async_trait]
impl ActorClient<Beer> for BeerClient {
    type Error = BeerError;

    fn inner(&self) -> &ResourceClient<Beer> {
        &self.inner
    }
}

impl BeerClient {
    pub fn new(inner: ResourceClient<Beer>) -> Self {
        Self::with_limits(inner, PageLimits::default())
    }

    pub fn with_limits(inner: ResourceClient<Beer>, limits: PageLimits) -> Self {
        Self { inner, limits }
    }

    #[instrument(skip(self))]
    pub async fn list_beers(&self, params: BeerListParams) -> Result<Page<BeerView>, BeerError> {
        let query = BeerQuery::compose(params.beer_name.as_deref(), params.beer_style);
        let page = self.limits.normalize(params.page_number, params.page_size);
        debug!(?query, ?page, "Listing beers");
        let beers = self.list(query, page).await?;
        Ok(project_page(beers, params.show_inventory))
    }

    #[instrument(skip(self))]
    pub async fn get_beer(&self, id: BeerId) -> Result<BeerView, BeerError> {
        self.get(id)
            .await?
            .map(BeerView::from)
            .ok_or_else(|| BeerError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn create_beer(&self, draft: BeerDraft) -> Result<BeerView, BeerError> {
        debug!("Sending request");
        let beer = self.inner.create(draft).await?;
        Ok(project(beer, None))
    }

    /// Replaces every mutable field. `version` is the version the caller last saw.
    #[instrument(skip(self))]
    pub async fn replace_beer(
        &self,
        id: BeerId,
        version: Option<u64>,
        draft: BeerDraft,
    ) -> Result<BeerView, BeerError> {
        let beer = self
            .inner
            .update(id, version, BeerUpdate::Replace(draft))
            .await?;
        Ok(project(beer, None))
    }

    /// Overwrites only the fields present (and, for text, non-blank) in `patch`.
    #[instrument(skip(self))]
    pub async fn patch_beer(
        &self,
        id: BeerId,
        version: Option<u64>,
        patch: BeerPatch,
    ) -> Result<BeerView, BeerError> {
        let beer = self
            .inner
            .update(id, version, BeerUpdate::Patch(patch))
            .await?;
        Ok(project(beer, None))
    }

    /// Returns `false` when no beer has this id.
    #[instrument(skip(self))]
    pub async fn delete_beer(&self, id: BeerId) -> Result<bool, BeerError> {
        match self.delete(id).await {
            Ok(()) => Ok(true),
            Err(BeerError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;
    use actor_framework::{FrameworkError, PageRequest};

    fn stored() -> Beer {
        Beer::from_draft(
            BeerId::new(),
            BeerDraft {
                beer_name: "Galaxy Cat".into(),
                beer_style: Some(BeerStyle::PaleAle),
                upc: "12356".into(),
                quantity_on_hand: Some(122),
                price: Some(12.99),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn get_beer_maps_absent_to_not_found() {
        let mut mock = MockClient::<Beer>::new();
        let id = BeerId::new();
        mock.expect_get(id).return_ok(None);

        let client = BeerClient::new(mock.client());
        assert!(matches!(client.get_beer(id).await, Err(BeerError::NotFound(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn delete_beer_reports_missing_as_false() {
        let mut mock = MockClient::<Beer>::new();
        let id = BeerId::new();
        mock.expect_delete(id)
            .return_err(FrameworkError::NotFound(id.to_string()));
        mock.expect_delete(id).return_ok(());

        let client = BeerClient::new(mock.client());
        assert!(!client.delete_beer(id).await.unwrap());
        assert!(client.delete_beer(id).await.unwrap());
        mock.verify();
    }

    #[tokio::test]
    async fn version_conflict_surfaces_as_conflict() {
        let mut mock = MockClient::<Beer>::new();
        let id = BeerId::new();
        mock.expect_update(id).return_err(FrameworkError::VersionConflict {
            id: id.to_string(),
            expected: 0,
            actual: 1,
        });

        let client = BeerClient::new(mock.client());
        let result = client
            .patch_beer(id, Some(0), BeerPatch::default())
            .await;
        assert!(matches!(
            result,
            Err(BeerError::Conflict {
                expected: 0,
                actual: 1,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn entity_errors_are_recovered_typed() {
        let mut mock = MockClient::<Beer>::new();
        mock.expect_create()
            .return_err(FrameworkError::entity(BeerError::StillReferenced("x".into())));

        let client = BeerClient::new(mock.client());
        let result = client.create_beer(BeerDraft::default()).await;
        assert_eq!(result, Err(BeerError::StillReferenced("x".into())));
    }

    #[tokio::test]
    async fn list_beers_projects_the_page() {
        let mut mock = MockClient::<Beer>::new();
        mock.expect_list()
            .return_ok(Page::from_matches(vec![stored()], PageRequest::new(0, 25)));

        let client = BeerClient::new(mock.client());
        let page = client
            .list_beers(BeerListParams {
                show_inventory: Some(false),
                ..BeerListParams::default()
            })
            .await
            .unwrap();
        assert_eq!(page.total_elements, 1);
        assert_eq!(page.content[0].quantity_on_hand, None);
    }
}
