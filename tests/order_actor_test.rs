use actor_framework::mock::MockClient;
use actor_framework::{ActorClient, FrameworkError};
use beer_catalog::clients::{LinkClient, OrderClient};
use beer_catalog::links::{LinkError, LinkGraph, LinkOutcome, RecordRef, GRAPH_ID};
use beer_catalog::model::{
    BeerId, CustomerId, OrderCreate, OrderLineDraft, OrderQuery, OrderState, ShipmentDraft,
};
use beer_catalog::order_actor::OrderError;

fn order(customer: CustomerId, beers: &[BeerId]) -> OrderCreate {
    OrderCreate {
        customer_id: Some(customer),
        customer_ref: Some("PO-1".into()),
        lines: beers
            .iter()
            .map(|beer| OrderLineDraft {
                beer_id: Some(*beer),
                order_quantity: 2,
            })
            .collect(),
        shipment: Some(ShipmentDraft {
            tracking_number: "1Z999".into(),
        }),
    }
}

/// Real Order actor with a mocked link graph: `on_create` links the aggregate before
/// it is stored.
#[tokio::test]
async fn order_is_persisted_once_linked() {
    let mut graph = MockClient::<LinkGraph>::new();
    graph
        .expect_action(GRAPH_ID)
        .return_ok(LinkOutcome::Changed(true));

    let (order_actor, inner) = beer_catalog::order_actor::new(8);
    let orders = OrderClient::new(inner);
    let handle = tokio::spawn(order_actor.run(LinkClient::new(graph.client())));

    let customer = CustomerId::new();
    let created = orders
        .create_order(order(customer, &[BeerId::new(), BeerId::new()]))
        .await
        .unwrap();
    assert_eq!(created.state, OrderState::Persisted);
    assert_eq!(created.lines.len(), 2);
    assert!(created.lines.iter().all(|line| line.order_id == created.id));
    assert_eq!(
        created.shipment.as_ref().map(|s| s.order_id),
        Some(created.id)
    );

    let fetched = orders.get_order(created.id).await.unwrap();
    assert_eq!(fetched, created);

    graph.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn unknown_references_reject_the_whole_aggregate() {
    let customer = CustomerId::new();
    let beer = BeerId::new();

    let mut graph = MockClient::<LinkGraph>::new();
    graph
        .expect_action(GRAPH_ID)
        .return_err(FrameworkError::entity(LinkError::UnknownRecords(vec![
            RecordRef::Customer(customer),
            RecordRef::Beer(beer),
        ])));

    let (order_actor, inner) = beer_catalog::order_actor::new(8);
    let orders = OrderClient::new(inner);
    let handle = tokio::spawn(order_actor.run(LinkClient::new(graph.client())));

    let err = orders.create_order(order(customer, &[beer])).await.unwrap_err();
    let OrderError::Validation(errors) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert!(errors.has_field("customer_id"));
    assert!(errors.has_field("lines.beer_id"));

    let page = orders
        .list_orders(OrderQuery::default(), None, None)
        .await
        .unwrap();
    assert_eq!(page.total_elements, 0);

    graph.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn invalid_payload_never_reaches_the_graph() {
    let graph = MockClient::<LinkGraph>::new();

    let (order_actor, inner) = beer_catalog::order_actor::new(8);
    let orders = OrderClient::new(inner);
    let handle = tokio::spawn(order_actor.run(LinkClient::new(graph.client())));

    let mut params = order(CustomerId::new(), &[BeerId::new()]);
    params.customer_id = None;
    params.lines[0].order_quantity = 0;

    let err = orders.create_order(params).await.unwrap_err();
    let OrderError::Validation(errors) = err else {
        panic!("expected validation error, got {err:?}");
    };
    assert!(errors.has_field("customer_id"));
    assert!(errors.has_field("lines.order_quantity"));

    graph.verify();
    drop(orders);
    handle.await.unwrap();
}

#[tokio::test]
async fn delete_detaches_before_removing() {
    let mut graph = MockClient::<LinkGraph>::new();
    graph
        .expect_action(GRAPH_ID)
        .return_ok(LinkOutcome::Changed(true));
    graph
        .expect_action(GRAPH_ID)
        .return_ok(LinkOutcome::Retired(2));

    let (order_actor, inner) = beer_catalog::order_actor::new(8);
    let orders = OrderClient::new(inner);
    let handle = tokio::spawn(order_actor.run(LinkClient::new(graph.client())));

    let created = orders
        .create_order(order(CustomerId::new(), &[BeerId::new()]))
        .await
        .unwrap();

    assert!(orders.delete_order(created.id).await.unwrap());
    assert!(orders.get(created.id).await.unwrap().is_none());
    assert!(!orders.delete_order(created.id).await.unwrap());

    graph.verify();
    drop(orders);
    handle.await.unwrap();
}
