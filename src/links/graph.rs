//! The link graph entity: registry of live records plus every bidirectional relation.
//!
//! All relations are held by one singleton entity, so a link, an unlink or a cascade is a
//! single actor message and both directions change together.

use super::error::{LinkError, RecordRef};
use super::table::LinkTable;
use crate::model::{BeerId, CategoryId, CustomerId, OrderId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};

/// Key of the single graph entity.
pub const GRAPH_ID: &str = "catalog";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkGraph {
    revision: u64,
    /// Live beers and the product code each one holds.
    beers: BTreeMap<BeerId, String>,
    upc_owners: BTreeMap<String, BeerId>,
    categories: BTreeSet<CategoryId>,
    customers: BTreeSet<CustomerId>,
    beer_categories: LinkTable<BeerId, CategoryId>,
    customer_orders: LinkTable<CustomerId, OrderId>,
    order_beers: LinkTable<OrderId, BeerId>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LinkAction {
    RegisterBeer {
        beer: BeerId,
        upc: String,
    },
    /// Moves a registered beer to a new product code.
    ClaimUpc {
        beer: BeerId,
        upc: String,
    },
    RetireBeer(BeerId),
    RegisterCategory(CategoryId),
    RetireCategory(CategoryId),
    RegisterCustomer(CustomerId),
    RetireCustomer(CustomerId),
    AttachCategory {
        beer: BeerId,
        category: CategoryId,
    },
    DetachCategory {
        beer: BeerId,
        category: CategoryId,
    },
    AttachOrder {
        order: OrderId,
        customer: CustomerId,
        beers: BTreeSet<BeerId>,
    },
    DetachOrder(OrderId),
    CategoriesOf(BeerId),
    BeersIn(CategoryId),
    OrdersOf(CustomerId),
    OrdersForBeer(BeerId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LinkOutcome {
    Registered,
    /// Number of links removed by the cascade.
    Retired(usize),
    /// `true` when the relation changed.
    Changed(bool),
    Categories(BTreeSet<CategoryId>),
    Beers(BTreeSet<BeerId>),
    Orders(BTreeSet<OrderId>),
}

impl LinkGraph {
    fn touch(&mut self) {
        self.revision += 1;
    }

    /// Gives `upc` to `beer`, releasing the code it held before. Fails without effect
    /// when another beer holds `upc`.
    fn claim_upc(&mut self, beer: BeerId, upc: String) -> Result<bool, LinkError> {
        match self.upc_owners.get(&upc) {
            Some(owner) if *owner == beer => return Ok(false),
            Some(owner) => {
                return Err(LinkError::UpcTaken {
                    upc,
                    owner: *owner,
                })
            }
            None => {}
        }
        if let Some(previous) = self.beers.insert(beer, upc.clone()) {
            self.upc_owners.remove(&previous);
        }
        self.upc_owners.insert(upc, beer);
        self.touch();
        Ok(true)
    }

    fn retire_beer(&mut self, beer: BeerId) -> Result<LinkOutcome, LinkError> {
        let dependents = self.order_beers.left_count(beer);
        if dependents > 0 {
            return Err(LinkError::StillReferenced {
                record: RecordRef::Beer(beer),
                dependents,
            });
        }
        if let Some(upc) = self.beers.remove(&beer) {
            self.upc_owners.remove(&upc);
        }
        let detached = self.beer_categories.detach_left(beer).len();
        self.touch();
        Ok(LinkOutcome::Retired(detached))
    }

    fn retire_customer(&mut self, customer: CustomerId) -> Result<LinkOutcome, LinkError> {
        let dependents = self.customer_orders.right_count(customer);
        if dependents > 0 {
            return Err(LinkError::StillReferenced {
                record: RecordRef::Customer(customer),
                dependents,
            });
        }
        self.customers.remove(&customer);
        self.touch();
        Ok(LinkOutcome::Retired(0))
    }

    fn attach_category(
        &mut self,
        beer: BeerId,
        category: CategoryId,
    ) -> Result<LinkOutcome, LinkError> {
        let mut unknown = Vec::new();
        if !self.beers.contains_key(&beer) {
            unknown.push(RecordRef::Beer(beer));
        }
        if !self.categories.contains(&category) {
            unknown.push(RecordRef::Category(category));
        }
        if !unknown.is_empty() {
            return Err(LinkError::UnknownRecords(unknown));
        }
        let changed = self.beer_categories.link(beer, category);
        self.touch();
        Ok(LinkOutcome::Changed(changed))
    }

    fn attach_order(
        &mut self,
        order: OrderId,
        customer: CustomerId,
        beers: BTreeSet<BeerId>,
    ) -> Result<LinkOutcome, LinkError> {
        let mut unknown = Vec::new();
        if !self.customers.contains(&customer) {
            unknown.push(RecordRef::Customer(customer));
        }
        unknown.extend(
            beers
                .iter()
                .filter(|beer| !self.beers.contains_key(*beer))
                .map(|beer| RecordRef::Beer(*beer)),
        );
        if !unknown.is_empty() {
            return Err(LinkError::UnknownRecords(unknown));
        }

        let mut changed = self.customer_orders.link(customer, order);
        for beer in beers {
            changed |= self.order_beers.link(order, beer);
        }
        self.touch();
        Ok(LinkOutcome::Changed(changed))
    }

    fn detach_order(&mut self, order: OrderId) -> LinkOutcome {
        let customers = self.customer_orders.detach_right(order);
        let beers = self.order_beers.detach_left(order);
        self.touch();
        LinkOutcome::Retired(customers.len() + beers.len())
    }
}

#[async_trait]
impl ActorEntity for LinkGraph {
    type Id = &'static str;
    type Create = ();
    type Update = ();
    type Query = ();
    type Action = LinkAction;
    type ActionResult = LinkOutcome;
    type Context = ();
    type Error = LinkError;

    fn next_id(_sequence: u64) -> Self::Id {
        GRAPH_ID
    }

    fn from_create_params(_id: Self::Id, _params: ()) -> Result<Self, Self::Error> {
        Ok(Self::default())
    }

    fn version(&self) -> u64 {
        self.revision
    }

    fn bump_version(&mut self) {
        self.touch();
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Every handler checks before its first mutation, so a rejected action leaves the
    /// graph unchanged.
    async fn handle_action(
        &mut self,
        action: LinkAction,
        _ctx: &(),
    ) -> Result<LinkOutcome, Self::Error> {
        match action {
            LinkAction::RegisterBeer { beer, upc } => {
                self.claim_upc(beer, upc)?;
                Ok(LinkOutcome::Registered)
            }
            LinkAction::ClaimUpc { beer, upc } => {
                if !self.beers.contains_key(&beer) {
                    return Err(LinkError::UnknownRecords(vec![RecordRef::Beer(beer)]));
                }
                Ok(LinkOutcome::Changed(self.claim_upc(beer, upc)?))
            }
            LinkAction::RetireBeer(beer) => self.retire_beer(beer),
            LinkAction::RegisterCategory(category) => {
                self.categories.insert(category);
                self.touch();
                Ok(LinkOutcome::Registered)
            }
            LinkAction::RetireCategory(category) => {
                self.categories.remove(&category);
                let detached = self.beer_categories.detach_right(category).len();
                self.touch();
                Ok(LinkOutcome::Retired(detached))
            }
            LinkAction::RegisterCustomer(customer) => {
                self.customers.insert(customer);
                self.touch();
                Ok(LinkOutcome::Registered)
            }
            LinkAction::RetireCustomer(customer) => self.retire_customer(customer),
            LinkAction::AttachCategory { beer, category } => self.attach_category(beer, category),
            LinkAction::DetachCategory { beer, category } => {
                let changed = self.beer_categories.unlink(beer, category);
                self.touch();
                Ok(LinkOutcome::Changed(changed))
            }
            LinkAction::AttachOrder {
                order,
                customer,
                beers,
            } => self.attach_order(order, customer, beers),
            LinkAction::DetachOrder(order) => Ok(self.detach_order(order)),
            LinkAction::CategoriesOf(beer) => {
                Ok(LinkOutcome::Categories(self.beer_categories.rights(beer)))
            }
            LinkAction::BeersIn(category) => {
                Ok(LinkOutcome::Beers(self.beer_categories.lefts(category)))
            }
            LinkAction::OrdersOf(customer) => {
                Ok(LinkOutcome::Orders(self.customer_orders.rights(customer)))
            }
            LinkAction::OrdersForBeer(beer) => {
                Ok(LinkOutcome::Orders(self.order_beers.lefts(beer)))
            }
        }
    }
}
