//! Shared wiring for HTTP integration tests.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use async_trait::async_trait;
use uuid::Uuid;

use item_service::RequestTrace;
use item_service::domain::ports::ItemCommand;
use item_service::domain::{Item, ItemError, ItemService};
use item_service::inbound::http::configure;
use item_service::inbound::http::health::HealthState;
use item_service::inbound::http::state::HttpState;
use item_service::outbound::events::ItemEventBus;
use item_service::outbound::persistence::PooledItemRepository;
use item_service::test_support::MemoryConnectionSource;

pub type TestService = ItemService<PooledItemRepository<MemoryConnectionSource>, ItemEventBus>;

/// Command port that re-keys every new item to one identifier, standing in
/// for an id generator collision.
pub struct FixedIdCommands {
    inner: Arc<TestService>,
    id: Uuid,
}

impl FixedIdCommands {
    pub fn new(inner: Arc<TestService>, id: Uuid) -> Self {
        Self { inner, id }
    }
}

#[async_trait]
impl ItemCommand for FixedIdCommands {
    async fn create_item(&self, item: Item) -> Result<Item, ItemError> {
        let (_, name) = item.into_parts();
        self.inner.create_item(Item::new(self.id, name)).await
    }
}

/// Fully wired application over an in-memory store.
pub struct TestApp {
    pub source: MemoryConnectionSource,
    pub events: Arc<ItemEventBus>,
    pub service: Arc<TestService>,
}

impl TestApp {
    pub fn new() -> Self {
        let source = MemoryConnectionSource::new();
        let events = Arc::new(ItemEventBus::new(16));
        let repository = Arc::new(PooledItemRepository::new(Arc::new(source.clone())));
        let service = Arc::new(ItemService::new(repository, Arc::clone(&events)));
        Self {
            source,
            events,
            service,
        }
    }

    /// State routing queries and commands to the service.
    pub fn state(&self) -> HttpState {
        HttpState::from_service(Arc::clone(&self.service))
    }

    /// State whose commands all target `id`.
    pub fn state_with_fixed_id(&self, id: Uuid) -> HttpState {
        HttpState::new(
            self.service.clone(),
            Arc::new(FixedIdCommands::new(Arc::clone(&self.service), id)),
        )
    }
}

/// Initialise the routed application for `state`.
pub async fn init(
    state: HttpState,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let health = HealthState::new();
    health.mark_serving();
    test::init_service(
        App::new()
            .app_data(web::Data::new(health))
            .app_data(web::Data::new(state))
            .wrap(RequestTrace)
            .configure(configure),
    )
    .await
}
