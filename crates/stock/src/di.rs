use crate::{
    abstract_trait::{
        dashboard::DynDashboardService,
        movement::{
            repository::{DynMovementCommandRepository, DynMovementQueryRepository},
            service::{DynMovementCommandService, DynMovementQueryService},
        },
        product::{
            repository::{DynProductCommandRepository, DynProductQueryRepository},
            service::{DynProductCommandService, DynProductQueryService},
        },
    },
    repository::{
        movement::{MovementCommandRepository, MovementQueryRepository},
        product::{ProductCommandRepository, ProductQueryRepository},
    },
    service::{
        dashboard::DashboardService,
        movement::{MovementCommandService, MovementQueryService},
        product::{ProductCommandService, ProductQueryService},
    },
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub movement_query: DynMovementQueryService,
    pub movement_command: DynMovementCommandService,
    pub dashboard: DynDashboardService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .field("movement_query", &"MovementQueryService")
            .field("movement_command", &"MovementCommandService")
            .field("dashboard", &"DashboardService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let product_query_repo =
            Arc::new(ProductQueryRepository::new(pool.clone())) as DynProductQueryRepository;
        let product_command_repo =
            Arc::new(ProductCommandRepository::new(pool.clone())) as DynProductCommandRepository;
        let movement_query_repo =
            Arc::new(MovementQueryRepository::new(pool.clone())) as DynMovementQueryRepository;
        let movement_command_repo =
            Arc::new(MovementCommandRepository::new(pool)) as DynMovementCommandRepository;

        let product_query = Arc::new(ProductQueryService::new(product_query_repo.clone()))
            as DynProductQueryService;
        let product_command =
            Arc::new(ProductCommandService::new(product_command_repo)) as DynProductCommandService;
        let movement_query = Arc::new(MovementQueryService::new(movement_query_repo.clone()))
            as DynMovementQueryService;
        let movement_command = Arc::new(MovementCommandService::new(movement_command_repo))
            as DynMovementCommandService;

        // The dashboard reads through the same repositories as the other services.
        let dashboard = Arc::new(DashboardService::new(product_query_repo, movement_query_repo))
            as DynDashboardService;

        Self {
            product_query,
            product_command,
            movement_query,
            movement_command,
            dashboard,
        }
    }
}
