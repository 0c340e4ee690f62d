pub(crate) mod todo;

use std::sync::Arc;

use crate::{
    storage::{CloseStorage, HealthStorage, TodoStorage},
    utils::measure_metrics::measure_and_record_service,
};
use todo::ServiceTodoRef;
use tracing::{info, instrument};

use crate::handlers::error::AppError;

/// Cloneable handle over the storage backend, shared by all handlers.
#[derive(Clone)]
pub struct Service {
    todo_storage: Arc<dyn TodoStorage>,
    health_storage: Arc<dyn HealthStorage>,
    close_storage: Arc<dyn CloseStorage>,
}

impl Service {
    #[instrument(name = "Service::new", skip_all)]
    pub fn new(
        todo_storage: Arc<dyn TodoStorage>,
        health_storage: Arc<dyn HealthStorage>,
        close_storage: Arc<dyn CloseStorage>,
    ) -> Self {
        Self {
            todo_storage,
            health_storage,
            close_storage,
        }
    }

    pub fn todo(&self) -> ServiceTodoRef {
        ServiceTodoRef::new(self.todo_storage.clone())
    }

    #[instrument(name = "Service::check_health", skip_all)]
    pub async fn check_health(&self) -> Result<(), AppError> {
        measure_and_record_service("check_health", || async {
            self.health_storage
                .ping()
                .await
                .map_err(|e| AppError::Unhealthy(e.to_string()))
        })
        .await
    }

    pub async fn close_storage(&self) {
        info!("closing storage");
        self.close_storage.close().await;
    }
}
