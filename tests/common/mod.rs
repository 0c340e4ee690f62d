#![allow(dead_code, unused_imports)]

mod client;
mod server;

use axum::Router;
pub use client::TestAppClient;
use todo_service::Service;
use todo_service::{build_app, Settings};

pub use server::{spawn_test_app, TestAppHandle};
use todo_service::TestStorageBuilder;

#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

pub struct TestApp {
    pub router: Router,
    pub service: Service,
}

pub async fn create_test_app(todo_count: usize) -> TestApp {
    let builder = TestStorageBuilder::new().await.with_todos(todo_count);

    let service = Service::new(
        builder.build_todo().await,
        builder.build_health(),
        builder.build_close(),
    );

    let settings = Settings::from_file("test").unwrap();

    TestApp {
        router: build_app(service.clone(), &settings),
        service,
    }
}
