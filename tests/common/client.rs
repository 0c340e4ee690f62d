#![allow(dead_code)]
use reqwest::{Method, Url};
use serde_json::Value;

pub struct TestAppClient {
    url: Url,
    client: reqwest::Client,
}

impl TestAppClient {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    fn todo_url(&self, todo_id: &str) -> Url {
        self.url.join("todos/").unwrap().join(todo_id).unwrap()
    }

    pub async fn health(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url.join(path).unwrap())
            .send()
            .await
            .unwrap()
    }

    pub async fn create_todo(&self, text: &str) -> reqwest::Response {
        self.create_todo_with_body(serde_json::json!({ "text": text }))
            .await
    }

    pub async fn create_todo_with_body(&self, body: Value) -> reqwest::Response {
        self.client
            .post(self.url.join("todos").unwrap())
            .json(&body)
            .send()
            .await
            .unwrap()
    }

    pub async fn create_todo_with_raw_body(&self, body: &'static str) -> reqwest::Response {
        self.client
            .post(self.url.join("todos").unwrap())
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap()
    }

    pub async fn get_todo(&self, todo_id: &str) -> reqwest::Response {
        self.client
            .get(self.todo_url(todo_id))
            .send()
            .await
            .unwrap()
    }

    pub async fn get_all_todos(&self) -> reqwest::Response {
        self.client
            .get(self.url.join("todos").unwrap())
            .send()
            .await
            .unwrap()
    }

    pub async fn update_todo(&self, todo_id: &str, patch: Value) -> reqwest::Response {
        self.client
            .put(self.todo_url(todo_id))
            .json(&patch)
            .send()
            .await
            .unwrap()
    }

    pub async fn delete_todo(&self, todo_id: &str) -> reqwest::Response {
        self.client
            .delete(self.todo_url(todo_id))
            .send()
            .await
            .unwrap()
    }

    pub async fn preflight(&self, origin: &str, method: &str) -> reqwest::Response {
        self.client
            .request(Method::OPTIONS, self.url.join("todos").unwrap())
            .header("Origin", origin)
            .header("Access-Control-Request-Method", method)
            .header("Access-Control-Request-Headers", "content-type,x-custom")
            .send()
            .await
            .unwrap()
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url.join(path).unwrap())
            .send()
            .await
            .unwrap()
    }
}
