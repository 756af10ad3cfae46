//! Remote Resource Client
//!
//! Four calls against the fixed `/todos` collection. Nothing here retries, times out
//! or cancels; a failure is reported once and the caller decides what to show.

use std::rc::Rc;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::model::{NewTodo, Todo, TodoId};

/// The remote `/todos` collection
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// GET the collection and keep the first `limit` entries
    async fn list(&self, limit: usize) -> ApiResult<Vec<Todo>>;

    /// POST a new todo; the echo's id is not durable
    async fn create(&self, draft: &NewTodo) -> ApiResult<Todo>;

    /// PUT the full todo; the response body is read and dropped
    async fn replace(&self, todo: &Todo) -> ApiResult<()>;

    /// DELETE by id
    async fn delete(&self, id: TodoId) -> ApiResult<()>;
}

#[async_trait(?Send)]
impl<T: TodoApi + ?Sized> TodoApi for Rc<T> {
    async fn list(&self, limit: usize) -> ApiResult<Vec<Todo>> {
        (**self).list(limit).await
    }

    async fn create(&self, draft: &NewTodo) -> ApiResult<Todo> {
        (**self).create(draft).await
    }

    async fn replace(&self, todo: &Todo) -> ApiResult<()> {
        (**self).replace(todo).await
    }

    async fn delete(&self, id: TodoId) -> ApiResult<()> {
        (**self).delete(id).await
    }
}

#[async_trait(?Send)]
impl<T: TodoApi + ?Sized> TodoApi for &T {
    async fn list(&self, limit: usize) -> ApiResult<Vec<Todo>> {
        (**self).list(limit).await
    }

    async fn create(&self, draft: &NewTodo) -> ApiResult<Todo> {
        (**self).create(draft).await
    }

    async fn replace(&self, todo: &Todo) -> ApiResult<()> {
        (**self).replace(todo).await
    }

    async fn delete(&self, id: TodoId) -> ApiResult<()> {
        (**self).delete(id).await
    }
}

/// `TodoApi` over HTTP using reqwest (fetch in the browser, hyper natively)
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: Client,
    config: ClientConfig,
}

impl HttpTodoApi {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

/// Map a non-2xx response to `ApiError::Status`
fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self, limit: usize) -> ApiResult<Vec<Todo>> {
        let url = self.config.collection_url();
        debug!("GET {}", url);
        let response = ensure_success(self.client.get(&url).send().await?)?;
        let mut todos: Vec<Todo> = response.json().await?;
        todos.truncate(limit);
        Ok(todos)
    }

    async fn create(&self, draft: &NewTodo) -> ApiResult<Todo> {
        let url = self.config.collection_url();
        debug!("POST {} title={:?}", url, draft.title);
        let response = ensure_success(self.client.post(&url).json(draft).send().await?)?;
        Ok(response.json().await?)
    }

    async fn replace(&self, todo: &Todo) -> ApiResult<()> {
        let url = self.config.item_url(todo.id);
        debug!("PUT {} completed={}", url, todo.completed);
        let response = ensure_success(self.client.put(&url).json(todo).send().await?)?;
        response.bytes().await?;
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> ApiResult<()> {
        let url = self.config.item_url(id);
        debug!("DELETE {}", url);
        ensure_success(self.client.delete(&url).send().await?)?;
        Ok(())
    }
}
