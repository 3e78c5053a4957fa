//! Shared fixtures for service unit tests.

use std::sync::Arc;

use tasklist_auth::{CollaboratorChecker, PasswordHasher, PasswordValidator, TokenCodec};
use tasklist_core::config::AuthConfig;
use tasklist_database::Stores;

use crate::auth::{AuthService, SignUpInput};
use crate::context::RequestContext;
use crate::task_list::TaskListService;
use crate::todo::ToDoService;

pub(crate) struct Fixture {
    pub stores: Stores,
    pub codec: Arc<TokenCodec>,
    pub auth: AuthService,
    pub task_lists: TaskListService,
    pub todos: ToDoService,
}

impl Fixture {
    pub fn new() -> Self {
        let config = AuthConfig::default();
        let stores = Stores::memory();
        let codec = Arc::new(TokenCodec::new(&config));
        let checker = Arc::new(CollaboratorChecker::new(stores.task_lists.clone()));

        let auth = AuthService::new(
            stores.users.clone(),
            codec.clone(),
            Arc::new(PasswordHasher::new()),
            Arc::new(PasswordValidator::new(&config)),
        );
        let task_lists = TaskListService::new(
            stores.task_lists.clone(),
            stores.todos.clone(),
            stores.users.clone(),
            checker.clone(),
        );
        let todos = ToDoService::new(stores.todos.clone(), checker);

        Self {
            stores,
            codec,
            auth,
            task_lists,
            todos,
        }
    }

    /// Signs up a user and returns a context acting as them.
    pub async fn sign_up(&self, name: &str) -> RequestContext {
        let payload = self
            .auth
            .sign_up(SignUpInput {
                name: name.to_string(),
                email: format!("{}@example.com", name.to_lowercase()),
                password: "password123".to_string(),
                avatar: None,
            })
            .await
            .unwrap();
        RequestContext::authenticated(payload.user)
    }
}
