//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use tasklist_auth::acl::CollaboratorChecker;
use tasklist_auth::jwt::TokenCodec;
use tasklist_auth::password::{PasswordHasher, PasswordValidator};
use tasklist_auth::session::SessionResolver;
use tasklist_core::config::AppConfig;
use tasklist_database::Stores;
use tasklist_service::auth::AuthService;
use tasklist_service::task_list::TaskListService;
use tasklist_service::todo::ToDoService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Auth ─────────────────────────────────────────────────
    /// Authorization header to user resolver
    pub session_resolver: Arc<SessionResolver>,

    // ── Services ─────────────────────────────────────────────
    /// Sign-up / sign-in service
    pub auth_service: Arc<AuthService>,
    /// Task list service
    pub task_list_service: Arc<TaskListService>,
    /// To-do service
    pub todo_service: Arc<ToDoService>,
}

impl AppState {
    /// Wires auth primitives and services over the given stores.
    pub fn new(config: AppConfig, stores: Stores) -> Self {
        let token_codec = Arc::new(TokenCodec::new(&config.auth));
        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let collaborator_checker = Arc::new(CollaboratorChecker::new(Arc::clone(
            &stores.task_lists,
        )));

        let session_resolver = Arc::new(SessionResolver::new(
            Arc::clone(&token_codec),
            Arc::clone(&stores.users),
        ));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&stores.users),
            token_codec,
            password_hasher,
            password_validator,
        ));
        let task_list_service = Arc::new(TaskListService::new(
            Arc::clone(&stores.task_lists),
            Arc::clone(&stores.todos),
            Arc::clone(&stores.users),
            Arc::clone(&collaborator_checker),
        ));
        let todo_service = Arc::new(ToDoService::new(
            Arc::clone(&stores.todos),
            collaborator_checker,
        ));

        Self {
            config: Arc::new(config),
            session_resolver,
            auth_service,
            task_list_service,
            todo_service,
        }
    }
}
