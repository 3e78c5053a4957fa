//! PostgreSQL repository implementations of the store traits.

pub mod task_list;
pub mod todo;
pub mod user;

pub use task_list::TaskListRepository;
pub use todo::ToDoRepository;
pub use user::UserRepository;
