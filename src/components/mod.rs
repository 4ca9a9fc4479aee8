//! UI Components
//!
//! Leptos components for the todo list.

mod new_todo_form;
mod filter_bar;
mod todo_list_view;
mod todo_row;
mod list_footer;
mod dev_log;

pub use new_todo_form::NewTodoForm;
pub use filter_bar::FilterBar;
pub use todo_list_view::TodoListView;
pub use todo_row::TodoRow;
pub use list_footer::ListFooter;
pub use dev_log::DevLog;
