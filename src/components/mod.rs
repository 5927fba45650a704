//! UI Components

mod task_card;
mod task_form;
mod task_list;

pub use task_card::TaskCard;
pub use task_form::TaskForm;
pub use task_list::TaskList;
