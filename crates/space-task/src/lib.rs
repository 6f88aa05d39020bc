//! `space-task` — task entities, the task store, and the dynamic task
//! generator for the SPACE simulator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                          |
//! |---------------|-----------------------------------------------------|
//! | [`task`]      | `Task`, `Task::reduce_amount`                       |
//! | [`store`]     | `TaskStore` (owns every task, hands out fresh IDs)  |
//! | [`generator`] | `DynamicTaskGenerator`, `DynamicTaskGenerationConfig`|
//! | [`error`]     | `TaskError`, `TaskResult<T>`                        |

pub mod error;
pub mod generator;
pub mod store;
pub mod task;


pub use error::{TaskError, TaskResult};
pub use generator::{AmountRange, DynamicTaskGenerationConfig, DynamicTaskGenerator, TaskArea};
pub use store::TaskStore;
pub use task::Task;
