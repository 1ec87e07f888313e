pub mod task_family;
