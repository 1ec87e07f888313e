pub mod create_task_dto;
