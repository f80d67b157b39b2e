//! Taskboard: a minimal task-tracking core.
//!
//! This crate provides the use-case layer of a task tracker: creating,
//! listing, fetching, updating, and deleting tasks with a title, description,
//! due date, and a fixed workflow status. Presentation concerns (UI, HTTP,
//! CLI) live outside the crate and talk to the core through a small
//! request/response contract.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage interactions
//! - **Adapters**: Concrete implementations of ports (in-memory storage)
//! - **Services**: Use-case orchestration and the response envelope
//!
//! # Modules
//!
//! - [`task`]: Task entity, repository, and the task manager use-case layer

pub mod task;
