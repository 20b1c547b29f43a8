// src/models/mod.rs

pub mod priority;
pub mod task;
