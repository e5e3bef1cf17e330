// src/models/mod.rs

pub mod style;
pub mod tour;
