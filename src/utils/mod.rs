// src/utils/mod.rs

pub mod email;
pub mod html;
pub mod url;
pub mod validate;
