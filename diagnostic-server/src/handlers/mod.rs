//! HTTP handlers

pub mod health;
pub mod metadata;
pub mod predict;

#[cfg(test)]
mod tests;
