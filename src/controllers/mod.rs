pub mod data;
pub mod health;
pub mod moods;
pub mod notes;
pub mod sessions;
pub mod stats;
pub mod tasks;
pub mod tips;
