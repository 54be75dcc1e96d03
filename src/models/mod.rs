pub mod mood;
pub mod note;
pub mod study_session;
pub mod task;
