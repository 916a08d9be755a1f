//! DeepSphere - conversational travel assistant backend

pub mod application;
pub mod domain;
pub mod infrastructure;
