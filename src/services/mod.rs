pub mod adjustment_service;
pub mod catalog;
pub mod generation_service;
pub mod offline_service;
pub mod preference_service;
