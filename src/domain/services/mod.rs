pub mod actions;
pub mod advisory;
pub mod classifier;
pub mod conversation;
pub mod events;
pub mod fallback;
pub mod features;
pub mod responses;
pub mod view;
pub mod voice;
