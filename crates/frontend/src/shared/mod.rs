pub mod api_utils;
pub mod bulk_actions;
pub mod components;
pub mod icons;
pub mod messages;
pub mod modal_frame;
pub mod navigator;
pub mod notifier;
