pub mod config;
pub mod controller;
pub mod form;
pub mod gateway;
pub mod list_view;
pub mod notification;

pub use controller::{Dashboard, PetChange};
pub use gateway::{ApiClient, GatewayError, PetApi};
