// Estructuras compartidas con el backend + lógica pura sobre ellas

pub mod auth;
pub mod client;
pub mod contact;
pub mod employee;
pub mod session;
pub mod shipment;

pub use auth::*;
pub use client::*;
pub use contact::*;
pub use employee::*;
pub use session::*;
pub use shipment::*;
