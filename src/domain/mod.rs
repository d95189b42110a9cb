//! Domain layer: payment and user models, plus the ports the application
//! layer depends on (validation, payment storage, user directory).

pub mod payment;
pub mod ports;
pub mod user;
pub mod validation;
