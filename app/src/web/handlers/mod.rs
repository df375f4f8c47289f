// app/src/web/handlers/mod.rs

// Declare handler modules
pub mod cart_handlers;
pub mod catalog_handlers;
pub mod checkout_handlers;
pub mod session_handlers;
