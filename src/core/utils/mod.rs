// Macros first: everything below may use them
#[macro_use]
mod safety;
#[macro_use]
mod log;
