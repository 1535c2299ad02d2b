//! Listener contracts, one per operation signature
//!
//! Operations whose before and after callbacks take the same parameters
//! share a single contract (`OnClick`); the others come in `...Before` /
//! `...After` pairs, the after variant additionally receiving the raw
//! result.

mod alert;
mod driver;
mod element;
mod exception;
mod input;
mod navigation;
mod options;

pub use alert::*;
pub use driver::*;
pub use element::*;
pub use exception::OnException;
pub use input::*;
pub use navigation::*;
pub use options::*;

#[cfg(test)]
mod tests;
