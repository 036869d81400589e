//! Page components for Agency Access.

mod access;

pub use access::AccessScreen;
