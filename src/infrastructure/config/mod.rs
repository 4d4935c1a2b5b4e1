//! Configuration infrastructure

mod xdg;

pub use xdg::XdgConfigStore;
