//! Concrete version finder implementations

mod checkout;

pub use checkout::CheckoutVersionFinder;
