//! Geteilte Typen: Laufzeit-Optionen und Konstanten.

pub mod options;

pub use options::DashboardOptions;
