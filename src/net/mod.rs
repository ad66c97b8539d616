//! Netzwerk-Randschicht: Erreichbarkeits-Monitor.

pub mod monitor;

pub use monitor::NetworkMonitor;
