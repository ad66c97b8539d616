//! Erreichbarkeits-Monitor: periodische TCP-Probe in einem eigenen
//! Thread, als Scoped-Ressource mit garantierter Freigabe beim Drop.
//!
//! Der UI-Thread pollt `is_online()` pro Frame und erzeugt daraus
//! `ConnectivityChanged`-Intents; Tests konstruieren keinen Monitor,
//! sondern injizieren die Intents direkt.

use std::net::{TcpStream, ToSocketAddrs};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// Timeout eines einzelnen Verbindungsversuchs.
const PROBE_TIMEOUT: Duration = Duration::from_secs(3);
/// Schrittweite beim Warten, damit der Thread zügig stoppbar bleibt.
const STOP_POLL_STEP: Duration = Duration::from_millis(200);

/// Beobachtet die Erreichbarkeit eines Hosts.
///
/// Bis zur ersten erfolgreichen Probe gilt die Verbindung als offline.
pub struct NetworkMonitor {
    online: Arc<AtomicBool>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl NetworkMonitor {
    /// Startet den Monitor für `host` (Format `host:port`).
    pub fn start(host: String, interval: Duration) -> Self {
        let online = Arc::new(AtomicBool::new(false));
        let stop = Arc::new(AtomicBool::new(false));

        let thread_online = Arc::clone(&online);
        let thread_stop = Arc::clone(&stop);
        let spawned = std::thread::Builder::new()
            .name("net-monitor".to_string())
            .spawn(move || {
                log::info!("Erreichbarkeits-Monitor gestartet fuer {}", host);
                while !thread_stop.load(Ordering::Relaxed) {
                    let reachable = probe(&host, PROBE_TIMEOUT);
                    thread_online.store(reachable, Ordering::Relaxed);

                    let mut waited = Duration::ZERO;
                    while waited < interval && !thread_stop.load(Ordering::Relaxed) {
                        std::thread::sleep(STOP_POLL_STEP);
                        waited += STOP_POLL_STEP;
                    }
                }
            });

        // Ohne Thread bleibt der Status dauerhaft offline.
        let handle = match spawned {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("Erreichbarkeits-Monitor konnte nicht starten: {}", e);
                None
            }
        };

        Self {
            online,
            stop,
            handle,
        }
    }

    /// Letztes Probenergebnis; `false` solange noch keine Probe lief.
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Relaxed)
    }
}

impl Drop for NetworkMonitor {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("Erreichbarkeits-Monitor unsauber beendet");
            }
        }
    }
}

/// Eine einzelne Probe: TCP-Connect auf eine der aufgelösten Adressen.
/// Auflösungs- und Verbindungsfehler gelten beide als offline.
fn probe(host: &str, timeout: Duration) -> bool {
    match host.to_socket_addrs() {
        Ok(addrs) => addrs
            .into_iter()
            .any(|addr| TcpStream::connect_timeout(&addr, timeout).is_ok()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_unresolvable_host_is_offline() {
        assert!(!probe("host.invalid:443", Duration::from_millis(100)));
    }

    #[test]
    fn test_probe_without_port_is_offline() {
        // Ohne Port schlägt bereits die Adress-Auflösung fehl.
        assert!(!probe("tile.openstreetmap.org", Duration::from_millis(100)));
    }

    #[test]
    fn test_monitor_starts_offline_and_stops_on_drop() {
        let monitor = NetworkMonitor::start(
            "host.invalid:443".to_string(),
            Duration::from_secs(60),
        );
        assert!(!monitor.is_online());
        drop(monitor); // darf nicht haengen
    }
}
