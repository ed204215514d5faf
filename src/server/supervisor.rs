//! # Supervisor de Handlers
//! src/server/supervisor.rs
//!
//! Contabilidad de los threads que atienden conexiones. El acceptor spawnea
//! cada handler a través del supervisor en vez de soltarlo al vacío: los
//! handles quedan guardados, se cosechan sin bloquear en cada iteración de
//! accept y sus desenlaces (error del pipeline o pánico) quedan en el log.
//!
//! El supervisor vive en el thread del acceptor y nadie más lo toca, así
//! que no necesita sincronización propia.

use super::handler::HandlerError;
use std::thread::{self, JoinHandle};

/// Resultado que produce cada thread de handler al terminar
type HandlerOutcome = Result<(), HandlerError>;

/// Un handler vivo: su nombre y el handle para cosecharlo
struct SupervisedHandler {
    peer: String,
    handle: JoinHandle<HandlerOutcome>,
}

/// Lleva los threads de handlers: spawn con nombre, cosecha y log
pub struct HandlerSupervisor {
    handlers: Vec<SupervisedHandler>,

    /// Total de handlers spawneados desde el arranque; numera los threads
    spawned: u64,
}

impl HandlerSupervisor {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            spawned: 0,
        }
    }

    /// Lanza un handler en su propio thread, sin esperar a que termine
    ///
    /// El thread queda registrado para la próxima cosecha. Si el spawn
    /// mismo falla (límite de threads del SO), la conexión se descarta y
    /// el error queda en el log; el acceptor sigue.
    pub fn spawn<F>(&mut self, peer: String, work: F)
    where
        F: FnOnce() -> HandlerOutcome + Send + 'static,
    {
        self.spawned += 1;
        let name = format!("handler-{}", self.spawned);

        match thread::Builder::new().name(name).spawn(work) {
            Ok(handle) => self.handlers.push(SupervisedHandler { peer, handle }),
            Err(e) => eprintln!("   ❌ No se pudo spawnear handler para {}: {}", peer, e),
        }
    }

    /// Cosecha los handlers que ya terminaron, sin bloquear
    ///
    /// Los que siguen corriendo quedan en la lista. De los terminados se
    /// registra el desenlace: éxito en silencio, error del pipeline con su
    /// detalle y pánico como tal.
    pub fn reap_finished(&mut self) {
        let mut still_running = Vec::with_capacity(self.handlers.len());

        for supervised in self.handlers.drain(..) {
            if !supervised.handle.is_finished() {
                still_running.push(supervised);
                continue;
            }

            match supervised.handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(error)) => {
                    eprintln!("   ⚠️  Handler de {} terminó con error: {}", supervised.peer, error)
                }
                Err(_) => {
                    eprintln!("   ❌ Handler de {} terminó en pánico", supervised.peer)
                }
            }
        }

        self.handlers = still_running;
    }

    /// Cantidad de handlers todavía registrados (corriendo o sin cosechar)
    pub fn active(&self) -> usize {
        self.handlers.len()
    }

    /// Total de handlers spawneados desde el arranque
    pub fn total_spawned(&self) -> u64 {
        self.spawned
    }
}

impl Default for HandlerSupervisor {
    fn default() -> Self {
        Self::new()
    }
}
