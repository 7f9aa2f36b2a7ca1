// Biblioteca raíz del crate `panelaula`.
// Reexporta los módulos de la tubería (excel -> estadisticas -> periodos) y
// el servidor HTTP que la publica.
pub mod estadisticas;
pub mod excel;
pub mod filtros;
pub mod models;
pub mod periodos;
pub mod server;
pub mod server_handlers;

pub use server::run_server;
