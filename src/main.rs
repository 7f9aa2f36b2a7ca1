// --- Panel Académico de Competencias - Archivo principal ---

use panelaula::excel::get_datafiles_dir;
use panelaula::periodos::RegistroPeriodos;
use panelaula::run_server;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    println!("=== Panel Académico de Competencias (API) ===");
    println!("[*] {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));

    let dir = get_datafiles_dir();
    println!("[*] Directorio de datos: {:?}", dir);

    let registro = match RegistroPeriodos::cargar_todos(&dir) {
        Ok(r) => {
            println!(
                "[OK] Periodos disponibles: {:?} (defecto: {})",
                r.disponibles(),
                r.defecto()
            );
            r
        }
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            std::process::exit(1);
        }
    };

    let puerto = std::env::var("PANEL_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8050);
    let bind = format!("0.0.0.0:{}", puerto);
    println!("[*] Iniciando servidor en http://{}", bind);
    run_server(registro, &bind).await
}
