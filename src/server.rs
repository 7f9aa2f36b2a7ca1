use actix_cors::Cors;
use actix_web::{App, HttpServer, web};

use crate::periodos::RegistroPeriodos;
use crate::server_handlers as handlers;

/// Arranca el servidor HTTP. El registro se construye una sola vez y se
/// comparte de sólo lectura entre los workers.
pub async fn run_server(registro: RegistroPeriodos, bind_addr: &str) -> std::io::Result<()> {
    let datos = web::Data::new(registro);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(datos.clone())
            .route("/", web::get().to(handlers::pagina_handler))
            .route("/api/help", web::get().to(handlers::help_handler))
            .route("/api/periodos", web::get().to(handlers::periodos_handler))
            .route("/api/resumen", web::get().to(handlers::resumen_handler))
            .route("/api/agregado/{tabla}", web::get().to(handlers::agregado_handler))
            .route("/api/opciones", web::get().to(handlers::opciones_handler))
            .route("/api/alumnos", web::get().to(handlers::alumnos_handler))
    })
    .bind(bind_addr)?
    .run()
    .await
}
