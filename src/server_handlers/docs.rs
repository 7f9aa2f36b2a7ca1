use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::filtros::CADENAS;
use crate::periodos::TABLAS;

const PAGINA_HTML: &str = include_str!("../pagina.html");

/// GET /
/// Página del panel, embebida en el binario.
pub async fn pagina_handler() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(PAGINA_HTML)
}

/// GET /api/help
pub async fn help_handler() -> impl Responder {
    let help = json!({
        "description": "API del panel de competencias. Todos los endpoints aceptan ?periodo=; un periodo desconocido degrada al defecto.",
        "endpoints": {
            "GET /api/periodos": "periodos cargados y defecto",
            "GET /api/resumen?periodo=": "totales del periodo",
            "GET /api/agregado/{tabla}?periodo=&grado=&seccion=&curso=&competencia=": "filas de una tabla agregada, filtradas",
            "GET /api/opciones?periodo=&cadena=&cambiado=&sel=": "recalcula una cadena de selectores",
            "GET /api/alumnos?periodo=&grado=&seccion=&curso=": "tabla de niveles por alumno",
        },
        "tablas": TABLAS,
        "cadenas": CADENAS,
        "ejemplo": "/api/agregado/por_curso_competencia?periodo=II&curso=MATEMÁTICA",
        "hora_servidor": chrono::Local::now().to_rfc3339(),
    });
    HttpResponse::Ok().json(help)
}
