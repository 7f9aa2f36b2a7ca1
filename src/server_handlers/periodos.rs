use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use std::collections::HashMap;

use super::periodo_de;
use crate::periodos::RegistroPeriodos;

/// GET /api/periodos
/// Periodos cargados (en orden de configuración) y el defecto efectivo.
pub async fn periodos_handler(registro: web::Data<RegistroPeriodos>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "periodos": registro.disponibles(),
        "defecto": registro.defecto(),
    }))
}

/// GET /api/resumen?periodo=II
/// Totales generales del periodo (tarjetas de métricas).
pub async fn resumen_handler(
    registro: web::Data<RegistroPeriodos>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let qm = query.into_inner();
    let ctx = registro.get(periodo_de(&qm));
    HttpResponse::Ok().json(&ctx.resumen)
}
