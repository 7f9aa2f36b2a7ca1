use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use std::collections::HashMap;

use super::periodo_de;
use crate::filtros::{CADENAS, recalcular, resolver_cadena};
use crate::periodos::RegistroPeriodos;

/// GET /api/opciones?periodo=&cadena=&cambiado=&sel=v0,v1,...
/// Recalcula una cadena de selectores dependientes. `sel` trae la selección
/// vigente por nivel (posicional, vacío = sin selección); `cambiado` es el
/// índice del nivel que cambió. Sin `cambiado` se resiembra la cadena entera
/// (cambio de periodo o carga inicial).
pub async fn opciones_handler(
    registro: web::Data<RegistroPeriodos>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let qm = query.into_inner();

    let nombre = match qm.get("cadena").map(String::as_str) {
        Some(n) if !n.trim().is_empty() => n.trim(),
        _ => {
            return HttpResponse::BadRequest()
                .json(json!({"error": "el parámetro 'cadena' es obligatorio", "cadenas": CADENAS}));
        }
    };

    let ctx = registro.get(periodo_de(&qm));
    let (campos, fuente) = match resolver_cadena(ctx, nombre) {
        Some(c) => c,
        None => {
            return HttpResponse::BadRequest().json(json!({
                "error": format!("cadena desconocida: '{}'", nombre),
                "cadenas": CADENAS,
            }));
        }
    };

    let seleccion: Vec<Option<String>> = qm
        .get("sel")
        .map(|s| {
            s.split(',')
                .map(|v| {
                    let v = v.trim();
                    if v.is_empty() { None } else { Some(v.to_string()) }
                })
                .collect()
        })
        .unwrap_or_default();

    let mantener = qm
        .get("cambiado")
        .and_then(|s| s.parse::<usize>().ok())
        .map(|k| k + 1)
        .unwrap_or(0);

    let selectores = recalcular(&fuente, campos, &seleccion, mantener);
    HttpResponse::Ok().json(json!({
        "cadena": nombre,
        "selectores": selectores,
    }))
}
