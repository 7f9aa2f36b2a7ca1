use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use std::collections::HashMap;

use super::periodo_de;
use crate::filtros::filtrar;
use crate::models::Campo;
use crate::periodos::{RegistroPeriodos, TABLAS};

/// GET /api/agregado/{tabla}?periodo=&grado=&seccion=&curso=&competencia=
/// Filas de una de las seis tablas agregadas, filtradas por los campos que
/// vengan en la query. Alimenta los gráficos de barras del panel.
pub async fn agregado_handler(
    registro: web::Data<RegistroPeriodos>,
    path: web::Path<String>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let tabla = path.into_inner();
    let qm = query.into_inner();
    let ctx = registro.get(periodo_de(&qm));

    let filas = match ctx.tabla(&tabla) {
        Some(f) => f,
        None => {
            return HttpResponse::BadRequest().json(json!({
                "error": format!("tabla desconocida: '{}'", tabla),
                "tablas": TABLAS,
            }));
        }
    };

    let mut filtros: Vec<(Campo, String)> = Vec::new();
    for campo in Campo::TODOS {
        if let Some(valor) = qm.get(campo.nombre()) {
            if !valor.trim().is_empty() {
                filtros.push((campo, valor.trim().to_string()));
            }
        }
    }

    let seleccion = filtrar(filas, &filtros);
    HttpResponse::Ok().json(json!({
        "tabla": tabla,
        "total": seleccion.len(),
        "filas": seleccion,
    }))
}
