use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use std::collections::HashMap;

use super::periodo_de;
use crate::periodos::RegistroPeriodos;

/// GET /api/alumnos?periodo=&grado=&seccion=&curso=
/// Tabla por alumno: las competencias del curso en el orden de la hoja y una
/// fila por alumno del grado/sección con sus niveles ("-" donde no hay nota).
pub async fn alumnos_handler(
    registro: web::Data<RegistroPeriodos>,
    query: web::Query<HashMap<String, String>>,
) -> impl Responder {
    let qm = query.into_inner();

    let requerido = |nombre: &str| -> Option<String> {
        qm.get(nombre)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };
    let (grado, seccion, curso) = match (requerido("grado"), requerido("seccion"), requerido("curso")) {
        (Some(g), Some(s), Some(c)) => (g, s, c),
        _ => {
            return HttpResponse::BadRequest().json(json!({
                "error": "se requieren los parámetros 'grado', 'seccion' y 'curso'",
            }));
        }
    };

    let ctx = registro.get(periodo_de(&qm));
    let columnas = ctx.mapeo.columnas_de_curso(&curso);
    let competencias: Vec<&str> = columnas.iter().map(|(_, c)| *c).collect();

    let filas: Vec<serde_json::Value> = ctx
        .alumnos
        .iter()
        .filter(|a| a.grado == grado && a.seccion == seccion)
        .map(|a| {
            let niveles: Vec<&str> = columnas
                .iter()
                .map(|(idx, _)| {
                    a.niveles
                        .get(idx)
                        .map(String::as_str)
                        .filter(|n| !n.is_empty())
                        .unwrap_or("-")
                })
                .collect();
            json!({"nro": a.id, "alumno": a.nombre, "niveles": niveles})
        })
        .collect();

    HttpResponse::Ok().json(json!({
        "grado": grado,
        "seccion": seccion,
        "curso": curso,
        "competencias": competencias,
        "total": filas.len(),
        "alumnos": filas,
    }))
}
