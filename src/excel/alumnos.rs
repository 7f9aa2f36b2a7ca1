use std::collections::HashMap;

use super::CargaError;
use super::hoja::{
    ETIQUETA_GRADO, ETIQUETA_NOMBRE, ETIQUETA_NRO, ETIQUETA_SECCION, HojaData,
};
use crate::models::Alumno;

/// Parsea un id de alumno: entero positivo obligatorio. Una fila sin id
/// válido no es un alumno.
fn parsear_id(celda: &str, fila: usize) -> Result<u32, CargaError> {
    match celda.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CargaError::FilaInvalida {
            fila,
            valor: celda.trim().to_string(),
        }),
    }
}

/// Lee los alumnos de la hoja. Las filas cuyo id no parsea como entero
/// positivo se descartan una a una; la carga continúa. Devuelve también
/// cuántas filas se descartaron. Las filas completamente vacías (colas de la
/// hoja) se saltan sin contar.
pub fn leer_alumnos(hoja: &HojaData) -> (Vec<Alumno>, usize) {
    let col_id = hoja.col_identidad(ETIQUETA_NRO);
    let col_grado = hoja.col_identidad(ETIQUETA_GRADO);
    let col_seccion = hoja.col_identidad(ETIQUETA_SECCION);
    let col_nombre = hoja.col_identidad(ETIQUETA_NOMBRE);

    let celda = |fila: &[String], col: usize| -> String {
        fila.get(col).map(|c| c.trim().to_string()).unwrap_or_default()
    };

    let mut alumnos: Vec<Alumno> = Vec::new();
    let mut descartadas = 0usize;

    for (i, fila) in hoja.filas_datos().iter().enumerate() {
        if fila.iter().all(|c| c.trim().is_empty()) {
            continue;
        }

        let nro_fila = hoja.fila_encabezado + 1 + i;
        let id = match parsear_id(&celda(fila, col_id), nro_fila) {
            Ok(id) => id,
            Err(e) => {
                eprintln!("⚠️  {}; fila descartada", e);
                descartadas += 1;
                continue;
            }
        };

        let mut niveles: HashMap<usize, String> = HashMap::new();
        for (idx, _) in &hoja.columnas_competencia {
            niveles.insert(*idx, celda(fila, *idx));
        }

        alumnos.push(Alumno {
            id,
            grado: celda(fila, col_grado),
            seccion: celda(fila, col_seccion),
            nombre: celda(fila, col_nombre),
            niveles,
        });
    }

    (alumnos, descartadas)
}
