use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

use super::CargaError;

/// Convierte una celda de calamine a String. Los flotantes de valor entero se
/// colapsan a su forma entera ("12.0" -> "12"): los ids de alumno llegan como
/// Float desde los libros reales.
pub fn celda_a_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Lee una hoja del libro como matriz de Strings, sin interpretar
/// encabezados. Falla si el archivo no existe o la hoja no está en el libro.
pub fn leer_hoja<P: AsRef<Path>>(path: P, hoja: &str) -> Result<Vec<Vec<String>>, CargaError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CargaError::FuenteNoEncontrada(path.to_path_buf()));
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| CargaError::Libro(e.to_string()))?;

    if !workbook.sheet_names().iter().any(|s| s.as_str() == hoja) {
        return Err(CargaError::Libro(format!(
            "el libro {:?} no contiene la hoja '{}'",
            path, hoja
        )));
    }

    let range = workbook
        .worksheet_range(hoja)
        .map_err(|e| CargaError::Libro(e.to_string()))?;

    let mut filas: Vec<Vec<String>> = Vec::new();
    for r in range.rows() {
        filas.push(r.iter().map(celda_a_string).collect());
    }
    Ok(filas)
}
