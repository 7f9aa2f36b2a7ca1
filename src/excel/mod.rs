//! Módulo `excel`: lectura y estructuración de los libros fuente.
//!
//! Submódulos:
//! - `io`: helpers de lectura/parseo de celdas con calamine
//! - `hoja`: estructura de la hoja DATA (encabezados, columnas de identidad)
//! - `mapeo`: mapeo columna -> (curso, competencia) con relleno hacia adelante
//! - `alumnos`: parseo de las filas de alumnos

mod io;

/// Estructura de la hoja DATA: detección del encabezado real y columnas
pub mod hoja;

/// Mapeo columna -> (curso, competencia)
pub mod mapeo;

/// Parseo de filas de alumnos
pub mod alumnos;

pub use alumnos::leer_alumnos;
pub use hoja::HojaData;
pub use io::celda_a_string;
pub use io::leer_hoja;
pub use mapeo::MapeoColumnas;

use std::path::PathBuf;
use thiserror::Error;

/// Errores de la etapa de carga. Los tres primeros descartan el periodo
/// completo; `FilaInvalida` descarta una sola fila; `SinPeriodos` es fatal.
#[derive(Debug, Error)]
pub enum CargaError {
    #[error("archivo de origen no encontrado: {0}")]
    FuenteNoEncontrada(PathBuf),
    #[error("no se pudo leer el libro: {0}")]
    Libro(String),
    #[error("encabezados requeridos ausentes en la hoja DATA: {0:?}")]
    EsquemaInvalido(Vec<String>),
    #[error("fila {fila}: id de alumno inválido: '{valor}'")]
    FilaInvalida { fila: usize, valor: String },
    #[error("ningún periodo pudo cargarse; no hay nada que servir")]
    SinPeriodos,
}

/// Nombre del directorio con los libros fuente.
pub const DATAFILES_DIR: &str = "datafiles";

/// Resuelve el directorio de datos: variable de entorno, luego relativo al
/// ejecutable, por último el directorio de trabajo.
pub fn get_datafiles_dir() -> PathBuf {
    if let Ok(ruta) = std::env::var("PANEL_DATAFILES_DIR") {
        let p = PathBuf::from(ruta);
        if p.exists() {
            return p;
        }
        eprintln!("⚠️  PANEL_DATAFILES_DIR apunta a {:?} pero no existe", p);
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            let candidatos = [
                exe_dir.join(DATAFILES_DIR),
                exe_dir.join("..").join(DATAFILES_DIR),
                exe_dir.join("../..").join(DATAFILES_DIR),
            ];
            for candidato in candidatos {
                if candidato.exists() {
                    return candidato;
                }
            }
        }
    }

    PathBuf::from(DATAFILES_DIR)
}
