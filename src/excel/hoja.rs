use std::collections::HashMap;
use std::path::Path;

use super::CargaError;
use super::io::leer_hoja;

/// Hoja del libro con la matriz de evaluaciones.
pub const HOJA_DATA: &str = "DATA";

/// Fila (0-based) con las etiquetas de curso, fija según el formato
/// publicado de los libros.
pub const FILA_CURSOS: usize = 1;

/// Cuántas filas iniciales se examinan buscando el encabezado real (cubre la
/// fila decorativa de título que algunos libros llevan encima).
const MAX_FILAS_ENCABEZADO: usize = 8;

/// Etiquetas de encabezado de las columnas de identidad (coincidencia exacta,
/// sensible a mayúsculas).
pub const ETIQUETA_NRO: &str = "N°";
pub const ETIQUETA_GRADO_SECCION: &str = "GRADO Y SECCIÓN";
pub const ETIQUETA_GRADO: &str = "GRADO";
pub const ETIQUETA_SECCION: &str = "SECCIÓN";
pub const ETIQUETA_NOMBRE: &str = "APELLIDOS Y NOMBRES";

pub const ETIQUETAS_IDENTIDAD: [&str; 5] = [
    ETIQUETA_NRO,
    ETIQUETA_GRADO_SECCION,
    ETIQUETA_GRADO,
    ETIQUETA_SECCION,
    ETIQUETA_NOMBRE,
];

/// Hoja DATA ya estructurada: la matriz cruda más el encabezado detectado,
/// las columnas de identidad y las columnas de competencia en orden.
#[derive(Debug, Clone)]
pub struct HojaData {
    grid: Vec<Vec<String>>,
    pub fila_encabezado: usize,
    /// etiqueta de identidad -> índice de columna
    columnas_identidad: HashMap<&'static str, usize>,
    /// columnas de evaluación en orden: (índice, etiqueta de competencia)
    pub columnas_competencia: Vec<(usize, String)>,
}

impl HojaData {
    pub fn cargar<P: AsRef<Path>>(path: P) -> Result<Self, CargaError> {
        let grid = leer_hoja(path, HOJA_DATA)?;
        Self::desde_grid(grid)
    }

    /// Estructura una matriz ya leída (o construida en memoria para pruebas).
    /// Detecta la fila de encabezado buscando la primera que contenga todas
    /// las etiquetas de identidad; falla con `EsquemaInvalido` si ninguna de
    /// las primeras filas las trae completas.
    pub fn desde_grid(grid: Vec<Vec<String>>) -> Result<Self, CargaError> {
        let mut mejor: Option<(usize, HashMap<&'static str, usize>)> = None;

        for (nro, fila) in grid.iter().take(MAX_FILAS_ENCABEZADO).enumerate() {
            let mut encontradas: HashMap<&'static str, usize> = HashMap::new();
            for etiqueta in ETIQUETAS_IDENTIDAD {
                if let Some(idx) = fila.iter().position(|c| c.trim() == etiqueta) {
                    encontradas.insert(etiqueta, idx);
                }
            }
            let es_mejor = match &mejor {
                Some((_, previas)) => encontradas.len() > previas.len(),
                None => !encontradas.is_empty(),
            };
            if es_mejor {
                mejor = Some((nro, encontradas));
            }
            if let Some((_, e)) = &mejor {
                if e.len() == ETIQUETAS_IDENTIDAD.len() {
                    break;
                }
            }
        }

        let (fila_encabezado, columnas_identidad) = match mejor {
            Some((nro, encontradas)) if encontradas.len() == ETIQUETAS_IDENTIDAD.len() => {
                (nro, encontradas)
            }
            Some((_, encontradas)) => {
                let faltantes: Vec<String> = ETIQUETAS_IDENTIDAD
                    .iter()
                    .filter(|e| !encontradas.contains_key(*e))
                    .map(|e| e.to_string())
                    .collect();
                return Err(CargaError::EsquemaInvalido(faltantes));
            }
            None => {
                return Err(CargaError::EsquemaInvalido(
                    ETIQUETAS_IDENTIDAD.iter().map(|e| e.to_string()).collect(),
                ));
            }
        };

        // Toda columna con encabezado propio que no sea de identidad es una
        // columna de competencia.
        let indices_identidad: Vec<usize> = columnas_identidad.values().copied().collect();
        let mut columnas_competencia: Vec<(usize, String)> = Vec::new();
        for (idx, celda) in grid[fila_encabezado].iter().enumerate() {
            let etiqueta = celda.trim();
            if etiqueta.is_empty() || indices_identidad.contains(&idx) {
                continue;
            }
            columnas_competencia.push((idx, etiqueta.to_string()));
        }

        Ok(HojaData {
            grid,
            fila_encabezado,
            columnas_identidad,
            columnas_competencia,
        })
    }

    /// Fila de etiquetas de curso (vacía si el libro no la trae).
    pub fn fila_cursos(&self) -> &[String] {
        self.grid.get(FILA_CURSOS).map(|f| f.as_slice()).unwrap_or(&[])
    }

    /// Filas de datos: todo lo que sigue al encabezado real.
    pub fn filas_datos(&self) -> &[Vec<String>] {
        &self.grid[self.fila_encabezado + 1..]
    }

    /// Índice de una columna de identidad. La construcción garantiza que las
    /// cinco etiquetas están presentes.
    pub fn col_identidad(&self, etiqueta: &'static str) -> usize {
        self.columnas_identidad[etiqueta]
    }
}
