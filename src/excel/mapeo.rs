//! Mapeo columna -> (curso, competencia).
//!
//! La fila de cursos del libro viene con celdas combinadas: el nombre del
//! curso aparece una sola vez, sobre su primera competencia, y las celdas
//! siguientes quedan en blanco. El mapeo rellena hacia adelante: cada columna
//! de competencia hereda el último curso visto a su izquierda.

/// Curso centinela para columnas de competencia que aparecen antes de la
/// primera etiqueta de curso de la fila.
pub const CURSO_SIN_ASIGNAR: &str = "SIN CURSO";

/// Rótulos de región que aparecen en la fila de cursos sobre las columnas de
/// identidad; no son cursos y no interrumpen el relleno.
const ROTULOS_NO_CURSO: [&str; 2] = ["COMPETENCIA", "COMPETENCIAS"];

/// Curso y competencia de una columna de evaluación.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnaEvaluada {
    pub curso: String,
    pub competencia: String,
}

/// Mapeo completo de la hoja, en orden de columna ascendente.
#[derive(Debug, Clone, Default)]
pub struct MapeoColumnas {
    columnas: Vec<(usize, ColumnaEvaluada)>,
}

impl MapeoColumnas {
    /// Construye el mapeo recorriendo las columnas de izquierda a derecha.
    /// `fila_cursos` es la fila 1 del libro tal cual; `columnas_competencia`
    /// son las columnas de evaluación detectadas en el encabezado real.
    pub fn construir(fila_cursos: &[String], columnas_competencia: &[(usize, String)]) -> Self {
        let ultima = columnas_competencia.last().map(|(idx, _)| *idx).unwrap_or(0);
        let mut curso_actual: Option<String> = None;
        let mut columnas: Vec<(usize, ColumnaEvaluada)> = Vec::new();
        let mut siguiente = columnas_competencia.iter().peekable();

        for idx in 0..=ultima {
            if let Some(celda) = fila_cursos.get(idx) {
                let valor = celda.trim();
                if !valor.is_empty() && !ROTULOS_NO_CURSO.contains(&valor) {
                    curso_actual = Some(valor.to_string());
                }
            }
            if let Some((col, competencia)) = siguiente.peek() {
                if *col == idx {
                    columnas.push((
                        idx,
                        ColumnaEvaluada {
                            curso: curso_actual.clone().unwrap_or_else(|| CURSO_SIN_ASIGNAR.to_string()),
                            competencia: competencia.clone(),
                        },
                    ));
                    siguiente.next();
                }
            }
        }

        MapeoColumnas { columnas }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(usize, ColumnaEvaluada)> {
        self.columnas.iter()
    }

    pub fn len(&self) -> usize {
        self.columnas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columnas.is_empty()
    }

    pub fn get(&self, columna: usize) -> Option<&ColumnaEvaluada> {
        self.columnas
            .iter()
            .find(|(idx, _)| *idx == columna)
            .map(|(_, c)| c)
    }

    /// Columnas (índice, competencia) de un curso, en el orden de la hoja.
    /// Es la base de la tabla por alumno.
    pub fn columnas_de_curso(&self, curso: &str) -> Vec<(usize, &str)> {
        self.columnas
            .iter()
            .filter(|(_, c)| c.curso == curso)
            .map(|(idx, c)| (*idx, c.competencia.as_str()))
            .collect()
    }
}
