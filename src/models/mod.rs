// Estructuras de datos principales del panel

use serde::Serialize;
use std::collections::HashMap;

/// Niveles de logro en orden ordinal: AD es el más alto, C el más bajo.
pub const NIVELES: [&str; 4] = ["AD", "A", "B", "C"];

/// Posición de un nivel dentro del orden AD > A > B > C.
/// Niveles desconocidos se ordenan después, entre ellos alfabéticamente.
pub fn rango_nivel(nivel: &str) -> usize {
    NIVELES.iter().position(|n| *n == nivel).unwrap_or(NIVELES.len())
}

/// Campos de agrupación y filtrado de las tablas del panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Campo {
    Grado,
    Seccion,
    Curso,
    Competencia,
}

impl Campo {
    pub const TODOS: [Campo; 4] = [Campo::Grado, Campo::Seccion, Campo::Curso, Campo::Competencia];

    /// Nombre del campo tal como aparece en la API (parámetros de query y
    /// selectores).
    pub fn nombre(&self) -> &'static str {
        match self {
            Campo::Grado => "grado",
            Campo::Seccion => "seccion",
            Campo::Curso => "curso",
            Campo::Competencia => "competencia",
        }
    }
}

/// Acceso uniforme al valor de un campo de agrupación en una fila.
pub trait ValorCampo {
    fn valor(&self, campo: Campo) -> Option<&str>;
}

/// Un alumno leído de la hoja DATA. `niveles` conserva el texto crudo de cada
/// celda de evaluación, indexado por columna del libro (incluye los
/// marcadores "-" para poder reproducir la tabla por alumno).
#[derive(Debug, Clone)]
pub struct Alumno {
    pub id: u32,
    pub grado: String,
    pub seccion: String,
    pub nombre: String,
    pub niveles: HashMap<usize, String>,
}

/// Una observación en formato largo: una celda de evaluación con nivel real.
#[derive(Debug, Clone, Serialize)]
pub struct Observacion {
    pub grado: String,
    pub seccion: String,
    pub alumno_id: u32,
    pub curso: String,
    pub competencia: String,
    pub nivel: String,
}

impl ValorCampo for Observacion {
    fn valor(&self, campo: Campo) -> Option<&str> {
        match campo {
            Campo::Grado => Some(&self.grado),
            Campo::Seccion => Some(&self.seccion),
            Campo::Curso => Some(&self.curso),
            Campo::Competencia => Some(&self.competencia),
        }
    }
}

/// Fila de una tabla agregada: los campos de la clave de agrupación, nivel,
/// conteo y porcentaje sobre el total de la clave.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilaAgregada {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curso: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competencia: Option<String>,
    pub nivel: String,
    pub cantidad: u32,
    pub porcentaje: f64,
}

impl FilaAgregada {
    pub fn nueva(nivel: String, cantidad: u32, porcentaje: f64) -> Self {
        FilaAgregada {
            grado: None,
            seccion: None,
            curso: None,
            competencia: None,
            nivel,
            cantidad,
            porcentaje,
        }
    }

    pub fn asignar(&mut self, campo: Campo, valor: String) {
        match campo {
            Campo::Grado => self.grado = Some(valor),
            Campo::Seccion => self.seccion = Some(valor),
            Campo::Curso => self.curso = Some(valor),
            Campo::Competencia => self.competencia = Some(valor),
        }
    }
}

impl ValorCampo for FilaAgregada {
    fn valor(&self, campo: Campo) -> Option<&str> {
        match campo {
            Campo::Grado => self.grado.as_deref(),
            Campo::Seccion => self.seccion.as_deref(),
            Campo::Curso => self.curso.as_deref(),
            Campo::Competencia => self.competencia.as_deref(),
        }
    }
}

/// Totales generales de un periodo (las tarjetas de métricas del panel).
#[derive(Debug, Clone, Serialize)]
pub struct ResumenPeriodo {
    pub total_alumnos: usize,
    pub total_evaluaciones: usize,
    pub total_cursos: usize,
    pub total_competencias: usize,
    pub total_grados: usize,
    pub total_secciones: usize,
    /// Conteo por nivel sobre todas las observaciones del periodo.
    pub conteo_niveles: HashMap<String, u32>,
}
