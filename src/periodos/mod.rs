//! Registro de periodos: un dataset independiente por bimestre.
//!
//! Cada periodo corre la tubería completa (hoja -> mapeo -> alumnos ->
//! observaciones -> tablas agregadas) al arrancar el proceso. Un periodo que
//! falla se omite del registro; si ninguno carga, el arranque es fatal.

use std::collections::HashMap;
use std::path::Path;

use crate::estadisticas::{agregar, generar_observaciones, resumen};
use crate::excel::{CargaError, HojaData, MapeoColumnas, leer_alumnos};
use crate::models::{Alumno, Campo, FilaAgregada, Observacion, ResumenPeriodo};

/// Periodos publicados: (id, archivo dentro del directorio de datos).
pub const PERIODOS: &[(&str, &str)] = &[
    ("II", "DASHBOARD_II_BIMESTRE.xlsx"),
    ("III", "DASHBOARD_III_BIMESTRE.xlsx"),
];

/// Periodo que se sirve cuando no se pide ninguno en concreto.
pub const PERIODO_DEFECTO: &str = "III";

/// Nombres públicos de las seis tablas agregadas.
pub const TABLAS: [&str; 6] = [
    "por_competencia",
    "por_curso_competencia",
    "por_grado_curso_competencia",
    "por_seccion_curso_competencia",
    "por_grado_competencia",
    "por_seccion_competencia",
];

/// Dataset completo de un periodo, inmutable una vez construido.
#[derive(Debug)]
pub struct PeriodoContexto {
    pub alumnos: Vec<Alumno>,
    pub mapeo: MapeoColumnas,
    pub observaciones: Vec<Observacion>,
    pub por_competencia: Vec<FilaAgregada>,
    pub por_curso_competencia: Vec<FilaAgregada>,
    pub por_grado_curso_competencia: Vec<FilaAgregada>,
    pub por_seccion_curso_competencia: Vec<FilaAgregada>,
    pub por_grado_competencia: Vec<FilaAgregada>,
    pub por_seccion_competencia: Vec<FilaAgregada>,
    pub resumen: ResumenPeriodo,
}

impl PeriodoContexto {
    pub fn cargar<P: AsRef<Path>>(path: P) -> Result<Self, CargaError> {
        let hoja = HojaData::cargar(path)?;
        Self::desde_hoja(hoja)
    }

    /// Construye el contexto desde una matriz en memoria (pruebas y
    /// fixtures), sin tocar el disco.
    pub fn desde_grid(grid: Vec<Vec<String>>) -> Result<Self, CargaError> {
        Self::desde_hoja(HojaData::desde_grid(grid)?)
    }

    fn desde_hoja(hoja: HojaData) -> Result<Self, CargaError> {
        let mapeo = MapeoColumnas::construir(hoja.fila_cursos(), &hoja.columnas_competencia);
        let (alumnos, descartadas) = leer_alumnos(&hoja);
        if descartadas > 0 {
            eprintln!("⚠️  {} filas descartadas por id de alumno inválido", descartadas);
        }

        let observaciones = generar_observaciones(&alumnos, &mapeo);
        let resumen = resumen(&alumnos, &observaciones);

        use Campo::*;
        Ok(PeriodoContexto {
            por_competencia: agregar(&observaciones, &[Competencia]),
            por_curso_competencia: agregar(&observaciones, &[Curso, Competencia]),
            por_grado_curso_competencia: agregar(&observaciones, &[Grado, Curso, Competencia]),
            por_seccion_curso_competencia: agregar(&observaciones, &[Seccion, Curso, Competencia]),
            por_grado_competencia: agregar(&observaciones, &[Grado, Competencia]),
            por_seccion_competencia: agregar(&observaciones, &[Seccion, Competencia]),
            alumnos,
            mapeo,
            observaciones,
            resumen,
        })
    }

    /// Tabla agregada por nombre público (ver `TABLAS`).
    pub fn tabla(&self, nombre: &str) -> Option<&[FilaAgregada]> {
        match nombre {
            "por_competencia" => Some(&self.por_competencia),
            "por_curso_competencia" => Some(&self.por_curso_competencia),
            "por_grado_curso_competencia" => Some(&self.por_grado_curso_competencia),
            "por_seccion_curso_competencia" => Some(&self.por_seccion_curso_competencia),
            "por_grado_competencia" => Some(&self.por_grado_competencia),
            "por_seccion_competencia" => Some(&self.por_seccion_competencia),
            _ => None,
        }
    }
}

/// Dueño exclusivo de todos los PeriodoContexto. Los handlers sólo leen a
/// través de `get`.
#[derive(Debug)]
pub struct RegistroPeriodos {
    periodos: HashMap<String, PeriodoContexto>,
    defecto: String,
    /// ids cargados, en el orden de la configuración
    orden: Vec<String>,
}

impl RegistroPeriodos {
    /// Carga todos los periodos configurados desde `dir`. Un periodo que
    /// falla se registra en el log y se omite; si no carga ninguno devuelve
    /// `SinPeriodos`.
    pub fn cargar_todos(dir: &Path) -> Result<Self, CargaError> {
        let mut pares: Vec<(String, PeriodoContexto)> = Vec::new();
        for (id, archivo) in PERIODOS {
            let ruta = dir.join(archivo);
            println!("[*] Cargando periodo {} desde {:?}...", id, ruta);
            match PeriodoContexto::cargar(&ruta) {
                Ok(ctx) => {
                    println!(
                        "[OK] Periodo {}: {} alumnos, {} evaluaciones, {} cursos",
                        id,
                        ctx.resumen.total_alumnos,
                        ctx.resumen.total_evaluaciones,
                        ctx.resumen.total_cursos
                    );
                    pares.push((id.to_string(), ctx));
                }
                Err(e) => eprintln!("⚠️  Periodo {} omitido: {}", id, e),
            }
        }
        Self::desde_contextos(pares, PERIODO_DEFECTO)
    }

    /// Arma el registro a partir de contextos ya construidos. El defecto
    /// efectivo es `defecto` si cargó; si no, el primer periodo cargado.
    pub fn desde_contextos(
        pares: Vec<(String, PeriodoContexto)>,
        defecto: &str,
    ) -> Result<Self, CargaError> {
        if pares.is_empty() {
            return Err(CargaError::SinPeriodos);
        }
        let orden: Vec<String> = pares.iter().map(|(id, _)| id.clone()).collect();
        let periodos: HashMap<String, PeriodoContexto> = pares.into_iter().collect();
        let defecto = if periodos.contains_key(defecto) {
            defecto.to_string()
        } else {
            orden[0].clone()
        };
        Ok(RegistroPeriodos { periodos, defecto, orden })
    }

    /// Contexto del periodo pedido; un id desconocido degrada al defecto.
    pub fn get(&self, id: &str) -> &PeriodoContexto {
        self.periodos
            .get(id)
            .unwrap_or_else(|| &self.periodos[&self.defecto])
    }

    pub fn defecto(&self) -> &str {
        &self.defecto
    }

    /// Ids cargados, en el orden de la configuración.
    pub fn disponibles(&self) -> &[String] {
        &self.orden
    }
}
