//! Transformación a formato largo y agregación.
//!
//! La matriz ancha de la hoja (un alumno por fila, una columna por
//! competencia) se explota en observaciones individuales y después se agrupa
//! a las granularidades que consumen las pestañas del panel.

use std::collections::{HashMap, HashSet};

use crate::excel::MapeoColumnas;
use crate::models::{Alumno, Campo, FilaAgregada, Observacion, ResumenPeriodo, ValorCampo, rango_nivel};

/// ¿La celda contiene un nivel real? Los vacíos y los marcadores de "sin
/// nota" del libro no generan observación.
pub fn es_nivel_valido(celda: &str) -> bool {
    let v = celda.trim();
    !v.is_empty() && v != "-" && !v.eq_ignore_ascii_case("nan")
}

/// Explota cada alumno en una observación por celda de evaluación con nivel
/// real. Una celda vacía o con marcador simplemente no aparece.
pub fn generar_observaciones(alumnos: &[Alumno], mapeo: &MapeoColumnas) -> Vec<Observacion> {
    let mut observaciones: Vec<Observacion> = Vec::new();
    for alumno in alumnos {
        for (columna, col) in mapeo.iter() {
            let Some(celda) = alumno.niveles.get(columna) else {
                continue;
            };
            if !es_nivel_valido(celda) {
                continue;
            }
            observaciones.push(Observacion {
                grado: alumno.grado.clone(),
                seccion: alumno.seccion.clone(),
                alumno_id: alumno.id,
                curso: col.curso.clone(),
                competencia: col.competencia.clone(),
                nivel: celda.trim().to_string(),
            });
        }
    }
    observaciones
}

fn redondear1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Agrupa las observaciones por `campos` + nivel: cuenta ocurrencias y
/// calcula el porcentaje de cada nivel sobre el total de su clave de
/// agrupación (redondeado a un decimal). Las combinaciones sin observaciones
/// no aparecen. La salida es determinista: clave ascendente, niveles en orden
/// AD, A, B, C.
pub fn agregar(observaciones: &[Observacion], campos: &[Campo]) -> Vec<FilaAgregada> {
    let mut conteos: HashMap<(Vec<String>, String), u32> = HashMap::new();
    for obs in observaciones {
        let clave: Vec<String> = campos
            .iter()
            .map(|c| obs.valor(*c).unwrap_or("").to_string())
            .collect();
        *conteos.entry((clave, obs.nivel.clone())).or_insert(0) += 1;
    }

    let mut totales: HashMap<Vec<String>, u32> = HashMap::new();
    for ((clave, _), cantidad) in &conteos {
        *totales.entry(clave.clone()).or_insert(0) += cantidad;
    }

    let mut filas: Vec<(Vec<String>, FilaAgregada)> = conteos
        .into_iter()
        .map(|((clave, nivel), cantidad)| {
            let total = totales[&clave];
            let porcentaje = redondear1(cantidad as f64 / total as f64 * 100.0);
            let mut fila = FilaAgregada::nueva(nivel, cantidad, porcentaje);
            for (campo, valor) in campos.iter().zip(clave.iter()) {
                fila.asignar(*campo, valor.clone());
            }
            (clave, fila)
        })
        .collect();

    filas.sort_by(|(clave_a, fila_a), (clave_b, fila_b)| {
        clave_a
            .cmp(clave_b)
            .then_with(|| rango_nivel(&fila_a.nivel).cmp(&rango_nivel(&fila_b.nivel)))
            .then_with(|| fila_a.nivel.cmp(&fila_b.nivel))
    });

    filas.into_iter().map(|(_, fila)| fila).collect()
}

/// Totales generales del periodo para las tarjetas de métricas.
pub fn resumen(alumnos: &[Alumno], observaciones: &[Observacion]) -> ResumenPeriodo {
    let mut cursos: HashSet<&str> = HashSet::new();
    let mut competencias: HashSet<&str> = HashSet::new();
    let mut grados: HashSet<&str> = HashSet::new();
    let mut secciones: HashSet<&str> = HashSet::new();
    let mut conteo_niveles: HashMap<String, u32> = HashMap::new();

    for obs in observaciones {
        cursos.insert(&obs.curso);
        competencias.insert(&obs.competencia);
        grados.insert(&obs.grado);
        secciones.insert(&obs.seccion);
        *conteo_niveles.entry(obs.nivel.clone()).or_insert(0) += 1;
    }

    ResumenPeriodo {
        total_alumnos: alumnos.len(),
        total_evaluaciones: observaciones.len(),
        total_cursos: cursos.len(),
        total_competencias: competencias.len(),
        total_grados: grados.len(),
        total_secciones: secciones.len(),
        conteo_niveles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn niveles_validos_y_marcadores() {
        assert!(es_nivel_valido("AD"));
        assert!(es_nivel_valido(" B "));
        assert!(!es_nivel_valido(""));
        assert!(!es_nivel_valido("   "));
        assert!(!es_nivel_valido("-"));
        assert!(!es_nivel_valido("nan"));
        assert!(!es_nivel_valido("NaN"));
    }

    #[test]
    fn redondeo_a_un_decimal() {
        assert_eq!(redondear1(33.333333), 33.3);
        assert_eq!(redondear1(66.666666), 66.7);
        assert_eq!(redondear1(50.0), 50.0);
    }
}
