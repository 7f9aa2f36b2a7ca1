//! Cascada de filtros dependientes.
//!
//! Cada pestaña del panel define una cadena ordenada de selectores (p. ej.
//! Grado -> Curso -> Competencia). Cuando cambia la selección en el nivel k,
//! los niveles siguientes se recalculan: sus opciones son los valores
//! distintos que quedan tras filtrar por las selecciones confirmadas arriba,
//! y su valor pasa a la primera opción en orden alfabético. Todo es puro y
//! síncrono: un selector nunca queda con un valor fuera de su propia lista
//! recién calculada. Una lista vacía es un estado válido, no un error.

use serde::Serialize;

use crate::models::{Campo, FilaAgregada, Observacion, ValorCampo};
use crate::periodos::PeriodoContexto;

/// Estado de un selector tras recalcular su cadena.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstadoSelector {
    pub campo: String,
    pub opciones: Vec<String>,
    pub valor: Option<String>,
}

/// Filas sobre las que corre una cadena: una tabla agregada o, para la
/// pestaña por alumno, el conjunto de observaciones.
pub enum Fuente<'a> {
    Agregadas(&'a [FilaAgregada]),
    Observaciones(&'a [Observacion]),
}

/// Cadenas publicadas, una por grupo de selectores del panel. Devuelve los
/// campos de la cadena y su fuente dentro del contexto.
pub fn resolver_cadena<'a>(
    ctx: &'a PeriodoContexto,
    nombre: &str,
) -> Option<(&'static [Campo], Fuente<'a>)> {
    use Campo::*;
    Some(match nombre {
        "competencia" => (&[Competencia], Fuente::Agregadas(&ctx.por_competencia)),
        "curso" => (&[Curso, Competencia], Fuente::Agregadas(&ctx.por_curso_competencia)),
        "grado_curso" => (
            &[Grado, Curso, Competencia],
            Fuente::Agregadas(&ctx.por_grado_curso_competencia),
        ),
        "seccion_curso" => (
            &[Seccion, Curso, Competencia],
            Fuente::Agregadas(&ctx.por_seccion_curso_competencia),
        ),
        "comparacion_grados" => (&[Competencia], Fuente::Agregadas(&ctx.por_grado_competencia)),
        "comparacion_secciones" => {
            (&[Competencia], Fuente::Agregadas(&ctx.por_seccion_competencia))
        }
        "alumnos" => (&[Grado, Seccion, Curso], Fuente::Observaciones(&ctx.observaciones)),
        _ => return None,
    })
}

/// Nombres de las cadenas publicadas (para `/api/help` y mensajes de error).
pub const CADENAS: [&str; 7] = [
    "competencia",
    "curso",
    "grado_curso",
    "seccion_curso",
    "comparacion_grados",
    "comparacion_secciones",
    "alumnos",
];

/// Recalcula una cadena completa. `seleccion` trae la selección vigente por
/// nivel; los primeros `mantener` niveles conservan su valor si sigue siendo
/// una opción válida (si no, caen a la primera opción), el resto se resetea a
/// la primera opción. Un cambio de periodo se recalcula con `mantener = 0`;
/// un cambio en el nivel k, con `mantener = k + 1`.
pub fn recalcular(
    fuente: &Fuente,
    campos: &[Campo],
    seleccion: &[Option<String>],
    mantener: usize,
) -> Vec<EstadoSelector> {
    match fuente {
        Fuente::Agregadas(filas) => recalcular_filas(filas, campos, seleccion, mantener),
        Fuente::Observaciones(obs) => recalcular_filas(obs, campos, seleccion, mantener),
    }
}

fn recalcular_filas<T: ValorCampo>(
    filas: &[T],
    campos: &[Campo],
    seleccion: &[Option<String>],
    mantener: usize,
) -> Vec<EstadoSelector> {
    let mut estados: Vec<EstadoSelector> = Vec::with_capacity(campos.len());
    let mut confirmadas: Vec<Option<String>> = Vec::with_capacity(campos.len());

    for (nivel, campo) in campos.iter().enumerate() {
        let opciones = opciones_nivel(filas, campos, &confirmadas, nivel);
        let pedido = if nivel < mantener {
            seleccion.get(nivel).cloned().flatten()
        } else {
            None
        };
        let valor = match pedido {
            Some(v) if opciones.iter().any(|o| *o == v) => Some(v),
            _ => opciones.first().cloned(),
        };
        confirmadas.push(valor.clone());
        estados.push(EstadoSelector {
            campo: campo.nombre().to_string(),
            opciones,
            valor,
        });
    }

    estados
}

/// Opciones de un nivel: valores distintos del campo, en orden alfabético,
/// entre las filas que cumplen todas las selecciones confirmadas de los
/// niveles anteriores. Un nivel anterior sin selección filtra todo.
fn opciones_nivel<T: ValorCampo>(
    filas: &[T],
    campos: &[Campo],
    confirmadas: &[Option<String>],
    nivel: usize,
) -> Vec<String> {
    let mut opciones: Vec<String> = filas
        .iter()
        .filter(|fila| {
            confirmadas
                .iter()
                .take(nivel)
                .zip(campos.iter())
                .all(|(sel, campo)| match sel {
                    Some(v) => fila.valor(*campo) == Some(v.as_str()),
                    None => false,
                })
        })
        .filter_map(|fila| fila.valor(campos[nivel]).map(str::to_string))
        .collect();
    opciones.sort();
    opciones.dedup();
    opciones
}

/// Filtra filas por pares (campo, valor). Lo usan los endpoints de tablas
/// agregadas y de alumnos.
pub fn filtrar<'a, T: ValorCampo>(filas: &'a [T], filtros: &[(Campo, String)]) -> Vec<&'a T> {
    filas
        .iter()
        .filter(|fila| {
            filtros
                .iter()
                .all(|(campo, valor)| fila.valor(*campo) == Some(valor.as_str()))
        })
        .collect()
}
