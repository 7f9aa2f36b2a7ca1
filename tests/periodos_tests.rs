use std::path::Path;

use panelaula::excel::CargaError;
use panelaula::periodos::{PeriodoContexto, RegistroPeriodos, TABLAS};

fn fila(celdas: &[&str]) -> Vec<String> {
    celdas.iter().map(|s| s.to_string()).collect()
}

fn grid_registro() -> Vec<Vec<String>> {
    vec![
        fila(&["", "REGISTRO AUXILIAR - II BIMESTRE"]),
        fila(&["COMPETENCIAS", "", "", "", "", "MATEMÁTICA", "", "COMUNICACIÓN", ""]),
        fila(&[""]),
        fila(&[
            "N°",
            "GRADO Y SECCIÓN",
            "GRADO",
            "SECCIÓN",
            "APELLIDOS Y NOMBRES",
            "Resuelve problemas de cantidad",
            "Resuelve problemas de regularidad",
            "Se comunica oralmente",
            "Lee diversos tipos de textos",
        ]),
        fila(&["1", "1° A", "1°", "A", "QUISPE MAMANI, ROSA", "AD", "A", "B", "A"]),
        fila(&["2", "1° A", "1°", "A", "HUAMÁN TORRES, LUIS", "B", "-", "A", ""]),
        fila(&["3", "2° B", "2°", "B", "FLORES RÍOS, ANA", "C", "B", "nan", "AD"]),
        fila(&["4", "2° B", "2°", "B", "VEGA PAREDES, JUAN", "A", "AD", "A", "B"]),
    ]
}

#[test]
fn la_tuberia_completa_produce_el_resumen_esperado() {
    let ctx = PeriodoContexto::desde_grid(grid_registro()).unwrap();

    assert_eq!(ctx.resumen.total_alumnos, 4);
    assert_eq!(ctx.resumen.total_evaluaciones, 13);
    assert_eq!(ctx.resumen.total_cursos, 2);
    assert_eq!(ctx.resumen.total_competencias, 4);
    assert_eq!(ctx.resumen.total_grados, 2);
    assert_eq!(ctx.resumen.total_secciones, 2);
    assert_eq!(ctx.resumen.conteo_niveles["AD"], 3);
    assert_eq!(ctx.resumen.conteo_niveles["A"], 5);
}

#[test]
fn las_seis_tablas_se_calculan_al_cargar() {
    let ctx = PeriodoContexto::desde_grid(grid_registro()).unwrap();
    for tabla in TABLAS {
        let filas = ctx.tabla(tabla).unwrap();
        assert!(!filas.is_empty(), "tabla {} vacía", tabla);
        let total: u32 = filas.iter().map(|f| f.cantidad).sum();
        assert_eq!(total, 13, "tabla {} no cubre todas las observaciones", tabla);
    }
    assert!(ctx.tabla("inexistente").is_none());
}

#[test]
fn una_competencia_con_cuatro_niveles_reparte_en_cuartos() {
    let ctx = PeriodoContexto::desde_grid(grid_registro()).unwrap();
    let filas: Vec<_> = ctx
        .por_competencia
        .iter()
        .filter(|f| f.competencia.as_deref() == Some("Resuelve problemas de cantidad"))
        .collect();

    assert_eq!(filas.len(), 4);
    for f in &filas {
        assert_eq!(f.cantidad, 1);
        assert_eq!(f.porcentaje, 25.0);
    }
}

#[test]
fn cargar_dos_veces_da_tablas_identicas() {
    let a = PeriodoContexto::desde_grid(grid_registro()).unwrap();
    let b = PeriodoContexto::desde_grid(grid_registro()).unwrap();

    assert_eq!(a.por_competencia, b.por_competencia);
    assert_eq!(a.por_curso_competencia, b.por_curso_competencia);
    assert_eq!(a.por_grado_curso_competencia, b.por_grado_curso_competencia);
    assert_eq!(a.por_seccion_curso_competencia, b.por_seccion_curso_competencia);
    assert_eq!(a.por_grado_competencia, b.por_grado_competencia);
    assert_eq!(a.por_seccion_competencia, b.por_seccion_competencia);
}

#[test]
fn archivo_inexistente_es_fuente_no_encontrada() {
    let err = PeriodoContexto::cargar(Path::new("no/existe/DASHBOARD.xlsx")).unwrap_err();
    assert!(matches!(err, CargaError::FuenteNoEncontrada(_)));
}

#[test]
fn id_desconocido_degrada_al_defecto() {
    let ctx = PeriodoContexto::desde_grid(grid_registro()).unwrap();
    let registro = RegistroPeriodos::desde_contextos(vec![("II".to_string(), ctx)], "III").unwrap();

    // El defecto configurado no cargó: el efectivo es el primero disponible.
    assert_eq!(registro.defecto(), "II");
    assert!(std::ptr::eq(registro.get("IV"), registro.get("II")));
    assert!(std::ptr::eq(registro.get(""), registro.get("II")));
}

#[test]
fn el_defecto_configurado_gana_si_cargo() {
    let ctx_ii = PeriodoContexto::desde_grid(grid_registro()).unwrap();
    let ctx_iii = PeriodoContexto::desde_grid(grid_registro()).unwrap();
    let registro = RegistroPeriodos::desde_contextos(
        vec![("II".to_string(), ctx_ii), ("III".to_string(), ctx_iii)],
        "III",
    )
    .unwrap();

    assert_eq!(registro.defecto(), "III");
    assert_eq!(registro.disponibles(), ["II", "III"]);
    assert!(std::ptr::eq(registro.get("desconocido"), registro.get("III")));
}

#[test]
fn sin_periodos_cargados_es_fatal() {
    let err = RegistroPeriodos::desde_contextos(Vec::new(), "III").unwrap_err();
    assert!(matches!(err, CargaError::SinPeriodos));
}
