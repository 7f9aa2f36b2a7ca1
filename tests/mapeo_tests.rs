use panelaula::excel::mapeo::{CURSO_SIN_ASIGNAR, MapeoColumnas};

fn fila(celdas: &[&str]) -> Vec<String> {
    celdas.iter().map(|s| s.to_string()).collect()
}

fn competencias(indices: &[usize]) -> Vec<(usize, String)> {
    indices.iter().map(|i| (*i, format!("comp{}", i))).collect()
}

#[test]
fn relleno_hacia_adelante() {
    let cursos = fila(&["Math", "", "", "Science", ""]);
    let mapeo = MapeoColumnas::construir(&cursos, &competencias(&[0, 1, 2, 3, 4]));

    let asignados: Vec<&str> = mapeo.iter().map(|(_, c)| c.curso.as_str()).collect();
    assert_eq!(asignados, vec!["Math", "Math", "Math", "Science", "Science"]);
}

#[test]
fn competencia_antes_del_primer_curso_recibe_centinela() {
    let cursos = fila(&["", "", "COMUNICACIÓN"]);
    let mapeo = MapeoColumnas::construir(&cursos, &competencias(&[0, 1, 2]));

    assert_eq!(mapeo.get(0).unwrap().curso, CURSO_SIN_ASIGNAR);
    assert_eq!(mapeo.get(1).unwrap().curso, CURSO_SIN_ASIGNAR);
    assert_eq!(mapeo.get(2).unwrap().curso, "COMUNICACIÓN");
}

#[test]
fn rotulo_competencias_no_es_curso() {
    // El rótulo de región sobre las columnas de identidad no arranca ni
    // interrumpe el relleno.
    let cursos = fila(&["COMPETENCIAS", "MATEMÁTICA", "", "COMPETENCIA", ""]);
    let mapeo = MapeoColumnas::construir(&cursos, &competencias(&[0, 1, 2, 3, 4]));

    assert_eq!(mapeo.get(0).unwrap().curso, CURSO_SIN_ASIGNAR);
    assert_eq!(mapeo.get(1).unwrap().curso, "MATEMÁTICA");
    assert_eq!(mapeo.get(2).unwrap().curso, "MATEMÁTICA");
    assert_eq!(mapeo.get(3).unwrap().curso, "MATEMÁTICA");
    assert_eq!(mapeo.get(4).unwrap().curso, "MATEMÁTICA");
}

#[test]
fn columnas_de_curso_en_orden_de_hoja() {
    let cursos = fila(&["", "", "", "", "", "MATEMÁTICA", "", "COMUNICACIÓN", ""]);
    let comps = vec![
        (5, "Resuelve problemas de cantidad".to_string()),
        (6, "Resuelve problemas de regularidad".to_string()),
        (7, "Se comunica oralmente".to_string()),
        (8, "Lee diversos tipos de textos".to_string()),
    ];
    let mapeo = MapeoColumnas::construir(&cursos, &comps);

    assert_eq!(mapeo.len(), 4);
    let mate = mapeo.columnas_de_curso("MATEMÁTICA");
    assert_eq!(
        mate,
        vec![
            (5, "Resuelve problemas de cantidad"),
            (6, "Resuelve problemas de regularidad"),
        ]
    );
    assert!(mapeo.columnas_de_curso("ARTE").is_empty());
}

#[test]
fn las_celdas_con_espacios_cuentan_como_vacias() {
    let cursos = fila(&["MATEMÁTICA", "   ", ""]);
    let mapeo = MapeoColumnas::construir(&cursos, &competencias(&[0, 1, 2]));
    assert!(mapeo.iter().all(|(_, c)| c.curso == "MATEMÁTICA"));
}
