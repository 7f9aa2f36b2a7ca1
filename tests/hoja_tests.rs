use panelaula::excel::CargaError;
use panelaula::excel::hoja::{
    ETIQUETA_GRADO, ETIQUETA_GRADO_SECCION, ETIQUETA_NOMBRE, ETIQUETA_NRO, ETIQUETA_SECCION,
    HojaData,
};

fn fila(celdas: &[&str]) -> Vec<String> {
    celdas.iter().map(|s| s.to_string()).collect()
}

fn encabezado() -> Vec<String> {
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
    ])
}

fn grid_registro() -> Vec<Vec<String>> {
    vec![
        fila(&["", "REGISTRO AUXILIAR - II BIMESTRE"]),
        fila(&["COMPETENCIAS", "", "", "", "", "MATEMÁTICA", "", "COMUNICACIÓN", ""]),
        fila(&[""]),
        encabezado(),
        fila(&["1", "1° A", "1°", "A", "QUISPE MAMANI, ROSA", "AD", "A", "B", "A"]),
        fila(&["2", "1° A", "1°", "A", "HUAMÁN TORRES, LUIS", "B", "-", "A", ""]),
    ]
}

#[test]
fn detecta_encabezado_bajo_fila_de_titulo() {
    let hoja = HojaData::desde_grid(grid_registro()).unwrap();
    assert_eq!(hoja.fila_encabezado, 3);
    assert_eq!(hoja.filas_datos().len(), 2);
}

#[test]
fn detecta_encabezado_sin_fila_de_titulo() {
    let grid = vec![
        encabezado(),
        fila(&["1", "1° A", "1°", "A", "QUISPE MAMANI, ROSA", "AD", "A", "B", "A"]),
    ];
    let hoja = HojaData::desde_grid(grid).unwrap();
    assert_eq!(hoja.fila_encabezado, 0);
    assert_eq!(hoja.filas_datos().len(), 1);
}

#[test]
fn columnas_de_identidad_por_etiqueta() {
    let hoja = HojaData::desde_grid(grid_registro()).unwrap();
    assert_eq!(hoja.col_identidad(ETIQUETA_NRO), 0);
    assert_eq!(hoja.col_identidad(ETIQUETA_GRADO_SECCION), 1);
    assert_eq!(hoja.col_identidad(ETIQUETA_GRADO), 2);
    assert_eq!(hoja.col_identidad(ETIQUETA_SECCION), 3);
    assert_eq!(hoja.col_identidad(ETIQUETA_NOMBRE), 4);
}

#[test]
fn columnas_de_competencia_excluyen_identidad_y_vacias() {
    let hoja = HojaData::desde_grid(grid_registro()).unwrap();
    let indices: Vec<usize> = hoja.columnas_competencia.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, vec![5, 6, 7, 8]);
    assert_eq!(hoja.columnas_competencia[0].1, "Resuelve problemas de cantidad");
}

#[test]
fn esquema_invalido_reporta_etiquetas_faltantes() {
    let mut grid = grid_registro();
    // Quitar la columna SECCIÓN del encabezado
    grid[3][3] = String::new();

    match HojaData::desde_grid(grid) {
        Err(CargaError::EsquemaInvalido(faltantes)) => {
            assert_eq!(faltantes, vec!["SECCIÓN".to_string()]);
        }
        otro => panic!("se esperaba EsquemaInvalido, se obtuvo {:?}", otro.map(|_| ())),
    }
}

#[test]
fn grid_sin_encabezado_alguno_falla() {
    let grid = vec![fila(&["a", "b", "c"]), fila(&["1", "2", "3"])];
    assert!(matches!(
        HojaData::desde_grid(grid),
        Err(CargaError::EsquemaInvalido(_))
    ));
}
