pub mod agregados;
pub mod alumnos;
pub mod docs;
pub mod opciones;
pub mod periodos;

pub use agregados::*;
pub use alumnos::*;
pub use docs::*;
pub use opciones::*;
pub use periodos::*;

use std::collections::HashMap;

/// Id de periodo pedido en la query; vacío degrada al defecto del registro.
pub(crate) fn periodo_de(query: &HashMap<String, String>) -> &str {
    query.get("periodo").map(String::as_str).unwrap_or("")
}
