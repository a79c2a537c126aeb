//! Constantes que participan en el cálculo de fingerprints.
//!
//! Cambiar cualquiera de estos valores invalida todos los resultados
//! cacheados: los fingerprints de ejecuciones previas dejan de coincidir.

/// Versión del formato de fingerprint. Se incluye en la identidad base de
/// toda extensión; debe incrementarse cuando cambia el orden o la forma en
/// que se combinan las contribuciones.
pub const FINGERPRINT_VERSION: &str = "FF1";

/// Contribución fija para un payload en memoria sin `DataDeterminer`.
///
/// Un payload crudo NO aporta su contenido al fingerprint: dos `CreateData`
/// con datos distintos pero igual schema y metadata colisionan. Para que el
/// contenido cuente hay que proveer un determiner.
pub const RAW_PAYLOAD_SENTINEL: i64 = 1;
