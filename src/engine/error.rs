use thiserror::Error;

use crate::engine::components::component_types::{ BridgeError, ComponentCode, ComponentKind };
use crate::engine::managers::assets_manager::CatalogError;

/// Failure of a forward or reverse translation. Nothing is retried; the
/// caller decides whether to run the whole translation again.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("{0}")]
    Bridge(#[from] BridgeError),
    #[error("asset catalog lookup failed: {0}")]
    Catalog(#[from] CatalogError),
    #[error("malformed {kind} payload: {source}")]
    Payload {
        kind: ComponentKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("component code {code} names {expected} but carries a {found} payload")]
    CodeMismatch {
        code: ComponentCode,
        expected: ComponentKind,
        found: ComponentKind,
    },
    #[error("{kind} payload is missing `{field}`")]
    MissingField {
        kind: ComponentKind,
        field: &'static str,
    },
}

pub type TranslateResult<T> = Result<T, TranslateError>;
