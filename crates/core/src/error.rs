use thiserror::Error;

use crate::model::DateError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Date(#[from] DateError),
}
