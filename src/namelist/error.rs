use crate::model::ItemId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NamesError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Name \"{0}\" already exists.")]
    DuplicateTitle(String),

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Index {index} is out of range (list has {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("No item with id {0}")]
    ItemNotFound(ItemId),

    #[error("No ids left: the newest stored id is already the largest possible")]
    IdsExhausted,

    #[error("Invalid page size {0} (choose one of {1:?})")]
    InvalidPageSize(usize, &'static [usize]),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, NamesError>;
