use thiserror::Error;

#[derive(Error, Debug)]
pub enum PropmetaError {
    #[error("nil property passed to metadata extraction")]
    NullProperty,

    #[error("Property {owner}.{name} is declared twice")]
    DuplicateProperty { owner: &'static str, name: String },

    #[error("Property table for {owner} has an entry with an empty name")]
    EmptyPropertyName { owner: &'static str },

    #[error("Unknown property: {owner}.{name}")]
    UnknownProperty { owner: &'static str, name: String },

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, PropmetaError>;
