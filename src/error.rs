use thiserror::Error;

/// Failures while bringing the server up.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("contact delivery error: {0}")]
    Contact(#[from] crate::contact::delivery::ContactError),

    #[error("leptos configuration error: {0}")]
    Leptos(String),

    #[error("invalid listen address: {0}")]
    Listen(#[from] std::net::AddrParseError),
}
