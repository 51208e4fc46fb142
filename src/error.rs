use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("pattern `{pattern}` was rejected by the regex compiler")]
    Rejected {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
