use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("depth limit exceeded: {limit}")]
    DepthLimitExceeded { limit: usize },
}

pub type TreeResult<T> = Result<T, TreeError>;
