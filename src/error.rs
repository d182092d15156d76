//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("边权重必须为正数, 实际为 {0}")]
    InvalidWeight(u32),

    #[error("顶点不属于该边: {0}")]
    VertexNotIncident(String),

    #[error("边方向不匹配: {0}")]
    OrientationMismatch(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl Error {
    /// 是否为调用方传入的非法参数
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::InvalidWeight(_) | Error::VertexNotIncident(_) | Error::OrientationMismatch(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}
