#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("brush has {count} planes, at least 4 are required to bound a solid")]
    TooFewPlanes { count: usize },
    #[error("mesh batch for texture `{texture}` would exceed {max} vertices (16-bit index limit)")]
    TextureBatchOverflow { texture: String, max: usize },
}

impl GeometryError {
    pub fn to_result<T>(self) -> Result<T, Self> {
        Err(self)
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;
