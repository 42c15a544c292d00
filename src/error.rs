use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The UI layer asked to attach the rendering surface to a mount
    /// point that does not exist.
    #[error("mount target `{0}` does not exist")]
    MountTargetMissing(String),

    /// Grid construction or resize with a zero dimension.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_error_names_the_target() {
        let err = Error::MountTargetMissing("app".into());
        assert_eq!(err.to_string(), "mount target `app` does not exist");
    }

    #[test]
    fn dimension_error_reports_both_dimensions() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 7,
        };
        assert_eq!(err.to_string(), "grid dimensions must be positive, got 0x7");
    }
}
