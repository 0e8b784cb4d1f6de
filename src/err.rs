use std::fmt::Display;

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior but with a status code provided by [`GetCode`].
pub trait OrFail<T> {
    fn unwrap_or_fail(self) -> T;
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {msg}\n\n{e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

/// Failures raised by capacity growth in [`Twine`](crate::string::Twine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryError {
    /// The allocator could not provide a block of the requested size.
    AllocationFailed { size: usize },
    /// The requested capacity cannot be represented.
    CapacityOverflow,
}

impl Display for MemoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryError::AllocationFailed { size } => write!(f, "The allocator could not provide {size} bytes"),
            MemoryError::CapacityOverflow => write!(f, "The requested capacity exceeds the addressable range"),
        }
    }
}

impl std::error::Error for MemoryError {}

impl GetCode for MemoryError {}
