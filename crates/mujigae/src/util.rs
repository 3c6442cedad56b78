/// A trait to abstract over environment variable access.
///
/// Implementations only provide [`Environment::read_os`]. Tests substitute a
/// fake environment for the process environment.
pub(crate) trait Environment {
    /// Try reading the environment variable as an OS string.
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString>;

    /// Determine whether the environment variable is defined with a non-empty value.
    fn is_non_empty(&self, key: &str) -> bool {
        self.read_os(key).is_some_and(|v| !v.is_empty())
    }
}

/// The process environment.
#[derive(Debug, Default)]
pub(crate) struct Env();

impl Environment for Env {
    fn read_os(&self, key: &str) -> Option<std::ffi::OsString> {
        std::env::var_os(key)
    }
}


#[cfg(test)]
pub(crate) use test::FakeEnv;
