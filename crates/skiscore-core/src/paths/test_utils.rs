//! Environment isolation for path tests.
//!
//! Tests touching `SKISCORE_DATA_DIR` must hold [`ENV_LOCK`] for their
//! whole duration.

use std::env;
use std::ffi::OsString;
use std::sync::Mutex;

pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Restores an environment variable to its previous state on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<OsString>,
}

impl EnvVarGuard {
    #[allow(unsafe_code)]
    pub fn set(key: &'static str, value: &str) -> Self {
        let previous = env::var_os(key);
        // SAFETY: callers hold ENV_LOCK, so no other test thread touches the environment.
        unsafe { env::set_var(key, value) };
        Self { key, previous }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: see `set`.
        unsafe {
            match self.previous.take() {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}
