// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Logging bootstrap for binaries and test harnesses.

use env_logger::{Builder, Env};
use log::SetLoggerError;

/// Installs an `env_logger` reading `RUST_LOG`, falling back to
/// `default_filter` when the variable is unset.
///
/// Returns an error if a logger is already installed, which lets test
/// binaries call it more than once.
pub fn init_logging(default_filter: &str) -> Result<(), SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format_timestamp_millis()
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error_not_a_panic() {
        let _ = init_logging("warn");
        assert!(init_logging("warn").is_err());
    }
}
