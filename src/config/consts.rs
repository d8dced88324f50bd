// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Id given to the terminal leaf when a configuration does not name one
pub const DEFAULT_TERMINAL_ID: &str = "terminal";
