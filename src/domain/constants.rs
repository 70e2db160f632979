pub const MANIFEST_FILE: &str = "package.json";
pub const LAUNCHER_FILE: &str = "server.js";
pub const INSTALL_HOOK_FILE: &str = "install.js";
pub const README_FILE: &str = "README.md";

pub const CROSS_SPAWN_VERSION: &str = "^7.0.3";
pub const CHALK_VERSION: &str = "^4.1.2";

pub const LAUNCHER_MODE: u32 = 0o755;
