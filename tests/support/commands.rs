//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a passforge command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - PASSFORGE_CONFIG pointing at the test config
    /// - NO_COLOR set and key/log variables cleared
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("passforge").expect("failed to find passforge binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("PASSFORGE_CONFIG", self.config_path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("PASSFORGE_KEY");
        cmd.env_remove("PASSFORGE_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `passforge generate` with extra args.
    pub fn generate(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("generate")
            .args(args)
            .output()
            .expect("failed to run passforge generate")
    }

    /// Shortcut for `passforge check <password>`.
    pub fn check(&self, password: &str) -> Output {
        self.cmd()
            .args(["check", password])
            .output()
            .expect("failed to run passforge check")
    }

    /// Shortcut for `passforge check <password> --json`.
    pub fn check_json(&self, password: &str) -> Output {
        self.cmd()
            .args(["check", password, "--json"])
            .output()
            .expect("failed to run passforge check --json")
    }

    /// Shortcut for `passforge save <password>`.
    pub fn save(&self, password: &str) -> Output {
        self.cmd()
            .args(["save", password])
            .output()
            .expect("failed to run passforge save")
    }

    /// Shortcut for `passforge save <password>` with PASSFORGE_KEY set.
    pub fn save_with_key(&self, password: &str, key: &str) -> Output {
        self.cmd()
            .env("PASSFORGE_KEY", key)
            .args(["save", password])
            .output()
            .expect("failed to run passforge save")
    }

    /// Shortcut for `passforge list`.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run passforge list")
    }

    /// Shortcut for `passforge list --json`.
    pub fn list_json(&self) -> Output {
        self.cmd()
            .args(["list", "--json"])
            .output()
            .expect("failed to run passforge list --json")
    }

    /// Shortcut for `passforge list` with PASSFORGE_KEY set.
    pub fn list_with_key(&self, key: &str) -> Output {
        self.cmd()
            .env("PASSFORGE_KEY", key)
            .arg("list")
            .output()
            .expect("failed to run passforge list")
    }

    /// Shortcut for `passforge keygen`.
    pub fn keygen(&self) -> Output {
        self.cmd()
            .arg("keygen")
            .output()
            .expect("failed to run passforge keygen")
    }
}
