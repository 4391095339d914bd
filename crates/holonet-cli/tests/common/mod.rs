//! Fixture server and command builder shared by CLI tests.
//!
//! The server is the library's fixture server, run on a background runtime so
//! the blocking `assert_cmd` calls can reach it.

#![allow(dead_code)]

#[path = "../../../holonet-lib/tests/common/server.rs"]
mod server;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

/// Local catalog server; stops when dropped.
pub struct FixtureServer(server::FixtureServer);

impl FixtureServer {
    pub fn start() -> Self {
        Self(server::FixtureServer::start())
    }

    pub fn base_url(&self) -> &str {
        self.0.base_url()
    }

    /// `holonet` pointed at this server with deterministic, undecorated output.
    pub fn command(&self) -> Command {
        holonet_against(self.base_url())
    }
}

pub fn holonet_against(base_url: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("holonet");
    cmd.env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .env_remove("HOLONET_BASE_URL")
        .env_remove("HOLONET_MAX_IN_FLIGHT")
        .env_remove("HOLONET_TIMEOUT_SECS")
        .arg("--no-logo")
        .arg("--base-url")
        .arg(base_url);
    cmd
}
