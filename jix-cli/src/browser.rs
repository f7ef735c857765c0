//! Browser launch via python's webbrowser module.
//!
//! Kept as a subprocess rather than a library binding so the mechanism stays
//! swappable behind the `UrlOpener` capability. The URL is embedded in a
//! python raw string, so only single quotes need escaping.

use std::process::Command;

use jix_core::UrlOpener;

pub struct PythonLauncher;

impl UrlOpener for PythonLauncher {
    fn open(&self, url: &str) -> std::io::Result<i32> {
        let safe_url = url.replace('\'', "\\'");
        let python_code = format!("import webbrowser as b; b.open(r'{safe_url}')");
        let status = Command::new("python3").arg("-c").arg(python_code).status()?;
        Ok(status.code().unwrap_or(1))
    }
}
