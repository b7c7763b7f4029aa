use crate::settings::Settings;

/// Command-line flags that take precedence over every other settings source.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ServerOverrides {
    /// Address to bind the HTTP listener to (e.g. "0.0.0.0").
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind the HTTP listener to.
    #[arg(long)]
    pub port: Option<u16>,
}

impl ServerOverrides {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(host) = &self.host {
            settings.server.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.server.port = port;
        }
    }
}
