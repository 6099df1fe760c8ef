use crate::error::Result;
use crate::models::ReportConfig;
use std::path::Path;

/// Leser inn rapportkonfig fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-konfig.
/// Felter som mangler i filen får default-verdi.
pub fn load_config(path: impl AsRef<Path>) -> Result<ReportConfig> {
    let path = path.as_ref();
    if path.exists() {
        let contents = std::fs::read_to_string(path)?;
        let cfg: ReportConfig = serde_json::from_str(&contents)?;
        log::info!(
            "config loaded from {} (backend_url={}, page_size={})",
            path.display(),
            cfg.backend_url,
            cfg.page_size
        );
        Ok(cfg)
    } else {
        log::warn!("no config at {}, using defaults", path.display());
        Ok(ReportConfig::default())
    }
}

/// Lagrer konfig til disk som JSON (pretty-print).
pub fn save_config(cfg: &ReportConfig, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path, json)?;
    log::info!("config saved to {}", path.display());
    Ok(())
}
