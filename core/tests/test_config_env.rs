// Egen testbinær: miljøvariabler deles mellom tråder i samme prosess.
use liftlog_core::models::BACKEND_URL_ENV;
use liftlog_core::ReportConfig;

#[test]
fn backend_url_comes_from_env() {
    std::env::set_var(BACKEND_URL_ENV, " https://api.example.org/ ");
    let cfg = ReportConfig::from_env();
    assert_eq!(cfg.backend_url, "https://api.example.org");
    assert_eq!(cfg.page_size, 5);

    std::env::set_var(BACKEND_URL_ENV, "   ");
    assert_eq!(ReportConfig::from_env().backend_url, "http://localhost:8080");

    std::env::remove_var(BACKEND_URL_ENV);
    assert_eq!(ReportConfig::from_env(), ReportConfig::default());
}
