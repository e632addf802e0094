/// Base path of the backend console API, baked in at compile time.
///
/// The OAuth login endpoints live under this prefix on the backend; the
/// frontend only ever navigates or probes, it never implements the
/// handshake itself.
pub fn api_prefix() -> &'static str {
    option_env!("API_PREFIX").unwrap_or("/console/api")
}
