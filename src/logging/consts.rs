pub const DEFAULT_LOG_DIRECTIVE: &str = "roadview_guessr_server=info";
