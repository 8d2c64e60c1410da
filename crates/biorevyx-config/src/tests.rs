#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.site.title, "Bio Revive 360");
    }

    #[test]
    fn test_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            port = 3000
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.site.tagline, default_tagline());
    }

    #[test]
    fn test_parse_full_toml() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 80

            [site]
            title = "Bio Revive 360 (staging)"
            tagline = "Know your organs"
            "#,
        )
        .unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:80");
        assert_eq!(config.site.title, "Bio Revive 360 (staging)");
    }
}
