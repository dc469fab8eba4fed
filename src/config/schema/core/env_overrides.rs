use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) =
            std::env::var("ZENTAO_API_KEY").or_else(|_| std::env::var("DEEPSEEK_API_KEY"))
            && !key.is_empty()
        {
            self.api_key = Some(key);
        }

        if let Ok(model) = std::env::var("ZENTAO_MODEL")
            && !model.is_empty()
        {
            self.default_model = Some(model);
        }

        if let Ok(base_url) = std::env::var("ZENTAO_BASE_URL")
            && !base_url.is_empty()
        {
            self.feedback.base_url = base_url;
        }

        if let Ok(port_str) =
            std::env::var("ZENTAO_GATEWAY_PORT").or_else(|_| std::env::var("PORT"))
            && let Ok(port) = port_str.parse::<u16>()
        {
            self.gateway.port = port;
        }

        if let Ok(host) =
            std::env::var("ZENTAO_GATEWAY_HOST").or_else(|_| std::env::var("HOST"))
            && !host.is_empty()
        {
            self.gateway.host = host;
        }

        if let Ok(temp_str) = std::env::var("ZENTAO_TEMPERATURE")
            && let Ok(temp) = temp_str.parse::<f64>()
            && (0.0..=2.0).contains(&temp)
        {
            self.default_temperature = temp;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_env::EnvScope;
    use super::*;

    #[test]
    fn api_key_prefers_zentao_over_deepseek() {
        let mut env = EnvScope::lock();
        env.set("ZENTAO_API_KEY", "zt-key")
            .set("DEEPSEEK_API_KEY", "ds-key");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.api_key.as_deref(), Some("zt-key"));
    }

    #[test]
    fn deepseek_key_is_used_as_fallback() {
        let mut env = EnvScope::lock();
        env.unset("ZENTAO_API_KEY").set("DEEPSEEK_API_KEY", "ds-key");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.api_key.as_deref(), Some("ds-key"));
    }

    #[test]
    fn port_override_accepts_platform_port() {
        let mut env = EnvScope::lock();
        env.unset("ZENTAO_GATEWAY_PORT").set("PORT", "10555");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.gateway.port, 10555);
    }

    #[test]
    fn invalid_values_are_ignored() {
        let mut env = EnvScope::lock();
        env.set("ZENTAO_GATEWAY_PORT", "not-a-port")
            .set("ZENTAO_TEMPERATURE", "5.0");

        let mut config = Config::default();
        let before_port = config.gateway.port;
        config.apply_env_overrides();
        assert_eq!(config.gateway.port, before_port);
        assert!((config.default_temperature - 0.7).abs() < f64::EPSILON);
    }
}
