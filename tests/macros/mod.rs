use expected_rail::{ensure, try_value, Expected};

#[derive(Debug, PartialEq)]
enum ConfigError {
    Missing(&'static str),
    Invalid(String),
}

impl From<String> for ConfigError {
    fn from(message: String) -> Self {
        ConfigError::Invalid(message)
    }
}

fn lookup(key: &'static str) -> Expected<&'static str, ConfigError> {
    match key {
        "port" => Expected::from_value("8080"),
        "host" => Expected::from_value("localhost"),
        _ => Expected::from_error(ConfigError::Missing(key)),
    }
}

fn parse_port(raw: &str) -> Expected<u16> {
    match raw.parse::<u16>() {
        Ok(port) => Expected::from_value(port),
        Err(e) => Expected::from_error(e.to_string()),
    }
}

fn port_of(key: &'static str) -> Expected<u16, ConfigError> {
    let raw = try_value!(lookup(key));
    let port = try_value!(parse_port(raw));
    ensure!(port >= 1024, ConfigError::Invalid(format!("privileged port {port}")));
    Expected::from_value(port)
}

#[test]
fn try_value_unwraps_success() {
    assert_eq!(port_of("port").value(), 8080);
}

#[test]
fn try_value_returns_the_first_error() {
    assert_eq!(port_of("user").error(), ConfigError::Missing("user"));
}

#[test]
fn try_value_converts_the_error() {
    let err = port_of("host").error();
    assert!(matches!(err, ConfigError::Invalid(message) if message.contains("invalid digit")));
}

#[test]
fn ensure_evaluates_error_lazily() {
    let mut built = 0;
    let mut check = |n: i32| -> Expected<i32, String> {
        ensure!(n > 0, {
            built += 1;
            format!("{n} is not positive")
        });
        Expected::from_value(n)
    };

    assert_eq!(check(1).value(), 1);
    assert_eq!(check(-2).error(), "-2 is not positive");
    assert_eq!(built, 1);
}
