//! Walkthrough of the common ways to set up and use loggers.

use hearth_logging::{
    Logger, LoggerConfig, LoggerRegistry, Severity, get_console_logger, get_file_logger,
    get_full_logger,
};

fn main() -> hearth_logging::Result<()> {
    // Console-only logger.
    let console = get_console_logger("demo", "DEBUG")?;
    console.info("this message goes to the console only");
    console.debug("debug message");
    console.warning("warning message");

    // File-only logger with rotation.
    let file = get_file_logger("demo", "logs/demo.log", "INFO")?;
    file.info("this message goes to the file only");
    file.error("error message in the file");

    // Both console and file.
    let full = get_full_logger("demo", "logs/demo-full.log", "DEBUG")?;
    full.info("this message goes to both console and file");
    full.critical("critical error!");

    // Custom configuration.
    let custom = Logger::new(LoggerConfig {
        name: "custom".to_string(),
        threshold: Severity::Debug,
        log_file: Some("logs/custom.log".into()),
        max_bytes: 5 * 1024 * 1024,
        backup_count: 3,
        format: "{timestamp} - {name} - {level} - {module}:{line} - {message}".to_string(),
        console_output: true,
        file_output: true,
    })?;
    custom.log_at(
        Severity::Info,
        "custom formatted message",
        hearth_logging::callsite!(),
    );

    // Appending an error's context to a log line.
    let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "sensor offline");
    custom.exception("failed to poll temperature sensor", &err);

    // Several named loggers managed through a registry.
    let registry = LoggerRegistry::new();
    registry.register(LoggerConfig {
        name: "sensors".to_string(),
        log_file: Some("logs/sensors.log".into()),
        ..Default::default()
    })?;
    registry.register(LoggerConfig {
        name: "actuators".to_string(),
        threshold: Severity::Warning,
        log_file: Some("logs/actuators.log".into()),
        ..Default::default()
    })?;

    if let Some(sensors) = registry.get("sensors") {
        sensors.info("living room at 21.5 C");
    }

    Ok(())
}
